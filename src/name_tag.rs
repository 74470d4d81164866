// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fixed-width name tag.
//!
//! Every line can be prefixed with the name of whatever emitted it, in a field of constant
//! width so that the messages line up:
//!
//! ```text
//! [Registry       ] service up
//! [*ectionManager ] 3 connections
//! ```
//!
//! Names longer than the field keep their tail and are marked with a leading `*`.
//! Widths are counted in characters, not bytes.

use crate::style::{Colorizer, Style};

/// Width of the name field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameWidth {
    /// No name tag at all.
    Disabled,
    /// Exactly this many characters.  Zero behaves like [NameWidth::Disabled].
    Chars(usize),
}

impl NameWidth {
    /// The width used until [set_default_name_width](crate::set_default_name_width) says otherwise.
    pub const DEFAULT: NameWidth = NameWidth::Chars(15);
}

impl Default for NameWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<usize> for NameWidth {
    fn from(value: usize) -> Self {
        NameWidth::Chars(value)
    }
}

/// Who is emitting a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Emitter<'a> {
    /// Emit no name tag for this line.
    Suppressed,
    /// Use the logger's own identity.
    #[default]
    Default,
    Named(&'a str),
}

impl<'a> From<&'a str> for Emitter<'a> {
    fn from(value: &'a str) -> Self {
        if value.is_empty() {
            Emitter::Default
        } else {
            Emitter::Named(value)
        }
    }
}

impl<'a> From<&'a String> for Emitter<'a> {
    fn from(value: &'a String) -> Self {
        value.as_str().into()
    }
}

impl<'a> From<Option<&'a str>> for Emitter<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Emitter::Default, Into::into)
    }
}

/// The name to put in the tag, if any.
///
/// An empty [Emitter::Named] counts as [Emitter::Default].
pub fn resolve_emitter<'a>(emitter: Emitter<'a>, identity: Option<&'a str>) -> Option<&'a str> {
    match emitter {
        Emitter::Suppressed => None,
        Emitter::Named(name) if !name.is_empty() => Some(name),
        Emitter::Named(_) | Emitter::Default => identity.filter(|name| !name.is_empty()),
    }
}

/**
Fits `name` into `width` characters.

```
use tagwise::{NameWidth, format_name};
assert_eq!(format_name("DB", NameWidth::Chars(10)).as_deref(), Some("DB        "));
assert_eq!(format_name("ServiceRegistry", NameWidth::Chars(5)).as_deref(), Some("*stry"));
assert_eq!(format_name("Cache", NameWidth::Chars(5)).as_deref(), Some("Cache"));
assert_eq!(format_name("Cache", NameWidth::Chars(0)), None);
```
*/
pub fn format_name(name: &str, width: NameWidth) -> Option<String> {
    let width = match width {
        NameWidth::Disabled | NameWidth::Chars(0) => return None,
        NameWidth::Chars(width) => width,
    };
    let len = name.chars().count();
    let body = if len > width {
        let mut truncated = String::with_capacity(name.len());
        truncated.push('*');
        truncated.extend(name.chars().skip(len - width + 1));
        truncated
    } else {
        format!("{name:<width$}")
    };
    Some(body)
}

/// Brackets a formatted name and paints it.
pub fn render_tag(body: &str, style: Style, colorizer: &dyn Colorizer) -> String {
    colorizer.paint(&format!("[{body}]"), style)
}
