// SPDX-License-Identifier: MIT OR Apache-2.0

//! Template resolution.
//!
//! A [Translator] turns a template and its (already colored) arguments into display text.
//! [Interpolator] is the implementation that ships with the crate.  It does two things:
//!
//! 1.  Optional catalog lookup.  If the template, verbatim, is a key of the catalog, the
//!     catalog entry replaces it.  Since the name tag is part of the template by the time it
//!     gets here, catalog entries only match untagged lines.
//! 2.  Placeholder substitution:
//!     * `%s`, `%d`, `%i`, `%f`, `%j`, `%o`, `%O` take the next positional argument.
//!       [Arg::Fields] arguments are not positional and are skipped.
//!     * `%%` is a literal `%`.
//!     * `{key}` takes the value of `key` from the first [Arg::Fields] argument that has one.
//!       Keys are ASCII alphanumerics plus `_`, `.` and `-`.
//!
//! In the default lenient mode a placeholder with nothing to substitute is left in the output
//! verbatim.  [Interpolator::strict] turns that into a [TranslateError].

use crate::arg::Arg;
use crate::error::TranslateError;
use std::collections::HashMap;
use std::fmt::Debug;

/// Resolves a template into display text.
pub trait Translator: Debug + Send + Sync {
    fn translate(&self, template: &str, args: &[Arg]) -> Result<String, TranslateError>;
}

const CONVERSIONS: [char; 7] = ['s', 'd', 'i', 'f', 'j', 'o', 'O'];

fn is_key(candidate: &str) -> bool {
    !candidate.is_empty()
        && candidate
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
}

/**
Placeholder interpolation with an optional message catalog.

```
use tagwise::{Arg, Interpolator, Translator};
let translator = Interpolator::new().with_entry("disk full", "disque plein: %s");
let text = translator.translate("disk full", &[Arg::from("/var")]).unwrap();
assert_eq!(text, "disque plein: /var");

let text = translator
    .translate("{user} has %d items", &[Arg::from(3), Arg::fields([("user", "ana")])])
    .unwrap();
assert_eq!(text, "ana has 3 items");
```
*/
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Interpolator {
    catalog: HashMap<String, String>,
    strict: bool,
}

impl Interpolator {
    /// Lenient, with an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Unmatched placeholders are errors.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }

    pub fn with_entry(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.catalog.insert(key.into(), text.into());
        self
    }

    pub fn with_catalog<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.catalog
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    fn interpolate(&self, template: &str, args: &[Arg]) -> Result<String, TranslateError> {
        let mut out = String::with_capacity(template.len());
        let mut positional = args.iter().filter(|arg| !arg.is_fields());
        let mut position = 0;
        let mut chars = template.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            match c {
                '%' => match chars.peek().map(|&(_, next)| next) {
                    Some('%') => {
                        chars.next();
                        out.push('%');
                    }
                    Some(conversion) if CONVERSIONS.contains(&conversion) => {
                        chars.next();
                        match positional.next() {
                            Some(arg) => out.push_str(&arg.to_string()),
                            None if self.strict => {
                                return Err(TranslateError::MissingArgument { position });
                            }
                            None => {
                                out.push('%');
                                out.push(conversion);
                            }
                        }
                        position += 1;
                    }
                    _ => out.push('%'),
                },
                '{' => {
                    let rest = &template[start + 1..];
                    match rest.find('}') {
                        Some(end) if is_key(&rest[..end]) => {
                            let key = &rest[..end];
                            match args.iter().find_map(|arg| arg.field(key)) {
                                Some(value) => out.push_str(value),
                                None if self.strict => {
                                    return Err(TranslateError::UnknownKey {
                                        key: key.to_string(),
                                    });
                                }
                                None => out.push_str(&template[start..start + end + 2]),
                            }
                            // skip the key and the closing brace
                            let close = start + 1 + end;
                            while chars.next_if(|&(i, _)| i <= close).is_some() {}
                        }
                        _ => out.push('{'),
                    }
                }
                other => out.push(other),
            }
        }
        Ok(out)
    }
}

impl Translator for Interpolator {
    fn translate(&self, template: &str, args: &[Arg]) -> Result<String, TranslateError> {
        let template = self
            .catalog
            .get(template)
            .map_or(template, String::as_str);
        self.interpolate(template, args)
    }
}
