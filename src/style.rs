// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal styling.
//!
//! Styling goes through the [Colorizer] trait so that callers can swap in whatever
//! their terminal (or their test) needs.  Two implementations ship with the crate:
//!
//! * [AnsiColorizer] always emits ANSI escape sequences, via the `console` crate.
//! * [PlainColorizer] never does.
//!
//! Deciding which one a given environment wants is left to the caller
//! (or to [Config::from_env](crate::Config::from_env), which only looks at `NO_COLOR`).
//!
//! # The colorized marker
//!
//! Every styled string produced by a [Colorizer] must contain [ESCAPE_MARKER] (ESC, `0x1B`).
//! [is_colorized] tests for that byte and nothing else, which is how argument coloring
//! avoids wrapping a string twice.

use crate::Severity;
use std::collections::HashMap;
use std::fmt::Debug;

/// The byte that marks a string as already styled.
pub const ESCAPE_MARKER: char = '\x1b';

/// Returns true if `text` already carries terminal styling.
pub fn is_colorized(text: &str) -> bool {
    text.contains(ESCAPE_MARKER)
}

/// A named style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Bright black.  Also the fallback for severities without a palette entry.
    #[default]
    Grey,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    /// Bold white
    WhiteBold,
}

/// Wraps text in a style.
pub trait Colorizer: Debug + Send + Sync {
    /**
    Returns `text` rendered in `style`.

    If the result carries any styling at all it must contain [ESCAPE_MARKER].
    */
    fn paint(&self, text: &str, style: Style) -> String;
}

/// Emits ANSI escapes unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnsiColorizer;

impl AnsiColorizer {
    pub const fn new() -> Self {
        Self
    }

    fn console_style(style: Style) -> console::Style {
        // force_styling, since terminal detection is the caller's business
        let base = console::Style::new().force_styling(true);
        match style {
            Style::Grey => base.black().bright(),
            Style::Red => base.red(),
            Style::Green => base.green(),
            Style::Yellow => base.yellow(),
            Style::Blue => base.blue(),
            Style::Magenta => base.magenta(),
            Style::Cyan => base.cyan(),
            Style::WhiteBold => base.white().bold(),
        }
    }
}

impl Colorizer for AnsiColorizer {
    fn paint(&self, text: &str, style: Style) -> String {
        Self::console_style(style).apply_to(text).to_string()
    }
}

/// Returns text unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlainColorizer;

impl PlainColorizer {
    pub const fn new() -> Self {
        Self
    }
}

impl Colorizer for PlainColorizer {
    fn paint(&self, text: &str, _style: Style) -> String {
        text.to_string()
    }
}

/**
Which [Style] to use for what.

The severity table starts with one entry per severity.  Entries can be removed; a
severity without an entry is painted in [Style::Grey].
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    severities: HashMap<Severity, Style>,
    /// booleans and absent values
    pub muted: Style,
    /// numbers
    pub alert: Style,
    /// URLs
    pub emphasis: Style,
    /// filesystem-looking paths
    pub path: Style,
    /// any other text
    pub literal: Style,
}

impl Default for Palette {
    fn default() -> Self {
        let severities = HashMap::from([
            (Severity::Trace, Style::Blue),
            (Severity::Debug, Style::Cyan),
            (Severity::Info, Style::Green),
            (Severity::Log, Style::Grey),
            (Severity::Warn, Style::Yellow),
            (Severity::Error, Style::Red),
            (Severity::Fatal, Style::Magenta),
        ]);
        Self {
            severities,
            muted: Style::Grey,
            alert: Style::Red,
            emphasis: Style::WhiteBold,
            path: Style::Cyan,
            literal: Style::Yellow,
        }
    }
}

impl Palette {
    /// The style for a severity's name tag.
    pub fn severity_style(&self, severity: Severity) -> Style {
        self.severities
            .get(&severity)
            .copied()
            .unwrap_or_default()
    }

    pub fn set_severity_style(&mut self, severity: Severity, style: Style) {
        self.severities.insert(severity, style);
    }

    /// Removes the entry, so the severity falls back to [Style::Grey].
    pub fn clear_severity_style(&mut self, severity: Severity) {
        self.severities.remove(&severity);
    }
}
