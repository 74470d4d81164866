// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logger configuration.
//!
//! A [Config] is consumed by [Logger::with_config](crate::Logger::with_config).  Anything left
//! unset gets a default when the logger is built:
//!
//! | Setting          | Default                                                   |
//! |------------------|-----------------------------------------------------------|
//! | name width       | [default_name_width](crate::default_name_width) at build time |
//! | identity         | `"Logger"`                                                |
//! | sink             | [StdErrorSink](crate::StdErrorSink)                       |
//! | translator       | [Interpolator::new](crate::Interpolator::new)             |
//! | colorizer        | [AnsiColorizer](crate::AnsiColorizer)                     |
//! | number formatter | [DecimalFormatter::new](crate::DecimalFormatter::new)     |
//! | palette          | [Palette::default](crate::Palette)                        |
//!
//! # Environment
//!
//! [Config::from_env] reads:
//!
//! * `TAGWISE_NAME_WIDTH`: a non-negative integer, or `off` / `false` / `none`.
//! * `NO_COLOR`: if set, styling is turned off.
//! * `TAGWISE_FORCE_COLOR`: if set, styling is on even when `NO_COLOR` is set.

use crate::error::ConfigError;
use crate::name_tag::NameWidth;
use crate::number::NumberFormatter;
use crate::sink::Sink;
use crate::style::{AnsiColorizer, Colorizer, Palette, PlainColorizer};
use crate::translate::Translator;
use std::sync::Arc;

pub const NAME_WIDTH_VAR: &str = "TAGWISE_NAME_WIDTH";
pub const NO_COLOR_VAR: &str = "NO_COLOR";
pub const FORCE_COLOR_VAR: &str = "TAGWISE_FORCE_COLOR";

/// The identity a logger tags lines with when the caller names no emitter.
pub const DEFAULT_IDENTITY: &str = "Logger";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Identity {
    Default,
    Named(String),
    Anonymous,
}

/// Settings for a [Logger](crate::Logger).
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) name_width: Option<NameWidth>,
    pub(crate) identity: Identity,
    pub(crate) sink: Option<Arc<dyn Sink>>,
    pub(crate) translator: Option<Arc<dyn Translator>>,
    pub(crate) colorizer: Option<Arc<dyn Colorizer>>,
    pub(crate) numbers: Option<Arc<dyn NumberFormatter>>,
    pub(crate) palette: Palette,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        Self {
            name_width: None,
            identity: Identity::Default,
            sink: None,
            translator: None,
            colorizer: None,
            numbers: None,
            palette: Palette::default(),
        }
    }

    /// Reads the settings described in the module docs from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [Config::from_env], with `lookup` standing in for the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::new();
        if let Some(value) = lookup(NAME_WIDTH_VAR) {
            config.name_width = Some(parse_width(&value)?);
        }
        if lookup(FORCE_COLOR_VAR).is_some() {
            config.colorizer = Some(Arc::new(AnsiColorizer));
        } else if lookup(NO_COLOR_VAR).is_some() {
            config.colorizer = Some(Arc::new(PlainColorizer));
        }
        Ok(config)
    }

    /// Overrides the process-wide default width for this logger.
    pub fn with_name_width(mut self, width: impl Into<NameWidth>) -> Self {
        self.name_width = Some(width.into());
        self
    }

    /// The name used when a line names no emitter.
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Identity::Named(identity.into());
        self
    }

    /// Uses the unqualified name of `T` as the identity.
    ///
    /// ```
    /// struct ConnectionPool;
    /// let logger = tagwise::Logger::with_config(tagwise::Config::new().identity_of::<ConnectionPool>());
    /// assert_eq!(logger.identity(), Some("ConnectionPool"));
    /// ```
    pub fn identity_of<T: ?Sized>(self) -> Self {
        self.with_identity(short_type_name::<T>())
    }

    /// Lines that name no emitter get no tag.
    pub fn without_identity(mut self) -> Self {
        self.identity = Identity::Anonymous;
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn with_translator(mut self, translator: Arc<dyn Translator>) -> Self {
        self.translator = Some(translator);
        self
    }

    pub fn with_colorizer(mut self, colorizer: Arc<dyn Colorizer>) -> Self {
        self.colorizer = Some(colorizer);
        self
    }

    pub fn with_number_formatter(mut self, numbers: Arc<dyn NumberFormatter>) -> Self {
        self.numbers = Some(numbers);
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// The explicit width, if one was set.
    pub fn name_width(&self) -> Option<NameWidth> {
        self.name_width
    }
}

fn parse_width(value: &str) -> Result<NameWidth, ConfigError> {
    let trimmed = value.trim();
    if ["off", "false", "none"]
        .iter()
        .any(|word| trimmed.eq_ignore_ascii_case(word))
    {
        return Ok(NameWidth::Disabled);
    }
    trimmed
        .parse::<usize>()
        .map(NameWidth::Chars)
        .map_err(|_| ConfigError::InvalidWidth {
            value: value.to_string(),
        })
}

/// `a::b::Thing<c::D>` -> `Thing`
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_sets_nothing() {
        let config = Config::from_lookup(env(&[])).unwrap();
        assert_eq!(config.name_width(), None);
        assert!(config.colorizer.is_none());
        assert_eq!(config.identity, Identity::Default);
    }

    #[test]
    fn width_from_environment() {
        let config = Config::from_lookup(env(&[(NAME_WIDTH_VAR, " 12 ")])).unwrap();
        assert_eq!(config.name_width(), Some(NameWidth::Chars(12)));
        let config = Config::from_lookup(env(&[(NAME_WIDTH_VAR, "OFF")])).unwrap();
        assert_eq!(config.name_width(), Some(NameWidth::Disabled));
    }

    #[test]
    fn bad_width_is_rejected() {
        let err = Config::from_lookup(env(&[(NAME_WIDTH_VAR, "-4")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidWidth {
                value: "-4".to_string()
            }
        );
        assert!(Config::from_lookup(env(&[(NAME_WIDTH_VAR, "wide")])).is_err());
    }

    #[test]
    fn color_switches() {
        let plain = Config::from_lookup(env(&[(NO_COLOR_VAR, "1")])).unwrap();
        let painted = plain.colorizer.expect("colorizer set").paint("x", crate::Style::Red);
        assert_eq!(painted, "x");

        let forced =
            Config::from_lookup(env(&[(NO_COLOR_VAR, "1"), (FORCE_COLOR_VAR, "1")])).unwrap();
        let painted = forced.colorizer.expect("colorizer set").paint("x", crate::Style::Red);
        assert!(crate::is_colorized(&painted));
    }

    #[test]
    fn short_names() {
        struct Plain;
        #[allow(dead_code)]
        struct Generic<T>(T);
        assert_eq!(short_type_name::<Plain>(), "Plain");
        assert_eq!(short_type_name::<Generic<Plain>>(), "Generic");
        assert_eq!(short_type_name::<str>(), "str");
    }

    #[test]
    fn identity_builders() {
        assert_eq!(
            Config::new().with_identity("Cache").identity,
            Identity::Named("Cache".to_string())
        );
        assert_eq!(Config::new().without_identity().identity, Identity::Anonymous);
    }
}
