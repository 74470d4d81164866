// SPDX-License-Identifier: MIT OR Apache-2.0

//! The logger.
//!
//! [Logger::log] is one synchronous pass over a single line:
//!
//! 1. If the sink does not support the severity, stop.  Nothing is formatted.
//! 2. Work out the emitter name and fit it into the name field.
//! 3. Prefix the template with the bracketed, severity-colored tag and a space.
//! 4. Color the arguments.
//! 5. Translate the (tagged) template with the colored arguments.
//! 6. Hand the result to the sink.
//!
//! Steps 2 to 5 are available on their own as [Logger::compose].

use crate::Severity;
use crate::arg::Arg;
use crate::colorize::ArgumentColorizer;
use crate::config::{Config, DEFAULT_IDENTITY, Identity};
use crate::default_width;
use crate::error::Error;
use crate::log_record::LogRecord;
use crate::name_tag::{Emitter, NameWidth, format_name, render_tag, resolve_emitter};
use crate::number::{DecimalFormatter, NumberFormatter};
use crate::sink::Sink;
use crate::stderr_sink::StdErrorSink;
use crate::style::{AnsiColorizer, Colorizer, Palette};
use crate::translate::{Interpolator, Translator};
use std::borrow::Cow;
use std::sync::Arc;

/**
Decorates lines and writes them to a [Sink].

```
use tagwise::{Arg, Config, InMemorySink, Logger, PlainColorizer, Severity};
use std::sync::Arc;

let sink = Arc::new(InMemorySink::new());
let logger = Logger::with_config(
    Config::new()
        .with_name_width(10)
        .with_colorizer(Arc::new(PlainColorizer))
        .with_sink(sink.clone()),
);
logger
    .log(Severity::Info, "Registry", "%d services at %s", vec![Arg::from(1500), Arg::from("http://reg")])
    .unwrap();
assert_eq!(sink.drain_logs(), "[Registry  ] 1,500 services at http://reg");
```
*/
#[derive(Debug, Clone)]
pub struct Logger {
    name_width: NameWidth,
    identity: Option<String>,
    palette: Palette,
    sink: Arc<dyn Sink>,
    translator: Arc<dyn Translator>,
    colorizer: Arc<dyn Colorizer>,
    numbers: Arc<dyn NumberFormatter>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// A logger with every setting at its default.
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    /// Builds a logger.  Unless `config` names a width, the current process default is copied.
    pub fn with_config(config: Config) -> Self {
        let name_width = config
            .name_width
            .unwrap_or_else(default_width::default_name_width);
        let identity = match config.identity {
            Identity::Default => Some(DEFAULT_IDENTITY.to_string()),
            Identity::Named(name) => Some(name),
            Identity::Anonymous => None,
        };
        Self {
            name_width,
            identity,
            palette: config.palette,
            sink: config.sink.unwrap_or_else(|| Arc::new(StdErrorSink::new())),
            translator: config
                .translator
                .unwrap_or_else(|| Arc::new(Interpolator::new())),
            colorizer: config.colorizer.unwrap_or_else(|| Arc::new(AnsiColorizer)),
            numbers: config
                .numbers
                .unwrap_or_else(|| Arc::new(DecimalFormatter::new())),
        }
    }

    /// Changes the width for loggers constructed from now on.  Existing loggers keep theirs.
    pub fn set_default_name_width(width: impl Into<NameWidth>) {
        default_width::set_default_name_width(width);
    }

    /**
    Writes one line.

    Returns `Ok(())` without doing anything if the sink does not support `severity`.
    Translator and sink failures are returned as they are.
    */
    pub fn log<'a>(
        &self,
        severity: Severity,
        emitter: impl Into<Emitter<'a>>,
        template: &str,
        args: Vec<Arg>,
    ) -> Result<(), Error> {
        if !self.sink.supports(severity) {
            log::trace!("sink does not support {severity}; dropping line");
            return Ok(());
        }
        let text = self.compose(severity, emitter, template, args)?;
        let mut record = LogRecord::new(severity);
        record.log_owned(text);
        self.sink.finish_log_record(record)?;
        Ok(())
    }

    /**
    Like [Logger::log], with the severity given by name.

    A name that is not a [Severity] is ignored, returning `Ok(())`.
    */
    pub fn log_named<'a>(
        &self,
        severity: &str,
        emitter: impl Into<Emitter<'a>>,
        template: &str,
        args: Vec<Arg>,
    ) -> Result<(), Error> {
        match severity.parse::<Severity>() {
            Ok(severity) => self.log(severity, emitter, template, args),
            Err(unknown) => {
                log::debug!("{unknown}; dropping line");
                Ok(())
            }
        }
    }

    /// The text [Logger::log] would hand to the sink, without handing it over.
    pub fn compose<'a>(
        &self,
        severity: Severity,
        emitter: impl Into<Emitter<'a>>,
        template: &str,
        mut args: Vec<Arg>,
    ) -> Result<String, Error> {
        let width = self.name_width;
        let mut template = Cow::Borrowed(template);
        if let Some(tag) = self.tag(severity, emitter.into(), width) {
            template = Cow::Owned(format!("{tag} {template}"));
        }

        ArgumentColorizer::new(&*self.colorizer, &*self.numbers, &self.palette)
            .colorize(&mut args);

        Ok(self.translator.translate(&template, &args)?)
    }

    fn tag(&self, severity: Severity, emitter: Emitter<'_>, width: NameWidth) -> Option<String> {
        let name = resolve_emitter(emitter, self.identity.as_deref())?;
        // the tag is translated along with the template; a `%` in the name stays literal
        let body = format_name(name, width)?.replace('%', "%%");
        Some(render_tag(
            &body,
            self.palette.severity_style(severity),
            &*self.colorizer,
        ))
    }

    /// Flushes the sink.
    pub fn prepare_to_die(&self) {
        self.sink.prepare_to_die();
    }

    pub fn name_width(&self) -> NameWidth {
        self.name_width
    }

    pub fn set_name_width(&mut self, width: impl Into<NameWidth>) {
        self.name_width = width.into();
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// `None` means lines that name no emitter get no tag.
    pub fn set_identity(&mut self, identity: Option<String>) {
        self.identity = identity;
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    pub fn sink(&self) -> &Arc<dyn Sink> {
        &self.sink
    }

    pub fn set_sink(&mut self, sink: Arc<dyn Sink>) {
        self.sink = sink;
    }

    /// The translator shared by every line this logger writes.
    pub fn translator(&self) -> &Arc<dyn Translator> {
        &self.translator
    }

    pub fn set_translator(&mut self, translator: Arc<dyn Translator>) {
        self.translator = translator;
    }

    pub fn colorizer(&self) -> &Arc<dyn Colorizer> {
        &self.colorizer
    }

    pub fn set_colorizer(&mut self, colorizer: Arc<dyn Colorizer>) {
        self.colorizer = colorizer;
    }

    pub fn number_formatter(&self) -> &Arc<dyn NumberFormatter> {
        &self.numbers
    }

    pub fn set_number_formatter(&mut self, numbers: Arc<dyn NumberFormatter>) {
        self.numbers = numbers;
    }
}
