//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# tagwise

tagwise decorates log lines before they reach whatever actually writes them.

# The problem

Several components logging to the same terminal produce a wall of text where it is hard to
see who said what, and where the interesting values (a count, a path, a URL) are buried in the
prose around them.

tagwise fixes both with two decorations:

* Every line starts with the name of its emitter in a field of constant width, colored by
  severity:

  ```text
  [Registry       ] 3 services registered
  [*ectionManager ] connected to http://db:5432
  ```

  Names that don't fit keep their tail, marked with `*`.

* Every argument substituted into the message is colored by what it is: numbers, URLs,
  paths, booleans and other text each get their own style.

# The pipeline

A call to [Logger::log] goes through these steps, in this order:

1.  The sink is asked whether it [supports](Sink::supports) the severity.  If not, the line
    is dropped and nothing else happens.
2.  The emitter name is fitted into the name field ([format_name]).
3.  The bracketed tag, painted in the severity's color, and a space are put in front of the
    template.
4.  The arguments are colored ([ArgumentColorizer]).
5.  The [Translator] resolves the tagged template with the colored arguments.
6.  The result is handed to the [Sink].

Every step is synchronous.  Translator and sink failures come back as [Error].

# Collaborators

Each of the moving parts is a trait, with a reference implementation:

| Trait             | Ships with                                         |
|-------------------|----------------------------------------------------|
| [Sink]            | [StdErrorSink], [InMemorySink], [LogCrateSink]     |
| [Translator]      | [Interpolator]                                     |
| [Colorizer]       | [AnsiColorizer], [PlainColorizer]                  |
| [NumberFormatter] | [DecimalFormatter]                                 |

# Example

```rust
use tagwise::{Arg, Config, InMemorySink, Logger, PlainColorizer, Severity};
use std::sync::Arc;

let sink = Arc::new(InMemorySink::new());
let logger = Logger::with_config(
    Config::new()
        .with_name_width(10)
        .with_colorizer(Arc::new(PlainColorizer))
        .with_sink(sink.clone()),
);

logger.log(Severity::Info, "DB", "%d rows in %s", vec![Arg::from(2048), Arg::from("/data")]).unwrap();
tagwise::warn!(logger, "ServiceRegistry", "{who} left", Arg::fields([("who", "node-7")])).unwrap();

assert_eq!(
    sink.drain_logs(),
    "[DB        ] 2,048 rows in /data\n[*eRegistry] node-7 left"
);
```

# Name width

Each logger copies the process-wide default width when it is built, unless its [Config]
names one.  [set_default_name_width] changes the default for loggers built afterwards.
*/

mod arg;
mod colorize;
mod config;
pub mod default_width;
mod error;
mod facade;
mod inmemory_sink;
mod level;
pub mod log_bridge;
mod log_record;
mod macros;
mod name_tag;
mod number;
mod sink;
mod stderr_sink;
mod style;
mod translate;

pub use arg::Arg;
pub use colorize::ArgumentColorizer;
pub use config::{Config, DEFAULT_IDENTITY, FORCE_COLOR_VAR, NAME_WIDTH_VAR, NO_COLOR_VAR};
pub use default_width::{default_name_width, replace_default_name_width, set_default_name_width};
pub use error::{ConfigError, Error, SinkError, TranslateError, UnknownSeverity};
pub use facade::Logger;
pub use inmemory_sink::InMemorySink;
pub use level::Severity;
pub use log_bridge::LogCrateSink;
pub use log_record::LogRecord;
pub use name_tag::{Emitter, NameWidth, format_name, render_tag, resolve_emitter};
pub use number::{DecimalFormatter, NumberFormatter};
pub use sink::Sink;
pub use stderr_sink::StdErrorSink;
pub use style::{AnsiColorizer, Colorizer, ESCAPE_MARKER, Palette, PlainColorizer, Style, is_colorized};
pub use translate::{Interpolator, Translator};
