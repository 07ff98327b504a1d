//! # slog
//!
//! A small channel based logging library:
//!
//! * **Channels**: `info`, `warn`, `error`, `success`, `verbose` and `debug`,
//!   each switched on and off independently at runtime (or compiled out with
//!   a `disable-*` cargo feature)
//! * **Zero work when disabled**: values logged on a disabled channel are
//!   never formatted
//! * **Scoped sinks**: sinks are registered by name for the lifetime of a
//!   token; registering a name that is taken shadows the old sink and
//!   restores it when the token is dropped
//! * **Nested configuration**: timestamps, labels, priorities and colors can
//!   be overridden for a scope and come back when the scope ends
//! * **Fail-open**: a failing sink is reported on a fallback writer and never
//!   disturbs the code that logged
//!
//! ## Main Components
//!
//! * `Slog`: owns the channels, the configuration stack and the sinks
//! * `Statement`: one log statement, dispatched when it is dropped
//! * `Sink`: destination trait, with `ConsoleSink`, `FileSink`, `FnSink`,
//!   `LogFacadeSink` and `TracingSink` implementations
//! * `cli`: `--log=[+|-]<name>` command line switches
//!
//! ## Quick Start
//!
//! ```
//! use slog::{FileSink, LogConfig, Slog};
//! # let dir = tempfile::tempdir().unwrap();
//! # let path = dir.path().join("app.log");
//!
//! let slog = Slog::with_console();
//! slog.parse_args(["--log=+verbose"]);
//!
//! // Also log to a file for as long as `_file` lives
//! let _file = slog.register("file", FileSink::new(&path, true)?);
//!
//! slog.info().append("Temperature: ").append(25.5).append(" C");
//! slog.verbose().append("only shown with --log=+verbose");
//!
//! {
//!     // Bare lines while this scope lives
//!     let _plain = slog.push_config(LogConfig::plain());
//!     slog.success().append("done");
//! }
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod channel;
pub mod cli;
pub mod color;
pub mod config;
mod macros;
pub mod sink;
pub mod sink_registry;
pub mod slog;
pub mod statement;
pub mod timestamp;

pub use channel::{Channel, ChannelDescriptor, Channels};
pub use color::Color;
pub use config::{ConfigScope, ConfigStack, LogConfig};
pub use sink::{ConsoleSink, FileSink, FnSink, LogFacadeSink, Record, Sink, TracingSink};
pub use sink_registry::{SinkRegistration, SinkRegistry};
pub use slog::{global, Slog, CONSOLE_SINK};
pub use statement::Statement;

/// Crate version as `major.minor.patch`.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub fn major_version() -> u32 {
    env!("CARGO_PKG_VERSION_MAJOR").parse().unwrap_or(0)
}

pub fn minor_version() -> u32 {
    env!("CARGO_PKG_VERSION_MINOR").parse().unwrap_or(0)
}

pub fn patch_version() -> u32 {
    env!("CARGO_PKG_VERSION_PATCH").parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parts() {
        let joined = format!("{}.{}.{}", major_version(), minor_version(), patch_version());
        assert!(version().starts_with(&joined));
    }
}
