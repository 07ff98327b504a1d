use std::any::Any;
use std::fmt;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use lazy_static::lazy_static;
use parking_lot::Mutex;

use crate::channel::{Channel, ChannelDescriptor, Channels};
use crate::cli;
use crate::config::{ConfigScope, ConfigStack, LogConfig};
use crate::sink::{ConsoleSink, FnSink, Record, Sink};
use crate::sink_registry::{SinkRegistration, SinkRegistry};
use crate::statement::Statement;

/// Name the default console sink is registered under.
pub const CONSOLE_SINK: &str = "console";

/// A complete logging setup: channels, configuration contexts and sinks.
///
/// Everything the log statements need is owned by one `Slog` value, which is
/// built explicitly before use. Most programs use the shared instance from
/// [`global()`]; tests and libraries that want isolation create their own.
///
/// # Dispatch
///
/// When a statement on an enabled channel ends, `Slog`:
///
/// 1. takes a snapshot of the active configuration context,
/// 2. formats the statement's text with it,
/// 3. takes a snapshot of the registered sinks,
/// 4. hands the line to each sink in name order.
///
/// A sink that returns an error or panics is reported on the fallback writer
/// (stderr unless replaced with [`set_fallback`](Slog::set_fallback)); the
/// remaining sinks still get the line and the caller never sees the failure.
///
/// # Examples
///
/// ```
/// # use slog::{FileSink, Slog};
/// # let dir = tempfile::tempdir().unwrap();
/// # let path = dir.path().join("run.log");
/// let slog = Slog::with_console();
/// slog.parse_args(["--log=+debug", "--log=-timestamps"]);
///
/// let _file = slog.register("file", FileSink::new(&path, true)?);
/// slog.info().append("starting worker ").append(3);
/// slog.debug().append("visible because of --log=+debug");
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Slog {
    channels: Channels,
    config: ConfigStack,
    sinks: SinkRegistry,
    fallback: Mutex<Box<dyn Write + Send>>,
}

impl Slog {
    /// Default channels, default configuration, no sinks.
    pub fn new() -> Self {
        Self::with_config(LogConfig::default())
    }

    /// Default channels, `config` as the root context, no sinks.
    pub fn with_config(config: LogConfig) -> Self {
        Self {
            channels: Channels::new(),
            config: ConfigStack::new(config),
            sinks: SinkRegistry::new(),
            fallback: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Like [`Slog::new`], with a [`ConsoleSink`] permanently registered as
    /// `"console"`.
    pub fn with_console() -> Self {
        let slog = Self::new();
        slog.sinks
            .register(CONSOLE_SINK, Arc::new(ConsoleSink::new()))
            .keep();
        slog
    }

    /// Replaces the writer sink failures are reported to.
    pub fn set_fallback(&self, writer: impl Write + Send + 'static) {
        *self.fallback.lock() = Box::new(writer);
    }

    pub fn channels(&self) -> &Channels {
        &self.channels
    }

    pub fn channel(&self, channel: Channel) -> &ChannelDescriptor {
        self.channels.get(channel)
    }

    #[inline]
    pub fn is_enabled(&self, channel: Channel) -> bool {
        self.channels.is_enabled(channel)
    }

    pub fn set_enabled(&self, channel: Channel, enabled: bool) {
        self.channels.set_enabled(channel, enabled);
    }

    /// Starts a statement on `channel`.
    pub fn statement(&self, channel: Channel) -> Statement<'_> {
        Statement::new(self, channel)
    }

    pub fn info(&self) -> Statement<'_> {
        self.statement(Channel::Info)
    }

    pub fn warn(&self) -> Statement<'_> {
        self.statement(Channel::Warn)
    }

    pub fn error(&self) -> Statement<'_> {
        self.statement(Channel::Error)
    }

    pub fn success(&self) -> Statement<'_> {
        self.statement(Channel::Success)
    }

    pub fn verbose(&self) -> Statement<'_> {
        self.statement(Channel::Verbose)
    }

    pub fn debug(&self) -> Statement<'_> {
        self.statement(Channel::Debug)
    }

    /// Snapshot of the active configuration context.
    pub fn config(&self) -> LogConfig {
        self.config.active()
    }

    /// Changes the active configuration context in place.
    pub fn update_config(&self, f: impl FnOnce(&mut LogConfig)) {
        self.config.update(f);
    }

    /// Activates `config` until the returned scope is dropped.
    ///
    /// ```
    /// # use slog::{LogConfig, Slog};
    /// let slog = Slog::new();
    /// {
    ///     let _plain = slog.push_config(slog.config().timestamps(false));
    ///     slog.info().append("no timestamp on this one");
    /// }
    /// assert!(slog.config().timestamps);
    /// ```
    pub fn push_config(&self, config: LogConfig) -> ConfigScope<'_> {
        self.config.push(config)
    }

    pub fn config_stack(&self) -> &ConfigStack {
        &self.config
    }

    pub fn sinks(&self) -> &SinkRegistry {
        &self.sinks
    }

    /// Registers `sink` under `name` for the lifetime of the returned token.
    pub fn register(
        &self,
        name: impl Into<String>,
        sink: impl Sink + 'static,
    ) -> SinkRegistration<'_> {
        self.sinks.register(name, Arc::new(sink))
    }

    /// Registers a sink that is shared with other owners.
    pub fn register_shared(
        &self,
        name: impl Into<String>,
        sink: Arc<dyn Sink>,
    ) -> SinkRegistration<'_> {
        self.sinks.register(name, sink)
    }

    /// Registers a closure as a sink.
    pub fn register_fn<F>(&self, name: impl Into<String>, f: F) -> SinkRegistration<'_>
    where
        F: Fn(&Record<'_>) + Send + Sync + 'static,
    {
        self.register(name, FnSink::new(f))
    }

    /// Registers a closure that can fail as a sink. Errors are reported to
    /// the fallback writer.
    pub fn register_fallible_fn<F>(&self, name: impl Into<String>, f: F) -> SinkRegistration<'_>
    where
        F: Fn(&Record<'_>) -> io::Result<()> + Send + Sync + 'static,
    {
        self.register(name, FnSink::fallible(f))
    }

    /// Applies every `--log=` switch found in `args`, left to right.
    pub fn parse_args<I, S>(&self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for switch in cli::parse_args(args) {
            switch.apply(self);
        }
    }

    /// Applies the `--log=` switches from the process arguments.
    pub fn parse_env_args(&self) {
        self.parse_args(std::env::args());
    }

    /// Formats `text` for `channel` and delivers it to every sink.
    pub(crate) fn dispatch(&self, channel: Channel, text: &str) {
        let descriptor = self.channels.get(channel);
        let config = self.config.active();
        let line = config.format_line(descriptor, text);
        let record = Record::new(descriptor, &line, config);

        for (name, sink) in self.sinks.snapshot() {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| sink.write_line(&record)));
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(e)) => self.report_failure(&name, &e),
                Err(payload) => self.report_failure(&name, &PanicMessage(payload)),
            }
        }
    }

    fn report_failure(&self, sink: &str, reason: &dyn fmt::Display) {
        let mut out = self.fallback.lock();
        let _ = writeln!(out, "slog: logging sink '{}' failed: {}", sink, reason);
        let _ = out.flush();
    }
}

impl Default for Slog {
    fn default() -> Self {
        Self::new()
    }
}

struct PanicMessage(Box<dyn Any + Send>);

impl fmt::Display for PanicMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(s) = self.0.downcast_ref::<&str>() {
            write!(f, "panicked: {}", s)
        } else if let Some(s) = self.0.downcast_ref::<String>() {
            write!(f, "panicked: {}", s)
        } else {
            f.write_str("panicked")
        }
    }
}

lazy_static! {
    /// The shared instance behind [`global()`] and the logging macros.
    ///
    /// Built on first use with [`Slog::with_console`].
    static ref GLOBAL: Slog = Slog::with_console();
}

/// The process-wide `Slog`, created on first use with a console sink.
pub fn global() -> &'static Slog {
    &GLOBAL
}
