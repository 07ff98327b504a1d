use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::channel::{Channel, ChannelDescriptor};
use crate::color::{term_supports_ansi, ANSI_RESET};
use crate::config::LogConfig;

/// One formatted line on its way to a sink.
///
/// Carries the live channel descriptor, the fully formatted line (without a
/// line terminator) and the configuration snapshot the line was formatted
/// with.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    channel: &'a ChannelDescriptor,
    line: &'a str,
    config: LogConfig,
}

impl<'a> Record<'a> {
    pub fn new(channel: &'a ChannelDescriptor, line: &'a str, config: LogConfig) -> Self {
        Self {
            channel,
            line,
            config,
        }
    }

    pub fn channel(&self) -> &'a ChannelDescriptor {
        self.channel
    }

    pub fn line(&self) -> &'a str {
        self.line
    }

    pub fn config(&self) -> LogConfig {
        self.config
    }

    pub fn use_color(&self) -> bool {
        self.config.use_color
    }
}

/// Destination for formatted log lines.
///
/// Implementations decide what happens with a line: print it, store it,
/// forward it to another logging system. Sinks own whatever resource they
/// write to. A sink adds its own line terminator.
///
/// A sink may fail, either by returning an error or by panicking. Both are
/// caught by the dispatcher, reported on the fallback diagnostic writer and
/// never reach the code that logged the line.
///
/// # Usage
///
/// ```
/// # use slog::{Record, Sink};
/// # use std::io;
/// # use std::sync::Mutex;
/// struct Collect(Mutex<Vec<String>>);
///
/// impl Sink for Collect {
///     fn write_line(&self, record: &Record<'_>) -> io::Result<()> {
///         self.0.lock().unwrap().push(record.line().to_string());
///         Ok(())
///     }
/// }
/// ```
pub trait Sink: Send + Sync {
    fn write_line(&self, record: &Record<'_>) -> io::Result<()>;
}

/// Writes lines to stdout, or stderr for channels that ask for it.
///
/// Whether ANSI color escapes may be used is decided once, when the sink is
/// created, from the `TERM` environment variable. Colors are only emitted if
/// that check passed and the line's configuration has `use_color` set.
pub struct ConsoleSink {
    ansi: bool,
    stdout: Mutex<Box<dyn Write + Send>>,
    stderr: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        let term = std::env::var("TERM").ok();
        Self {
            ansi: term_supports_ansi(term.as_deref()),
            stdout: Mutex::new(Box::new(io::stdout())),
            stderr: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Overrides the terminal detection.
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Redirects both streams, mostly useful for capturing output.
    pub fn with_writers(
        mut self,
        stdout: impl Write + Send + 'static,
        stderr: impl Write + Send + 'static,
    ) -> Self {
        self.stdout = Mutex::new(Box::new(stdout));
        self.stderr = Mutex::new(Box::new(stderr));
        self
    }

    pub fn ansi(&self) -> bool {
        self.ansi
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&self, record: &Record<'_>) -> io::Result<()> {
        let channel = record.channel();
        let target = if channel.use_stderr() {
            &self.stderr
        } else {
            &self.stdout
        };
        let mut out = target.lock();

        if self.ansi && record.use_color() {
            writeln!(
                out,
                "{}{}{}",
                channel.color().ansi_escape(),
                record.line(),
                ANSI_RESET
            )?;
        } else {
            writeln!(out, "{}", record.line())?;
        }
        out.flush()
    }
}

/// Appends lines to a plain text file, one record per line.
///
/// The file is opened when the sink is created. Writes go straight to the
/// file handle; there is no buffering in the sink itself.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Opens `path` for writing, creating it if needed.
    ///
    /// With `append` the existing contents are kept and new lines go to the
    /// end; without it the file is truncated first.
    ///
    /// # Errors
    ///
    /// Returns the I/O error (with the path added to its message) if the
    /// file cannot be opened for writing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use slog::{FileSink, Slog};
    /// # let dir = tempfile::tempdir().unwrap();
    /// # let path = dir.path().join("app.log");
    /// let slog = Slog::new();
    /// let _file = slog.register("file", FileSink::new(&path, true)?);
    /// slog.info().append("written to disk");
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn new(path: impl AsRef<Path>, append: bool) -> io::Result<Self> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.create(true);
        if append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }

        let file = options.open(path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("failed to open log file '{}' for write: {}", path.display(), e),
            )
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write_line(&self, record: &Record<'_>) -> io::Result<()> {
        let mut file = self.file.lock();
        writeln!(file, "{}", record.line())
    }
}

type SinkFn = dyn Fn(&Record<'_>) -> io::Result<()> + Send + Sync;

/// Sink backed by a caller supplied function.
///
/// [`FnSink::new`] wraps a callback that cannot fail; [`FnSink::fallible`]
/// wraps one that reports errors through `io::Result`. A panicking callback
/// counts as a failure either way.
///
/// ```
/// # use slog::{FnSink, LogConfig, Slog};
/// # use std::sync::{Arc, Mutex};
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let slog = Slog::new();
/// slog.update_config(|c| *c = LogConfig::plain());
///
/// let sink_seen = seen.clone();
/// let _reg = slog.register("capture", FnSink::new(move |r| {
///     sink_seen.lock().unwrap().push(r.line().to_string());
/// }));
///
/// slog.info().append("hello");
/// assert_eq!(*seen.lock().unwrap(), vec!["hello".to_string()]);
/// ```
pub struct FnSink {
    f: Box<SinkFn>,
}

impl FnSink {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Record<'_>) + Send + Sync + 'static,
    {
        Self::fallible(move |record: &Record<'_>| {
            f(record);
            Ok(())
        })
    }

    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&Record<'_>) -> io::Result<()> + Send + Sync + 'static,
    {
        Self { f: Box::new(f) }
    }
}

impl Sink for FnSink {
    fn write_line(&self, record: &Record<'_>) -> io::Result<()> {
        (self.f)(record)
    }
}

impl fmt::Debug for FnSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnSink")
    }
}

/// `log` crate level used when forwarding a channel to another backend.
pub fn log_level(channel: Channel) -> log::Level {
    match channel {
        Channel::Error => log::Level::Error,
        Channel::Warn => log::Level::Warn,
        Channel::Info | Channel::Success => log::Level::Info,
        Channel::Verbose => log::Level::Debug,
        Channel::Debug => log::Level::Trace,
    }
}

/// Forwards lines to whatever logger is installed behind the `log` facade.
///
/// Lines keep their prefixes; the channel becomes the record's level.
pub struct LogFacadeSink {
    target: &'static str,
}

impl LogFacadeSink {
    pub fn new() -> Self {
        Self { target: "slog" }
    }

    pub fn with_target(target: &'static str) -> Self {
        Self { target }
    }
}

impl Default for LogFacadeSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for LogFacadeSink {
    fn write_line(&self, record: &Record<'_>) -> io::Result<()> {
        let level = log_level(record.channel().channel());
        log::log!(target: self.target, level, "{}", record.line());
        Ok(())
    }
}

/// Forwards lines as `tracing` events with target `slog`.
///
/// The channel name is attached as the `channel` field.
#[derive(Debug, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn write_line(&self, record: &Record<'_>) -> io::Result<()> {
        let channel = record.channel().name();
        let line = record.line();
        match record.channel().channel() {
            Channel::Error => tracing::error!(target: "slog", channel, "{}", line),
            Channel::Warn => tracing::warn!(target: "slog", channel, "{}", line),
            Channel::Info | Channel::Success => tracing::info!(target: "slog", channel, "{}", line),
            Channel::Verbose => tracing::debug!(target: "slog", channel, "{}", line),
            Channel::Debug => tracing::trace!(target: "slog", channel, "{}", line),
        }
        Ok(())
    }
}
