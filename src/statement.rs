use std::fmt::{self, Write as _};
use std::mem;

use crate::channel::Channel;
use crate::slog::Slog;

/// One log statement: accumulates text and dispatches it when dropped.
///
/// A statement is bound to a single channel. Values are appended with
/// [`append`](Statement::append) (or [`push`](Statement::push), or `write!`),
/// each formatted through its `Display` implementation. When the statement
/// goes out of scope the accumulated text is formatted with the active
/// configuration context and handed to every registered sink, exactly once.
///
/// While the channel is disabled, appends are skipped without formatting the
/// value, and dropping the statement does nothing at all. Expensive values
/// therefore cost nothing on a disabled channel.
///
/// The flag is read again at drop. A channel disabled after some appends
/// dispatches nothing. A channel enabled after its appends were skipped
/// dispatches only what was appended since, possibly an empty line.
///
/// A statement with nothing appended still emits a line on an enabled
/// channel: the prefixes alone, or an empty line when they are switched off.
///
/// Statements are not `Clone`. Moving one moves its buffer along with the
/// obligation to dispatch, so a statement is dispatched once no matter how
/// often it is handed around.
///
/// # Examples
///
/// ```
/// # use slog::Slog;
/// let slog = Slog::new();
/// slog.info().append("loaded ").append(3).append(" plugins");
///
/// let mut stmt = slog.warn();
/// for name in ["a", "b"] {
///     stmt.push(name).push(' ');
/// }
/// // dispatched here
/// drop(stmt);
/// ```
pub struct Statement<'a> {
    slog: &'a Slog,
    channel: Channel,
    buffer: String,
}

impl<'a> Statement<'a> {
    pub(crate) fn new(slog: &'a Slog, channel: Channel) -> Self {
        Self {
            slog,
            channel,
            buffer: String::new(),
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Whether the bound channel is enabled right now.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.slog.is_enabled(self.channel)
    }

    /// Appends `value` and hands the statement back, for chaining.
    pub fn append<T: fmt::Display>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Appends `value` in place.
    pub fn push<T: fmt::Display>(&mut self, value: T) -> &mut Self {
        if self.is_enabled() {
            let _ = write!(self.buffer, "{}", value);
        }
        self
    }

    /// Text accumulated so far, without any prefixes.
    pub fn text(&self) -> &str {
        &self.buffer
    }
}

impl fmt::Write for Statement<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.is_enabled() {
            self.buffer.push_str(s);
        }
        Ok(())
    }
}

impl fmt::Debug for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Statement")
            .field("channel", &self.channel)
            .field("buffer", &self.buffer)
            .finish()
    }
}

impl Drop for Statement<'_> {
    fn drop(&mut self) {
        if !self.is_enabled() {
            return;
        }
        let text = mem::take(&mut self.buffer);
        self.slog.dispatch(self.channel, &text);
    }
}
