use std::fmt::Write as _;

use parking_lot::Mutex;

use crate::channel::ChannelDescriptor;
use crate::timestamp;

/// Formatting toggles applied when a statement turns into a line.
///
/// `LogConfig` is a plain value. The live, nestable version lives in a
/// [`ConfigStack`]; a `LogConfig` only becomes effective once it is installed
/// there, either as the root or through [`ConfigStack::push`].
///
/// # Examples
///
/// ```
/// # use slog::LogConfig;
/// let quiet = LogConfig::default().timestamps(false).labels(false);
/// assert!(!quiet.timestamps);
/// assert!(quiet.use_color);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    /// Prefix each line with `[YYYY-MM-DD HH:MM:SS] - `.
    pub timestamps: bool,
    /// Prefix each line with `[name] - `.
    pub print_label: bool,
    /// Show the channel priority inside the label as `priority|name`.
    /// Has no effect while `print_label` is off.
    pub print_priority: bool,
    /// Let color-capable sinks colorize their output.
    pub use_color: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            timestamps: true,
            print_label: true,
            print_priority: false,
            use_color: true,
        }
    }
}

impl LogConfig {
    /// Every toggle off: lines are exactly the text that was appended.
    pub const fn plain() -> Self {
        Self {
            timestamps: false,
            print_label: false,
            print_priority: false,
            use_color: false,
        }
    }

    pub fn timestamps(mut self, on: bool) -> Self {
        self.timestamps = on;
        self
    }

    pub fn labels(mut self, on: bool) -> Self {
        self.print_label = on;
        self
    }

    pub fn priority(mut self, on: bool) -> Self {
        self.print_priority = on;
        self
    }

    pub fn color(mut self, on: bool) -> Self {
        self.use_color = on;
        self
    }

    /// Composes the final line for `text` on `channel`.
    ///
    /// Layout: `[<timestamp>] - [<priority>|<label>] - <text>`, where every
    /// bracketed part is present only when its toggle is on. No newline is
    /// appended and `text` is copied verbatim.
    pub fn format_line(&self, channel: &ChannelDescriptor, text: &str) -> String {
        let mut line = String::with_capacity(text.len() + 40);

        if self.timestamps {
            let _ = write!(line, "[{}] - ", timestamp::now());
        }

        if self.print_label {
            let _ = write!(line, "[{}] - ", channel.label(self.print_priority));
        }

        line.push_str(text);
        line
    }
}

struct StackState {
    root: LogConfig,
    scopes: Vec<(u64, LogConfig)>,
    next_id: u64,
}

impl StackState {
    fn active_mut(&mut self) -> &mut LogConfig {
        match self.scopes.last_mut() {
            Some((_, config)) => config,
            None => &mut self.root,
        }
    }
}

/// The stack of configuration contexts.
///
/// Exactly one context is active at any time: the most recently pushed scope
/// that is still alive, or the root when no scope is. The stack is shared by
/// every thread using the owning [`Slog`](crate::Slog), so scopes pushed from
/// different threads interleave on the same stack.
///
/// Scopes are expected to end in LIFO order. When they do not, each scope
/// still removes only its own entry, so the stack never loses or duplicates
/// a context.
pub struct ConfigStack {
    state: Mutex<StackState>,
}

impl ConfigStack {
    pub fn new(root: LogConfig) -> Self {
        Self {
            state: Mutex::new(StackState {
                root,
                scopes: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of the active context.
    pub fn active(&self) -> LogConfig {
        let state = self.state.lock();
        match state.scopes.last() {
            Some((_, config)) => *config,
            None => state.root,
        }
    }

    /// Mutates the active context in place.
    pub fn update(&self, f: impl FnOnce(&mut LogConfig)) {
        f(self.state.lock().active_mut());
    }

    /// Makes `config` the active context until the returned scope is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use slog::{ConfigStack, LogConfig};
    /// let stack = ConfigStack::new(LogConfig::default());
    /// {
    ///     let _scope = stack.push(LogConfig::default().timestamps(false));
    ///     assert!(!stack.active().timestamps);
    /// }
    /// assert!(stack.active().timestamps);
    /// ```
    pub fn push(&self, config: LogConfig) -> ConfigScope<'_> {
        let mut state = self.state.lock();
        let id = state.next_id;
        state.next_id += 1;
        state.scopes.push((id, config));
        ConfigScope { stack: self, id }
    }

    /// Number of live scopes above the root.
    pub fn depth(&self) -> usize {
        self.state.lock().scopes.len()
    }

    fn update_scope(&self, id: u64, f: impl FnOnce(&mut LogConfig)) {
        let mut state = self.state.lock();
        if let Some((_, config)) = state.scopes.iter_mut().find(|(sid, _)| *sid == id) {
            f(config);
        }
    }

    fn scope_config(&self, id: u64) -> Option<LogConfig> {
        let state = self.state.lock();
        state
            .scopes
            .iter()
            .find(|(sid, _)| *sid == id)
            .map(|(_, config)| *config)
    }

    fn pop(&self, id: u64) {
        let mut state = self.state.lock();
        if let Some(pos) = state.scopes.iter().rposition(|(sid, _)| *sid == id) {
            state.scopes.remove(pos);
        }
    }
}

/// Guard for a pushed configuration context.
///
/// While alive (and not shadowed by a later push) its config is the active
/// one. Dropping it restores whatever was active before it was pushed.
#[must_use = "the configuration context ends as soon as the scope is dropped"]
pub struct ConfigScope<'a> {
    stack: &'a ConfigStack,
    id: u64,
}

impl ConfigScope<'_> {
    /// Adjusts this scope's own context, whether or not it is on top.
    pub fn update(&self, f: impl FnOnce(&mut LogConfig)) {
        self.stack.update_scope(self.id, f);
    }

    pub fn config(&self) -> LogConfig {
        self.stack.scope_config(self.id).unwrap_or_default()
    }
}

impl Drop for ConfigScope<'_> {
    fn drop(&mut self) {
        self.stack.pop(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::{Channel, Channels};

    #[test]
    fn test_plain_format_is_verbatim() {
        let channels = Channels::new();
        let line = LogConfig::plain().format_line(channels.get(Channel::Info), "a42 b");
        assert_eq!(line, "a42 b");
    }

    #[test]
    fn test_label_and_priority() {
        let channels = Channels::new();
        let error = channels.get(Channel::Error);
        let cfg = LogConfig::plain().labels(true);
        assert_eq!(cfg.format_line(error, "boom"), "[error] - boom");
        assert_eq!(cfg.priority(true).format_line(error, "boom"), "[200|error] - boom");
        // priority alone prints nothing
        assert_eq!(LogConfig::plain().priority(true).format_line(error, "x"), "x");
    }

    #[test]
    fn test_timestamp_prefix() {
        let channels = Channels::new();
        let cfg = LogConfig::plain().timestamps(true).labels(true);
        let line = cfg.format_line(channels.get(Channel::Warn), "hi");
        assert!(line.starts_with('['));
        assert_eq!(&line[20..24], "] - ");
        assert_eq!(&line[24..], "[warn] - hi");
    }

    #[test]
    fn test_out_of_order_drop() {
        let stack = ConfigStack::new(LogConfig::default());
        let outer = stack.push(LogConfig::plain().labels(true));
        let inner = stack.push(LogConfig::plain());
        drop(outer);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.active(), LogConfig::plain());
        drop(inner);
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.active(), LogConfig::default());
    }

    #[test]
    fn test_scope_update() {
        let stack = ConfigStack::new(LogConfig::default());
        let scope = stack.push(LogConfig::default());
        scope.update(|c| c.print_priority = true);
        assert!(scope.config().print_priority);
        assert!(stack.active().print_priority);
        drop(scope);
        assert!(!stack.active().print_priority);
    }
}
