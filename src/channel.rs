use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::color::Color;

/// The fixed set of severity channels.
///
/// Every channel can be switched on and off independently at runtime, and
/// compiled out entirely through the matching `disable-*` cargo feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    Info,
    Warn,
    Error,
    Success,
    Verbose,
    Debug,
}

impl Channel {
    /// All channels, in registry order.
    pub const ALL: [Channel; 6] = [
        Channel::Info,
        Channel::Warn,
        Channel::Error,
        Channel::Success,
        Channel::Verbose,
        Channel::Debug,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Channel::Info => "info",
            Channel::Warn => "warn",
            Channel::Error => "error",
            Channel::Success => "success",
            Channel::Verbose => "verbose",
            Channel::Debug => "debug",
        }
    }

    /// Looks a channel up by its name. Matching is exact.
    pub fn from_name(name: &str) -> Option<Channel> {
        Channel::ALL.into_iter().find(|c| c.name() == name)
    }

    pub const fn default_priority(self) -> u32 {
        match self {
            Channel::Info | Channel::Success => 100,
            Channel::Warn => 150,
            Channel::Error => 200,
            Channel::Verbose | Channel::Debug => 50,
        }
    }

    pub const fn default_enabled(self) -> bool {
        !matches!(self, Channel::Verbose | Channel::Debug)
    }

    pub const fn default_color(self) -> Color {
        match self {
            Channel::Info => Color::White,
            Channel::Warn => Color::Yellow,
            Channel::Error => Color::Red,
            Channel::Success => Color::Green,
            Channel::Verbose => Color::Cyan,
            Channel::Debug => Color::Gray,
        }
    }

    /// Whether this channel survived compilation.
    ///
    /// A `const fn` over `cfg!` so the enabled check of a compiled-out channel
    /// folds to `false` and its formatting code is removed as dead code.
    pub const fn compiled_in(self) -> bool {
        if cfg!(feature = "disable") {
            return false;
        }
        match self {
            Channel::Info => !cfg!(feature = "disable-info"),
            Channel::Warn => !cfg!(feature = "disable-warn"),
            Channel::Error => !cfg!(feature = "disable-error"),
            Channel::Success => !cfg!(feature = "disable-success"),
            Channel::Verbose => !cfg!(feature = "disable-verbose"),
            Channel::Debug => !cfg!(feature = "disable-debug"),
        }
    }

    const fn index(self) -> usize {
        match self {
            Channel::Info => 0,
            Channel::Warn => 1,
            Channel::Error => 2,
            Channel::Success => 3,
            Channel::Verbose => 4,
            Channel::Debug => 5,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Packs the first four bytes of a name into a big-endian tag.
///
/// Names shorter than four bytes are padded with zeros. The result is
/// stable across builds and platforms.
///
/// ```
/// # use slog::channel::name_tag;
/// assert_eq!(name_tag("info"), 0x696e666f);
/// assert_eq!(name_tag("warn"), 0x7761726e);
/// ```
pub const fn name_tag(name: &str) -> u32 {
    let bytes = name.as_bytes();
    let mut tag = 0u32;
    let mut i = 0;
    while i < 4 {
        let b = if i < bytes.len() { bytes[i] } else { 0 };
        tag = (tag << 8) | b as u32;
        i += 1;
    }
    tag
}

/// Runtime description of one channel.
///
/// There is exactly one descriptor per channel inside a [`Channels`]
/// registry. Descriptors are intentionally neither `Clone` nor `Copy`: a copy
/// would carry its own `enabled` flag and silently stop following the
/// registry. Sinks receive a shared reference to the live descriptor.
#[derive(Debug)]
pub struct ChannelDescriptor {
    channel: Channel,
    priority: u32,
    tag: u32,
    enabled: AtomicBool,
    color: Color,
    use_stderr: bool,
}

impl ChannelDescriptor {
    fn new(channel: Channel) -> Self {
        Self {
            channel,
            priority: channel.default_priority(),
            tag: name_tag(channel.name()),
            enabled: AtomicBool::new(channel.default_enabled()),
            color: channel.default_color(),
            use_stderr: channel == Channel::Error,
        }
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn name(&self) -> &'static str {
        self.channel.name()
    }

    /// Severity ranking, higher is more severe. Only ever displayed, never
    /// used for filtering.
    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn tag(&self) -> u32 {
        self.tag
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Advisory hint for console sinks: write this channel to stderr.
    pub fn use_stderr(&self) -> bool {
        self.use_stderr
    }

    /// Returns `true` when the channel is compiled in and switched on.
    ///
    /// The flag is read with relaxed ordering. A concurrent toggle may cause
    /// one stale decision, never a torn descriptor.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.channel.compiled_in() && self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Text shown inside the label brackets: `name`, or `priority|name`.
    pub fn label(&self, with_priority: bool) -> String {
        if with_priority {
            format!("{self:#}")
        } else {
            format!("{self}")
        }
    }
}

/// `{}` renders the name, `{:#}` renders `priority|name`.
impl fmt::Display for ChannelDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}|", self.priority)?;
        }
        f.write_str(self.name())
    }
}

/// The channel registry: one live descriptor per channel.
///
/// Created with the default table and mutated only through
/// [`Channels::set_enabled`]. Reads are lock free.
#[derive(Debug)]
pub struct Channels {
    descriptors: [ChannelDescriptor; 6],
}

impl Channels {
    pub fn new() -> Self {
        Self {
            descriptors: Channel::ALL.map(ChannelDescriptor::new),
        }
    }

    pub fn get(&self, channel: Channel) -> &ChannelDescriptor {
        &self.descriptors[channel.index()]
    }

    pub fn is_enabled(&self, channel: Channel) -> bool {
        self.get(channel).is_enabled()
    }

    pub fn set_enabled(&self, channel: Channel, enabled: bool) {
        self.get(channel).set_enabled(enabled);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChannelDescriptor> {
        self.descriptors.iter()
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let channels = Channels::new();
        let expected = [
            (Channel::Info, true, 100, Color::White),
            (Channel::Warn, true, 150, Color::Yellow),
            (Channel::Error, true, 200, Color::Red),
            (Channel::Success, true, 100, Color::Green),
            (Channel::Verbose, false, 50, Color::Cyan),
            (Channel::Debug, false, 50, Color::Gray),
        ];
        for (channel, enabled, priority, color) in expected {
            let d = channels.get(channel);
            assert_eq!(d.channel(), channel);
            assert_eq!(d.is_enabled(), enabled && channel.compiled_in());
            assert_eq!(d.priority(), priority);
            assert_eq!(d.color(), color);
            assert_eq!(d.use_stderr(), channel == Channel::Error);
        }
    }

    #[test]
    fn test_tags_follow_names() {
        let channels = Channels::new();
        assert_eq!(channels.get(Channel::Info).tag(), 0x696e666f);
        assert_eq!(channels.get(Channel::Error).tag(), name_tag("error"));
        assert_eq!(name_tag("ab"), 0x61620000);
    }

    #[test]
    fn test_label() {
        let channels = Channels::new();
        let warn = channels.get(Channel::Warn);
        assert_eq!(warn.label(false), "warn");
        assert_eq!(warn.label(true), "150|warn");
        assert_eq!(format!("{warn}"), "warn");
        assert_eq!(format!("{warn:#}"), "150|warn");
    }

    #[test]
    fn test_from_name() {
        for c in Channel::ALL {
            assert_eq!(Channel::from_name(c.name()), Some(c));
        }
        assert_eq!(Channel::from_name("fatal"), None);
        assert_eq!(Channel::from_name("INFO"), None);
    }
}
