//! Command line switches of the form `--log=[+|-]<name>`.
//!
//! `+` (the default) enables, `-` disables. Names are channel names
//! (`info`, `warn`, `error`, `success`, `verbose`, `debug`) or formatting
//! toggles (`timestamps`, `color`, `labels`, `priority`, plus the aliases
//! `timestamp`, `colors`, `label`). Anything else is ignored without error.
//! Switches apply left to right, so a later switch for the same name wins.

use crate::channel::Channel;
use crate::config::LogConfig;
use crate::slog::Slog;

pub const LOG_FLAG_PREFIX: &str = "--log=";

/// What a switch controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFlag {
    Channel(Channel),
    Timestamps,
    Color,
    Labels,
    Priority,
}

impl LogFlag {
    pub fn from_name(name: &str) -> Option<LogFlag> {
        match name {
            "timestamps" | "timestamp" => Some(LogFlag::Timestamps),
            "color" | "colors" => Some(LogFlag::Color),
            "labels" | "label" => Some(LogFlag::Labels),
            "priority" => Some(LogFlag::Priority),
            _ => Channel::from_name(name).map(LogFlag::Channel),
        }
    }
}

/// One parsed `--log=` switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSwitch {
    pub flag: LogFlag,
    pub enable: bool,
}

impl LogSwitch {
    /// Parses a single argument. Returns `None` for anything that is not a
    /// recognised `--log=` switch.
    ///
    /// ```
    /// # use slog::cli::{LogFlag, LogSwitch};
    /// # use slog::Channel;
    /// let s = LogSwitch::parse("--log=-info").unwrap();
    /// assert_eq!(s.flag, LogFlag::Channel(Channel::Info));
    /// assert!(!s.enable);
    /// assert!(LogSwitch::parse("--log=loud").is_none());
    /// assert!(LogSwitch::parse("-v").is_none());
    /// ```
    pub fn parse(arg: &str) -> Option<LogSwitch> {
        let value = arg.strip_prefix(LOG_FLAG_PREFIX)?;
        let (enable, name) = match *value.as_bytes().first()? {
            b'-' => (false, &value[1..]),
            b'+' => (true, &value[1..]),
            _ => (true, value),
        };
        let flag = LogFlag::from_name(name)?;
        Some(LogSwitch { flag, enable })
    }

    pub fn apply(&self, slog: &Slog) {
        match self.flag {
            LogFlag::Channel(channel) => slog.set_enabled(channel, self.enable),
            flag => slog.update_config(|config| self.apply_to_config(flag, config)),
        }
    }

    fn apply_to_config(&self, flag: LogFlag, config: &mut LogConfig) {
        match flag {
            LogFlag::Timestamps => config.timestamps = self.enable,
            LogFlag::Color => config.use_color = self.enable,
            LogFlag::Labels => config.print_label = self.enable,
            LogFlag::Priority => config.print_priority = self.enable,
            LogFlag::Channel(_) => {}
        }
    }
}

/// Parses every recognised switch in `args`, in order.
pub fn parse_args<I, S>(args: I) -> Vec<LogSwitch>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .filter_map(|arg| LogSwitch::parse(arg.as_ref()))
        .collect()
}
