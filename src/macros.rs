//! Logging macros, one per channel.
//!
//! Each macro takes `format!`-style arguments and logs them as a single
//! statement. Without a `logger:` argument the [`global()`](crate::global)
//! instance is used:
//!
//! ```
//! # use slog::Slog;
//! slog::info!("listening on port {}", 8080);
//! slog::warn!(); // blank marker line
//!
//! let mine = Slog::new();
//! slog::error!(logger: mine, "disk {} is full", "sda1");
//! ```
//!
//! When a channel is compiled out with its `disable-*` feature, the macro
//! still type-checks its arguments but the whole call folds away.

#[doc(hidden)]
#[macro_export]
macro_rules! __slog_log {
    ($channel:expr, logger: $slog:expr) => {{
        if $channel.compiled_in() {
            let _ = $crate::Slog::statement(&$slog, $channel);
        }
    }};
    ($channel:expr, logger: $slog:expr, $($arg:tt)+) => {{
        if $channel.compiled_in() {
            let _ = $crate::Slog::statement(&$slog, $channel)
                .append(::core::format_args!($($arg)+));
        }
    }};
}

/// Logs on the `info` channel.
#[macro_export]
macro_rules! info {
    (logger: $slog:expr $(,)?) => {
        $crate::__slog_log!($crate::Channel::Info, logger: $slog)
    };
    (logger: $slog:expr, $($arg:tt)+) => {
        $crate::__slog_log!($crate::Channel::Info, logger: $slog, $($arg)+)
    };
    () => {
        $crate::__slog_log!($crate::Channel::Info, logger: $crate::global())
    };
    ($($arg:tt)+) => {
        $crate::__slog_log!($crate::Channel::Info, logger: $crate::global(), $($arg)+)
    };
}

/// Logs on the `warn` channel.
#[macro_export]
macro_rules! warn {
    (logger: $slog:expr $(,)?) => {
        $crate::__slog_log!($crate::Channel::Warn, logger: $slog)
    };
    (logger: $slog:expr, $($arg:tt)+) => {
        $crate::__slog_log!($crate::Channel::Warn, logger: $slog, $($arg)+)
    };
    () => {
        $crate::__slog_log!($crate::Channel::Warn, logger: $crate::global())
    };
    ($($arg:tt)+) => {
        $crate::__slog_log!($crate::Channel::Warn, logger: $crate::global(), $($arg)+)
    };
}

/// Logs on the `error` channel.
#[macro_export]
macro_rules! error {
    (logger: $slog:expr $(,)?) => {
        $crate::__slog_log!($crate::Channel::Error, logger: $slog)
    };
    (logger: $slog:expr, $($arg:tt)+) => {
        $crate::__slog_log!($crate::Channel::Error, logger: $slog, $($arg)+)
    };
    () => {
        $crate::__slog_log!($crate::Channel::Error, logger: $crate::global())
    };
    ($($arg:tt)+) => {
        $crate::__slog_log!($crate::Channel::Error, logger: $crate::global(), $($arg)+)
    };
}

/// Logs on the `success` channel.
#[macro_export]
macro_rules! success {
    (logger: $slog:expr $(,)?) => {
        $crate::__slog_log!($crate::Channel::Success, logger: $slog)
    };
    (logger: $slog:expr, $($arg:tt)+) => {
        $crate::__slog_log!($crate::Channel::Success, logger: $slog, $($arg)+)
    };
    () => {
        $crate::__slog_log!($crate::Channel::Success, logger: $crate::global())
    };
    ($($arg:tt)+) => {
        $crate::__slog_log!($crate::Channel::Success, logger: $crate::global(), $($arg)+)
    };
}

/// Logs on the `verbose` channel (off by default).
#[macro_export]
macro_rules! verbose {
    (logger: $slog:expr $(,)?) => {
        $crate::__slog_log!($crate::Channel::Verbose, logger: $slog)
    };
    (logger: $slog:expr, $($arg:tt)+) => {
        $crate::__slog_log!($crate::Channel::Verbose, logger: $slog, $($arg)+)
    };
    () => {
        $crate::__slog_log!($crate::Channel::Verbose, logger: $crate::global())
    };
    ($($arg:tt)+) => {
        $crate::__slog_log!($crate::Channel::Verbose, logger: $crate::global(), $($arg)+)
    };
}

/// Logs on the `debug` channel (off by default).
#[macro_export]
macro_rules! debug {
    (logger: $slog:expr $(,)?) => {
        $crate::__slog_log!($crate::Channel::Debug, logger: $slog)
    };
    (logger: $slog:expr, $($arg:tt)+) => {
        $crate::__slog_log!($crate::Channel::Debug, logger: $slog, $($arg)+)
    };
    () => {
        $crate::__slog_log!($crate::Channel::Debug, logger: $crate::global())
    };
    ($($arg:tt)+) => {
        $crate::__slog_log!($crate::Channel::Debug, logger: $crate::global(), $($arg)+)
    };
}
