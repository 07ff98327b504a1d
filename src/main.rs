use std::io;

use slog::FileSink;

/// Prints one line per channel.
///
/// Usage: `slog-demo [--log=[+|-]<name>]... [logfile]`
///
/// With a log file argument, lines are also appended to that file.
fn main() -> io::Result<()> {
    let log = slog::global();
    log.parse_env_args();

    let path = std::env::args().skip(1).find(|a| !a.starts_with("--"));
    let _file = match path {
        Some(path) => Some(log.register("file", FileSink::new(path, true)?)),
        None => None,
    };

    slog::info!();
    slog::info!("---------------- NEW RUN ----------------");
    slog::info!("slog version {}", slog::version());

    slog::error!("major error: failed to say hello to world");
    slog::warn!("warning: this should be yellow");
    slog::info!("fyi: life is full of meaningless little lines");
    slog::verbose!("verbosity: also known as 'it goes to eleven'");
    slog::success!("success: you only see this when you get lucky");
    slog::debug!("debug reporting for duty, enable with --log=+debug");

    Ok(())
}
