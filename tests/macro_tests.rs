use slog::{Channel, LogConfig, Record, Slog};
use std::sync::{Arc, Mutex};

fn capturing_slog() -> (Slog, Arc<Mutex<Vec<(Channel, String)>>>) {
    let slog = Slog::with_config(LogConfig::plain());
    for channel in Channel::ALL {
        slog.set_enabled(channel, true);
    }
    (slog, Arc::default())
}

#[test]
fn test_every_channel_macro() {
    let (slog, seen) = capturing_slog();
    let sink_seen = seen.clone();
    let _reg = slog.register_fn("capture", move |r: &Record<'_>| {
        sink_seen
            .lock()
            .unwrap()
            .push((r.channel().channel(), r.line().to_string()));
    });

    slog::info!(logger: slog, "i{}", 1);
    slog::warn!(logger: slog, "w{}", 2);
    slog::error!(logger: slog, "e{}", 3);
    slog::success!(logger: slog, "s{}", 4);
    slog::verbose!(logger: slog, "v{}", 5);
    slog::debug!(logger: slog, "d{}", 6);

    let expected: Vec<_> = [
        (Channel::Info, "i1"),
        (Channel::Warn, "w2"),
        (Channel::Error, "e3"),
        (Channel::Success, "s4"),
        (Channel::Verbose, "v5"),
        (Channel::Debug, "d6"),
    ]
    .into_iter()
    .filter(|(channel, _)| channel.compiled_in())
    .map(|(channel, line)| (channel, line.to_string()))
    .collect();
    assert_eq!(*seen.lock().unwrap(), expected);
}

#[test]
fn test_blank_macro_and_reference_logger() {
    let (slog, seen) = capturing_slog();
    let sink_seen = seen.clone();
    let _reg = slog.register_fn("capture", move |r: &Record<'_>| {
        sink_seen
            .lock()
            .unwrap()
            .push((r.channel().channel(), r.line().to_string()));
    });

    let by_ref = &slog;
    slog::info!(logger: by_ref);
    slog::warn!(logger: slog,);

    assert_eq!(
        *seen.lock().unwrap(),
        vec![(Channel::Info, String::new()), (Channel::Warn, String::new())]
    );
}

#[test]
fn test_disabled_macro_arguments_not_formatted() {
    struct Bomb;
    impl std::fmt::Display for Bomb {
        fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            panic!("formatted while disabled");
        }
    }

    let slog = Slog::with_config(LogConfig::plain());
    slog.set_enabled(Channel::Warn, false);
    slog::warn!(logger: slog, "{}", Bomb);
}
