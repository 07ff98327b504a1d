use slog::{FnSink, LogConfig, Record, Sink, Slog, CONSOLE_SINK};
use std::sync::{Arc, Mutex};

type Seen = Arc<Mutex<Vec<String>>>;

fn tagging_sink(tag: &'static str, seen: &Seen) -> impl Sink {
    let seen = seen.clone();
    FnSink::new(move |record: &Record<'_>| {
        seen.lock().unwrap().push(format!("{}:{}", tag, record.line()));
    })
}

#[test]
fn test_override_restores_original() {
    let slog = Slog::with_config(LogConfig::plain());
    let seen: Seen = Arc::default();

    let _original = slog.register("console", tagging_sink("original", &seen));
    slog.info().append("1");
    {
        let override_reg = slog.register("console", tagging_sink("override", &seen));
        assert!(override_reg.shadows());
        slog.info().append("2");
    }
    slog.info().append("3");

    assert_eq!(
        *seen.lock().unwrap(),
        vec!["original:1", "override:2", "original:3"]
    );
}

#[test]
fn test_nested_overrides_unwind_in_order() {
    let slog = Slog::with_config(LogConfig::plain());
    let seen: Seen = Arc::default();

    let _base = slog.register("sink", tagging_sink("base", &seen));
    {
        let _first = slog.register("sink", tagging_sink("first", &seen));
        {
            let _second = slog.register("sink", tagging_sink("second", &seen));
            slog.info().append("a");
        }
        slog.info().append("b");
    }
    slog.info().append("c");

    assert_eq!(*seen.lock().unwrap(), vec!["second:a", "first:b", "base:c"]);
}

#[test]
fn test_unregister_removes_name() {
    let slog = Slog::with_config(LogConfig::plain());
    let seen: Seen = Arc::default();
    {
        let _temp = slog.register("temp", tagging_sink("temp", &seen));
        assert!(slog.sinks().contains("temp"));
    }
    assert!(!slog.sinks().contains("temp"));

    slog.info().append("nobody listens");
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn test_override_of_default_console() {
    let slog = Slog::with_console();
    slog.update_config(|c| *c = LogConfig::plain());
    let seen: Seen = Arc::default();

    let console = slog.sinks().get(CONSOLE_SINK).unwrap();
    {
        let _intercept = slog.register(CONSOLE_SINK, tagging_sink("intercepted", &seen));
        slog.info().append("captured");
    }
    assert!(Arc::ptr_eq(&slog.sinks().get(CONSOLE_SINK).unwrap(), &console));
    assert_eq!(*seen.lock().unwrap(), vec!["intercepted:captured"]);
}

#[test]
fn test_shared_sink_under_two_names() {
    let slog = Slog::with_config(LogConfig::plain());
    let seen: Seen = Arc::default();
    let shared: Arc<dyn Sink> = Arc::new(tagging_sink("shared", &seen));

    let _a = slog.register_shared("a", shared.clone());
    let _b = slog.register_shared("b", shared);
    slog.info().append("x");

    assert_eq!(*seen.lock().unwrap(), vec!["shared:x", "shared:x"]);
}

#[test]
fn test_sink_registered_during_dispatch_misses_current_line() {
    let slog = Arc::new(Slog::with_config(LogConfig::plain()));
    let seen: Seen = Arc::default();

    let registering = slog.clone();
    let late_seen = seen.clone();
    let _reg = slog.register_fn("a", move |_: &Record<'_>| {
        let late = late_seen.clone();
        registering
            .register_fn("b", move |r: &Record<'_>| {
                late.lock().unwrap().push(r.line().to_string());
            })
            .keep();
    });

    slog.info().append("first");
    assert!(seen.lock().unwrap().is_empty());

    slog.info().append("second");
    assert_eq!(*seen.lock().unwrap(), vec!["second"]);
}
