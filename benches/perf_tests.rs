use criterion::{black_box, criterion_group, criterion_main, Criterion};
use log::{info, LevelFilter};
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};
use slog::{Channel, FileSink, LogConfig, Record, Slog};
use std::fmt;
use std::sync::Once;
use tempfile::tempdir;

static LOGGER_INIT: Once = Once::new();

/// A typical line payload: a few fields rendered through `Display`.
struct Reading {
    sensor: &'static str,
    celsius: f64,
    samples: u32,
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {:.1} C over {} samples", self.sensor, self.celsius, self.samples)
    }
}

const READING: Reading = Reading {
    sensor: "cpu0",
    celsius: 71.25,
    samples: 64,
};

fn setup_log4rs(log_file: &str) {
    LOGGER_INIT.call_once(|| {
        let logfile = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("[{d(%Y-%m-%d %H:%M:%S)}] - [{l}] - {m}{n}")))
            .append(true)
            .build(log_file)
            .unwrap();

        let config = Config::builder()
            .appender(Appender::builder().build("logfile", Box::new(logfile)))
            .build(Root::builder()
                .appender("logfile")
                .build(LevelFilter::Info))
            .unwrap();

        log4rs::init_config(config).unwrap();
    });
}

fn bench_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("Statements");

    // Pure dispatch cost: one sink that does nothing
    let slog = Slog::with_config(LogConfig::plain());
    let _null = slog.register_fn("null", |_: &Record<'_>| {});

    group.bench_function("enabled_null_sink", |b| {
        b.iter(|| {
            slog.info().append("reading: ").append(black_box(&READING));
        })
    });

    group.bench_function("disabled_channel", |b| {
        b.iter(|| {
            slog.statement(Channel::Debug).append("reading: ").append(black_box(&READING));
        })
    });

    group.finish();
}

fn bench_file_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("File Logging Comparison");
    group.sample_size(10);

    let dir = tempdir().unwrap();

    let slog = Slog::new();
    let _file = slog.register("file", FileSink::new(dir.path().join("slog.log"), true).unwrap());

    group.bench_function("slog_file", |b| {
        b.iter(|| {
            slog.info().append("reading: ").append(black_box(&READING));
        })
    });

    let traditional = dir.path().join("log4rs.log").to_str().unwrap().to_string();
    setup_log4rs(&traditional);

    group.bench_function("log4rs_file", |b| {
        b.iter(|| {
            info!("reading: {}", black_box(&READING));
        })
    });

    group.finish();
}

criterion_group!(benches, bench_statements, bench_file_comparison);
criterion_main!(benches);
