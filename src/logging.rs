#![cfg(feature = "std")]

//! Stderr logger. Stdout carries the game transcript, so log lines go to
//! stderr and are limited to this crate's own targets.

use std::env;
use std::io::Write;

use log::{LevelFilter, Log, Metadata, Record};

const LEVEL_VAR: &str = "SEABATTLE_LOG";
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
            && metadata.target().starts_with(env!("CARGO_CRATE_NAME"))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "[{:<5} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Level named by `value` (`off`, `error` .. `trace`, any case), or `warn`.
fn level_from(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}

/// Install the stderr logger at the level named by `SEABATTLE_LOG`.
///
/// Only the first call installs the logger; later calls leave it in place.
pub fn init_logging() {
    let level = level_from(env::var(LEVEL_VAR).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
