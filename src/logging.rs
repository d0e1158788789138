#![cfg(feature = "std")]

//! stderr logger for the `log` facade.
//!
//! Lines read `+   12.345ms DEBUG board: rejected ...`, timed from the
//! moment the logger was installed. Records from this crate are shown down
//! to the configured level; other crates only get through at `warn`.

use std::{
    env, fmt,
    sync::OnceLock,
    time::{Duration, Instant},
};

use log::{Level, LevelFilter, Metadata, Record};

const CRATE: &str = env!("CARGO_PKG_NAME");

/// Environment variable holding the level filter, e.g. `BROADSIDE_LOG=debug`.
pub const LOG_ENV: &str = "BROADSIDE_LOG";

struct StderrLogger {
    level: LevelFilter,
    started: Instant,
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        allows(self.level, metadata.level(), metadata.target())
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}",
                format_line(self.started.elapsed(), record.level(), record.target(), record.args())
            );
        }
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Module path of `target` inside this crate, or `None` for other crates.
pub fn local_target(target: &str) -> Option<&str> {
    match target.strip_prefix(CRATE) {
        Some("") => Some(CRATE),
        Some(rest) => rest.strip_prefix("::"),
        None => None,
    }
}

/// Whether a record at `level` from `target` passes a `max` filter.
pub fn allows(max: LevelFilter, level: Level, target: &str) -> bool {
    if level > max {
        return false;
    }
    local_target(target).is_some() || level <= Level::Warn
}

/// One rendered log line, without the trailing newline.
pub fn format_line(elapsed: Duration, level: Level, target: &str, args: &fmt::Arguments) -> String {
    format!(
        "+{:>9.3}ms {:<5} {}: {}",
        elapsed.as_secs_f64() * 1000.0,
        level.as_str(),
        local_target(target).unwrap_or(target),
        args
    )
}

/// Install the logger with the level named by [`LOG_ENV`], `info` when it is
/// unset or unparsable.
pub fn init_logging() {
    let level = env::var(LOG_ENV)
        .ok()
        .and_then(|lvl| lvl.parse().ok())
        .unwrap_or(LevelFilter::Info);
    init_logging_with(level);
}

/// Install the logger at a fixed level. Only the first call in a process
/// takes effect.
pub fn init_logging_with(level: LevelFilter) {
    let logger = LOGGER.get_or_init(|| StderrLogger {
        level,
        started: Instant::now(),
    });
    if log::set_logger(logger).is_ok() {
        log::set_max_level(logger.level);
    }
}
