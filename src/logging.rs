#![cfg(feature = "std")]

use std::env;

use log::{self, LevelFilter, Metadata, Record};

use crate::core::config::LOG_ENV_VAR;

/// Writes `LEVEL [target] message` lines to stderr so diagnostics never
/// interleave with the board printed on stdout.
struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{:<5} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn env_level() -> Option<LevelFilter> {
    env::var(LOG_ENV_VAR).ok().and_then(|lvl| lvl.parse().ok())
}

/// Install the stderr logger.
///
/// An explicit `level` wins; otherwise the `TICTACTOE_LOG` environment
/// variable is consulted, falling back to `info` if it is unset or invalid.
/// Calling this more than once keeps the first logger but updates the level.
pub fn init_logging(level: Option<LevelFilter>) {
    let level = level.or_else(env_level).unwrap_or(LevelFilter::Info);
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}
