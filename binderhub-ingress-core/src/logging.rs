use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Stdout carries the rendered manifest, so every log line goes to stderr.
///
/// Filtering comes from `RUST_LOG` (defaults to "warn"). Output is JSON with
/// flattened event fields unless stderr is a terminal.
pub fn init_logging() {
    init_logging_with(default_log_mode());
}

pub fn init_logging_with(mode: LogMode) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = fmt().with_env_filter(filter).with_writer(io::stderr);

    // try_init: tests and embedders may already have a subscriber installed.
    let _ = match mode {
        LogMode::Json => builder.json().flatten_event(true).try_init(),
        LogMode::Pretty => builder.compact().try_init(),
    };
}

pub fn default_log_mode() -> LogMode {
    if io::stderr().is_terminal() {
        LogMode::Pretty
    } else {
        LogMode::Json
    }
}

#[derive(Debug, Clone, Copy)]
pub enum LogMode {
    Json,
    Pretty,
}
