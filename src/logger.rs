use slog::Discard;
use sloggers::{
    Build,
    terminal::{TerminalLoggerBuilder, Destination},
    types::Severity,
};

use crate::config::Config;

pub type Logger = slog::Logger;

pub fn get_logger(config: &Config) -> Logger {
    let mut builder = TerminalLoggerBuilder::new();

    let level = match config.env_name {
        "development" => Severity::Debug,
        "production" => Severity::Error,
        "testing" => Severity::Warning,
        _ => Severity::Trace,
    };

    builder.level(level);
    builder.destination(Destination::Stdout);
    builder
        .build()
        .unwrap_or_else(|_| Logger::root(Discard, slog::o!()))
}
