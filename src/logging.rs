use crate::error::RacerError;
use chrono::Local;
use log::{LevelFilter, Metadata, Record};
use std::collections::HashSet;
use std::io::{self, Write};
use std::sync::OnceLock;

// Custom logger structure
#[derive(Debug)]
struct RacerLogger {
    level: LevelFilter,
    debug_filters: Option<HashSet<String>>,
}

impl RacerLogger {
    // Debug and trace records only pass when their topic is listed
    fn topic_enabled(&self, metadata: &Metadata) -> bool {
        match &self.debug_filters {
            Some(filters)
                if metadata.level() == log::Level::Debug
                    || metadata.level() == log::Level::Trace =>
            {
                filters.contains(metadata.target())
                    || filters.iter().any(|f| metadata.target().starts_with(f.as_str()))
            }
            _ => true,
        }
    }
}

impl log::Log for RacerLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && self.topic_enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let level_color = match record.level() {
            log::Level::Error => "\x1B[31m", // Red
            log::Level::Warn => "\x1B[33m",  // Yellow
            log::Level::Info => "\x1B[32m",  // Green
            log::Level::Debug => "\x1B[36m", // Cyan
            log::Level::Trace => "\x1B[35m", // Magenta
        };
        let reset = "\x1B[0m";
        let timestamp = Local::now().format("%H:%M:%S%.3f");

        let message = record.args().to_string();
        let context = context_prefix(&message);

        let mut output = format!(
            "{timestamp} {level_color}{level:5}{reset} {context}{target}: {message}",
            level = record.level(),
            target = record.target(),
        );

        if let Some(module_path) = record.module_path() {
            if module_path != record.target() {
                output.push_str(&format!(" [{}]", module_path));
            }
        }

        let mut stdout = io::stdout().lock();
        let _ = writeln!(stdout, "{}", output);
        let _ = stdout.flush();
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

// Finds "<label> N" in a message and returns N
fn find_number_after(message: &str, label: &str) -> Option<u32> {
    let start = message.find(label)? + label.len();
    let rest = &message[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..end].parse().ok()
}

/// Builds the `[Lnn][Vn] ` prefix from "Lap N" and "Lives N" mentions in a message.
fn context_prefix(message: &str) -> String {
    let mut context = String::new();
    if let Some(lap) = find_number_after(message, "Lap ") {
        context.push_str(&format!("[L{:02}]", lap));
    }
    if let Some(lives) = find_number_after(message, "Lives ") {
        context.push_str(&format!("[V{}]", lives));
    }
    if !context.is_empty() {
        context.push(' ');
    }
    context
}

static LOGGER: OnceLock<RacerLogger> = OnceLock::new();

/// Parses a `--log-level` value.
pub fn parse_log_level(level: &str) -> Result<LevelFilter, RacerError> {
    match level.to_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(RacerError::InvalidLogLevel(level.to_string())),
    }
}

// Initialize the logger with optional debug topic filters
pub fn init_logger(level: LevelFilter, debug_filter: Option<String>) -> Result<(), RacerError> {
    let debug_filters = debug_filter.map(|filter_str| {
        filter_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<HashSet<String>>()
    });

    let logger = LOGGER.get_or_init(|| RacerLogger {
        level,
        debug_filters,
    });

    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

// Helper macros for specific debug topics
#[macro_export]
macro_rules! debug_game {
    ($($arg:tt)*) => {
        log::debug!(target: "game", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_track {
    ($($arg:tt)*) => {
        log::debug!(target: "track", "{}", format_args!($($arg)*))
    }
}

#[macro_export]
macro_rules! debug_input {
    ($($arg:tt)*) => {
        log::trace!(target: "input", "{}", format_args!($($arg)*))
    }
}
