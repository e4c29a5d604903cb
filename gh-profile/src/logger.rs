//! Logging for the CLI.
//!
//! Stdout belongs to the JSON report, so log lines never go there: they go
//! to the configured log file, or else to stderr.

use crate::error::{ProfileError, Result as ProfileErrorResult};

use gh_config::LoggingConfig;

use std::fmt::Display;
use std::io::IsTerminal;
use std::path::Path;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// HTTP internals are only interesting when something is already wrong
const QUIET_TARGETS: [&str; 3] = ["hyper", "hyper_util", "reqwest"];

/// Where log lines end up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    File,
    ColoredStderr,
    PlainStderr,
}

impl LogSink {
    /// Pick the sink for `logging`. Colors only make sense on a terminal.
    pub fn select(logging: &LoggingConfig, log_file: Option<&Path>, stderr_is_tty: bool) -> Self {
        match log_file {
            Some(_) => LogSink::File,
            None if logging.colored && stderr_is_tty => LogSink::ColoredStderr,
            None => LogSink::PlainStderr,
        }
    }
}

/// `[{rfc3339 date} - {level}] {message} [{file}:{line}]`
pub fn format_line(
    level: impl Display,
    message: impl Display,
    file: Option<&str>,
    line: Option<u32>,
) -> String {
    format!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        message,
        file.unwrap_or("unknown"),
        line.unwrap_or(0),
    )
}

/// Install the global logger for `logging`, writing to `log_file` when set.
pub fn initialize(logging: &LoggingConfig, log_file: Option<&Path>) -> ProfileErrorResult<()> {
    let level = *logging.level;
    let sink = LogSink::select(logging, log_file, std::io::stderr().is_terminal());

    let mut dispatch = Dispatch::new().level(level);
    for target in QUIET_TARGETS {
        dispatch = dispatch.level_for(target, level.min(LevelFilter::Warn));
    }

    let dispatch = match (sink, log_file) {
        (LogSink::File, Some(path)) => {
            let file = fern::log_file(path).map_err(|e| ProfileError::Logger {
                message: format!("Failed to open log file {}: {}", path.display(), e),
            })?;
            dispatch.format(plain).chain(file)
        }
        (LogSink::ColoredStderr, _) => {
            let colors = ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);
            dispatch
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "{}",
                        format_line(
                            colors.color(record.level()),
                            message,
                            record.file(),
                            record.line()
                        )
                    ))
                })
                .chain(std::io::stderr())
        }
        _ => dispatch.format(plain).chain(std::io::stderr()),
    };

    dispatch.apply().map_err(|e| ProfileError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    info!("Logger initialized: level={}, sink={:?}", level, sink);
    Ok(())
}

fn plain(out: fern::FormatCallback, message: &std::fmt::Arguments, record: &log::Record) {
    out.finish(format_args!(
        "{}",
        format_line(record.level(), message, record.file(), record.line())
    ))
}
