use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "session-wm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Tabbed single-window session demo for the terminal"
)]
pub struct SessionCli {
    /// Append tracing output to this file. The terminal itself is owned by the UI.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Send tracing output to stderr instead of discarding it.
    #[arg(long = "log-stderr", conflicts_with = "log_file")]
    pub log_stderr: bool,

    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Event loop poll interval.
    #[arg(long = "poll-ms", value_name = "MS", default_value_t = 16)]
    pub poll_ms: u64,

    /// Leave mouse capture off (tabs and chrome buttons become keyboard-only).
    #[arg(long = "no-mouse")]
    pub no_mouse: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Stderr,
    Discard,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub log_target: LogTarget,
    pub log_level: Level,
    pub poll_interval: Duration,
    pub mouse_capture: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("poll interval must be between 1 and 1000 ms, got {0}")]
    PollInterval(u64),
    #[error("log file path is empty")]
    EmptyLogPath,
}

impl TryFrom<&SessionCli> for SessionConfig {
    type Error = ConfigError;

    fn try_from(cli: &SessionCli) -> Result<Self, Self::Error> {
        if !(1..=1000).contains(&cli.poll_ms) {
            return Err(ConfigError::PollInterval(cli.poll_ms));
        }
        let log_target = match &cli.log_file {
            Some(path) if path.as_os_str().is_empty() => return Err(ConfigError::EmptyLogPath),
            Some(path) => LogTarget::File(path.clone()),
            None if cli.log_stderr => LogTarget::Stderr,
            None => LogTarget::Discard,
        };
        Ok(Self {
            log_target,
            log_level: cli.log_level.into(),
            poll_interval: Duration::from_millis(cli.poll_ms),
            mouse_capture: !cli.no_mouse,
        })
    }
}
