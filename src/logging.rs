use log::{LevelFilter, Metadata, Record};
use std::sync::Mutex;
use std::fs::OpenOptions;
use std::io::Write;
use std::str::FromStr;
use chrono::Local;
use crate::config::LoggingConfig;
use crate::error::{Error, Result};

pub struct Logger {
    file: Mutex<std::fs::File>,
    level: LevelFilter,
}

impl Logger {
    pub fn new(log_file: &str, level: LevelFilter) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_file)?;

        Ok(Self {
            file: Mutex::new(file),
            level,
        })
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            // a failed log write has nowhere to be reported
            let _ = writeln!(
                file,
                "{} [{}] {}: {}",
                timestamp,
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Level from config, raised to `Debug` by `debug`.
pub fn level_filter(config: &LoggingConfig, debug: bool) -> Result<LevelFilter> {
    if debug {
        return Ok(LevelFilter::Debug);
    }
    LevelFilter::from_str(config.level.trim())
        .map_err(|_| Error::ConfigError(format!("Invalid log level: {}", config.level)))
}

/// Installs the file logger when `config.file` is set, `env_logger` otherwise.
pub fn init(config: &LoggingConfig, debug: bool) -> Result<()> {
    let level = level_filter(config, debug)?;

    match &config.file {
        Some(path) => {
            let logger = Logger::new(path, level)?;
            log::set_boxed_logger(Box::new(logger))
                .map_err(|e| Error::InternalError(e.to_string()))?;
            log::set_max_level(level);
        }
        None => {
            env_logger::Builder::from_default_env()
                .filter_level(level)
                .try_init()
                .map_err(|e| Error::InternalError(e.to_string()))?;
        }
    }
    Ok(())
}
