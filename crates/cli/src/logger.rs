//! Timestamped logger for the `tween` binary.
//!
//! Library crates log through the `log` facade; this is the sink. Lines go to
//! stderr, and to a log file as well when one is configured.

use anyhow::{Context, Result};
use chrono::Local;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Environment variable holding the default log level.
pub const LOG_ENV: &str = "TWEEN_LOG";

pub struct TweenLogger {
    level: LevelFilter,
    file: Option<Mutex<File>>,
    log_path: Option<PathBuf>,
}

impl TweenLogger {
    /// Create a logger at `level`, appending to `log_path` if given.
    pub fn new(level: LevelFilter, log_path: Option<&Path>) -> Result<Self> {
        let file = match log_path {
            Some(path) => {
                if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                    create_dir_all(dir).with_context(|| {
                        format!("Failed to create log directory: {}", dir.display())
                    })?;
                }
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .with_context(|| format!("Failed to open log file: {}", path.display()))?;
                Some(Mutex::new(file))
            }
            None => None,
        };

        Ok(Self {
            level,
            file,
            log_path: log_path.map(Path::to_path_buf),
        })
    }

    /// Install the logger globally.
    pub fn init(level: LevelFilter, log_path: Option<&Path>) -> Result<()> {
        let logger = Self::new(level, log_path)?;
        let log_path = logger.log_path.clone();

        log::set_boxed_logger(Box::new(logger))
            .map(|()| log::set_max_level(level))
            .map_err(|e| anyhow::anyhow!("Failed to set logger: {}", e))?;

        if let Some(path) = log_path {
            log::info!("Log file: {}", path.display());
        }
        Ok(())
    }

    fn format(record: &Record) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        format!(
            "{} {} [{}] {}",
            timestamp,
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for TweenLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = Self::format(record);

        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                // A failed log write must not abort the replay.
                let _ = writeln!(file, "{}", message);
            }
        }
        eprintln!("{}", message);
    }

    fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                let _ = file.flush();
            }
        }
    }
}

/// Pick the level: `-v` flags win, then `TWEEN_LOG`, then warnings only.
pub fn level_from(verbose: u8, env: Option<&str>) -> LevelFilter {
    match verbose {
        0 => env
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(LevelFilter::Warn),
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Mark the start of a section in the log.
pub fn log_section(name: &str) {
    let separator = "=".repeat(50);
    log::info!("{}", separator);
    log::info!("SECTION: {}", name);
    log::info!("{}", separator);
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_verbose_flags_override_environment() {
        assert_eq!(level_from(0, None), LevelFilter::Warn);
        assert_eq!(level_from(0, Some("debug")), LevelFilter::Debug);
        assert_eq!(level_from(0, Some("nonsense")), LevelFilter::Warn);
        assert_eq!(level_from(1, Some("error")), LevelFilter::Info);
        assert_eq!(level_from(2, None), LevelFilter::Debug);
        assert_eq!(level_from(5, None), LevelFilter::Trace);
    }

    #[test]
    fn test_writes_enabled_records_to_file() {
        let dir = std::env::temp_dir().join(format!("tween-log-{}", std::process::id()));
        let path = dir.join("run.log");
        let logger = TweenLogger::new(LevelFilter::Info, Some(&path)).unwrap();

        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("canvas")
                .args(format_args!("shape added"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Trace)
                .target("canvas")
                .args(format_args!("drag step"))
                .build(),
        );
        logger.flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("INFO [canvas] shape added"));
        assert!(!contents.contains("drag step"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
