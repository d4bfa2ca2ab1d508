//! Logger setup for the binary.
//!
//! Headless runs log to stderr through `simple_logger`. The TUI owns the
//! terminal, so there records go to `LIFE_LOG_PATH` when set and are dropped
//! otherwise.

use std::env;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};
use simple_logger::SimpleLogger;

use tui_life::engine::LifeConfig;

/// Install the logger appropriate for this run.
pub fn init(config: &LifeConfig) -> Result<()> {
    if config.is_headless() {
        SimpleLogger::new()
            .with_level(LevelFilter::Info)
            .env()
            .init()
            .context("installing stderr logger")?;
        return Ok(());
    }

    if let Some(path) = &config.log_path {
        let level = file_level(env::var("RUST_LOG").ok().as_deref());
        let logger = FileLogger::open(path, level)?;
        log::set_boxed_logger(Box::new(logger)).context("installing file logger")?;
        log::set_max_level(level);
    }
    Ok(())
}

/// Level for the file logger: a bare `RUST_LOG` level name, else `Info`.
fn file_level(rust_log: Option<&str>) -> LevelFilter {
    rust_log
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Appends one line per record to a file.
struct FileLogger {
    level: LevelFilter,
    started: Instant,
    file: Mutex<File>,
}

impl FileLogger {
    fn open(path: &Path, level: LevelFilter) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        Ok(Self {
            level,
            started: Instant::now(),
            file: Mutex::new(file),
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "{:>9.3}s {:<5} [{}] {}",
                self.started.elapsed().as_secs_f64(),
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
