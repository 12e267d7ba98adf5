//! File-based logging. Each run writes to
//! `~/.whiteboard/logs/{run_id}/log` and mirrors every line to stderr.

use anyhow::{Context, Result};
use chrono::Local;
use dirs::home_dir;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use uuid::Uuid;

pub struct WhiteboardLogger {
    level: LevelFilter,
    file: Option<Mutex<File>>,
}

impl WhiteboardLogger {
    /// Create a logger writing into a fresh run directory under `root`.
    pub fn new(root: &Path, level: LevelFilter) -> Result<(Self, PathBuf)> {
        let log_dir = root.join(run_id());
        create_dir_all(&log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

        let log_path = log_dir.join("log");
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

        Ok((
            Self {
                level,
                file: Some(Mutex::new(file)),
            },
            log_path,
        ))
    }

    /// A logger that only writes to stderr.
    pub fn stderr_only(level: LevelFilter) -> Self {
        Self { level, file: None }
    }

    /// `~/.whiteboard/logs`
    pub fn default_root() -> Result<PathBuf> {
        let home = home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;
        Ok(home.join(".whiteboard").join("logs"))
    }

    /// Install the global logger.
    ///
    /// If the log file cannot be created, logging continues on stderr only.
    pub fn init(level: LevelFilter) -> Result<()> {
        let (logger, log_path, file_error) =
            match Self::default_root().and_then(|root| Self::new(&root, level)) {
                Ok((logger, path)) => (logger, Some(path), None),
                Err(err) => (Self::stderr_only(level), None, Some(err)),
            };

        log::set_boxed_logger(Box::new(logger))
            .map(|()| log::set_max_level(level))
            .map_err(|e| anyhow::anyhow!("Failed to set logger: {}", e))?;

        match (log_path, file_error) {
            (Some(path), _) => log::info!("Log file: {}", path.display()),
            (None, Some(err)) => log::warn!("Logging to stderr only: {:#}", err),
            (None, None) => {}
        }
        Ok(())
    }
}

impl Log for WhiteboardLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = format_line(
            &Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            record,
        );

        if let Some(file) = &self.file {
            if let Ok(mut file) = file.lock() {
                // A failed write must never take the app down
                let _ = writeln!(file, "{}", message);
                let _ = file.flush();
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

/// `{timestamp}_{uuid prefix}`, unique per process start.
fn run_id() -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let uuid = Uuid::new_v4().to_string();
    let short = uuid.split('-').next().unwrap_or("unknown");
    format!("{timestamp}_{short}")
}

fn format_line(timestamp: &str, record: &Record) -> String {
    format!(
        "{} {} [{}] {}",
        timestamp,
        record.level(),
        record.target(),
        record.args()
    )
}
