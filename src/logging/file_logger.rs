//! Severity-filtered file logger
//!
//! A [`Logger`] appends one formatted line per accepted message to a single
//! file. Messages less urgent than the threshold are dropped, and a logger
//! built with [`Severity::Off`] never touches the filesystem.

use std::fs::{DirBuilder, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use super::format::{format_line, validate_date_format, DEFAULT_DATE_FORMAT};
use super::severity::Severity;
use crate::error::{Error, Result};

/// Mode for directories created on demand (before umask)
#[cfg(unix)]
const DIRECTORY_MODE: u32 = 0o777;

/// Mode for a newly created log file (before umask)
#[cfg(unix)]
const FILE_MODE: u32 = 0o666;

/// Appends severity-tagged lines to a log file
///
/// The file handle is released exactly once: by [`Logger::close`], which
/// reports failures, or otherwise when the logger is dropped.
#[derive(Debug)]
pub struct Logger {
    path: PathBuf,
    threshold: Severity,
    date_format: String,
    /// `None` for a dormant logger, or after the handle was released
    file: Option<File>,
}

impl Logger {
    /// Create a logger writing to `path` at the given threshold
    ///
    /// Missing parent directories are created first. With [`Severity::Off`]
    /// nothing is created or opened.
    pub fn new(path: impl AsRef<Path>, threshold: Severity) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if threshold == Severity::Off {
            tracing::debug!("Logging to {} is disabled", path.display());
            return Ok(Self {
                path,
                threshold,
                date_format: DEFAULT_DATE_FORMAT.to_string(),
                file: None,
            });
        }

        // An existing but unwritable file is left to fail at open time
        if !path.exists() {
            ensure_parent_dir(&path)?;
        }

        let file = open_append(&path)?;
        tracing::debug!(
            "Opened log file {} with threshold {}",
            path.display(),
            threshold
        );

        Ok(Self {
            path,
            threshold,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            file: Some(file),
        })
    }

    /// Replace the timestamp pattern, builder style
    pub fn with_date_format(mut self, format: impl Into<String>) -> Result<Self> {
        self.set_date_format(format)?;
        Ok(self)
    }

    /// Replace the timestamp pattern
    ///
    /// The previous pattern stays in place if `format` is rejected.
    pub fn set_date_format(&mut self, format: impl Into<String>) -> Result<()> {
        let format = format.into();
        validate_date_format(&format)?;
        self.date_format = format;
        Ok(())
    }

    /// Current timestamp pattern
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Least urgent severity that is still written
    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    /// Whether this logger holds an open file
    pub fn is_active(&self) -> bool {
        self.file.is_some()
    }

    /// Write `text` if `severity` passes the threshold
    ///
    /// An empty `feature` leaves the `[feature]` segment out of the line.
    pub fn log(&mut self, text: &str, severity: Severity, feature: &str) -> Result<()> {
        self.log_rank(text, severity.rank(), feature)
    }

    /// Write `text` at a raw numeric rank
    ///
    /// Ranks without a known severity are labelled `LOG` and are still
    /// compared numerically against the threshold.
    pub fn log_rank(&mut self, text: &str, rank: u8, feature: &str) -> Result<()> {
        if !self.threshold.allows(rank) {
            return Ok(());
        }
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };

        let line = format_line(&Local::now(), &self.date_format, rank, feature, text)?;

        // Single write so the whole line lands in one append
        file.write_all(line.as_bytes())
            .map_err(|source| Error::FileWrite {
                path: self.path.clone(),
                source,
            })
    }

    /// Log at [`Severity::Emerg`]
    pub fn log_emerg(&mut self, text: &str, feature: &str) -> Result<()> {
        self.log(text, Severity::Emerg, feature)
    }

    /// Log at [`Severity::Alert`]
    pub fn log_alert(&mut self, text: &str, feature: &str) -> Result<()> {
        self.log(text, Severity::Alert, feature)
    }

    /// Log at [`Severity::Crit`]
    pub fn log_crit(&mut self, text: &str, feature: &str) -> Result<()> {
        self.log(text, Severity::Crit, feature)
    }

    /// Log at [`Severity::Err`]
    pub fn log_err(&mut self, text: &str, feature: &str) -> Result<()> {
        self.log(text, Severity::Err, feature)
    }

    /// Log at [`Severity::Warn`]
    pub fn log_warn(&mut self, text: &str, feature: &str) -> Result<()> {
        self.log(text, Severity::Warn, feature)
    }

    /// Log at [`Severity::Notice`]
    pub fn log_notice(&mut self, text: &str, feature: &str) -> Result<()> {
        self.log(text, Severity::Notice, feature)
    }

    /// Log at [`Severity::Info`]
    pub fn log_info(&mut self, text: &str, feature: &str) -> Result<()> {
        self.log(text, Severity::Info, feature)
    }

    /// Log at [`Severity::Debug`]
    pub fn log_debug(&mut self, text: &str, feature: &str) -> Result<()> {
        self.log(text, Severity::Debug, feature)
    }

    /// Flush the file to disk and release the handle
    pub fn close(mut self) -> Result<()> {
        self.release()
    }

    fn release(&mut self) -> Result<()> {
        let Some(file) = self.file.take() else {
            return Ok(());
        };
        file.sync_all().map_err(|source| Error::FileClose {
            path: self.path.clone(),
            source,
        })?;
        drop(file);
        tracing::debug!("Closed log file {}", self.path.display());
        Ok(())
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            tracing::warn!("{}", e);
        }
    }
}

/// Create the parent directory of `path` and its ancestors
fn ensure_parent_dir(path: &Path) -> Result<()> {
    let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) else {
        return Ok(());
    };
    if dir.is_dir() {
        return Ok(());
    }

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIRECTORY_MODE);
    }

    builder
        .create(dir)
        .map_err(|source| Error::DirectoryCreation {
            path: dir.to_path_buf(),
            source,
        })?;
    tracing::debug!("Created log directory {}", dir.display());
    Ok(())
}

/// Open `path` for appending, creating it if needed
fn open_append(path: &Path) -> Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    options.open(path).map_err(|source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    })
}
