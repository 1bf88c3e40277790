//! Append-only error log for records lost to persistent store failures.
//!
//! The log file is opened once at startup in append mode and never truncated
//! across the process lifetime. Each line identifies a record that could not
//! be written even by the per-record fallback path:
//!
//! ```text
//! Trace no reachable servers
//! Receipt document too large
//! ```
//!
//! Operators discover persistence gaps only through this file; the
//! block-processing pipeline itself never sees these failures.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use crate::error::Result;
use crate::store::RecordKind;

/// Process-wide handle to the append-only persistence-failure log.
pub struct ErrorLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl ErrorLog {
    /// Open the log file in append mode, creating it if missing.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or opened; this is
    /// fatal at startup, like an unreachable store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Append one `"<Kind> <error message>"` line for a record whose
    /// individual insert failed.
    ///
    /// Best-effort: a write failure here is reported via `tracing` and
    /// otherwise dropped, since there is no further fallback.
    pub fn record_failure(&self, kind: RecordKind, message: &str) {
        let mut file = self.file.lock();
        if let Err(err) = writeln!(file, "{} {}", kind.label(), message) {
            tracing::error!(%err, path = %self.path.display(), "failed to append to error log");
        }
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
