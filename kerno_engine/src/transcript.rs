//! Plain-text session transcript.
//!
//! Everything shown to the player and everything they typed is appended to a
//! log file, unstyled. The transcript is write-only: it is never read back and
//! a failure to write it never interrupts play.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Debug)]
pub struct Transcript {
    path: PathBuf,
    file: File,
}

impl Transcript {
    /// Open (or create) `path` for appending and write a session header.
    ///
    /// # Errors
    /// Fails if the file can't be opened or the header can't be written.
    pub fn open(path: &Path) -> Result<Self> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening transcript '{}'", path.display()))?;
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let stamp = now.format(&Rfc3339).unwrap_or_else(|_| now.unix_timestamp().to_string());
        writeln!(file, "\n=== Kerno session started {stamp} ===")
            .with_context(|| format!("writing transcript header to '{}'", path.display()))?;
        info!("transcript opened at '{}'", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Append a block of rendered text.
    pub fn record(&mut self, text: &str) {
        if let Err(err) = writeln!(self.file, "{text}") {
            warn!("failed to write transcript '{}': {err}", self.path.display());
        }
    }

    /// Append a line the player typed.
    pub fn record_input(&mut self, line: &str) {
        self.record(&format!("> {line}"));
    }
}
