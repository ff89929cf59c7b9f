//! Flat-file store
//!
//! Reads and appends game lines on a single backing file.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::codec::encode_line;
use crate::error::Result;
use crate::record::Game;

use super::Records;

/// The file-backed collection of persisted games
#[derive(Debug, Clone)]
pub struct Store {
    /// Backing file (may not exist yet)
    path: PathBuf,
}

impl Store {
    /// Create a store over `path`; nothing is touched on disk
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Scan every valid game in file order
    ///
    /// Each call re-reads the file from the start. A missing file yields an
    /// empty scan.
    pub fn read_all(&self) -> Result<Records> {
        match File::open(&self.path) {
            Ok(file) => Ok(Records::new(file)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Records::empty()),
            Err(e) => Err(e.into()),
        }
    }

    /// Append one game as a new line, creating the file if needed
    pub fn append(&self, game: &Game) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?;

        // A torn previous write must not swallow this record
        let mut buf = String::new();
        if Self::ends_without_newline(&mut file)? {
            buf.push('\n');
        }
        buf.push_str(&encode_line(game));
        buf.push('\n');

        file.write_all(buf.as_bytes())?;
        file.flush()?;

        tracing::debug!(id = game.id(), path = %self.path.display(), "appended game");
        Ok(())
    }

    /// Whether the backing file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// True when the file is non-empty and its last byte is not `\n`
    fn ends_without_newline(file: &mut File) -> Result<bool> {
        if file.metadata()?.len() == 0 {
            return Ok(false);
        }

        let mut last = [0u8; 1];
        file.seek(SeekFrom::End(-1))?;
        file.read_exact(&mut last)?;
        Ok(last[0] != b'\n')
    }
}
