//! Record iterator
//!
//! Lazy, line-by-line decoding over the backing file.

use std::fs::File;
use std::io::{BufRead, BufReader, Split};

use crate::codec::decode_bytes;
use crate::error::Result;
use crate::record::Game;

/// Iterator over the valid games of one file scan, in file order
///
/// Lines that fail to decode are skipped and counted. An I/O error while
/// reading is yielded once and ends the scan.
pub struct Records {
    /// None when the backing file does not exist
    lines: Option<Split<BufReader<File>>>,
    /// 1-based number of the last line read
    line_no: usize,
    /// Lines skipped so far
    skipped: usize,
}

impl Records {
    pub(super) fn new(file: File) -> Self {
        Self {
            lines: Some(BufReader::new(file).split(b'\n')),
            line_no: 0,
            skipped: 0,
        }
    }

    /// A scan over nothing (backing file absent)
    pub(super) fn empty() -> Self {
        Self {
            lines: None,
            line_no: 0,
            skipped: 0,
        }
    }

    /// Number of malformed lines skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Number of lines read so far, valid or not
    pub fn lines_read(&self) -> usize {
        self.line_no
    }
}

impl Iterator for Records {
    type Item = Result<Game>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let lines = self.lines.as_mut()?;

            let bytes = match lines.next()? {
                Ok(bytes) => bytes,
                Err(e) => {
                    // Stop after the first read error
                    self.lines = None;
                    return Some(Err(e.into()));
                }
            };
            self.line_no += 1;

            match decode_bytes(&bytes) {
                Ok(game) => return Some(Ok(game)),
                Err(e) => {
                    tracing::debug!(line = self.line_no, error = %e, "skipping malformed record");
                    self.skipped += 1;
                }
            }
        }
    }
}
