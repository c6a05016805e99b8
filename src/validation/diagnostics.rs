//! Diagnostics
//!
//! Failure and progress messages, written verbatim to an error sink.

use std::fmt;
use std::io::Write;

use anyhow::{Context, Result};

/// The first line that did not match its expected value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub number: i64,
    /// Raw line content with the trailing newline removed
    pub line: Vec<u8>,
}

/// Lossy rendering for logs; [`Reporter::mismatch`] writes the raw bytes
impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrong output for number {}: \"{}\"",
            self.number,
            String::from_utf8_lossy(&self.line)
        )
    }
}

/// Writes diagnostics to a sink, one per line, without any log prefix
#[derive(Debug)]
pub struct Reporter<W: Write> {
    sink: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Report a mismatch, copying the offending line byte for byte
    pub fn mismatch(&mut self, mismatch: &Mismatch) -> Result<()> {
        write!(self.sink, "Wrong output for number {}: \"", mismatch.number)
            .and_then(|()| self.sink.write_all(&mismatch.line))
            .and_then(|()| self.sink.write_all(b"\"\n"))
            .context("Failed to write mismatch diagnostic")?;
        self.sink.flush().context("Failed to flush diagnostic sink")
    }

    pub fn progress(&mut self, number: i64) -> Result<()> {
        writeln!(self.sink, "Good until {}", number).context("Failed to write progress marker")?;
        self.sink.flush().context("Failed to flush diagnostic sink")
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
