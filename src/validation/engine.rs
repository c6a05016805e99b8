//! Validation Engine
//!
//! Checks a stream of lines against the FizzBuzz sequence and stops at the
//! first line that does not match.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::diagnostics::{Mismatch, Reporter};
use crate::rules;

/// A progress marker is emitted for every number `n` with `n % PROGRESS_INTERVAL == 1`
pub const PROGRESS_INTERVAL: i64 = 100_000_000;

/// Outcome of checking a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line matched; carries the sequence number it was checked against
    Match(i64),
    Mismatch(Mismatch),
}

/// Final verdict of a validation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Input ran out without a mismatch
    Passed,
    Failed(Mismatch),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Lines consumed, including the failing one
    pub lines_checked: u64,
    pub verdict: Verdict,
}

impl Summary {
    pub fn is_valid(&self) -> bool {
        self.verdict == Verdict::Passed
    }
}

/// Per-line checker owning the sequence number.
///
/// The number starts at 1 and advances once per checked line, whatever the
/// outcome, so it always equals the count of lines consumed plus one.
#[derive(Debug, Clone)]
pub struct Validator {
    number: i64,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    pub fn new() -> Self {
        Self { number: 1 }
    }

    /// Sequence number the next line will be checked against
    pub fn next_number(&self) -> i64 {
        self.number
    }

    /// Check one line (without its newline) against the current sequence number
    pub fn check_line(&mut self, line: &[u8]) -> LineOutcome {
        let number = self.number;
        self.number += 1;

        if rules::expected(number).matches(line) {
            LineOutcome::Match(number)
        } else {
            LineOutcome::Mismatch(Mismatch {
                number,
                line: line.to_vec(),
            })
        }
    }
}

pub fn is_progress_checkpoint(number: i64) -> bool {
    number % PROGRESS_INTERVAL == 1
}

/// Validate every line of `reader`, writing diagnostics to `sink`.
///
/// Lines are split on `\n` only; a carriage return stays part of the line.
/// Reading stops at the first mismatch, which is reported before returning.
/// A mismatch is a [`Verdict`], not an error: errors are reserved for I/O
/// failures on the reader or the sink.
pub fn validate_stream<R: BufRead, W: Write>(mut reader: R, sink: W) -> Result<Summary> {
    let mut validator = Validator::new();
    let mut reporter = Reporter::new(sink);
    let mut lines_checked: u64 = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("Failed to read line {}", validator.next_number()))?;
        if read == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }

        lines_checked += 1;
        match validator.check_line(&buf) {
            LineOutcome::Match(number) => {
                if is_progress_checkpoint(number) {
                    reporter.progress(number)?;
                }
            }
            LineOutcome::Mismatch(mismatch) => {
                log::debug!("Mismatch after {} lines, stopping", lines_checked);
                reporter.mismatch(&mismatch)?;
                return Ok(Summary {
                    lines_checked,
                    verdict: Verdict::Failed(mismatch),
                });
            }
        }
    }

    log::debug!("Input exhausted after {} lines", lines_checked);
    Ok(Summary {
        lines_checked,
        verdict: Verdict::Passed,
    })
}
