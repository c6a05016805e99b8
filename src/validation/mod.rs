//! Validation Engine
//!
//! Line-by-line checking of candidate FizzBuzz output, separated from
//! command-line and process concerns.

pub mod diagnostics;
pub mod engine;

pub use diagnostics::{Mismatch, Reporter};
pub use engine::{
    is_progress_checkpoint, validate_stream, LineOutcome, Summary, Validator, Verdict,
    PROGRESS_INTERVAL,
};
