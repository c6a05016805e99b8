//! FizzBuzz output checker
//!
//! Verifies that a stream of lines is exactly the FizzBuzz sequence
//! starting at 1, reporting the first wrong line.
//!
//! This library provides:
//! - The expected-value rules
//! - A fail-fast, streaming line validator
//! - Command-line configuration for the `fizzbuzz-check` binary

pub mod config;
pub mod rules;
pub mod validation;

pub use config::Config;
pub use rules::{expected, Expected};
pub use validation::{validate_stream, Mismatch, Summary, Verdict};
