//! FizzBuzz rules.
//!
//! Maps a 1-based sequence number to the single line a correct FizzBuzz
//! program prints for it.

use std::fmt;

pub const FIZZ_DIVISOR: i64 = 3;
pub const BUZZ_DIVISOR: i64 = 5;
pub const FIZZBUZZ_DIVISOR: i64 = 15;

/// The expected line for one sequence number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    FizzBuzz,
    Fizz,
    Buzz,
    Number(i64),
}

impl Expected {
    /// Exact, case-sensitive comparison against a raw line (newline already stripped)
    pub fn matches(&self, line: &[u8]) -> bool {
        match self {
            Expected::FizzBuzz => line == b"FizzBuzz",
            Expected::Fizz => line == b"Fizz",
            Expected::Buzz => line == b"Buzz",
            Expected::Number(n) => line == n.to_string().as_bytes(),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::FizzBuzz => f.write_str("FizzBuzz"),
            Expected::Fizz => f.write_str("Fizz"),
            Expected::Buzz => f.write_str("Buzz"),
            Expected::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Compute the expected value for `number` (must be >= 1).
///
/// 15 is checked before 3 and 5, so multiples of both never fall through
/// to the single-word labels.
pub fn expected(number: i64) -> Expected {
    if number % FIZZBUZZ_DIVISOR == 0 {
        Expected::FizzBuzz
    } else if number % FIZZ_DIVISOR == 0 {
        Expected::Fizz
    } else if number % BUZZ_DIVISOR == 0 {
        Expected::Buzz
    } else {
        Expected::Number(number)
    }
}

pub fn expected_line(number: i64) -> String {
    expected(number).to_string()
}
