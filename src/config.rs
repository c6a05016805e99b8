//! Configuration management for the FizzBuzz checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Input source selection
//!
//! The divisors and the progress interval are fixed and not exposed here.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Path value meaning "read standard input"
pub const STDIN_PATH: &str = "-";

/// Command-line arguments for the FizzBuzz checker
#[derive(Debug, Parser)]
#[command(name = "fizzbuzz-check")]
#[command(about = "Verify that input lines are the FizzBuzz sequence")]
#[command(version)]
pub struct Args {
    /// File holding the candidate output
    #[arg(
        default_value = STDIN_PATH,
        help = "File to check, or '-' for standard input"
    )]
    pub input: PathBuf,

    /// Log level for the checker
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Where candidate lines are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Open the source as a buffered reader
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open input file {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub input: InputSource,
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let input = if args.input.as_os_str() == STDIN_PATH {
            InputSource::Stdin
        } else {
            InputSource::File(args.input)
        };

        Ok(Config {
            input,
            log_level: args.log_level,
        })
    }
}
