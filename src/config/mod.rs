//! Configuration module
//!
//! Holds the benchmark configuration and the benchmark-type enumeration.
//! CLI argument parsing lives in [`cli`].

pub mod cli;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Default bytes per operation
pub const DEFAULT_BLOCK_SIZE: u64 = 512;

/// Default requested operation count
pub const DEFAULT_COUNT: u64 = 100_000;

/// Benchmark type
///
/// A closed enumeration mapped from its wire names (`SEQ_RD`, `SEQ_WR`,
/// `RAND_RD`, `RAND_WR`) with an exact, case-sensitive match. No prefix or
/// case-insensitive matching: a name either is one of the four types or it
/// is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchMode {
    /// Sequential reads from the device start, advancing by one block per op
    SeqRead,
    /// Sequential writes with a forced flush after every block
    SeqWrite,
    /// Reads at uniformly random block-aligned offsets
    RandRead,
    /// Writes at uniformly random block-aligned offsets, flushed per block
    RandWrite,
}

impl BenchMode {
    /// True for the write variants (device is opened write-only)
    pub fn is_write(self) -> bool {
        matches!(self, BenchMode::SeqWrite | BenchMode::RandWrite)
    }

    /// True for the random-offset variants (one seek per operation)
    pub fn is_random(self) -> bool {
        matches!(self, BenchMode::RandRead | BenchMode::RandWrite)
    }

    /// Wire name as accepted by `--type`
    pub fn name(self) -> &'static str {
        match self {
            BenchMode::SeqRead => "SEQ_RD",
            BenchMode::SeqWrite => "SEQ_WR",
            BenchMode::RandRead => "RAND_RD",
            BenchMode::RandWrite => "RAND_WR",
        }
    }
}

impl fmt::Display for BenchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned for a benchmark type name outside the fixed table
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown benchmark type '{0}' (expected SEQ_RD, SEQ_WR, RAND_RD or RAND_WR)")]
pub struct ParseModeError(String);

impl FromStr for BenchMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SEQ_RD" => Ok(BenchMode::SeqRead),
            "SEQ_WR" => Ok(BenchMode::SeqWrite),
            "RAND_RD" => Ok(BenchMode::RandRead),
            "RAND_WR" => Ok(BenchMode::RandWrite),
            other => Err(ParseModeError(other.to_owned())),
        }
    }
}

/// Complete benchmark configuration
///
/// Immutable once built from the CLI. `block_size` and `count` are validated
/// strictly positive at parse time.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Block device to benchmark (e.g. /dev/sdb)
    pub device: PathBuf,
    /// Bytes read or written per operation
    pub block_size: u64,
    /// Requested operation count (clamped to the device volume at runtime)
    pub count: u64,
    /// Benchmark type
    pub mode: BenchMode,
    /// Print the per-bucket latency series and percentile summary
    pub verbose: bool,
    /// Seed for the random-offset generator; entropy-seeded when None
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_exact_names_parse() {
        assert_eq!("SEQ_RD".parse::<BenchMode>().unwrap(), BenchMode::SeqRead);
        assert_eq!("SEQ_WR".parse::<BenchMode>().unwrap(), BenchMode::SeqWrite);
        assert_eq!("RAND_RD".parse::<BenchMode>().unwrap(), BenchMode::RandRead);
        assert_eq!("RAND_WR".parse::<BenchMode>().unwrap(), BenchMode::RandWrite);
    }

    #[test]
    fn test_mode_rejects_unknown_name() {
        assert!("FOO".parse::<BenchMode>().is_err());
        assert!("".parse::<BenchMode>().is_err());
    }

    #[test]
    fn test_mode_rejects_prefix_and_case_variants() {
        // Matching is exact, not prefix-based or case-insensitive
        assert!("SEQ".parse::<BenchMode>().is_err());
        assert!("SEQ_RD_EXTRA".parse::<BenchMode>().is_err());
        assert!("seq_rd".parse::<BenchMode>().is_err());
        assert!("Rand_Wr".parse::<BenchMode>().is_err());
    }

    #[test]
    fn test_mode_display_round_trips() {
        for mode in [
            BenchMode::SeqRead,
            BenchMode::SeqWrite,
            BenchMode::RandRead,
            BenchMode::RandWrite,
        ] {
            assert_eq!(mode.to_string().parse::<BenchMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_mode_flags() {
        assert!(!BenchMode::SeqRead.is_write());
        assert!(!BenchMode::SeqRead.is_random());
        assert!(BenchMode::SeqWrite.is_write());
        assert!(!BenchMode::SeqWrite.is_random());
        assert!(!BenchMode::RandRead.is_write());
        assert!(BenchMode::RandRead.is_random());
        assert!(BenchMode::RandWrite.is_write());
        assert!(BenchMode::RandWrite.is_random());
    }
}
