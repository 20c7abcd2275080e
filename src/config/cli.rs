//! CLI argument parsing using clap

use super::{BenchConfig, BenchMode, DEFAULT_BLOCK_SIZE, DEFAULT_COUNT};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;

/// blkbench - raw block-device micro benchmark
#[derive(Parser, Debug)]
#[command(name = "blkbench")]
#[command(version, about = "Run a micro benchmark on DEVICE according to the options", long_about = None)]
pub struct Cli {
    /// Block device to benchmark (e.g. /dev/sdb)
    #[arg(value_name = "DEVICE")]
    pub device: PathBuf,

    /// Read and write up to BYTES bytes at a time
    #[arg(
        short = 'b',
        long = "bs",
        value_name = "BYTES",
        default_value_t = DEFAULT_BLOCK_SIZE,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub block_size: u64,

    /// Read and write up to N blocks or the end of the device volume
    #[arg(
        short = 'c',
        long,
        value_name = "N",
        default_value_t = DEFAULT_COUNT,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub count: u64,

    /// Benchmark type: SEQ_RD, SEQ_WR, RAND_RD or RAND_WR
    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        default_value_t = BenchMode::SeqRead,
        value_parser = BenchMode::from_str
    )]
    pub mode: BenchMode,

    /// Print the per-bucket latency series and a percentile summary
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Seed for the random-offset generator (entropy-seeded if omitted)
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,
}

impl Cli {
    /// Convert parsed arguments into the immutable benchmark configuration
    pub fn into_config(self) -> BenchConfig {
        BenchConfig {
            device: self.device,
            block_size: self.block_size,
            count: self.count,
            mode: self.mode,
            verbose: self.verbose,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["blkbench", "/dev/sdb"]).unwrap();
        assert_eq!(cli.device, PathBuf::from("/dev/sdb"));
        assert_eq!(cli.block_size, DEFAULT_BLOCK_SIZE);
        assert_eq!(cli.count, DEFAULT_COUNT);
        assert_eq!(cli.mode, BenchMode::SeqRead);
        assert!(!cli.verbose);
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_all_options() {
        let cli = Cli::try_parse_from([
            "blkbench", "-b", "4096", "-c", "10", "-t", "RAND_WR", "-v", "--seed", "7",
            "/dev/sdb",
        ])
        .unwrap();
        assert_eq!(cli.block_size, 4096);
        assert_eq!(cli.count, 10);
        assert_eq!(cli.mode, BenchMode::RandWrite);
        assert!(cli.verbose);
        assert_eq!(cli.seed, Some(7));
    }

    #[test]
    fn test_long_options() {
        let cli = Cli::try_parse_from([
            "blkbench", "--bs", "1024", "--count", "5", "--type", "SEQ_WR", "--verbose",
            "/dev/sdc",
        ])
        .unwrap();
        assert_eq!(cli.block_size, 1024);
        assert_eq!(cli.count, 5);
        assert_eq!(cli.mode, BenchMode::SeqWrite);
        assert!(cli.verbose);
    }

    #[test]
    fn test_missing_device_is_an_error() {
        assert!(Cli::try_parse_from(["blkbench"]).is_err());
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        assert!(Cli::try_parse_from(["blkbench", "-t", "FOO", "/dev/sdb"]).is_err());
    }

    #[test]
    fn test_zero_operands_are_errors() {
        assert!(Cli::try_parse_from(["blkbench", "-b", "0", "/dev/sdb"]).is_err());
        assert!(Cli::try_parse_from(["blkbench", "-c", "0", "/dev/sdb"]).is_err());
    }

    #[test]
    fn test_negative_operands_are_errors() {
        assert!(Cli::try_parse_from(["blkbench", "-b", "-512", "/dev/sdb"]).is_err());
        assert!(Cli::try_parse_from(["blkbench", "-c=-1", "/dev/sdb"]).is_err());
    }

    #[test]
    fn test_help_is_not_a_failure() {
        let err = Cli::try_parse_from(["blkbench", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
    }

    #[test]
    fn test_unknown_option_is_a_failure() {
        let err = Cli::try_parse_from(["blkbench", "--bogus", "/dev/sdb"]).unwrap_err();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_into_config() {
        let cli = Cli::try_parse_from(["blkbench", "-t", "RAND_RD", "/dev/sdb"]).unwrap();
        let config = cli.into_config();
        assert_eq!(config.device, PathBuf::from("/dev/sdb"));
        assert_eq!(config.mode, BenchMode::RandRead);
        assert_eq!(config.block_size, DEFAULT_BLOCK_SIZE);
        assert_eq!(config.count, DEFAULT_COUNT);
    }
}
