//! blkbench - raw block-device micro benchmark
//!
//! blkbench issues a fixed number of fixed-size sequential or random read/write
//! operations directly against a block device, times each one individually, and
//! reports aggregate throughput, IOPS and latency statistics.
//!
//! # Architecture
//!
//! - **Device layer**: a small `Device` trait over seek/read/write/sync with a
//!   real block-device implementation and a recording mock for tests
//! - **Measurement loop**: single-threaded, one timestamp pair per operation
//! - **Statistics**: duration-summed elapsed time, hdrhistogram-backed latency
//!   percentiles, coarse bucketed latency series in verbose mode
//!
//! Every device failure is fatal by design: the tool is a raw diagnostic
//! instrument with no retry, backoff or partial-result salvage.

pub mod bench;
pub mod config;
pub mod device;
pub mod output;
pub mod stats;

// Re-export commonly used types
pub use bench::{BenchRun, Sample};
pub use config::{BenchConfig, BenchMode};
pub use device::{Device, DeviceError, DeviceGeometry};

/// Result type used throughout blkbench
pub type Result<T> = anyhow::Result<T>;
