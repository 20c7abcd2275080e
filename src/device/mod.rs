//! Device access layer
//!
//! This module defines the seam between the measurement loop and the operating
//! system: a small [`Device`] trait covering exactly the operations the loop
//! performs (geometry query, seek, read, write, sync), a tagged error type that
//! names the failing operation, and the destructive-write guard applied before
//! any open(2) call.
//!
//! Every [`DeviceError`] is mapped to immediate process termination by the top
//! level. Keeping the error as a value rather than exiting inside the wrapper
//! lets tests drive the loop against a mock device that injects failures
//! without tearing down the test process.

pub mod block;
pub mod mock;

pub use block::BlockDevice;
pub use mock::MockDevice;

use crate::config::BenchMode;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Device paths refused unconditionally for write benchmarks.
///
/// Matches the primary disk and all of its partitions (/dev/sda, /dev/sda1, ...).
/// This is a destructive-write guard, not a permissions check: it fires before
/// any file descriptor is created and cannot be overridden.
const PRIMARY_DISK_PREFIX: &str = "/dev/sda";

/// OS-level device failure, tagged with the operation that failed
#[derive(Debug, Error)]
pub enum DeviceError {
    /// open(2) failed (missing device, permission denied, busy device)
    #[error("open {path}: {source}")]
    Open { path: PathBuf, source: io::Error },

    /// Write benchmark requested against a path matching the primary-disk pattern
    #[error("refusing to open {path} for a write benchmark: primary disk pattern")]
    WriteGuard { path: PathBuf },

    /// Any other syscall failure (ioctl, seek, read, write, sync)
    #[error("{op}: {source}")]
    Io { op: &'static str, source: io::Error },
}

impl DeviceError {
    pub(crate) fn io(op: &'static str, source: io::Error) -> Self {
        DeviceError::Io { op, source }
    }
}

/// Result type for device operations
pub type DeviceResult<T> = std::result::Result<T, DeviceError>;

/// Block device geometry, queried once at startup and read-only afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceGeometry {
    /// Logical sector size in bytes
    pub sector_size: u64,
    /// Number of logical sectors
    pub sector_count: u64,
}

impl DeviceGeometry {
    /// Total addressable volume in bytes
    pub fn volume_bytes(&self) -> u64 {
        self.sector_size * self.sector_count
    }
}

/// Operations the measurement loop performs against a device
///
/// Sequential modes rely on the cursor advancing naturally after each read or
/// write; random modes reposition with `seek` before every operation. All
/// methods block until the underlying syscall returns.
pub trait Device {
    /// Query sector size and sector count
    fn geometry(&mut self) -> DeviceResult<DeviceGeometry>;

    /// Reposition the cursor to `offset` bytes from the device start
    fn seek(&mut self, offset: u64) -> DeviceResult<()>;

    /// Read up to `buf.len()` bytes at the cursor; short reads are not retried
    fn read(&mut self, buf: &mut [u8]) -> DeviceResult<usize>;

    /// Write `buf` at the cursor; short writes are not retried
    fn write(&mut self, buf: &[u8]) -> DeviceResult<usize>;

    /// Force written data down to the underlying storage
    fn sync(&mut self) -> DeviceResult<()>;
}

/// True if `path` matches the primary-disk naming pattern
pub fn is_primary_disk(path: &Path) -> bool {
    path.to_str()
        .is_some_and(|p| p.starts_with(PRIMARY_DISK_PREFIX))
}

/// Resolve the benchmark mode to an access mode and open the device.
///
/// Read modes open read-only, write modes write-only. Write modes against a
/// primary-disk path are refused before any open call is made.
pub fn open_device(path: &Path, mode: BenchMode) -> DeviceResult<BlockDevice> {
    if mode.is_write() && is_primary_disk(path) {
        return Err(DeviceError::WriteGuard {
            path: path.to_path_buf(),
        });
    }
    BlockDevice::open(path, mode.is_write())
}
