//! Mock device for testing
//!
//! Simulates a block device without any system calls: geometry is configurable,
//! every operation is recorded for verification, failures can be injected per
//! operation kind, and a fixed per-operation latency can be simulated for
//! timing tests.
//!
//! # Example
//!
//! ```
//! use blkbench::device::{Device, MockDevice};
//! use blkbench::device::mock::OpRecord;
//!
//! let mut device = MockDevice::new(512, 1000); // 512 000-byte volume
//! let mut buf = [0u8; 512];
//! device.read(&mut buf).unwrap();
//! assert_eq!(device.position(), 512);
//! assert_eq!(device.ops(), &[OpRecord::Read { len: 512 }]);
//! ```

use super::{Device, DeviceError, DeviceGeometry, DeviceResult};
use std::io;
use std::thread;
use std::time::Duration;

/// Operation kinds for failure injection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Geometry,
    Seek,
    Read,
    Write,
    Sync,
}

/// Record of one operation performed against the mock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpRecord {
    Geometry,
    Seek { offset: u64 },
    Read { len: usize },
    Write { len: usize },
    Sync,
}

/// Mock device that records operations instead of performing them
pub struct MockDevice {
    geometry: DeviceGeometry,
    position: u64,
    ops: Vec<OpRecord>,
    fail_on: Option<OpKind>,
    op_latency: Option<Duration>,
}

impl MockDevice {
    /// Create a mock device with the given geometry
    pub fn new(sector_size: u64, sector_count: u64) -> Self {
        Self {
            geometry: DeviceGeometry {
                sector_size,
                sector_count,
            },
            position: 0,
            ops: Vec::new(),
            fail_on: None,
            op_latency: None,
        }
    }

    /// Inject a failure into every operation of the given kind
    pub fn set_fail_on(&mut self, kind: OpKind) {
        self.fail_on = Some(kind);
    }

    /// Sleep for `latency` inside every read and write
    pub fn set_op_latency(&mut self, latency: Duration) {
        self.op_latency = Some(latency);
    }

    /// Current cursor position in bytes from the device start
    pub fn position(&self) -> u64 {
        self.position
    }

    /// All operations performed so far, in order
    pub fn ops(&self) -> &[OpRecord] {
        &self.ops
    }

    /// Offsets of all seeks performed so far, in order
    pub fn seek_offsets(&self) -> Vec<u64> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                OpRecord::Seek { offset } => Some(*offset),
                _ => None,
            })
            .collect()
    }

    /// Number of operations of each kind performed so far
    pub fn count_of(&self, kind: OpKind) -> usize {
        self.ops
            .iter()
            .filter(|op| {
                matches!(
                    (op, kind),
                    (OpRecord::Geometry, OpKind::Geometry)
                        | (OpRecord::Seek { .. }, OpKind::Seek)
                        | (OpRecord::Read { .. }, OpKind::Read)
                        | (OpRecord::Write { .. }, OpKind::Write)
                        | (OpRecord::Sync, OpKind::Sync)
                )
            })
            .count()
    }

    fn check(&self, kind: OpKind, op: &'static str) -> DeviceResult<()> {
        if self.fail_on == Some(kind) {
            return Err(DeviceError::io(
                op,
                io::Error::new(io::ErrorKind::Other, "injected failure"),
            ));
        }
        Ok(())
    }
}

impl Device for MockDevice {
    fn geometry(&mut self) -> DeviceResult<DeviceGeometry> {
        self.check(OpKind::Geometry, "ioctl(BLKSSZGET)")?;
        self.ops.push(OpRecord::Geometry);
        Ok(self.geometry)
    }

    fn seek(&mut self, offset: u64) -> DeviceResult<()> {
        self.check(OpKind::Seek, "seek")?;
        self.ops.push(OpRecord::Seek { offset });
        self.position = offset;
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> DeviceResult<usize> {
        self.check(OpKind::Read, "read")?;
        if let Some(latency) = self.op_latency {
            thread::sleep(latency);
        }
        self.ops.push(OpRecord::Read { len: buf.len() });
        self.position += buf.len() as u64;
        Ok(buf.len())
    }

    fn write(&mut self, buf: &[u8]) -> DeviceResult<usize> {
        self.check(OpKind::Write, "write")?;
        if let Some(latency) = self.op_latency {
            thread::sleep(latency);
        }
        self.ops.push(OpRecord::Write { len: buf.len() });
        self.position += buf.len() as u64;
        Ok(buf.len())
    }

    fn sync(&mut self) -> DeviceResult<()> {
        self.check(OpKind::Sync, "fsync")?;
        self.ops.push(OpRecord::Sync);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_geometry() {
        let mut device = MockDevice::new(512, 1000);
        let geometry = device.geometry().unwrap();
        assert_eq!(geometry.sector_size, 512);
        assert_eq!(geometry.sector_count, 1000);
        assert_eq!(geometry.volume_bytes(), 512_000);
    }

    #[test]
    fn test_mock_records_operations_in_order() {
        let mut device = MockDevice::new(512, 1000);
        let mut buf = [0u8; 512];

        device.seek(1024).unwrap();
        device.read(&mut buf).unwrap();
        device.write(&buf).unwrap();
        device.sync().unwrap();

        assert_eq!(
            device.ops(),
            &[
                OpRecord::Seek { offset: 1024 },
                OpRecord::Read { len: 512 },
                OpRecord::Write { len: 512 },
                OpRecord::Sync,
            ]
        );
    }

    #[test]
    fn test_mock_cursor_advances() {
        let mut device = MockDevice::new(512, 1000);
        let mut buf = [0u8; 512];

        device.read(&mut buf).unwrap();
        device.read(&mut buf).unwrap();
        assert_eq!(device.position(), 1024);

        device.seek(0).unwrap();
        assert_eq!(device.position(), 0);
    }

    #[test]
    fn test_mock_failure_injection() {
        let mut device = MockDevice::new(512, 1000);
        device.set_fail_on(OpKind::Write);

        let mut buf = [0u8; 512];
        assert!(device.read(&mut buf).is_ok());
        let err = device.write(&buf).unwrap_err();
        assert!(matches!(err, DeviceError::Io { op: "write", .. }));

        // Failed operations are not recorded
        assert_eq!(device.count_of(OpKind::Write), 0);
        assert_eq!(device.count_of(OpKind::Read), 1);
    }

    #[test]
    fn test_mock_seek_offsets() {
        let mut device = MockDevice::new(512, 1000);
        device.seek(512).unwrap();
        device.seek(0).unwrap();
        device.seek(2048).unwrap();
        assert_eq!(device.seek_offsets(), vec![512, 0, 2048]);
    }
}
