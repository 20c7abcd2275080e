//! Real block device implementation
//!
//! Opens the device through `OpenOptions` (read-only or write-only depending on
//! the benchmark mode) and queries its geometry with the BLKSSZGET and
//! BLKGETSIZE ioctls. I/O goes through the file cursor: sequential benchmarks
//! advance it naturally, random benchmarks reposition it per operation.
//!
//! Requires appropriate permissions to access block devices. The geometry
//! ioctls fail with ENOTTY when the path is not a block device, which surfaces
//! as a fatal error at startup.

use super::{Device, DeviceError, DeviceGeometry, DeviceResult};
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::os::unix::io::AsRawFd;
use std::path::Path;

// ioctl request codes from linux/fs.h
const BLKGETSIZE: libc::c_ulong = 0x1260; // number of logical sectors
const BLKSSZGET: libc::c_ulong = 0x1268; // logical sector size in bytes

/// An open block device positioned at the device start
#[derive(Debug)]
pub struct BlockDevice {
    file: File,
}

impl BlockDevice {
    /// Open `path` read-only (`write = false`) or write-only (`write = true`)
    pub fn open(path: &Path, write: bool) -> DeviceResult<Self> {
        let mut options = OpenOptions::new();
        if write {
            options.write(true);
        } else {
            options.read(true);
        }
        let file = options.open(path).map_err(|source| DeviceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self { file })
    }
}

impl Device for BlockDevice {
    fn geometry(&mut self) -> DeviceResult<DeviceGeometry> {
        let fd = self.file.as_raw_fd();

        let mut sector_size: libc::c_int = 0;
        // SAFETY: BLKSSZGET writes a c_int through the provided pointer
        let rc = unsafe { libc::ioctl(fd, BLKSSZGET, &mut sector_size) };
        if rc < 0 {
            return Err(DeviceError::io(
                "ioctl(BLKSSZGET)",
                io::Error::last_os_error(),
            ));
        }

        let mut sector_count: libc::c_ulong = 0;
        // SAFETY: BLKGETSIZE writes a c_ulong through the provided pointer
        let rc = unsafe { libc::ioctl(fd, BLKGETSIZE, &mut sector_count) };
        if rc < 0 {
            return Err(DeviceError::io(
                "ioctl(BLKGETSIZE)",
                io::Error::last_os_error(),
            ));
        }

        Ok(DeviceGeometry {
            sector_size: sector_size as u64,
            sector_count: sector_count as u64,
        })
    }

    fn seek(&mut self, offset: u64) -> DeviceResult<()> {
        self.file
            .seek(SeekFrom::Start(offset))
            .map_err(|source| DeviceError::io("seek", source))?;
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> DeviceResult<usize> {
        self.file
            .read(buf)
            .map_err(|source| DeviceError::io("read", source))
    }

    fn write(&mut self, buf: &[u8]) -> DeviceResult<usize> {
        self.file
            .write(buf)
            .map_err(|source| DeviceError::io("write", source))
    }

    fn sync(&mut self) -> DeviceResult<()> {
        self.file
            .sync_all()
            .map_err(|source| DeviceError::io("fsync", source))
    }
}
