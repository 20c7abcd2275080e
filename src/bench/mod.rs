//! Measurement loop
//!
//! Runs exactly `effective_count` iterations against a [`Device`]. Each
//! iteration captures a start timestamp, optionally seeks to a random
//! block-aligned offset, performs one read or one write-plus-sync, and captures
//! an end timestamp. Timestamps come from the monotonic clock
//! (`std::time::Instant`), so per-operation latencies are immune to wall-clock
//! adjustments.
//!
//! The requested count is clamped to what the device volume can hold at the
//! configured block size; the loop never addresses past the end of the volume.
//! Random offsets are drawn from a xoshiro256++ generator owned by the loop,
//! seeded from the configuration for reproducible sequences or from entropy
//! otherwise. Draws are independent per iteration; repeated offsets are
//! possible and acceptable.
//!
//! Error policy: the first device error at any step aborts the run. There is
//! no partial-results mode.

use crate::config::BenchConfig;
use crate::device::{Device, DeviceGeometry, DeviceResult};
use rand::Rng;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::time::{Duration, Instant};

/// Timestamp pair for one operation
///
/// Captured immediately before and after the positioning + I/O steps of a
/// single iteration. `end` is never earlier than `start`.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub start: Instant,
    pub end: Instant,
}

impl Sample {
    /// Latency of this operation
    #[inline]
    pub fn latency(&self) -> Duration {
        self.end.duration_since(self.start)
    }
}

/// Everything the measurement loop produced
#[derive(Debug)]
pub struct BenchRun {
    /// Geometry queried once before the loop
    pub geometry: DeviceGeometry,
    /// Requested count clamped to the device volume
    pub effective_count: u64,
    /// One timestamp pair per iteration, in iteration order
    pub samples: Vec<Sample>,
}

/// Clamp the requested operation count to what the volume can hold.
///
/// `ceil(volume / block_size)` operations cover the whole volume; a larger
/// request is silently truncated rather than rejected.
pub fn effective_count(volume_bytes: u64, block_size: u64, requested: u64) -> u64 {
    let upper = volume_bytes / block_size + u64::from(volume_bytes % block_size != 0);
    requested.min(upper)
}

/// Run the benchmark loop against an open device.
///
/// Probes geometry, clamps the count, then performs `effective_count`
/// iterations with a single zero-filled buffer reused throughout. Write modes
/// flush to storage after every block.
pub fn run<D: Device + ?Sized>(device: &mut D, config: &BenchConfig) -> DeviceResult<BenchRun> {
    let geometry = device.geometry()?;
    let count = effective_count(geometry.volume_bytes(), config.block_size, config.count);

    let mut rng = match config.seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_entropy(),
    };

    let mut buffer = vec![0u8; config.block_size as usize];
    let mut samples = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let start = Instant::now();
        if config.mode.is_random() {
            let offset = rng.gen_range(0..count) * config.block_size;
            device.seek(offset)?;
        }
        if config.mode.is_write() {
            device.write(&buffer)?;
            device.sync()?;
        } else {
            device.read(&mut buffer)?;
        }
        samples.push(Sample {
            start,
            end: Instant::now(),
        });
    }

    Ok(BenchRun {
        geometry,
        effective_count: count,
        samples,
    })
}
