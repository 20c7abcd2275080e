//! Statistics reduction
//!
//! Reduces the per-iteration timestamp pairs into the final report figures and
//! the optional coarse latency series.
//!
//! Elapsed time is the sum of per-operation latencies, not the wall-clock span
//! from first start to last end: overhead between iterations is excluded, so
//! the figures isolate pure I/O-operation latency.

use crate::bench::Sample;
use crate::Result;
use anyhow::Context;
use hdrhistogram::Histogram;
use std::time::Duration;

/// Aggregate benchmark report, computed once from the sample sequence
pub struct Report {
    /// Number of operations actually performed
    pub effective_count: u64,
    /// Sum of per-operation latencies in fractional seconds
    pub elapsed_secs: f64,
    /// Total data moved, in decimal megabytes
    pub total_mb: f64,
    /// total_mb / elapsed_secs
    pub throughput_mb_per_sec: f64,
    /// Operations per second
    pub iops: f64,
    /// Mean per-operation latency in milliseconds
    pub mean_latency_ms: f64,
    /// Per-operation latencies in microseconds
    histogram: Histogram<u64>,
}

impl Report {
    /// Reduce a sample sequence into the report figures
    pub fn from_samples(samples: &[Sample], block_size: u64) -> Result<Self> {
        let mut histogram =
            Histogram::<u64>::new(3).context("failed to allocate latency histogram")?;

        let mut elapsed_secs = 0.0;
        for sample in samples {
            let latency = sample.latency();
            elapsed_secs += latency.as_secs_f64();
            histogram.saturating_record(latency.as_micros() as u64);
        }

        let effective_count = samples.len() as u64;
        let total_mb = block_size as f64 * effective_count as f64 * 1e-6;

        // An empty run reports zeros rather than NaN
        let (throughput_mb_per_sec, iops, mean_latency_ms) = if elapsed_secs > 0.0 {
            (
                total_mb / elapsed_secs,
                effective_count as f64 / elapsed_secs,
                elapsed_secs * 1e3 / effective_count as f64,
            )
        } else {
            (0.0, 0.0, 0.0)
        };

        Ok(Self {
            effective_count,
            elapsed_secs,
            total_mb,
            throughput_mb_per_sec,
            iops,
            mean_latency_ms,
            histogram,
        })
    }

    /// Smallest observed per-operation latency
    pub fn min_latency(&self) -> Duration {
        Duration::from_micros(self.histogram.min())
    }

    /// Largest observed per-operation latency
    pub fn max_latency(&self) -> Duration {
        Duration::from_micros(self.histogram.max())
    }

    /// Latency at the given percentile (0.0 - 100.0)
    pub fn latency_percentile(&self, percentile: f64) -> Duration {
        Duration::from_micros(self.histogram.value_at_percentile(percentile))
    }
}

/// One entry of the verbose latency series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    /// 1-based index of the last iteration in this bucket
    pub end_index: u64,
    /// Sum (not average) of per-operation latencies in this bucket, in ms
    pub total_latency_ms: f64,
}

/// Partition the sample sequence into contiguous buckets of
/// `max(len / 1000, 1)` iterations.
///
/// A trailing partial bucket is emitted when the count is not a multiple of
/// the bucket size, so the bucket sums always partition the full elapsed time.
pub fn bucket_series(samples: &[Sample]) -> Vec<Bucket> {
    if samples.is_empty() {
        return Vec::new();
    }

    let interval = std::cmp::max(samples.len() / 1000, 1);
    let mut series = Vec::with_capacity(samples.len() / interval + 1);
    let mut total_ms = 0.0;

    for (i, sample) in samples.iter().enumerate() {
        total_ms += sample.latency().as_secs_f64() * 1e3;
        if (i + 1) % interval == 0 {
            series.push(Bucket {
                end_index: (i + 1) as u64,
                total_latency_ms: total_ms,
            });
            total_ms = 0.0;
        }
    }
    if samples.len() % interval != 0 {
        series.push(Bucket {
            end_index: samples.len() as u64,
            total_latency_ms: total_ms,
        });
    }

    series
}
