//! Human-readable text output
//!
//! Renders the fixed, whitespace-aligned report block plus, in verbose mode,
//! the bucketed latency series and a percentile summary.

use crate::bench::{BenchRun, Sample};
use crate::config::BenchConfig;
use crate::stats::{bucket_series, Report};

const GIB: f64 = (1u64 << 30) as f64;

/// Print the fixed-format benchmark report
pub fn print_report(config: &BenchConfig, run: &BenchRun, report: &Report) {
    println!("####################################");
    println!("# Device Information");
    println!("#   device name     {}", config.device.display());
    println!("#   sector size     {} bytes", run.geometry.sector_size);
    println!("#   # of sectors    {}", run.geometry.sector_count);
    println!(
        "#   volume          {:.3} GiB",
        run.geometry.volume_bytes() as f64 / GIB
    );
    println!("#");
    println!("# Benchmark Information");
    println!("#   type            {}", config.mode);
    println!("#   block size      {} bytes", config.block_size);
    println!("#   count           {}", report.effective_count);
    println!("#   total size      {:.3} MB", report.total_mb);
    println!("#   elapsed time    {:.6} sec", report.elapsed_secs);
    println!("#   throughput      {:.3} MB/sec", report.throughput_mb_per_sec);
    println!("#   IOPS            {:.3}", report.iops);
    println!("#   latency (mean)  {:.6} msec", report.mean_latency_ms);
    println!("####################################");
}

/// Print the coarse latency series: one line per bucket with the bucket's
/// ending iteration index and its summed latency in milliseconds
pub fn print_latency_series(samples: &[Sample]) {
    println!("#count total_latency[msec]");
    for bucket in bucket_series(samples) {
        println!("{} {:.6}", bucket.end_index, bucket.total_latency_ms);
    }
}

/// Print min/max and percentile latencies from the histogram
pub fn print_latency_summary(report: &Report) {
    if report.effective_count == 0 {
        return;
    }
    println!("#latency percentiles");
    println!("  min    {:?}", report.min_latency());
    println!("  max    {:?}", report.max_latency());
    for &p in &[50.0, 90.0, 99.0, 99.9] {
        println!("  p{:<5} {:?}", p, report.latency_percentile(p));
    }
}
