//! blkbench CLI entry point

use blkbench::config::cli::Cli;
use blkbench::config::BenchConfig;
use blkbench::output::text;
use blkbench::stats::Report;
use blkbench::{bench, device};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Help and version exit 0; every other parse failure uses the single
    // standardized failure code.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let failed = err.use_stderr();
            let _ = err.print();
            return if failed {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = cli.into_config();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("blkbench: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &BenchConfig) -> blkbench::Result<()> {
    let mut device = device::open_device(&config.device, config.mode)?;
    let run = bench::run(&mut device, config)?;
    let report = Report::from_samples(&run.samples, config.block_size)?;

    text::print_report(config, &run, &report);
    if config.verbose {
        text::print_latency_series(&run.samples);
        text::print_latency_summary(&report);
    }
    Ok(())
}
