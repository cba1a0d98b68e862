use std::{path::PathBuf, process::ExitCode};

use clap::Parser;

use brc::{aggregate_serial, render_report};

/// Single-threaded reference aggregation over a measurement file.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Measurement file to aggregate.
    #[arg(default_value = "measurements.txt")]
    input: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let report = aggregate_serial(&args.input).and_then(|stations| render_report(&stations));
    match report {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("baseline: {err}");
            ExitCode::FAILURE
        }
    }
}
