use std::{env, path::PathBuf, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Per-station min/mean/max over a measurement file.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Measurement file to aggregate.
    #[arg(default_value = "measurements.txt")]
    input: PathBuf,
}

/// Worker count from the `NUM_THREADS` environment variable, passed
/// explicitly into the scheduler. Absent or unparsable means 0, which the
/// scheduler resolves to one worker per available core.
fn num_threads_from_env() -> usize {
    env::var("NUM_THREADS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match brc::summarize_path(&args.input, num_threads_from_env()) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("brc: {err}");
            ExitCode::FAILURE
        }
    }
}
