use std::fs::File;
use std::io::{self, BufReader};
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use train_station::script::{Runner, RunnerConfig, ScriptError};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only station output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let config = RunnerConfig::from_env();
    let script = std::env::args().nth(1);

    match run(config, script.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Run a script file, or stdin when no path is given.
fn run(config: RunnerConfig, script: Option<&str>) -> Result<(), ScriptError> {
    let stdout = io::stdout().lock();
    let mut runner = Runner::new(config, stdout);

    match script {
        Some(path) => {
            let file = File::open(path)?;
            runner.run_reader(BufReader::new(file))?;
        }
        None => {
            runner.run_reader(io::stdin().lock())?;
        }
    }

    Ok(())
}
