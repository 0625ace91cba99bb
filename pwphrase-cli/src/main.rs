use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use pwphrase_cli::{Args, run};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // clap exits with 2 on usage errors; every failure here is 1.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Nothing useful is left to do if stderr itself is gone.
            let _ = e.print();
            return if e.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    init_tracing(args.verbose);

    match run(&args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!(error = ?e, validation = e.is_validation(), "password generation failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout only ever carries the password.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}
