//! resume2latex CLI — structured resume data to LaTeX and PDF.

use clap::Parser;
use resume2latex::cli::{self, Cli};

/// Environment variable holding an `EnvFilter` directive that overrides -q/--verbose.
const LOG_ENV: &str = "RESUME2LATEX_LOG";

fn init_tracing(quiet: bool, verbose: bool) -> Result<(), String> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("failed to initialize logging: {}", e))
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = init_tracing(cli.quiet, cli.verbose) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
    if let Err(e) = cli::dispatch(cli) {
        cli::print_error_details(&e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
