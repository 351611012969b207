mod cli;
mod demo;

use clap::Parser;
use qselect::SelectError;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let args = cli::Cli::parse();
    if let Err(e) = cli::run(args) {
        eprintln!("Error: {:#}", e);
        // Same status a shell reports for SIGINT.
        if matches!(e.downcast_ref::<SelectError>(), Some(SelectError::Interrupted)) {
            std::process::exit(130);
        }
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by QSELECT_LOG (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_env("QSELECT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
