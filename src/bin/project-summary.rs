//! project-summary CLI Binary
//!
//! Writes `projectSummary.json` for the project root given as the only
//! argument, or for the current directory.

use clap::Parser;
use project_summary::cli::{map_error, Cli, RunContext};
use project_summary::logging::{init_logging, LoggingConfig};
use std::io::IsTerminal;
use std::process;
use tracing::{debug, error};

fn main() {
    let cli = Cli::parse();

    let logging_config = LoggingConfig {
        color: std::io::stderr().is_terminal(),
        ..LoggingConfig::default()
    };
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| RunContext::new(&cli, &cwd))
        .and_then(|context| context.execute());

    match result {
        Ok(path) => {
            debug!(path = %path.display(), "Command completed successfully");
        }
        Err(e) => {
            error!("Summary generation failed: {:#}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}
