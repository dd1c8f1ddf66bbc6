//! Bambot - Detect known failure signatures in CI build logs
//!
//! This is the main entry point for the CLI application.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bambot::cli::{self, exit_codes, Cli, Commands};

fn main() {
    // Parse CLI arguments; usage errors share the invalid-arguments exit code
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(exit_codes::INVALID_ARGS);
        }
        Err(e) => e.exit(),
    };

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    let config_path = cli.config.as_deref();

    // Execute the appropriate command
    let result = match cli.command {
        Commands::Scan(args) => cli::commands::scan::execute(args, config_path),
        Commands::Rules(args) => cli::commands::rules::execute(args, config_path),
    };

    // Handle exit codes for CI integration
    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(exit_codes::for_error(&e));
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
