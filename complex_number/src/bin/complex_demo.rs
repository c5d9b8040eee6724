//! Complex number demonstration
//!
//! Usage:
//!   complex_demo                      # Run the fixed demonstration
//!   complex_demo "(3,4)" "(2 > 90)"   # Parse and describe each input
//!   complex_demo -vv "(1,"            # Show parser diagnostics

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use complex_number::demo::{DemoReport, Description};
use complex_number::ComplexNumber;

#[derive(Parser, Debug)]
#[command(name = "complex_demo", version, about = "Complex number demonstration")]
struct Cli {
    /// Complex numbers to describe, as "(real, imag)" or "(magnitude > degrees)"
    inputs: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(verbose >= 2)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.inputs.is_empty() {
        return match DemoReport::new() {
            Ok(report) => {
                print!("{}", report);
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!("demonstration input failed to parse: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    let mut failed = 0usize;
    for input in &cli.inputs {
        match ComplexNumber::parse(input) {
            Ok(value) => print!("{}", Description { input, value }),
            Err(e) => {
                failed += 1;
                let context = e.format_with_context(input);
                if context.is_empty() {
                    error!("failed to parse {:?}: {}", input, e);
                } else {
                    error!("failed to parse {:?}: {}\n{}", input, e, context);
                }
            }
        }
    }

    info!(total = cli.inputs.len(), failed, "processed inputs");
    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
