// litentropy/src/main.rs
//! litentropy entry point.
//!
//! Loads `.env`, sets up logging from the global flags and dispatches to the
//! selected subcommand.

use anyhow::Result;
use clap::Parser;

use litentropy::cli::{Cli, Commands};
use litentropy::logger;
use litentropy::{run_analyze, run_books, run_measure};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();

    logger::init_logger(logger::level_from_flags(args.quiet, args.debug));

    match &args.command {
        Commands::Analyze(cmd) => run_analyze(cmd, args.quiet).await,
        Commands::Measure(cmd) => run_measure(cmd),
        Commands::Books(cmd) => run_books(cmd),
    }
}
