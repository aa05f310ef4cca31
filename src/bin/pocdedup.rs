//! pocdedup CLI Binary
//!
//! Scans a PoC directory for files declaring the same path and keeps the newest of each.

use anyhow::Context;
use clap::Parser;
use pocdedup::logging::init_logging;
use pocdedup::tooling::cli::{Cli, CliContext};
use std::io;
use std::process;

fn run(cli: &Cli) -> anyhow::Result<()> {
    let context = CliContext::new(cli.dir.clone(), cli.config.clone())
        .context("loading configuration")?;

    let logging = cli.logging_config(context.config().logging.clone());
    init_logging(Some(&logging), cli.log_file.clone(), Some(&cli.dir))
        .context("initializing logging")?;

    let stdout = io::stdout();
    context.execute_to(&cli.run_request(), &mut stdout.lock())?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
