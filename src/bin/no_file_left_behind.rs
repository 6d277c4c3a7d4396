//! No File Left Behind CLI Binary

use anyhow::Context;
use clap::Parser;
use no_file_left_behind::logging;
use no_file_left_behind::tooling::cli::{Cli, CliContext};
use std::process;

fn run(cli: &Cli) -> anyhow::Result<()> {
    let context = CliContext::new(cli).context("failed to load configuration")?;
    logging::init_logging(Some(&context.config().logging), cli.log_file.clone())
        .context("failed to initialize logging")?;

    let output = context.run(cli)?;
    println!("{}", output.summary);
    if let Some(reports) = output.reports {
        reports.context("failed to write reports")?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
