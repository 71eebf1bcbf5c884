//! Sublogic CLI - build a binomial opinion from four numbers and print it.

use clap::error::ErrorKind;
use clap::Parser;
use std::process;
use sublogic_cli::{commands, logging, Cli, Config, Formatter};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Wrong argument count or non-numeric input; clap's message ends with the usage line
            eprint!("{}", e.render());
            process::exit(1);
        }
    };

    logging::init_tracing(cli.verbose);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    let formatter = commands::formatter_for(&cli, &config);

    if let Err(e) = run(&cli, &formatter) {
        eprintln!("{}", formatter.error(&e.to_string()));
        process::exit(1);
    }
}

fn run(cli: &Cli, formatter: &Formatter) -> sublogic_cli::Result<()> {
    let output = commands::execute(cli, formatter)?;
    println!("{}", output);
    Ok(())
}

fn load_config(cli: &Cli) -> sublogic_cli::Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Ok(Config::load().unwrap_or_else(|e| {
            tracing::warn!("Ignoring config file: {}", e);
            Config::default()
        })),
    }
}
