//! Command implementation.

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use sublogic_core::Opinion;
use tracing::debug;

/// Build the formatter from command-line flags layered over the config.
pub fn formatter_for(cli: &Cli, config: &Config) -> Formatter {
    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    Formatter::new(format, color_enabled, config.settings.precision)
}

/// Construct the opinion given on the command line and render it.
pub fn execute(cli: &Cli, formatter: &Formatter) -> Result<String> {
    let opinion = Opinion::new(cli.belief, cli.disbelief, cli.uncertainty, cli.base_rate)?;
    debug!(?opinion, "constructed opinion");
    formatter.format_opinion(&opinion)
}
