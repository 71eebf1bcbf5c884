//! Command-line argument parsing.

use clap::Parser;
use std::path::PathBuf;

/// Sublogic - build a binomial subjective-logic opinion and print it.
#[derive(Debug, Parser)]
#[command(name = "sublogic")]
#[command(version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Belief mass (0.0-1.0)
    pub belief: f64,

    /// Disbelief mass (0.0-1.0)
    pub disbelief: f64,

    /// Uncertainty mass (0.0-1.0)
    pub uncertainty: f64,

    /// Base rate (0.0-1.0)
    pub base_rate: f64,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, env = "SUBLOGIC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log operator details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Single summary line (default)
    Text,
    /// JSON object
    Json,
    /// Table with the projected probability
    Table,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => crate::config::OutputFormat::Text,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Table => crate::config::OutputFormat::Table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_four_positional_arguments() {
        let cli = Cli::try_parse_from(["sublogic", "0.5", "0.3", "0.2", "0.5"]).unwrap();
        assert_eq!(cli.belief, 0.5);
        assert_eq!(cli.disbelief, 0.3);
        assert_eq!(cli.uncertainty, 0.2);
        assert_eq!(cli.base_rate, 0.5);
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_too_few_arguments() {
        let err = Cli::try_parse_from(["sublogic", "0.5", "0.3", "0.2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_too_many_arguments() {
        let err =
            Cli::try_parse_from(["sublogic", "0.5", "0.3", "0.2", "0.5", "0.1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_non_numeric_argument() {
        let err = Cli::try_parse_from(["sublogic", "half", "0.3", "0.2", "0.5"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_negative_value_is_a_value() {
        let cli = Cli::try_parse_from(["sublogic", "-0.5", "0.3", "0.2", "0.5"]).unwrap();
        assert_eq!(cli.belief, -0.5);
    }

    #[test]
    fn test_format_flag() {
        let cli =
            Cli::try_parse_from(["sublogic", "--format", "json", "0.5", "0.3", "0.2", "0.5"])
                .unwrap();
        assert!(matches!(cli.format, Some(CliFormat::Json)));
    }
}
