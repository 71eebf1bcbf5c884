//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use rust_decimal::{Decimal, RoundingStrategy};
use sublogic_core::Opinion;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    precision: u32,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool, precision: u32) -> Self {
        Self {
            format,
            color_enabled,
            precision,
        }
    }

    /// Format an opinion.
    pub fn format_opinion(&self, opinion: &Opinion) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(self.format_opinion_text(opinion)),
            OutputFormat::Json => self.format_opinion_json(opinion),
            OutputFormat::Table => self.format_opinion_table(opinion),
        }
    }

    /// Format an opinion as a single line.
    fn format_opinion_text(&self, opinion: &Opinion) -> String {
        let line = format!(
            "Opinion(belief={}, disbelief={}, uncertainty={}, base_rate={})",
            self.number(opinion.belief()),
            self.number(opinion.disbelief()),
            self.number(opinion.uncertainty()),
            self.number(opinion.base_rate()),
        );
        self.success(&format!("Created binomial opinion: {}", line))
    }

    /// Format an opinion as JSON.
    fn format_opinion_json(&self, opinion: &Opinion) -> Result<String> {
        Ok(serde_json::to_string_pretty(&opinion.to_json())?)
    }

    /// Format an opinion as a table.
    fn format_opinion_table(&self, opinion: &Opinion) -> Result<String> {
        let mut builder = Builder::default();
        builder.push_record(["Component", "Value"]);
        builder.push_record(["belief".to_string(), self.number(opinion.belief())]);
        builder.push_record(["disbelief".to_string(), self.number(opinion.disbelief())]);
        builder.push_record(["uncertainty".to_string(), self.number(opinion.uncertainty())]);
        builder.push_record(["base_rate".to_string(), self.number(opinion.base_rate())]);
        builder.push_record([
            "probability".to_string(),
            self.number(opinion.probability()?),
        ]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Render a number at the configured precision.
    fn number(&self, value: Decimal) -> String {
        let rounded =
            value.round_dp_with_strategy(self.precision, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.*}", self.precision as usize, rounded)
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(message, "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            _ => text.to_string(),
        }
    }
}
