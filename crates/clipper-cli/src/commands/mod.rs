//! Subcommands and the options they share.

pub mod batch;
pub mod config;
pub mod convert;

use std::path::Path;

use clap::Args;
use tracing::debug;

use clipper_core::export::{format_text, to_csv_string, to_json_string};
use clipper_core::filters::{apply, parse_kinds, parse_weekdays};
use clipper_core::models::config::{LedgerConfig, RowBoundaryPolicy};
use clipper_core::{StatementParser, TransactionHistory};

/// Output format.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// CSV, one line per transaction
    Csv,
    /// JSON document with all transactions
    Json,
    /// Plain text listing
    Text,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }
}

/// How a new table row is recognized.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum RowBoundary {
    /// A value drawn in the timestamp column starts a row
    ColumnResolution,
    /// A value shaped like a timestamp starts a row
    TimestampShape,
}

impl From<RowBoundary> for RowBoundaryPolicy {
    fn from(value: RowBoundary) -> Self {
        match value {
            RowBoundary::ColumnResolution => RowBoundaryPolicy::ColumnResolution,
            RowBoundary::TimestampShape => RowBoundaryPolicy::TimestampShape,
        }
    }
}

/// Conversion options shared by `convert` and `batch`.
#[derive(Args, Debug)]
pub struct ConversionArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Omit the CSV heading line
    #[arg(long)]
    pub no_headings: bool,

    /// Keep only transactions on these weekdays (e.g. "monday,friday")
    #[arg(long)]
    pub weekdays: Option<String>,

    /// Keep only transactions of these kinds (debit, credit, informational)
    #[arg(long)]
    pub kinds: Option<String>,

    /// Row boundary detection
    #[arg(long, value_enum)]
    pub row_boundary: Option<RowBoundary>,
}

impl ConversionArgs {
    /// Overlay command-line flags on the loaded configuration.
    pub fn apply_to(&self, config: &mut LedgerConfig) -> anyhow::Result<()> {
        if self.no_headings {
            config.output.include_headings = false;
        }
        if let Some(weekdays) = &self.weekdays {
            config.filters.weekdays = parse_weekdays(weekdays)?;
        }
        if let Some(kinds) = &self.kinds {
            config.filters.kinds = parse_kinds(kinds)?;
        }
        if let Some(row_boundary) = self.row_boundary {
            config.layout.row_boundary = row_boundary.into();
        }
        Ok(())
    }
}

/// Load the configuration from `path`, or from the default location when it
/// exists, or fall back to defaults.
pub fn load_config(path: Option<&str>) -> anyhow::Result<LedgerConfig> {
    if let Some(path) = path {
        return LedgerConfig::from_file(Path::new(path))
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path, e));
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        debug!("Using config {}", default_path.display());
        Ok(LedgerConfig::from_file(&default_path)?)
    } else {
        Ok(LedgerConfig::default())
    }
}

/// Convert PDF bytes and apply the configured filters.
pub fn convert_bytes(data: &[u8], config: &LedgerConfig) -> anyhow::Result<TransactionHistory> {
    let parser = StatementParser::with_layout(config.layout.clone());
    let history = parser.parse_pdf(data)?;
    let total = history.len();

    let transactions = apply(&history.transactions, &config.filters);
    debug!("Kept {} of {} transactions after filtering", transactions.len(), total);

    Ok(TransactionHistory {
        transactions,
        pages: history.pages,
    })
}

/// Render a converted history in the requested format.
pub fn render(
    history: &TransactionHistory,
    format: OutputFormat,
    config: &LedgerConfig,
) -> anyhow::Result<String> {
    let output = match format {
        OutputFormat::Csv => {
            to_csv_string(&history.transactions, config.output.include_headings)?
        }
        OutputFormat::Json => to_json_string(history)?,
        OutputFormat::Text => format_text(&history.transactions),
    };
    Ok(output)
}
