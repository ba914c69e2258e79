//! Configuration structures for statement conversion.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::models::transaction::Kind;
use crate::statement::Column;

/// Main configuration for the clipper pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Statement table layout.
    pub layout: LayoutConfig,

    /// Output configuration.
    pub output: OutputConfig,

    /// Default record filters.
    pub filters: FilterConfig,
}

/// Layout of the transaction table in the statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Heading labels used to learn column positions.
    pub headings: ColumnHeadings,

    /// Text prefixes that mark page chrome (footers, headers, footnotes).
    pub ignore_prefixes: Vec<String>,

    /// How the start of a new row is detected.
    pub row_boundary: RowBoundaryPolicy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            headings: ColumnHeadings::default(),
            ignore_prefixes: vec![
                "Page".to_string(),
                "*".to_string(),
                "CARD ".to_string(),
                "TRANSACTION HISTORY FOR".to_string(),
            ],
            row_boundary: RowBoundaryPolicy::default(),
        }
    }
}

/// Heading labels for the seven columns right of the timestamp.
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnHeadings {
    pub transaction_type: String,
    pub location: String,
    pub route: String,
    pub product: String,
    pub debit: String,
    pub credit: String,
    pub balance: String,
}

impl Default for ColumnHeadings {
    fn default() -> Self {
        Self {
            transaction_type: "TRANSACTION TYPE".to_string(),
            location: "LOCATION".to_string(),
            route: "ROUTE".to_string(),
            product: "PRODUCT".to_string(),
            debit: "DEBIT".to_string(),
            credit: "CREDIT".to_string(),
            balance: "BALANCE*".to_string(),
        }
    }
}

impl ColumnHeadings {
    /// Heading label for a column. The timestamp column has none.
    pub fn label(&self, column: Column) -> Option<&str> {
        let label = match column {
            Column::Timestamp => return None,
            Column::TransactionType => &self.transaction_type,
            Column::Location => &self.location,
            Column::Route => &self.route,
            Column::Product => &self.product,
            Column::Debit => &self.debit,
            Column::Credit => &self.credit,
            Column::Balance => &self.balance,
        };
        Some(label.as_str())
    }

    /// Column whose heading is exactly `text`.
    pub fn column_for(&self, text: &str) -> Option<Column> {
        Column::ALL
            .into_iter()
            .find(|&column| self.label(column) == Some(text))
    }
}

/// Rule used to decide that a data value starts a new row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowBoundaryPolicy {
    /// A value whose coordinate resolves to the timestamp column starts a row.
    #[default]
    ColumnResolution,
    /// A value shaped like a full timestamp starts a row, wherever it is drawn.
    TimestampShape,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Write a heading line before the records.
    pub include_headings: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_headings: true,
        }
    }
}

/// Default filters applied to converted records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Keep only transactions on these weekdays.
    pub weekdays: Vec<Weekday>,

    /// Keep only transactions of these kinds.
    pub kinds: Vec<Kind>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            weekdays: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun,
            ],
            kinds: Kind::ALL.to_vec(),
        }
    }
}

impl LedgerConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
