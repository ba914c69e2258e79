//! Error types for the clipper-core library.

use thiserror::Error;

/// Main error type for the clipper library.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// PDF container or content stream error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Table reconstruction error.
    #[error("statement error: {0}")]
    Statement(#[from] StatementError),

    /// Unrecognized filter value.
    #[error(transparent)]
    Filter(#[from] FilterError),

    /// A page failed to convert; wraps the underlying error with its position.
    #[error("error converting page {page} of {total}: {source}")]
    Page {
        page: u32,
        total: u32,
        #[source]
        source: Box<LedgerError>,
    },

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl LedgerError {
    /// Wrap an error with the page it occurred on.
    pub fn on_page(self, page: u32, total: u32) -> Self {
        LedgerError::Page {
            page,
            total,
            source: Box::new(self),
        }
    }
}

/// Errors related to PDF decoding.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted and cannot be read")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),

    /// The page content stream could not be read or decoded.
    #[error("page {page}: failed to decode content stream: {reason}")]
    Content { page: u32, reason: String },

    /// An operator carried the wrong number or kind of operands.
    #[error("page {page}: invalid {operator} operands: {reason}")]
    Operand {
        page: u32,
        operator: String,
        reason: String,
    },
}

/// Errors raised while assembling rows into transactions.
#[derive(Error, Debug)]
pub enum StatementError {
    /// The value in the timestamp column is not a statement timestamp.
    #[error("invalid timestamp {value:?}, expected MM/DD/YYYY HH:MM AM|PM")]
    InvalidTimestamp { value: String },
}

/// Errors raised while parsing filter values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("weekday {0:?} is not recognized")]
    UnknownWeekday(String),

    #[error("kind {0:?} is not recognized")]
    UnknownKind(String),
}

/// Result type for the clipper library.
pub type Result<T> = std::result::Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_context_in_message() {
        let err = LedgerError::from(StatementError::InvalidTimestamp {
            value: "Purchase".to_string(),
        })
        .on_page(2, 3);

        let message = err.to_string();
        assert!(message.starts_with("error converting page 2 of 3:"));
        assert!(message.contains("\"Purchase\""));
    }

    #[test]
    fn test_filter_error_message() {
        let err = LedgerError::from(FilterError::UnknownWeekday("funday".to_string()));
        assert_eq!(err.to_string(), "weekday \"funday\" is not recognized");
    }

    #[test]
    fn test_operand_error_message() {
        let err = PdfError::Operand {
            page: 1,
            operator: "Tm".to_string(),
            reason: "expected 6 operands, found 4".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "page 1: invalid Tm operands: expected 6 operands, found 4"
        );
    }
}
