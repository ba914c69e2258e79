//! Transaction table reconstruction from positioned text.

mod parser;
pub mod reconstructor;
pub mod row;
pub mod rules;

pub use parser::StatementParser;
pub use reconstructor::TableReconstructor;
pub use row::RowBuffer;
pub use rules::{Column, ColumnBoundaries, TextClass};

use crate::error::StatementError;
use crate::models::transaction::TransactionHistory;
use crate::pdf::OperatorSource;

/// Result type for row assembly.
pub type Result<T> = std::result::Result<T, StatementError>;

/// Trait for statement extractors.
pub trait StatementExtractor {
    /// Extract the full transaction history of a document.
    fn extract(&self, source: &dyn OperatorSource) -> crate::Result<TransactionHistory>;
}
