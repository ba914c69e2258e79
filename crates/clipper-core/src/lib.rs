//! Core library for transit-card statement conversion.
//!
//! This crate provides:
//! - PDF decoding into positioned-text operators
//! - Reconstruction of the transaction table from those operators
//! - Weekday and kind filters
//! - CSV, JSON and text export

pub mod error;
pub mod export;
pub mod filters;
pub mod models;
pub mod pdf;
pub mod statement;

pub use error::{FilterError, LedgerError, PdfError, Result, StatementError};
pub use models::config::{
    ColumnHeadings, FilterConfig, LayoutConfig, LedgerConfig, OutputConfig, RowBoundaryPolicy,
};
pub use models::transaction::{Kind, Transaction, TransactionHistory};
pub use pdf::{Operator, OperatorSource, PdfExtractor};
pub use statement::{Column, StatementExtractor, StatementParser, TableReconstructor};
