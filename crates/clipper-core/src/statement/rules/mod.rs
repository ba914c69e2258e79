//! Layout rules for transaction history tables.

pub mod classify;
pub mod columns;
pub mod patterns;
pub mod timestamp;

pub use classify::{classify, TextClass};
pub use columns::{Column, ColumnBoundaries};
pub use timestamp::{format_timestamp, is_bare_date, is_timestamp, parse_timestamp, TIMESTAMP_FORMAT};
