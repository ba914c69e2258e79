//! In-progress table row.

use super::rules::{parse_timestamp, Column};
use super::Result;
use crate::error::StatementError;
use crate::models::transaction::Transaction;

/// Fields of one transaction collected so far, one slot per column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowBuffer {
    fields: [String; Column::COUNT],
}

impl RowBuffer {
    /// An empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// A row is blank when every slot is empty.
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(String::is_empty)
    }

    /// Store `value` in `column`, replacing whatever was there.
    pub fn set(&mut self, column: Column, value: &str) {
        let slot = &mut self.fields[column.index()];
        slot.clear();
        slot.push_str(value);
    }

    /// Current value of `column`.
    pub fn get(&self, column: Column) -> &str {
        &self.fields[column.index()]
    }

    /// Turn the collected fields into a transaction and leave the row blank.
    ///
    /// Fails if the timestamp slot does not hold a statement timestamp; the
    /// row is cleared either way.
    pub fn finalize(&mut self) -> Result<Transaction> {
        let [timestamp, transaction_type, location, route, product, debit, credit, balance] =
            std::mem::take(&mut self.fields);

        let parsed = parse_timestamp(&timestamp)
            .ok_or(StatementError::InvalidTimestamp { value: timestamp })?;

        Ok(Transaction {
            timestamp: parsed,
            transaction_type,
            location,
            route,
            product,
            debit,
            credit,
            balance,
        })
    }
}
