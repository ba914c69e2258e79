//! Single-pass reconstruction of table rows from positioned text.

use tracing::trace;

use super::row::RowBuffer;
use super::rules::{classify, is_timestamp, Column, ColumnBoundaries, TextClass};
use super::Result;
use crate::models::config::{LayoutConfig, RowBoundaryPolicy};
use crate::models::transaction::Transaction;
use crate::pdf::Operator;

/// Rebuilds the transaction table of one page from its text operators.
///
/// Feed every operator of the page to [`consume`](Self::consume) in draw
/// order, then call [`finish`](Self::finish). Column positions are learned
/// from heading labels as they appear, so a reconstructor must not be reused
/// across pages.
pub struct TableReconstructor<'a> {
    layout: &'a LayoutConfig,
    last_x: f64,
    boundaries: ColumnBoundaries,
    row: RowBuffer,
    output: Vec<Transaction>,
}

impl<'a> TableReconstructor<'a> {
    /// Create a reconstructor for a fresh page.
    pub fn new(layout: &'a LayoutConfig) -> Self {
        Self {
            layout,
            last_x: 0.0,
            boundaries: ColumnBoundaries::new(),
            row: RowBuffer::new(),
            output: Vec::new(),
        }
    }

    /// Advance by one operator.
    ///
    /// Fails only when a completed row has no valid timestamp.
    pub fn consume(&mut self, operator: &Operator) -> Result<()> {
        match operator {
            Operator::SetPosition { x } => {
                self.last_x = *x;
                Ok(())
            }
            Operator::ShowText { value } => self.show_text(value),
        }
    }

    /// Emit the last row, if any, and return all transactions of the page.
    pub fn finish(mut self) -> Result<Vec<Transaction>> {
        if !self.row.is_blank() {
            self.emit_row()?;
        }
        Ok(self.output)
    }

    /// Column edges learned so far.
    pub fn boundaries(&self) -> &ColumnBoundaries {
        &self.boundaries
    }

    /// Transactions completed so far.
    pub fn completed(&self) -> &[Transaction] {
        &self.output
    }

    fn show_text(&mut self, value: &str) -> Result<()> {
        match classify(value, self.layout) {
            TextClass::Ignorable => Ok(()),
            TextClass::Heading(column) => {
                trace!("Column {:?} starts at x={}", column, self.last_x);
                self.boundaries.learn(column, self.last_x);
                Ok(())
            }
            TextClass::Data => self.store(value),
        }
    }

    fn store(&mut self, value: &str) -> Result<()> {
        let resolved = self.boundaries.resolve(self.last_x);

        let (starts_row, column) = match self.layout.row_boundary {
            RowBoundaryPolicy::ColumnResolution => (resolved == Column::Timestamp, resolved),
            RowBoundaryPolicy::TimestampShape => {
                if is_timestamp(value) {
                    (true, Column::Timestamp)
                } else {
                    (false, resolved)
                }
            }
        };

        if starts_row && !self.row.is_blank() {
            self.emit_row()?;
        }

        self.row.set(column, value);
        Ok(())
    }

    fn emit_row(&mut self) -> Result<()> {
        let transaction = self.row.finalize()?;
        trace!(
            "Row {}: {} {:?}",
            self.output.len() + 1,
            transaction.timestamp,
            transaction.transaction_type
        );
        self.output.push(transaction);
        Ok(())
    }
}
