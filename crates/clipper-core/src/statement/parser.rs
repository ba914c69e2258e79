//! Page iteration over an operator source.

use std::time::Instant;

use tracing::debug;

use crate::error::LedgerError;
use crate::models::config::{ColumnHeadings, LayoutConfig, RowBoundaryPolicy};
use crate::models::transaction::{Transaction, TransactionHistory};
use crate::pdf::{Operator, OperatorSource, PdfExtractor};

use super::reconstructor::TableReconstructor;
use super::StatementExtractor;

/// Converts whole documents into a transaction history, one reconstructor
/// per page.
#[derive(Debug, Clone, Default)]
pub struct StatementParser {
    layout: LayoutConfig,
}

impl StatementParser {
    /// Create a parser with the default statement layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser for a custom layout.
    pub fn with_layout(layout: LayoutConfig) -> Self {
        Self { layout }
    }

    /// Set the row boundary policy.
    pub fn with_row_boundary(mut self, policy: RowBoundaryPolicy) -> Self {
        self.layout.row_boundary = policy;
        self
    }

    /// Set the heading labels.
    pub fn with_headings(mut self, headings: ColumnHeadings) -> Self {
        self.layout.headings = headings;
        self
    }

    /// Layout in use.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Rebuild the transactions of a single page.
    pub fn parse_page(&self, operators: &[Operator]) -> super::Result<Vec<Transaction>> {
        let mut reconstructor = TableReconstructor::new(&self.layout);
        for operator in operators {
            reconstructor.consume(operator)?;
        }
        reconstructor.finish()
    }

    /// Rebuild the transactions of every page, in page order.
    ///
    /// The first failing page aborts the whole document.
    pub fn parse<S: OperatorSource + ?Sized>(&self, source: &S) -> crate::Result<TransactionHistory> {
        let start = Instant::now();
        let total = source.page_count();
        debug!("Converting {} page(s)", total);

        let mut transactions = Vec::new();
        for page in 1..=total {
            let page_transactions = self
                .convert_page(source, page)
                .map_err(|e| e.on_page(page, total))?;
            debug!("Page {}: {} transaction(s)", page, page_transactions.len());
            transactions.extend(page_transactions);
        }

        debug!(
            "Converted {} transaction(s) in {}ms",
            transactions.len(),
            start.elapsed().as_millis()
        );

        Ok(TransactionHistory {
            transactions,
            pages: total,
        })
    }

    /// Decode a PDF and rebuild its transactions.
    pub fn parse_pdf(&self, data: &[u8]) -> crate::Result<TransactionHistory> {
        let extractor = PdfExtractor::from_bytes(data)?;
        self.parse(&extractor)
    }

    fn convert_page<S: OperatorSource + ?Sized>(
        &self,
        source: &S,
        page: u32,
    ) -> Result<Vec<Transaction>, LedgerError> {
        let operators = source.operators_for_page(page)?;
        Ok(self.parse_page(&operators)?)
    }
}

impl StatementExtractor for StatementParser {
    fn extract(&self, source: &dyn OperatorSource) -> crate::Result<TransactionHistory> {
        self.parse(source)
    }
}
