//! PDF decoding into positioned-text operators.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// A text-positioning instruction from a page content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Operator {
    /// Move the text cursor to horizontal coordinate `x`.
    SetPosition { x: f64 },
    /// Draw a string at the current cursor.
    ShowText { value: String },
}

impl Operator {
    /// Shorthand for [`Operator::SetPosition`].
    pub fn position(x: f64) -> Self {
        Operator::SetPosition { x }
    }

    /// Shorthand for [`Operator::ShowText`].
    pub fn text(value: impl Into<String>) -> Self {
        Operator::ShowText {
            value: value.into(),
        }
    }
}

/// A document that can hand out the text operators of each page.
///
/// Pages are 1-indexed. Implementations must fail explicitly on unreadable
/// documents rather than yield empty pages.
pub trait OperatorSource {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Decoded operators of one page, in draw order.
    fn operators_for_page(&self, page: u32) -> Result<Vec<Operator>>;
}

/// Pages already decoded in memory.
impl OperatorSource for [Vec<Operator>] {
    fn page_count(&self) -> u32 {
        self.len() as u32
    }

    fn operators_for_page(&self, page: u32) -> Result<Vec<Operator>> {
        page.checked_sub(1)
            .and_then(|index| self.get(index as usize))
            .cloned()
            .ok_or(PdfError::InvalidPage(page))
    }
}

impl OperatorSource for Vec<Vec<Operator>> {
    fn page_count(&self) -> u32 {
        self.as_slice().page_count()
    }

    fn operators_for_page(&self, page: u32) -> Result<Vec<Operator>> {
        self.as_slice().operators_for_page(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_pages_are_one_indexed() {
        let pages = vec![vec![Operator::text("first")], vec![Operator::position(10.0)]];

        assert_eq!(pages.page_count(), 2);
        assert_eq!(pages.operators_for_page(1).unwrap(), vec![Operator::text("first")]);
        assert!(matches!(pages.operators_for_page(0), Err(PdfError::InvalidPage(0))));
        assert!(matches!(pages.operators_for_page(3), Err(PdfError::InvalidPage(3))));
    }
}
