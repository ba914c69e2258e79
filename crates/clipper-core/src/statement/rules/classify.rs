//! Classification of shown text into page chrome, headings and data.

use super::columns::Column;
use super::timestamp::is_bare_date;
use crate::models::config::LayoutConfig;

/// What a piece of shown text means to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextClass {
    /// Page chrome: footers, headers, footnotes, blank strings.
    Ignorable,
    /// Heading label of a column.
    Heading(Column),
    /// A cell value.
    Data,
}

/// Classify `text` using the layout's chrome prefixes and heading labels.
///
/// Checks run in a fixed order: blank text, chrome prefixes, bare dates,
/// then headings. Everything else is data.
pub fn classify(text: &str, layout: &LayoutConfig) -> TextClass {
    if text.trim().is_empty() {
        return TextClass::Ignorable;
    }

    if layout
        .ignore_prefixes
        .iter()
        .any(|prefix| text.starts_with(prefix.as_str()))
    {
        return TextClass::Ignorable;
    }

    if is_bare_date(text) {
        return TextClass::Ignorable;
    }

    match layout.headings.column_for(text) {
        Some(column) => TextClass::Heading(column),
        None => TextClass::Data,
    }
}
