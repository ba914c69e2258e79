//! Statement columns and coordinate-to-column assignment.

use serde::{Deserialize, Serialize};

/// The eight columns of a transaction history table, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Timestamp = 0,
    TransactionType = 1,
    Location = 2,
    Route = 3,
    Product = 4,
    Debit = 5,
    Credit = 6,
    Balance = 7,
}

impl Column {
    /// Number of columns.
    pub const COUNT: usize = 8;

    /// All columns, left to right.
    pub const ALL: [Column; Column::COUNT] = [
        Column::Timestamp,
        Column::TransactionType,
        Column::Location,
        Column::Route,
        Column::Product,
        Column::Debit,
        Column::Credit,
        Column::Balance,
    ];

    /// Position of the column in a row.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Column at position `index`.
    pub fn from_index(index: usize) -> Option<Column> {
        Column::ALL.get(index).copied()
    }
}

/// Left edges of each column, learned from where its heading was drawn.
///
/// The timestamp column always starts at 0. Columns whose heading has not
/// been seen yet also sit at 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnBoundaries {
    edges: [f64; Column::COUNT],
}

impl ColumnBoundaries {
    /// All boundaries at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `column`'s heading was drawn at `x`. A later sighting
    /// replaces an earlier one. The timestamp column has no heading and is
    /// left untouched.
    pub fn learn(&mut self, column: Column, x: f64) {
        if column != Column::Timestamp {
            self.edges[column.index()] = x;
        }
    }

    /// Left edge of `column`.
    pub fn edge(&self, column: Column) -> f64 {
        self.edges[column.index()]
    }

    /// Column a value drawn at `x` belongs to: the rightmost column whose left
    /// edge is at or before `x`. Anything left of every edge falls into the
    /// timestamp column.
    pub fn resolve(&self, x: f64) -> Column {
        Column::ALL
            .into_iter()
            .rev()
            .find(|&column| x >= self.edges[column.index()])
            .unwrap_or(Column::Timestamp)
    }
}
