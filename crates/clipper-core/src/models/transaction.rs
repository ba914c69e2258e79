//! Transaction ledger models for transit-card statements.

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// A single row of a card's transaction history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// When the transaction happened (statement local time).
    pub timestamp: NaiveDateTime,

    /// Transaction type, e.g. "Single-tag fare payment".
    pub transaction_type: String,

    /// Station or vehicle where the card was tagged.
    pub location: String,

    /// Route, when the operator reports one.
    pub route: String,

    /// Fare product used.
    pub product: String,

    /// Amount debited, empty when not applicable.
    pub debit: String,

    /// Amount credited, empty when not applicable.
    pub credit: String,

    /// Card balance after the transaction.
    pub balance: String,
}

/// Kind of transaction, derived from its debit and credit fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    /// Does not affect the balance.
    Informational,
    /// Increases the balance.
    Credit,
    /// Reduces the balance.
    Debit,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 3] = [Kind::Informational, Kind::Credit, Kind::Debit];
}

impl Transaction {
    /// Derive the kind of this transaction.
    ///
    /// Statements never fill both the debit and the credit column; if a
    /// malformed row does, it is reported as a credit.
    pub fn kind(&self) -> Kind {
        if !self.credit.is_empty() {
            Kind::Credit
        } else if !self.debit.is_empty() {
            Kind::Debit
        } else {
            Kind::Informational
        }
    }

    /// Whether this transaction counts as the given kind.
    pub fn is_kind(&self, kind: Kind) -> bool {
        match kind {
            Kind::Credit => !self.credit.is_empty(),
            Kind::Debit => !self.debit.is_empty(),
            Kind::Informational => self.credit.is_empty() && self.debit.is_empty(),
        }
    }

    /// Day of the week the transaction happened on.
    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }
}

/// All transactions read from one statement document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionHistory {
    /// Transactions in page order, then row order.
    pub transactions: Vec<Transaction>,

    /// Number of pages the statement had.
    pub pages: u32,
}

impl TransactionHistory {
    /// Number of transactions.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether no transactions were found.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
