//! Serialization of transactions to CSV, JSON and plain text.

use std::io::Write;

use crate::models::transaction::{Transaction, TransactionHistory};
use crate::statement::rules::format_timestamp;
use crate::Result;

/// CSV header row.
pub const HEADINGS: [&str; 8] = [
    "Timestamp",
    "Type",
    "Location",
    "Route",
    "Product",
    "Debit",
    "Credit",
    "Balance",
];

/// The eight CSV fields of a transaction, timestamp in statement layout.
pub fn record(transaction: &Transaction) -> [String; 8] {
    [
        format_timestamp(&transaction.timestamp),
        transaction.transaction_type.clone(),
        transaction.location.clone(),
        transaction.route.clone(),
        transaction.product.clone(),
        transaction.debit.clone(),
        transaction.credit.clone(),
        transaction.balance.clone(),
    ]
}

/// Write one CSV line per transaction, optionally preceded by [`HEADINGS`].
pub fn write_csv<W: Write>(
    writer: W,
    transactions: &[Transaction],
    include_headings: bool,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    if include_headings {
        wtr.write_record(HEADINGS)?;
    }

    for transaction in transactions {
        wtr.write_record(record(transaction))?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render transactions as a CSV string.
pub fn to_csv_string(transactions: &[Transaction], include_headings: bool) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, transactions, include_headings)?;
    // csv only writes the UTF-8 it was given.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Write the history as pretty-printed JSON.
pub fn write_json<W: Write>(writer: W, history: &TransactionHistory) -> Result<()> {
    serde_json::to_writer_pretty(writer, history)?;
    Ok(())
}

/// Render the history as a pretty-printed JSON string.
pub fn to_json_string(history: &TransactionHistory) -> Result<String> {
    Ok(serde_json::to_string_pretty(history)?)
}

/// Human-readable listing, one line per transaction.
pub fn format_text(transactions: &[Transaction]) -> String {
    let mut output = String::new();

    for t in transactions {
        output.push_str(&format!(
            "{}  {}",
            format_timestamp(&t.timestamp),
            t.transaction_type
        ));
        for (label, value) in [("at", &t.location), ("route", &t.route), ("product", &t.product)] {
            if !value.is_empty() {
                output.push_str(&format!("  {label} {value}"));
            }
        }
        if !t.debit.is_empty() {
            output.push_str(&format!("  -{}", t.debit));
        }
        if !t.credit.is_empty() {
            output.push_str(&format!("  +{}", t.credit));
        }
        if !t.balance.is_empty() {
            output.push_str(&format!("  = {}", t.balance));
        }
        output.push('\n');
    }

    output.push_str(&format!("{} transaction(s)\n", transactions.len()));
    output
}
