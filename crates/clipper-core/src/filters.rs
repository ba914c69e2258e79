//! Record filters by weekday and kind.

use chrono::Weekday;

use crate::error::FilterError;
use crate::models::config::FilterConfig;
use crate::models::transaction::{Kind, Transaction};

/// Keep transactions that happened on one of `weekdays`.
pub fn by_weekday(transactions: &[Transaction], weekdays: &[Weekday]) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| weekdays.contains(&t.weekday()))
        .cloned()
        .collect()
}

/// Keep transactions matching any of `kinds`.
pub fn by_kind(transactions: &[Transaction], kinds: &[Kind]) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| kinds.iter().any(|&kind| t.is_kind(kind)))
        .cloned()
        .collect()
}

/// Apply the weekday filter, then the kind filter.
pub fn apply(transactions: &[Transaction], filters: &FilterConfig) -> Vec<Transaction> {
    by_kind(&by_weekday(transactions, &filters.weekdays), &filters.kinds)
}

/// Parse a full English weekday name, ignoring case.
pub fn parse_weekday(name: &str) -> Result<Weekday, FilterError> {
    let weekday = match name.trim().to_lowercase().as_str() {
        "monday" => Weekday::Mon,
        "tuesday" => Weekday::Tue,
        "wednesday" => Weekday::Wed,
        "thursday" => Weekday::Thu,
        "friday" => Weekday::Fri,
        "saturday" => Weekday::Sat,
        "sunday" => Weekday::Sun,
        _ => return Err(FilterError::UnknownWeekday(name.to_string())),
    };
    Ok(weekday)
}

/// Parse a comma-separated list of weekday names.
pub fn parse_weekdays(list: &str) -> Result<Vec<Weekday>, FilterError> {
    list.split(',').map(parse_weekday).collect()
}

/// Parse a kind name: `informational`, `credit` or `debit`, ignoring case.
pub fn parse_kind(name: &str) -> Result<Kind, FilterError> {
    match name.trim().to_lowercase().as_str() {
        "informational" => Ok(Kind::Informational),
        "credit" => Ok(Kind::Credit),
        "debit" => Ok(Kind::Debit),
        _ => Err(FilterError::UnknownKind(name.to_string())),
    }
}

/// Parse a comma-separated list of kind names.
pub fn parse_kinds(list: &str) -> Result<Vec<Kind>, FilterError> {
    list.split(',').map(parse_kind).collect()
}
