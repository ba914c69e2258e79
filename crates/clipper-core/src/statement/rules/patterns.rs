//! Regex patterns for statement values.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Row timestamp: MM/DD/YYYY H:MM AM|PM (hour may be written 24-hour style)
    pub static ref TIMESTAMP: Regex = Regex::new(
        r"^(\d{2})/(\d{2})/(\d{4}) (\d{1,2}):(\d{2}) (AM|PM)$"
    ).unwrap();

    // Statement period dates in the page header: MM/DD/YYYY
    pub static ref BARE_DATE: Regex = Regex::new(
        r"^(\d{2})/(\d{2})/(\d{4})$"
    ).unwrap();
}
