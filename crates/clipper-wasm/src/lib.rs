//! WASM bindings for transit-card statement conversion.
//!
//! The browser hands over the bytes of an uploaded statement PDF and gets
//! CSV or JSON back. Conversion runs entirely client-side.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use clipper_core::export::{to_csv_string, to_json_string};
use clipper_core::filters::{apply, parse_kinds, parse_weekdays};
use clipper_core::{FilterError, LedgerConfig, StatementParser, TransactionHistory};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Convert a statement PDF to CSV.
#[wasm_bindgen]
pub fn convert_pdf_to_csv(bytes: &[u8], include_headings: bool) -> Result<String, JsValue> {
    let mut config = LedgerConfig::default();
    config.output.include_headings = include_headings;
    csv_from_pdf(bytes, &config).map_err(to_js_error)
}

/// Convert a statement PDF to a JSON document.
#[wasm_bindgen]
pub fn convert_pdf_to_json(bytes: &[u8]) -> Result<String, JsValue> {
    history_from_pdf(bytes, &LedgerConfig::default())
        .and_then(|history| to_json_string(&history))
        .map_err(to_js_error)
}

/// Statement converter class for browser use.
#[wasm_bindgen]
pub struct StatementConverter {
    config: LedgerConfig,
}

#[wasm_bindgen]
impl StatementConverter {
    /// Create a converter with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            config: LedgerConfig::default(),
        }
    }

    /// Include or omit the CSV heading line.
    #[wasm_bindgen]
    pub fn set_headings(&mut self, include: bool) {
        self.config.output.include_headings = include;
    }

    /// Keep only transactions on the given weekdays, e.g. "monday,friday".
    #[wasm_bindgen]
    pub fn set_weekdays(&mut self, weekdays: &str) -> Result<(), JsValue> {
        self.config.filters.weekdays = parse_weekdays(weekdays).map_err(filter_error)?;
        Ok(())
    }

    /// Keep only transactions of the given kinds, e.g. "debit,credit".
    #[wasm_bindgen]
    pub fn set_kinds(&mut self, kinds: &str) -> Result<(), JsValue> {
        self.config.filters.kinds = parse_kinds(kinds).map_err(filter_error)?;
        Ok(())
    }

    /// Convert to CSV with the current settings.
    #[wasm_bindgen]
    pub fn convert(&self, bytes: &[u8]) -> Result<String, JsValue> {
        csv_from_pdf(bytes, &self.config).map_err(to_js_error)
    }

    /// Convert to a plain JS object `{ transactions, pages }`.
    #[wasm_bindgen]
    pub fn convert_to_object(&self, bytes: &[u8]) -> Result<JsValue, JsValue> {
        let history = history_from_pdf(bytes, &self.config).map_err(to_js_error)?;

        #[derive(Serialize)]
        struct Row {
            timestamp: String,
            transaction_type: String,
            location: String,
            route: String,
            product: String,
            debit: String,
            credit: String,
            balance: String,
        }

        #[derive(Serialize)]
        struct Output {
            transactions: Vec<Row>,
            pages: u32,
        }

        let output = Output {
            pages: history.pages,
            transactions: history
                .transactions
                .into_iter()
                .map(|t| Row {
                    timestamp: clipper_core::statement::rules::format_timestamp(&t.timestamp),
                    transaction_type: t.transaction_type,
                    location: t.location,
                    route: t.route,
                    product: t.product,
                    debit: t.debit,
                    credit: t.credit,
                    balance: t.balance,
                })
                .collect(),
        };

        serde_wasm_bindgen::to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for StatementConverter {
    fn default() -> Self {
        Self::new()
    }
}

fn history_from_pdf(bytes: &[u8], config: &LedgerConfig) -> clipper_core::Result<TransactionHistory> {
    let history = StatementParser::with_layout(config.layout.clone()).parse_pdf(bytes)?;
    Ok(TransactionHistory {
        transactions: apply(&history.transactions, &config.filters),
        pages: history.pages,
    })
}

fn csv_from_pdf(bytes: &[u8], config: &LedgerConfig) -> clipper_core::Result<String> {
    let history = history_from_pdf(bytes, config)?;
    to_csv_string(&history.transactions, config.output.include_headings)
}

fn to_js_error(err: clipper_core::LedgerError) -> JsValue {
    web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
    js_sys::Error::new(&format!("error parsing pdf: {}", err)).into()
}

fn filter_error(err: FilterError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clipper_core::{Kind, LedgerError, PdfError};
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    fn text_at(x: i64, text: &str) -> [Operation; 2] {
        [
            Operation::new(
                "Tm",
                vec![
                    Object::Integer(1),
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Integer(1),
                    Object::Integer(x),
                    Object::Integer(0),
                ],
            ),
            Operation::new("Tj", vec![Object::string_literal(text)]),
        ]
    }

    fn statement() -> Vec<u8> {
        let mut operations = Vec::new();
        for (label, x) in [
            ("TRANSACTION TYPE", 50),
            ("LOCATION", 120),
            ("ROUTE", 180),
            ("PRODUCT", 240),
            ("DEBIT", 300),
            ("CREDIT", 360),
            ("BALANCE*", 420),
        ] {
            operations.extend(text_at(x, label));
        }
        // 2020-01-06 was a Monday.
        for (timestamp, kind, x, amount) in [
            ("01/06/2020 08:15 AM", "Fare", 300, "2.50"),
            ("01/07/2020 08:15 AM", "Reload", 360, "20.00"),
        ] {
            operations.extend(text_at(0, timestamp));
            operations.extend(text_at(50, kind));
            operations.extend(text_at(x, amount));
        }

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            Content { operations }.encode().unwrap(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![Object::Reference(page_id)],
                "Count" => Object::Integer(1),
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer).unwrap();
        buffer
    }

    #[test]
    fn test_csv_from_pdf() {
        let csv = csv_from_pdf(&statement(), &LedgerConfig::default()).unwrap();
        assert_eq!(
            csv,
            "Timestamp,Type,Location,Route,Product,Debit,Credit,Balance\n\
             01/06/2020 08:15 AM,Fare,,,,2.50,,\n\
             01/07/2020 08:15 AM,Reload,,,,,20.00,\n"
        );
    }

    #[test]
    fn test_filters_apply() {
        let mut config = LedgerConfig::default();
        config.output.include_headings = false;
        config.filters.kinds = vec![Kind::Credit];

        let csv = csv_from_pdf(&statement(), &config).unwrap();
        assert_eq!(csv, "01/07/2020 08:15 AM,Reload,,,,,20.00,\n");

        config.filters.kinds = Kind::ALL.to_vec();
        config.filters.weekdays = parse_weekdays("monday").unwrap();
        let history = history_from_pdf(&statement(), &config).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.pages, 1);
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = history_from_pdf(b"hello", &LedgerConfig::default()).unwrap_err();
        assert!(matches!(err, LedgerError::Pdf(PdfError::Parse(_))));
    }
}
