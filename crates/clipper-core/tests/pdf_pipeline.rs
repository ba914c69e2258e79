//! End-to-end conversion of generated statement PDFs.

use clipper_core::export::to_csv_string;
use clipper_core::{
    LedgerError, OperatorSource, PdfError, PdfExtractor, RowBoundaryPolicy, StatementError,
    StatementParser,
};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use pretty_assertions::assert_eq;

const HEADINGS: [(&str, i64); 7] = [
    ("TRANSACTION TYPE", 50),
    ("LOCATION", 120),
    ("ROUTE", 180),
    ("PRODUCT", 240),
    ("DEBIT", 300),
    ("CREDIT", 360),
    ("BALANCE*", 420),
];

fn tm(x: Object) -> Operation {
    Operation::new(
        "Tm",
        vec![
            Object::Integer(1),
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(1),
            x,
            Object::Integer(700),
        ],
    )
}

fn tj(text: &str) -> Operation {
    Operation::new("Tj", vec![Object::string_literal(text)])
}

fn cell(x: i64, text: &str) -> Vec<Operation> {
    vec![tm(Object::Integer(x)), tj(text)]
}

/// Operations of a statement page: chrome, headings, then one row per entry
/// of `(timestamp, type, debit, balance)`.
fn statement_page(page: usize, total: usize, rows: &[(&str, &str, &str, &str)]) -> Vec<Operation> {
    let mut ops = vec![
        Operation::new("BT", vec![]),
        Operation::new("Tf", vec![Object::Name(b"F1".to_vec()), Object::Integer(9)]),
    ];
    ops.extend(cell(0, "TRANSACTION HISTORY FOR CARD 1234567890"));
    ops.extend(cell(0, "01/01/2020"));
    for (label, x) in HEADINGS {
        ops.extend(cell(x, label));
    }
    for (timestamp, kind, debit, balance) in rows {
        ops.extend(cell(0, timestamp));
        ops.extend(cell(50, kind));
        ops.extend(cell(125, "Embarcadero"));
        if !debit.is_empty() {
            ops.extend(cell(305, debit));
        }
        ops.extend(cell(425, balance));
    }
    ops.extend(cell(0, &format!("Page {page} of {total}")));
    ops.push(Operation::new("ET", vec![]));
    ops
}

/// Build a PDF with one content stream per page.
fn build_pdf(pages: Vec<Vec<Operation>>) -> Vec<u8> {
    save(build_document(pages))
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

fn build_document(pages: Vec<Vec<Operation>>) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids = Vec::new();
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(count),
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Integer(612),
                Object::Integer(792),
            ],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

#[test]
fn test_single_page_to_csv() {
    let pdf = build_pdf(vec![statement_page(
        1,
        1,
        &[
            ("01/06/2020 08:15 AM", "Single-tag fare payment", "2.50", "17.50"),
            ("01/06/2020 05:40 PM", "Dual-tag entry transaction", "", "17.50"),
        ],
    )]);

    let history = StatementParser::new().parse_pdf(&pdf).unwrap();
    assert_eq!(history.pages, 1);
    assert_eq!(history.len(), 2);

    let csv = to_csv_string(&history.transactions, true).unwrap();
    assert_eq!(
        csv,
        "Timestamp,Type,Location,Route,Product,Debit,Credit,Balance\n\
         01/06/2020 08:15 AM,Single-tag fare payment,Embarcadero,,,2.50,,17.50\n\
         01/06/2020 17:40 PM,Dual-tag entry transaction,Embarcadero,,,,,17.50\n"
    );
}

#[test]
fn test_multipage_keeps_page_order() {
    let pdf = build_pdf(vec![
        statement_page(1, 3, &[("01/06/2020 08:15 AM", "first", "2.50", "17.50")]),
        statement_page(2, 3, &[]),
        statement_page(
            3,
            3,
            &[
                ("01/07/2020 08:15 AM", "second", "2.50", "15.00"),
                ("01/07/2020 09:15 AM", "third", "", "15.00"),
            ],
        ),
    ]);

    let history = StatementParser::new().parse_pdf(&pdf).unwrap();
    assert_eq!(history.pages, 3);
    let kinds: Vec<&str> = history
        .transactions
        .iter()
        .map(|t| t.transaction_type.as_str())
        .collect();
    assert_eq!(kinds, vec!["first", "second", "third"]);
}

#[test]
fn test_real_coordinates_and_other_operators() {
    let mut ops = vec![Operation::new("BT", vec![])];
    for (label, x) in HEADINGS {
        ops.push(tm(Object::Real(x as f32 + 0.5)));
        ops.push(tj(label));
    }
    ops.push(tm(Object::Real(0.0)));
    ops.push(Operation::new(
        "Td",
        vec![Object::Integer(400), Object::Integer(0)],
    ));
    ops.push(tj("01/06/2020 08:15 AM"));
    ops.push(tm(Object::Real(50.75)));
    ops.push(Operation::new("TJ", vec![Object::Array(vec![Object::string_literal("ignored")])]));
    ops.push(tj("Purchase"));
    ops.push(Operation::new("ET", vec![]));

    let history = StatementParser::new().parse_pdf(&build_pdf(vec![ops])).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history.transactions[0].transaction_type, "Purchase");
    assert_eq!(history.transactions[0].balance, "");
}

#[test]
fn test_extractor_yields_text_operators_only() {
    let pdf = build_pdf(vec![vec![
        Operation::new("BT", vec![]),
        tm(Object::Integer(42)),
        tj("hello"),
        Operation::new("ET", vec![]),
    ]]);

    let extractor = PdfExtractor::from_bytes(&pdf).unwrap();
    assert_eq!(extractor.page_count(), 1);
    assert_eq!(
        extractor.operators_for_page(1).unwrap(),
        vec![
            clipper_core::Operator::position(42.0),
            clipper_core::Operator::text("hello"),
        ]
    );
    assert!(matches!(
        extractor.operators_for_page(2),
        Err(PdfError::InvalidPage(2))
    ));
}

#[test]
fn test_bad_tm_arity_reports_page() {
    let mut second = statement_page(2, 2, &[]);
    second.insert(2, Operation::new("Tm", vec![Object::Integer(1), Object::Integer(0)]));
    let pdf = build_pdf(vec![statement_page(1, 2, &[]), second]);

    let err = StatementParser::new().parse_pdf(&pdf).unwrap_err();
    match err {
        LedgerError::Page { page, total, source } => {
            assert_eq!((page, total), (2, 2));
            assert!(matches!(
                *source,
                LedgerError::Pdf(PdfError::Operand { page: 2, .. })
            ));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_non_numeric_coordinate_is_an_error() {
    let pdf = build_pdf(vec![vec![tm(Object::Name(b"left".to_vec())), tj("x")]]);

    let err = StatementParser::new().parse_pdf(&pdf).unwrap_err();
    assert!(err.to_string().contains("invalid Tm operands"));
}

#[test]
fn test_invalid_timestamp_aborts_document() {
    let pdf = build_pdf(vec![statement_page(
        1,
        1,
        &[("not a time", "Purchase", "2.50", "17.50")],
    )]);

    let err = StatementParser::new().parse_pdf(&pdf).unwrap_err();
    match err {
        LedgerError::Page { source, .. } => assert!(matches!(
            *source,
            LedgerError::Statement(StatementError::InvalidTimestamp { .. })
        )),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_garbage_bytes_are_rejected() {
    assert!(matches!(
        PdfExtractor::from_bytes(b"this is not a pdf"),
        Err(PdfError::Parse(_))
    ));
}

#[test]
fn test_encrypted_document_is_rejected() {
    let mut doc = build_document(vec![statement_page(
        1,
        1,
        &[("01/06/2020 08:15 AM", "Purchase", "2.50", "17.50")],
    )]);
    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => Object::Integer(1),
        "R" => Object::Integer(2),
    });
    doc.trailer.set("Encrypt", Object::Reference(encrypt_id));
    let pdf = save(doc);

    assert!(matches!(
        PdfExtractor::from_bytes(&pdf),
        Err(PdfError::Encrypted)
    ));
    assert!(matches!(
        StatementParser::new().parse_pdf(&pdf),
        Err(LedgerError::Pdf(PdfError::Encrypted))
    ));
}

#[test]
fn test_policies_agree_on_well_formed_statement() {
    let pdf = build_pdf(vec![statement_page(
        1,
        1,
        &[
            ("01/06/2020 08:15 AM", "a", "2.50", "17.50"),
            ("01/06/2020 09:15 AM", "b", "", "17.50"),
            ("01/06/2020 10:15 AM", "c", "1.00", "16.50"),
        ],
    )]);

    let by_column = StatementParser::new().parse_pdf(&pdf).unwrap();
    let by_shape = StatementParser::new()
        .with_row_boundary(RowBoundaryPolicy::TimestampShape)
        .parse_pdf(&pdf)
        .unwrap();
    assert_eq!(by_column, by_shape);
}
