//! Page operator extraction using lopdf.

use lopdf::content::{Content, Operation};
use lopdf::{decode_text_string, Document, Object, ObjectId};
use tracing::{debug, trace};

use super::{Operator, OperatorSource, Result};
use crate::error::PdfError;

/// Text-matrix operator; its fifth operand is the horizontal translation.
const SET_TEXT_MATRIX: &str = "Tm";
/// Show-string operator.
const SHOW_TEXT: &str = "Tj";

/// Statement PDF reader using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self { document: None }
    }

    /// Create an extractor and load `data` into it.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut extractor = Self::new();
        extractor.load(data)?;
        Ok(extractor)
    }

    /// Load a PDF from bytes.
    ///
    /// Encrypted documents are rejected, not decrypted.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if doc.is_encrypted() {
            return Err(PdfError::Encrypted);
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_id(&self, page: u32) -> Result<(&Document, ObjectId)> {
        let doc = self
            .document
            .as_ref()
            .ok_or(PdfError::Parse("No document loaded".to_string()))?;

        let page_id = doc
            .get_pages()
            .get(&page)
            .copied()
            .ok_or(PdfError::InvalidPage(page))?;

        Ok((doc, page_id))
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl OperatorSource for PdfExtractor {
    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn operators_for_page(&self, page: u32) -> Result<Vec<Operator>> {
        let (doc, page_id) = self.page_id(page)?;

        // All content streams of the page, decompressed and concatenated.
        let data = doc.get_page_content(page_id).map_err(|e| PdfError::Content {
            page,
            reason: e.to_string(),
        })?;

        let content = Content::decode(&data).map_err(|e| PdfError::Content {
            page,
            reason: e.to_string(),
        })?;

        let operators = decode_operations(&content.operations, page)?;
        trace!(
            "Page {}: {} of {} operations are text operators",
            page,
            operators.len(),
            content.operations.len()
        );
        Ok(operators)
    }
}

/// Map raw content-stream operations to text operators, dropping the rest.
pub(crate) fn decode_operations(operations: &[Operation], page: u32) -> Result<Vec<Operator>> {
    let mut operators = Vec::new();

    for op in operations {
        match op.operator.as_str() {
            SET_TEXT_MATRIX => operators.push(set_position(op, page)?),
            SHOW_TEXT => operators.push(show_text(op, page)?),
            _ => {}
        }
    }

    Ok(operators)
}

fn set_position(op: &Operation, page: u32) -> Result<Operator> {
    if op.operands.len() != 6 {
        return Err(operand_error(
            op,
            page,
            format!("expected 6 operands, found {}", op.operands.len()),
        ));
    }

    match as_number(&op.operands[4]) {
        Some(x) => Ok(Operator::SetPosition { x }),
        None => Err(operand_error(
            op,
            page,
            format!("horizontal translation is not a number: {:?}", op.operands[4]),
        )),
    }
}

fn show_text(op: &Operation, page: u32) -> Result<Operator> {
    match op.operands.as_slice() {
        [text @ Object::String(..)] => decode_text_string(text)
            .map(|value| Operator::ShowText { value })
            .map_err(|e| operand_error(op, page, format!("undecodable string: {}", e))),
        [other] => Err(operand_error(
            op,
            page,
            format!("expected a string, found {:?}", other),
        )),
        operands => Err(operand_error(
            op,
            page,
            format!("expected 1 operand, found {}", operands.len()),
        )),
    }
}

fn operand_error(op: &Operation, page: u32, reason: String) -> PdfError {
    PdfError::Operand {
        page,
        operator: op.operator.clone(),
        reason,
    }
}

fn as_number(obj: &Object) -> Option<f64> {
    match obj {
        Object::Integer(i) => Some(*i as f64),
        Object::Real(f) => Some(f64::from(*f)),
        _ => None,
    }
}
