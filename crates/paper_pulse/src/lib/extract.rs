use std::fmt::Debug;

pub trait TextExtractor {
    type Error: Debug;

    /// Produces the document's full plain-text content, trimmed of leading
    /// and trailing whitespace. The orchestrator treats any error, and any
    /// empty output, as a terminal extraction failure.
    fn extract(&self, bytes: &[u8]) -> Result<String, Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("PDF parse error: {0}")]
    Parse(String),
}

/// PDF text extraction via `pdf-extract`: page-level text blocks in
/// document order, concatenated.
#[derive(Debug, Clone, Default)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    type Error = ExtractError;

    fn extract(&self, bytes: &[u8]) -> Result<String, Self::Error> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ExtractError::Parse(e.to_string()))?;
        Ok(text.trim().to_string())
    }
}
