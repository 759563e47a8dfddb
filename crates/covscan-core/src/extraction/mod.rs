pub mod lopdf;
pub mod pdftotext;

use crate::error::CovscanError;
use tracing::warn;

/// Trait for PDF extraction backends.
pub trait PdfBackend: Send + Sync {
    /// Extract the plain text of a document, pages joined with newlines.
    /// Pages that yield no text are skipped without error.
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, CovscanError>;

    /// Number of pages in the document.
    fn page_count(&self, pdf_bytes: &[u8]) -> Result<usize, CovscanError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Text extractor with a primary backend and a fallback.
///
/// Constructed explicitly by the caller and passed down; there is no
/// process-wide extractor instance.
pub struct TextExtractor {
    primary: Box<dyn PdfBackend>,
    fallback: Box<dyn PdfBackend>,
}

impl TextExtractor {
    pub fn new(primary: Box<dyn PdfBackend>, fallback: Box<dyn PdfBackend>) -> Self {
        TextExtractor { primary, fallback }
    }

    /// Default pairing: embedded-text extraction via lopdf, falling back to
    /// the pdftotext subprocess for documents lopdf cannot handle.
    pub fn with_default_backends() -> Self {
        TextExtractor::new(
            Box::new(lopdf::LopdfBackend::new()),
            Box::new(pdftotext::PdftotextBackend::new()),
        )
    }

    /// Extract text, trying the fallback backend if the primary fails.
    ///
    /// Never propagates an error: if both backends fail the result is an
    /// empty string and a warning is logged. A single malformed document
    /// must not abort a batch; callers detect silent failures through
    /// `text_length == 0`.
    pub fn extract(&self, pdf_bytes: &[u8]) -> String {
        match self.primary.extract_text(pdf_bytes) {
            Ok(text) => text,
            Err(primary_err) => {
                warn!(
                    backend = self.primary.backend_name(),
                    "primary extraction failed: {primary_err}, trying {}",
                    self.fallback.backend_name()
                );
                match self.fallback.extract_text(pdf_bytes) {
                    Ok(text) => text,
                    Err(fallback_err) => {
                        warn!(
                            backend = self.fallback.backend_name(),
                            "fallback extraction failed: {fallback_err}, recording empty text"
                        );
                        String::new()
                    }
                }
            }
        }
    }

    /// Page count, trying the fallback backend if the primary fails.
    /// Propagates an error only when both backends fail; the directory scan
    /// maps that to a zero page count.
    pub fn page_count(&self, pdf_bytes: &[u8]) -> Result<usize, CovscanError> {
        match self.primary.page_count(pdf_bytes) {
            Ok(n) => Ok(n),
            Err(primary_err) => self.fallback.page_count(pdf_bytes).map_err(|fallback_err| {
                CovscanError::PageCount(format!(
                    "{} failed ({primary_err}); {} failed ({fallback_err})",
                    self.primary.backend_name(),
                    self.fallback.backend_name()
                ))
            }),
        }
    }
}
