use crate::error::CovscanError;
use crate::extraction::PdfBackend;

/// Primary extraction backend reading embedded text with lopdf.
///
/// Walks the page tree and extracts text page by page, so a single
/// unreadable page does not discard the rest of the document.
pub struct LopdfBackend;

impl LopdfBackend {
    pub fn new() -> Self {
        LopdfBackend
    }
}

impl Default for LopdfBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBackend for LopdfBackend {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, CovscanError> {
        let doc = lopdf::Document::load_mem(pdf_bytes)
            .map_err(|e| CovscanError::Extraction(format!("lopdf failed to load PDF: {e}")))?;

        let mut text = String::new();
        for (page_num, _) in doc.get_pages() {
            if let Ok(page_text) = doc.extract_text(&[page_num]) {
                // Pure-image pages yield nothing; skip them silently.
                if page_text.trim().is_empty() {
                    continue;
                }
                if !text.is_empty() {
                    text.push('\n');
                }
                text.push_str(&page_text);
            }
        }

        Ok(text)
    }

    fn page_count(&self, pdf_bytes: &[u8]) -> Result<usize, CovscanError> {
        let doc = lopdf::Document::load_mem(pdf_bytes)
            .map_err(|e| CovscanError::PageCount(format!("lopdf failed to load PDF: {e}")))?;
        Ok(doc.get_pages().len())
    }

    fn backend_name(&self) -> &str {
        "lopdf"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{dictionary, Document, Object, Stream};

    /// Build a minimal single-page PDF with the given text content stream.
    fn minimal_pdf(content: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.new_object_id();
        let resources_id = doc.new_object_id();
        let content_id = doc.new_object_id();
        let page_id = doc.new_object_id();

        doc.objects.insert(
            font_id,
            Object::Dictionary(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => "Courier",
            }),
        );
        doc.objects.insert(
            resources_id,
            Object::Dictionary(dictionary! {
                "Font" => dictionary! { "F1" => font_id },
            }),
        );

        let stream_content = format!("BT /F1 12 Tf 50 700 Td ({content}) Tj ET");
        doc.objects.insert(
            content_id,
            Object::Stream(Stream::new(dictionary! {}, stream_content.into_bytes())),
        );
        doc.objects.insert(
            page_id,
            Object::Dictionary(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
                "Resources" => resources_id,
                "Contents" => content_id,
            }),
        );
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );

        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut pdf_bytes = Vec::new();
        doc.save_to(&mut pdf_bytes).unwrap();
        pdf_bytes
    }

    #[test]
    fn test_extract_embedded_text() {
        let backend = LopdfBackend::new();
        let text = backend.extract_text(&minimal_pdf("Access control policy")).unwrap();
        assert!(text.contains("Access control policy"));
    }

    #[test]
    fn test_page_count_single_page() {
        let backend = LopdfBackend::new();
        assert_eq!(backend.page_count(&minimal_pdf("x")).unwrap(), 1);
    }

    #[test]
    fn test_invalid_pdf_is_an_error() {
        let backend = LopdfBackend::new();
        assert!(backend.extract_text(b"not a pdf").is_err());
        assert!(backend.page_count(b"not a pdf").is_err());
    }
}
