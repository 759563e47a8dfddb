use crate::error::CovscanError;
use crate::extraction::TextExtractor;
use crate::model::{Batch, DocumentDescriptor};
use std::path::Path;
use tracing::warn;

/// Default page ceiling per batch. Chosen to stay under a common 100-page
/// external API limit with headroom.
pub const DEFAULT_MAX_PAGES_PER_BATCH: usize = 95;

/// Scan a directory for PDF documents, lexicographically sorted by filename.
///
/// A missing or non-directory path is unrecoverable. A document whose page
/// count cannot be determined is kept with a page count of 0 and a warning;
/// one bad file must not block the whole run.
pub fn scan_directory(
    dir: &Path,
    extractor: &TextExtractor,
) -> Result<Vec<DocumentDescriptor>, CovscanError> {
    if !dir.exists() {
        return Err(CovscanError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(CovscanError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut documents = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if !is_pdf {
            continue;
        }

        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };

        let page_count = match std::fs::read(&path) {
            Ok(bytes) => match extractor.page_count(&bytes) {
                Ok(n) => n,
                Err(e) => {
                    warn!(file = %filename, "could not determine page count: {e}, treating as 0");
                    0
                }
            },
            Err(e) => {
                warn!(file = %filename, "could not read file: {e}, treating as 0 pages");
                0
            }
        };

        documents.push(DocumentDescriptor {
            filename,
            path,
            page_count,
        });
    }

    documents.sort_by(|a, b| a.filename.cmp(&b.filename));
    Ok(documents)
}

/// Partition documents into page-bounded batches.
///
/// Single left-to-right greedy pass: a document joins the current batch if
/// the combined page count stays within the ceiling, otherwise the batch is
/// closed and a new one starts with that document. No reordering and no
/// packing optimization, so identical inputs always yield identical batch
/// boundaries.
///
/// A document whose own page count exceeds the ceiling ends up alone in an
/// oversized singleton batch; it is processed individually, not rejected.
pub fn create_batches(documents: Vec<DocumentDescriptor>, max_pages_per_batch: usize) -> Vec<Batch> {
    let mut batches: Vec<Batch> = Vec::new();
    let mut current: Vec<DocumentDescriptor> = Vec::new();
    let mut current_pages: usize = 0;

    for doc in documents {
        if !current.is_empty() && current_pages + doc.page_count > max_pages_per_batch {
            batches.push(Batch {
                number: batches.len() + 1,
                total_pages: current_pages,
                documents: std::mem::take(&mut current),
            });
            current_pages = 0;
        }
        current_pages += doc.page_count;
        current.push(doc);
    }

    if !current.is_empty() {
        batches.push(Batch {
            number: batches.len() + 1,
            total_pages: current_pages,
            documents: current,
        });
    }

    batches
}
