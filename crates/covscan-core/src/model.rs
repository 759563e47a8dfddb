use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Number of characters kept in the in-memory preview of extracted text.
pub const PREVIEW_CHARS: usize = 500;

/// A single document discovered in the input directory.
///
/// Immutable after the directory scan; a page count of 0 may mean the
/// document is genuinely empty or that the count could not be determined
/// (the scan logs a warning in the latter case).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDescriptor {
    pub filename: String,
    pub path: PathBuf,
    pub page_count: usize,
}

/// An ordered group of documents whose combined page count stays under the
/// configured ceiling, except for oversized singletons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Batch {
    /// 1-based position in the run.
    pub number: usize,
    pub documents: Vec<DocumentDescriptor>,
    pub total_pages: usize,
}

/// Text extracted from one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedContent {
    pub filename: String,
    pub page_count: usize,
    pub text_length: usize,
    pub full_text: String,
    /// First [`PREVIEW_CHARS`] characters of the text.
    pub preview: String,
}

impl ExtractedContent {
    pub fn new(filename: String, page_count: usize, full_text: String) -> Self {
        let preview = truncate_chars(&full_text, PREVIEW_CHARS);
        ExtractedContent {
            filename,
            page_count,
            text_length: full_text.chars().count(),
            full_text,
            preview,
        }
    }
}

/// Per-document summary carried in a [`BatchResult`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub page_count: usize,
    pub text_length: usize,
}

/// Outcome of processing one batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    pub batch_number: usize,
    pub processed_at: DateTime<Utc>,
    pub filenames: Vec<String>,
    pub total_pages: usize,
    pub documents: BTreeMap<String, DocumentSummary>,
}

/// Outcome of a full processing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    pub total_batches: usize,
    pub total_documents: usize,
    pub batches: Vec<BatchResult>,
}

/// Coverage of one document against the control taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentCoverage {
    pub covered_controls: BTreeSet<String>,
    /// First matching control in taxonomy order, or "General" if none match.
    pub primary_control: String,
}

/// Aggregate coverage across all analyzed documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageSummary {
    pub total_controls: usize,
    pub covered_controls: usize,
    pub coverage_percent: f64,
    pub covered: Vec<String>,
}

/// Report produced by the coverage analyzer. Pure function of the
/// accumulated content map and the taxonomy; recomputed fresh on request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub documents_analyzed: usize,
    pub per_document: BTreeMap<String, DocumentCoverage>,
    pub summary: CoverageSummary,
}

/// Everything a completed run returns to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunOutcome {
    pub run: RunResult,
    pub coverage: CoverageReport,
}

/// Truncate to at most `max` characters without splitting a code point.
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
