use crate::batch::{self, DEFAULT_MAX_PAGES_PER_BATCH};
use crate::cache;
use crate::error::CovscanError;
use crate::extraction::TextExtractor;
use crate::model::{Batch, BatchResult, DocumentSummary, ExtractedContent, RunResult};
use chrono::Utc;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, info_span, warn};

/// Tunables for a processing run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub max_pages_per_batch: usize,
    /// Where to write the content cache after the run. None disables it.
    pub cache_path: Option<PathBuf>,
    /// Where to write the run/coverage analysis file. None disables it.
    pub analysis_path: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            max_pages_per_batch: DEFAULT_MAX_PAGES_PER_BATCH,
            cache_path: None,
            analysis_path: None,
        }
    }
}

/// Result of the extraction phase: the run record plus the accumulated
/// per-document content the coverage analyzer consumes.
#[derive(Debug)]
pub struct ProcessedRun {
    pub run: RunResult,
    pub content: BTreeMap<String, ExtractedContent>,
}

/// Sequential batch runner.
///
/// Partitions the directory once, then extracts every document of every
/// batch in order, one at a time. Deliberately single-threaded: the
/// workload is bounded local file I/O, and batch boundaries plus result
/// order stay trivially deterministic.
pub struct BatchRunner<'a> {
    extractor: &'a TextExtractor,
    config: &'a RunConfig,
}

impl<'a> BatchRunner<'a> {
    pub fn new(extractor: &'a TextExtractor, config: &'a RunConfig) -> Self {
        BatchRunner { extractor, config }
    }

    /// Process every PDF in `dir`.
    ///
    /// Only corpus-level failures (missing directory) abort the run. A
    /// per-document extraction failure is recorded as an empty-text entry
    /// and processing continues; extraction is attempted exactly once per
    /// document, with no retry.
    pub fn process_all(&self, dir: &Path) -> Result<ProcessedRun, CovscanError> {
        let documents = batch::scan_directory(dir, self.extractor)?;
        let batches = batch::create_batches(documents, self.config.max_pages_per_batch);

        info!(
            batches = batches.len(),
            max_pages = self.config.max_pages_per_batch,
            "partitioned directory"
        );

        let mut content: BTreeMap<String, ExtractedContent> = BTreeMap::new();
        let mut batch_results: Vec<BatchResult> = Vec::new();
        let mut total_documents = 0;

        for batch in &batches {
            let result = self.process_batch(batch, &mut content);
            total_documents += result.filenames.len();
            batch_results.push(result);
        }

        if let Some(ref cache_path) = self.config.cache_path {
            cache::write_content_cache(cache_path, &content, &batch_results);
        }

        Ok(ProcessedRun {
            run: RunResult {
                total_batches: batch_results.len(),
                total_documents,
                batches: batch_results,
            },
            content,
        })
    }

    fn process_batch(
        &self,
        batch: &Batch,
        content: &mut BTreeMap<String, ExtractedContent>,
    ) -> BatchResult {
        let _span = info_span!("batch", number = batch.number).entered();

        let mut documents = BTreeMap::new();
        let mut filenames = Vec::with_capacity(batch.documents.len());

        for doc in &batch.documents {
            let text = match std::fs::read(&doc.path) {
                Ok(bytes) => self.extractor.extract(&bytes),
                Err(e) => {
                    warn!(file = %doc.filename, "could not read file: {e}, recording empty text");
                    String::new()
                }
            };

            let extracted = ExtractedContent::new(doc.filename.clone(), doc.page_count, text);
            documents.insert(
                doc.filename.clone(),
                DocumentSummary {
                    page_count: extracted.page_count,
                    text_length: extracted.text_length,
                },
            );
            filenames.push(doc.filename.clone());
            // Re-running overwrites any prior entry for the filename.
            content.insert(doc.filename.clone(), extracted);
        }

        BatchResult {
            batch_number: batch.number,
            processed_at: Utc::now(),
            filenames,
            total_pages: batch.total_pages,
            documents,
        }
    }
}
