pub mod batch;
pub mod cache;
pub mod controls;
pub mod coverage;
pub mod error;
pub mod extraction;
pub mod model;
pub mod runner;

use controls::schema::TaxonomyDef;
use error::CovscanError;
use extraction::TextExtractor;
use model::RunOutcome;
use runner::{BatchRunner, RunConfig};
use std::path::Path;

pub use batch::DEFAULT_MAX_PAGES_PER_BATCH;

/// Main API entry point: process a directory of PDFs end to end.
///
/// Partitions the directory into page-bounded batches, extracts text from
/// every document (with fallback), persists the content cache, and analyzes
/// coverage against the taxonomy. A completed run always yields both a run
/// result and a coverage report, even when individual documents contributed
/// empty text; callers inspect per-document `text_length` to detect
/// silently failed extractions.
pub fn process_directory(
    dir: &Path,
    config: &RunConfig,
    extractor: &TextExtractor,
    taxonomy: &TaxonomyDef,
) -> Result<RunOutcome, CovscanError> {
    let runner = BatchRunner::new(extractor, config);
    let processed = runner.process_all(dir)?;

    let coverage = coverage::analyze(&processed.content, taxonomy);

    if let Some(ref analysis_path) = config.analysis_path {
        cache::write_analysis(analysis_path, &processed.run, &coverage);
    }

    Ok(RunOutcome {
        run: processed.run,
        coverage,
    })
}
