use covscan_core::batch;
use covscan_core::error::CovscanError;
use covscan_core::extraction::TextExtractor;
use std::path::PathBuf;

use crate::output;

/// Dry run: show how the directory would be partitioned, without
/// extracting any text.
pub fn run(directory: PathBuf, max_pages: usize, output_format: &str) -> Result<(), CovscanError> {
    let extractor = TextExtractor::with_default_backends();
    let documents = batch::scan_directory(&directory, &extractor)?;
    let batches = batch::create_batches(documents, max_pages);

    match output_format {
        "json" => output::json::print_batches(&batches)?,
        _ => output::table::print_batches(&batches, max_pages),
    }

    Ok(())
}
