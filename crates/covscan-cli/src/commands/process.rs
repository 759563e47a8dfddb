use covscan_core::controls::{self, builtin};
use covscan_core::error::CovscanError;
use covscan_core::extraction::TextExtractor;
use covscan_core::runner::RunConfig;
use std::path::PathBuf;

use crate::output;

pub fn run(
    directory: PathBuf,
    max_pages: usize,
    controls_file: Option<PathBuf>,
    preset: &str,
    cache: Option<PathBuf>,
    analysis: Option<PathBuf>,
    output_format: &str,
) -> Result<(), CovscanError> {
    let taxonomy = match controls_file {
        Some(ref path) => controls::load_taxonomy(path)?,
        None => builtin::load_preset(preset)?,
    };

    let extractor = TextExtractor::with_default_backends();
    let config = RunConfig {
        max_pages_per_batch: max_pages,
        cache_path: cache,
        analysis_path: analysis,
    };

    let outcome = covscan_core::process_directory(&directory, &config, &extractor, &taxonomy)?;

    match output_format {
        "json" => output::json::print_outcome(&outcome)?,
        _ => output::table::print_outcome(&outcome),
    }

    Ok(())
}
