use crate::model::{truncate_chars, BatchResult, CoverageReport, ExtractedContent, RunResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

/// Number of characters of extracted text retained per document in the
/// on-disk content cache.
pub const CACHE_TEXT_CHARS: usize = 5000;

/// On-disk content cache written after a full run.
///
/// Advisory artifact for inspection and debugging only: no locking, no
/// atomic replace. A crash mid-write can leave a partial file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentCache {
    pub generated_at: DateTime<Utc>,
    /// Filename to truncated extracted text.
    pub content: BTreeMap<String, String>,
    pub batches: Vec<BatchResult>,
}

/// On-disk analysis artifact: the run result plus the coverage report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisFile {
    pub generated_at: DateTime<Utc>,
    pub run: RunResult,
    pub coverage: CoverageReport,
}

/// Write the content cache. Best effort: failures are logged and swallowed,
/// never invalidating the in-memory results.
pub fn write_content_cache(
    path: &Path,
    content: &BTreeMap<String, ExtractedContent>,
    batches: &[BatchResult],
) {
    let cache = ContentCache {
        generated_at: Utc::now(),
        content: content
            .iter()
            .map(|(name, extracted)| {
                (name.clone(), truncate_chars(&extracted.full_text, CACHE_TEXT_CHARS))
            })
            .collect(),
        batches: batches.to_vec(),
    };

    if let Err(e) = serde_json::to_string_pretty(&cache)
        .map_err(std::io::Error::other)
        .and_then(|json| std::fs::write(path, json))
    {
        warn!(path = %path.display(), "failed to write content cache: {e}");
    }
}

/// Write the analysis file. Same best-effort semantics as the cache.
pub fn write_analysis(path: &Path, run: &RunResult, coverage: &CoverageReport) {
    let analysis = AnalysisFile {
        generated_at: Utc::now(),
        run: run.clone(),
        coverage: coverage.clone(),
    };

    if let Err(e) = serde_json::to_string_pretty(&analysis)
        .map_err(std::io::Error::other)
        .and_then(|json| std::fs::write(path, json))
    {
        warn!(path = %path.display(), "failed to write analysis file: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CoverageSummary, ExtractedContent};

    fn sample_content() -> BTreeMap<String, ExtractedContent> {
        let mut map = BTreeMap::new();
        map.insert(
            "long.pdf".to_string(),
            ExtractedContent::new("long.pdf".into(), 2, "y".repeat(CACHE_TEXT_CHARS + 50)),
        );
        map.insert(
            "short.pdf".to_string(),
            ExtractedContent::new("short.pdf".into(), 1, "short text".into()),
        );
        map
    }

    #[test]
    fn test_cache_truncates_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        write_content_cache(&path, &sample_content(), &[]);

        let cache: ContentCache =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(cache.content["long.pdf"].chars().count(), CACHE_TEXT_CHARS);
        assert_eq!(cache.content["short.pdf"], "short text");
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        // Directory does not exist; the write fails but must not panic.
        let path = Path::new("/nonexistent-covscan-dir/cache.json");
        write_content_cache(path, &sample_content(), &[]);
    }

    #[test]
    fn test_analysis_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.json");
        let run = RunResult {
            total_batches: 0,
            total_documents: 0,
            batches: vec![],
        };
        let coverage = CoverageReport {
            documents_analyzed: 0,
            per_document: BTreeMap::new(),
            summary: CoverageSummary {
                total_controls: 12,
                covered_controls: 0,
                coverage_percent: 0.0,
                covered: vec![],
            },
        };
        write_analysis(&path, &run, &coverage);

        let loaded: AnalysisFile =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.run.total_batches, 0);
        assert_eq!(loaded.coverage.summary.total_controls, 12);
    }
}
