use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CovscanError {
    #[error("document directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("PDF extraction failed: {0}")]
    Extraction(String),

    #[error("pdftotext not found. Install poppler: brew install poppler (macOS) or apt install poppler-utils (Linux)")]
    PdftotextNotFound,

    #[error("pdftotext failed with exit code {code}: {stderr}")]
    PdftotextFailed { code: i32, stderr: String },

    #[error("failed to determine page count: {0}")]
    PageCount(String),

    #[error("failed to load taxonomy from {path}: {reason}")]
    TaxonomyLoad { path: PathBuf, reason: String },

    #[error("invalid taxonomy: {0}")]
    TaxonomyInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
