use crate::error::CovscanError;
use crate::extraction::PdfBackend;
use std::io::Write;
use std::process::Command;

/// Fallback extraction backend using pdftotext and pdfinfo (poppler-utils).
///
/// Handles more PDF variants than lopdf (broken cross-reference tables,
/// exotic encodings), at the cost of spawning a subprocess per call.
pub struct PdftotextBackend;

impl PdftotextBackend {
    pub fn new() -> Self {
        PdftotextBackend
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }

    fn write_temp(pdf_bytes: &[u8]) -> Result<tempfile::NamedTempFile, CovscanError> {
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| CovscanError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| CovscanError::Extraction(e.to_string()))?;
        Ok(tmpfile)
    }
}

impl Default for PdftotextBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfBackend for PdftotextBackend {
    fn extract_text(&self, pdf_bytes: &[u8]) -> Result<String, CovscanError> {
        let tmpfile = Self::write_temp(pdf_bytes)?;

        // -layout preserves whitespace alignment of tables.
        let output = Command::new("pdftotext")
            .arg("-layout")
            .arg(tmpfile.path())
            .arg("-") // output to stdout
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CovscanError::PdftotextNotFound
                } else {
                    CovscanError::Extraction(format!("pdftotext failed: {e}"))
                }
            })?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(CovscanError::PdftotextFailed { code, stderr });
        }

        let raw = String::from_utf8_lossy(&output.stdout);

        // pdftotext separates pages with form feed \x0c; drop empty pages
        // and rejoin with newlines.
        let pages: Vec<&str> = raw
            .split('\x0c')
            .map(|p| p.trim_end())
            .filter(|p| !p.trim().is_empty())
            .collect();

        Ok(pages.join("\n"))
    }

    fn page_count(&self, pdf_bytes: &[u8]) -> Result<usize, CovscanError> {
        let tmpfile = Self::write_temp(pdf_bytes)?;

        let output = Command::new("pdfinfo")
            .arg(tmpfile.path())
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    CovscanError::PdftotextNotFound
                } else {
                    CovscanError::PageCount(format!("pdfinfo failed: {e}"))
                }
            })?;

        if !output.status.success() {
            return Err(CovscanError::PageCount(format!(
                "pdfinfo failed: {}",
                String::from_utf8_lossy(&output.stderr)
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        for line in stdout.lines() {
            if let Some(count_str) = line.strip_prefix("Pages:") {
                if let Ok(count) = count_str.trim().parse::<usize>() {
                    return Ok(count);
                }
            }
        }

        Err(CovscanError::PageCount(
            "pdfinfo output contained no page count".into(),
        ))
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}
