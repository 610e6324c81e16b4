use std::fs;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    Pdf,
    Text,
}

pub fn source_kind(path: &Path) -> Result<SourceKind> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("pdf") => Ok(SourceKind::Pdf),
        Some("txt") => Ok(SourceKind::Text),
        _ => bail!(
            "Unsupported file type (expected .pdf or .txt): {}",
            path.display()
        ),
    }
}

pub fn read_document(path: &Path) -> Result<String> {
    let kind = source_kind(path)?;
    let data = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    extract_text(&data, kind)
}

/// Turn an uploaded document into a single string.
///
/// An empty result is not an error here; the caller treats it as "no
/// usable input".
pub fn extract_text(data: &[u8], kind: SourceKind) -> Result<String> {
    match kind {
        SourceKind::Pdf => extract_pdf_text(data),
        SourceKind::Text => {
            String::from_utf8(data.to_vec()).context("File is not valid UTF-8 text")
        }
    }
}

/// Non-empty page texts concatenated in page order, no separator. Pages
/// that yield only whitespace are silently skipped.
///
/// `pdf_extract` can panic on malformed input rather than returning an
/// error, so the call is fenced with `catch_unwind`.
fn extract_pdf_text(data: &[u8]) -> Result<String> {
    let data = data.to_vec();
    let pages = match panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(&data)
    })) {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => return Err(anyhow!("PDF extraction failed: {e}")),
        Err(_) => return Err(anyhow!("PDF extraction panicked (malformed document)")),
    };

    let mut text = String::new();
    for page in &pages {
        if !page.trim().is_empty() {
            text.push_str(page);
        }
    }
    Ok(text)
}
