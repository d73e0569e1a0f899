//! Resume loading: turns a file or uploaded bytes into plain resume text.
//!
//! PDFs (by extension or `%PDF` magic) go through `pdf-extract`; anything else must be UTF-8.
//! PDF extraction is CPU-bound and runs inside `tokio::task::spawn_blocking`.

use std::path::Path;

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

use crate::errors::AppError;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF text extraction failed: {0}")]
    Pdf(String),

    #[error("resume is neither a PDF nor UTF-8 text")]
    NotUtf8,

    #[error("resume contains no text")]
    Empty,
}

pub fn is_pdf(bytes: &[u8], filename: Option<&str>) -> bool {
    let by_name = filename
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    by_name || bytes.starts_with(b"%PDF")
}

/// Synchronous decode. Prefer [`decode_resume`] from async code.
pub fn resume_text_from_bytes(bytes: &[u8], filename: Option<&str>) -> Result<String, IngestError> {
    let text = if is_pdf(bytes, filename) {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| IngestError::Pdf(format!("{e:?}")))?
    } else {
        String::from_utf8(bytes.to_vec()).map_err(|_| IngestError::NotUtf8)?
    };

    if text.trim().is_empty() {
        return Err(IngestError::Empty);
    }
    Ok(text)
}

pub async fn decode_resume(bytes: Bytes, filename: Option<String>) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || {
        resume_text_from_bytes(&bytes, filename.as_deref())
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("resume decode task failed: {e}")))??;
    Ok(text)
}

pub async fn load_resume(path: &Path) -> Result<String, AppError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| IngestError::Io {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), size = bytes.len(), "read resume file");

    let filename = path.file_name().and_then(|n| n.to_str()).map(String::from);
    decode_resume(Bytes::from(bytes), filename).await
}
