use crate::model::Document;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid document JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a rich-text document from its JSON form
pub fn parse_document(json: &str) -> Result<Document, DocumentError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a rich-text document file
pub fn read_document(path: &Path) -> Result<Document, DocumentError> {
    if !path.exists() {
        return Err(DocumentError::NotFound(path.to_path_buf()));
    }
    let json = fs::read_to_string(path)?;
    log::debug!("read document JSON from {}", path.display());
    parse_document(&json)
}
