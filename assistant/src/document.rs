use crate::error::{ClientError, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const PDF_MIME_TYPE: &str = "application/pdf";
const FALLBACK_NAME: &str = "research_paper.pdf";

/// A PDF chosen by the user, not yet uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl SelectedFile {
    pub fn pick(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let is_pdf = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if !is_pdf {
            return Err(ClientError::InvalidFile(format!(
                "{} is not a PDF file",
                path.display()
            )));
        }

        let metadata = fs::metadata(path).map_err(|e| {
            ClientError::InvalidFile(format!("cannot open {}: {}", path.display(), e))
        })?;
        if !metadata.is_file() {
            return Err(ClientError::InvalidFile(format!(
                "{} is not a regular file",
                path.display()
            )));
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| FALLBACK_NAME.to_string());

        log::debug!("Selected {} ({} bytes)", name, metadata.len());

        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
            mime_type: PDF_MIME_TYPE.to_string(),
        })
    }

    pub async fn read_bytes(&self) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(&self.path).await?)
    }

    pub fn display_size(&self) -> String {
        format_file_size(self.size)
    }
}

pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
