//! Input pipeline
//! Obtains raw resume and job description text from files on disk

pub mod extract;

use crate::error::{JobPilotError, Result};
use log::info;
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }
}

/// Reads source documents, routing to the right extractor by extension.
/// Extracted text is cached per path so a resume referenced by several
/// subcommand steps is only decoded once.
pub struct SourceReader {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl SourceReader {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn read_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(JobPilotError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = detect_file_type(path)?;

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                extract::pdf_text(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                extract::plain_text(path).await?
            }
            FileType::Markdown => {
                info!("Extracting text from markdown: {}", path.display());
                extract::markdown_text(path).await?
            }
            FileType::Unknown => {
                return Err(JobPilotError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for SourceReader {
    fn default() -> Self {
        Self::new()
    }
}

fn detect_file_type(path: &Path) -> Result<FileType> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| {
            JobPilotError::InvalidInput(format!("File has no extension: {}", path.display()))
        })?;

    Ok(FileType::from_extension(extension))
}
