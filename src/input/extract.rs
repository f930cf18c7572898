//! Text extraction from supported file formats

use crate::error::{JobPilotError, Result};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub async fn plain_text(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).await.map_err(JobPilotError::Io)?;
    Ok(content)
}

pub async fn pdf_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).await.map_err(JobPilotError::Io)?;

    let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
        JobPilotError::PdfExtraction(format!(
            "Failed to extract text from PDF '{}': {}",
            path.display(),
            e
        ))
    })?;
    Ok(text)
}

/// Reads a markdown file and flattens it to plain text, preserving line
/// structure so downstream anchor scanning still sees one entry per line.
pub async fn markdown_text(path: &Path) -> Result<String> {
    let markdown = fs::read_to_string(path).await.map_err(JobPilotError::Io)?;
    Ok(markdown_to_text(&markdown))
}

fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            Event::End(Tag::Paragraph) | Event::End(Tag::Heading(..)) | Event::End(Tag::Item) => {
                text.push('\n')
            }
            _ => {}
        }
    }

    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}
