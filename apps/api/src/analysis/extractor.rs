//! Text Extractor — raw PDF bytes to plain text.
//!
//! `pdf-extract` parses the document and reports every glyph with its text
//! rendering matrix. `BaselineTextOutput` joins glyphs that share a baseline
//! and starts a new line each time the baseline changes. Parsing is
//! CPU-bound: async callers go through `spawn_blocking`.

use std::panic::{self, AssertUnwindSafe};

use async_trait::async_trait;
use bytes::Bytes;
use pdf_extract::{Document, MediaBox, OutputDev, OutputError, Transform};
use thiserror::Error;

use crate::errors::AppError;

/// Baselines closer than this are the same line.
const BASELINE_TOLERANCE: f64 = 1e-3;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to extract text from PDF: {0}")]
    Parse(String),

    #[error("PDF contains no extractable text")]
    NoText,
}

/// Narrow extraction capability so the pipeline can run against stub text.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, bytes: Bytes) -> Result<String, AppError>;
}

/// Production extractor backed by `pdf-extract`.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, bytes: Bytes) -> Result<String, AppError> {
        tokio::task::spawn_blocking(move || extract_pdf_text(&bytes))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in extraction: {e}")))?
            .map_err(AppError::from)
    }
}

/// Collects glyphs into lines keyed on their baseline `y`.
///
/// Same baseline: appended as-is. Any baseline change, or a new page:
/// exactly one `\n` first.
#[derive(Debug, Default)]
pub struct BaselineTextOutput {
    text: String,
    last_y: Option<f64>,
    page_break_pending: bool,
}

impl BaselineTextOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one fragment sitting on baseline `y`.
    pub fn push_fragment(&mut self, y: f64, fragment: &str) {
        let new_line = match self.last_y {
            Some(last) => (y - last).abs() > BASELINE_TOLERANCE,
            None => self.page_break_pending,
        };
        if new_line {
            self.text.push('\n');
        }
        self.text.push_str(fragment);
        self.last_y = Some(y);
        self.page_break_pending = false;
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl OutputDev for BaselineTextOutput {
    fn begin_page(
        &mut self,
        _page_num: u32,
        _media_box: &MediaBox,
        _art_box: Option<(f64, f64, f64, f64)>,
    ) -> Result<(), OutputError> {
        self.last_y = None;
        self.page_break_pending = !self.text.is_empty();
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), OutputError> {
        Ok(())
    }

    fn output_character(
        &mut self,
        trm: &Transform,
        _width: f64,
        _spacing: f64,
        _font_size: f64,
        char: &str,
    ) -> Result<(), OutputError> {
        self.push_fragment(trm.m32, char);
        Ok(())
    }

    fn begin_word(&mut self) -> Result<(), OutputError> {
        Ok(())
    }

    fn end_word(&mut self) -> Result<(), OutputError> {
        Ok(())
    }

    fn end_line(&mut self) -> Result<(), OutputError> {
        Ok(())
    }
}

/// Extracts and normalizes the text of every page.
///
/// `pdf-extract` panics on some malformed inputs; a panic is reported as a
/// parse failure like any other.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let raw = panic::catch_unwind(AssertUnwindSafe(|| render_text(bytes)))
        .map_err(|_| ExtractionError::Parse("PDF parser aborted on malformed input".to_string()))?
        .map_err(|e| ExtractionError::Parse(e.to_string()))?;

    ensure_readable(normalize_text(&raw))
}

fn render_text(bytes: &[u8]) -> Result<String, OutputError> {
    let mut doc = Document::load_mem(bytes)?;
    // Owner-password-only files open with an empty user password.
    if doc.is_encrypted() {
        doc.decrypt("")?;
    }

    let mut output = BaselineTextOutput::new();
    pdf_extract::output_doc(&doc, &mut output)?;
    Ok(output.into_text())
}

/// Unifies line endings, strips trailing whitespace per line and drops
/// leading/trailing blank lines. Interior blank lines are kept: they separate
/// paragraphs.
pub fn normalize_text(raw: &str) -> String {
    let unified = raw.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = unified.lines().map(str::trim_end).collect();

    let start = lines.iter().position(|l| !l.is_empty());
    let end = lines.iter().rposition(|l| !l.is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].join("\n"),
        _ => String::new(),
    }
}

/// An empty or whitespace-only result is a failure, not an empty success.
pub fn ensure_readable(text: String) -> Result<String, ExtractionError> {
    if text.trim().is_empty() {
        return Err(ExtractionError::NoText);
    }
    Ok(text)
}
