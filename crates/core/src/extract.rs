//! Paragraph text extraction.
//!
//! Only paragraph-level content counts: every element matched by the
//! content selector (`p` by default) contributes its full text, in document
//! order, joined with a single space. Script and style content is stripped
//! before selection, see [`crate::preprocess`].

use std::fmt;

use crate::parse::Document;
use crate::preprocess::{PreprocessConfig, preprocess_html};
use crate::{Result, WordlensError};

/// Configuration for text extraction
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// CSS selector of the paragraph-level elements to read
    pub selector: String,
    /// String placed between consecutive paragraphs
    pub separator: String,
    /// Markup cleaning applied before selection
    pub preprocess: PreprocessConfig,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { selector: "p".to_string(), separator: " ".to_string(), preprocess: PreprocessConfig::default() }
    }
}

/// Concatenated paragraph text of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    text: String,
    paragraph_count: usize,
}

impl ExtractedText {
    pub fn new(text: impl Into<String>, paragraph_count: usize) -> Self {
        Self { text: text.into(), paragraph_count }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of paragraph elements that contributed text.
    pub fn paragraph_count(&self) -> usize {
        self.paragraph_count
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl AsRef<str> for ExtractedText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Extracts paragraph text with the default configuration.
///
/// # Example
///
/// ```rust
/// use wordlens_core::extract_text;
///
/// let html = "<h1>标题</h1><p>第一段</p><div>旁注</div><p>第二段</p>";
/// let text = extract_text(html).unwrap();
/// assert_eq!(text.as_str(), "第一段 第二段");
/// ```
pub fn extract_text(markup: &str) -> Result<ExtractedText> {
    extract_text_with_config(markup, &ExtractConfig::default())
}

/// Extracts paragraph text with a custom configuration.
///
/// Empty markup cannot be parsed into a document and yields
/// [`WordlensError::HtmlParseError`]; markup without paragraphs yields an
/// empty [`ExtractedText`].
pub fn extract_text_with_config(markup: &str, config: &ExtractConfig) -> Result<ExtractedText> {
    if markup.trim().is_empty() {
        return Err(WordlensError::HtmlParseError("document is empty".to_string()));
    }

    let cleaned = preprocess_html(markup, &config.preprocess)?;
    let doc = Document::parse(&cleaned)?;
    let paragraphs = doc.select(&config.selector)?;

    let text = paragraphs
        .iter()
        .map(|p| p.text())
        .collect::<Vec<_>>()
        .join(&config.separator);

    tracing::debug!(paragraphs = paragraphs.len(), chars = text.chars().count(), "extracted paragraph text");

    Ok(ExtractedText::new(text, paragraphs.len()))
}
