//! Word segmentation and noise filtering.
//!
//! Segmentation is delegated to a [`Segmenter`]: [`JiebaSegmenter`] infers
//! Chinese word boundaries from a dictionary, [`UnicodeSegmenter`] splits on
//! Unicode word boundaries for whitespace-separated scripts. The segmenter's
//! raw stream is then filtered with [`is_countable`]; no case folding or
//! stemming is applied.
//!
//! # Example
//!
//! ```rust
//! use wordlens_core::{Tokenizer, TokenizerKind};
//!
//! let tokenizer = Tokenizer::new(TokenizerKind::Unicode);
//! let tokens = tokenizer.tokenize("Rust, rust & a R2D2!");
//! assert_eq!(tokens.as_slice(), ["Rust", "rust", "R2D2"]);
//! ```

use std::fmt;
use std::str::FromStr;

use jieba_rs::Jieba;
use unicode_segmentation::UnicodeSegmentation;

/// Splits text into a raw stream of segments, punctuation and whitespace included.
pub trait Segmenter: Send + Sync {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Dictionary-driven Chinese segmentation.
pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl JiebaSegmenter {
    /// Loads the bundled dictionary.
    pub fn new() -> Self {
        Self { jieba: Jieba::new() }
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        // HMM discovery of words missing from the dictionary
        self.jieba.cut(text, true)
    }

    fn name(&self) -> &'static str {
        "jieba"
    }
}

/// UAX #29 word-boundary segmentation.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split_word_bounds().collect()
    }

    fn name(&self) -> &'static str {
        "unicode"
    }
}

/// Which segmenter a [`Tokenizer`] is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizerKind {
    /// Chinese dictionary segmentation.
    #[default]
    Jieba,
    /// Unicode word boundaries.
    Unicode,
}

impl FromStr for TokenizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jieba" | "zh" | "chinese" => Ok(Self::Jieba),
            "unicode" | "uax29" | "words" => Ok(Self::Unicode),
            _ => Err(format!("Invalid tokenizer: {}. Valid options: jieba, unicode", s)),
        }
    }
}

impl fmt::Display for TokenizerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jieba => f.write_str("jieba"),
            Self::Unicode => f.write_str("unicode"),
        }
    }
}

/// Keeps a segment iff every character is alphanumeric and it is longer than one character.
pub fn is_countable(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(_), Some(_)) => token.chars().all(char::is_alphanumeric),
        _ => false,
    }
}

/// Ordered tokens that survived filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence(Vec<String>);

impl TokenSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl<S: Into<String>> FromIterator<S> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Segments text and filters the segments down to countable tokens.
pub struct Tokenizer {
    segmenter: Box<dyn Segmenter>,
}

impl Tokenizer {
    pub fn new(kind: TokenizerKind) -> Self {
        match kind {
            TokenizerKind::Jieba => Self::with_segmenter(JiebaSegmenter::new()),
            TokenizerKind::Unicode => Self::with_segmenter(UnicodeSegmenter),
        }
    }

    pub fn with_segmenter(segmenter: impl Segmenter + 'static) -> Self {
        Self { segmenter: Box::new(segmenter) }
    }

    pub fn name(&self) -> &'static str {
        self.segmenter.name()
    }

    /// Segments `text` and keeps the countable tokens in segmentation order.
    pub fn tokenize(&self, text: &str) -> TokenSequence {
        let segments = self.segmenter.segment(text);
        let raw = segments.len();
        let tokens: TokenSequence = segments.into_iter().filter(|s| is_countable(s)).collect();

        tracing::debug!(
            segmenter = self.name(),
            segments = raw,
            tokens = tokens.len(),
            "tokenized text"
        );

        tokens
    }
}

impl fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tokenizer").field("segmenter", &self.name()).finish()
    }
}
