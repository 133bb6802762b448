//! Top-level configuration.
//!
//! # Example
//!
//! ```rust
//! use wordlens_core::{TokenizerKind, WordlensConfig};
//!
//! let config = WordlensConfig::builder()
//!     .timeout(10)
//!     .tokenizer(TokenizerKind::Unicode)
//!     .output_dir("saved")
//!     .build();
//! assert_eq!(config.fetch.timeout, 10);
//! assert_eq!(config.max_keywords, 40);
//! ```

use std::path::PathBuf;

use crate::chart::ChartConfig;
use crate::extract::ExtractConfig;
use crate::fetch::FetchConfig;
use crate::font::DEFAULT_FONT_FILE;
use crate::frequency::MAX_KEYWORDS;
use crate::persist::SaveConfig;
use crate::tokenize::TokenizerKind;

/// Settings for one interactive session.
#[derive(Debug, Clone)]
pub struct WordlensConfig {
    /// HTTP settings (default: 30 s timeout).
    pub fetch: FetchConfig,

    /// Paragraph extraction settings (default: `p` elements joined by a space).
    pub extract: ExtractConfig,

    /// Segmenter used for tokenization (default: jieba).
    pub tokenizer: TokenizerKind,

    /// Chart canvas, colours and labels.
    pub chart: ChartConfig,

    /// Where extracted text is saved (default: `output_files/news_<k>.txt`).
    pub save: SaveConfig,

    /// Directory rendered charts are written to (default: `charts`).
    pub chart_dir: PathBuf,

    /// Font file looked up at startup (default: `SimHei.ttf`).
    pub font_path: PathBuf,

    /// Upper bound of the keyword count (default: 40).
    pub max_keywords: usize,
}

impl Default for WordlensConfig {
    fn default() -> Self {
        Self {
            fetch: FetchConfig::default(),
            extract: ExtractConfig::default(),
            tokenizer: TokenizerKind::default(),
            chart: ChartConfig::default(),
            save: SaveConfig::default(),
            chart_dir: PathBuf::from("charts"),
            font_path: PathBuf::from(DEFAULT_FONT_FILE),
            max_keywords: MAX_KEYWORDS,
        }
    }
}

impl WordlensConfig {
    /// Creates a new builder for WordlensConfig.
    pub fn builder() -> WordlensConfigBuilder {
        WordlensConfigBuilder::new()
    }
}

/// Builder for WordlensConfig.
pub struct WordlensConfigBuilder {
    config: WordlensConfig,
}

impl WordlensConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: WordlensConfig::default() }
    }

    /// Sets the HTTP timeout in seconds.
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.config.fetch.timeout = seconds;
        self
    }

    /// Sets the User-Agent header.
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.config.fetch.user_agent = value.into();
        self
    }

    /// Sets the CSS selector of paragraph-level elements.
    pub fn selector(mut self, value: impl Into<String>) -> Self {
        self.config.extract.selector = value.into();
        self
    }

    /// Sets the segmenter.
    pub fn tokenizer(mut self, value: TokenizerKind) -> Self {
        self.config.tokenizer = value;
        self
    }

    /// Sets the font file looked up at startup.
    pub fn font_path(mut self, value: impl Into<PathBuf>) -> Self {
        self.config.font_path = value.into();
        self
    }

    /// Sets the directory extracted text is saved to.
    pub fn output_dir(mut self, value: impl Into<PathBuf>) -> Self {
        self.config.save.output_dir = value.into();
        self
    }

    /// Sets the prefix of saved file names.
    pub fn base_name(mut self, value: impl Into<String>) -> Self {
        self.config.save.base_name = value.into();
        self
    }

    /// Sets the directory charts are written to.
    pub fn chart_dir(mut self, value: impl Into<PathBuf>) -> Self {
        self.config.chart_dir = value.into();
        self
    }

    /// Sets the upper bound of the keyword count; zero is raised to one.
    pub fn max_keywords(mut self, value: usize) -> Self {
        self.config.max_keywords = value.max(1);
        self
    }

    /// Builds the config.
    pub fn build(self) -> WordlensConfig {
        self.config
    }
}

impl Default for WordlensConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
