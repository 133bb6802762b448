//! Error types for wordlens operations.
//!
//! This module defines the main error type [`WordlensError`] together with
//! [`ErrorKind`], the coarse classification callers use to decide how a
//! failure is reported: fetch and parse failures abort one pipeline run,
//! a missing font only degrades rendering, and validation failures are
//! prompts rather than errors.
//!
//! # Example
//!
//! ```rust
//! use wordlens_core::{ErrorKind, WordlensError, Result};
//!
//! fn require_url(url: &str) -> Result<&str> {
//!     if url.trim().is_empty() {
//!         return Err(WordlensError::EmptyUrl);
//!     }
//!     Ok(url)
//! }
//!
//! assert_eq!(require_url("").unwrap_err().kind(), ErrorKind::Validation);
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`WordlensError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network or transport failure while retrieving the page.
    Fetch,
    /// Markup could not be turned into text, or it held nothing to count.
    Parse,
    /// A rendering resource (the font) is unavailable.
    Resource,
    /// User input is missing or malformed.
    Validation,
    /// Local file system failure while persisting output.
    Io,
    /// A chart could not be produced from valid data.
    Render,
}

/// Main error type for the text-to-chart pipeline.
///
/// # Example
///
/// ```rust
/// use wordlens_core::{WordlensError, extract_text};
///
/// match extract_text("") {
///     Ok(text) => println!("{} chars", text.len()),
///     Err(WordlensError::HtmlParseError(reason)) => println!("cannot parse: {}", reason),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum WordlensError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The server answered with a non-success status code.
    #[error("HTTP {status} returned for {url}")]
    HttpStatus { status: u16, url: String },

    /// A local source file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// A local source exists but could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No URL was supplied.
    #[error("No URL provided")]
    EmptyUrl,

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or is malformed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors.
    ///
    /// Returned when the markup is empty, cannot be rewritten, or the
    /// configured content selector is invalid.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// No countable token survived segmentation and filtering.
    #[error("No keywords could be extracted from the document")]
    NoContent,

    /// The chart font could not be resolved.
    #[error("Font file not found: {0}")]
    FontNotFound(PathBuf),

    /// File write errors.
    ///
    /// Wraps standard I/O errors for file operations.
    #[error("Failed to write to file: {0}")]
    WriteError(#[from] std::io::Error),

    /// A renderer failed to serialise its artifact.
    #[error("Failed to render chart: {0}")]
    RenderError(String),
}

impl WordlensError {
    /// Returns the reporting class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            #[cfg(feature = "fetch")]
            WordlensError::HttpError(_) => ErrorKind::Fetch,
            WordlensError::Timeout { .. }
            | WordlensError::HttpStatus { .. }
            | WordlensError::FileNotFound(_)
            | WordlensError::ReadError { .. } => ErrorKind::Fetch,
            WordlensError::EmptyUrl | WordlensError::InvalidUrl(_) => ErrorKind::Validation,
            WordlensError::HtmlParseError(_) | WordlensError::NoContent => ErrorKind::Parse,
            WordlensError::FontNotFound(_) => ErrorKind::Resource,
            WordlensError::WriteError(_) => ErrorKind::Io,
            WordlensError::RenderError(_) => ErrorKind::Render,
        }
    }

    /// Whether this error should be shown as a prompt instead of a failure.
    pub fn is_prompt(&self) -> bool {
        matches!(self, WordlensError::EmptyUrl)
    }
}

impl From<serde_json::Error> for WordlensError {
    fn from(err: serde_json::Error) -> Self {
        WordlensError::RenderError(err.to_string())
    }
}

/// Result type alias for WordlensError.
///
/// This is a convenience alias for `std::result::Result<T, WordlensError>`.
pub type Result<T> = std::result::Result<T, WordlensError>;
