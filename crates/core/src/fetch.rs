//! Page retrieval from URLs and local files.
//!
//! The pipeline only needs decoded markup; where it comes from is hidden
//! behind the [`Fetcher`] trait. [`HttpFetcher`] is the production
//! implementation: it validates the input with [`validate_url`] and then
//! either performs an HTTP GET or reads a local file.

use std::fs;
use std::future::Future;
use std::path::PathBuf;
#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::{Client, header::CONTENT_TYPE};
use url::Url;

use crate::decode::decode_markup;
use crate::{Result, WordlensError};

/// HTTP client configuration for fetching web pages.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Wordlens/0.1"
                .to_string(),
        }
    }
}

/// A validated page source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// An `http` or `https` URL.
    Web(Url),
    /// A local HTML file.
    File(PathBuf),
}

/// Validates user input before any fetch is attempted.
///
/// Blank input yields [`WordlensError::EmptyUrl`]. `http(s)` URLs must parse,
/// `file://` URLs and existing paths are treated as local files, and
/// anything else is rejected as [`WordlensError::InvalidUrl`].
pub fn validate_url(input: &str) -> Result<Source> {
    let input = input.trim();
    if input.is_empty() {
        return Err(WordlensError::EmptyUrl);
    }

    if input.starts_with("http://") || input.starts_with("https://") {
        let url = Url::parse(input).map_err(|e| WordlensError::InvalidUrl(format!("{}: {}", input, e)))?;
        if url.host_str().is_none() {
            return Err(WordlensError::InvalidUrl(format!("{}: missing host", input)));
        }
        return Ok(Source::Web(url));
    }

    if input.starts_with("file://") {
        let url = Url::parse(input).map_err(|e| WordlensError::InvalidUrl(format!("{}: {}", input, e)))?;
        let path = url
            .to_file_path()
            .map_err(|_| WordlensError::InvalidUrl(format!("{}: not a local path", input)))?;
        return Ok(Source::File(path));
    }

    let path = PathBuf::from(input);
    if path.exists() {
        return Ok(Source::File(path));
    }

    Err(WordlensError::InvalidUrl(format!(
        "{}: URL must include a scheme (http:// or https://)",
        input
    )))
}

/// Something that turns a user-supplied address into decoded markup.
pub trait Fetcher {
    /// Retrieves the markup behind `input`.
    fn fetch(&self, input: &str) -> impl Future<Output = Result<String>>;
}

/// Fetcher backed by reqwest for web URLs and the file system for paths.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    config: FetchConfig,
}

impl HttpFetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, input: &str) -> Result<String> {
        match validate_url(input)? {
            #[cfg(feature = "fetch")]
            Source::Web(url) => fetch_url(url.as_str(), &self.config).await,
            #[cfg(not(feature = "fetch"))]
            Source::Web(url) => Err(WordlensError::InvalidUrl(format!(
                "{}: built without the `fetch` feature",
                url
            ))),
            Source::File(path) => fetch_file(&path),
        }
    }
}

/// Fetches HTML content from a URL.
///
/// Performs an HTTP GET request and returns the body decoded as text using
/// the charset announced by the server, else the page's own `charset`
/// declaration, else a guess from the bytes.
/// Non-success statuses are reported as [`WordlensError::HttpStatus`].
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| WordlensError::InvalidUrl(e.to_string()))?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(WordlensError::HttpError)?;

    tracing::debug!(url = %parsed_url, timeout = config.timeout, "fetching page");

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "zh-CN,zh;q=0.9,en;q=0.8")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                WordlensError::Timeout { timeout: config.timeout }
            } else {
                WordlensError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(WordlensError::HttpStatus { status: status.as_u16(), url: url.to_string() });
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response.bytes().await?;
    tracing::debug!(bytes = body.len(), "page fetched");

    Ok(decode_markup(&body, content_type.as_deref()))
}

/// Reads HTML content from a local file, detecting its charset like a fetched page.
pub fn fetch_file(path: impl Into<PathBuf>) -> Result<String> {
    let path_buf = path.into();

    if !path_buf.exists() {
        return Err(WordlensError::FileNotFound(path_buf));
    }

    tracing::debug!(path = %path_buf.display(), "reading local page");
    match fs::read(&path_buf) {
        Ok(bytes) => Ok(decode_markup(&bytes, None)),
        Err(source) => Err(WordlensError::ReadError { path: path_buf, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.user_agent.contains("Wordlens"));
    }

    #[test]
    fn test_validate_empty_url() {
        assert!(matches!(validate_url(""), Err(WordlensError::EmptyUrl)));
        assert!(matches!(validate_url("   "), Err(WordlensError::EmptyUrl)));
    }

    #[test]
    fn test_validate_web_url() {
        let source = validate_url(" https://example.com/news ").unwrap();
        assert_eq!(source, Source::Web(Url::parse("https://example.com/news").unwrap()));
    }

    #[test]
    fn test_validate_missing_scheme() {
        let result = validate_url("example.com/definitely-not-a-local-file");
        assert!(matches!(result, Err(WordlensError::InvalidUrl(_))));
    }

    #[test]
    fn test_validate_missing_host() {
        assert!(matches!(validate_url("http://"), Err(WordlensError::InvalidUrl(_))));
    }

    #[test]
    fn test_validate_local_file() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("page.html");
        std::fs::write(&page, "<p>hi</p>").unwrap();

        let source = validate_url(page.to_str().unwrap()).unwrap();
        assert_eq!(source, Source::File(page));
    }

    #[test]
    fn test_fetch_file_not_found() {
        let result = fetch_file("/nonexistent/path/file.html");
        assert!(matches!(result, Err(WordlensError::FileNotFound(_))));
    }

    #[test]
    fn test_fetch_file_decodes_gbk() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("gbk.html");
        let (bytes, _, _) = encoding_rs::GBK.encode("<meta charset=\"gbk\"><p>苹果</p>");
        std::fs::write(&page, &bytes).unwrap();

        let html = fetch_file(&page).unwrap();
        assert!(html.contains("<p>苹果</p>"));
    }

    #[test]
    fn test_fetch_file_accepts_undeclared_legacy_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("raw.html");
        let mut bytes = b"<p>".to_vec();
        bytes.extend_from_slice(&[0xC6, 0xBB, 0xB9, 0xFB]);
        bytes.extend_from_slice(b"</p>");
        std::fs::write(&page, &bytes).unwrap();

        let html = fetch_file(&page).unwrap();
        assert!(html.starts_with("<p>"));
        assert!(html.ends_with("</p>"));
    }

    #[test]
    fn test_fetch_file_read_failure_is_fetch_error() {
        let dir = tempfile::tempdir().unwrap();

        let err = fetch_file(dir.path()).unwrap_err();
        assert!(matches!(err, WordlensError::ReadError { .. }));
        assert_eq!(err.kind(), crate::ErrorKind::Fetch);
        assert!(err.to_string().starts_with("Failed to read"));
    }

    #[tokio::test]
    async fn test_http_fetcher_reads_files() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("page.html");
        std::fs::write(&page, "<p>苹果</p>").unwrap();

        let fetcher = HttpFetcher::default();
        let html = fetcher.fetch(page.to_str().unwrap()).await.unwrap();
        assert!(html.contains("苹果"));
    }

    #[tokio::test]
    async fn test_http_fetcher_rejects_blank_input() {
        let fetcher = HttpFetcher::default();
        let result = fetcher.fetch("").await;
        assert!(matches!(result, Err(WordlensError::EmptyUrl)));
    }
}
