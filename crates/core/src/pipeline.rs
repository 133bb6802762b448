//! The text-to-chart pipeline driven by a session state record.
//!
//! Every interaction re-runs the whole chain for the current
//! [`SessionState`]: fetch → extract → tokenize → count → rank → render.
//! Nothing is cached between runs.
//!
//! # Example
//!
//! ```rust
//! use wordlens_core::{ChartKind, Fetcher, Pipeline, Result, SessionState, Tokenizer, TokenizerKind};
//!
//! struct Fixed;
//!
//! impl Fetcher for Fixed {
//!     async fn fetch(&self, _url: &str) -> Result<String> {
//!         Ok("<p>rust rust wasm</p>".to_string())
//!     }
//! }
//!
//! # tokio_test_block(async {
//! let pipeline = Pipeline::new(Fixed, Tokenizer::new(TokenizerKind::Unicode));
//! let mut state = SessionState::default();
//! state.set_url("https://example.com");
//! state.set_kind(ChartKind::Pie);
//!
//! let run = pipeline.run(&state).await.unwrap();
//! assert_eq!(run.selection.pairs(), vec![("rust", 2)]);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

use std::path::PathBuf;

use crate::chart::{ChartArtifact, ChartConfig, ChartKind, render};
use crate::config::WordlensConfig;
use crate::extract::{ExtractConfig, ExtractedText, extract_text_with_config};
use crate::fetch::{Fetcher, HttpFetcher};
use crate::font::FontResource;
use crate::frequency::{FrequencyTable, MAX_KEYWORDS, RankedSelection, SelectionRange};
use crate::persist::{SaveConfig, save_text};
use crate::tokenize::{TokenSequence, Tokenizer};
use crate::{Result, WordlensError};

/// The user's current choices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Page address as typed.
    pub url: String,
    /// Requested keyword count; `None` selects the range midpoint.
    pub n: Option<usize>,
    /// Selected chart.
    pub kind: ChartKind,
}

impl SessionState {
    /// Switches to a new page; the keyword count returns to its default.
    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = url.into().trim().to_string();
        self.n = None;
    }

    pub fn set_n(&mut self, n: usize) {
        self.n = Some(n);
    }

    pub fn set_kind(&mut self, kind: ChartKind) {
        self.kind = kind;
    }
}

/// Everything derived from one page, before the user's selection applies.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub url: String,
    pub text: ExtractedText,
    pub tokens: TokenSequence,
    pub table: FrequencyTable,
    pub range: SelectionRange,
}

impl Analysis {
    /// Ranks the table for a requested count, clamped into the range.
    pub fn rank(&self, requested: Option<usize>) -> (usize, RankedSelection) {
        let n = requested.map_or_else(|| self.range.default_value(), |n| self.range.clamp(n));
        (n, self.table.top_n_within(n, &self.range))
    }
}

/// Outcome of one full pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    pub analysis: Analysis,
    /// Count the user asked for, if any.
    pub requested: Option<usize>,
    /// Count actually used.
    pub n: usize,
    pub selection: RankedSelection,
    pub artifact: ChartArtifact,
}

impl PipelineRun {
    /// Whether the requested count fell outside the range.
    pub fn was_clamped(&self) -> bool {
        self.requested.is_some_and(|n| n != self.n)
    }
}

/// The pipeline with its collaborators.
pub struct Pipeline<F> {
    fetcher: F,
    tokenizer: Tokenizer,
    extract: ExtractConfig,
    chart: ChartConfig,
    save: SaveConfig,
    max_keywords: usize,
}

impl Pipeline<HttpFetcher> {
    /// Production pipeline for `config`, rendering with `font`.
    pub fn from_config(config: &WordlensConfig, font: FontResource) -> Self {
        Pipeline::new(HttpFetcher::new(config.fetch.clone()), Tokenizer::new(config.tokenizer))
            .with_extract_config(config.extract.clone())
            .with_chart_config(ChartConfig { font, ..config.chart.clone() })
            .with_save_config(config.save.clone())
            .with_max_keywords(config.max_keywords)
    }
}

impl<F: Fetcher> Pipeline<F> {
    pub fn new(fetcher: F, tokenizer: Tokenizer) -> Self {
        Self {
            fetcher,
            tokenizer,
            extract: ExtractConfig::default(),
            chart: ChartConfig::default(),
            save: SaveConfig::default(),
            max_keywords: MAX_KEYWORDS,
        }
    }

    pub fn with_extract_config(mut self, config: ExtractConfig) -> Self {
        self.extract = config;
        self
    }

    pub fn with_chart_config(mut self, config: ChartConfig) -> Self {
        self.chart = config;
        self
    }

    pub fn with_save_config(mut self, config: SaveConfig) -> Self {
        self.save = config;
        self
    }

    pub fn with_max_keywords(mut self, value: usize) -> Self {
        self.max_keywords = value.max(1);
        self
    }

    pub fn chart_config(&self) -> &ChartConfig {
        &self.chart
    }

    pub fn save_config(&self) -> &SaveConfig {
        &self.save
    }

    /// Fetches `url` and runs it through extraction, tokenization and counting.
    ///
    /// A blank `url` fails with [`WordlensError::EmptyUrl`] before any fetch;
    /// a page without countable tokens fails with [`WordlensError::NoContent`].
    pub async fn analyze(&self, url: &str) -> Result<Analysis> {
        let url = url.trim();
        if url.is_empty() {
            return Err(WordlensError::EmptyUrl);
        }

        let markup = self.fetcher.fetch(url).await?;
        let text = extract_text_with_config(&markup, &self.extract)?;
        let tokens = self.tokenizer.tokenize(text.as_str());
        let table = FrequencyTable::count(&tokens);
        let range = SelectionRange::with_cap(table.distinct_count(), self.max_keywords)?;

        tracing::debug!(
            url,
            chars = text.as_str().chars().count(),
            tokens = tokens.len(),
            distinct = table.distinct_count(),
            max = range.max(),
            "analysis complete"
        );

        Ok(Analysis { url: url.to_string(), text, tokens, table, range })
    }

    /// Runs the whole pipeline for `state`.
    pub async fn run(&self, state: &SessionState) -> Result<PipelineRun> {
        let analysis = self.analyze(&state.url).await?;
        let (n, selection) = analysis.rank(state.n);
        let artifact = render(&selection, state.kind, &self.chart)?;

        Ok(PipelineRun { analysis, requested: state.n, n, selection, artifact })
    }

    /// Runs the pipeline for `state` and saves the extracted text.
    pub async fn save(&self, state: &SessionState) -> Result<(PipelineRun, PathBuf)> {
        let run = self.run(state).await?;
        let path = save_text(run.analysis.text.as_str(), &self.save)?;
        Ok((run, path))
    }
}
