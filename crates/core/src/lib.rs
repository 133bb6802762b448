pub mod chart;
pub mod config;
pub mod decode;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod font;
pub mod frequency;
pub mod parse;
pub mod persist;
pub mod pipeline;
pub mod preprocess;
pub mod tokenize;

pub use chart::{ArtifactFormat, ChartArtifact, ChartConfig, ChartKind, render};
pub use config::{WordlensConfig, WordlensConfigBuilder};
pub use decode::{decode_markup, detect_encoding};
pub use error::{ErrorKind, Result, WordlensError};
pub use extract::{ExtractConfig, ExtractedText, extract_text, extract_text_with_config};
#[cfg(feature = "fetch")]
pub use fetch::fetch_url;
pub use fetch::{FetchConfig, Fetcher, HttpFetcher, Source, fetch_file, validate_url};
pub use font::{DEFAULT_FONT_FILE, FontResource};
pub use frequency::{FrequencyTable, MAX_KEYWORDS, RankedEntry, RankedSelection, SelectionRange, percentage};
pub use parse::Document;
pub use persist::{SaveConfig, save_text};
pub use pipeline::{Analysis, Pipeline, PipelineRun, SessionState};
#[doc(hidden)]
pub use preprocess::{PreprocessConfig, preprocess_html};
pub use tokenize::{JiebaSegmenter, Segmenter, TokenSequence, Tokenizer, TokenizerKind, UnicodeSegmenter, is_countable};
