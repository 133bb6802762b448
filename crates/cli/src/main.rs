use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;
use wordlens_core::{DEFAULT_FONT_FILE, FontResource, Pipeline, TokenizerKind, WordlensConfig};

mod echo;
mod session;

use session::Session;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rank the keywords of a web page and chart them
#[derive(Parser, Debug)]
#[command(name = "wordlens")]
#[command(author = "Wordlens Contributors")]
#[command(version)]
#[command(about = "Rank and chart the keywords of a web page", long_about = None)]
struct Args {
    /// Font file used for chart labels
    #[arg(long, default_value = DEFAULT_FONT_FILE, value_name = "FILE")]
    font: PathBuf,

    /// Directory saved page text is written to
    #[arg(long, default_value = "output_files", value_name = "DIR")]
    output_dir: PathBuf,

    /// Directory rendered charts are written to
    #[arg(long, default_value = "charts", value_name = "DIR")]
    chart_dir: PathBuf,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Word segmenter (jieba, unicode)
    #[arg(long, default_value = "jieba", value_name = "NAME")]
    tokenizer: TokenizerKind,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Installs the stderr subscriber; `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Looks up the chart font once; a missing font only degrades rendering.
fn load_font(path: &Path) -> FontResource {
    echo::print_info(&format!("Font path: {}", path.display()));

    match FontResource::locate(path) {
        Ok(font) => {
            let located = font.path().map(|p| p.display().to_string()).unwrap_or_default();
            echo::print_success(&format!("Font loaded: {} ({})", font.family(), located.bright_white()));
            font
        }
        Err(err) => {
            echo::print_warning(&format!("{}. Chart labels may not display correctly", err));
            FontResource::fallback()
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    echo::print_banner();
    if args.verbose {
        echo::print_info("Debug logging enabled");
    }

    let mut builder = WordlensConfig::builder()
        .timeout(args.timeout)
        .tokenizer(args.tokenizer)
        .font_path(&args.font)
        .output_dir(&args.output_dir)
        .chart_dir(&args.chart_dir);
    if let Some(user_agent) = args.user_agent {
        builder = builder.user_agent(user_agent);
    }
    let config = builder.build();

    tracing::debug!(
        timeout = config.fetch.timeout,
        user_agent = %config.fetch.user_agent,
        tokenizer = %config.tokenizer,
        "configuration loaded"
    );

    let font = load_font(&config.font_path);
    let pipeline = Pipeline::from_config(&config, font);
    let mut session = Session::new(pipeline, config.chart_dir.clone());

    session.run(io::stdin().lock()).await
}
