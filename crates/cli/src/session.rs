//! Line-oriented command loop over a [`Pipeline`].
//!
//! Every command that changes the state re-runs the whole pipeline for the
//! current URL; nothing is cached between runs.

use std::io::BufRead;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use wordlens_core::{ChartKind, ErrorKind, Fetcher, Pipeline, PipelineRun, SessionState, WordlensError};

use crate::echo;

/// Shown instead of an error when no URL has been entered.
pub const EMPTY_URL_PROMPT: &str = "请输入有效的网页 URL。";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Url(String),
    N(usize),
    Chart(ChartKind),
    Save,
    Kinds,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = s.split_once(char::is_whitespace).unwrap_or((s, ""));
        let arg = arg.trim();

        match name.to_lowercase().as_str() {
            "url" | "u" => Ok(Self::Url(arg.to_string())),
            "n" | "top" => arg
                .parse()
                .map(Self::N)
                .map_err(|_| format!("Invalid keyword count: {}. Expected a positive integer", arg)),
            "chart" | "c" => arg.parse().map(Self::Chart),
            "save" | "s" => Ok(Self::Save),
            "kinds" | "k" => Ok(Self::Kinds),
            "help" | "h" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(format!("Unknown command: {}. Type `help` for the list of commands", name)),
        }
    }
}

/// Interactive session state bound to a pipeline.
pub struct Session<F> {
    pipeline: Pipeline<F>,
    chart_dir: PathBuf,
    state: SessionState,
}

impl<F: Fetcher> Session<F> {
    pub fn new(pipeline: Pipeline<F>, chart_dir: impl Into<PathBuf>) -> Self {
        Self { pipeline, chart_dir: chart_dir.into(), state: SessionState::default() }
    }

    /// Reads commands from `input` until `quit` or end of input.
    pub async fn run<R: BufRead>(&mut self, mut input: R) -> anyhow::Result<()> {
        let mut line = String::new();

        loop {
            echo::print_marker();
            line.clear();
            if input.read_line(&mut line).context("Failed to read command")? == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command).await,
                Err(message) => echo::print_warning(&message),
            }
        }

        eprintln!();
        Ok(())
    }

    async fn execute(&mut self, command: Command) {
        tracing::debug!(?command, "executing");

        match command {
            Command::Url(url) => {
                self.state.set_url(url);
                self.refresh().await;
            }
            Command::N(n) => {
                self.state.set_n(n);
                self.refresh().await;
            }
            Command::Chart(kind) => {
                self.state.set_kind(kind);
                self.refresh().await;
            }
            Command::Save => self.save().await,
            Command::Kinds => echo::print_kinds(self.state.kind),
            Command::Help => echo::print_help(),
            Command::Quit => {}
        }
    }

    async fn refresh(&self) {
        match self.pipeline.run(&self.state).await {
            Ok(run) => self.show(&run),
            Err(err) => report(&err),
        }
    }

    async fn save(&self) {
        match self.pipeline.save(&self.state).await {
            Ok((run, path)) => {
                self.show(&run);
                echo::print_success(&format!(
                    "Saved page text to {} ({})",
                    path.display(),
                    echo::format_size(run.analysis.text.len())
                ));
            }
            Err(err) => report(&err),
        }
    }

    fn show(&self, run: &PipelineRun) {
        if let Some(requested) = run.requested.filter(|_| run.was_clamped()) {
            echo::print_warning(&format!(
                "Keyword count {} is outside {}-{}, using {}",
                requested,
                run.analysis.range.min(),
                run.analysis.range.max(),
                run.n
            ));
        }

        echo::print_ranking(&run.selection, &run.analysis.range, run.n);

        match run.artifact.write_to_dir(&self.chart_dir) {
            Ok(path) => echo::print_success(&format!("{} written to {}", run.artifact.kind.label(), path.display())),
            Err(err) => report(&err),
        }
    }
}

/// Reports a failed run; the session stays open for a retry.
fn report(err: &WordlensError) {
    if err.is_prompt() {
        echo::print_info(EMPTY_URL_PROMPT);
        return;
    }

    match err.kind() {
        ErrorKind::Fetch | ErrorKind::Parse | ErrorKind::Validation => echo::print_warning(&err.to_string()),
        ErrorKind::Resource | ErrorKind::Io | ErrorKind::Render => echo::print_error(&err.to_string()),
    }
}
