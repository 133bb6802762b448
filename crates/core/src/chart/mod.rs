//! Chart dispatch over eight rendering strategies.
//!
//! [`ChartKind`] is a closed enumeration; [`render`] maps each variant to
//! exactly one renderer and every renderer consumes the same
//! [`RankedSelection`]. Renderers are pure: the same selection and
//! configuration always produce byte-identical artifacts.
//!
//! # Example
//!
//! ```rust
//! use wordlens_core::{ArtifactFormat, ChartConfig, ChartKind, FrequencyTable, TokenSequence, render};
//!
//! let tokens: TokenSequence = ["苹果", "苹果", "香蕉"].into_iter().collect();
//! let selection = FrequencyTable::count(&tokens).top_n(2);
//! let artifact = render(&selection, ChartKind::Pie, &ChartConfig::default()).unwrap();
//! assert_eq!(artifact.format, ArtifactFormat::Svg);
//! assert!(artifact.content.contains("66.7%"));
//! ```

pub mod bar;
pub mod boxplot;
pub mod interactive;
pub mod layout;
pub mod line;
pub mod pie;
pub mod svg;
pub mod wordcloud;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::Result;
use crate::font::FontResource;
use crate::frequency::RankedSelection;

/// The eight visualisation strategies, in selector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    /// Font-scaled words laid out on a canvas.
    #[default]
    WordCloud,
    /// Horizontal bars, smallest at the bottom.
    BarHorizontal,
    /// Slices with percentage labels and a legend.
    Pie,
    /// Vertical bars, largest first.
    BarVertical,
    /// Counts joined by a line in ranked order.
    Line,
    /// Counts as points in ranked order.
    Scatter,
    /// One box per keyword over its counts.
    BoxPlot,
    /// Vertical bars with client-side hover and zoom.
    InteractiveBar,
}

impl ChartKind {
    /// All kinds in selector order.
    pub const ALL: [ChartKind; 8] = [
        ChartKind::WordCloud,
        ChartKind::BarHorizontal,
        ChartKind::Pie,
        ChartKind::BarVertical,
        ChartKind::Line,
        ChartKind::Scatter,
        ChartKind::BoxPlot,
        ChartKind::InteractiveBar,
    ];

    /// Selector label.
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::WordCloud => "词云图",
            ChartKind::BarHorizontal => "横向柱状图",
            ChartKind::Pie => "饼状图",
            ChartKind::BarVertical => "纵向柱状图",
            ChartKind::Line => "折线图",
            ChartKind::Scatter => "散点图",
            ChartKind::BoxPlot => "箱线图",
            ChartKind::InteractiveBar => "交互式条形图",
        }
    }

    /// ASCII name, also used for artifact file names.
    pub fn slug(&self) -> &'static str {
        match self {
            ChartKind::WordCloud => "word-cloud",
            ChartKind::BarHorizontal => "bar-horizontal",
            ChartKind::Pie => "pie",
            ChartKind::BarVertical => "bar-vertical",
            ChartKind::Line => "line",
            ChartKind::Scatter => "scatter",
            ChartKind::BoxPlot => "box-plot",
            ChartKind::InteractiveBar => "interactive-bar",
        }
    }

    /// 1-based position in [`ChartKind::ALL`].
    pub fn position(&self) -> usize {
        Self::ALL.iter().position(|k| k == self).map_or(0, |i| i + 1)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChartKind {
    type Err = String;

    /// Accepts the selector label, the ASCII name or the 1-based position.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(position) = s.parse::<usize>() {
            return position
                .checked_sub(1)
                .and_then(|i| Self::ALL.get(i).copied())
                .ok_or_else(|| format!("Invalid chart position: {}. Valid range: 1-{}", s, Self::ALL.len()));
        }

        let lowered = s.to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|k| k.label() == s || k.slug() == lowered)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|k| k.slug()).collect();
                format!("Invalid chart kind: {}. Valid options: {}", s, names.join(", "))
            })
    }
}

/// Container format of a rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    Svg,
    Html,
}

impl ArtifactFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactFormat::Svg => "svg",
            ArtifactFormat::Html => "html",
        }
    }
}

/// A rendered chart, ready to be displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartArtifact {
    pub kind: ChartKind,
    pub format: ArtifactFormat,
    pub content: String,
}

impl ChartArtifact {
    pub fn new(kind: ChartKind, format: ArtifactFormat, content: String) -> Self {
        Self { kind, format, content }
    }

    /// `<slug>.<extension>`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.kind.slug(), self.format.extension())
    }

    /// Writes the artifact into `dir`, replacing an earlier rendering of the same kind.
    pub fn write_to_dir(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        fs::write(&path, &self.content)?;
        Ok(path)
    }
}

/// Visual settings shared by all renderers.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Canvas width of axis-based charts in pixels.
    pub width: u32,
    /// Canvas height of axis-based charts in pixels.
    pub height: u32,
    /// Canvas side of the pie chart, legend excluded.
    pub pie_size: u32,
    /// Word-cloud canvas width.
    pub cloud_width: u32,
    /// Word-cloud canvas height.
    pub cloud_height: u32,
    /// Fill of bars, markers and boxes.
    pub color: String,
    /// Title of frequency charts.
    pub title: String,
    /// Title of the box plot.
    pub box_title: String,
    /// Name of the keyword axis and legend.
    pub keyword_label: String,
    /// Name of the frequency axis.
    pub frequency_label: String,
    /// Font used for every label.
    pub font: FontResource,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            pie_size: 800,
            cloud_width: 800,
            cloud_height: 600,
            color: "skyblue".to_string(),
            title: "关键词频率分析".to_string(),
            box_title: "词频箱线图".to_string(),
            keyword_label: "关键词".to_string(),
            frequency_label: "词频".to_string(),
            font: FontResource::fallback(),
        }
    }
}

/// Renders `selection` with the strategy selected by `kind`.
pub fn render(selection: &RankedSelection, kind: ChartKind, config: &ChartConfig) -> Result<ChartArtifact> {
    tracing::debug!(kind = kind.slug(), entries = selection.len(), "rendering chart");

    match kind {
        ChartKind::WordCloud => Ok(wordcloud::render(selection, config)),
        ChartKind::BarHorizontal => Ok(bar::render_horizontal(selection, config)),
        ChartKind::Pie => Ok(pie::render(selection, config)),
        ChartKind::BarVertical => Ok(bar::render_vertical(selection, config)),
        ChartKind::Line => Ok(line::render_line(selection, config)),
        ChartKind::Scatter => Ok(line::render_scatter(selection, config)),
        ChartKind::BoxPlot => Ok(boxplot::render(selection, config)),
        ChartKind::InteractiveBar => interactive::render(selection, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;
    use crate::tokenize::TokenSequence;
    use rstest::rstest;

    fn selection() -> RankedSelection {
        let tokens: TokenSequence = ["苹果", "苹果", "香蕉", "苹果", "橙子", "香蕉"].into_iter().collect();
        FrequencyTable::count(&tokens).top_n(3)
    }

    #[rstest]
    #[case("词云图", ChartKind::WordCloud)]
    #[case("交互式条形图", ChartKind::InteractiveBar)]
    #[case("bar-vertical", ChartKind::BarVertical)]
    #[case("Box_Plot", ChartKind::BoxPlot)]
    #[case("3", ChartKind::Pie)]
    #[case(" 8 ", ChartKind::InteractiveBar)]
    fn test_chart_kind_from_str(#[case] input: &str, #[case] expected: ChartKind) {
        assert_eq!(input.parse::<ChartKind>(), Ok(expected));
    }

    #[rstest]
    #[case("0")]
    #[case("9")]
    #[case("histogram")]
    fn test_chart_kind_from_str_rejects(#[case] input: &str) {
        assert!(input.parse::<ChartKind>().is_err());
    }

    #[test]
    fn test_selector_order_and_labels() {
        let labels: Vec<&str> = ChartKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            vec!["词云图", "横向柱状图", "饼状图", "纵向柱状图", "折线图", "散点图", "箱线图", "交互式条形图"]
        );
        for (i, kind) in ChartKind::ALL.iter().enumerate() {
            assert_eq!(kind.position(), i + 1);
        }
    }

    #[test]
    fn test_every_kind_renders() {
        let config = ChartConfig::default();
        let selection = selection();

        for kind in ChartKind::ALL {
            let artifact = render(&selection, kind, &config).unwrap();
            assert_eq!(artifact.kind, kind);
            assert!(artifact.content.contains("苹果"), "{} lost a keyword", kind.slug());
        }
    }

    #[test]
    fn test_formats() {
        let config = ChartConfig::default();
        let selection = selection();

        let html = render(&selection, ChartKind::InteractiveBar, &config).unwrap();
        assert_eq!(html.format, ArtifactFormat::Html);
        assert_eq!(html.file_name(), "interactive-bar.html");

        let svg = render(&selection, ChartKind::Line, &config).unwrap();
        assert_eq!(svg.format, ArtifactFormat::Svg);
        assert!(svg.content.starts_with("<svg"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let config = ChartConfig::default();
        let selection = selection();

        for kind in ChartKind::ALL {
            assert_eq!(
                render(&selection, kind, &config).unwrap(),
                render(&selection, kind, &config).unwrap()
            );
        }
    }

    #[test]
    fn test_empty_selection_renders() {
        let config = ChartConfig::default();
        for kind in ChartKind::ALL {
            assert!(render(&RankedSelection::default(), kind, &config).is_ok());
        }
    }

    #[test]
    fn test_write_to_dir() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = render(&selection(), ChartKind::Scatter, &ChartConfig::default()).unwrap();

        let target = dir.path().join("charts");
        let path = artifact.write_to_dir(&target).unwrap();
        assert_eq!(path, target.join("scatter.svg"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), artifact.content);
    }
}
