//! Per-keyword box plot of counts.
//!
//! Each keyword forms its own group holding a single count, so every box
//! collapses onto one line at that count with zero-length whiskers.

use super::svg::{Frame, Orientation, SvgDocument};
use super::{ArtifactFormat, ChartArtifact, ChartConfig, ChartKind};
use crate::frequency::RankedSelection;

const BOX_FILL: f64 = 0.6;
const EDGE_COLOR: &str = "#3f3f3f";

/// Five-number summary with linearly interpolated quartiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl Quartiles {
    /// Summary of `values`; `None` when empty.
    pub fn new(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            min: sorted[0],
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }
}

fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    sorted[lower] + (sorted[upper] - sorted[lower]) * (pos - lower as f64)
}

pub fn render(selection: &RankedSelection, config: &ChartConfig) -> ChartArtifact {
    let mut svg = SvgDocument::new(config.width, config.height, &config.font);
    let frame = Frame::new(Orientation::Vertical, svg.width(), svg.height(), selection.len(), selection.max_count());
    frame.draw(&mut svg, &selection.tokens(), &config.keyword_label, &config.frequency_label, &config.box_title);

    let width = frame.band() * BOX_FILL;
    for (i, entry) in selection.iter().enumerate() {
        let Some(summary) = Quartiles::new(&[entry.count as f64]) else {
            continue;
        };
        let center = frame.category_center(i);
        let left = center - width / 2.0;
        let top = frame.value_position(summary.q3);
        let bottom = frame.value_position(summary.q1);
        let tooltip = format!("{}: {}", entry.token, entry.count);

        svg.line(center, frame.value_position(summary.max), center, top, EDGE_COLOR, 1.0);
        svg.line(center, bottom, center, frame.value_position(summary.min), EDGE_COLOR, 1.0);
        svg.rect(left, top, width, bottom - top, &config.color, Some(tooltip.as_str()));
        let median = frame.value_position(summary.median);
        svg.line(left, median, left + width, median, EDGE_COLOR, 1.5);
    }

    ChartArtifact::new(ChartKind::BoxPlot, ArtifactFormat::Svg, svg.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;
    use crate::tokenize::TokenSequence;

    #[test]
    fn test_quartiles() {
        let q = Quartiles::new(&[4.0, 1.0, 3.0, 2.0, 5.0]).unwrap();
        assert_eq!(q, Quartiles { min: 1.0, q1: 2.0, median: 3.0, q3: 4.0, max: 5.0 });
        assert!(Quartiles::new(&[]).is_none());
    }

    #[test]
    fn test_single_value_collapses() {
        let q = Quartiles::new(&[7.0]).unwrap();
        assert_eq!(q, Quartiles { min: 7.0, q1: 7.0, median: 7.0, q3: 7.0, max: 7.0 });
    }

    #[test]
    fn test_boxes_are_flat() {
        let tokens: TokenSequence = ["aa", "aa", "bb"].into_iter().collect();
        let selection = FrequencyTable::count(&tokens).top_n(2);
        let artifact = render(&selection, &ChartConfig::default());

        assert!(artifact.content.contains("词频箱线图"));
        assert_eq!(artifact.content.matches(r#"height="0.00""#).count(), 2);
    }
}
