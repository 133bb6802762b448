//! Vertical and horizontal bar charts.
//!
//! Vertical bars run left to right in descending count. Horizontal bars are
//! laid out in ascending count from the bottom, which puts the largest bar at
//! the top of the chart.

use super::svg::{Anchor, Frame, Orientation, SvgDocument, TextStyle};
use super::{ArtifactFormat, ChartArtifact, ChartConfig, ChartKind};
use crate::frequency::{RankedEntry, RankedSelection};

const BAR_FILL: f64 = 0.8;

/// Bars in descending count order along x.
pub fn render_vertical(selection: &RankedSelection, config: &ChartConfig) -> ChartArtifact {
    let entries: Vec<&RankedEntry> = selection.iter().collect();
    let svg = draw(&entries, Orientation::Vertical, config);
    ChartArtifact::new(ChartKind::BarVertical, ArtifactFormat::Svg, svg)
}

/// Bars in ascending count order up the y axis.
pub fn render_horizontal(selection: &RankedSelection, config: &ChartConfig) -> ChartArtifact {
    let entries = selection.ascending();
    let svg = draw(&entries, Orientation::Horizontal, config);
    ChartArtifact::new(ChartKind::BarHorizontal, ArtifactFormat::Svg, svg)
}

fn draw(entries: &[&RankedEntry], orientation: Orientation, config: &ChartConfig) -> String {
    let max = entries.iter().map(|e| e.count).max().unwrap_or(0);
    let mut svg = SvgDocument::new(config.width, config.height, &config.font);
    let frame = Frame::new(orientation, svg.width(), svg.height(), entries.len(), max);

    let labels: Vec<&str> = entries.iter().map(|e| e.token.as_str()).collect();
    frame.draw(&mut svg, &labels, &config.keyword_label, &config.frequency_label, &config.title);

    let thickness = frame.band() * BAR_FILL;
    let baseline = frame.baseline();
    for (i, entry) in entries.iter().enumerate() {
        let center = frame.category_center(i);
        let end = frame.value_position(entry.count as f64);
        let tooltip = format!("{}: {}", entry.token, entry.count);

        match orientation {
            Orientation::Vertical => {
                svg.rect(
                    center - thickness / 2.0,
                    end,
                    thickness,
                    baseline - end,
                    &config.color,
                    Some(tooltip.as_str()),
                );
            }
            Orientation::Horizontal => {
                svg.rect(
                    baseline,
                    center - thickness / 2.0,
                    end - baseline,
                    thickness,
                    &config.color,
                    Some(tooltip.as_str()),
                );
                svg.text(
                    end + 4.0,
                    center + 4.0,
                    &entry.count.to_string(),
                    TextStyle { size: 10.0, anchor: Anchor::Start, ..Default::default() },
                );
            }
        }
    }

    svg.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;
    use crate::tokenize::TokenSequence;

    fn selection() -> RankedSelection {
        let tokens: TokenSequence = ["苹果", "苹果", "香蕉", "苹果", "橙子", "香蕉"].into_iter().collect();
        FrequencyTable::count(&tokens).top_n(3)
    }

    fn order_of(svg: &str, labels: &[&str]) -> Vec<usize> {
        labels.iter().map(|l| svg.find(&format!("<title>{}:", l)).unwrap()).collect()
    }

    #[test]
    fn test_vertical_bars_descending() {
        let artifact = render_vertical(&selection(), &ChartConfig::default());
        assert_eq!(artifact.kind, ChartKind::BarVertical);

        let positions = order_of(&artifact.content, &["苹果", "香蕉", "橙子"]);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(artifact.content.contains("<title>苹果: 3</title>"));
        assert!(artifact.content.contains("关键词频率分析"));
    }

    #[test]
    fn test_horizontal_bars_ascending() {
        let artifact = render_horizontal(&selection(), &ChartConfig::default());
        assert_eq!(artifact.kind, ChartKind::BarHorizontal);

        let positions = order_of(&artifact.content, &["橙子", "香蕉", "苹果"]);
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_bars_use_configured_color() {
        let config = ChartConfig { color: "#123456".to_string(), ..Default::default() };
        let artifact = render_vertical(&selection(), &config);
        assert_eq!(artifact.content.matches(r##"fill="#123456""##).count(), 3);
    }
}
