//! Word cloud on a white canvas.
//!
//! Font size grows with the square root of the count, so the area a word
//! covers is proportional to its count. Words are placed largest first with
//! [`SpiralLayout`]; a word that cannot fit even at the minimum size is
//! dropped.

use super::layout::SpiralLayout;
use super::svg::{SvgDocument, TextStyle, VIRIDIS, text_width};
use super::{ArtifactFormat, ChartArtifact, ChartConfig, ChartKind};
use crate::frequency::RankedSelection;

const MAX_FONT: f64 = 96.0;
const MIN_FONT: f64 = 12.0;
const SHRINK: f64 = 0.85;

/// Font size for `count` relative to the largest count.
pub fn font_size(count: usize, max_count: usize) -> f64 {
    if max_count == 0 {
        return MIN_FONT;
    }
    (MAX_FONT * (count as f64 / max_count as f64).sqrt()).max(MIN_FONT)
}

pub fn render(selection: &RankedSelection, config: &ChartConfig) -> ChartArtifact {
    let mut svg = SvgDocument::new(config.cloud_width, config.cloud_height, &config.font);
    let mut layout = SpiralLayout::new(svg.width(), svg.height());
    let max_count = selection.max_count();
    let mut dropped = 0usize;

    for (i, entry) in selection.iter().enumerate() {
        let mut size = font_size(entry.count, max_count);
        let placed = loop {
            if let Some(rect) = layout.place(text_width(&entry.token, size), size) {
                break Some((rect, size));
            }
            if size <= MIN_FONT {
                break None;
            }
            size = (size * SHRINK).max(MIN_FONT);
        };

        match placed {
            Some((rect, size)) => {
                let (x, y) = rect.center();
                svg.text(
                    x,
                    y + size * 0.35,
                    &entry.token,
                    TextStyle { size, color: VIRIDIS[i % VIRIDIS.len()], ..Default::default() },
                );
            }
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        tracing::debug!(dropped, "word cloud ran out of room");
    }

    ChartArtifact::new(ChartKind::WordCloud, ArtifactFormat::Svg, svg.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;
    use crate::tokenize::TokenSequence;

    #[test]
    fn test_font_size_area_proportional() {
        let big = font_size(4, 4);
        let small = font_size(1, 4);
        assert!((big - MAX_FONT).abs() < 1e-9);
        assert!(((big / small).powi(2) - 4.0).abs() < 1e-9);
        assert!((font_size(1, 10_000) - MIN_FONT).abs() < 1e-9);
    }

    #[test]
    fn test_all_words_placed() {
        let tokens: TokenSequence = ["苹果", "苹果", "苹果", "香蕉", "香蕉", "橙子"].into_iter().collect();
        let selection = FrequencyTable::count(&tokens).top_n(3);
        let artifact = render(&selection, &ChartConfig::default());

        for word in ["苹果", "香蕉", "橙子"] {
            assert!(artifact.content.contains(&format!(">{}<", word)));
        }
        assert!(artifact.content.contains(r#"font-size="96.0""#));
    }

    #[test]
    fn test_cloud_canvas_size() {
        let artifact = render(&RankedSelection::default(), &ChartConfig::default());
        assert!(artifact.content.contains(r#"width="800" height="600""#));
    }
}
