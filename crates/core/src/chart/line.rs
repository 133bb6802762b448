//! Line and scatter charts over the ranked order.
//!
//! Both plot the selection exactly as ranked along the category axis.

use super::svg::{Frame, Orientation, SvgDocument};
use super::{ArtifactFormat, ChartArtifact, ChartConfig, ChartKind};
use crate::frequency::RankedSelection;

const MARKER_RADIUS: f64 = 4.5;

/// Counts joined by a line with a round marker per keyword.
pub fn render_line(selection: &RankedSelection, config: &ChartConfig) -> ChartArtifact {
    ChartArtifact::new(ChartKind::Line, ArtifactFormat::Svg, draw(selection, config, true))
}

/// Counts as unconnected points.
pub fn render_scatter(selection: &RankedSelection, config: &ChartConfig) -> ChartArtifact {
    ChartArtifact::new(ChartKind::Scatter, ArtifactFormat::Svg, draw(selection, config, false))
}

fn draw(selection: &RankedSelection, config: &ChartConfig, connect: bool) -> String {
    let mut svg = SvgDocument::new(config.width, config.height, &config.font);
    let frame = Frame::new(Orientation::Vertical, svg.width(), svg.height(), selection.len(), selection.max_count());
    frame.draw(&mut svg, &selection.tokens(), &config.keyword_label, &config.frequency_label, &config.title);

    let points: Vec<(f64, f64)> = selection
        .iter()
        .enumerate()
        .map(|(i, e)| (frame.category_center(i), frame.value_position(e.count as f64)))
        .collect();

    if connect && points.len() > 1 {
        svg.polyline(&points, &config.color, 2.0);
    }

    for (entry, (x, y)) in selection.iter().zip(&points) {
        let tooltip = format!("{}: {}", entry.token, entry.count);
        svg.circle(*x, *y, MARKER_RADIUS, &config.color, Some(tooltip.as_str()));
    }

    svg.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;
    use crate::tokenize::TokenSequence;

    fn selection() -> RankedSelection {
        let tokens: TokenSequence = ["aa", "bb", "bb", "cc", "cc", "cc"].into_iter().collect();
        FrequencyTable::count(&tokens).top_n(3)
    }

    #[test]
    fn test_line_keeps_ranked_order() {
        let artifact = render_line(&selection(), &ChartConfig::default());
        let svg = &artifact.content;

        assert!(svg.contains("<polyline"));
        let cc = svg.find("<title>cc: 3</title>").unwrap();
        let bb = svg.find("<title>bb: 2</title>").unwrap();
        let aa = svg.find("<title>aa: 1</title>").unwrap();
        assert!(cc < bb && bb < aa);
    }

    #[test]
    fn test_scatter_has_no_line() {
        let artifact = render_scatter(&selection(), &ChartConfig::default());
        assert_eq!(artifact.kind, ChartKind::Scatter);
        assert!(!artifact.content.contains("<polyline"));
        assert_eq!(artifact.content.matches("<circle").count(), 3);
    }
}
