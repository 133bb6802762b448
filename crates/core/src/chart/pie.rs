//! Pie chart with percentage labels and a keyword legend.
//!
//! Slices start at 12 o'clock and run counter-clockwise in ranked order.
//! Percentages are relative to the selection total, one decimal place.

use super::svg::{Anchor, PAIRED, SvgDocument, TextStyle};
use super::{ArtifactFormat, ChartArtifact, ChartConfig, ChartKind};
use crate::frequency::RankedSelection;

const START_ANGLE: f64 = 90.0;
const LEGEND_WIDTH: u32 = 260;
const LEGEND_ROW: f64 = 22.0;

/// Angular extent of one slice, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub start: f64,
    pub sweep: f64,
}

impl Slice {
    pub fn middle(&self) -> f64 {
        self.start + self.sweep / 2.0
    }
}

/// Slices proportional to `counts`, counter-clockwise from [`START_ANGLE`].
pub fn slices(counts: &[usize]) -> Vec<Slice> {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = START_ANGLE;
    counts
        .iter()
        .map(|&count| {
            let sweep = 360.0 * count as f64 / total as f64;
            let slice = Slice { start, sweep };
            start += sweep;
            slice
        })
        .collect()
}

fn point(cx: f64, cy: f64, r: f64, degrees: f64) -> (f64, f64) {
    let rad = degrees.to_radians();
    (cx + r * rad.cos(), cy - r * rad.sin())
}

pub fn render(selection: &RankedSelection, config: &ChartConfig) -> ChartArtifact {
    let side = config.pie_size;
    let mut svg = SvgDocument::new(side + LEGEND_WIDTH, side, &config.font);
    let center = f64::from(side) / 2.0;
    let radius = f64::from(side) * 0.35;

    let slices = slices(&selection.counts());
    for (i, (entry, slice)) in selection.iter().zip(&slices).enumerate() {
        let color = PAIRED[i % PAIRED.len()];

        if slice.sweep >= 360.0 {
            svg.circle(center, center, radius, color, None);
        } else {
            let (x0, y0) = point(center, center, radius, slice.start);
            let (x1, y1) = point(center, center, radius, slice.start + slice.sweep);
            let large_arc = u8::from(slice.sweep > 180.0);
            let d = format!(
                "M {c:.2} {c:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 0 {x1:.2} {y1:.2} Z",
                c = center,
                r = radius,
            );
            svg.path(&d, color, "white");
        }

        let mid = slice.middle();
        let (lx, ly) = point(center, center, radius * 1.1, mid);
        let anchor = if mid.to_radians().cos() >= 0.0 { Anchor::Start } else { Anchor::End };
        svg.text(lx, ly + 4.0, &entry.token, TextStyle { size: 12.0, anchor, ..Default::default() });

        let (px, py) = point(center, center, radius * 0.6, mid);
        let label = format!("{:.1}%", selection.percentage(entry.count));
        svg.text(px, py + 4.0, &label, TextStyle { size: 12.0, ..Default::default() });
    }

    let legend_x = f64::from(side) + 10.0;
    let rows = selection.len() as f64 + 1.0;
    let mut y = (center - rows * LEGEND_ROW / 2.0).max(LEGEND_ROW);
    svg.text(
        legend_x,
        y,
        &config.keyword_label,
        TextStyle { size: 13.0, anchor: Anchor::Start, bold: true, ..Default::default() },
    );
    for (i, entry) in selection.iter().enumerate() {
        y += LEGEND_ROW;
        svg.rect(legend_x, y - 12.0, 14.0, 14.0, PAIRED[i % PAIRED.len()], None);
        svg.text(
            legend_x + 22.0,
            y,
            &entry.token,
            TextStyle { size: 12.0, anchor: Anchor::Start, ..Default::default() },
        );
    }

    ChartArtifact::new(ChartKind::Pie, ArtifactFormat::Svg, svg.finish())
}
