//! Minimal SVG writer and the axis frame shared by the category charts.

use crate::font::FontResource;

/// Qualitative 12-colour "Paired" palette.
pub const PAIRED: [&str; 12] = [
    "#a6cee3", "#1f78b4", "#b2df8a", "#33a02c", "#fb9a99", "#e31a1c", "#fdbf6f", "#ff7f00", "#cab2d6", "#6a3d9a",
    "#ffff99", "#b15928",
];

/// Sequential palette sampled from viridis, used for word-cloud words.
pub const VIRIDIS: [&str; 8] = [
    "#440154", "#46327e", "#365c8d", "#277f8e", "#1fa187", "#4ac16d", "#a0da39", "#d8c22b",
];

const AXIS_COLOR: &str = "#333333";
const GRID_COLOR: &str = "#e5e5e5";

/// Escapes text for use in SVG character data and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Approximate rendered width of `text` at `size` px.
///
/// Wide (CJK) characters take a full em, everything else roughly 0.6 em.
pub fn text_width(text: &str, size: f64) -> f64 {
    text.chars().map(|c| if c.is_ascii() { 0.6 } else { 1.0 }).sum::<f64>() * size
}

/// Horizontal anchoring of a text element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Presentation attributes of a text element.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle<'a> {
    pub size: f64,
    pub anchor: Anchor,
    pub color: &'a str,
    pub rotate: Option<f64>,
    pub bold: bool,
}

impl Default for TextStyle<'_> {
    fn default() -> Self {
        Self { size: 12.0, anchor: Anchor::Middle, color: "black", rotate: None, bold: false }
    }
}

/// An SVG document under construction.
pub struct SvgDocument {
    width: u32,
    height: u32,
    font_stack: String,
    font_face: Option<String>,
    body: String,
}

impl SvgDocument {
    pub fn new(width: u32, height: u32, font: &FontResource) -> Self {
        Self { width, height, font_stack: font.css_font_stack(), font_face: font.css_face(), body: String::new() }
    }

    pub fn width(&self) -> f64 {
        f64::from(self.width)
    }

    pub fn height(&self) -> f64 {
        f64::from(self.height)
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str, tooltip: Option<&str>) {
        let open = format!(
            r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}""#,
            x,
            y,
            width.max(0.0),
            height.max(0.0),
            fill
        );
        self.body.push_str(&open);
        match tooltip {
            Some(tip) => self.body.push_str(&format!("><title>{}</title></rect>\n", escape(tip))),
            None => self.body.push_str("/>\n"),
        }
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) {
        self.body.push_str(&format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{:.1}"/>"#,
            x1, y1, x2, y2, stroke, width
        ));
        self.body.push('\n');
    }

    pub fn polyline(&mut self, points: &[(f64, f64)], stroke: &str, width: f64) {
        let coords: Vec<String> = points.iter().map(|(x, y)| format!("{:.2},{:.2}", x, y)).collect();
        self.body.push_str(&format!(
            r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="{:.1}"/>"#,
            coords.join(" "),
            stroke,
            width
        ));
        self.body.push('\n');
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str, tooltip: Option<&str>) {
        self.body.push_str(&format!(r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="{}""#, cx, cy, r, fill));
        match tooltip {
            Some(tip) => self.body.push_str(&format!("><title>{}</title></circle>\n", escape(tip))),
            None => self.body.push_str("/>\n"),
        }
    }

    pub fn path(&mut self, d: &str, fill: &str, stroke: &str) {
        self.body.push_str(&format!(r#"<path d="{}" fill="{}" stroke="{}"/>"#, d, fill, stroke));
        self.body.push('\n');
    }

    pub fn text(&mut self, x: f64, y: f64, content: &str, style: TextStyle<'_>) {
        let mut attrs = format!(
            r#"x="{:.2}" y="{:.2}" font-size="{:.1}" text-anchor="{}" fill="{}""#,
            x,
            y,
            style.size,
            style.anchor.as_str(),
            style.color
        );
        if style.bold {
            attrs.push_str(r#" font-weight="bold""#);
        }
        if let Some(angle) = style.rotate {
            attrs.push_str(&format!(r#" transform="rotate({:.1} {:.2} {:.2})""#, angle, x, y));
        }
        self.body.push_str(&format!("<text {}>{}</text>\n", attrs, escape(content)));
    }

    /// Closes the document.
    pub fn finish(self) -> String {
        let mut out = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{font}">"#,
            w = self.width,
            h = self.height,
            font = escape(&self.font_stack)
        );
        out.push('\n');
        if let Some(face) = &self.font_face {
            out.push_str(&format!("<style>{}</style>\n", face));
        }
        out.push_str(&format!(
            r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
            self.width, self.height
        ));
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

/// Evenly spaced integer ticks from zero covering `max`, steps of 1, 2 or 5 × 10ᵏ.
pub fn nice_ticks(max: usize) -> Vec<usize> {
    if max == 0 {
        return vec![0, 1];
    }

    let raw = max as f64 / 5.0;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let factor = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    let step = ((factor * magnitude).round() as usize).max(1);
    let top = max.div_ceil(step) * step;

    (0..=top).step_by(step).collect()
}

/// Which axis carries the categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Categories along x, values up the y axis.
    Vertical,
    /// Categories up the y axis, values along x.
    Horizontal,
}

/// Plot area with one band per category and a linear value axis from zero.
pub struct Frame {
    orientation: Orientation,
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    categories: usize,
    ticks: Vec<usize>,
}

impl Frame {
    pub fn new(orientation: Orientation, canvas_width: f64, canvas_height: f64, categories: usize, max: usize) -> Self {
        let (left, right, top, bottom) = match orientation {
            Orientation::Vertical => (80.0, 30.0, 60.0, 120.0),
            Orientation::Horizontal => (160.0, 40.0, 60.0, 70.0),
        };
        Self {
            orientation,
            left,
            top,
            width: (canvas_width - left - right).max(1.0),
            height: (canvas_height - top - bottom).max(1.0),
            categories,
            ticks: nice_ticks(max),
        }
    }

    fn category_extent(&self) -> f64 {
        match self.orientation {
            Orientation::Vertical => self.width,
            Orientation::Horizontal => self.height,
        }
    }

    /// Width of one category band.
    pub fn band(&self) -> f64 {
        self.category_extent() / self.categories.max(1) as f64
    }

    /// Centre of category `i` on the category axis.
    ///
    /// Vertical frames count from the left; horizontal frames from the bottom.
    pub fn category_center(&self, i: usize) -> f64 {
        let offset = (i as f64 + 0.5) * self.band();
        match self.orientation {
            Orientation::Vertical => self.left + offset,
            Orientation::Horizontal => self.top + self.height - offset,
        }
    }

    /// Position of `value` on the value axis.
    pub fn value_position(&self, value: f64) -> f64 {
        let top_tick = self.ticks.last().copied().unwrap_or(1).max(1) as f64;
        let ratio = (value / top_tick).clamp(0.0, 1.0);
        match self.orientation {
            Orientation::Vertical => self.top + self.height * (1.0 - ratio),
            Orientation::Horizontal => self.left + self.width * ratio,
        }
    }

    /// Position of the value-axis origin.
    pub fn baseline(&self) -> f64 {
        self.value_position(0.0)
    }

    /// Draws grid, axes, tick labels, category labels and titles.
    pub fn draw(
        &self, svg: &mut SvgDocument, labels: &[&str], category_title: &str, value_title: &str, title: &str,
    ) {
        let canvas_width = svg.width();
        let right = self.left + self.width;
        let bottom = self.top + self.height;

        for &tick in &self.ticks {
            let pos = self.value_position(tick as f64);
            let label = tick.to_string();
            match self.orientation {
                Orientation::Vertical => {
                    svg.line(self.left, pos, right, pos, GRID_COLOR, 1.0);
                    svg.text(
                        self.left - 8.0,
                        pos + 4.0,
                        &label,
                        TextStyle { size: 11.0, anchor: Anchor::End, ..Default::default() },
                    );
                }
                Orientation::Horizontal => {
                    svg.line(pos, self.top, pos, bottom, GRID_COLOR, 1.0);
                    svg.text(pos, bottom + 18.0, &label, TextStyle { size: 11.0, ..Default::default() });
                }
            }
        }

        svg.line(self.left, bottom, right, bottom, AXIS_COLOR, 1.0);
        svg.line(self.left, self.top, self.left, bottom, AXIS_COLOR, 1.0);

        let crowded = labels.len() > 10;
        for (i, label) in labels.iter().enumerate() {
            let center = self.category_center(i);
            match self.orientation {
                Orientation::Vertical if crowded => svg.text(
                    center,
                    bottom + 14.0,
                    label,
                    TextStyle { size: 12.0, anchor: Anchor::End, rotate: Some(-45.0), ..Default::default() },
                ),
                Orientation::Vertical => {
                    svg.text(center, bottom + 20.0, label, TextStyle { size: 12.0, ..Default::default() })
                }
                Orientation::Horizontal => svg.text(
                    self.left - 8.0,
                    center + 4.0,
                    label,
                    TextStyle { size: 12.0, anchor: Anchor::End, ..Default::default() },
                ),
            }
        }

        let (x_title, y_title) = match self.orientation {
            Orientation::Vertical => (category_title, value_title),
            Orientation::Horizontal => (value_title, category_title),
        };
        svg.text(
            self.left + self.width / 2.0,
            svg.height() - 12.0,
            x_title,
            TextStyle { size: 12.0, ..Default::default() },
        );
        svg.text(
            22.0,
            self.top + self.height / 2.0,
            y_title,
            TextStyle { size: 12.0, rotate: Some(-90.0), ..Default::default() },
        );
        svg.text(canvas_width / 2.0, 34.0, title, TextStyle { size: 14.0, bold: true, ..Default::default() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<a href="x">&'"#), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
        assert_eq!(escape("苹果"), "苹果");
    }

    #[test]
    fn test_text_width_counts_wide_chars() {
        assert!((text_width("苹果", 10.0) - 20.0).abs() < 1e-9);
        assert!((text_width("ab", 10.0) - 12.0).abs() < 1e-9);
    }

    #[rstest]
    #[case(0, vec![0, 1])]
    #[case(1, vec![0, 1])]
    #[case(3, vec![0, 1, 2, 3])]
    #[case(7, vec![0, 2, 4, 6, 8])]
    #[case(23, vec![0, 5, 10, 15, 20, 25])]
    #[case(100, vec![0, 20, 40, 60, 80, 100])]
    fn test_nice_ticks(#[case] max: usize, #[case] expected: Vec<usize>) {
        assert_eq!(nice_ticks(max), expected);
    }

    #[test]
    fn test_vertical_frame_positions() {
        let frame = Frame::new(Orientation::Vertical, 1200.0, 600.0, 4, 10);
        assert!(frame.category_center(0) < frame.category_center(3));
        assert!(frame.value_position(10.0) < frame.baseline());
    }

    #[test]
    fn test_horizontal_frame_first_category_at_bottom() {
        let frame = Frame::new(Orientation::Horizontal, 1200.0, 600.0, 4, 10);
        assert!(frame.category_center(0) > frame.category_center(3));
        assert!(frame.value_position(10.0) > frame.baseline());
    }

    #[test]
    fn test_document_structure() {
        let mut svg = SvgDocument::new(100, 50, &FontResource::fallback());
        svg.text(10.0, 10.0, "a<b", TextStyle::default());
        let out = svg.finish();

        assert!(out.starts_with("<svg"));
        assert!(out.trim_end().ends_with("</svg>"));
        assert!(out.contains("a&lt;b"));
        assert!(!out.contains("@font-face"));
    }
}
