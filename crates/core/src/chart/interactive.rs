//! Interactive bar chart as a standalone HTML page.
//!
//! Bars follow the ranked order like the vertical bar chart. Hover and
//! zoom are provided client-side by plotly.js; the data and layout are
//! embedded as JSON.

use serde_json::{Value, json};

use super::svg::escape;
use super::{ArtifactFormat, ChartArtifact, ChartConfig, ChartKind};
use crate::Result;
use crate::frequency::RankedSelection;

/// plotly.js bundle loaded by the page.
pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Plotly trace for the selection.
pub fn trace(selection: &RankedSelection, config: &ChartConfig) -> Value {
    json!([{
        "type": "bar",
        "x": selection.tokens(),
        "y": selection.counts(),
        "marker": { "color": config.color },
        "hovertemplate": format!(
            "{}=%{{x}}<br>{}=%{{y}}<extra></extra>",
            config.keyword_label, config.frequency_label
        ),
    }])
}

/// Plotly layout: titles plus the chart font at 14px in black.
pub fn layout(config: &ChartConfig) -> Value {
    json!({
        "title": { "text": config.title },
        "xaxis": { "title": { "text": config.keyword_label } },
        "yaxis": { "title": { "text": config.frequency_label } },
        "font": {
            "family": config.font.css_font_stack(),
            "size": 14,
            "color": "black",
        },
        "dragmode": "zoom",
    })
}

/// JSON safe for inline `<script>` content.
fn script_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

pub fn render(selection: &RankedSelection, config: &ChartConfig) -> Result<ChartArtifact> {
    let data = script_json(&trace(selection, config))?;
    let layout = script_json(&layout(config))?;
    let font_face = config.font.css_face().unwrap_or_default();

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="zh">
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{cdn}"></script>
<style>{font_face} body {{ margin: 0; }}</style>
</head>
<body>
<div id="chart" style="width:100%;height:{height}px"></div>
<script>
const data = {data};
const layout = {layout};
Plotly.newPlot("chart", data, layout, {{ responsive: true, scrollZoom: true, displaylogo: false }});
</script>
</body>
</html>
"#,
        title = escape(&config.title),
        cdn = PLOTLY_CDN,
        height = config.height,
    );

    Ok(ChartArtifact::new(ChartKind::InteractiveBar, ArtifactFormat::Html, html))
}
