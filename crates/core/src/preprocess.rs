//! Markup cleaning ahead of paragraph extraction.
//!
//! Paragraph text is gathered from every text node below a `<p>`, so any
//! executable or invisible element nested in a paragraph has to be removed
//! from the markup first.

use crate::{Result, WordlensError};

/// Configuration for HTML preprocessing
#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// Whether to remove script tags
    pub remove_scripts: bool,
    /// Whether to remove style tags
    pub remove_styles: bool,
    /// Whether to remove noscript tags
    pub remove_noscript: bool,
    /// Whether to remove template tags
    pub remove_templates: bool,
    /// Whether to remove iframe tags
    pub remove_iframes: bool,
    /// Whether to remove svg tags
    pub remove_svg: bool,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            remove_scripts: true,
            remove_styles: true,
            remove_noscript: true,
            remove_templates: true,
            remove_iframes: true,
            remove_svg: true,
        }
    }
}

impl PreprocessConfig {
    /// Tag names this configuration strips, in a stable order.
    pub fn stripped_tags(&self) -> Vec<&'static str> {
        [
            (self.remove_scripts, "script"),
            (self.remove_styles, "style"),
            (self.remove_noscript, "noscript"),
            (self.remove_templates, "template"),
            (self.remove_iframes, "iframe"),
            (self.remove_svg, "svg"),
        ]
        .into_iter()
        .filter_map(|(enabled, tag)| enabled.then_some(tag))
        .collect()
    }
}

/// Removes the configured non-content elements, children included.
///
/// Returns [`WordlensError::HtmlParseError`] when the markup cannot be
/// streamed through the rewriter.
pub fn preprocess_html(html: &str, config: &PreprocessConfig) -> Result<String> {
    let tags = config.stripped_tags();
    if tags.is_empty() {
        return Ok(html.to_string());
    }

    let mut output = String::with_capacity(html.len());
    let mut rewriter = lol_html::HtmlRewriter::new(
        lol_html::Settings {
            element_content_handlers: tags
                .iter()
                .map(|tag| {
                    lol_html::element!(*tag, |el| {
                        el.remove();
                        Ok(())
                    })
                })
                .collect(),
            ..Default::default()
        },
        |c: &[u8]| {
            output.push_str(&String::from_utf8_lossy(c));
        },
    );

    rewriter
        .write(html.as_bytes())
        .map_err(|e| WordlensError::HtmlParseError(e.to_string()))?;
    rewriter.end().map_err(|e| WordlensError::HtmlParseError(e.to_string()))?;

    Ok(output)
}
