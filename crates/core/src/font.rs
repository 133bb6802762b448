//! Resolution of the chart font.
//!
//! Charts name a CJK-capable font family. When the font file is found, SVG
//! output embeds an `@font-face` rule pointing at it; otherwise renderers
//! fall back to generic families and viewers may show substitute glyphs.

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::{Result, WordlensError};

/// File name of the default chart font.
pub const DEFAULT_FONT_FILE: &str = "SimHei.ttf";

/// Families tried by viewers after the configured one.
const FALLBACK_FAMILIES: &[&str] = &["Microsoft YaHei", "PingFang SC", "Noto Sans CJK SC", "sans-serif"];

/// A font family, optionally backed by a font file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontResource {
    family: String,
    path: Option<PathBuf>,
}

impl FontResource {
    /// Resolves an exact font file path.
    ///
    /// The family name is the file stem (`SimHei.ttf` → `SimHei`).
    pub fn resolve(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(WordlensError::FontNotFound(path.to_path_buf()));
        }

        let path = fs::canonicalize(path)?;
        let family = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .unwrap_or("sans-serif")
            .to_string();

        Ok(Self { family, path: Some(path) })
    }

    /// Looks for a font by path, then by file name in the working directory,
    /// then in the platform font directory.
    pub fn locate(path: impl AsRef<Path>) -> Result<Self> {
        let requested = path.as_ref();
        let mut candidates = vec![requested.to_path_buf()];

        if let Some(name) = requested.file_name() {
            if let Ok(cwd) = std::env::current_dir() {
                candidates.push(cwd.join(name));
            }
            if let Some(font_dir) = dirs::font_dir() {
                candidates.push(font_dir.join(name));
            }
        }

        for candidate in &candidates {
            if candidate.is_file() {
                tracing::debug!(path = %candidate.display(), "font located");
                return Self::resolve(candidate);
            }
        }

        tracing::warn!(path = %requested.display(), "font not found, charts use generic families");
        Err(WordlensError::FontNotFound(requested.to_path_buf()))
    }

    /// Generic family without a backing file.
    pub fn fallback() -> Self {
        Self { family: "sans-serif".to_string(), path: None }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_fallback(&self) -> bool {
        self.path.is_none()
    }

    /// CSS `font-family` value, configured family first.
    pub fn css_font_stack(&self) -> String {
        let mut families: Vec<&str> = Vec::new();
        if self.family != "sans-serif" {
            families.push(&self.family);
        }
        families.extend(FALLBACK_FAMILIES.iter().copied().filter(|f| *f != self.family));

        families
            .iter()
            .map(|f| if *f == "sans-serif" { f.to_string() } else { format!("'{}'", f) })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `@font-face` rule for the backing file, if any.
    pub fn css_face(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        let url = Url::from_file_path(path).ok()?;
        Some(format!(
            "@font-face {{ font-family: '{}'; src: url('{}'); }}",
            self.family, url
        ))
    }
}

impl Default for FontResource {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_missing_font() {
        let result = FontResource::resolve("/nonexistent/SimHei.ttf");
        assert!(matches!(result, Err(WordlensError::FontNotFound(_))));
    }

    #[test]
    fn test_locate_missing_font() {
        let result = FontResource::locate("/nonexistent/NoSuchFont-4f1c.ttf");
        assert!(matches!(result, Err(WordlensError::FontNotFound(p)) if p.ends_with("NoSuchFont-4f1c.ttf")));
    }

    #[test]
    fn test_resolve_existing_font() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("SimHei.ttf");
        std::fs::write(&path, b"not really a font").unwrap();

        let font = FontResource::resolve(&path).unwrap();
        assert_eq!(font.family(), "SimHei");
        assert!(!font.is_fallback());

        let face = font.css_face().unwrap();
        assert!(face.contains("font-family: 'SimHei'"));
        assert!(face.contains("file://"));
        assert!(font.css_font_stack().starts_with("'SimHei', "));
    }

    #[test]
    fn test_fallback() {
        let font = FontResource::fallback();
        assert!(font.is_fallback());
        assert!(font.css_face().is_none());
        assert_eq!(
            font.css_font_stack(),
            "'Microsoft YaHei', 'PingFang SC', 'Noto Sans CJK SC', sans-serif"
        );
    }
}
