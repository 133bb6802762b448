//! Saving extracted text under non-colliding file names.
//!
//! Files are named `<base>_<k>.txt` with the smallest free `k ≥ 1` and
//! opened with create-new semantics, so an existing file is never replaced.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::Result;

/// Where and under which name extracted text is saved.
#[derive(Debug, Clone)]
pub struct SaveConfig {
    /// Output directory, created on first save.
    pub output_dir: PathBuf,
    /// File name prefix before the numeric suffix.
    pub base_name: String,
    /// File extension without the dot.
    pub extension: String,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self { output_dir: PathBuf::from("output_files"), base_name: "news".to_string(), extension: "txt".to_string() }
    }
}

impl SaveConfig {
    /// Path of the `index`-th candidate file.
    pub fn candidate(&self, index: usize) -> PathBuf {
        self.output_dir.join(format!("{}_{}.{}", self.base_name, index, self.extension))
    }
}

/// Writes `text` as UTF-8 to the first free `<base>_<k>` file and returns its path.
///
/// # Example
///
/// ```rust
/// use wordlens_core::{SaveConfig, save_text};
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = SaveConfig { output_dir: dir.path().to_path_buf(), ..Default::default() };
///
/// let first = save_text("第一篇", &config).unwrap();
/// let second = save_text("第二篇", &config).unwrap();
/// assert!(first.ends_with("news_1.txt"));
/// assert!(second.ends_with("news_2.txt"));
/// ```
pub fn save_text(text: &str, config: &SaveConfig) -> Result<PathBuf> {
    fs::create_dir_all(&config.output_dir)?;

    let mut index = first_free(config)?;
    loop {
        let path = config.candidate(index);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => {
                write_new(file, &path, text)?;
                tracing::info!(path = %path.display(), bytes = text.len(), "saved extracted text");
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => index += 1,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Fills a freshly created file; on failure the partial file is removed.
fn write_new(mut file: File, path: &Path, text: &str) -> Result<()> {
    if let Err(e) = file.write_all(text.as_bytes()) {
        drop(file);
        if let Err(cleanup) = fs::remove_file(path) {
            tracing::warn!(path = %path.display(), error = %cleanup, "could not remove partial file");
        }
        return Err(e.into());
    }
    Ok(())
}

/// Smallest index whose candidate does not exist yet.
fn first_free(config: &SaveConfig) -> Result<usize> {
    let mut index = 1;
    while config.candidate(index).try_exists()? {
        index += 1;
    }
    Ok(index)
}
