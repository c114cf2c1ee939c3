use crate::error::{VisualizeError, VisualizeResult};
use std::collections::HashMap;
use std::path::PathBuf;

/// Where a visualization attempt reads its input files from
pub trait DataSource {
    /// Read a whole input file as text
    ///
    /// # Errors
    ///
    /// [`VisualizeError::FileMissing`] if the file does not exist
    fn read_text(&self, path: &str) -> VisualizeResult<String>;
}

/// Reads input files from a directory on disk
#[derive(Debug, Clone)]
pub struct FileSystemSource {
    root: PathBuf,
}

impl FileSystemSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DataSource for FileSystemSource {
    fn read_text(&self, path: &str) -> VisualizeResult<String> {
        match std::fs::read_to_string(self.root.join(path)) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(VisualizeError::file_missing(path))
            }
            Err(e) => Err(VisualizeError::parse(path, format!("unreadable file: {e}"))),
        }
    }
}

/// Input files fetched ahead of time, so the drawing step stays synchronous
#[derive(Debug, Clone, Default)]
pub struct PrefetchedSource {
    files: HashMap<String, VisualizeResult<String>>,
}

impl PrefetchedSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of reading `path`
    pub fn insert(&mut self, path: impl Into<String>, contents: VisualizeResult<String>) {
        self.files.insert(path.into(), contents);
    }

    /// Builder-style [`PrefetchedSource::insert`] for a file that exists
    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(path, Ok(text.into()));
        self
    }

    /// Fetch every path from the server, remembering failures per file
    pub async fn fetch_all(paths: &[String]) -> Self {
        let mut source = Self::new();
        for path in paths {
            let contents = fetch_text(path).await;
            source.insert(path.clone(), contents);
        }
        source
    }
}

impl DataSource for PrefetchedSource {
    fn read_text(&self, path: &str) -> VisualizeResult<String> {
        self.files
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(VisualizeError::file_missing(path)))
    }
}

/// Resolve a data path against the page origin; reqwest needs absolute URLs
#[cfg(target_arch = "wasm32")]
fn resolve_url(path: &str) -> String {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default();
    format!("{origin}/{}", path.trim_start_matches('/'))
}

#[cfg(not(target_arch = "wasm32"))]
fn resolve_url(path: &str) -> String {
    path.to_string()
}

/// Fetch a text file served next to the bundle
///
/// # Errors
///
/// Returns [`VisualizeError::FileMissing`] if the request fails or the server
/// does not answer with a success status
pub async fn fetch_text(path: &str) -> VisualizeResult<String> {
    let response = reqwest::get(resolve_url(path)).await.map_err(|e| {
        leptos::logging::warn!("Request for {path} failed: {e}");
        VisualizeError::file_missing(path)
    })?;

    if !response.status().is_success() {
        crate::logging::log!("Request for {} returned {}", path, response.status());
        return Err(VisualizeError::file_missing(path));
    }

    response
        .text()
        .await
        .map_err(|e| VisualizeError::parse(path, format!("unreadable response: {e}")))
}
