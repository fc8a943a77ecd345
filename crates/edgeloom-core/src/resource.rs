//! Resource loaders: turn a resource name into an ordered sequence of lines
//!
//! Loading happens before parsing; the rest of the crate never touches I/O.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ResourceUnavailable;

/// Resolves a named resource into its lines
pub trait ResourceLoader {
    fn load_lines(&self, name: &str) -> Result<Vec<String>, ResourceUnavailable>;
}

impl<L: ResourceLoader + ?Sized> ResourceLoader for &L {
    fn load_lines(&self, name: &str) -> Result<Vec<String>, ResourceUnavailable> {
        (**self).load_lines(name)
    }
}

impl<L: ResourceLoader + ?Sized> ResourceLoader for Box<L> {
    fn load_lines(&self, name: &str) -> Result<Vec<String>, ResourceUnavailable> {
        (**self).load_lines(name)
    }
}

/// Split text into lines, dropping a leading byte-order mark
pub(crate) fn split_lines(text: &str) -> Vec<String> {
    text.strip_prefix('\u{feff}')
        .unwrap_or(text)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Loads resources from disk.
///
/// A name is looked up under each root directory in order (a leading `/` is
/// relative to the root), then as a plain path.
#[derive(Debug, Clone, Default)]
pub struct FileSystemLoader {
    roots: Vec<PathBuf>,
}

impl FileSystemLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    pub fn with_roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots.extend(roots.into_iter().map(Into::into));
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Find the file a resource name refers to
    pub fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = name.trim_start_matches('/');
        if !relative.is_empty() {
            for root in &self.roots {
                let candidate = root.join(relative);
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }

        let direct = Path::new(name);
        direct.is_file().then(|| direct.to_path_buf())
    }
}

impl ResourceLoader for FileSystemLoader {
    fn load_lines(&self, name: &str) -> Result<Vec<String>, ResourceUnavailable> {
        let path = self
            .resolve(name)
            .ok_or_else(|| ResourceUnavailable::not_found(name))?;
        tracing::debug!("Loading resource {} from {:?}", name, path);

        let text =
            std::fs::read_to_string(&path).map_err(|e| ResourceUnavailable::new(name, e))?;
        Ok(split_lines(&text))
    }
}

/// Serves resources from memory; useful for tests and embedded fixtures
#[derive(Debug, Clone, Default)]
pub struct InMemoryLoader {
    resources: BTreeMap<String, String>,
}

impl InMemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        let name = name.into();
        self.resources
            .insert(name.trim_start_matches('/').to_string(), text.into());
    }
}

impl ResourceLoader for InMemoryLoader {
    fn load_lines(&self, name: &str) -> Result<Vec<String>, ResourceUnavailable> {
        self.resources
            .get(name.trim_start_matches('/'))
            .map(|text| split_lines(text))
            .ok_or_else(|| ResourceUnavailable::not_found(name))
    }
}
