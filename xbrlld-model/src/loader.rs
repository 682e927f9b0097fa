//! Model loaders
//!
//! The mapping engine receives its loader as an explicit dependency, so the
//! same conversion code runs against in-memory fixtures and on-disk models.

use crate::error::{LoadError, Result};
use crate::XbrlModel;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// Resolves a document location (URL or path) to a model
pub trait ModelLoader {
    fn load(&self, location: &str) -> Result<XbrlModel>;
}

impl<L: ModelLoader + ?Sized> ModelLoader for &L {
    fn load(&self, location: &str) -> Result<XbrlModel> {
        (**self).load(location)
    }
}

/// Serves models registered in memory, keyed by their URI
#[derive(Clone, Debug, Default)]
pub struct MemoryLoader {
    models: HashMap<String, XbrlModel>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model under its own `uri`
    pub fn insert(&mut self, model: XbrlModel) -> &mut Self {
        self.models.insert(model.uri.clone(), model);
        self
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl ModelLoader for MemoryLoader {
    fn load(&self, location: &str) -> Result<XbrlModel> {
        self.models
            .get(location)
            .cloned()
            .ok_or_else(|| LoadError::NotFound(location.to_string()))
    }
}

/// Loads models serialized as JSON from the filesystem
///
/// Locations are resolved in order:
/// 1. an exact catalog entry (document URL → model file)
/// 2. a `file://` URL or plain path, relative paths against `base_dir`
///
/// Remote URLs without a catalog entry are rejected; fetching is not this
/// loader's job.
#[derive(Clone, Debug, Default)]
pub struct JsonModelLoader {
    catalog: BTreeMap<String, PathBuf>,
    base_dir: Option<PathBuf>,
}

impl JsonModelLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map a document URL to a local model file
    pub fn with_catalog_entry(mut self, url: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.catalog.insert(url.into(), path.into());
        self
    }

    pub fn with_catalog(mut self, catalog: impl IntoIterator<Item = (String, PathBuf)>) -> Self {
        self.catalog.extend(catalog);
        self
    }

    /// Directory that relative paths are resolved against
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    fn resolve(&self, location: &str) -> Result<PathBuf> {
        if let Some(path) = self.catalog.get(location) {
            tracing::debug!(location, path = %path.display(), "resolved via catalog");
            return Ok(path.clone());
        }
        if let Some(path) = location.strip_prefix("file://") {
            return Ok(PathBuf::from(path));
        }
        if location.starts_with("http://") || location.starts_with("https://") {
            return Err(LoadError::Unsupported(format!(
                "{} (remote documents need a catalog entry mapping them to a local model file)",
                location
            )));
        }
        let path = Path::new(location);
        Ok(match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        })
    }
}

impl ModelLoader for JsonModelLoader {
    fn load(&self, location: &str) -> Result<XbrlModel> {
        let path = self.resolve(location)?;
        let text = std::fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound(location.to_string())
            } else {
                LoadError::Io {
                    path: path.clone(),
                    source: e,
                }
            }
        })?;
        let mut model: XbrlModel =
            serde_json::from_str(&text).map_err(|e| LoadError::Json {
                path: path.clone(),
                source: e,
            })?;
        if model.uri.is_empty() {
            model.uri = location.to_string();
        }
        tracing::info!(
            location,
            document_type = ?model.document_type,
            concepts = model.concepts().count(),
            relationships = model.relationships().len(),
            facts = model.facts().len(),
            "loaded XBRL model"
        );
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DocumentType;

    #[test]
    fn test_memory_loader_not_found() {
        let loader = MemoryLoader::new();
        let err = loader.load("missing.xsd").unwrap_err();
        assert!(matches!(err, LoadError::NotFound(ref l) if l == "missing.xsd"));
    }

    #[test]
    fn test_remote_without_catalog_is_unsupported() {
        let loader = JsonModelLoader::new();
        let err = loader.load("https://example.com/tax.xsd").unwrap_err();
        assert!(matches!(err, LoadError::Unsupported(_)));
    }

    #[test]
    fn test_loader_by_reference() {
        let mut loader = MemoryLoader::new();
        loader.insert(XbrlModel::new("a.xsd", DocumentType::Schema));
        let by_ref: &MemoryLoader = &loader;
        assert!(ModelLoader::load(&by_ref, "a.xsd").is_ok());
    }
}
