//! Resource access for mapping tables, dictionaries and reading material
//!
//! The engine never reads files itself. Hosts hand it a `ResourceResolver`:
//! - `StdResourceResolver`: real filesystem with search paths (CLI)
//! - `MemoryResourceResolver`: preloaded resources (tests, WASM, embedding)
//! - `NoopResourceResolver`: rejects every read

use std::collections::HashMap;

#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

/// Extension tried when a resource name is given without one
pub const DEFAULT_EXTENSION: &str = "json";

/// Trait for locating and reading host-supplied resources
pub trait ResourceResolver: Send + Sync {
    /// Read a resource's contents
    fn read_resource(&self, name: &str) -> Result<String, ResourceError>;

    /// Check if a resource exists
    fn resource_exists(&self, name: &str) -> bool;
}

/// Error type for resource resolution
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Read error: {0}")]
    ReadError(String),
    #[error("Not supported: {0}")]
    NotSupported(String),
}

/// Lowercased extension of a resource name, if any
pub fn resource_extension(name: &str) -> Option<String> {
    let file = name.rsplit(['/', '\\']).next().unwrap_or(name);
    file.rsplit_once('.')
        .filter(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

fn with_default_extension(name: &str) -> String {
    format!("{}.{}", name, DEFAULT_EXTENSION)
}

/// Standard filesystem resolver (for CLI usage)
#[cfg(not(target_arch = "wasm32"))]
pub struct StdResourceResolver {
    /// Directories searched after the name itself, in order
    search_paths: Vec<PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
impl StdResourceResolver {
    pub fn new() -> Self {
        Self {
            search_paths: vec![],
        }
    }

    pub fn with_base_dir(base_dir: impl AsRef<Path>) -> Self {
        Self {
            search_paths: vec![base_dir.as_ref().to_path_buf()],
        }
    }

    pub fn add_search_path(&mut self, path: impl AsRef<Path>) {
        self.search_paths.push(path.as_ref().to_path_buf());
    }

    /// Try the exact name, then the name with `.json`, then each search path
    fn find_resource(&self, name: &str) -> Option<PathBuf> {
        let with_ext = with_default_extension(name);

        let direct = [PathBuf::from(name), PathBuf::from(&with_ext)];
        let searched = self
            .search_paths
            .iter()
            .flat_map(|dir| [dir.join(name), dir.join(&with_ext)]);

        direct.into_iter().chain(searched).find(|p| p.is_file())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for StdResourceResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ResourceResolver for StdResourceResolver {
    fn read_resource(&self, name: &str) -> Result<String, ResourceError> {
        let path = self
            .find_resource(name)
            .ok_or_else(|| ResourceError::NotFound(name.to_string()))?;
        std::fs::read_to_string(&path)
            .map_err(|e| ResourceError::ReadError(format!("{}: {}", path.display(), e)))
    }

    fn resource_exists(&self, name: &str) -> bool {
        self.find_resource(name).is_some()
    }
}

/// Memory-based resolver (for testing and WASM with preloaded resources)
#[derive(Default)]
pub struct MemoryResourceResolver {
    resources: HashMap<String, String>,
}

impl MemoryResourceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource to the in-memory storage
    pub fn add_resource(&mut self, name: &str, content: &str) {
        self.resources.insert(name.to_string(), content.to_string());
    }

    /// Add multiple resources
    pub fn add_resources(&mut self, resources: impl IntoIterator<Item = (String, String)>) {
        self.resources.extend(resources);
    }
}

impl ResourceResolver for MemoryResourceResolver {
    fn read_resource(&self, name: &str) -> Result<String, ResourceError> {
        self.resources
            .get(name)
            .or_else(|| self.resources.get(&with_default_extension(name)))
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(name.to_string()))
    }

    fn resource_exists(&self, name: &str) -> bool {
        self.resources.contains_key(name)
            || self.resources.contains_key(&with_default_extension(name))
    }
}

/// No-op resolver (for environments without resource access)
pub struct NoopResourceResolver;

impl ResourceResolver for NoopResourceResolver {
    fn read_resource(&self, name: &str) -> Result<String, ResourceError> {
        Err(ResourceError::NotSupported(format!(
            "Resource reading not supported in this environment: {}",
            name
        )))
    }

    fn resource_exists(&self, _name: &str) -> bool {
        false
    }
}
