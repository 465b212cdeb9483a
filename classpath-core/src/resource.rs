//! Registration of generated files as build resources.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A resource root and the files inside it to include in the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub directory: PathBuf,
    pub includes: Vec<String>,
}

impl Resource {
    pub fn new(directory: impl Into<PathBuf>, includes: Vec<String>) -> Self {
        Self {
            directory: directory.into(),
            includes,
        }
    }
}

/// Receives resources produced during a build.
pub trait ResourceCollector {
    fn add_resource(&mut self, resource: Resource);
}

/// Ordered, in-memory resource collector that can be persisted as JSON.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildResources {
    resources: Vec<Resource>,
}

impl BuildResources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Load a registry file. A missing file is an empty registry.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(source) => {
                return Err(Error::Registry {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|e| Error::Registry {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Merge these resources into the registry at `path`, creating it if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut registry = Self::load(path)?;
        for resource in &self.resources {
            registry.add_resource(resource.clone());
        }

        let registry_error = |source| Error::Registry {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(registry_error)?;
        }
        let json = serde_json::to_string_pretty(&registry)
            .map_err(|e| registry_error(e.into()))?;
        fs::write(path, json + "\n").map_err(registry_error)?;

        tracing::debug!(
            path = %path.display(),
            resources = registry.resources.len(),
            "saved resource registry"
        );
        Ok(())
    }
}

impl ResourceCollector for BuildResources {
    fn add_resource(&mut self, resource: Resource) {
        if !self.resources.contains(&resource) {
            self.resources.push(resource);
        }
    }
}
