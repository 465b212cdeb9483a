use std::path::{Path, PathBuf};

use classpath_core::ClasspathConfig;

use crate::{Error, Manifest, Result};

/// A classpath.toml file: its location, raw content and parsed manifest.
#[derive(Debug)]
pub struct ClasspathToml {
    path: PathBuf,
    content: String,
    manifest: Manifest,
}

impl ClasspathToml {
    /// Open and parse a classpath.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            manifest,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory that relative manifest paths are resolved against.
    pub fn base_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
    }

    /// Output configuration with paths resolved against the manifest's directory.
    pub fn classpath_config(&self) -> ClasspathConfig {
        self.manifest.classpath_config(self.base_dir())
    }
}
