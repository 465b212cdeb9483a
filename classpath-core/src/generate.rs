//! The classpath pipeline: map, order, persist, register.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::{
    Artifact, RepositoryLayout, Resource, ResourceCollector, Result, build_paths, write_classpath,
};

/// Default name of the generated file.
pub const DEFAULT_FILE: &str = "classpath.txt";

/// Output location and ordering for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClasspathConfig {
    pub output_directory: PathBuf,
    pub file: String,
    pub sort: bool,
}

impl ClasspathConfig {
    /// Configuration with default values for a build directory:
    /// `<build>/generated-resources/classpath/classpath.txt`, unsorted.
    pub fn for_build_directory(build_directory: &Path) -> Self {
        Self {
            output_directory: build_directory.join("generated-resources").join("classpath"),
            file: DEFAULT_FILE.to_string(),
            sort: false,
        }
    }

    /// Full path of the generated file.
    pub fn output_path(&self) -> PathBuf {
        self.output_directory.join(&self.file)
    }

    /// The resource announced once the file is written.
    pub fn resource(&self) -> Resource {
        Resource::new(&self.output_directory, vec![self.file.clone()])
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct Generated {
    /// Written file.
    pub output: PathBuf,
    /// Paths in the order they were written.
    pub paths: Vec<String>,
    /// Resource handed to the collector.
    pub resource: Resource,
}

/// Write the classpath file for `artifacts` and register it with `collector`.
///
/// Nothing is registered when writing fails.
pub fn generate<L, C>(
    artifacts: &[Artifact],
    layout: &L,
    config: &ClasspathConfig,
    collector: &mut C,
) -> Result<Generated>
where
    L: RepositoryLayout + ?Sized,
    C: ResourceCollector + ?Sized,
{
    let paths = build_paths(artifacts, layout, config.sort);
    warn_duplicates(&paths);
    let output = write_classpath(&paths, &config.output_directory, &config.file)?;

    let resource = config.resource();
    collector.add_resource(resource.clone());
    tracing::debug!(directory = %resource.directory.display(), "registered generated resource");

    tracing::info!(
        path = %output.display(),
        entries = paths.len(),
        sorted = config.sort,
        "generated classpath"
    );

    Ok(Generated {
        output,
        paths,
        resource,
    })
}

/// Duplicate paths are written as-is; flag them since they usually mean a
/// resolver problem.
fn warn_duplicates(paths: &[String]) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for path in paths {
        if !seen.insert(path.as_str()) && reported.insert(path.as_str()) {
            tracing::warn!(path = %path, "path appears more than once in classpath");
        }
    }
}
