//! Manifest types and parsing for classpath.toml files.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use classpath_core::{Artifact, ClasspathConfig, Layout, invalid_file_name};
use serde::Deserialize;

use crate::{
    Dependency, Error, Result, SourceContext,
    validate::{find_key_span, find_value_span},
};

/// Root manifest for classpath.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Build output settings
    #[serde(default)]
    pub build: BuildSection,

    /// Generated file settings
    #[serde(default)]
    pub classpath: ClasspathSection,

    /// Resolved dependencies, in resolver order
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSection {
    /// Build output directory
    #[serde(default = "default_build_directory")]
    pub directory: PathBuf,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            directory: default_build_directory(),
        }
    }
}

fn default_build_directory() -> PathBuf {
    PathBuf::from("target")
}

/// Unset values fall back to the defaults for the build directory.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ClasspathSection {
    pub output_directory: Option<PathBuf>,
    pub file: Option<String>,
    pub sort: Option<bool>,
    pub layout: Option<Layout>,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Manifest::from_str_with_filename(s, "classpath.toml")
    }
}

impl Manifest {
    /// Parse a classpath.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
        manifest.validate(&ctx)?;
        Ok(manifest)
    }

    fn validate(&self, ctx: &SourceContext) -> Result<()> {
        if let Some(file) = &self.classpath.file {
            if let Some(reason) = invalid_file_name(file) {
                let span =
                    find_value_span(ctx.src(), file).or_else(|| find_key_span(ctx.src(), "file"));
                return Err(ctx.validation_error(reason, span));
            }
        }

        for dependency in &self.dependencies {
            self.validate_dependency(dependency, ctx)?;
        }
        Ok(())
    }

    fn validate_dependency(&self, dependency: &Dependency, ctx: &SourceContext) -> Result<()> {
        match dependency {
            Dependency::Coordinate(coordinate) => {
                if let Err(e) = coordinate.parse::<Artifact>() {
                    let reason = match e {
                        classpath_core::Error::InvalidCoordinate { reason, .. } => reason,
                        other => other.to_string(),
                    };
                    let span = find_value_span(ctx.src(), coordinate);
                    return Err(ctx.invalid_coordinate_error(coordinate, reason, span));
                }
            }
            Dependency::Detailed(detailed) => {
                if let Some(field) = detailed.blank_field() {
                    let span = find_key_span(ctx.src(), field);
                    return Err(ctx.validation_error(
                        format!(
                            "dependency '{}:{}' has an empty {}",
                            detailed.group, detailed.artifact, field
                        ),
                        span,
                    ));
                }
            }
        }
        Ok(())
    }

    /// The dependencies as artifacts, in manifest order.
    ///
    /// A manifest built without [`Manifest::from_str_with_filename`] skips
    /// validation, so a bad coordinate is reported here rather than dropped.
    pub fn artifacts(&self) -> classpath_core::Result<Vec<Artifact>> {
        self.dependencies
            .iter()
            .map(|dependency| match dependency {
                Dependency::Coordinate(coordinate) => coordinate.parse(),
                Dependency::Detailed(detailed) => Ok(detailed.to_artifact()),
            })
            .collect()
    }

    /// Configured layout, or the default layout.
    pub fn layout(&self) -> Layout {
        self.classpath.layout.unwrap_or_default()
    }

    /// Output configuration with relative paths resolved against `base`.
    pub fn classpath_config(&self, base: &Path) -> ClasspathConfig {
        let build_directory = base.join(&self.build.directory);
        let mut config = ClasspathConfig::for_build_directory(&build_directory);

        if let Some(output_directory) = &self.classpath.output_directory {
            config.output_directory = base.join(output_directory);
        }
        if let Some(file) = &self.classpath.file {
            config.file = file.clone();
        }
        if let Some(sort) = self.classpath.sort {
            config.sort = sort;
        }
        config
    }
}
