//! Dependency entries in the manifest.

use classpath_core::Artifact;
use serde::Deserialize;

/// A resolved dependency, written either as a coordinate string or a table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Dependency {
    /// `"group:artifact[:extension[:classifier]]:version"`
    Coordinate(String),
    /// `{ group = "...", artifact = "...", version = "..." }`
    Detailed(DetailedDependency),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetailedDependency {
    pub group: String,
    pub artifact: String,
    pub version: String,
    pub classifier: Option<String>,
    pub extension: Option<String>,
}

impl DetailedDependency {
    /// Name of the first required field that is blank, if any.
    pub(crate) fn blank_field(&self) -> Option<&'static str> {
        [
            ("group", Some(&self.group)),
            ("artifact", Some(&self.artifact)),
            ("version", Some(&self.version)),
            ("extension", self.extension.as_ref()),
        ]
        .into_iter()
        .find_map(|(name, value)| value.filter(|v| v.trim().is_empty()).map(|_| name))
    }

    pub fn to_artifact(&self) -> Artifact {
        let mut artifact = Artifact::new(&self.group, &self.artifact, &self.version);
        if let Some(extension) = &self.extension {
            artifact = artifact.with_extension(extension);
        }
        if let Some(classifier) = &self.classifier {
            artifact = artifact.with_classifier(classifier);
        }
        artifact
    }
}
