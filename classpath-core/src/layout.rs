//! Repository layouts map an artifact to its path inside a repository.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Artifact;

/// Strategy that computes the repository-relative path of an artifact.
///
/// Paths use `/` separators and never start with one.
pub trait RepositoryLayout {
    fn path_of(&self, artifact: &Artifact) -> String;
}

impl<F> RepositoryLayout for F
where
    F: Fn(&Artifact) -> String,
{
    fn path_of(&self, artifact: &Artifact) -> String {
        self(artifact)
    }
}

/// The standard layout:
/// `group/as/dirs/artifactId/baseVersion/artifactId-version[-classifier].ext`
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLayout;

impl RepositoryLayout for DefaultLayout {
    fn path_of(&self, artifact: &Artifact) -> String {
        format!(
            "{}/{}/{}/{}",
            artifact.group_id().replace('.', "/"),
            artifact.artifact_id(),
            artifact.base_version(),
            artifact.file_name()
        )
    }
}

/// Every artifact directly in the repository root.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatLayout;

impl RepositoryLayout for FlatLayout {
    fn path_of(&self, artifact: &Artifact) -> String {
        artifact.file_name()
    }
}

/// Built-in layouts selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Default,
    Flat,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Default => "default",
            Layout::Flat => "flat",
        }
    }
}

impl RepositoryLayout for Layout {
    fn path_of(&self, artifact: &Artifact) -> String {
        match self {
            Layout::Default => DefaultLayout.path_of(artifact),
            Layout::Flat => FlatLayout.path_of(artifact),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Layout::Default),
            "flat" => Ok(Layout::Flat),
            _ => Err(format!(
                "unknown layout '{}', expected 'default' or 'flat'",
                s
            )),
        }
    }
}
