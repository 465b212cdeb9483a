use std::{fmt, str::FromStr};

use crate::{Error, Result};

const DEFAULT_EXTENSION: &str = "jar";

/// A resolved artifact, identified by its repository coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Artifact {
    group_id: String,
    artifact_id: String,
    version: String,
    classifier: Option<String>,
    extension: String,
}

impl Artifact {
    /// Create an artifact with the default `jar` extension and no classifier.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            classifier: None,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Set the classifier. An empty classifier means none.
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        let classifier = classifier.into();
        self.classifier = (!classifier.is_empty()).then_some(classifier);
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The version used for the artifact's directory in a repository.
    ///
    /// Timestamped snapshots (`1.0-20240101.120000-3`) live under their
    /// `-SNAPSHOT` directory; every other version is its own base version.
    pub fn base_version(&self) -> String {
        match timestamped_snapshot_base(&self.version) {
            Some(base) => format!("{}-SNAPSHOT", base),
            None => self.version.clone(),
        }
    }

    /// File name of the artifact: `artifactId-version[-classifier].extension`
    pub fn file_name(&self) -> String {
        match &self.classifier {
            Some(classifier) => format!(
                "{}-{}-{}.{}",
                self.artifact_id, self.version, classifier, self.extension
            ),
            None => format!("{}-{}.{}", self.artifact_id, self.version, self.extension),
        }
    }
}

/// Split `<base>-<yyyyMMdd.HHmmss>-<build>` into `<base>`.
fn timestamped_snapshot_base(version: &str) -> Option<&str> {
    let (rest, build) = version.rsplit_once('-')?;
    let (base, timestamp) = rest.rsplit_once('-')?;

    if base.is_empty() || build.is_empty() || !build.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (date, time) = timestamp.split_once('.')?;
    let is_digits = |s: &str, len: usize| s.len() == len && s.bytes().all(|b| b.is_ascii_digit());
    (is_digits(date, 8) && is_digits(time, 6)).then_some(base)
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group_id, self.artifact_id)?;
        match &self.classifier {
            Some(classifier) => write!(f, ":{}:{}", self.extension, classifier)?,
            None if self.extension != DEFAULT_EXTENSION => write!(f, ":{}", self.extension)?,
            None => {}
        }
        write!(f, ":{}", self.version)
    }
}

impl FromStr for Artifact {
    type Err = Error;

    /// Parse `group:artifact[:extension[:classifier]]:version`
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.trim().split(':').collect();

        if let Some(index) = parts.iter().position(|p| p.trim().is_empty()) {
            return Err(Error::invalid_coordinate(
                s,
                format!("segment {} is empty", index + 1),
            ));
        }

        match parts.as_slice() {
            [group, artifact, version] => Ok(Artifact::new(*group, *artifact, *version)),
            [group, artifact, extension, version] => {
                Ok(Artifact::new(*group, *artifact, *version).with_extension(*extension))
            }
            [group, artifact, extension, classifier, version] => {
                Ok(Artifact::new(*group, *artifact, *version)
                    .with_extension(*extension)
                    .with_classifier(*classifier))
            }
            _ => Err(Error::invalid_coordinate(
                s,
                "expected 'group:artifact[:extension[:classifier]]:version'",
            )),
        }
    }
}
