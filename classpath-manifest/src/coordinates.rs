//! Plain-text artifact lists: one coordinate per line.

use classpath_core::Artifact;
use miette::SourceSpan;

use crate::{Result, SourceContext};

/// Parse a coordinate list. Blank lines and `#` comments are skipped.
///
/// `source_name` is used in error reports.
pub fn parse_coordinate_list(content: &str, source_name: &str) -> Result<Vec<Artifact>> {
    let ctx = SourceContext::new(content, source_name);
    let mut artifacts = Vec::new();
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let start = offset;
        offset += line.len();

        let entry = line.split('#').next().unwrap_or_default().trim();
        if entry.is_empty() {
            continue;
        }

        match entry.parse::<Artifact>() {
            Ok(artifact) => artifacts.push(artifact),
            Err(e) => {
                let reason = match e {
                    classpath_core::Error::InvalidCoordinate { reason, .. } => reason,
                    other => other.to_string(),
                };
                let column = line.find(entry).unwrap_or_default();
                let span = SourceSpan::from((start + column, entry.len()));
                return Err(ctx.invalid_coordinate_error(entry, reason, Some(span)));
            }
        }
    }

    Ok(artifacts)
}
