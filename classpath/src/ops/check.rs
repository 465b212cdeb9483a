//! Check operation - validate a manifest and summarize it.

use classpath_manifest::ClasspathToml;
use eyre::{Context, Result};

use crate::reports::CheckReport;

/// Summarize a parsed manifest.
pub fn check(file: &ClasspathToml) -> Result<CheckReport> {
    let manifest = file.manifest();
    let config = file.classpath_config();
    let artifacts = manifest
        .artifacts()
        .wrap_err("Invalid dependency in manifest")?;

    Ok(CheckReport {
        manifest: file.path().to_path_buf(),
        dependencies: artifacts.iter().map(ToString::to_string).collect(),
        output: config.output_path(),
        sort: config.sort,
        layout: manifest.layout().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_check_summary() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("classpath.toml");
        fs::write(
            &path,
            r#"
dependencies = [
    "org.apache.commons:commons-math:2.2",
    { group = "commons-lang", artifact = "commons-lang", version = "2.6", classifier = "sources" },
]

[classpath]
file = "deps.txt"
sort = true
"#,
        )
        .unwrap();
        let file = ClasspathToml::open(&path).unwrap();

        let report = check(&file).unwrap();

        assert_eq!(
            report.dependencies,
            vec![
                "org.apache.commons:commons-math:2.2",
                "commons-lang:commons-lang:jar:sources:2.6",
            ]
        );
        assert_eq!(
            report.output,
            temp.path().join("target/generated-resources/classpath/deps.txt")
        );
        assert!(report.sort);
        assert_eq!(report.layout, "default");
        assert_eq!(report.manifest, path);
    }
}
