//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Summary of a valid manifest.
#[derive(Debug)]
pub struct CheckReport {
    /// Manifest that was checked.
    pub manifest: PathBuf,
    /// Dependency coordinates in resolver order.
    pub dependencies: Vec<String>,
    /// Where the file would be written.
    pub output: PathBuf,
    pub sort: bool,
    pub layout: String,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.manifest.display()));
        out.newline();

        out.key_value("Output", &self.output.display().to_string());
        out.key_value("Layout", &self.layout);
        out.key_value("Sort", if self.sort { "yes" } else { "no" });
        out.newline();

        let count = self.dependencies.len();
        out.section(&format!(
            "{} dependenc{}",
            count,
            if count == 1 { "y" } else { "ies" }
        ));
        for dependency in &self.dependencies {
            out.list_item(dependency);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render() {
        let report = CheckReport {
            manifest: PathBuf::from("classpath.toml"),
            dependencies: vec![
                "org.apache.commons:commons-math:2.2".to_string(),
                "commons-lang:commons-lang:2.6".to_string(),
            ],
            output: PathBuf::from("target/generated-resources/classpath/classpath.txt"),
            sort: false,
            layout: "default".to_string(),
        };

        insta::assert_snapshot!(BufferOutput::render(&report), @r"
        ✓ classpath.toml is valid

        Output: target/generated-resources/classpath/classpath.txt
        Layout: default
        Sort: no

        2 dependencies:
          - org.apache.commons:commons-math:2.2
          - commons-lang:commons-lang:2.6
        ");
    }

    #[test]
    fn test_render_single_dependency() {
        let report = CheckReport {
            manifest: PathBuf::from("classpath.toml"),
            dependencies: vec!["g:a:1".to_string()],
            output: PathBuf::from("cp.txt"),
            sort: true,
            layout: "flat".to_string(),
        };

        let text = BufferOutput::render(&report);
        assert!(text.contains("Sort: yes"));
        assert!(text.contains("1 dependency:\n"));
    }
}
