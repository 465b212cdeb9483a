//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from classpath generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Number of artifacts supplied.
    pub artifact_count: usize,
    /// Whether paths were sorted.
    pub sorted: bool,
    /// Layout used to compute paths.
    pub layout: String,
    /// Written file or dry-run preview.
    pub result: GenerationResult,
}

#[derive(Debug)]
pub enum GenerationResult {
    /// The file was written and registered.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

#[derive(Debug)]
pub struct WrittenResult {
    /// Path of the written file.
    pub output: PathBuf,
    /// Registered resource root.
    pub resource_directory: PathBuf,
    /// Files included from the resource root.
    pub resource_includes: Vec<String>,
    /// Registry file the resource was saved to, if any.
    pub registry: Option<PathBuf>,
}

#[derive(Debug)]
pub struct PreviewResult {
    /// Path the file would be written to.
    pub output: PathBuf,
    /// Paths in the order they would be written.
    pub paths: Vec<String>,
}

impl GenerateReport {
    fn ordering(&self) -> &'static str {
        if self.sorted { "sorted" } else { "resolver order" }
    }

    fn entries(&self) -> String {
        match self.artifact_count {
            1 => "1 entry".to_string(),
            n => format!("{} entries", n),
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Generated", &written.output.display().to_string());
        out.key_value(
            "Entries",
            &format!("{} ({}, {} layout)", self.artifact_count, self.ordering(), self.layout),
        );
        out.newline();

        out.section("Registered resource");
        out.added_item(&format!(
            "{} [{}]",
            written.resource_directory.display(),
            written.resource_includes.join(", ")
        ));

        if let Some(registry) = &written.registry {
            out.newline();
            out.key_value("Resource registry", &registry.display().to_string());
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        out.divider(&preview.output.display().to_string());
        for path in &preview.paths {
            out.preformatted(path);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} would be written ({}, {} layout)",
            self.entries(),
            self.ordering(),
            self.layout
        ));
    }
}
