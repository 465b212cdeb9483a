//! Generate operation - write the classpath file and register it.

use std::path::Path;

use classpath_core::{Artifact, BuildResources, ClasspathConfig, Layout, build_paths};
use eyre::{Context, Result};

use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Artifacts in resolver order.
    pub artifacts: &'a [Artifact],
    /// Output location and ordering.
    pub config: &'a ClasspathConfig,
    /// Layout used to compute paths.
    pub layout: Layout,
    /// Registry file to save the generated resource to.
    pub registry: Option<&'a Path>,
    /// Whether to preview without writing.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(opts: GenerateOptions) -> Result<GenerateReport> {
    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            output: opts.config.output_path(),
            paths: build_paths(opts.artifacts, &opts.layout, opts.config.sort),
        })
    } else {
        GenerationResult::Written(write(&opts)?)
    };

    Ok(GenerateReport {
        artifact_count: opts.artifacts.len(),
        sorted: opts.config.sort,
        layout: opts.layout.to_string(),
        result,
    })
}

fn write(opts: &GenerateOptions) -> Result<WrittenResult> {
    let mut resources = BuildResources::new();
    let generated = classpath_core::generate(opts.artifacts, &opts.layout, opts.config, &mut resources)
        .wrap_err("Failed to generate classpath")?;

    if let Some(registry) = opts.registry {
        resources
            .save(registry)
            .wrap_err("Failed to register generated resource")?;
    }

    Ok(WrittenResult {
        output: generated.output,
        resource_directory: generated.resource.directory,
        resource_includes: generated.resource.includes,
        registry: opts.registry.map(Path::to_path_buf),
    })
}
