use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

use classpath_core::{Artifact, ClasspathConfig, Layout, invalid_file_name};
use classpath_manifest::{ClasspathToml, parse_coordinate_list};
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops::{self, generate::GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to classpath.toml (defaults to ./classpath.toml)
    #[arg(short, long, default_value = "classpath.toml")]
    pub manifest: PathBuf,

    /// Extra artifacts, one coordinate per line ('-' reads stdin)
    #[arg(short, long, value_name = "FILE")]
    pub artifacts: Option<PathBuf>,

    /// Directory to write the file to (overrides classpath.toml)
    #[arg(short, long, value_name = "DIR")]
    pub output_directory: Option<PathBuf>,

    /// Name of the generated file (overrides classpath.toml)
    #[arg(short, long, value_name = "NAME", value_parser = parse_file_name)]
    pub file: Option<String>,

    /// Sort paths instead of keeping resolver order
    #[arg(short, long, overrides_with = "no_sort")]
    pub sort: bool,

    /// Keep resolver order even if classpath.toml sets `sort = true`
    #[arg(long, overrides_with = "sort")]
    pub no_sort: bool,

    /// Repository layout (overrides classpath.toml)
    #[arg(short, long)]
    pub layout: Option<Layout>,

    /// Save the generated resource to this registry file
    #[arg(short, long, value_name = "FILE")]
    pub resources: Option<PathBuf>,

    /// Print the paths without writing or registering anything
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = ClasspathToml::open(&self.manifest).unwrap_or_exit();
        let manifest = file.manifest();

        let mut artifacts = manifest
            .artifacts()
            .wrap_err("Invalid dependency in manifest")?;
        if let Some(list) = &self.artifacts {
            artifacts.extend(Self::read_artifact_list(list)?);
        }
        tracing::debug!(
            manifest = %file.path().display(),
            artifacts = artifacts.len(),
            "loaded artifacts"
        );

        let mut config = file.classpath_config();
        self.apply_overrides(&mut config);

        let report = ops::generate(GenerateOptions {
            artifacts: &artifacts,
            config: &config,
            layout: self.layout.unwrap_or(manifest.layout()),
            registry: self.resources.as_deref(),
            dry_run: self.dry_run,
        })?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    /// Command-line values win over classpath.toml.
    fn apply_overrides(&self, config: &mut ClasspathConfig) {
        if let Some(output_directory) = &self.output_directory {
            config.output_directory = output_directory.clone();
        }
        if let Some(name) = &self.file {
            config.file = name.clone();
        }
        if self.sort {
            config.sort = true;
        } else if self.no_sort {
            config.sort = false;
        }
    }

    fn read_artifact_list(list: &Path) -> Result<Vec<Artifact>> {
        let (content, name) = if list.as_os_str() == "-" {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .wrap_err("Failed to read artifacts from stdin")?;
            (content, "<stdin>".to_string())
        } else {
            let content = std::fs::read_to_string(list)
                .wrap_err_with(|| format!("Failed to read artifacts from {}", list.display()))?;
            (content, list.display().to_string())
        };

        Ok(parse_coordinate_list(&content, &name).unwrap_or_exit())
    }
}

fn parse_file_name(name: &str) -> std::result::Result<String, String> {
    match invalid_file_name(name) {
        Some(reason) => Err(reason.to_string()),
        None => Ok(name.to_string()),
    }
}
