use std::path::PathBuf;

use classpath_manifest::ClasspathToml;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to classpath.toml (defaults to ./classpath.toml)
    #[arg(short, long, default_value = "classpath.toml")]
    pub manifest: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let file = ClasspathToml::open(&self.manifest).unwrap_or_exit();

        let report = ops::check(&file)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
