//! Parsing and validation of `classpath.toml`.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod coordinates;
mod dependency;
mod error;
mod file;
mod manifest;
mod validate;

pub use coordinates::parse_coordinate_list;
pub use dependency::{Dependency, DetailedDependency};
pub use error::{Error, Result, SourceContext};
pub use file::ClasspathToml;
pub use manifest::{BuildSection, ClasspathSection, Manifest};
