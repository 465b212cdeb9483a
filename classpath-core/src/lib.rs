//! Core types for writing classpath files.
//!
//! This crate owns the part of classpath generation that does not depend on
//! a build tool: mapping resolved artifacts to repository-relative paths,
//! ordering them, writing them to disk, and announcing the result to a
//! resource collector.

mod artifact;
mod error;
mod file;
mod generate;
mod layout;
mod paths;
mod resource;

pub use artifact::Artifact;
pub use error::{Error, Result};
pub use file::{invalid_file_name, write_classpath};
pub use generate::{ClasspathConfig, DEFAULT_FILE, Generated, generate};
pub use layout::{DefaultLayout, FlatLayout, Layout, RepositoryLayout};
pub use paths::build_paths;
pub use resource::{BuildResources, Resource, ResourceCollector};
