use crate::{Artifact, RepositoryLayout};

/// Map each artifact to its repository path.
///
/// Output has one entry per artifact. Without `sort` the input order is kept;
/// with `sort` entries are ordered by byte comparison and equal paths keep
/// their relative order. Duplicates are never removed.
pub fn build_paths<L>(artifacts: &[Artifact], layout: &L, sort: bool) -> Vec<String>
where
    L: RepositoryLayout + ?Sized,
{
    let mut paths: Vec<String> = artifacts.iter().map(|a| layout.path_of(a)).collect();
    if sort {
        paths.sort();
    }
    paths
}
