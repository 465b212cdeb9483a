use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{Error, Result};

/// Why `name` cannot be used as the classpath file name, if it cannot.
///
/// The file must sit directly inside the output directory.
pub fn invalid_file_name(name: &str) -> Option<&'static str> {
    if name.trim().is_empty() {
        return Some("file name cannot be empty");
    }
    if name == "." || name == ".." {
        return Some("file name cannot be '.' or '..'");
    }
    if name.contains('/') || name.contains('\\') {
        return Some("file name cannot contain path separators");
    }
    None
}

/// Write `paths` to `output_directory/file_name`, replacing any existing content.
///
/// Missing parent directories are created. Returns the path of the written file.
pub fn write_classpath<S: AsRef<str>>(
    paths: &[S],
    output_directory: &Path,
    file_name: &str,
) -> Result<PathBuf> {
    if let Some(reason) = invalid_file_name(file_name) {
        return Err(Error::InvalidFileName {
            name: file_name.to_string(),
            reason: reason.to_string(),
        });
    }
    ensure_directory(output_directory)?;

    let output = output_directory.join(file_name);
    write_lines(&output, paths).map_err(|source| Error::Write {
        path: output.clone(),
        source,
    })?;

    tracing::debug!(path = %output.display(), entries = paths.len(), "wrote classpath file");
    Ok(output)
}

fn ensure_directory(directory: &Path) -> Result<()> {
    if directory.is_dir() {
        return Ok(());
    }

    // create_dir_all treats a directory created concurrently as success
    fs::create_dir_all(directory).map_err(|source| Error::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %directory.display(), "created output directory");
    Ok(())
}

fn write_lines<S: AsRef<str>>(output: &Path, paths: &[S]) -> std::io::Result<()> {
    // The file handle is closed when the writer drops, on success and on error.
    let mut writer = BufWriter::new(File::create(output)?);
    for path in paths {
        writer.write_all(path.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
