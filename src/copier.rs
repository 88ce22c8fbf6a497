use crate::error::CopyError;
use log::info;
use std::fs;
use std::path::Path;

/// Copies `source` to `destination`, replacing any file already there.
/// Returns the number of bytes copied.
pub fn copy_artifact(source: &Path, destination: &Path) -> Result<u64, CopyError> {
    if !source.exists() {
        return Err(CopyError::MissingArtifact(source.to_path_buf()));
    }
    if !source.is_file() {
        return Err(CopyError::NotAFile(source.to_path_buf()));
    }
    // fs::copy truncates the destination first, which would wipe the artifact.
    if destination.exists() && fs::canonicalize(source)? == fs::canonicalize(destination)? {
        return Err(CopyError::SameFile(destination.to_path_buf()));
    }
    info!(
        "Copying {} -> {}",
        source.display(),
        destination.display()
    );
    fs::copy(source, destination).map_err(|source_err| CopyError::Copy {
        from: source.to_path_buf(),
        to: destination.to_path_buf(),
        source: source_err,
    })
}
