use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("No project digit after '{marker}' in '{}'", .path.display())]
    NoProjectDigit { path: PathBuf, marker: String },

    #[error("Artifact path '{}' has no file name", .0.display())]
    InvalidArtifactPath(PathBuf),

    #[error("Build artifact '{}' does not exist", .0.display())]
    MissingArtifact(PathBuf),

    #[error("Build artifact '{}' is not a file", .0.display())]
    NotAFile(PathBuf),

    #[error("'{}' cannot be copied onto itself", .0.display())]
    SameFile(PathBuf),

    #[error("Failed to copy '{}' to '{}': {source}", .from.display(), .to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("Invalid project marker pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid config file '{}': {source}", .path.display())]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
