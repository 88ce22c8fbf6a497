use crate::error::CopyError;
use log::{debug, info};
use serde::Deserialize;
use std::env::consts::EXE_SUFFIX;
use std::io;
use std::path::{Path, PathBuf};

/// Naming convention of the IDE build output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Layout {
    pub build_root: PathBuf,
    pub platform: String,
    /// Text that sits right before the project digit in the working directory.
    pub marker: String,
    pub exe_prefix: String,
    pub exe_suffix: String,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            build_root: PathBuf::from(".."),
            platform: "x64".to_string(),
            marker: "prog".to_string(),
            exe_prefix: "proj".to_string(),
            exe_suffix: EXE_SUFFIX.to_string(),
        }
    }
}

pub fn get_config_file_path() -> io::Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "Could not find config directory")
    })?;
    path.push("BuildCopier");
    path.push("config.json");
    Ok(path)
}

pub fn read_layout_from_path(path: &Path) -> Result<Layout, CopyError> {
    let file = std::fs::File::open(path)?;
    let reader = std::io::BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CopyError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// An explicit path must exist; the default location is optional.
pub fn load_layout(explicit: Option<&Path>) -> Result<Layout, CopyError> {
    if let Some(path) = explicit {
        info!("Loading layout from {}", path.display());
        return read_layout_from_path(path);
    }

    let path = match get_config_file_path() {
        Ok(path) => path,
        Err(e) => {
            debug!("No config directory, using default layout: {}", e);
            return Ok(Layout::default());
        }
    };
    if !path.exists() {
        debug!("{} not found, using default layout", path.display());
        return Ok(Layout::default());
    }
    info!("Loading layout from {}", path.display());
    read_layout_from_path(&path)
}
