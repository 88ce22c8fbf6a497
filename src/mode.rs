use std::fmt;

/// Token that switches the copy to the Release build output.
pub const RELEASE_TOKEN: &str = "r";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// Release if any argument is exactly `r`, Debug otherwise.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        if args.iter().any(|arg| arg.as_ref() == RELEASE_TOKEN) {
            BuildMode::Release
        } else {
            BuildMode::Debug
        }
    }

    /// Name of the build configuration, which is also its output directory.
    pub fn label(self) -> &'static str {
        match self {
            BuildMode::Debug => "Debug",
            BuildMode::Release => "Release",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
