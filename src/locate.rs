use crate::config::Layout;
use crate::error::CopyError;
use crate::mode::BuildMode;
use log::debug;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Finds the first ASCII digit that directly follows `marker` in `path`.
///
/// For a working directory like `C:\asst1\prog3_mandelbrot_ispc` and the
/// marker `prog` this yields `'3'`, skipping the `1` of `asst1`. An empty
/// marker matches the first digit anywhere in the path.
pub fn project_digit(path: &Path, marker: &str) -> Result<char, CopyError> {
    let re = Regex::new(&format!("{}([0-9])", regex::escape(marker)))?;
    let haystack = path.to_string_lossy();
    let digit = re
        .captures(&haystack)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().chars().next())
        .ok_or_else(|| CopyError::NoProjectDigit {
            path: path.to_path_buf(),
            marker: marker.to_string(),
        })?;
    debug!("Project digit '{}' found in {}", digit, haystack);
    Ok(digit)
}

/// `<build_root>/<platform>/<mode>/<prefix><digit><suffix>`
pub fn artifact_path(layout: &Layout, mode: BuildMode, digit: char) -> PathBuf {
    layout
        .build_root
        .join(&layout.platform)
        .join(mode.label())
        .join(format!("{}{}{}", layout.exe_prefix, digit, layout.exe_suffix))
}

pub fn destination_path(dir: &Path, source: &Path) -> Result<PathBuf, CopyError> {
    let file_name = source
        .file_name()
        .ok_or_else(|| CopyError::InvalidArtifactPath(source.to_path_buf()))?;
    Ok(dir.join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_digit_follows_marker() {
        let path = Path::new("/home/user/asst1/prog3_mandelbrot_ispc");
        assert_eq!(project_digit(path, "prog").unwrap(), '3');
    }

    #[test]
    fn test_project_digit_takes_first_match() {
        let path = Path::new("/work/prog5_saxpy/prog1_mandelbrot_threads");
        assert_eq!(project_digit(path, "prog").unwrap(), '5');
    }

    #[test]
    fn test_empty_marker_takes_first_digit() {
        let path = Path::new("/home/user/asst1/prog3_mandelbrot_ispc");
        assert_eq!(project_digit(path, "").unwrap(), '1');
    }

    #[test]
    fn test_marker_is_literal() {
        // A regex-looking marker must not be interpreted as a pattern.
        assert!(project_digit(Path::new("/src/progX7"), "prog.").is_err());
        assert_eq!(project_digit(Path::new("/src/prog.7"), "prog.").unwrap(), '7');
    }

    #[test]
    fn test_no_digit_fails() {
        let path = Path::new("/home/user/mandelbrot");
        match project_digit(path, "prog") {
            Err(CopyError::NoProjectDigit { path: p, marker }) => {
                assert_eq!(p, PathBuf::from("/home/user/mandelbrot"));
                assert_eq!(marker, "prog");
            }
            other => panic!("expected NoProjectDigit, got {:?}", other),
        }
    }

    #[test]
    fn test_marker_without_digit_fails() {
        let path = Path::new("/asst2/prog_threads");
        assert!(matches!(
            project_digit(path, "prog"),
            Err(CopyError::NoProjectDigit { .. })
        ));
    }

    #[test]
    fn test_artifact_path_per_mode() {
        let layout = Layout {
            exe_suffix: ".exe".to_string(),
            ..Layout::default()
        };
        assert_eq!(
            artifact_path(&layout, BuildMode::Debug, '1'),
            Path::new("..").join("x64").join("Debug").join("proj1.exe")
        );
        assert_eq!(
            artifact_path(&layout, BuildMode::Release, '5'),
            Path::new("..").join("x64").join("Release").join("proj5.exe")
        );
    }

    #[test]
    fn test_artifact_path_uses_layout() {
        let layout = Layout {
            build_root: PathBuf::from("out"),
            platform: "Win32".to_string(),
            marker: "prog".to_string(),
            exe_prefix: "demo".to_string(),
            exe_suffix: String::new(),
        };
        assert_eq!(
            artifact_path(&layout, BuildMode::Release, '9'),
            Path::new("out").join("Win32").join("Release").join("demo9")
        );
    }

    #[test]
    fn test_destination_path() {
        let source = Path::new("..").join("x64").join("Debug").join("proj2.exe");
        assert_eq!(
            destination_path(Path::new("/work/prog2"), &source).unwrap(),
            Path::new("/work/prog2").join("proj2.exe")
        );
        assert!(matches!(
            destination_path(Path::new("/work"), Path::new("..")),
            Err(CopyError::InvalidArtifactPath(_))
        ));
    }
}
