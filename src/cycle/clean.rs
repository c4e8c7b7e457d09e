//! Build directory cleanup.
//!
//! The build directory is wiped before every configure so no stale cache or
//! generated files leak between build types. `rgr clean` exposes the same
//! wipe as a standalone command.

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

use crate::config::RegressConfig;

/// Remove the build directory if it exists. Absence is not an error.
/// Returns whether anything was removed.
pub fn remove_build_dir(build_dir: &Path) -> Result<bool> {
    if !build_dir.exists() {
        return Ok(false);
    }
    fs::remove_dir_all(build_dir)
        .with_context(|| format!("Failed to remove '{}'", build_dir.display()))?;
    Ok(true)
}

pub fn clean(config: &RegressConfig) -> Result<()> {
    if remove_build_dir(Path::new(&config.build_dir))? {
        println!("{} Build directory cleaned", "✓".green());
    } else {
        println!("{} Nothing to clean", "!".yellow());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_non_empty_dir() {
        let temp = tempfile::tempdir().unwrap();
        let build_dir = temp.path().join("build");
        fs::create_dir_all(build_dir.join("CMakeFiles")).unwrap();
        fs::write(build_dir.join("CMakeCache.txt"), "stale").unwrap();

        assert!(remove_build_dir(&build_dir).unwrap());
        assert!(!build_dir.exists());
    }

    #[test]
    fn test_absence_is_not_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let build_dir = temp.path().join("build");

        assert!(!remove_build_dir(&build_dir).unwrap());
    }
}
