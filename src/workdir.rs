//! Scoped working-directory guard.
//!
//! The test runner discovers its test metadata from the current working
//! directory, so the test step has to run from inside the build directory.
//! The working directory is process-global state; `ScopedDir` restores the
//! previous directory when dropped, on every exit path.

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

pub struct ScopedDir {
    previous: PathBuf,
}

impl ScopedDir {
    /// Enter `dir`, remembering the current directory for restore on drop.
    pub fn enter(dir: &Path) -> Result<Self> {
        let previous = env::current_dir().context("Failed to read the current directory")?;
        env::set_current_dir(dir)
            .with_context(|| format!("Failed to enter '{}'", dir.display()))?;
        Ok(Self { previous })
    }
}

impl Drop for ScopedDir {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            eprintln!("Failed to restore working directory: {e}");
        }
    }
}
