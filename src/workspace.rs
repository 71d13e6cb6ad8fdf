//! Scratch workspace
//!
//! A `tmp/` directory next to the program's own executable, recreated empty at
//! every start so leftovers from a previous run never leak into the sum. Clones
//! and report files are left in place at exit for inspection.

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Recreate `root` as an empty directory and claim it for this run.
    pub fn prepare(root: PathBuf) -> Result<Self> {
        if root.exists() {
            fs::remove_dir_all(&root)
                .with_context(|| format!("Failed clearing workspace: {}", root.display()))?;
        }
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed creating workspace: {}", root.display()))?;
        Ok(Self { root })
    }

    /// Default location: `tmp/` beside the executable, falling back to the
    /// working directory when the executable path cannot be resolved.
    pub fn default_root() -> PathBuf {
        env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tmp")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Destination directory for one repository's clone.
    pub fn clone_dir(&self, repo_name: &str) -> PathBuf {
        self.root.join(repo_name)
    }

    /// Destination path for one repository's report file.
    pub fn report_file(&self, repo_name: &str) -> PathBuf {
        self.root.join(format!("{repo_name}.txt"))
    }
}
