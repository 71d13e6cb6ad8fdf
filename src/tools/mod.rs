//! External tool invocation
//!
//! The whole computational engine lives in two external programs: the `git`
//! client and the `cloc` counting utility. Both are modeled behind the
//! [`ToolRunner`] trait (invoke-with-args → exit status + combined output) so
//! the orchestration logic stays decoupled from how they are located or
//! versioned, and so tests can substitute fakes.

use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const GIT: &str = "git";
pub const CLOC: &str = "cloc";

/// Result of one tool invocation.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Exit code; `None` when the process was killed by a signal.
    pub status: Option<i32>,
    /// Stdout and stderr, concatenated.
    pub output: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

pub trait ToolRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ToolOutput>;
}

/// Runs tools as real child processes, blocking until they exit.
pub struct SystemTools;

impl ToolRunner for SystemTools {
    fn run(&self, program: &str, args: &[String]) -> Result<ToolOutput> {
        tracing::debug!("running {program} {}", args.join(" "));
        let out = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("Failed spawning {program}"))?;

        let mut output = String::from_utf8_lossy(&out.stdout).into_owned();
        output.push_str(&String::from_utf8_lossy(&out.stderr));

        Ok(ToolOutput { status: out.status.code(), output })
    }
}

/// Locate `program` on the search path, failing the run when it is absent.
pub fn detect(program: &str) -> Result<PathBuf> {
    let path = env::var_os("PATH").unwrap_or_default();
    env::split_paths(&path)
        .map(|dir| dir.join(program))
        .find(|candidate| is_executable(candidate))
        .with_context(|| format!("Could not find `{program}` on PATH; is it installed?"))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata().map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0).unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
