//! Per-repository line counting
//!
//! Invokes `cloc` in quiet mode, directing its report to a file in the scratch
//! workspace. Whether the report landed is judged by the file's existence; the
//! count invocation's own exit status is captured but not consulted, matching
//! long-standing behavior (see DESIGN.md).

use anyhow::Result;
use std::path::Path;

use crate::tools::{ToolOutput, ToolRunner};

/// `cloc` is the detected path of the counting utility, so detection and
/// execution cannot disagree about which binary runs.
pub fn count_repository(
    runner: &dyn ToolRunner,
    cloc: &str,
    source_dir: &Path,
    report_file: &Path,
) -> Result<ToolOutput> {
    let args = vec![
        source_dir.display().to_string(),
        "--quiet".to_string(),
        format!("--report-file={}", report_file.display()),
    ];
    runner.run(cloc, &args)
}
