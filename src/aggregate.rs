//! Report aggregation
//!
//! One `cloc --sum-reports` call merges every per-repository report; the
//! combined text is then rewritten so that scratch-file paths read as bare
//! repository names. Whatever the sum invocation emits is passed through —
//! aggregation failure is not distinguished from success.

use anyhow::Result;
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};

use crate::tools::{ToolOutput, ToolRunner};

pub fn sum_reports(
    runner: &dyn ToolRunner,
    cloc: &str,
    reports: &[PathBuf],
) -> Result<ToolOutput> {
    let mut args = vec!["--sum-reports".to_string()];
    args.extend(reports.iter().map(|p| p.display().to_string()));
    runner.run(cloc, &args)
}

/// Replace every line-leading `<scratch-root>/<name>.txt` with `<name>`, padded
/// with trailing spaces to keep the columns behind it aligned (the dropped text
/// is the root, a slash, and the `.txt` suffix: root length + 5 characters).
///
/// Idempotent: rewritten lines no longer start with the scratch root, so a
/// second pass finds nothing to change.
pub fn rewrite_report_paths(output: &str, scratch_root: &Path) -> String {
    let root = scratch_root.display().to_string();
    let pattern = format!(r"(?m)^{}/(.*)\.txt", regex::escape(&root));
    let re = Regex::new(&pattern).expect("valid regex");
    let padding = " ".repeat(root.len() + 5);

    re.replace_all(output, |caps: &Captures| format!("{}{}", &caps[1], padding)).into_owned()
}

#[cfg(test)]
mod tests {
    use super::rewrite_report_paths;
    use std::path::Path;

    const ROOT: &str = "/opt/org-loc/tmp";

    #[test]
    fn scratch_paths_become_bare_names() {
        let output = format!("{ROOT}/widget.txt     120     30     900\n");
        let rewritten = rewrite_report_paths(&output, Path::new(ROOT));
        assert!(rewritten.starts_with("widget"));
        assert!(!rewritten.contains(ROOT));
    }

    #[test]
    fn trailing_columns_keep_their_position() {
        let output = format!("{ROOT}/widget.txt     120     30     900\n");
        let rewritten = rewrite_report_paths(&output, Path::new(ROOT));

        let original_col = output.find("120").expect("column in input");
        let rewritten_col = rewritten.find("120").expect("column in output");
        assert_eq!(original_col, rewritten_col);
        assert_eq!(output.len(), rewritten.len());
    }

    #[test]
    fn only_line_leading_paths_are_rewritten() {
        let output = format!("SUM over {ROOT}/widget.txt\n{ROOT}/widget.txt  1\n");
        let rewritten = rewrite_report_paths(&output, Path::new(ROOT));
        assert!(rewritten.starts_with(&format!("SUM over {ROOT}/widget.txt")));
        assert!(rewritten.lines().nth(1).expect("second line").starts_with("widget"));
    }

    #[test]
    fn rewrite_is_idempotent_and_preserves_line_count() {
        let output = format!(
            "Language  files  blank  code\n{ROOT}/widget.txt  10  20  30\n{ROOT}/gadget.txt  1  2  3\nSUM:  11  22  33\n"
        );
        let once = rewrite_report_paths(&output, Path::new(ROOT));
        let twice = rewrite_report_paths(&once, Path::new(ROOT));
        assert_eq!(once, twice);
        assert_eq!(output.lines().count(), once.lines().count());
    }
}
