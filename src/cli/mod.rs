//! Command-line interface for org-loc
//!
//! One positional argument: the organization to report on. The summed report is
//! the program's only stdout payload besides plain progress lines.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Settings;
use crate::run::run_report;
use crate::tools::SystemTools;
use crate::workspace::Workspace;

/// Count lines of code across every active repository in a GitHub organization
#[derive(Parser)]
#[command(name = "org-loc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// GitHub organization to report on
    #[arg(value_name = "ORG")]
    org: String,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    // Usage errors exit 1 (clap's default would be 2); --help and --version
    // still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            let code = if err.use_stderr() { 1 } else { 0 };
            std::process::exit(code);
        }
    };

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let settings = Settings::from_env();
    let workspace = Workspace::prepare(Workspace::default_root())?;

    let report = run_report(&cli.org, &settings, &SystemTools, &workspace)?;
    print!("{}", with_trailing_newline(&report));
    Ok(())
}

/// The summed report usually already ends with a newline; add one only when it
/// does not, so the output never gains a trailing blank line.
fn with_trailing_newline(report: &str) -> String {
    if report.ends_with('\n') {
        report.to_string()
    } else {
        format!("{report}\n")
    }
}
