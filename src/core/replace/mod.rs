//! Icon replacement passes.
//!
//! A [`Plan`] names its targets (a fixed file list or recursive globs), an
//! ordered list of rules, and how to word the report. [`run`] walks the
//! targets one file at a time, rewriting only files whose content changes.

mod plans;
mod report;
mod rules;
mod runner;
mod targets;

pub use plans::{align, by_name, cleanup, collab, replace, Plan, ReportStyle, PLAN_NAMES};
pub use rules::{apply_rules, ClassRule, Hit, Replacement, Rule, Substitution};
pub use runner::{process_file, run, FileOutcome, FileReport, RunReport, RunSummary};
pub use targets::{resolve, Target, Targets};

use crate::error::{Error, Result};

/// Run a built-in plan against the current working directory, reporting to stdout.
pub fn run_in_current_dir(name: &str) -> Result<RunReport> {
    let plan = by_name(name)?;
    let root = std::env::current_dir()
        .map_err(|e| Error::internal_io(e.to_string(), Some("resolve working directory".to_string())))?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    run(&plan, &root, &mut handle)
}
