use iconfix::replace::{self, RunSummary};

use super::CmdResult;

/// Run one built-in plan in the working directory.
///
/// Per-file failures are already in the printed report and do not change
/// the exit code.
pub fn run(name: &str) -> CmdResult<RunSummary> {
    let report = replace::run_in_current_dir(name)?;
    Ok((report.summary, 0))
}
