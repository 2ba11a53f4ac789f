use std::io::Write;

use iconfix::replace::{self, Targets, PLAN_NAMES};
use iconfix::Error;

use super::CmdResult;

pub fn run() -> CmdResult<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_catalogue(&mut handle)?;
    Ok(((), 0))
}

fn write_catalogue(out: &mut dyn Write) -> iconfix::Result<()> {
    for name in PLAN_NAMES {
        let plan = replace::by_name(name)?;
        let scope = match &plan.targets {
            Targets::Files(files) => format!("{} listed file(s)", files.len()),
            Targets::Glob { patterns, .. } => patterns.join(", "),
        };
        writeln!(out, "{:<8} {}", plan.name, plan.about).map_err(stdout_error)?;
        writeln!(out, "{:<8} targets: {}, rules: {}", "", scope, plan.rules.len())
            .map_err(stdout_error)?;
    }
    Ok(())
}

fn stdout_error(e: std::io::Error) -> Error {
    Error::internal_io(e.to_string(), Some("write stdout".to_string()))
}
