//! Sequential per-file processing.
//!
//! Each file is read whole, rewritten in memory and written back only when
//! its content changed. A failing file is reported and the run moves on.

use std::io::Write;
use std::path::Path;

use super::plans::Plan;
use super::report;
use super::rules::{apply_rules, Hit, Rule};
use super::targets::{self, Target};
use crate::error::{Error, Result};
use crate::io::{read_file, write_file};

/// What happened to one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Listed explicitly but absent on disk.
    Missing,
    /// Read fine, no rule fired.
    UpToDate,
    Modified { hits: Vec<Hit>, replacements: usize },
    Failed { error: String },
}

#[derive(Debug, Clone)]
pub struct FileReport {
    pub file: String,
    pub outcome: FileOutcome,
}

/// Run counters. Only files read (and, if changed, written) without error
/// count as scanned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_modified: usize,
    pub total_replacements: usize,
    pub missing: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Missing => self.missing += 1,
            FileOutcome::UpToDate => self.files_scanned += 1,
            FileOutcome::Modified { replacements, .. } => {
                self.files_scanned += 1;
                self.files_modified += 1;
                self.total_replacements += replacements;
            }
            FileOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub plan: String,
    pub files: Vec<FileReport>,
    pub summary: RunSummary,
}

/// Apply `rules` to one file.
///
/// `check_exists` is set for explicitly listed targets, where absence is an
/// expected, non-fatal condition rather than a read failure.
pub fn process_file(target: &Target, rules: &[Rule], check_exists: bool) -> FileOutcome {
    if check_exists && !target.path.exists() {
        return FileOutcome::Missing;
    }

    let content = match read_file(&target.path, &format!("read {}", target.display)) {
        Ok(content) => content,
        Err(e) => return FileOutcome::Failed { error: e.message },
    };

    let substitution = apply_rules(&content, rules);
    if substitution.content == content {
        return FileOutcome::UpToDate;
    }

    if let Err(e) = write_file(
        &target.path,
        &substitution.content,
        &format!("write {}", target.display),
    ) {
        return FileOutcome::Failed { error: e.message };
    }

    let replacements = substitution.replacements();
    log_status!("write", "Rewrote {} ({} replacement(s))", target.display, replacements);

    FileOutcome::Modified {
        hits: substitution.hits,
        replacements,
    }
}

/// Run `plan` against `root`, streaming progress and the summary to `out`.
///
/// Only setup failures (target discovery, a broken report sink) surface as
/// `Err`; per-file failures are part of the returned report.
pub fn run(plan: &Plan, root: &Path, out: &mut dyn Write) -> Result<RunReport> {
    report::banner(out, plan).map_err(report_error)?;

    let targets = targets::resolve(&plan.targets, root)?;
    log_status!("scan", "{}: {} target(s) under {}", plan.name, targets.len(), root.display());

    let check_exists = plan.targets.is_explicit();
    let mut summary = RunSummary::default();
    let mut files = Vec::with_capacity(targets.len());

    for target in &targets {
        let outcome = process_file(target, &plan.rules, check_exists);
        summary.record(&outcome);
        report::file(out, plan.style, &target.display, &outcome).map_err(report_error)?;
        files.push(FileReport {
            file: target.display.clone(),
            outcome,
        });
    }

    report::summary(out, plan, &summary).map_err(report_error)?;

    Ok(RunReport {
        plan: plan.name.to_string(),
        files,
        summary,
    })
}

fn report_error(e: std::io::Error) -> Error {
    Error::internal_io(e.to_string(), Some("write report".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replace::rules::Replacement;
    use std::fs;
    use tempfile::TempDir;

    fn target(dir: &TempDir, rel: &str) -> Target {
        Target {
            display: rel.to_string(),
            path: dir.path().join(rel),
        }
    }

    fn rules() -> Vec<Rule> {
        vec![Replacement::new("old icon", "M1 1", "M9 9").into()]
    }

    #[test]
    fn missing_explicit_target_is_reported() {
        let dir = TempDir::new().unwrap();
        let outcome = process_file(&target(&dir, "gone.js"), &rules(), true);
        assert_eq!(outcome, FileOutcome::Missing);
    }

    #[test]
    fn missing_discovered_target_is_a_failure() {
        let dir = TempDir::new().unwrap();
        let outcome = process_file(&target(&dir, "gone.js"), &rules(), false);
        assert!(matches!(outcome, FileOutcome::Failed { .. }));
    }

    #[test]
    fn unchanged_file_is_not_rewritten() {
        let dir = TempDir::new().unwrap();
        let t = target(&dir, "a.js");
        fs::write(&t.path, "d=\"M9 9\"").unwrap();
        let before = fs::metadata(&t.path).unwrap().modified().unwrap();

        let outcome = process_file(&t, &rules(), true);

        assert_eq!(outcome, FileOutcome::UpToDate);
        assert_eq!(fs::metadata(&t.path).unwrap().modified().unwrap(), before);
    }

    #[test]
    fn modified_file_counts_and_writes() {
        let dir = TempDir::new().unwrap();
        let t = target(&dir, "a.js");
        fs::write(&t.path, "d=\"M1 1\" d=\"M1 1\"").unwrap();

        let outcome = process_file(&t, &rules(), true);

        assert_eq!(
            outcome,
            FileOutcome::Modified {
                hits: vec![Hit {
                    label: "old icon".to_string(),
                    count: 2
                }],
                replacements: 2,
            }
        );
        assert_eq!(fs::read_to_string(&t.path).unwrap(), "d=\"M9 9\" d=\"M9 9\"");
    }

    #[test]
    fn non_utf8_file_fails_without_write() {
        let dir = TempDir::new().unwrap();
        let t = target(&dir, "bin.js");
        fs::write(&t.path, [0xffu8, 0xfe, 0x00]).unwrap();

        let outcome = process_file(&t, &rules(), true);

        match outcome {
            FileOutcome::Failed { error } => assert!(error.starts_with("read bin.js")),
            other => panic!("expected failure, got {:?}", other),
        }
        assert_eq!(fs::read(&t.path).unwrap(), vec![0xffu8, 0xfe, 0x00]);
    }

    #[test]
    fn summary_records_each_outcome() {
        let mut summary = RunSummary::default();
        summary.record(&FileOutcome::Missing);
        summary.record(&FileOutcome::UpToDate);
        summary.record(&FileOutcome::Modified {
            hits: Vec::new(),
            replacements: 4,
        });
        summary.record(&FileOutcome::Failed {
            error: "nope".to_string(),
        });

        assert_eq!(
            summary,
            RunSummary {
                files_scanned: 2,
                files_modified: 1,
                total_replacements: 4,
                missing: 1,
                failed: 1,
            }
        );
    }
}
