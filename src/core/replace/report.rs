//! Human-readable progress and summary lines.

use std::io::{self, Write};

use super::plans::{Plan, ReportStyle};
use super::runner::{FileOutcome, RunSummary};

pub(crate) fn banner(out: &mut dyn Write, plan: &Plan) -> io::Result<()> {
    writeln!(out, "{}\n", plan.banner)
}

pub(crate) fn file(
    out: &mut dyn Write,
    style: ReportStyle,
    display: &str,
    outcome: &FileOutcome,
) -> io::Result<()> {
    match outcome {
        FileOutcome::Missing => writeln!(out, "⚠️  File not found: {}", display),
        FileOutcome::Failed { error } => {
            writeln!(out, "❌ Error while processing {}: {}", display, error)
        }
        FileOutcome::UpToDate => match style {
            ReportStyle::Tally => writeln!(out, "✓ {}: already up to date", display),
            ReportStyle::Detailed => Ok(()),
        },
        FileOutcome::Modified { hits, replacements } => match style {
            ReportStyle::Tally => writeln!(out, "✅ {}: {} icon(s) fixed", display, replacements),
            ReportStyle::Detailed => {
                for hit in hits {
                    writeln!(
                        out,
                        "  ✓ {}: {} replacement(s) in {}",
                        hit.label, hit.count, display
                    )?;
                }
                writeln!(out, "📝 {}: {} replacement(s) applied", display, replacements)
            }
        },
    }
}

pub(crate) fn summary(out: &mut dyn Write, plan: &Plan, summary: &RunSummary) -> io::Result<()> {
    match plan.style {
        ReportStyle::Tally => {
            writeln!(out, "\n📊 Final summary:")?;
            writeln!(out, "   Icons fixed: {}", summary.total_replacements)?;
        }
        ReportStyle::Detailed => {
            writeln!(out, "\n📊 Summary:")?;
            writeln!(out, "   Files scanned: {}", summary.files_scanned)?;
            writeln!(out, "   Files modified: {}", summary.files_modified)?;
            writeln!(out, "   Total replacements: {}", summary.total_replacements)?;
        }
    }

    writeln!(out)?;
    if summary.total_replacements > 0 {
        for line in plan.done {
            writeln!(out, "{}", line)?;
        }
    } else {
        writeln!(out, "{}", plan.noop)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replace::plans;
    use crate::replace::rules::Hit;

    fn render_file(style: ReportStyle, outcome: &FileOutcome) -> String {
        let mut buf = Vec::new();
        file(&mut buf, style, "src/app/page.js", outcome).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn tally_lines() {
        assert_eq!(
            render_file(ReportStyle::Tally, &FileOutcome::UpToDate),
            "✓ src/app/page.js: already up to date\n"
        );
        assert_eq!(
            render_file(
                ReportStyle::Tally,
                &FileOutcome::Modified {
                    hits: Vec::new(),
                    replacements: 2
                }
            ),
            "✅ src/app/page.js: 2 icon(s) fixed\n"
        );
        assert_eq!(
            render_file(ReportStyle::Tally, &FileOutcome::Missing),
            "⚠️  File not found: src/app/page.js\n"
        );
    }

    #[test]
    fn detailed_lines_list_each_hit() {
        let outcome = FileOutcome::Modified {
            hits: vec![
                Hit {
                    label: "Complex icon v1".to_string(),
                    count: 2,
                },
                Hit {
                    label: "Complex icon v2".to_string(),
                    count: 1,
                },
            ],
            replacements: 3,
        };

        assert_eq!(
            render_file(ReportStyle::Detailed, &outcome),
            "  ✓ Complex icon v1: 2 replacement(s) in src/app/page.js\n\
             \x20 ✓ Complex icon v2: 1 replacement(s) in src/app/page.js\n\
             📝 src/app/page.js: 3 replacement(s) applied\n"
        );
    }

    #[test]
    fn detailed_up_to_date_is_silent() {
        assert_eq!(render_file(ReportStyle::Detailed, &FileOutcome::UpToDate), "");
    }

    #[test]
    fn failure_line_carries_message() {
        let outcome = FileOutcome::Failed {
            error: "read src/app/page.js: Permission denied".to_string(),
        };
        assert_eq!(
            render_file(ReportStyle::Tally, &outcome),
            "❌ Error while processing src/app/page.js: read src/app/page.js: Permission denied\n"
        );
    }

    #[test]
    fn summary_picks_done_or_noop() {
        let plan = plans::replace();

        let mut buf = Vec::new();
        summary(&mut buf, &plan, &RunSummary::default()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Files scanned: 0"));
        assert!(text.contains(plan.noop));

        let mut buf = Vec::new();
        let counts = RunSummary {
            files_scanned: 1,
            files_modified: 1,
            total_replacements: 3,
            ..RunSummary::default()
        };
        summary(&mut buf, &plan, &counts).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Total replacements: 3"));
        assert!(text.contains(plan.done[0]));
        assert!(!text.contains(plan.noop));
    }
}
