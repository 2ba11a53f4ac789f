//! Built-in maintenance passes.
//!
//! Every pass is fixed at compile time: target files, rules and report
//! wording. Paths are relative to the directory the pass runs in.

use super::rules::{ClassRule, Replacement, Rule};
use super::targets::Targets;
use crate::error::{Error, Result};
use crate::icons;

/// Files known to still carry the first-revision collaboration icon.
const CLEANUP_FILES: &[&str] = &[
    "src/app/not-found.js",
    "src/app/friends/page.js",
    "src/app/todos/[projectId]/page.js",
    "src/components/Navbar.js",
    "src/components/ProjectCollaborationModal.js",
];

/// Every page or component that renders a collaboration icon.
const COLLAB_FILES: &[&str] = &[
    "src/app/page.js",
    "src/app/admin/projects/page.js",
    "src/app/not-found.js",
    "src/app/friends/page.js",
    "src/app/todos/[projectId]/page.js",
    "src/components/Navbar.js",
    "src/components/ProjectCollaborationModal.js",
];

const BULK_PATTERNS: &[&str] = &["src/**/*.js"];

const ALIGN_PATTERNS: &[&str] = &["src/**/*.js", "src/**/*.jsx", "src/**/*.ts", "src/**/*.tsx"];

const ALIGN_IGNORE: &[&str] = &[
    "node_modules/**",
    ".next/**",
    "**/node_modules/**",
    "**/.next/**",
];

const SHRINK_CLASS: &str = "flex-shrink-0";

const SVG_RIGHT_MARGIN: &str = r#"(<svg[^>]*className="[^"]*)(w-\d+ h-\d+[^"]*mr-\d+)([^"]*"[^>]*>)"#;

const SVG_LEFT_MARGIN: &str = r#"(<svg[^>]*className="[^"]*)(w-\d+ h-\d+[^"]*ml-\d+)([^"]*"[^>]*>)"#;

const ICON_CONTAINER: &str = r#"(<div[^>]*className="[^"]*)(w-\d+ h-\d+[^"]*(?:mr-\d+|ml-\d+)[^"]*bg-[^"]*rounded[^"]*flex[^"]*items-center[^"]*justify-center)([^"]*"[^>]*>)"#;

/// Names accepted by [`by_name`], in catalogue order.
pub const PLAN_NAMES: &[&str] = &["cleanup", "replace", "collab", "align"];

/// How per-file progress and the final summary are worded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    /// One line per file plus a single replacement total.
    Tally,
    /// One line per rule hit, one per rewritten file, and scanned/modified/total counters.
    Detailed,
}

#[derive(Debug, Clone)]
pub struct Plan {
    pub name: &'static str,
    pub about: &'static str,
    pub banner: &'static str,
    pub targets: Targets,
    pub rules: Vec<Rule>,
    pub style: ReportStyle,
    /// Printed after the summary when at least one replacement happened.
    pub done: &'static [&'static str],
    /// Printed after the summary when nothing needed changing.
    pub noop: &'static str,
}

fn simple_user(label: &str, old: &str) -> Rule {
    Replacement::new(label, old, icons::SIMPLE_USER).into()
}

/// Targeted pass over the five files that kept the first-revision icon.
pub fn cleanup() -> Plan {
    Plan {
        name: "cleanup",
        about: "Replace the first-revision collaboration icon in the five files known to carry it",
        banner: "🧹 Final cleanup of complex icons...",
        targets: Targets::files(CLEANUP_FILES),
        rules: vec![simple_user("Complex icon", icons::COLLAB_V1)],
        style: ReportStyle::Tally,
        done: &["🎉 Cleanup complete! Every icon now uses the simple, balanced version."],
        noop: "✅ Every icon was already up to date!",
    }
}

/// Bulk pass over every JavaScript source under `src/`.
pub fn replace() -> Plan {
    Plan {
        name: "replace",
        about: "Replace both collaboration icon revisions in every src/**/*.js file",
        banner: "🔄 Replacing complex collaboration icons...",
        targets: Targets::glob(BULK_PATTERNS, &[]),
        rules: vec![
            simple_user("Complex icon v1", icons::COLLAB_V1),
            simple_user("Complex icon v2", icons::COLLAB_V2),
        ],
        style: ReportStyle::Detailed,
        done: &[
            "✅ Complex icon replacement complete!",
            "🎯 Every collaboration icon now uses the simple, balanced version",
        ],
        noop: "✅ No replacement needed - every icon is already up to date!",
    }
}

/// Targeted pass with both revisions over the pages that render the icon.
pub fn collab() -> Plan {
    Plan {
        name: "collab",
        about: "Replace both collaboration icon revisions in the seven pages that render them",
        banner: "🔄 Replacing complex collaboration icons...",
        targets: Targets::files(COLLAB_FILES),
        rules: vec![
            simple_user("Complex collaboration icon (version 1)", icons::COLLAB_V1),
            simple_user("Complex collaboration icon (version 2)", icons::COLLAB_V2),
        ],
        style: ReportStyle::Detailed,
        done: &[
            "✅ Complex icon replacement complete!",
            "🎯 Every collaboration icon now uses the simple, balanced version",
        ],
        noop: "✅ No replacement needed - every icon is already up to date!",
    }
}

/// Alignment pass: keeps icons from shrinking in flex rows and swaps the
/// outdated collaboration icons it comes across.
pub fn align() -> Result<Plan> {
    let rules: Vec<Rule> = vec![
        ClassRule::new(
            "Added flex-shrink-0 to SVGs with a right margin",
            SVG_RIGHT_MARGIN,
            SHRINK_CLASS,
        )?
        .into(),
        ClassRule::new(
            "Added flex-shrink-0 to SVGs with a left margin",
            SVG_LEFT_MARGIN,
            SHRINK_CLASS,
        )?
        .into(),
        ClassRule::new(
            "Added flex-shrink-0 to icon containers",
            ICON_CONTAINER,
            SHRINK_CLASS,
        )?
        .into(),
        simple_user(
            "Replaced the old complex collaboration icon (version 1)",
            icons::COLLAB_V1_ALIGNED,
        ),
        simple_user(
            "Replaced the old complex collaboration icon (version 2)",
            icons::COLLAB_V2,
        ),
    ];

    Ok(Plan {
        name: "align",
        about: "Add flex-shrink-0 to icon tags and replace outdated collaboration icons",
        banner: "🔧 Fixing icon alignment...",
        targets: Targets::glob(ALIGN_PATTERNS, ALIGN_IGNORE),
        rules,
        style: ReportStyle::Detailed,
        done: &[
            "✅ Icon alignment fixes complete!",
            "💡 Further recommendations:",
            "   - Visually check the modified pages",
            "   - Test on several screen sizes",
            "   - Make sure icons stay aligned while resizing",
        ],
        noop: "✅ No correction needed - every alignment is already correct!",
    })
}

/// Look up a built-in plan.
pub fn by_name(name: &str) -> Result<Plan> {
    match name {
        "cleanup" => Ok(cleanup()),
        "replace" => Ok(replace()),
        "collab" => Ok(collab()),
        "align" => align(),
        _ => Err(Error::validation_invalid_argument(
            "plan",
            format!("Unknown plan '{}'. Use: {}", name, PLAN_NAMES.join(", ")),
            Some(name.to_string()),
        )
        .with_hint("Run 'iconfix list' to see available plans")),
    }
}
