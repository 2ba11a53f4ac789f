//! Target resolution: explicit file lists or recursive glob discovery.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use glob_match::glob_match;

use crate::error::{Error, Result};

/// Which files a plan touches, relative to the run root.
#[derive(Debug, Clone)]
pub enum Targets {
    /// Fixed list, processed in order. Absent entries are reported, not errors.
    Files(Vec<String>),
    /// Recursive discovery. `ignore` patterns are matched against the
    /// root-relative path with `/` separators.
    Glob {
        patterns: Vec<String>,
        ignore: Vec<String>,
    },
}

impl Targets {
    pub fn files(paths: &[&str]) -> Self {
        Targets::Files(paths.iter().map(|p| p.to_string()).collect())
    }

    pub fn glob(patterns: &[&str], ignore: &[&str]) -> Self {
        Targets::Glob {
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            ignore: ignore.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Whether targets come from a fixed list (and may therefore be missing).
    pub fn is_explicit(&self) -> bool {
        matches!(self, Targets::Files(_))
    }
}

/// A resolved file to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Root-relative path used in report lines.
    pub display: String,
    pub path: PathBuf,
}

/// Resolve `targets` under `root`.
///
/// Explicit lists are returned as-is, existence is checked later per file.
/// Glob order follows the glob crate (sorted per pattern); files matched by
/// more than one pattern are kept once.
pub fn resolve(targets: &Targets, root: &Path) -> Result<Vec<Target>> {
    match targets {
        Targets::Files(paths) => Ok(paths
            .iter()
            .map(|p| Target {
                display: p.clone(),
                path: root.join(p),
            })
            .collect()),
        Targets::Glob { patterns, ignore } => discover(patterns, ignore, root),
    }
}

fn discover(patterns: &[String], ignore: &[String], root: &Path) -> Result<Vec<Target>> {
    let escaped_root = glob::Pattern::escape(&root.to_string_lossy());
    let options = glob::MatchOptions {
        require_literal_leading_dot: true,
        ..Default::default()
    };
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut found = Vec::new();

    for pattern in patterns {
        let full = format!("{}/{}", escaped_root.trim_end_matches('/'), pattern);
        let entries = glob::glob_with(&full, options)
            .map_err(|e| Error::validation_invalid_pattern(pattern.clone(), e.to_string()))?;

        let mut matched = 0;
        for entry in entries {
            let path = match entry {
                Ok(path) => path,
                Err(e) => {
                    log_status!("scan", "Skipping unreadable path {}: {}", e.path().display(), e);
                    continue;
                }
            };

            if !path.is_file() {
                continue;
            }

            // Wildcards never match dot-entries below the root
            let display = relative_display(&path, root);
            if is_hidden(&display) {
                continue;
            }
            if ignore.iter().any(|ig| glob_match(ig, &display)) {
                continue;
            }

            if seen.insert(path.clone()) {
                matched += 1;
                found.push(Target { display, path });
            }
        }

        log_status!("scan", "{} file(s) matched {}", matched, pattern);
    }

    Ok(found)
}

fn is_hidden(display: &str) -> bool {
    display.split('/').any(|part| part.starts_with('.'))
}

fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
