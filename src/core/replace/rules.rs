//! Substitution rules and their application to file content.

use regex::{Captures, Regex};

use crate::error::{Error, Result};

/// A literal from → to substitution. Matching is exact, case-sensitive and
/// byte-for-byte; no whitespace or escape normalization happens.
#[derive(Debug, Clone)]
pub struct Replacement {
    pub label: String,
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(label: impl Into<String>, from: &str, to: &str) -> Self {
        Self {
            label: label.into(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    /// Count non-overlapping occurrences, the same ones `str::replace` rewrites.
    pub fn count_in(&self, text: &str) -> usize {
        find_literal_matches(text, &self.from).len()
    }
}

/// Byte offsets of every non-overlapping occurrence of `term` in `text`.
fn find_literal_matches(text: &str, term: &str) -> Vec<usize> {
    if term.is_empty() || term.len() > text.len() {
        return Vec::new();
    }

    text.match_indices(term).map(|(pos, _)| pos).collect()
}

/// Appends a utility class to tags matched by a three-group pattern:
/// `(prefix up to the classes)(class run)(rest of the tag)`.
///
/// Tags already carrying the class anywhere in the match are left alone,
/// which keeps repeated runs from stacking the class.
#[derive(Debug, Clone)]
pub struct ClassRule {
    pub label: String,
    pub class: String,
    regex: Regex,
}

impl ClassRule {
    pub fn new(label: impl Into<String>, pattern: &str, class: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| Error::validation_invalid_pattern(pattern, e.to_string()))?;

        // Group 0 plus the three capture groups.
        if regex.captures_len() != 4 {
            return Err(Error::validation_invalid_pattern(
                pattern,
                format!(
                    "expected 3 capture groups, found {}",
                    regex.captures_len() - 1
                ),
            ));
        }

        Ok(Self {
            label: label.into(),
            class: class.to_string(),
            regex,
        })
    }

    /// Rewrite every match missing the class. Returns the new text and the
    /// number of tags actually rewritten.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let mut rewritten = 0;
        let output = self.regex.replace_all(text, |caps: &Captures| {
            let whole = &caps[0];
            if whole.contains(self.class.as_str()) {
                return whole.to_string();
            }
            rewritten += 1;
            format!("{}{} {}{}", &caps[1], &caps[2], self.class, &caps[3])
        });

        (output.into_owned(), rewritten)
    }
}

#[derive(Debug, Clone)]
pub enum Rule {
    Literal(Replacement),
    Class(ClassRule),
}

impl Rule {
    pub fn label(&self) -> &str {
        match self {
            Rule::Literal(r) => &r.label,
            Rule::Class(r) => &r.label,
        }
    }

    /// Apply this rule once across `text`. `None` when nothing matched.
    pub fn apply(&self, text: &str) -> Option<(String, usize)> {
        match self {
            Rule::Literal(r) => {
                let count = r.count_in(text);
                if count == 0 {
                    return None;
                }
                Some((text.replace(&r.from, &r.to), count))
            }
            Rule::Class(r) => {
                let (output, count) = r.apply(text);
                (count > 0).then_some((output, count))
            }
        }
    }
}

impl From<Replacement> for Rule {
    fn from(replacement: Replacement) -> Self {
        Rule::Literal(replacement)
    }
}

impl From<ClassRule> for Rule {
    fn from(rule: ClassRule) -> Self {
        Rule::Class(rule)
    }
}

/// One rule that fired in one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub label: String,
    pub count: usize,
}

/// Content after every rule ran, plus what fired.
#[derive(Debug, Clone)]
pub struct Substitution {
    pub content: String,
    pub hits: Vec<Hit>,
}

impl Substitution {
    pub fn replacements(&self) -> usize {
        self.hits.iter().map(|h| h.count).sum()
    }
}

/// Run `rules` in order, each over the output of the previous one.
pub fn apply_rules(content: &str, rules: &[Rule]) -> Substitution {
    let mut current = content.to_string();
    let mut hits = Vec::new();

    for rule in rules {
        if let Some((next, count)) = rule.apply(&current) {
            current = next;
            hits.push(Hit {
                label: rule.label().to_string(),
                count,
            });
        }
    }

    Substitution {
        content: current,
        hits,
    }
}
