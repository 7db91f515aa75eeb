//! Post-filter stripping directive phrasing from generated prose.
//!
//! The engine reports risk factors; it never tells the user what to do.
//! Collaborator output passes through this filter before acceptance.

use regex::Regex;

/// One disallowed phrasing. Kept as a data table so the taxonomy can grow
/// without touching the filter's control flow.
#[derive(Debug, Clone, Copy)]
pub struct DirectivePattern {
    pub pattern: &'static str,
    pub description: &'static str,
}

/// Directive phrasings the explanation layer may never emit.
pub const FORBIDDEN_DIRECTIVES: &[DirectivePattern] = &[
    DirectivePattern {
        pattern: r"(?i)\byou\s+(?:should|must|need\s+to|have\s+to)\b",
        description: "second-person directive",
    },
    DirectivePattern {
        pattern: r"(?i)\brecommend(?:ed|s|ation)?\b",
        description: "recommendation wording",
    },
    DirectivePattern {
        pattern: r"(?i)\bmust\b",
        description: "obligation wording",
    },
    DirectivePattern {
        pattern: r"(?i)\bunconditionally\b",
        description: "absolute wording",
    },
    DirectivePattern {
        pattern: r"(?i)\brequired\b",
        description: "requirement wording",
    },
    DirectivePattern {
        pattern: r"(?i)\bmandatory\b",
        description: "requirement wording",
    },
    DirectivePattern {
        pattern: r"(?i)\b(?:make|be)\s+sure\s+to\b",
        description: "imperative opener",
    },
    DirectivePattern {
        pattern: r"(?i)\bfile\s+an?\s+insurance\s+claim\b",
        description: "insurance directive",
    },
];

#[derive(Debug, thiserror::Error)]
#[error("invalid directive pattern '{pattern}': {source}")]
pub struct FilterError {
    pub pattern: &'static str,
    source: regex::Error,
}

/// Compiled forbidden-directive patterns.
pub struct DirectiveFilter {
    patterns: Vec<Regex>,
}

impl DirectiveFilter {
    /// Compile the standard table.
    pub fn standard() -> Result<Self, FilterError> {
        Self::from_table(FORBIDDEN_DIRECTIVES)
    }

    pub fn from_table(table: &[DirectivePattern]) -> Result<Self, FilterError> {
        let mut patterns = Vec::with_capacity(table.len());
        for entry in table {
            let regex = Regex::new(entry.pattern).map_err(|source| FilterError {
                pattern: entry.pattern,
                source,
            })?;
            patterns.push(regex);
        }
        Ok(Self { patterns })
    }

    /// Remove every forbidden match, keeping the rest of the sentence.
    pub fn strip(&self, text: &str) -> String {
        let mut cleaned = text.to_string();
        for regex in &self.patterns {
            cleaned = regex.replace_all(&cleaned, "").into_owned();
        }
        cleaned.trim().to_string()
    }

    pub fn is_clean(&self, text: &str) -> bool {
        self.patterns.iter().all(|regex| !regex.is_match(text))
    }
}
