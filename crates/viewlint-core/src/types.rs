//! Core types for lint violations and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A lint violation found during one traversal.
///
/// The offset is a byte position in the analyzed unit; mapping it to a
/// line/column location is the surrounding tool's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g. "VL005").
    pub code: String,
    /// Rule name (e.g. "feedback-sound").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Byte offset of the reported node.
    pub offset: usize,
    /// Human-readable message, taken from the rule description.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        offset: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            offset,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "+{}: {} [{}] {}",
            self.offset, self.severity, self.code, self.message
        )
    }
}

/// Reusable stamp for producing violations at report sites.
///
/// A rule builds one template from its own metadata and the walker stamps
/// it once per site.
#[derive(Debug, Clone)]
pub struct ViolationTemplate {
    code: String,
    rule: String,
    severity: Severity,
    message: String,
}

impl ViolationTemplate {
    /// Creates a template from rule metadata.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            message: message.into(),
        }
    }

    /// Stamps a violation at the given byte offset.
    #[must_use]
    pub fn at(&self, offset: usize) -> Violation {
        Violation::new(
            self.code.as_str(),
            self.rule.as_str(),
            self.severity,
            offset,
            self.message.as_str(),
        )
    }
}

/// Converts a Violation to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        Self {
            message: format!("[{}] {}", v.code, v.message),
            span: SourceSpan::from((v.offset, 0)),
            label_message: v.rule.clone(),
        }
    }
}

/// Result of running lint analysis over a batch of trees.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of trees checked.
    pub trees_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Returns true if there are any warnings or errors.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Returns violations filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .collect()
    }

    /// Counts violations as (errors, warnings).
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        let errors = self
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Error)
            .count();
        (errors, self.violations.len() - errors)
    }

    /// Checks if any violations meet or exceed the given severity.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Adds violations from another result.
    pub fn extend(&mut self, other: Self) {
        self.violations.extend(other.violations);
        self.trees_checked += other.trees_checked;
    }

    /// Prints a summary report to stdout.
    pub fn print_report(&self) {
        let (errors, warnings) = self.count_by_severity();

        for violation in &self.violations {
            println!("{violation}");
        }

        println!(
            "\nFound {} error(s), {} warning(s) in {} tree(s)",
            errors, warnings, self.trees_checked
        );
    }
}
