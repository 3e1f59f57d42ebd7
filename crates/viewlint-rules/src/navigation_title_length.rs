//! Rule limiting navigation title length.
//!
//! Long titles get truncated in the navigation bar. A title passed as a
//! variable cannot be measured here, so it is reported for a manual check.

use viewlint_core::matcher;
use viewlint_core::walker::{self, Decision};
use viewlint_core::{Node, Rule, Severity, Tree, Violation, ViolationTemplate};

/// Rule code for navigation-title-length.
pub const CODE: &str = "VL008";

/// Rule name for navigation-title-length.
pub const NAME: &str = "navigation-title-length";

/// Default maximum title length in characters.
pub const DEFAULT_MAX_LENGTH: usize = 15;

/// Reports navigation titles longer than the limit, or not directly
/// measurable.
#[derive(Debug, Clone)]
pub struct NavigationTitleLength {
    /// Maximum accepted title length in characters.
    pub max_length: usize,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NavigationTitleLength {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationTitleLength {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            severity: Severity::Warning,
        }
    }

    /// Sets the maximum accepted title length.
    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NavigationTitleLength {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Navigation titles should not be longer than 15 characters; check variables by hand"
    }

    fn check(&self, tree: &Tree) -> Vec<Violation> {
        let template = ViolationTemplate::new(CODE, NAME, self.severity, self.description());
        walker::collect(
            tree,
            tree.root(),
            |_, node| self.decide(node),
            &template,
        )
    }
}

impl NavigationTitleLength {
    fn decide(&self, node: &Node) -> Decision {
        let Some(title) = matcher::single_unnamed_argument_of(node, "navigationTitle") else {
            return Decision::Descend;
        };
        match string_literal_content(title) {
            // A direct string is measurable.
            Some(content) => {
                if content.chars().count() > self.max_length {
                    Decision::Report
                } else {
                    Decision::Descend
                }
            }
            // Variable, member access, localized string: report so the
            // author verifies the resolved value.
            None => Decision::Report,
        }
    }
}

/// Returns the content of a plain string literal argument, `None` for
/// anything else.
fn string_literal_content(argument: &str) -> Option<&str> {
    argument.strip_prefix('"')?.strip_suffix('"')
}
