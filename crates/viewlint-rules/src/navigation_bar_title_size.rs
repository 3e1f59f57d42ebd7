//! Advisory rule flagging every navigation title for a display-mode audit.
//!
//! Opt-in: root navigation views should use the large display mode and
//! nested ones the inline mode; which one applies is not decidable from a
//! single declaration, so each occurrence is flagged for review.

use viewlint_core::matcher;
use viewlint_core::walker::{self, Decision};
use viewlint_core::{
    ArgumentSpec, ModifierSpec, Rule, Severity, Tree, Violation, ViolationTemplate,
};

/// Rule code for navigation-bar-title-size.
pub const CODE: &str = "VL007";

/// Rule name for navigation-bar-title-size.
pub const NAME: &str = "navigation-bar-title-size";

/// Reports every `navigationTitle` use for a display-mode check.
#[derive(Debug, Clone)]
pub struct NavigationBarTitleSize {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for NavigationBarTitleSize {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationBarTitleSize {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for NavigationBarTitleSize {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Root navigation views should use the large title display mode, everything else inline"
    }

    fn opt_in(&self) -> bool {
        true
    }

    fn check(&self, tree: &Tree) -> Vec<Violation> {
        let specs = navigation_title_specs();
        let template = ViolationTemplate::new(CODE, NAME, self.severity, self.description());
        walker::collect(
            tree,
            tree.root(),
            |_, node| {
                if matcher::matches(node, &specs) {
                    Decision::Report
                } else {
                    Decision::Descend
                }
            },
            &template,
        )
    }
}

fn navigation_title_specs() -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("navigationTitle").argument(ArgumentSpec::unnamed().optional())]
}
