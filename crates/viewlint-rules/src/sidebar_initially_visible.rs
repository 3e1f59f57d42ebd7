//! Rule keeping sidebars visible on first presentation.
//!
//! A split view initialised with a hidden sidebar strands the user on the
//! detail column; a visibility binding cannot be verified statically and
//! is reported for a manual check.

use viewlint_core::matcher;
use viewlint_core::walker::{self, Decision};
use viewlint_core::{Node, Rule, Severity, Tree, Violation, ViolationTemplate};

/// Rule code for sidebar-initially-visible.
pub const CODE: &str = "VL013";

/// Rule name for sidebar-initially-visible.
pub const NAME: &str = "sidebar-initially-visible";

/// Reports split views whose initial column visibility hides the sidebar.
#[derive(Debug, Clone)]
pub struct SidebarInitiallyVisible {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for SidebarInitiallyVisible {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarInitiallyVisible {
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

impl Rule for SidebarInitiallyVisible {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Sidebars should not be hidden by default; do not initialise column visibility with detailOnly, or doubleColumn for three-column split views"
    }

    fn check(&self, tree: &Tree) -> Vec<Violation> {
        let template = ViolationTemplate::new(CODE, NAME, self.severity, self.description());
        walker::collect(tree, tree.root(), |_, node| decide(node), &template)
    }
}

fn decide(node: &Node) -> Decision {
    let Some(visibility) = matcher::labeled_argument(node, "NavigationSplitView", "columnVisibility")
    else {
        return Decision::Descend;
    };

    // A binding is mutable state the author has to check by hand.
    if visibility.contains('$') || visibility.ends_with("detailOnly") {
        return Decision::Report;
    }

    // On a three-column split view (one with a `content` column),
    // doubleColumn hides the sidebar as well.
    let three_column =
        matcher::labeled_argument(node, "NavigationSplitView", "content").is_some();
    if three_column && visibility.ends_with("doubleColumn") {
        return Decision::Report;
    }

    Decision::Descend
}
