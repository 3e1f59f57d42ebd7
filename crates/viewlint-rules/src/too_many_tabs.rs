//! Rule limiting the number of tab items in a view.
//!
//! Threshold-style: the walker tallies `tabItem` modifiers across the
//! whole declaration (nesting depth does not matter) and a single
//! violation is emitted at the declaration itself once the tally exceeds
//! the limit.

use crate::common::is_view_root;
use viewlint_core::matcher;
use viewlint_core::walker::{self, Decision};
use viewlint_core::{ArgumentSpec, ModifierSpec, Rule, Severity, Tree, Violation};

/// Rule code for too-many-tabs.
pub const CODE: &str = "VL015";

/// Rule name for too-many-tabs.
pub const NAME: &str = "too-many-tabs";

/// Default maximum number of tab items.
pub const DEFAULT_THRESHOLD: usize = 8;

/// Reports view declarations defining more tab items than the threshold.
#[derive(Debug, Clone)]
pub struct TooManyTabs {
    /// Maximum accepted number of tab items.
    pub threshold: usize,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for TooManyTabs {
    fn default() -> Self {
        Self::new()
    }
}

impl TooManyTabs {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            severity: Severity::Warning,
        }
    }

    /// Sets the maximum accepted number of tab items.
    #[must_use]
    pub fn threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for TooManyTabs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "A view should not define more than 8 tab items; consider moving some into a sidebar"
    }

    fn check(&self, tree: &Tree) -> Vec<Violation> {
        if !is_view_root(tree) {
            return Vec::new();
        }
        let specs = tab_item_specs();
        let walk = walker::walk(tree, tree.root(), |_, node| {
            if matcher::matches(node, &specs) {
                Decision::Count
            } else {
                Decision::Descend
            }
        });

        let Some(offset) = tree.node(tree.root()).offset() else {
            return Vec::new();
        };
        if walk.count > self.threshold {
            vec![Violation::new(
                CODE,
                NAME,
                self.severity,
                offset,
                format!(
                    "Defined {} tab items where at most {} are advisable; consider moving some into a sidebar",
                    walk.count, self.threshold
                ),
            )]
        } else {
            Vec::new()
        }
    }
}

fn tab_item_specs() -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("tabItem").argument(ArgumentSpec::unnamed().optional())]
}
