//! Rule requiring descriptive tab item labels.
//!
//! A tab item needs a label with an icon and a non-empty title. A title
//! passed as a variable cannot be verified here and is reported for a
//! manual check.

use crate::common::is_view_root;
use viewlint_core::matcher;
use viewlint_core::walker::{self, Decision};
use viewlint_core::{
    ArgumentSpec, ModifierSpec, Node, Rule, Severity, Tree, Violation, ViolationTemplate,
};

/// Rule code for tab-item-label.
pub const CODE: &str = "VL014";

/// Rule name for tab-item-label.
pub const NAME: &str = "tab-item-label";

/// Reports tab items without a labeled, non-empty title.
#[derive(Debug, Clone)]
pub struct TabItemLabel {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for TabItemLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl TabItemLabel {
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

impl Rule for TabItemLabel {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "A tabItem should carry a Label (or Text and Image) with a non-empty title; check variables by hand"
    }

    fn check(&self, tree: &Tree) -> Vec<Violation> {
        if !is_view_root(tree) {
            return Vec::new();
        }
        let specs = tab_item_specs();
        let template = ViolationTemplate::new(CODE, NAME, self.severity, self.description());
        walker::collect(
            tree,
            tree.root(),
            |_, node| decide(node, &specs),
            &template,
        )
    }
}

fn decide(node: &Node, specs: &[ModifierSpec]) -> Decision {
    if !matcher::matches(node, specs) {
        return Decision::Descend;
    }
    let Some(content) = matcher::single_unnamed_argument_of(node, "tabItem") else {
        return Decision::Report;
    };
    if !is_labeled(content) {
        return Decision::Report;
    }
    if has_empty_or_variable_title(content) {
        Decision::Report
    } else {
        Decision::Pass
    }
}

fn tab_item_specs() -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("tabItem").argument(ArgumentSpec::unnamed().optional())]
}

/// Tab content counts as labeled with a `Label`, or with both a `Text`
/// and an `Image`.
fn is_labeled(content: &str) -> bool {
    content.contains("Label(") || (content.contains("Text(") && content.contains("Image("))
}

/// Inspects the first argument of the `Label` call: a non-literal title
/// needs a manual check, a blank literal is a violation outright.
fn has_empty_or_variable_title(content: &str) -> bool {
    let Some(after_label) = content.split("Label(").nth(1) else {
        // Text/Image form; nothing further to measure.
        return false;
    };
    let Some(title_argument) = after_label.split(',').next() else {
        return false;
    };
    if !title_argument.contains('"') {
        return true;
    }
    title_argument
        .split('"')
        .nth(1)
        .map_or(true, |title| title.trim().is_empty())
}
