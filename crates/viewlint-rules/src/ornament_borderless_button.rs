//! Rule requiring borderless buttons inside ornaments.
//!
//! An ornament already provides its own visual container; bordered buttons
//! inside it double up the chrome.

use crate::common::is_view_root;
use viewlint_core::matcher;
use viewlint_core::walker::{self, Decision};
use viewlint_core::{
    ArgumentSpec, ModifierSpec, Node, Rule, Severity, Tree, Violation, ViolationTemplate,
};

/// Rule code for ornament-borderless-button.
pub const CODE: &str = "VL009";

/// Rule name for ornament-borderless-button.
pub const NAME: &str = "ornament-borderless-button";

/// Reports ornaments whose content uses a bordered button style.
#[derive(Debug, Clone)]
pub struct OrnamentBorderlessButton {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for OrnamentBorderlessButton {
    fn default() -> Self {
        Self::new()
    }
}

impl OrnamentBorderlessButton {
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

impl Rule for OrnamentBorderlessButton {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Buttons in an ornament should be borderless"
    }

    fn check(&self, tree: &Tree) -> Vec<Violation> {
        if !is_view_root(tree) {
            return Vec::new();
        }
        let template = ViolationTemplate::new(CODE, NAME, self.severity, self.description());
        walker::collect(tree, tree.root(), |_, node| decide(node), &template)
    }
}

fn decide(node: &Node) -> Decision {
    if is_ornament(node) {
        if let Some(content) = ornament_content(node) {
            if content.contains(".bordered") {
                return Decision::Report;
            }
        }
    }
    Decision::Descend
}

/// An ornament is the `ornament` modifier itself, or a `toolbar` whose
/// content is placed at the bottom ornament.
fn is_ornament(node: &Node) -> bool {
    if matcher::matches(node, &ornament_specs()) {
        return true;
    }
    matcher::matches(node, &toolbar_specs())
        && matcher::single_unnamed_argument_of(node, "toolbar")
            .is_some_and(|content| content.contains(".bottomOrnament"))
}

fn ornament_content(node: &Node) -> Option<&str> {
    matcher::single_unnamed_argument_of(node, "ornament")
        .or_else(|| matcher::single_unnamed_argument_of(node, "toolbar"))
}

fn ornament_specs() -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("ornament")
        .argument(ArgumentSpec::named("visibility").optional())
        .argument(ArgumentSpec::named("attachmentAnchor"))
        .argument(ArgumentSpec::named("contentAlignment").optional())
        .argument(ArgumentSpec::named("ornament").optional())]
}

fn toolbar_specs() -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("toolbar").argument(ArgumentSpec::named("content").optional())]
}
