//! Rule against hidden or indeterminate ornament visibility.

use crate::common::is_view_root;
use viewlint_core::matcher;
use viewlint_core::walker::{self, Decision};
use viewlint_core::{
    ArgumentSpec, ModifierSpec, Node, Rule, Severity, Tree, Violation, ViolationTemplate,
};

/// Rule code for ornament-visibility.
pub const CODE: &str = "VL011";

/// Rule name for ornament-visibility.
pub const NAME: &str = "ornament-visibility";

/// Reports ornaments initialised with hidden visibility, or with a
/// visibility value that has to be checked by hand (a variable).
#[derive(Debug, Clone)]
pub struct OrnamentVisibility {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for OrnamentVisibility {
    fn default() -> Self {
        Self::new()
    }
}

impl OrnamentVisibility {
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

impl Rule for OrnamentVisibility {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Ornaments should generally not be hidden"
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
    if matcher::matches(node, &hidden_visibility_specs()) {
        return Decision::Report;
    }
    if matcher::matches(node, &specified_visibility_specs())
        && !matcher::matches(node, &visible_or_automatic_specs())
    {
        // Visibility is specified but neither hidden nor a known-good
        // constant; a variable the author has to check.
        return Decision::Report;
    }
    Decision::Descend
}

fn ornament_specs(visibility: ArgumentSpec) -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("ornament")
        .argument(visibility)
        .argument(ArgumentSpec::named("attachmentAnchor"))
        .argument(ArgumentSpec::named("contentAlignment").optional())
        .argument(ArgumentSpec::named("ornament").optional())]
}

/// `.ornament(visibility: .hidden, …)`.
fn hidden_visibility_specs() -> Vec<ModifierSpec> {
    ornament_specs(
        ArgumentSpec::named("visibility").accepting([".hidden", "Visibility.hidden"]),
    )
}

/// `.ornament(visibility: <anything>, …)` — the parameter defaults to
/// `.automatic`, so its mere presence is the signal.
fn specified_visibility_specs() -> Vec<ModifierSpec> {
    ornament_specs(ArgumentSpec::named("visibility"))
}

/// `.ornament(visibility: .visible | .automatic, …)`.
fn visible_or_automatic_specs() -> Vec<ModifierSpec> {
    ornament_specs(ArgumentSpec::named("visibility").accepting([
        ".visible",
        "Visibility.visible",
        ".automatic",
        "Visibility.automatic",
    ]))
}
