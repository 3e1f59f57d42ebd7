//! Rule requiring a focus shape and hover affordance for tap gestures.

use crate::common::is_view_root;
use viewlint_core::matcher;
use viewlint_core::walker::{self, Decision};
use viewlint_core::{
    ArgumentSpec, ModifierSpec, Node, Rule, Severity, Tree, Violation, ViolationTemplate,
};

/// Rule code for focus-shape.
pub const CODE: &str = "VL006";

/// Rule name for focus-shape.
pub const NAME: &str = "focus-shape";

/// Reports tappable elements without both a content shape and a hover
/// effect.
#[derive(Debug, Clone)]
pub struct FocusShape {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for FocusShape {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusShape {
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

impl Rule for FocusShape {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "A hover effect and focus shape should be provided when using onTapGesture"
    }

    fn check(&self, tree: &Tree) -> Vec<Violation> {
        if !is_view_root(tree) {
            return Vec::new();
        }
        let tap = tap_gesture_specs();
        let content_shape = content_shape_specs();
        let hover = hover_effect_specs();
        let template = ViolationTemplate::new(CODE, NAME, self.severity, self.description());
        walker::collect(
            tree,
            tree.root(),
            |_, node| decide(node, &tap, &content_shape, &hover),
            &template,
        )
    }
}

fn decide(
    node: &Node,
    tap: &[ModifierSpec],
    content_shape: &[ModifierSpec],
    hover: &[ModifierSpec],
) -> Decision {
    if !matcher::matches(node, tap) {
        return Decision::Descend;
    }
    if matcher::matches(node, content_shape) && matcher::matches(node, hover) {
        // Tappable and fully equipped; nested content needs no re-check.
        Decision::Pass
    } else {
        Decision::Report
    }
}

fn tap_gesture_specs() -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("onTapGesture")
        .argument(ArgumentSpec::named("count").optional())
        .argument(ArgumentSpec::named("perform").optional())]
}

fn content_shape_specs() -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("contentShape")
        .argument(ArgumentSpec::unnamed().optional())
        .argument(ArgumentSpec::unnamed().optional())
        .argument(ArgumentSpec::named("eoFill").optional())]
}

fn hover_effect_specs() -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("hoverEffect").argument(ArgumentSpec::unnamed().optional())]
}
