//! Rule requiring rounded-rectangle buttons via stack-level modifiers on
//! vertical stacks.
//!
//! A bordered button style renders as a rounded rectangle by default, so a
//! compliant vertical stack carries the filled style at the stack level and
//! does not override it with a capsule border shape or a circle/rectangle
//! clip shape.

use crate::common::is_view_root;
use viewlint_core::matcher;
use viewlint_core::walker::{self, Decision};
use viewlint_core::{
    ArgumentSpec, ModifierSpec, Node, Rule, Severity, Tree, Violation, ViolationTemplate,
};

/// Rule code for button-shape-vstack-outer.
pub const CODE: &str = "VL004";

/// Rule name for button-shape-vstack-outer.
pub const NAME: &str = "button-shape-vstack-outer";

/// Reports vertical stacks of buttons without stack-level rounded-rectangle
/// shaping.
#[derive(Debug, Clone)]
pub struct ButtonShapeVstackOuter {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ButtonShapeVstackOuter {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonShapeVstackOuter {
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

impl Rule for ButtonShapeVstackOuter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Buttons in a VStack should be shaped like a rounded rectangle"
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
    let Some(name) = node.name() else {
        return Decision::Descend;
    };
    if !name.starts_with("VStack") {
        return Decision::Descend;
    }
    if matcher::matches(node, &filled_button_style_specs())
        && !matcher::matches(node, &capsule_border_shape_specs())
        && !matcher::matches(node, &circle_or_rectangle_clip_specs())
    {
        return Decision::Pass;
    }
    if contains_button(node, name) {
        Decision::Report
    } else {
        Decision::Pass
    }
}

fn contains_button(node: &Node, name: &str) -> bool {
    if name.contains("Button(") {
        return true;
    }
    matcher::single_unnamed_argument_of(node, "VStack")
        .is_some_and(|content| content.contains("Button("))
}

/// `.buttonStyle(_:)` receiving `.bordered` or `.borderedProminent`.
fn filled_button_style_specs() -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("buttonStyle").argument(ArgumentSpec::unnamed().accepting([
        ".bordered",
        "BorderedButtonStyle.bordered",
        ".borderedProminent",
        "BorderedButtonStyle.borderedProminent",
    ]))]
}

/// `.buttonBorderShape(.capsule)` overriding the rounded-rectangle default.
fn capsule_border_shape_specs() -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("buttonBorderShape")
        .argument(ArgumentSpec::unnamed().accepting([".capsule", "ButtonBorderShape.capsule"]))]
}

/// `.clipShape(Circle())` or `.clipShape(Rectangle())`.
fn circle_or_rectangle_clip_specs() -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("clipShape")
        .argument(ArgumentSpec::unnamed().accepting(["Circle()", "Rectangle()"]))]
}
