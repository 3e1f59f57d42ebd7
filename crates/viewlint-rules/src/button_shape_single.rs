//! Advisory rule for free-standing buttons that are neither circular nor
//! pill-shaped.
//!
//! Opt-in: a button inside a stack is legitimately shaped at the stack
//! level, which this rule cannot see from the button itself.

use crate::common::is_view_root;
use viewlint_core::matcher;
use viewlint_core::walker::{self, Decision};
use viewlint_core::{
    ArgumentSpec, ModifierSpec, Node, Rule, Severity, Tree, Violation, ViolationTemplate,
};

/// Rule code for button-shape-single.
pub const CODE: &str = "VL002";

/// Rule name for button-shape-single.
pub const NAME: &str = "button-shape-single";

/// Reports buttons without a capsule border shape or a capsule/circle clip
/// shape.
#[derive(Debug, Clone)]
pub struct ButtonShapeSingle {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ButtonShapeSingle {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonShapeSingle {
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

impl Rule for ButtonShapeSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "A button that is not stacked should generally be circular or pill-shaped; ignore this warning if the button appears in a stack"
    }

    fn opt_in(&self) -> bool {
        true
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
    if !heads_a_button(node) {
        return Decision::Descend;
    }
    if has_capsule_border_shape(node) || matcher::matches(node, &capsule_or_circle_clip_specs()) {
        Decision::Pass
    } else {
        Decision::Report
    }
}

/// True if the node's own invocation (not nested content) is a button.
fn heads_a_button(node: &Node) -> bool {
    let Some(name) = node.name() else {
        return false;
    };
    matcher::invocations(name)
        .first()
        .is_some_and(|invocation| invocation.name.contains("Button"))
}

/// Capsule border shape only counts together with a filled button style;
/// the border shape is invisible on a borderless button.
fn has_capsule_border_shape(node: &Node) -> bool {
    matcher::matches(node, &filled_button_style_specs())
        && matcher::matches(node, &capsule_border_shape_specs())
}

fn filled_button_style_specs() -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("buttonStyle").argument(ArgumentSpec::unnamed().accepting([
        ".bordered",
        "BorderedButtonStyle.bordered",
        ".borderedProminent",
        "BorderedButtonStyle.borderedProminent",
    ]))]
}

fn capsule_border_shape_specs() -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("buttonBorderShape")
        .argument(ArgumentSpec::unnamed().accepting([".capsule", "ButtonBorderShape.capsule"]))]
}

fn capsule_or_circle_clip_specs() -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("clipShape").argument(ArgumentSpec::unnamed().accepting([
        ".capsule",
        "Capsule()",
        ".circle",
        "Circle()",
    ]))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewlint_core::{Node, TreeBuilder};

    fn view_with_leaf(signature: &str) -> Tree {
        let mut builder =
            TreeBuilder::new(Node::structure("MyView").with_offset(0).with_inherited("View"));
        builder.push_child(builder.root(), Node::call(signature).with_offset(61));
        builder.finish()
    }

    fn check(tree: &Tree) -> Vec<Violation> {
        ButtonShapeSingle::new().check(tree)
    }

    #[test]
    fn rule_is_opt_in() {
        assert!(ButtonShapeSingle::new().opt_in());
    }

    #[test]
    fn pill_shaped_button_is_compliant() {
        let tree = view_with_leaf(
            "Button(\"Go\") {}.buttonStyle(.bordered).buttonBorderShape(.capsule)",
        );
        assert!(check(&tree).is_empty());
    }

    #[test]
    fn circle_clipped_button_is_compliant() {
        let tree = view_with_leaf("Button(\"Go\") {}.clipShape(Circle())");
        assert!(check(&tree).is_empty());
    }

    #[test]
    fn bare_button_triggers() {
        let tree = view_with_leaf("Button(\"Go\") {}");
        let violations = check(&tree);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].offset, 61);
    }

    #[test]
    fn border_shape_without_filled_style_triggers() {
        let tree = view_with_leaf("Button(\"Go\") {}.buttonBorderShape(.capsule)");
        assert_eq!(check(&tree).len(), 1);
    }

    #[test]
    fn filled_style_without_border_shape_triggers() {
        let tree = view_with_leaf("Button(\"Go\") {}.buttonStyle(.bordered)");
        assert_eq!(check(&tree).len(), 1);
    }

    #[test]
    fn stack_heads_are_searched_not_reported() {
        // The stack node itself must not be mistaken for a button; the
        // nested button node still reports.
        let mut builder =
            TreeBuilder::new(Node::structure("MyView").with_offset(0).with_inherited("View"));
        let stack = builder.push_child(
            builder.root(),
            Node::call("VStack { Button(\"Go\") {} }").with_offset(10),
        );
        builder.push_child(stack, Node::call("Button(\"Go\") {}").with_offset(25));
        let violations = check(&builder.finish());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].offset, 25);
    }
}
