//! Rule requiring pill-shaped buttons via stack-level modifiers on
//! horizontal stacks.
//!
//! The shape modifiers have to be applied outside of the stack so every
//! button in it picks them up; per-button modifiers inside the stack do not
//! satisfy this rule.

use crate::common::is_view_root;
use viewlint_core::matcher;
use viewlint_core::walker::{self, Decision};
use viewlint_core::{
    ArgumentSpec, ModifierSpec, Node, Rule, Severity, Tree, Violation, ViolationTemplate,
};

/// Rule code for button-shape-hstack-outer.
pub const CODE: &str = "VL003";

/// Rule name for button-shape-hstack-outer.
pub const NAME: &str = "button-shape-hstack-outer";

/// Reports horizontal stacks of buttons without stack-level pill shaping.
#[derive(Debug, Clone)]
pub struct ButtonShapeHstackOuter {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ButtonShapeHstackOuter {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonShapeHstackOuter {
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

impl Rule for ButtonShapeHstackOuter {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Buttons in an HStack should be pill-shaped; define the shape outside of the HStack for all buttons"
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
    if !name.starts_with("HStack") {
        return Decision::Descend;
    }
    if matcher::matches(node, &filled_button_style_specs())
        && (matcher::matches(node, &capsule_border_shape_specs())
            || matcher::matches(node, &capsule_clip_shape_specs()))
    {
        return Decision::Pass;
    }
    if contains_button(node, name) {
        Decision::Report
    } else {
        // Stack without buttons; the shape contract does not apply.
        Decision::Pass
    }
}

fn contains_button(node: &Node, name: &str) -> bool {
    if name.contains("Button(") {
        return true;
    }
    matcher::single_unnamed_argument_of(node, "HStack")
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

/// `.buttonBorderShape(.capsule)`.
fn capsule_border_shape_specs() -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("buttonBorderShape")
        .argument(ArgumentSpec::unnamed().accepting([".capsule", "ButtonBorderShape.capsule"]))]
}

/// `.clipShape(Capsule())`.
fn capsule_clip_shape_specs() -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("clipShape").argument(ArgumentSpec::unnamed().accepting(["Capsule()"]))]
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewlint_core::{Node, TreeBuilder};

    /// View root holding one stack node with two button children, as the
    /// tree builder renders it.
    fn view_with_stack(stack_signature: &str) -> Tree {
        let mut builder =
            TreeBuilder::new(Node::structure("MyView").with_offset(0).with_inherited("View"));
        let stack = builder.push_child(builder.root(), Node::call(stack_signature).with_offset(36));
        builder.push_child(stack, Node::call("Button(\"one\") {}").with_offset(50));
        builder.push_child(stack, Node::call("Button(\"two\") {}").with_offset(80));
        builder.finish()
    }

    fn check(tree: &Tree) -> Vec<Violation> {
        ButtonShapeHstackOuter::new().check(tree)
    }

    #[test]
    fn outer_border_shape_is_compliant() {
        let tree = view_with_stack(
            "HStack {\n    Button(\"one\") {}\n    Button(\"two\") {}\n}\n.buttonStyle(.bordered)\n.buttonBorderShape(.capsule)",
        );
        assert!(check(&tree).is_empty());
    }

    #[test]
    fn outer_clip_shape_is_compliant() {
        let tree = view_with_stack(
            "HStack {\n    Button(\"one\") {}\n    Button(\"two\") {}\n}\n.buttonStyle(.borderedProminent)\n.clipShape(Capsule())",
        );
        assert!(check(&tree).is_empty());
    }

    #[test]
    fn unshaped_button_stack_reports_once_at_the_stack() {
        let tree = view_with_stack("HStack {\n    Button(\"one\") {}\n    Button(\"two\") {}\n}");
        let violations = check(&tree);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].offset, 36);
    }

    #[test]
    fn style_without_shape_triggers() {
        let tree = view_with_stack(
            "HStack {\n    Button(\"one\") {}\n    Button(\"two\") {}\n}\n.buttonStyle(.bordered)",
        );
        assert_eq!(check(&tree).len(), 1);
    }

    #[test]
    fn shape_without_filled_style_triggers() {
        let tree = view_with_stack(
            "HStack {\n    Button(\"one\") {}\n    Button(\"two\") {}\n}\n.buttonBorderShape(.capsule)",
        );
        assert_eq!(check(&tree).len(), 1);
    }

    #[test]
    fn stack_without_buttons_is_ignored() {
        let mut builder =
            TreeBuilder::new(Node::structure("MyView").with_offset(0).with_inherited("View"));
        let stack = builder.push_child(
            builder.root(),
            Node::call("HStack { Text(\"a\") Text(\"b\") }").with_offset(12),
        );
        builder.push_child(stack, Node::call("Text(\"a\")").with_offset(20));
        builder.push_child(stack, Node::call("Text(\"b\")").with_offset(30));
        assert!(check(&builder.finish()).is_empty());
    }

    #[test]
    fn vertical_stacks_are_out_of_scope() {
        let tree = view_with_stack("VStack {\n    Button(\"one\") {}\n}");
        // The VStack node descends; its button children are not HStacks
        // either, so nothing reports.
        assert!(check(&tree).is_empty());
    }
}
