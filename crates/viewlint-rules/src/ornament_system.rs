//! Advisory rule flagging every ornament.
//!
//! Opt-in: helps investigating whether a system-provided toolbar or tab
//! bar could be used instead, which the platform guidelines prefer.

use crate::common::is_view_root;
use viewlint_core::matcher;
use viewlint_core::walker::{self, Decision};
use viewlint_core::{
    ArgumentSpec, ModifierSpec, Rule, Severity, Tree, Violation, ViolationTemplate,
};

/// Rule code for ornament-system.
pub const CODE: &str = "VL010";

/// Rule name for ornament-system.
pub const NAME: &str = "ornament-system";

/// Reports every `ornament` modifier for a manual review.
#[derive(Debug, Clone)]
pub struct OrnamentSystem {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for OrnamentSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl OrnamentSystem {
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

impl Rule for OrnamentSystem {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Check whether a system-provided toolbar or tab bar can be used instead of an ornament"
    }

    fn opt_in(&self) -> bool {
        true
    }

    fn check(&self, tree: &Tree) -> Vec<Violation> {
        if !is_view_root(tree) {
            return Vec::new();
        }
        let specs = ornament_specs();
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

fn ornament_specs() -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("ornament")
        .argument(ArgumentSpec::named("visibility").optional())
        .argument(ArgumentSpec::named("attachmentAnchor"))
        .argument(ArgumentSpec::named("contentAlignment").optional())
        .argument(ArgumentSpec::named("ornament").optional())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewlint_core::{Node, TreeBuilder};

    fn view_with_leaf(signature: &str) -> Tree {
        let mut builder =
            TreeBuilder::new(Node::structure("MyView").with_offset(0).with_inherited("View"));
        builder.push_child(builder.root(), Node::call(signature).with_offset(27));
        builder.finish()
    }

    fn check(tree: &Tree) -> Vec<Violation> {
        OrnamentSystem::new().check(tree)
    }

    #[test]
    fn rule_is_opt_in() {
        assert!(OrnamentSystem::new().opt_in());
    }

    #[test]
    fn ornament_reports() {
        let tree = view_with_leaf(
            "Text(\"x\").ornament(attachmentAnchor: .scene(.bottom)) { Controls() }",
        );
        let violations = check(&tree);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].offset, 27);
    }

    #[test]
    fn ornament_with_visibility_reports() {
        let tree = view_with_leaf(
            "Text(\"x\").ornament(visibility: .visible, attachmentAnchor: .scene(.bottom)) { Controls() }",
        );
        assert_eq!(check(&tree).len(), 1);
    }

    #[test]
    fn toolbar_is_not_an_ornament_here() {
        let tree = view_with_leaf("Text(\"x\").toolbar { Item() }");
        assert!(check(&tree).is_empty());
    }
}
