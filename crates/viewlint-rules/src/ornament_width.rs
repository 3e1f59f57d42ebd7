//! Advisory rule flagging ornaments and toolbars for a width audit.
//!
//! Opt-in: the engine cannot measure rendered widths, so every attachment
//! point is flagged for the author to confirm the ornament stays within
//! the window it belongs to.

use crate::common::is_view_root;
use viewlint_core::matcher;
use viewlint_core::walker::{self, Decision};
use viewlint_core::{
    ArgumentSpec, ModifierSpec, Rule, Severity, Tree, Violation, ViolationTemplate,
};

/// Rule code for ornament-width.
pub const CODE: &str = "VL012";

/// Rule name for ornament-width.
pub const NAME: &str = "ornament-width";

/// Reports every `ornament` or `toolbar` modifier for a manual width check.
#[derive(Debug, Clone)]
pub struct OrnamentWidth {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for OrnamentWidth {
    fn default() -> Self {
        Self::new()
    }
}

impl OrnamentWidth {
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

impl Rule for OrnamentWidth {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "The width of an ornament should not exceed the window it is attached to"
    }

    fn opt_in(&self) -> bool {
        true
    }

    fn check(&self, tree: &Tree) -> Vec<Violation> {
        if !is_view_root(tree) {
            return Vec::new();
        }
        let specs = ornament_or_toolbar_specs();
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

fn ornament_or_toolbar_specs() -> Vec<ModifierSpec> {
    vec![
        ModifierSpec::new("ornament")
            .argument(ArgumentSpec::named("visibility").optional())
            .argument(ArgumentSpec::named("attachmentAnchor"))
            .argument(ArgumentSpec::named("contentAlignment").optional())
            .argument(ArgumentSpec::named("ornament").optional()),
        ModifierSpec::new("toolbar").argument(ArgumentSpec::named("content").optional()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewlint_core::{Node, TreeBuilder};

    fn view_with_leaf(signature: &str) -> Tree {
        let mut builder =
            TreeBuilder::new(Node::structure("MyView").with_offset(0).with_inherited("View"));
        builder.push_child(builder.root(), Node::call(signature).with_offset(19));
        builder.finish()
    }

    fn check(tree: &Tree) -> Vec<Violation> {
        OrnamentWidth::new().check(tree)
    }

    #[test]
    fn rule_is_opt_in() {
        assert!(OrnamentWidth::new().opt_in());
    }

    #[test]
    fn ornament_reports() {
        let tree = view_with_leaf(
            "Text(\"x\").ornament(attachmentAnchor: .scene(.bottom)) { Controls() }",
        );
        assert_eq!(check(&tree).len(), 1);
    }

    #[test]
    fn toolbar_reports() {
        let tree = view_with_leaf("Text(\"x\").toolbar { Item() }");
        assert_eq!(check(&tree).len(), 1);
    }

    #[test]
    fn plain_content_is_compliant() {
        let tree = view_with_leaf("Text(\"x\").padding()");
        assert!(check(&tree).is_empty());
    }
}
