//! Rule reserving the system toggle look for actual toggles.
//!
//! Black text on a white background is the platform's visual signal for a
//! toggled-on control; a plain component styled that way reads as a toggle
//! it is not.

use crate::common::is_view_root;
use viewlint_core::matcher;
use viewlint_core::walker::{self, Decision};
use viewlint_core::{
    ArgumentSpec, ModifierSpec, Node, Rule, Severity, Tree, Violation, ViolationTemplate,
};

/// Rule code for toggle-button-style.
pub const CODE: &str = "VL016";

/// Rule name for toggle-button-style.
pub const NAME: &str = "toggle-button-style";

/// Reports components styled with the system's toggle look (white
/// background, black foreground).
#[derive(Debug, Clone)]
pub struct ToggleButtonStyle {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ToggleButtonStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl ToggleButtonStyle {
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

impl Rule for ToggleButtonStyle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Only use the system's toggle button style (white background, black foreground) for components with toggle functionality"
    }

    fn check(&self, tree: &Tree) -> Vec<Violation> {
        if !is_view_root(tree) {
            return Vec::new();
        }
        let template = ViolationTemplate::new(CODE, NAME, self.severity, self.description());
        walker::collect(
            tree,
            tree.root(),
            |_, node| {
                if has_black_foreground(node) && has_white_background(node) {
                    Decision::Report
                } else {
                    Decision::Descend
                }
            },
            &template,
        )
    }
}

const WHITE_OPTIONS: [&str; 4] = [
    "Color.white",
    ".white",
    "HierarchicalShapeStyle.primary",
    ".primary",
];

fn has_black_foreground(node: &Node) -> bool {
    let specs = vec![ModifierSpec::new("foregroundColor")
        .argument(ArgumentSpec::unnamed().accepting([".black", "Color.black"]))];
    matcher::matches(node, &specs)
}

fn has_white_background(node: &Node) -> bool {
    let specs = vec![
        ModifierSpec::new("background")
            .argument(ArgumentSpec::unnamed().accepting(WHITE_OPTIONS))
            .argument(ArgumentSpec::named("ignoresSafeAreaEdges").optional()),
        ModifierSpec::new("background")
            .argument(ArgumentSpec::unnamed().accepting(WHITE_OPTIONS).prefix_match())
            .argument(ArgumentSpec::named("in"))
            .argument(ArgumentSpec::named("fillStyle").optional()),
        ModifierSpec::new("tint").argument(ArgumentSpec::unnamed().accepting(WHITE_OPTIONS)),
    ];
    if matcher::matches(node, &specs) {
        return true;
    }

    // Content-closure form, e.g. `.background { Color.white }`.
    let Some(name) = node.name() else {
        return false;
    };
    if !name.contains(".background") {
        return false;
    }
    matcher::single_unnamed_argument_of(node, "background")
        .is_some_and(|content| WHITE_OPTIONS.iter().any(|option| content.contains(option)))
}
