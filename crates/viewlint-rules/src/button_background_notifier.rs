//! Advisory rule flagging every button for a background audit.
//!
//! Opt-in: whether a button needs a light or glass-material background
//! depends on what it floats over, which only the author can judge. The
//! rule flags each occurrence so the backgrounds get reviewed once.

use viewlint_core::matcher;
use viewlint_core::walker::{self, Decision};
use viewlint_core::{Node, Rule, Severity, Tree, Violation, ViolationTemplate};

/// Rule code for button-background-notifier.
pub const CODE: &str = "VL001";

/// Rule name for button-background-notifier.
pub const NAME: &str = "button-background-notifier";

/// Reports every button occurrence for a manual background check.
#[derive(Debug, Clone)]
pub struct ButtonBackgroundNotifier {
    /// Custom severity.
    pub severity: Severity,
}

impl Default for ButtonBackgroundNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonBackgroundNotifier {
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

impl Rule for ButtonBackgroundNotifier {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Provide a discernible, contrasting background shape and fill: a light background on glass, a glass material background in space"
    }

    fn opt_in(&self) -> bool {
        true
    }

    fn check(&self, tree: &Tree) -> Vec<Violation> {
        let template = ViolationTemplate::new(CODE, NAME, self.severity, self.description());
        walker::collect(
            tree,
            tree.root(),
            |_, node| {
                if heads_a_button(node) {
                    Decision::Report
                } else {
                    Decision::Descend
                }
            },
            &template,
        )
    }
}

fn heads_a_button(node: &Node) -> bool {
    let Some(name) = node.name() else {
        return false;
    };
    matcher::invocations(name)
        .first()
        .is_some_and(|invocation| invocation.name == "Button")
}
