//! Rule trait for defining style rules.

use crate::node::Tree;
use crate::types::{Severity, Violation};

/// A style rule over one declaration tree.
///
/// A rule composes an entry predicate (which root declarations qualify), a
/// set of modifier specifications, and a walker policy, then returns the
/// violations one traversal produced. Rules own no mutable state; every
/// invocation is pure given the same input tree.
///
/// # Example
///
/// ```ignore
/// use viewlint_core::{walker, Decision, Rule, Tree, Violation, ViolationTemplate};
///
/// pub struct NoHiddenOrnaments;
///
/// impl Rule for NoHiddenOrnaments {
///     fn name(&self) -> &'static str { "no-hidden-ornaments" }
///     fn code(&self) -> &'static str { "VL011" }
///
///     fn check(&self, tree: &Tree) -> Vec<Violation> {
///         let template = ViolationTemplate::new(
///             self.code(), self.name(), self.default_severity(), self.description(),
///         );
///         walker::collect(tree, tree.root(), |_, node| decide(node), &template)
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g. "focus-shape").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g. "VL006").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Whether this rule must be explicitly enabled via configuration.
    ///
    /// Opt-in rules are advisory audits that would be noisy by default;
    /// the linter skips them unless the configuration enables them.
    fn opt_in(&self) -> bool {
        false
    }

    /// Checks a single declaration tree and returns any violations found.
    fn check(&self, tree: &Tree) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Node, TreeBuilder};

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, tree: &Tree) -> Vec<Violation> {
            let offset = tree.node(tree.root()).offset().unwrap_or(0);
            vec![Violation::new(
                self.code(),
                self.name(),
                self.default_severity(),
                offset,
                "Test violation",
            )]
        }
    }

    #[test]
    fn rule_trait_defaults() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Warning);
        assert!(!rule.opt_in());
    }

    #[test]
    fn check_reports_at_root_offset() {
        let tree = TreeBuilder::new(Node::structure("MyView").with_offset(12)).finish();
        let violations = TestRule.check(&tree);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].offset, 12);
    }
}
