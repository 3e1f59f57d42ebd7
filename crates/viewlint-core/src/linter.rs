//! Linter orchestration: running registered rules over declaration trees.

use crate::config::Config;
use crate::node::Tree;
use crate::rule::{Rule, RuleBox};
use crate::types::{LintResult, Violation};

use tracing::{debug, info};

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    rules: Vec<RuleBox>,
    config: Option<Config>,
}

impl LinterBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the linter.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the linter.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds multiple boxed rules to the linter.
    #[must_use]
    pub fn rule_boxes<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the linter.
    #[must_use]
    pub fn build(self) -> Linter {
        Linter {
            rules: self.rules,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Runs registered rules over caller-supplied trees.
///
/// The linter owns no I/O: trees arrive from the external syntax-tree
/// builder, and the byte offsets in the result are resolved to source
/// locations by the surrounding tool. Use [`Linter::builder()`] to
/// construct an instance.
pub struct Linter {
    rules: Vec<RuleBox>,
    config: Config,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Lints a batch of trees and returns the combined result.
    #[must_use]
    pub fn lint(&self, trees: &[Tree]) -> LintResult {
        info!("Linting {} trees", trees.len());

        let mut result = LintResult::new();
        for tree in trees {
            result.violations.extend(self.lint_tree(tree));
            result.trees_checked += 1;
        }

        info!(
            "Analysis complete: {} violations in {} trees",
            result.violations.len(),
            result.trees_checked
        );

        result
    }

    /// Lints a single tree, returning violations ordered by offset.
    #[must_use]
    pub fn lint_tree(&self, tree: &Tree) -> Vec<Violation> {
        let mut violations = Vec::new();

        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }
            if rule.opt_in() && !self.config.is_rule_opted_in(rule.name()) {
                debug!("Skipping opt-in rule: {}", rule.name());
                continue;
            }

            let rule_violations = rule.check(tree);
            let rule_violations = self.apply_severity_override(rule.name(), rule_violations);
            violations.extend(rule_violations);
        }

        violations.sort_by(|a, b| a.offset.cmp(&b.offset).then_with(|| a.code.cmp(&b.code)));
        violations
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(
        &self,
        rule_name: &str,
        mut violations: Vec<Violation>,
    ) -> Vec<Violation> {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            for v in &mut violations {
                v.severity = severity;
            }
        }
        violations
    }
}
