//! End-to-end tests wiring the matcher, walker, and linter together over
//! realistic container/modifier trees.

use viewlint_core::matcher;
use viewlint_core::walker::{self, Decision};
use viewlint_core::{
    ArgumentSpec, ModifierSpec, Node, NodeKind, Rule, Severity, Tree, TreeBuilder, Violation,
    ViolationTemplate,
};

/// Shape contract used throughout: a `Stack` container must carry
/// `shapeModifier` with the accepted value `"pill"`.
fn shape_specs() -> Vec<ModifierSpec> {
    vec![ModifierSpec::new("shapeModifier")
        .argument(ArgumentSpec::unnamed().accepting(["\"pill\""]))]
}

fn stack_policy(node: &Node) -> Decision {
    let Some(name) = node.name() else {
        return Decision::Descend;
    };
    if !name.starts_with("Stack") {
        return Decision::Descend;
    }
    if matcher::matches(node, &shape_specs()) {
        Decision::Pass
    } else {
        Decision::Report
    }
}

fn template() -> ViolationTemplate {
    ViolationTemplate::new(
        "IT001",
        "stack-shape",
        Severity::Warning,
        "Stacks of items must apply the shape modifier at the stack level",
    )
}

/// A view declaration whose body holds one stack with two items.
fn view_with_stack(stack_signature: &str) -> Tree {
    let mut builder = TreeBuilder::new(
        Node::structure("ContentView").with_offset(0).with_inherited("View"),
    );
    let body = builder.push_child(builder.root(), Node::anonymous());
    let stack = builder.push_child(body, Node::call(stack_signature).with_offset(64));
    builder.push_child(stack, Node::call("Item(\"one\")").with_offset(80));
    builder.push_child(stack, Node::call("Item(\"two\")").with_offset(110));
    builder.finish()
}

#[test]
fn compliant_stack_passes_without_violations() {
    let tree = view_with_stack("Stack { Item(\"one\") Item(\"two\") }.shapeModifier(\"pill\")");
    let violations = walker::collect(&tree, tree.root(), |_, n| stack_policy(n), &template());
    assert!(violations.is_empty());
}

#[test]
fn noncompliant_stack_reports_once_at_the_container() {
    let tree = view_with_stack("Stack { Item(\"one\") Item(\"two\") }");
    let violations = walker::collect(&tree, tree.root(), |_, n| stack_policy(n), &template());
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].offset, 64);
}

#[test]
fn wrong_accepted_value_still_reports() {
    let tree = view_with_stack("Stack { Item(\"one\") }.shapeModifier(\"square\")");
    let violations = walker::collect(&tree, tree.root(), |_, n| stack_policy(n), &template());
    assert_eq!(violations.len(), 1);
}

#[test]
fn collect_is_idempotent_over_an_immutable_tree() {
    let tree = view_with_stack("Stack { Item(\"one\") Item(\"two\") }");
    let first = walker::collect(&tree, tree.root(), |_, n| stack_policy(n), &template());
    let second = walker::collect(&tree, tree.root(), |_, n| stack_policy(n), &template());

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.offset, b.offset);
        assert_eq!(a.code, b.code);
    }
}

#[test]
fn sibling_reports_keep_source_order() {
    let mut builder = TreeBuilder::new(
        Node::structure("ContentView").with_offset(0).with_inherited("View"),
    );
    builder.push_child(builder.root(), Node::call("Stack { Item(\"a\") }").with_offset(10));
    builder.push_child(builder.root(), Node::call("Stack { Item(\"b\") }").with_offset(200));
    let tree = builder.finish();

    let violations = walker::collect(&tree, tree.root(), |_, n| stack_policy(n), &template());
    let offsets: Vec<usize> = violations.iter().map(|v| v.offset).collect();
    assert_eq!(offsets, [10, 200]);
}

#[test]
fn passing_container_suppresses_descendant_reports() {
    // The inner stack would report in isolation; the compliant outer stack
    // prunes the subtree first.
    let mut builder = TreeBuilder::new(
        Node::structure("ContentView").with_offset(0).with_inherited("View"),
    );
    let outer = builder.push_child(
        builder.root(),
        Node::call("Stack { Stack { Item(\"x\") } }.shapeModifier(\"pill\")").with_offset(16),
    );
    builder.push_child(outer, Node::call("Stack { Item(\"x\") }").with_offset(30));
    let tree = builder.finish();

    let violations = walker::collect(&tree, tree.root(), |_, n| stack_policy(n), &template());
    assert!(violations.is_empty());
}

#[test]
fn offsetless_nodes_never_report_but_descendants_do() {
    let mut builder = TreeBuilder::new(
        Node::structure("ContentView").with_offset(0).with_inherited("View"),
    );
    // The offset-less stack qualifies for Report but cannot be a site.
    let bare = builder.push_child(builder.root(), Node::call("Stack { Item(\"a\") }"));
    builder.push_child(bare, Node::call("Stack { Item(\"b\") }").with_offset(44));
    let tree = builder.finish();

    let violations = walker::collect(&tree, tree.root(), |_, n| stack_policy(n), &template());
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].offset, 44);
}

#[test]
fn threshold_walk_reports_once_at_the_root() {
    let mut builder = TreeBuilder::new(
        Node::structure("ContentView").with_offset(0).with_inherited("View"),
    );
    let group = builder.push_child(builder.root(), Node::anonymous());
    for i in 0..9 {
        // Spread the items over nesting levels; depth must not matter.
        let parent = if i % 2 == 0 { group } else { builder.root() };
        let wrapper = builder.push_child(parent, Node::call("Wrapper").with_offset(i * 10));
        builder.push_child(
            wrapper,
            Node::call("Page().tabItem { Label(\"p\", systemImage: \"s\") }").with_offset(i * 10 + 5),
        );
    }
    let tree = builder.finish();

    let tab_item = vec![ModifierSpec::new("tabItem")
        .argument(ArgumentSpec::unnamed().optional())];
    let count = |tree: &Tree| {
        walker::walk(tree, tree.root(), |_, node| {
            if matcher::matches(node, &tab_item) {
                Decision::Count
            } else {
                Decision::Descend
            }
        })
        .count
    };

    assert_eq!(count(&tree), 9);

    let limit = 8;
    let mut violations = Vec::new();
    if count(&tree) > limit {
        if let Some(offset) = tree.node(tree.root()).offset() {
            violations.push(template().at(offset));
        }
    }
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].offset, 0);
}

/// Full linter round-trip with a typical rule implementation.
struct StackShapeRule;

impl Rule for StackShapeRule {
    fn name(&self) -> &'static str {
        "stack-shape"
    }
    fn code(&self) -> &'static str {
        "IT001"
    }
    fn description(&self) -> &'static str {
        "Stacks of items must apply the shape modifier at the stack level"
    }

    fn check(&self, tree: &Tree) -> Vec<Violation> {
        let root = tree.node(tree.root());
        if root.kind() != NodeKind::Structure || !root.inherits("View") {
            return Vec::new();
        }
        walker::collect(tree, tree.root(), |_, n| stack_policy(n), &template())
    }
}

#[test]
fn linter_runs_rules_and_orders_by_offset() {
    let trees = vec![
        view_with_stack("Stack { Item(\"one\") }"),
        view_with_stack("Stack { Item(\"one\") }.shapeModifier(\"pill\")"),
    ];
    let linter = viewlint_core::Linter::builder().rule(StackShapeRule).build();
    let result = linter.lint(&trees);

    assert_eq!(result.trees_checked, 2);
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].rule, "stack-shape");
}

#[test]
fn non_view_roots_are_filtered_by_the_rule_predicate() {
    let mut builder = TreeBuilder::new(Node::structure("Helper").with_offset(0));
    builder.push_child(builder.root(), Node::call("Stack { Item(\"one\") }").with_offset(12));
    let tree = builder.finish();

    let linter = viewlint_core::Linter::builder().rule(StackShapeRule).build();
    let result = linter.lint(&[tree]);
    assert!(result.violations.is_empty());
}
