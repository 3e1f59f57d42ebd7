//! Tree traversal and violation collection.
//!
//! One generic walker replaces the per-rule descent loops: a rule supplies
//! a decision function evaluated at every visited node, and the walker
//! turns the decisions into an ordered list of report sites (or a tally,
//! for threshold-style rules). Traversal is depth-first, left-to-right,
//! pre-order over an explicit work-list, so results are deterministic and
//! stack depth stays flat on pathological inputs.

use tracing::trace;

use crate::node::{Node, NodeId, Tree};
use crate::types::{Violation, ViolationTemplate};

/// Per-node outcome of a rule's decision function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Non-compliant: record a violation at this node and stop descending.
    ///
    /// Reporting at the coarsest matching node avoids duplicate nested
    /// reports. A node without an offset cannot be a report site; the
    /// walker searches its children instead.
    Report,
    /// Not the shape this rule targets: keep searching the children.
    Descend,
    /// Compliant target: the subtree needs no further inspection.
    Pass,
    /// Counting mode: add this node to the tally and stop descending.
    Count,
}

/// One recorded report site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    /// The reported node.
    pub node: NodeId,
    /// The node's byte offset.
    pub offset: usize,
}

/// Everything one traversal produced.
#[derive(Debug, Default)]
pub struct Walk {
    /// Report sites in pre-order.
    pub sites: Vec<Site>,
    /// Number of nodes the policy counted.
    pub count: usize,
}

impl Walk {
    /// Materializes the report sites as violations via `template`.
    #[must_use]
    pub fn into_violations(self, template: &ViolationTemplate) -> Vec<Violation> {
        self.sites
            .iter()
            .map(|site| template.at(site.offset))
            .collect()
    }
}

/// Runs one traversal from `from` and returns the sites and tally the
/// decision function produced.
pub fn walk<D>(tree: &Tree, from: NodeId, mut decide: D) -> Walk
where
    D: FnMut(&Tree, &Node) -> Decision,
{
    let mut result = Walk::default();
    let mut work = vec![from];
    while let Some(id) = work.pop() {
        let node = tree.node(id);
        match decide(tree, node) {
            Decision::Report => match node.offset() {
                Some(offset) => result.sites.push(Site { node: id, offset }),
                // No offset means no report site; descendants may still
                // qualify.
                None => schedule_children(node, &mut work),
            },
            Decision::Descend => schedule_children(node, &mut work),
            Decision::Pass => {}
            Decision::Count => result.count += 1,
        }
    }
    trace!(
        sites = result.sites.len(),
        count = result.count,
        "walk finished"
    );
    result
}

/// Runs one traversal and materializes the report sites as violations.
pub fn collect<D>(
    tree: &Tree,
    from: NodeId,
    decide: D,
    template: &ViolationTemplate,
) -> Vec<Violation>
where
    D: FnMut(&Tree, &Node) -> Decision,
{
    walk(tree, from, decide).into_violations(template)
}

/// Pushes children in reverse so the work-list pops them left-to-right.
fn schedule_children(node: &Node, work: &mut Vec<NodeId>) {
    for &child in node.children().iter().rev() {
        work.push(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::TreeBuilder;
    use crate::types::Severity;

    fn template() -> ViolationTemplate {
        ViolationTemplate::new("T000", "test-rule", Severity::Warning, "test message")
    }

    /// Root with two flagged leaves, the first nested one level deeper.
    fn two_site_tree() -> Tree {
        let mut builder = TreeBuilder::new(Node::structure("MyView").with_offset(0));
        let wrapper = builder.push_child(builder.root(), Node::call("Group").with_offset(5));
        builder.push_child(wrapper, Node::call("flagged").with_offset(10));
        builder.push_child(builder.root(), Node::call("flagged").with_offset(90));
        builder.finish()
    }

    fn flag_by_name(_: &Tree, node: &Node) -> Decision {
        if node.name() == Some("flagged") {
            Decision::Report
        } else {
            Decision::Descend
        }
    }

    #[test]
    fn sites_come_out_in_preorder() {
        let tree = two_site_tree();
        let walk = walk(&tree, tree.root(), flag_by_name);
        let offsets: Vec<usize> = walk.sites.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, [10, 90]);
    }

    #[test]
    fn traversal_is_deterministic() {
        let tree = two_site_tree();
        let first = walk(&tree, tree.root(), flag_by_name).into_violations(&template());
        let second = walk(&tree, tree.root(), flag_by_name).into_violations(&template());
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.offset, b.offset);
        }
    }

    #[test]
    fn pass_prunes_the_whole_subtree() {
        let mut builder = TreeBuilder::new(Node::structure("MyView").with_offset(0));
        let compliant = builder.push_child(builder.root(), Node::call("compliant").with_offset(4));
        builder.push_child(compliant, Node::call("flagged").with_offset(8));
        let tree = builder.finish();

        let walk = walk(&tree, tree.root(), |_, node| match node.name() {
            Some("compliant") => Decision::Pass,
            Some("flagged") => Decision::Report,
            _ => Decision::Descend,
        });
        assert!(walk.sites.is_empty());
    }

    #[test]
    fn report_without_offset_still_searches_children() {
        let mut builder = TreeBuilder::new(Node::structure("MyView").with_offset(0));
        // Offset-less node that the policy wants to report.
        let bare = builder.push_child(builder.root(), Node::call("flagged"));
        builder.push_child(bare, Node::call("flagged").with_offset(77));
        let tree = builder.finish();

        let walk = walk(&tree, tree.root(), flag_by_name);
        let offsets: Vec<usize> = walk.sites.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, [77]);
    }

    #[test]
    fn report_does_not_descend() {
        let mut builder = TreeBuilder::new(Node::structure("MyView").with_offset(0));
        let outer = builder.push_child(builder.root(), Node::call("flagged").with_offset(3));
        builder.push_child(outer, Node::call("flagged").with_offset(9));
        let tree = builder.finish();

        let walk = walk(&tree, tree.root(), flag_by_name);
        let offsets: Vec<usize> = walk.sites.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, [3]);
    }

    #[test]
    fn count_tallies_without_reporting() {
        let mut builder = TreeBuilder::new(Node::structure("MyView").with_offset(0));
        let group = builder.push_child(builder.root(), Node::call("Group").with_offset(2));
        builder.push_child(group, Node::call("item").with_offset(6));
        builder.push_child(builder.root(), Node::call("item").with_offset(40));
        let tree = builder.finish();

        let walk = walk(&tree, tree.root(), |_, node| {
            if node.name() == Some("item") {
                Decision::Count
            } else {
                Decision::Descend
            }
        });
        assert_eq!(walk.count, 2);
        assert!(walk.sites.is_empty());
    }

    #[test]
    fn counted_nodes_are_not_descended_into() {
        let mut builder = TreeBuilder::new(Node::structure("MyView").with_offset(0));
        let outer = builder.push_child(builder.root(), Node::call("item").with_offset(2));
        builder.push_child(outer, Node::call("item").with_offset(6));
        let tree = builder.finish();

        let walk = walk(&tree, tree.root(), |_, node| {
            if node.name() == Some("item") {
                Decision::Count
            } else {
                Decision::Descend
            }
        });
        assert_eq!(walk.count, 1);
    }

    #[test]
    fn collect_materializes_template_violations() {
        let tree = two_site_tree();
        let violations = collect(&tree, tree.root(), flag_by_name, &template());
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].code, "T000");
        assert_eq!(violations[0].offset, 10);
        assert_eq!(violations[0].message, "test message");
    }
}
