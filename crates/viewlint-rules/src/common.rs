//! Shared rule-entry predicate.

use viewlint_core::{NodeKind, Tree};

/// Marker type a declaration must inherit to qualify as a UI view.
pub(crate) const VIEW_MARKER: &str = "View";

/// Returns true if the tree's root is a view declaration with content.
///
/// Declaration-scoped rules bail out early on anything else; traversal
/// rules that audit every occurrence (the visitor-style rules) skip this
/// gate.
pub(crate) fn is_view_root(tree: &Tree) -> bool {
    let root = tree.node(tree.root());
    root.kind() == NodeKind::Structure && root.inherits(VIEW_MARKER) && root.has_children()
}
