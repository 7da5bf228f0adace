//! Generic traversal engine
//!
//! The single lookup engine behind every typed accessor. It is parameterized
//! by the schema table in [`super::schema`] and by the two primitives the
//! tree owner exposes: child enumeration and ancestor ascent. It holds node
//! references only for the duration of a call and never caches results, so
//! lookups always reflect the current parse state.

use tracing::trace;

use super::ast::AstNode;
use super::schema::{self, Role};
use super::DartSyntaxNode;
use crate::error::SyntaxError;
use crate::result::Result;

/// Return the unique child filling `role`.
///
/// The schema must declare `role` as a child of the parent's kind. A missing
/// child is a fatal structural fault: in a well-formed tree the child is
/// always present, so absence means the host tree is malformed and the error
/// propagates to the caller rather than being papered over with a default.
pub fn required_child<T: AstNode>(parent: &DartSyntaxNode, role: Role) -> Result<T> {
    let spec = schema::role_spec(parent.kind(), role)
        .ok_or_else(|| SyntaxError::undeclared_role(parent.kind(), role))?;

    parent
        .children()
        .find(|c| c.kind() == spec.child)
        .and_then(T::cast)
        .ok_or_else(|| {
            trace!(parent = ?parent.kind(), ?role, "required child missing");
            SyntaxError::missing_required_child(parent.kind(), role)
        })
}

/// Return the child filling `role` if present.
///
/// Never fails: absence is a legal parse state for optional roles, and an
/// undeclared role simply has no matching children.
pub fn optional_child<T: AstNode>(parent: &DartSyntaxNode, role: Role) -> Option<T> {
    let spec = schema::role_spec(parent.kind(), role)?;
    parent
        .children()
        .find(|c| c.kind() == spec.child)
        .and_then(T::cast)
}

/// Return all children filling `role`, in source order.
///
/// The result is a snapshot, not a live view; re-query after any reparse.
/// A role may be declared with several child kinds (container members), in
/// which case all of them are collected.
pub fn child_list<T: AstNode>(parent: &DartSyntaxNode, role: Role) -> Vec<T> {
    let kinds: Vec<_> = schema::roles(parent.kind())
        .iter()
        .filter(|s| s.role == role)
        .map(|s| s.child)
        .collect();

    if kinds.is_empty() {
        return Vec::new();
    }

    parent
        .children()
        .filter(|c| kinds.contains(&c.kind()))
        .filter_map(T::cast)
        .collect()
}

/// Ascend from `node` to the nearest enclosing node castable to `T`.
///
/// The starting node itself is not considered.
pub fn ancestor<T: AstNode>(node: &DartSyntaxNode) -> Option<T> {
    node.ancestors().skip(1).find_map(T::cast)
}
