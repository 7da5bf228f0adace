//! Shared derived-name resolution
//!
//! Several node kinds share one naming convention: a dotted name like
//! `Point.origin` is stored as a sequence of `ComponentName` children, and
//! the declaration's simple name is the last component (`origin`); a
//! single-component declaration names itself. The rule lives here once so
//! every kind that follows the convention resolves names identically.

use super::ast::ComponentName;
use super::schema::Role;
use super::{support, DartSyntaxNode};

/// Resolve the simple name of a declaration-like node.
///
/// Returns the last `Name`-role child in source order, or `None` for kinds
/// without a declared `Name` role or nodes with no name components at all.
pub fn component_name(node: &DartSyntaxNode) -> Option<ComponentName> {
    support::child_list::<ComponentName>(node, Role::Name)
        .into_iter()
        .last()
}
