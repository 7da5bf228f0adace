//! Concrete syntax tree for the Dart constructor-declaration subset
//!
//! Lossless syntax trees built on Rowan's green/red pattern:
//!
//! - **Green tree**: immutable, position-independent storage, owned by the
//!   host that built it. Cheap to clone (Arc internally).
//! - **Red tree**: on-demand view with parent pointers, used by the typed
//!   accessor layer for navigation.
//!
//! This crate does not parse. Trees are produced by an external owner
//! through [`TreeBuilder`] and queried here; the accessor layer holds only
//! borrowed node references scoped to each call and caches nothing, so a
//! reparse by the owner invalidates nothing on this side.

mod builder;
mod language;
mod syntax_kind;

pub mod ast;
pub mod derived;
pub mod schema;
pub mod support;
pub mod visitor;

pub use builder::TreeBuilder;
pub use language::DartLanguage;
pub use syntax_kind::DartSyntaxKind;

/// A node in the red tree.
pub type DartSyntaxNode = rowan::SyntaxNode<DartLanguage>;
/// A token in the red tree.
pub type DartSyntaxToken = rowan::SyntaxToken<DartLanguage>;
/// Node-or-token element.
pub type DartSyntaxElement = rowan::SyntaxElement<DartLanguage>;


#[cfg(test)]
mod ast_tests;
