//! Tree construction boundary
//!
//! The accessor layer never creates, mutates, or destroys nodes; trees come
//! from an external owner. This thin wrapper over Rowan's green-node builder
//! is that boundary: hosts (and the test suite) assemble green trees through
//! it, and the accessor layer only ever sees the finished red tree.

use rowan::GreenNodeBuilder;

use super::{DartSyntaxKind, DartSyntaxNode};

/// Builder for Dart syntax trees.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    inner: GreenNodeBuilder<'static>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a composite node; close it with [`TreeBuilder::finish_node`].
    pub fn start_node(&mut self, kind: DartSyntaxKind) {
        self.inner.start_node(kind.into());
    }

    /// Emit a token into the currently open node.
    pub fn token(&mut self, kind: DartSyntaxKind, text: &str) {
        self.inner.token(kind.into(), text);
    }

    pub fn finish_node(&mut self) {
        self.inner.finish_node();
    }

    /// Finish the tree and hand back the root of the red view.
    pub fn finish(self) -> DartSyntaxNode {
        DartSyntaxNode::new_root(self.inner.finish())
    }
}
