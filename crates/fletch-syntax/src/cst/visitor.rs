//! Visitor dispatch over typed nodes
//!
//! The node kinds form a closed set, so dispatch is a tagged union plus a
//! single visitor trait with one method per kind. Every per-kind method
//! defaults to the generic [`DartVisitor::visit_node`] fallback, which keeps
//! the host convention of falling back to a generic visitor when the caller
//! does not handle a specific kind.

use super::ast::{
    AstNode, ClassBody, ClassDeclaration, CompilationUnit, ComponentName,
    FactoryConstructorDeclaration, FormalParameter, FormalParameterList, FunctionBody,
    Initializers, Metadata, NamedConstructorDeclaration, Redirection, StringLiteralExpression,
};
use super::DartSyntaxNode;

/// Tagged union over every typed node kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DartNode {
    CompilationUnit(CompilationUnit),
    ClassDeclaration(ClassDeclaration),
    ClassBody(ClassBody),
    NamedConstructorDeclaration(NamedConstructorDeclaration),
    FactoryConstructorDeclaration(FactoryConstructorDeclaration),
    ComponentName(ComponentName),
    FormalParameterList(FormalParameterList),
    FormalParameter(FormalParameter),
    FunctionBody(FunctionBody),
    Initializers(Initializers),
    Redirection(Redirection),
    Metadata(Metadata),
    StringLiteralExpression(StringLiteralExpression),
}

impl DartNode {
    pub fn cast(node: DartSyntaxNode) -> Option<Self> {
        use super::DartSyntaxKind as K;

        match node.kind() {
            K::CompilationUnit => CompilationUnit::cast(node).map(DartNode::CompilationUnit),
            K::ClassDeclaration => ClassDeclaration::cast(node).map(DartNode::ClassDeclaration),
            K::ClassBody => ClassBody::cast(node).map(DartNode::ClassBody),
            K::NamedConstructorDeclaration => {
                NamedConstructorDeclaration::cast(node).map(DartNode::NamedConstructorDeclaration)
            }
            K::FactoryConstructorDeclaration => FactoryConstructorDeclaration::cast(node)
                .map(DartNode::FactoryConstructorDeclaration),
            K::ComponentName => ComponentName::cast(node).map(DartNode::ComponentName),
            K::FormalParameterList => {
                FormalParameterList::cast(node).map(DartNode::FormalParameterList)
            }
            K::FormalParameter => FormalParameter::cast(node).map(DartNode::FormalParameter),
            K::FunctionBody => FunctionBody::cast(node).map(DartNode::FunctionBody),
            K::Initializers => Initializers::cast(node).map(DartNode::Initializers),
            K::Redirection => Redirection::cast(node).map(DartNode::Redirection),
            K::Metadata => Metadata::cast(node).map(DartNode::Metadata),
            K::StringLiteralExpression => {
                StringLiteralExpression::cast(node).map(DartNode::StringLiteralExpression)
            }
            _ => None,
        }
    }

    pub fn syntax(&self) -> &DartSyntaxNode {
        match self {
            DartNode::CompilationUnit(n) => n.syntax(),
            DartNode::ClassDeclaration(n) => n.syntax(),
            DartNode::ClassBody(n) => n.syntax(),
            DartNode::NamedConstructorDeclaration(n) => n.syntax(),
            DartNode::FactoryConstructorDeclaration(n) => n.syntax(),
            DartNode::ComponentName(n) => n.syntax(),
            DartNode::FormalParameterList(n) => n.syntax(),
            DartNode::FormalParameter(n) => n.syntax(),
            DartNode::FunctionBody(n) => n.syntax(),
            DartNode::Initializers(n) => n.syntax(),
            DartNode::Redirection(n) => n.syntax(),
            DartNode::Metadata(n) => n.syntax(),
            DartNode::StringLiteralExpression(n) => n.syntax(),
        }
    }
}

/// Visitor over typed nodes.
///
/// Implementors override the kinds they care about; everything else funnels
/// into [`DartVisitor::visit_node`].
pub trait DartVisitor {
    fn visit_compilation_unit(&mut self, unit: &CompilationUnit) {
        self.visit_node(unit.syntax());
    }

    fn visit_class_declaration(&mut self, class: &ClassDeclaration) {
        self.visit_node(class.syntax());
    }

    fn visit_class_body(&mut self, body: &ClassBody) {
        self.visit_node(body.syntax());
    }

    fn visit_named_constructor_declaration(&mut self, ctor: &NamedConstructorDeclaration) {
        self.visit_node(ctor.syntax());
    }

    fn visit_factory_constructor_declaration(&mut self, ctor: &FactoryConstructorDeclaration) {
        self.visit_node(ctor.syntax());
    }

    fn visit_component_name(&mut self, name: &ComponentName) {
        self.visit_node(name.syntax());
    }

    fn visit_formal_parameter_list(&mut self, list: &FormalParameterList) {
        self.visit_node(list.syntax());
    }

    fn visit_formal_parameter(&mut self, param: &FormalParameter) {
        self.visit_node(param.syntax());
    }

    fn visit_function_body(&mut self, body: &FunctionBody) {
        self.visit_node(body.syntax());
    }

    fn visit_initializers(&mut self, initializers: &Initializers) {
        self.visit_node(initializers.syntax());
    }

    fn visit_redirection(&mut self, redirection: &Redirection) {
        self.visit_node(redirection.syntax());
    }

    fn visit_metadata(&mut self, metadata: &Metadata) {
        self.visit_node(metadata.syntax());
    }

    fn visit_string_literal_expression(&mut self, literal: &StringLiteralExpression) {
        self.visit_node(literal.syntax());
    }

    /// Generic fallback for nodes the visitor does not handle specifically.
    fn visit_node(&mut self, _node: &DartSyntaxNode) {}
}

/// Dispatch a single node to the visitor method for its kind.
///
/// Nodes outside the typed set go straight to the generic fallback.
pub fn accept(node: &DartSyntaxNode, visitor: &mut dyn DartVisitor) {
    match DartNode::cast(node.clone()) {
        Some(DartNode::CompilationUnit(n)) => visitor.visit_compilation_unit(&n),
        Some(DartNode::ClassDeclaration(n)) => visitor.visit_class_declaration(&n),
        Some(DartNode::ClassBody(n)) => visitor.visit_class_body(&n),
        Some(DartNode::NamedConstructorDeclaration(n)) => {
            visitor.visit_named_constructor_declaration(&n)
        }
        Some(DartNode::FactoryConstructorDeclaration(n)) => {
            visitor.visit_factory_constructor_declaration(&n)
        }
        Some(DartNode::ComponentName(n)) => visitor.visit_component_name(&n),
        Some(DartNode::FormalParameterList(n)) => visitor.visit_formal_parameter_list(&n),
        Some(DartNode::FormalParameter(n)) => visitor.visit_formal_parameter(&n),
        Some(DartNode::FunctionBody(n)) => visitor.visit_function_body(&n),
        Some(DartNode::Initializers(n)) => visitor.visit_initializers(&n),
        Some(DartNode::Redirection(n)) => visitor.visit_redirection(&n),
        Some(DartNode::Metadata(n)) => visitor.visit_metadata(&n),
        Some(DartNode::StringLiteralExpression(n)) => visitor.visit_string_literal_expression(&n),
        None => visitor.visit_node(node),
    }
}

/// Preorder dispatch over a whole subtree, root included.
pub fn walk(root: &DartSyntaxNode, visitor: &mut dyn DartVisitor) {
    for node in root.descendants() {
        accept(&node, visitor);
    }
}
