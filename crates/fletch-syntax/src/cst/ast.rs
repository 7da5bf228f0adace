//! Typed AST layer over the CST
//!
//! Ergonomic, type-safe wrappers over raw CST nodes. Each wrapper implements
//! `cast()` to safely convert from a CST node, and its accessors encode the
//! cardinality contract of the underlying grammar role in their signatures:
//! required children return `Result`, optional children return `Option`,
//! plural children return a source-ordered `Vec` snapshot.
//!
//! The wrappers own no tree state. They borrow the host-owned tree for the
//! duration of each call and re-walk children on every lookup, so results
//! always reflect the current parse state.

use super::{derived, support, DartSyntaxKind, DartSyntaxNode, DartSyntaxToken};
use crate::cst::schema::Role;
use crate::result::Result;

/// Helper trait for casting CST nodes to typed wrappers
pub trait AstNode: Sized {
    fn can_cast(kind: DartSyntaxKind) -> bool;
    fn cast(node: DartSyntaxNode) -> Option<Self>;
    fn syntax(&self) -> &DartSyntaxNode;
}

/// Helper function to find first token of a specific kind
pub(crate) fn token_of_kind(
    parent: &DartSyntaxNode,
    kind: DartSyntaxKind,
) -> Option<DartSyntaxToken> {
    parent
        .children_with_tokens()
        .filter_map(|e| e.into_token())
        .find(|t| t.kind() == kind)
}

/// Helper function to get string literal text (without surrounding quotes)
fn unquote(text: &str) -> String {
    if text.len() >= 2
        && ((text.starts_with('"') && text.ends_with('"'))
            || (text.starts_with('\'') && text.ends_with('\'')))
    {
        text[1..text.len() - 1].to_string()
    } else {
        text.to_string()
    }
}

// ============================================================================
// CompilationUnit
// ============================================================================

/// Root node: one parsed source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    syntax: DartSyntaxNode,
}

impl AstNode for CompilationUnit {
    fn can_cast(kind: DartSyntaxKind) -> bool {
        kind == DartSyntaxKind::CompilationUnit
    }

    fn cast(node: DartSyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self { syntax: node })
        } else {
            None
        }
    }

    fn syntax(&self) -> &DartSyntaxNode {
        &self.syntax
    }
}

impl CompilationUnit {
    pub fn classes(&self) -> Vec<ClassDeclaration> {
        support::child_list(&self.syntax, Role::Member)
    }

    pub fn metadata(&self) -> Vec<Metadata> {
        support::child_list(&self.syntax, Role::Metadata)
    }
}

// ============================================================================
// ClassDeclaration
// ============================================================================

/// Class declaration: `class Point { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    syntax: DartSyntaxNode,
}

impl AstNode for ClassDeclaration {
    fn can_cast(kind: DartSyntaxKind) -> bool {
        kind == DartSyntaxKind::ClassDeclaration
    }

    fn cast(node: DartSyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self { syntax: node })
        } else {
            None
        }
    }

    fn syntax(&self) -> &DartSyntaxNode {
        &self.syntax
    }
}

impl ClassDeclaration {
    /// The class name. Exactly one is present in any well-formed tree.
    pub fn name(&self) -> Result<ComponentName> {
        support::required_child(&self.syntax, Role::Name)
    }

    /// The class body. Required by the grammar.
    pub fn body(&self) -> Result<ClassBody> {
        support::required_child(&self.syntax, Role::Body)
    }

    pub fn metadata(&self) -> Vec<Metadata> {
        support::child_list(&self.syntax, Role::Metadata)
    }
}

// ============================================================================
// ClassBody
// ============================================================================

/// Class body: the `{ ... }` member container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBody {
    syntax: DartSyntaxNode,
}

impl AstNode for ClassBody {
    fn can_cast(kind: DartSyntaxKind) -> bool {
        kind == DartSyntaxKind::ClassBody
    }

    fn cast(node: DartSyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self { syntax: node })
        } else {
            None
        }
    }

    fn syntax(&self) -> &DartSyntaxNode {
        &self.syntax
    }
}

impl ClassBody {
    pub fn named_constructors(&self) -> Vec<NamedConstructorDeclaration> {
        support::child_list(&self.syntax, Role::Member)
    }

    pub fn factory_constructors(&self) -> Vec<FactoryConstructorDeclaration> {
        support::child_list(&self.syntax, Role::Member)
    }
}

// ============================================================================
// NamedConstructorDeclaration
// ============================================================================

/// Named constructor declaration: `Point.origin() : x = 0, y = 0;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedConstructorDeclaration {
    syntax: DartSyntaxNode,
}

impl AstNode for NamedConstructorDeclaration {
    fn can_cast(kind: DartSyntaxKind) -> bool {
        kind == DartSyntaxKind::NamedConstructorDeclaration
    }

    fn cast(node: DartSyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self { syntax: node })
        } else {
            None
        }
    }

    fn syntax(&self) -> &DartSyntaxNode {
        &self.syntax
    }
}

impl NamedConstructorDeclaration {
    /// All name components in source order (`Point.origin` has two).
    pub fn component_names(&self) -> Vec<ComponentName> {
        support::child_list(&self.syntax, Role::Name)
    }

    /// The formal parameter list. Present in every well-formed constructor.
    pub fn formal_parameter_list(&self) -> Result<FormalParameterList> {
        support::required_child(&self.syntax, Role::ParameterList)
    }

    /// The function body, absent for `;`-terminated declarations.
    pub fn function_body(&self) -> Option<FunctionBody> {
        support::optional_child(&self.syntax, Role::Body)
    }

    /// The initializer list after `:`, if any.
    pub fn initializers(&self) -> Option<Initializers> {
        support::optional_child(&self.syntax, Role::Initializers)
    }

    pub fn metadata(&self) -> Vec<Metadata> {
        support::child_list(&self.syntax, Role::Metadata)
    }

    /// The redirection clause, if this constructor redirects.
    pub fn redirection(&self) -> Option<Redirection> {
        support::optional_child(&self.syntax, Role::Redirection)
    }

    /// The native clause string literal, if any.
    pub fn native_name(&self) -> Option<StringLiteralExpression> {
        support::optional_child(&self.syntax, Role::NativeName)
    }

    /// The constructor's simple name, derived from the name components.
    ///
    /// Shared derivation rule, see [`derived::component_name`].
    pub fn name(&self) -> Option<ComponentName> {
        derived::component_name(&self.syntax)
    }
}

// ============================================================================
// FactoryConstructorDeclaration
// ============================================================================

/// Factory constructor declaration: `factory Point.fromJson(Map m) => ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryConstructorDeclaration {
    syntax: DartSyntaxNode,
}

impl AstNode for FactoryConstructorDeclaration {
    fn can_cast(kind: DartSyntaxKind) -> bool {
        kind == DartSyntaxKind::FactoryConstructorDeclaration
    }

    fn cast(node: DartSyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self { syntax: node })
        } else {
            None
        }
    }

    fn syntax(&self) -> &DartSyntaxNode {
        &self.syntax
    }
}

impl FactoryConstructorDeclaration {
    pub fn component_names(&self) -> Vec<ComponentName> {
        support::child_list(&self.syntax, Role::Name)
    }

    pub fn formal_parameter_list(&self) -> Result<FormalParameterList> {
        support::required_child(&self.syntax, Role::ParameterList)
    }

    pub fn function_body(&self) -> Option<FunctionBody> {
        support::optional_child(&self.syntax, Role::Body)
    }

    pub fn metadata(&self) -> Vec<Metadata> {
        support::child_list(&self.syntax, Role::Metadata)
    }

    pub fn redirection(&self) -> Option<Redirection> {
        support::optional_child(&self.syntax, Role::Redirection)
    }

    pub fn native_name(&self) -> Option<StringLiteralExpression> {
        support::optional_child(&self.syntax, Role::NativeName)
    }

    /// Same derivation rule as named constructors.
    pub fn name(&self) -> Option<ComponentName> {
        derived::component_name(&self.syntax)
    }
}

// ============================================================================
// Clause nodes
// ============================================================================

/// One name component: a single identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentName {
    syntax: DartSyntaxNode,
}

impl AstNode for ComponentName {
    fn can_cast(kind: DartSyntaxKind) -> bool {
        kind == DartSyntaxKind::ComponentName
    }

    fn cast(node: DartSyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self { syntax: node })
        } else {
            None
        }
    }

    fn syntax(&self) -> &DartSyntaxNode {
        &self.syntax
    }
}

impl ComponentName {
    /// The identifier text.
    pub fn text(&self) -> String {
        token_of_kind(&self.syntax, DartSyntaxKind::Ident)
            .map(|t| t.text().trim().to_string())
            .unwrap_or_default()
    }
}

/// Formal parameter list: `(int x, {int y = 0})`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormalParameterList {
    syntax: DartSyntaxNode,
}

impl AstNode for FormalParameterList {
    fn can_cast(kind: DartSyntaxKind) -> bool {
        kind == DartSyntaxKind::FormalParameterList
    }

    fn cast(node: DartSyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self { syntax: node })
        } else {
            None
        }
    }

    fn syntax(&self) -> &DartSyntaxNode {
        &self.syntax
    }
}

impl FormalParameterList {
    pub fn parameters(&self) -> Vec<FormalParameter> {
        support::child_list(&self.syntax, Role::Parameter)
    }

    pub fn is_empty(&self) -> bool {
        self.parameters().is_empty()
    }
}

/// A single formal parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormalParameter {
    syntax: DartSyntaxNode,
}

impl AstNode for FormalParameter {
    fn can_cast(kind: DartSyntaxKind) -> bool {
        kind == DartSyntaxKind::FormalParameter
    }

    fn cast(node: DartSyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self { syntax: node })
        } else {
            None
        }
    }

    fn syntax(&self) -> &DartSyntaxNode {
        &self.syntax
    }
}

impl FormalParameter {
    /// The parameter name: the last identifier token (`int x` names `x`).
    pub fn name(&self) -> Option<String> {
        self.syntax
            .children_with_tokens()
            .filter_map(|e| e.into_token())
            .filter(|t| t.kind() == DartSyntaxKind::Ident)
            .last()
            .map(|t| t.text().to_string())
    }
}

/// Function body: block or `=>` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionBody {
    syntax: DartSyntaxNode,
}

impl AstNode for FunctionBody {
    fn can_cast(kind: DartSyntaxKind) -> bool {
        kind == DartSyntaxKind::FunctionBody
    }

    fn cast(node: DartSyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self { syntax: node })
        } else {
            None
        }
    }

    fn syntax(&self) -> &DartSyntaxNode {
        &self.syntax
    }
}

impl FunctionBody {
    /// True for `=> expr` bodies.
    pub fn is_expression_body(&self) -> bool {
        token_of_kind(&self.syntax, DartSyntaxKind::Arrow).is_some()
    }
}

/// Constructor initializer list: `: x = 0, y = 0`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Initializers {
    syntax: DartSyntaxNode,
}

impl AstNode for Initializers {
    fn can_cast(kind: DartSyntaxKind) -> bool {
        kind == DartSyntaxKind::Initializers
    }

    fn cast(node: DartSyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self { syntax: node })
        } else {
            None
        }
    }

    fn syntax(&self) -> &DartSyntaxNode {
        &self.syntax
    }
}

/// Constructor redirection: `= Point.origin` or `: this.named()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirection {
    syntax: DartSyntaxNode,
}

impl AstNode for Redirection {
    fn can_cast(kind: DartSyntaxKind) -> bool {
        kind == DartSyntaxKind::Redirection
    }

    fn cast(node: DartSyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self { syntax: node })
        } else {
            None
        }
    }

    fn syntax(&self) -> &DartSyntaxNode {
        &self.syntax
    }
}

impl Redirection {
    /// The redirection target's simple name, same derivation rule as
    /// constructor names.
    pub fn target(&self) -> Option<ComponentName> {
        derived::component_name(&self.syntax)
    }
}

/// Metadata annotation: `@deprecated`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    syntax: DartSyntaxNode,
}

impl AstNode for Metadata {
    fn can_cast(kind: DartSyntaxKind) -> bool {
        kind == DartSyntaxKind::Metadata
    }

    fn cast(node: DartSyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self { syntax: node })
        } else {
            None
        }
    }

    fn syntax(&self) -> &DartSyntaxNode {
        &self.syntax
    }
}

impl Metadata {
    /// The annotation name. Every annotation names something.
    pub fn name(&self) -> Result<ComponentName> {
        support::required_child(&self.syntax, Role::Name)
    }
}

/// String literal expression, as used by native clauses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteralExpression {
    syntax: DartSyntaxNode,
}

impl AstNode for StringLiteralExpression {
    fn can_cast(kind: DartSyntaxKind) -> bool {
        kind == DartSyntaxKind::StringLiteralExpression
    }

    fn cast(node: DartSyntaxNode) -> Option<Self> {
        if Self::can_cast(node.kind()) {
            Some(Self { syntax: node })
        } else {
            None
        }
    }

    fn syntax(&self) -> &DartSyntaxNode {
        &self.syntax
    }
}

impl StringLiteralExpression {
    /// The literal's value with surrounding quotes removed.
    pub fn value(&self) -> Option<String> {
        token_of_kind(&self.syntax, DartSyntaxKind::String).map(|t| unquote(t.text()))
    }
}
