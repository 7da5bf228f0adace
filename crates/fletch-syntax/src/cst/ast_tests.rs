//! Tests for the typed AST layer and visitor dispatch

use super::ast::{
    AstNode, ClassDeclaration, CompilationUnit, ComponentName, FactoryConstructorDeclaration,
    NamedConstructorDeclaration,
};
use super::visitor::{accept, walk, DartVisitor};
use super::{DartSyntaxKind, DartSyntaxNode, TreeBuilder};

fn component_name(builder: &mut TreeBuilder, text: &str) {
    builder.start_node(DartSyntaxKind::ComponentName);
    builder.token(DartSyntaxKind::Ident, text);
    builder.finish_node();
}

fn empty_parameter_list(builder: &mut TreeBuilder) {
    builder.start_node(DartSyntaxKind::FormalParameterList);
    builder.token(DartSyntaxKind::LParen, "(");
    builder.token(DartSyntaxKind::RParen, ")");
    builder.finish_node();
}

/// `Point.origin() {}` as a bare constructor tree.
fn named_constructor() -> DartSyntaxNode {
    let mut builder = TreeBuilder::new();
    builder.start_node(DartSyntaxKind::NamedConstructorDeclaration);
    component_name(&mut builder, "Point");
    builder.token(DartSyntaxKind::Dot, ".");
    component_name(&mut builder, "origin");
    empty_parameter_list(&mut builder);
    builder.token(DartSyntaxKind::Whitespace, " ");
    builder.start_node(DartSyntaxKind::FunctionBody);
    builder.token(DartSyntaxKind::LBrace, "{");
    builder.token(DartSyntaxKind::RBrace, "}");
    builder.finish_node();
    builder.finish_node();
    builder.finish()
}

#[test]
fn constructor_accessor_surface() {
    // The canonical shape: name components, parameter list, body, and
    // nothing else.
    let node = named_constructor();
    let ctor = NamedConstructorDeclaration::cast(node).expect("cast");

    assert!(ctor.formal_parameter_list().is_ok());
    assert!(ctor.function_body().is_some());
    assert!(ctor.redirection().is_none());
    assert!(ctor.initializers().is_none());
    assert!(ctor.native_name().is_none());
    assert!(ctor.metadata().is_empty());

    let names = ctor.component_names();
    assert_eq!(names.len(), 2);
    assert_eq!(names[0].text(), "Point");
    assert_eq!(names[1].text(), "origin");
}

#[test]
fn derived_name_is_last_component() {
    let node = named_constructor();
    let ctor = NamedConstructorDeclaration::cast(node).expect("cast");

    assert_eq!(ctor.name().expect("derived name").text(), "origin");
}

#[test]
fn derived_name_single_component_names_itself() {
    let mut builder = TreeBuilder::new();
    builder.start_node(DartSyntaxKind::NamedConstructorDeclaration);
    component_name(&mut builder, "Point");
    empty_parameter_list(&mut builder);
    builder.finish_node();
    let ctor = NamedConstructorDeclaration::cast(builder.finish()).expect("cast");

    assert_eq!(ctor.name().expect("derived name").text(), "Point");
}

#[test]
fn factory_constructor_shares_derivation_rule() {
    // `factory Point.fromJson() = Point.origin;`
    let mut builder = TreeBuilder::new();
    builder.start_node(DartSyntaxKind::FactoryConstructorDeclaration);
    builder.token(DartSyntaxKind::FactoryKw, "factory");
    builder.token(DartSyntaxKind::Whitespace, " ");
    component_name(&mut builder, "Point");
    builder.token(DartSyntaxKind::Dot, ".");
    component_name(&mut builder, "fromJson");
    empty_parameter_list(&mut builder);
    builder.token(DartSyntaxKind::Whitespace, " ");
    builder.token(DartSyntaxKind::Eq, "=");
    builder.token(DartSyntaxKind::Whitespace, " ");
    builder.start_node(DartSyntaxKind::Redirection);
    component_name(&mut builder, "Point");
    builder.token(DartSyntaxKind::Dot, ".");
    component_name(&mut builder, "origin");
    builder.finish_node();
    builder.token(DartSyntaxKind::Semicolon, ";");
    builder.finish_node();

    let ctor = FactoryConstructorDeclaration::cast(builder.finish()).expect("cast");

    assert_eq!(ctor.name().expect("derived name").text(), "fromJson");
    assert!(ctor.formal_parameter_list().is_ok());
    assert!(ctor.function_body().is_none());

    let redirection = ctor.redirection().expect("redirection clause");
    assert_eq!(redirection.target().expect("target").text(), "origin");
}

#[test]
fn missing_parameter_list_propagates() {
    let mut builder = TreeBuilder::new();
    builder.start_node(DartSyntaxKind::NamedConstructorDeclaration);
    component_name(&mut builder, "Point");
    builder.finish_node();
    let ctor = NamedConstructorDeclaration::cast(builder.finish()).expect("cast");

    assert!(ctor.formal_parameter_list().is_err());
    // The optional and plural surfaces still answer normally.
    assert!(ctor.function_body().is_none());
    assert!(ctor.metadata().is_empty());
}

#[test]
fn parameter_names_in_source_order() {
    // `Point.at(int x, int y)`
    let mut builder = TreeBuilder::new();
    builder.start_node(DartSyntaxKind::NamedConstructorDeclaration);
    component_name(&mut builder, "Point");
    builder.token(DartSyntaxKind::Dot, ".");
    component_name(&mut builder, "at");
    builder.start_node(DartSyntaxKind::FormalParameterList);
    builder.token(DartSyntaxKind::LParen, "(");
    builder.start_node(DartSyntaxKind::FormalParameter);
    builder.token(DartSyntaxKind::Ident, "int");
    builder.token(DartSyntaxKind::Whitespace, " ");
    builder.token(DartSyntaxKind::Ident, "x");
    builder.finish_node();
    builder.token(DartSyntaxKind::Comma, ",");
    builder.token(DartSyntaxKind::Whitespace, " ");
    builder.start_node(DartSyntaxKind::FormalParameter);
    builder.token(DartSyntaxKind::Ident, "int");
    builder.token(DartSyntaxKind::Whitespace, " ");
    builder.token(DartSyntaxKind::Ident, "y");
    builder.finish_node();
    builder.token(DartSyntaxKind::RParen, ")");
    builder.finish_node();
    builder.finish_node();
    let ctor = NamedConstructorDeclaration::cast(builder.finish()).expect("cast");

    let params = ctor.formal_parameter_list().expect("parameter list");
    assert!(!params.is_empty());
    let names: Vec<_> = params
        .parameters()
        .iter()
        .filter_map(|p| p.name())
        .collect();
    assert_eq!(names, vec!["x", "y"]);
}

#[test]
fn native_clause_value_is_unquoted() {
    let mut builder = TreeBuilder::new();
    builder.start_node(DartSyntaxKind::NamedConstructorDeclaration);
    component_name(&mut builder, "Point");
    empty_parameter_list(&mut builder);
    builder.token(DartSyntaxKind::Whitespace, " ");
    builder.token(DartSyntaxKind::NativeKw, "native");
    builder.token(DartSyntaxKind::Whitespace, " ");
    builder.start_node(DartSyntaxKind::StringLiteralExpression);
    builder.token(DartSyntaxKind::String, "\"Point_ctor\"");
    builder.finish_node();
    builder.finish_node();
    let ctor = NamedConstructorDeclaration::cast(builder.finish()).expect("cast");

    let native = ctor.native_name().expect("native clause");
    assert_eq!(native.value().as_deref(), Some("Point_ctor"));
}

#[test]
fn metadata_annotations_keep_source_order() {
    let mut builder = TreeBuilder::new();
    builder.start_node(DartSyntaxKind::NamedConstructorDeclaration);
    for name in ["deprecated", "visibleForTesting"] {
        builder.start_node(DartSyntaxKind::Metadata);
        builder.token(DartSyntaxKind::At, "@");
        component_name(&mut builder, name);
        builder.finish_node();
        builder.token(DartSyntaxKind::Whitespace, " ");
    }
    component_name(&mut builder, "Point");
    empty_parameter_list(&mut builder);
    builder.finish_node();
    let ctor = NamedConstructorDeclaration::cast(builder.finish()).expect("cast");

    let metadata = ctor.metadata();
    assert_eq!(metadata.len(), 2);
    assert_eq!(metadata[0].name().expect("name").text(), "deprecated");
    assert_eq!(
        metadata[1].name().expect("name").text(),
        "visibleForTesting"
    );
}

#[test]
fn class_body_member_lists_are_kind_filtered() {
    let mut builder = TreeBuilder::new();
    builder.start_node(DartSyntaxKind::CompilationUnit);
    builder.start_node(DartSyntaxKind::ClassDeclaration);
    component_name(&mut builder, "Point");
    builder.start_node(DartSyntaxKind::ClassBody);

    builder.start_node(DartSyntaxKind::NamedConstructorDeclaration);
    component_name(&mut builder, "Point");
    builder.token(DartSyntaxKind::Dot, ".");
    component_name(&mut builder, "origin");
    empty_parameter_list(&mut builder);
    builder.finish_node();

    builder.start_node(DartSyntaxKind::FactoryConstructorDeclaration);
    builder.token(DartSyntaxKind::FactoryKw, "factory");
    component_name(&mut builder, "Point");
    builder.token(DartSyntaxKind::Dot, ".");
    component_name(&mut builder, "unit");
    empty_parameter_list(&mut builder);
    builder.finish_node();

    builder.finish_node(); // ClassBody
    builder.finish_node(); // ClassDeclaration
    builder.finish_node(); // CompilationUnit
    let root = builder.finish();

    let unit = CompilationUnit::cast(root).expect("unit");
    let classes = unit.classes();
    assert_eq!(classes.len(), 1);

    let body = classes[0].body().expect("class body");
    let named = body.named_constructors();
    let factories = body.factory_constructors();
    assert_eq!(named.len(), 1);
    assert_eq!(factories.len(), 1);
    assert_eq!(named[0].name().expect("name").text(), "origin");
    assert_eq!(factories[0].name().expect("name").text(), "unit");
}

#[derive(Default)]
struct CountingVisitor {
    constructors: Vec<String>,
    fallback: usize,
}

impl DartVisitor for CountingVisitor {
    fn visit_named_constructor_declaration(&mut self, ctor: &NamedConstructorDeclaration) {
        let name = ctor.name().map(|n| n.text()).unwrap_or_default();
        self.constructors.push(name);
    }

    fn visit_node(&mut self, _node: &DartSyntaxNode) {
        self.fallback += 1;
    }
}

#[test]
fn visitor_dispatches_by_kind_with_generic_fallback() {
    let node = named_constructor();

    let mut visitor = CountingVisitor::default();
    accept(&node, &mut visitor);
    assert_eq!(visitor.constructors, vec!["origin"]);
    assert_eq!(visitor.fallback, 0);

    // Unhandled kinds fall through the default methods to visit_node.
    let mut visitor = CountingVisitor::default();
    let params = node
        .children()
        .find(|n| n.kind() == DartSyntaxKind::FormalParameterList)
        .expect("parameter list node");
    accept(&params, &mut visitor);
    assert!(visitor.constructors.is_empty());
    assert_eq!(visitor.fallback, 1);
}

#[test]
fn walk_visits_subtree_in_preorder() {
    let mut builder = TreeBuilder::new();
    builder.start_node(DartSyntaxKind::CompilationUnit);
    builder.start_node(DartSyntaxKind::ClassDeclaration);
    component_name(&mut builder, "Point");
    builder.start_node(DartSyntaxKind::ClassBody);
    builder.start_node(DartSyntaxKind::NamedConstructorDeclaration);
    component_name(&mut builder, "Point");
    builder.token(DartSyntaxKind::Dot, ".");
    component_name(&mut builder, "origin");
    empty_parameter_list(&mut builder);
    builder.finish_node();
    builder.start_node(DartSyntaxKind::NamedConstructorDeclaration);
    component_name(&mut builder, "Point");
    builder.token(DartSyntaxKind::Dot, ".");
    component_name(&mut builder, "unit");
    empty_parameter_list(&mut builder);
    builder.finish_node();
    builder.finish_node();
    builder.finish_node();
    builder.finish_node();
    let root = builder.finish();

    let mut visitor = CountingVisitor::default();
    walk(&root, &mut visitor);
    assert_eq!(visitor.constructors, vec!["origin", "unit"]);
}

#[test]
fn cast_rejects_foreign_kinds() {
    let node = named_constructor();
    assert!(ClassDeclaration::cast(node.clone()).is_none());
    assert!(ComponentName::cast(node).is_none());
}
