//! Declarative node schema
//!
//! One table maps each structured node kind to the child roles its grammar
//! declares, with the cardinality contract for each role. The typed accessor
//! layer and the subtree validator are both driven by this table, so the
//! grammar invariants live in exactly one place instead of being repeated in
//! per-kind accessor code.

use rowan::TextRange;

use self::Cardinality::{Many, Optional, Required};
use super::DartSyntaxKind as K;
use super::{DartSyntaxKind, DartSyntaxNode};

/// Structural label identifying what a child represents within its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Declaration name component(s).
    Name,
    /// Metadata annotation (`@deprecated`).
    Metadata,
    /// Formal parameter list.
    ParameterList,
    /// A single formal parameter.
    Parameter,
    /// Function body.
    Body,
    /// Constructor initializer list (`: x = 1`).
    Initializers,
    /// Constructor redirection (`= Other.ctor` / `: this.named()`).
    Redirection,
    /// Native clause string literal.
    NativeName,
    /// A member declaration inside a container.
    Member,
}

/// Cardinality contract for a child role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Exactly one expected; absence is a structural consistency fault.
    Required,
    /// Zero or one.
    Optional,
    /// Zero or more, source order.
    Many,
}

/// One row of the schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSpec {
    pub role: Role,
    pub cardinality: Cardinality,
    pub child: DartSyntaxKind,
}

const fn spec(role: Role, cardinality: Cardinality, child: DartSyntaxKind) -> RoleSpec {
    RoleSpec {
        role,
        cardinality,
        child,
    }
}

const COMPILATION_UNIT_ROLES: &[RoleSpec] = &[
    spec(Role::Metadata, Many, K::Metadata),
    spec(Role::Member, Many, K::ClassDeclaration),
];

const CLASS_DECLARATION_ROLES: &[RoleSpec] = &[
    spec(Role::Metadata, Many, K::Metadata),
    spec(Role::Name, Required, K::ComponentName),
    spec(Role::Body, Required, K::ClassBody),
];

const CLASS_BODY_ROLES: &[RoleSpec] = &[
    spec(Role::Member, Many, K::NamedConstructorDeclaration),
    spec(Role::Member, Many, K::FactoryConstructorDeclaration),
];

const NAMED_CONSTRUCTOR_ROLES: &[RoleSpec] = &[
    spec(Role::Metadata, Many, K::Metadata),
    spec(Role::Name, Many, K::ComponentName),
    spec(Role::ParameterList, Required, K::FormalParameterList),
    spec(Role::Initializers, Optional, K::Initializers),
    spec(Role::Redirection, Optional, K::Redirection),
    spec(Role::Body, Optional, K::FunctionBody),
    spec(Role::NativeName, Optional, K::StringLiteralExpression),
];

const FACTORY_CONSTRUCTOR_ROLES: &[RoleSpec] = &[
    spec(Role::Metadata, Many, K::Metadata),
    spec(Role::Name, Many, K::ComponentName),
    spec(Role::ParameterList, Required, K::FormalParameterList),
    spec(Role::Redirection, Optional, K::Redirection),
    spec(Role::Body, Optional, K::FunctionBody),
    spec(Role::NativeName, Optional, K::StringLiteralExpression),
];

const PARAMETER_LIST_ROLES: &[RoleSpec] = &[spec(Role::Parameter, Many, K::FormalParameter)];
const PARAMETER_ROLES: &[RoleSpec] = &[spec(Role::Metadata, Many, K::Metadata)];
const REDIRECTION_ROLES: &[RoleSpec] = &[spec(Role::Name, Many, K::ComponentName)];
const METADATA_ROLES: &[RoleSpec] = &[spec(Role::Name, Required, K::ComponentName)];

/// Declared child roles for a node kind.
///
/// Kinds with no declared structure (tokens, leaf nodes) yield an empty
/// slice.
pub fn roles(kind: DartSyntaxKind) -> &'static [RoleSpec] {
    match kind {
        K::CompilationUnit => COMPILATION_UNIT_ROLES,
        K::ClassDeclaration => CLASS_DECLARATION_ROLES,
        K::ClassBody => CLASS_BODY_ROLES,
        K::NamedConstructorDeclaration => NAMED_CONSTRUCTOR_ROLES,
        K::FactoryConstructorDeclaration => FACTORY_CONSTRUCTOR_ROLES,
        K::FormalParameterList => PARAMETER_LIST_ROLES,
        K::FormalParameter => PARAMETER_ROLES,
        K::Redirection => REDIRECTION_ROLES,
        K::Metadata => METADATA_ROLES,
        _ => &[],
    }
}

/// Look up the spec for one (parent kind, role) pair.
///
/// `Role::Member` may be declared more than once for a container; this
/// returns the first row, use [`roles`] to enumerate all of them.
pub fn role_spec(kind: DartSyntaxKind, role: Role) -> Option<&'static RoleSpec> {
    roles(kind).iter().find(|s| s.role == role)
}

/// A required role with no matching child in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub parent: DartSyntaxKind,
    pub role: Role,
    pub range: TextRange,
}

/// Check a subtree against the schema table.
///
/// Reports every node whose declared required roles are not satisfied.
/// Optional and plural roles cannot be violated by absence.
pub fn validate(root: &DartSyntaxNode) -> Vec<SchemaViolation> {
    let mut violations = Vec::new();

    for node in root.descendants() {
        for spec in roles(node.kind()) {
            if spec.cardinality != Cardinality::Required {
                continue;
            }
            let satisfied = node.children().any(|c| c.kind() == spec.child);
            if !satisfied {
                violations.push(SchemaViolation {
                    parent: node.kind(),
                    role: spec.role,
                    range: node.text_range(),
                });
            }
        }
    }

    violations
}
