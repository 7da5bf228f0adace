//! Error types for syntax-tree accessor operations

use thiserror::Error;

use crate::cst::schema::Role;
use crate::cst::DartSyntaxKind;

/// Main error type for accessor operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A required singular child was absent.
    ///
    /// In a well-formed tree this cannot happen; it indicates either a
    /// defect in the host parser or a tree handed to the wrong accessor.
    /// Propagated to the caller, never defaulted.
    #[error("missing required child: {parent:?} node has no {role:?} child")]
    MissingRequiredChild { parent: DartSyntaxKind, role: Role },

    /// A caller asked for a role the schema does not declare for the node
    /// kind being queried.
    #[error("role {role:?} is not declared for {parent:?} nodes")]
    UndeclaredRole { parent: DartSyntaxKind, role: Role },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The tree itself is inconsistent with the grammar.
    Structure,
    /// The query was inconsistent with the schema.
    Schema,
}

impl SyntaxError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SyntaxError::MissingRequiredChild { .. } => ErrorKind::Structure,
            SyntaxError::UndeclaredRole { .. } => ErrorKind::Schema,
        }
    }

    /// Whether processing can reasonably continue after this error.
    ///
    /// Structural faults are unrecoverable consistency violations; schema
    /// faults are caller bugs. Neither is retried.
    pub fn is_recoverable(&self) -> bool {
        false
    }

    /// Create a missing-required-child error
    pub fn missing_required_child(parent: DartSyntaxKind, role: Role) -> Self {
        Self::MissingRequiredChild { parent, role }
    }

    /// Create an undeclared-role error
    pub fn undeclared_role(parent: DartSyntaxKind, role: Role) -> Self {
        Self::UndeclaredRole { parent, role }
    }
}
