//! Rowan language implementation for the Dart subset
//!
//! Connects `DartSyntaxKind` to Rowan's generic CST infrastructure.

use rowan::Language;
use tracing::warn;

use super::DartSyntaxKind;

/// Language marker for Dart syntax trees.
///
/// Zero-sized type implementing `rowan::Language` so the kind enum can flow
/// through Rowan's generic node and token types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DartLanguage;

impl Language for DartLanguage {
    type Kind = DartSyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        match raw.0 {
            // Trivia
            0 => DartSyntaxKind::Whitespace,
            1 => DartSyntaxKind::CommentLine,
            2 => DartSyntaxKind::CommentBlock,
            3 => DartSyntaxKind::Newline,

            // Keywords (10-49)
            10 => DartSyntaxKind::ClassKw,
            11 => DartSyntaxKind::FactoryKw,
            12 => DartSyntaxKind::ConstKw,
            13 => DartSyntaxKind::ThisKw,
            14 => DartSyntaxKind::SuperKw,
            15 => DartSyntaxKind::NativeKw,

            // Punctuation (100-149)
            100 => DartSyntaxKind::Dot,
            101 => DartSyntaxKind::Comma,
            102 => DartSyntaxKind::Colon,
            103 => DartSyntaxKind::Semicolon,
            104 => DartSyntaxKind::LParen,
            105 => DartSyntaxKind::RParen,
            106 => DartSyntaxKind::LBrace,
            107 => DartSyntaxKind::RBrace,
            108 => DartSyntaxKind::Eq,
            109 => DartSyntaxKind::At,
            110 => DartSyntaxKind::Arrow,

            // Literals & identifiers (150-199)
            150 => DartSyntaxKind::Ident,
            151 => DartSyntaxKind::String,
            152 => DartSyntaxKind::Number,

            // Structure nodes (200-399)
            200 => DartSyntaxKind::CompilationUnit,
            210 => DartSyntaxKind::ClassDeclaration,
            211 => DartSyntaxKind::ClassBody,
            220 => DartSyntaxKind::NamedConstructorDeclaration,
            221 => DartSyntaxKind::FactoryConstructorDeclaration,
            230 => DartSyntaxKind::ComponentName,
            231 => DartSyntaxKind::FormalParameterList,
            232 => DartSyntaxKind::FormalParameter,
            233 => DartSyntaxKind::FunctionBody,
            234 => DartSyntaxKind::Initializers,
            235 => DartSyntaxKind::Redirection,
            236 => DartSyntaxKind::Metadata,
            237 => DartSyntaxKind::StringLiteralExpression,

            // Special
            400 => DartSyntaxKind::Error,
            402 => DartSyntaxKind::Unknown,

            _ => {
                warn!("unknown syntax kind: {}", raw.0);
                DartSyntaxKind::Unknown
            }
        }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        rowan::SyntaxKind(kind as u16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_roundtrip() {
        let kinds = [
            DartSyntaxKind::Whitespace,
            DartSyntaxKind::FactoryKw,
            DartSyntaxKind::Ident,
            DartSyntaxKind::Dot,
            DartSyntaxKind::NamedConstructorDeclaration,
            DartSyntaxKind::FormalParameterList,
            DartSyntaxKind::Error,
        ];

        for &kind in &kinds {
            let raw = DartLanguage::kind_to_raw(kind);
            let back = DartLanguage::kind_from_raw(raw);
            assert_eq!(kind, back, "roundtrip failed for {kind:?}");
        }
    }

    #[test]
    fn unknown_raw_kind_maps_to_unknown() {
        assert_eq!(
            DartLanguage::kind_from_raw(rowan::SyntaxKind(9999)),
            DartSyntaxKind::Unknown
        );
    }
}
