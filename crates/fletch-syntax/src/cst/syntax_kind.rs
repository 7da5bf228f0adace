//! Syntax kinds for the Dart constructor-declaration subset
//!
//! Kinds are grouped into numeric bands so new entries can be added without
//! renumbering: trivia, keywords, punctuation, literals, structure nodes,
//! special.

/// All token and node kinds known to the tree layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum DartSyntaxKind {
    // Trivia (0-9)
    Whitespace = 0,
    CommentLine = 1,
    CommentBlock = 2,
    Newline = 3,

    // Keywords (10-49)
    ClassKw = 10,
    FactoryKw = 11,
    ConstKw = 12,
    ThisKw = 13,
    SuperKw = 14,
    NativeKw = 15,

    // Punctuation (100-149)
    Dot = 100,
    Comma = 101,
    Colon = 102,
    Semicolon = 103,
    LParen = 104,
    RParen = 105,
    LBrace = 106,
    RBrace = 107,
    Eq = 108,
    At = 109,
    Arrow = 110,

    // Literals & identifiers (150-199)
    Ident = 150,
    String = 151,
    Number = 152,

    // Structure nodes (200-399)
    CompilationUnit = 200,
    ClassDeclaration = 210,
    ClassBody = 211,
    NamedConstructorDeclaration = 220,
    FactoryConstructorDeclaration = 221,
    ComponentName = 230,
    FormalParameterList = 231,
    FormalParameter = 232,
    FunctionBody = 233,
    Initializers = 234,
    Redirection = 235,
    Metadata = 236,
    StringLiteralExpression = 237,

    // Special (400+)
    Error = 400,
    Unknown = 402,
}

impl DartSyntaxKind {
    /// True for kinds that carry no structure (whitespace, comments).
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            DartSyntaxKind::Whitespace
                | DartSyntaxKind::CommentLine
                | DartSyntaxKind::CommentBlock
                | DartSyntaxKind::Newline
        )
    }
}

impl From<DartSyntaxKind> for rowan::SyntaxKind {
    fn from(kind: DartSyntaxKind) -> Self {
        rowan::SyntaxKind(kind as u16)
    }
}
