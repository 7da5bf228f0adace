//! fletch-syntax
//!
//! Typed child lookup over an immutable, externally-owned Dart syntax tree.
//! The host environment parses sources and owns the trees; this crate
//! provides the schema-driven accessor layer on top: cardinality-checked
//! child lookup, derived-name resolution, and visitor dispatch.

pub mod cst;
pub mod error;
pub mod result;

pub use cst::{
    ast, derived, schema, support, visitor, DartLanguage, DartSyntaxElement, DartSyntaxKind,
    DartSyntaxNode, DartSyntaxToken, TreeBuilder,
};
pub use error::{ErrorKind, SyntaxError};
pub use result::Result;

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fletch=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
