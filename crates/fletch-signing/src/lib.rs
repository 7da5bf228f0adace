//! fletch-signing
//!
//! Headless model of a package code-signing settings form. The host toolkit
//! owns widgets, dialogs, and file choosers; this crate owns the durable
//! contract underneath them: an immutable options state with get/set pairs
//! per field, the advanced-section visibility-masking rule, a pure event
//! reducer with resize notification, and the keystore/certificate boundary.

pub mod error;
pub mod event;
pub mod keystore;
pub mod state;
pub mod view;

pub use error::SigningError;
pub use event::{FormEvent, Transition};
pub use keystore::{
    certificate_request, suggest_keystore_location, CertificateParameters, CertificateRequest, Sdk,
};
pub use state::{SigningOptions, DEFAULT_KEYSTORE_TYPE, KEYSTORE_TYPES};
pub use view::{FormView, LESS_OPTIONS, MORE_OPTIONS};

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
