//! Form events and the pure state reducer
//!
//! Every UI interaction is an event; applying one to a state yields the next
//! state plus a resize flag. The flag is the resize-notification contract:
//! it is true exactly when the advanced-section visibility changed, which is
//! the only event class that changes the form's height.

use tracing::debug;

use crate::state::{DEFAULT_KEYSTORE_TYPE, SigningOptions};

/// One user interaction with the signing form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The "More options" / "Less options" toggle was activated.
    ToggleAdvanced,
    SetProvisioningProfilePath(String),
    SetKeystorePath(String),
    SetKeystoreType(String),
    SetKeystorePassword(String),
    SetKeyAlias(String),
    SetKeyPassword(String),
    SetProviderClassName(String),
    SetTsaUrl(String),
    /// The external certificate-creation dialog completed successfully.
    CertificateCreated {
        keystore_path: String,
        keystore_password: String,
    },
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: SigningOptions,
    /// True when the host should re-layout (advanced visibility changed).
    pub resized: bool,
}

impl SigningOptions {
    /// Apply one event, producing the next state.
    pub fn apply(self, event: FormEvent) -> Transition {
        let was_showing = self.is_showing_advanced();

        let state = match event {
            FormEvent::ToggleAdvanced => {
                let show = !was_showing;
                debug!(show, "advanced section toggled");
                self.with_show_advanced(show)
            }
            FormEvent::SetProvisioningProfilePath(path) => {
                self.with_provisioning_profile_path(path)
            }
            FormEvent::SetKeystorePath(path) => self.with_keystore_path(path),
            FormEvent::SetKeystoreType(keystore_type) => self.with_keystore_type(keystore_type),
            FormEvent::SetKeystorePassword(password) => self.with_keystore_password(password),
            FormEvent::SetKeyAlias(alias) => self.with_key_alias(alias),
            FormEvent::SetKeyPassword(password) => self.with_key_password(password),
            FormEvent::SetProviderClassName(name) => self.with_provider_class_name(name),
            FormEvent::SetTsaUrl(url) => self.with_tsa_url(url),
            FormEvent::CertificateCreated {
                keystore_path,
                keystore_password,
            } => {
                debug!(path = %keystore_path, "certificate created, filling keystore fields");
                self.with_keystore_path(keystore_path)
                    .with_keystore_type(DEFAULT_KEYSTORE_TYPE)
                    .with_keystore_password(keystore_password)
            }
        };

        Transition {
            resized: state.is_showing_advanced() != was_showing,
            state,
        }
    }
}
