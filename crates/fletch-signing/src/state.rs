//! Signing-options view state
//!
//! An explicit, immutable state struct standing in for what the original
//! form kept implicitly in widget state. All mutation goes through `with_*`
//! builders (or the event reducer in [`crate::event`]), each returning a new
//! state.
//!
//! The advanced group (key alias, key password, provider class name, TSA
//! URL) sits behind a visibility toggle. While hidden, its getters return
//! empty strings regardless of stored content; the stored values survive the
//! toggle untouched, so showing the section again restores them exactly.
//! Persistence keeps the raw stored values — masking is a read-surface rule
//! only.

use serde::{Deserialize, Serialize};

/// Keystore types offered by the form, default first.
pub const KEYSTORE_TYPES: &[&str] = &["PKCS12", "JKS"];

/// The default keystore type (first combo entry in the original form).
pub const DEFAULT_KEYSTORE_TYPE: &str = KEYSTORE_TYPES[0];

/// Immutable signing-options state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SigningOptions {
    show_advanced: bool,
    provisioning_profile_applicable: bool,
    create_certificate_applicable: bool,
    provisioning_profile_path: String,
    keystore_path: String,
    keystore_type: String,
    keystore_password: String,
    key_alias: String,
    key_password: String,
    provider_class_name: String,
    tsa_url: String,
}

impl Default for SigningOptions {
    fn default() -> Self {
        Self {
            show_advanced: false,
            provisioning_profile_applicable: true,
            create_certificate_applicable: true,
            provisioning_profile_path: String::new(),
            keystore_path: String::new(),
            keystore_type: DEFAULT_KEYSTORE_TYPE.to_string(),
            keystore_password: String::new(),
            key_alias: String::new(),
            key_password: String::new(),
            provider_class_name: String::new(),
            tsa_url: String::new(),
        }
    }
}

impl SigningOptions {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Read surface
    // ------------------------------------------------------------------

    pub fn is_showing_advanced(&self) -> bool {
        self.show_advanced
    }

    pub fn is_provisioning_profile_applicable(&self) -> bool {
        self.provisioning_profile_applicable
    }

    pub fn is_create_certificate_applicable(&self) -> bool {
        self.create_certificate_applicable
    }

    pub fn provisioning_profile_path(&self) -> &str {
        self.provisioning_profile_path.trim()
    }

    pub fn keystore_path(&self) -> &str {
        self.keystore_path.trim()
    }

    pub fn keystore_type(&self) -> &str {
        &self.keystore_type
    }

    pub fn keystore_password(&self) -> &str {
        &self.keystore_password
    }

    /// Key alias; empty while the advanced section is hidden.
    pub fn key_alias(&self) -> &str {
        if self.show_advanced {
            self.key_alias.trim()
        } else {
            ""
        }
    }

    /// Key password; empty while the advanced section is hidden.
    pub fn key_password(&self) -> &str {
        if self.show_advanced {
            &self.key_password
        } else {
            ""
        }
    }

    /// Provider class name; empty while the advanced section is hidden.
    pub fn provider_class_name(&self) -> &str {
        if self.show_advanced {
            self.provider_class_name.trim()
        } else {
            ""
        }
    }

    /// Timestamp-authority URL; empty while the advanced section is hidden.
    pub fn tsa_url(&self) -> &str {
        if self.show_advanced {
            self.tsa_url.trim()
        } else {
            ""
        }
    }

    // ------------------------------------------------------------------
    // Write surface
    // ------------------------------------------------------------------

    pub fn with_show_advanced(mut self, show: bool) -> Self {
        self.show_advanced = show;
        self
    }

    pub fn with_provisioning_profile_applicable(mut self, applicable: bool) -> Self {
        self.provisioning_profile_applicable = applicable;
        self
    }

    pub fn with_create_certificate_applicable(mut self, applicable: bool) -> Self {
        self.create_certificate_applicable = applicable;
        self
    }

    pub fn with_provisioning_profile_path(mut self, path: impl Into<String>) -> Self {
        self.provisioning_profile_path = path.into();
        self
    }

    pub fn with_keystore_path(mut self, path: impl Into<String>) -> Self {
        self.keystore_path = path.into();
        self
    }

    pub fn with_keystore_type(mut self, keystore_type: impl Into<String>) -> Self {
        self.keystore_type = keystore_type.into();
        self
    }

    pub fn with_keystore_password(mut self, password: impl Into<String>) -> Self {
        self.keystore_password = password.into();
        self
    }

    /// Set the key alias. A non-empty value forces the advanced section
    /// visible so the stored value is never silently masked right after
    /// being set.
    pub fn with_key_alias(mut self, alias: impl Into<String>) -> Self {
        self.key_alias = alias.into();
        if !self.key_alias.trim().is_empty() {
            self.show_advanced = true;
        }
        self
    }

    /// Set the key password. Does not affect section visibility.
    pub fn with_key_password(mut self, password: impl Into<String>) -> Self {
        self.key_password = password.into();
        self
    }

    /// Set the provider class name; non-empty values force the advanced
    /// section visible.
    pub fn with_provider_class_name(mut self, name: impl Into<String>) -> Self {
        self.provider_class_name = name.into();
        if !self.provider_class_name.trim().is_empty() {
            self.show_advanced = true;
        }
        self
    }

    /// Set the TSA URL; non-empty values force the advanced section visible.
    pub fn with_tsa_url(mut self, url: impl Into<String>) -> Self {
        self.tsa_url = url.into();
        if !self.tsa_url.trim().is_empty() {
            self.show_advanced = true;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_advanced_fields_read_empty() {
        let state = SigningOptions::new()
            .with_show_advanced(true)
            .with_key_alias("release")
            .with_key_password("secret")
            .with_provider_class_name("com.example.Provider")
            .with_tsa_url("https://tsa.example.com")
            .with_show_advanced(false);

        assert_eq!(state.key_alias(), "");
        assert_eq!(state.key_password(), "");
        assert_eq!(state.provider_class_name(), "");
        assert_eq!(state.tsa_url(), "");
    }

    #[test]
    fn unhiding_restores_stored_content_unchanged() {
        let state = SigningOptions::new()
            .with_key_alias("release")
            .with_key_password("secret")
            .with_show_advanced(false)
            .with_show_advanced(true);

        assert_eq!(state.key_alias(), "release");
        assert_eq!(state.key_password(), "secret");
    }

    #[test]
    fn non_empty_advanced_value_forces_section_visible() {
        assert!(SigningOptions::new()
            .with_key_alias("release")
            .is_showing_advanced());
        assert!(SigningOptions::new()
            .with_provider_class_name("com.example.Provider")
            .is_showing_advanced());
        assert!(SigningOptions::new()
            .with_tsa_url("https://tsa.example.com")
            .is_showing_advanced());
    }

    #[test]
    fn empty_or_blank_values_do_not_force_visibility() {
        assert!(!SigningOptions::new().with_key_alias("").is_showing_advanced());
        assert!(!SigningOptions::new()
            .with_key_alias("   ")
            .is_showing_advanced());
        // Key password never drives visibility.
        assert!(!SigningOptions::new()
            .with_key_password("secret")
            .is_showing_advanced());
    }

    #[test]
    fn path_getters_trim_whitespace() {
        let state = SigningOptions::new()
            .with_provisioning_profile_path("  /profiles/app.mobileprovision ")
            .with_keystore_path(" /keys/release.p12  ");

        assert_eq!(
            state.provisioning_profile_path(),
            "/profiles/app.mobileprovision"
        );
        assert_eq!(state.keystore_path(), "/keys/release.p12");
    }

    #[test]
    fn default_keystore_type_is_first_combo_entry() {
        assert_eq!(SigningOptions::new().keystore_type(), "PKCS12");
        assert_eq!(DEFAULT_KEYSTORE_TYPE, KEYSTORE_TYPES[0]);
    }

    #[test]
    fn serde_round_trip_preserves_hidden_values() {
        let state = SigningOptions::new()
            .with_keystore_path("/keys/release.p12")
            .with_keystore_password("store-secret")
            .with_key_alias("release")
            .with_key_password("key-secret")
            .with_show_advanced(false);

        let json = serde_json::to_string(&state).expect("serialize");
        // camelCase field naming on the wire.
        assert!(json.contains("keystorePassword"));
        assert!(json.contains("keyAlias"));

        let restored: SigningOptions = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored, state);

        // The hidden values survived persistence; showing the section again
        // reveals them.
        let shown = restored.with_show_advanced(true);
        assert_eq!(shown.key_alias(), "release");
        assert_eq!(shown.key_password(), "key-secret");
    }
}
