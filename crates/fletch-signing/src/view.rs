//! Rendered form surface
//!
//! Pure function from state to the output the host toolkit displays: label
//! text, row visibility, and display values. Passwords are masked in the
//! rendered surface; the advanced rows reflect the masking rule of the
//! state's read surface, so a hidden section renders empty even if values
//! are stored.

use crate::state::SigningOptions;

pub const MORE_OPTIONS: &str = "More options";
pub const LESS_OPTIONS: &str = "Less options";

const MASK: &str = "\u{2022}";

/// Display snapshot of the signing form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// Label of the advanced-section toggle link.
    pub advanced_toggle_label: &'static str,
    pub provisioning_profile_visible: bool,
    pub create_certificate_visible: bool,
    pub advanced_rows_visible: bool,
    pub provisioning_profile_path: String,
    pub keystore_path: String,
    pub keystore_type: String,
    pub keystore_password_display: String,
    pub key_alias: String,
    pub key_password_display: String,
    pub provider_class_name: String,
    pub tsa_url: String,
}

fn mask(password: &str) -> String {
    MASK.repeat(password.chars().count())
}

impl FormView {
    /// Render a state into its display snapshot.
    pub fn render(state: &SigningOptions) -> Self {
        let showing = state.is_showing_advanced();

        Self {
            advanced_toggle_label: if showing { LESS_OPTIONS } else { MORE_OPTIONS },
            provisioning_profile_visible: state.is_provisioning_profile_applicable(),
            create_certificate_visible: state.is_create_certificate_applicable(),
            advanced_rows_visible: showing,
            provisioning_profile_path: state.provisioning_profile_path().to_string(),
            keystore_path: state.keystore_path().to_string(),
            keystore_type: state.keystore_type().to_string(),
            keystore_password_display: mask(state.keystore_password()),
            key_alias: state.key_alias().to_string(),
            key_password_display: mask(state.key_password()),
            provider_class_name: state.provider_class_name().to_string(),
            tsa_url: state.tsa_url().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_label_follows_visibility() {
        let hidden = SigningOptions::new();
        assert_eq!(FormView::render(&hidden).advanced_toggle_label, MORE_OPTIONS);

        let shown = hidden.with_show_advanced(true);
        assert_eq!(FormView::render(&shown).advanced_toggle_label, LESS_OPTIONS);
    }

    #[test]
    fn hidden_advanced_rows_render_empty() {
        let state = SigningOptions::new()
            .with_key_alias("release")
            .with_key_password("secret")
            .with_show_advanced(false);

        let view = FormView::render(&state);
        assert!(!view.advanced_rows_visible);
        assert_eq!(view.key_alias, "");
        assert_eq!(view.key_password_display, "");
    }

    #[test]
    fn passwords_are_masked_in_rendered_output() {
        let state = SigningOptions::new()
            .with_keystore_password("secret")
            .with_key_alias("release")
            .with_key_password("hunter2");

        let view = FormView::render(&state);
        assert_eq!(view.keystore_password_display, "\u{2022}".repeat(6));
        assert_eq!(view.key_password_display, "\u{2022}".repeat(7));
        assert!(!view.keystore_password_display.contains("secret"));
    }

    #[test]
    fn applicability_flags_control_row_visibility() {
        let state = SigningOptions::new()
            .with_provisioning_profile_applicable(false)
            .with_create_certificate_applicable(false);

        let view = FormView::render(&state);
        assert!(!view.provisioning_profile_visible);
        assert!(!view.create_certificate_visible);
    }
}
