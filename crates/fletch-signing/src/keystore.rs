//! Keystore location suggestion and the certificate-creation boundary
//!
//! Certificate creation itself happens in an external dialog owned by the
//! host; this module only guards entry to it (an SDK must be configured) and
//! suggests where new keystore files should land.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SigningError;

/// Minimal descriptor of a configured SDK.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sdk {
    pub home: PathBuf,
    pub version: String,
}

/// What the external certificate-creation dialog reports back on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateParameters {
    pub keystore_path: String,
    pub keystore_password: String,
}

/// Everything the external dialog needs to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRequest {
    pub sdk: Sdk,
    pub suggested_keystore_location: PathBuf,
}

/// Suggest a directory for a new keystore file: the first module content
/// root, else the project base directory, else nothing.
pub fn suggest_keystore_location(content_roots: &[PathBuf], base_dir: Option<&Path>) -> PathBuf {
    if let Some(root) = content_roots.first() {
        return root.clone();
    }
    base_dir.map(Path::to_path_buf).unwrap_or_default()
}

/// Prepare a certificate-creation request.
///
/// Fails with [`SigningError::SdkUnavailable`] when no SDK is configured;
/// the host surfaces that to the user instead of propagating it as a fault.
pub fn certificate_request(
    sdk: Option<&Sdk>,
    content_roots: &[PathBuf],
    base_dir: Option<&Path>,
) -> Result<CertificateRequest, SigningError> {
    let sdk = sdk.ok_or_else(|| SigningError::sdk_unavailable("create a certificate"))?;

    let suggested = suggest_keystore_location(content_roots, base_dir);
    debug!(location = %suggested.display(), "certificate request prepared");

    Ok(CertificateRequest {
        sdk: sdk.clone(),
        suggested_keystore_location: suggested,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sdk() -> Sdk {
        Sdk {
            home: PathBuf::from("/opt/sdk"),
            version: "3.4.0".to_string(),
        }
    }

    #[test]
    fn prefers_first_content_root() {
        let roots = vec![PathBuf::from("/work/app"), PathBuf::from("/work/lib")];
        let suggested = suggest_keystore_location(&roots, Some(Path::new("/work")));
        assert_eq!(suggested, PathBuf::from("/work/app"));
    }

    #[test]
    fn falls_back_to_base_dir_then_empty() {
        assert_eq!(
            suggest_keystore_location(&[], Some(Path::new("/work"))),
            PathBuf::from("/work")
        );
        assert_eq!(suggest_keystore_location(&[], None), PathBuf::new());
    }

    #[test]
    fn request_without_sdk_is_user_correctable() {
        let err = certificate_request(None, &[], None).expect_err("no SDK configured");
        assert_eq!(err, SigningError::sdk_unavailable("create a certificate"));
        assert!(err.is_user_correctable());
    }

    #[test]
    fn request_with_sdk_carries_suggested_location() {
        let sdk = sdk();
        let roots = vec![PathBuf::from("/work/app")];
        let request =
            certificate_request(Some(&sdk), &roots, Some(Path::new("/work"))).expect("request");

        assert_eq!(request.sdk, sdk);
        assert_eq!(
            request.suggested_keystore_location,
            PathBuf::from("/work/app")
        );
    }
}
