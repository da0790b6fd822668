//! Credential verification.
//!
//! The session store never decides on its own whether a credential pair is
//! acceptable; it asks a [`CredentialVerifier`]. Swapping the demo verifier
//! for a network-backed one requires no change to the store.

use async_trait::async_trait;

use super::Identity;
use crate::Result;

/// Email and password submitted at sign-in.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Create a credential pair.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Decides whether credentials are accepted.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Returns the identity to sign in as, `None` to reject, or an error
    /// when no decision could be reached.
    ///
    /// Only called with complete credentials.
    async fn verify(&self, credentials: &Credentials) -> Result<Option<Identity>>;
}

/// Placeholder verifier that accepts every complete credential pair and
/// signs in as a fixed demo farmer.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoVerifier;

impl DemoVerifier {
    /// The demo farmer profile, carrying the submitted email.
    pub fn farmer(email: impl Into<String>) -> Identity {
        Identity {
            id: "1".to_string(),
            name: "राम कुमार / Ram Kumar".to_string(),
            email: email.into(),
            farmer_id: "F001".to_string(),
            phone: "+91 9876543210".to_string(),
            location: "Punjab, India".to_string(),
            experience: 15,
            specialization: "Organic Farming".to_string(),
            avatar: Some(
                "https://images.pexels.com/photos/1300402/pexels-photo-1300402.jpeg".to_string(),
            ),
        }
    }
}

#[async_trait]
impl CredentialVerifier for DemoVerifier {
    async fn verify(&self, credentials: &Credentials) -> Result<Option<Identity>> {
        if !credentials.is_complete() {
            return Ok(None);
        }
        Ok(Some(Self::farmer(credentials.email.clone())))
    }
}
