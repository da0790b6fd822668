//! Session state machine.

use super::Identity;

/// Authentication state of the session.
///
/// An [`Identity`] exists exactly when the state is `Authenticated`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Nobody is signed in.
    #[default]
    Anonymous,
    /// A farmer is signed in.
    Authenticated(Identity),
}

impl SessionState {
    /// Check if a farmer is signed in.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    /// Borrow the signed-in identity, if any.
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Authenticated(identity) => Some(identity),
            SessionState::Anonymous => None,
        }
    }

    /// Consume the state, yielding the identity if signed in.
    pub fn into_identity(self) -> Option<Identity> {
        match self {
            SessionState::Authenticated(identity) => Some(identity),
            SessionState::Anonymous => None,
        }
    }

    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            SessionState::Anonymous => "anonymous",
            SessionState::Authenticated(_) => "authenticated",
        }
    }
}
