//! Session management module.
//!
//! This module owns the signed-in farmer: the identity record, the
//! two-state session machine, credential verification, and the store that
//! keeps memory and durable storage in step.

mod identity;
mod state;
mod store;
mod verifier;

pub use identity::{Identity, IdentityUpdate};
pub use state::SessionState;
pub use store::{SessionStore, SESSION_KEY};
pub use verifier::{CredentialVerifier, Credentials, DemoVerifier};
