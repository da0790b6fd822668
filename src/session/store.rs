//! Session store: the single owner of the signed-in identity.

use std::sync::{Arc, RwLock, RwLockWriteGuard};

use tracing::{debug, info, warn};

use super::{CredentialVerifier, Credentials, DemoVerifier, Identity, IdentityUpdate, SessionState};
use crate::error::TraceAgriError;
use crate::storage::{MemoryStorage, SessionStorage};
use crate::Result;

/// Storage key of the session record.
pub const SESSION_KEY: &str = "traceagri-user";

/// Thread-safe session store.
///
/// Every mutation writes durable storage before replacing the in-memory
/// state, both under the state write lock. If storage fails, neither side
/// changes.
pub struct SessionStore {
    state: RwLock<SessionState>,
    storage: Arc<dyn SessionStorage>,
    verifier: Arc<dyn CredentialVerifier>,
    key: String,
}

impl SessionStore {
    /// Create an anonymous store over `storage`, using the demo verifier.
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self::with_verifier(storage, Arc::new(DemoVerifier))
    }

    /// Create an anonymous store with an explicit verifier.
    pub fn with_verifier(
        storage: Arc<dyn SessionStorage>,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            state: RwLock::new(SessionState::Anonymous),
            storage,
            verifier,
            key: SESSION_KEY.to_string(),
        }
    }

    /// Create a store backed by fresh in-memory storage.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Persist the record under `key` instead of [`SESSION_KEY`].
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Storage key of the session record.
    pub fn key(&self) -> &str {
        &self.key
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, SessionState>> {
        self.state.write().map_err(|_| TraceAgriError::LockPoisoned)
    }

    /// Reload the identity persisted by a previous run.
    ///
    /// Returns `true` if a session was restored. Never fails: without a
    /// readable record the store ends up anonymous, whatever it held before,
    /// and a record that does not decode is erased so it cannot shadow the
    /// next sign-in.
    pub fn restore(&self) -> bool {
        let mut state = match self.write_state() {
            Ok(state) => state,
            Err(e) => {
                warn!(error = %e, "cannot restore session");
                return false;
            }
        };

        let record = match self.storage.get(&self.key) {
            Ok(Some(record)) => record,
            Ok(None) => {
                debug!(key = %self.key, "no session record to restore");
                *state = SessionState::Anonymous;
                return false;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "session record unreadable, signing out");
                *state = SessionState::Anonymous;
                return false;
            }
        };

        match Identity::from_record(&record) {
            Ok(identity) => {
                info!(farmer_id = %identity.farmer_id, "session restored");
                *state = SessionState::Authenticated(identity);
                true
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding corrupt session record");
                if let Err(e) = self.storage.remove(&self.key) {
                    warn!(key = %self.key, error = %e, "failed to erase corrupt session record");
                }
                *state = SessionState::Anonymous;
                false
            }
        }
    }

    /// Sign in.
    ///
    /// Returns `Ok(false)` without touching state when either field is empty
    /// or the verifier rejects the pair. On success the identity is persisted
    /// and the store becomes authenticated, replacing any previous identity.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<bool> {
        let credentials = Credentials::new(email, password);
        if !credentials.is_complete() {
            debug!("sign-in rejected: incomplete credentials");
            return Ok(false);
        }

        let Some(identity) = self.verifier.verify(&credentials).await? else {
            info!("sign-in rejected by verifier");
            return Ok(false);
        };

        let record = identity.to_record()?;
        let mut state = self.write_state()?;
        self.storage.set(&self.key, &record)?;
        info!(farmer_id = %identity.farmer_id, "signed in");
        *state = SessionState::Authenticated(identity);
        Ok(true)
    }

    /// Sign out and erase the persisted record. Calling it while anonymous
    /// is harmless.
    pub fn deauthenticate(&self) -> Result<()> {
        let mut state = self.write_state()?;
        self.storage.remove(&self.key)?;
        if let Some(identity) = state.identity() {
            info!(farmer_id = %identity.farmer_id, "signed out");
        }
        *state = SessionState::Anonymous;
        Ok(())
    }

    /// Merge `update` into the signed-in identity and persist it.
    ///
    /// Returns `Ok(false)` and changes nothing while anonymous.
    pub fn update_identity(&self, update: IdentityUpdate) -> Result<bool> {
        let mut state = self.write_state()?;
        let SessionState::Authenticated(current) = &*state else {
            debug!("ignoring profile update while anonymous");
            return Ok(false);
        };

        let mut updated = current.clone();
        updated.apply(update);
        self.storage.set(&self.key, &updated.to_record()?)?;
        debug!(farmer_id = %updated.farmer_id, "profile updated");
        *state = SessionState::Authenticated(updated);
        Ok(true)
    }

    /// Check if a farmer is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .map(|s| s.is_authenticated())
            .unwrap_or(false)
    }

    /// Snapshot of the signed-in identity.
    pub fn current_identity(&self) -> Option<Identity> {
        self.state
            .read()
            .ok()
            .and_then(|s| s.identity().cloned())
    }

    /// Snapshot of the whole state.
    pub fn state(&self) -> SessionState {
        self.state.read().map(|s| s.clone()).unwrap_or_default()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("key", &self.key)
            .field("state", &self.state().label())
            .finish_non_exhaustive()
    }
}
