//! Application context: the composition root for the two stores.
//!
//! The view layer never reaches for global state. It is handed one
//! [`AppContext`] holding shared handles to the session store and the
//! locale store, both built from [`Config`].

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::{Config, StorageBackend};
use crate::locale::{Catalog, LocaleStore};
use crate::session::{CredentialVerifier, DemoVerifier, SessionStore};
use crate::storage::{FileStorage, MemoryStorage, SessionStorage};
use crate::Result;

/// What the view layer should present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Nobody is signed in: only credential entry is available.
    SignIn,
    /// A farmer is signed in: the main application shell.
    Shell,
}

/// Shared handles to the session and locale stores.
#[derive(Debug, Clone)]
pub struct AppContext {
    session: Arc<SessionStore>,
    locale: Arc<LocaleStore>,
}

impl AppContext {
    /// Compose a context from existing stores.
    pub fn new(session: Arc<SessionStore>, locale: Arc<LocaleStore>) -> Self {
        Self { session, locale }
    }

    /// Build both stores from configuration, using the demo verifier.
    ///
    /// The session starts anonymous; see [`AppContext::start`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::from_config_with_verifier(config, Arc::new(DemoVerifier))
    }

    /// Build both stores from configuration with an explicit verifier.
    pub fn from_config_with_verifier(
        config: &Config,
        verifier: Arc<dyn CredentialVerifier>,
    ) -> Result<Self> {
        let storage: Arc<dyn SessionStorage> = match config.storage.backend {
            StorageBackend::File => {
                debug!(dir = %config.storage.data_dir.display(), "using file storage");
                Arc::new(FileStorage::new(&config.storage.data_dir))
            }
            StorageBackend::Memory => {
                debug!("using in-memory storage");
                Arc::new(MemoryStorage::new())
            }
        };

        let session = SessionStore::with_verifier(storage, verifier)
            .with_key(config.storage.session_key.clone());

        let catalog = match config.locale.catalog {
            Some(ref path) => {
                let catalog = Catalog::from_file(path)?;
                if catalog.is_empty() {
                    warn!(path = %path.display(), "translation catalog defines no keys");
                } else {
                    info!(path = %path.display(), keys = catalog.len(), "loaded translation catalog");
                }
                Arc::new(catalog)
            }
            None => Catalog::builtin(),
        };
        let locale = LocaleStore::with_catalog(catalog, config.locale.default);

        Ok(Self::new(Arc::new(session), Arc::new(locale)))
    }

    /// Build the context and restore any persisted session.
    pub fn start(config: &Config) -> Result<Self> {
        let context = Self::from_config(config)?;
        context.session.restore();
        debug!(surface = ?context.surface(), "application context ready");
        Ok(context)
    }

    /// Session store handle.
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Locale store handle.
    pub fn locale(&self) -> &Arc<LocaleStore> {
        &self.locale
    }

    /// Shorthand for [`LocaleStore::translate`].
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.locale.translate(key)
    }

    /// Surface the view layer should render for the current session.
    pub fn surface(&self) -> Surface {
        if self.session.is_authenticated() {
            Surface::Shell
        } else {
            Surface::SignIn
        }
    }
}
