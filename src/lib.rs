//! # traceagri
//!
//! Session and localization state for the TraceAgri farmer application.
//!
//! Two services carry all shared state of the application:
//!
//! - **Session store**: the signed-in farmer, persisted across restarts
//!   through a pluggable key-value storage backend.
//! - **Locale store**: the active display language (English or Hindi) and
//!   the translation lookup, falling back to the raw key when a string is
//!   missing.
//!
//! Both are composed into an [`AppContext`] and handed to the view layer.
//!
//! ## Quick Start
//!
//! ```no_run
//! use traceagri::{AppContext, Config, IdentityUpdate, Locale};
//!
//! #[tokio::main]
//! async fn main() -> traceagri::Result<()> {
//!     traceagri::logging::try_init().ok();
//!
//!     let context = AppContext::start(&Config::default())?;
//!
//!     if !context.session().is_authenticated() {
//!         context.session().authenticate("ram@example.com", "secret").await?;
//!     }
//!     context
//!         .session()
//!         .update_identity(IdentityUpdate::new().phone("+91 9000000000"))?;
//!
//!     context.locale().set_locale(Locale::Hi);
//!     println!("{}", context.t("nav.dashboard"));
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod locale;
pub mod logging;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use app::{AppContext, Surface};
pub use config::Config;
pub use error::{Result, TraceAgriError};
pub use locale::{Catalog, CatalogError, Locale, LocaleStore};
pub use session::{
    CredentialVerifier, Credentials, DemoVerifier, Identity, IdentityUpdate, SessionState,
    SessionStore,
};
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
