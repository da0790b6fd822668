//! Localization module.
//!
//! Provides the two supported display languages, the bilingual translation
//! catalog, and the store that tracks which language is active.

mod builtin;
mod catalog;
mod store;
mod tag;

pub use catalog::{Catalog, CatalogError};
pub use store::LocaleStore;
pub use tag::Locale;
