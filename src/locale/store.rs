//! Active locale and translation lookup.

use std::sync::{Arc, RwLock};

use tracing::debug;

use super::{Catalog, Locale};

/// Holds the active display language.
///
/// The active locale lives in memory only; a new store always starts from
/// its initial locale.
#[derive(Debug)]
pub struct LocaleStore {
    active: RwLock<Locale>,
    catalog: Arc<Catalog>,
}

impl LocaleStore {
    /// Create a store over the built-in catalog, starting in English.
    pub fn new() -> Self {
        Self::with_catalog(Catalog::builtin(), Locale::default())
    }

    /// Create a store over `catalog`, starting in `initial`.
    pub fn with_catalog(catalog: Arc<Catalog>, initial: Locale) -> Self {
        Self {
            active: RwLock::new(initial),
            catalog,
        }
    }

    /// Currently active locale.
    pub fn active_locale(&self) -> Locale {
        self.active.read().map(|l| *l).unwrap_or_default()
    }

    /// Switch the active locale. Takes effect on the next lookup.
    pub fn set_locale(&self, locale: Locale) {
        match self.active.write() {
            Ok(mut active) => *active = locale,
            Err(poisoned) => *poisoned.into_inner() = locale,
        }
        debug!(%locale, "locale changed");
    }

    /// Flip between the two locales and return the new one.
    pub fn toggle(&self) -> Locale {
        let next = match self.active.write() {
            Ok(mut active) => {
                *active = active.toggled();
                *active
            }
            Err(poisoned) => {
                let mut active = poisoned.into_inner();
                *active = active.toggled();
                *active
            }
        };
        debug!(locale = %next, "locale toggled");
        next
    }

    /// Display string for `key` in the active locale.
    ///
    /// Unknown keys, and keys whose string is empty, come back unchanged so
    /// gaps stay visible on screen.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.translate_in(self.active_locale(), key)
    }

    /// Display string for `key` in an explicit locale.
    pub fn translate_in<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.catalog
            .get(locale, key)
            .filter(|s| !s.is_empty())
            .unwrap_or(key)
    }

    /// The catalog backing this store.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::new()
    }
}
