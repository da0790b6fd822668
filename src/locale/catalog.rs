//! Translation catalog.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use thiserror::Error;

use super::{builtin, Locale};

type Table = HashMap<String, String>;

/// Catalog construction errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The locale tables do not define the same keys.
    #[error(
        "translation keys differ between locales: missing in en {missing_in_en:?}, missing in hi {missing_in_hi:?}"
    )]
    KeyParity {
        missing_in_en: Vec<String>,
        missing_in_hi: Vec<String>,
    },

    /// A catalog file has no table for a locale.
    #[error("catalog has no table for locale {0}")]
    MissingLocale(Locale),

    /// Catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog file is not valid JSON of the expected shape.
    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Immutable key→string tables, one per locale.
///
/// Every constructor checks that both tables define the same key set.
#[derive(Debug, Clone)]
pub struct Catalog {
    en: Table,
    hi: Table,
}

static BUILTIN: OnceLock<Arc<Catalog>> = OnceLock::new();

fn to_table(pairs: &[(&str, &str)]) -> Table {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Catalog {
    /// The catalog compiled into the crate, built on first use.
    pub fn builtin() -> Arc<Catalog> {
        // Parity of the compiled tables is covered by the unit tests.
        BUILTIN
            .get_or_init(|| {
                Arc::new(Catalog {
                    en: to_table(builtin::EN),
                    hi: to_table(builtin::HI),
                })
            })
            .clone()
    }

    /// Build a catalog from explicit tables.
    pub fn from_tables(en: Table, hi: Table) -> Result<Self, CatalogError> {
        let catalog = Self { en, hi };
        catalog.check_parity()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file shaped as
    /// `{"en": {"key": "text", ...}, "hi": {...}}`.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut tables: HashMap<Locale, Table> =
            serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let en = tables
            .remove(&Locale::En)
            .ok_or(CatalogError::MissingLocale(Locale::En))?;
        let hi = tables
            .remove(&Locale::Hi)
            .ok_or(CatalogError::MissingLocale(Locale::Hi))?;
        Self::from_tables(en, hi)
    }

    fn table(&self, locale: Locale) -> &Table {
        match locale {
            Locale::En => &self.en,
            Locale::Hi => &self.hi,
        }
    }

    /// Look up `key` in the table for `locale`.
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.table(locale).get(key).map(String::as_str)
    }

    /// Check if `key` is defined.
    pub fn contains(&self, key: &str) -> bool {
        self.en.contains_key(key)
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let keys: BTreeSet<&str> = self.en.keys().map(String::as_str).collect();
        keys.into_iter().collect()
    }

    /// Number of keys per locale.
    pub fn len(&self) -> usize {
        self.en.len()
    }

    /// Check if the catalog defines no keys.
    pub fn is_empty(&self) -> bool {
        self.en.is_empty()
    }

    /// Verify that both tables define exactly the same keys.
    pub fn check_parity(&self) -> Result<(), CatalogError> {
        let missing = |from: &Table, to: &Table| -> Vec<String> {
            let keys: BTreeSet<&String> = from.keys().filter(|k| !to.contains_key(*k)).collect();
            keys.into_iter().cloned().collect()
        };

        let missing_in_en = missing(&self.hi, &self.en);
        let missing_in_hi = missing(&self.en, &self.hi);

        if missing_in_en.is_empty() && missing_in_hi.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::KeyParity {
                missing_in_en,
                missing_in_hi,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn table(pairs: &[(&str, &str)]) -> Table {
        to_table(pairs)
    }

    #[test]
    fn test_builtin_has_key_parity() {
        Catalog::builtin().check_parity().unwrap();
    }

    #[test]
    fn test_builtin_tables_have_no_duplicates() {
        assert_eq!(Catalog::builtin().len(), builtin::EN.len());
        assert_eq!(Catalog::builtin().len(), builtin::HI.len());
    }

    #[test]
    fn test_builtin_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get(Locale::En, "nav.dashboard"), Some("Dashboard"));
        assert_eq!(catalog.get(Locale::Hi, "nav.dashboard"), Some("डैशबोर्ड"));
        assert_eq!(catalog.get(Locale::En, "nonexistent.key"), None);
        assert!(catalog.contains("nav.dashboard"));
        assert!(!catalog.contains("nonexistent.key"));
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_keys_sorted() {
        let catalog = Catalog::builtin();
        let keys = catalog.keys();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
        assert!(keys.contains(&"auth.login"));
    }

    #[test]
    fn test_from_tables_rejects_mismatch() {
        let err = Catalog::from_tables(
            table(&[("a", "A"), ("b", "B")]),
            table(&[("a", "अ"), ("c", "स")]),
        )
        .unwrap_err();

        match err {
            CatalogError::KeyParity {
                missing_in_en,
                missing_in_hi,
            } => {
                assert_eq!(missing_in_en, vec!["c".to_string()]);
                assert_eq!(missing_in_hi, vec!["b".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            r#"{"en": {"greet": "Hello"}, "hi": {"greet": "नमस्ते"}}"#.as_bytes(),
        )
        .unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.get(Locale::Hi, "greet"), Some("नमस्ते"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_file_missing_locale() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"en": {"greet": "Hello"}}"#).unwrap();

        let err = Catalog::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::MissingLocale(Locale::Hi)));
    }

    #[test]
    fn test_from_file_unknown_locale() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"en": {}, "hi": {}, "fr": {}}"#).unwrap();

        let err = Catalog::from_file(file.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_from_file_missing_path() {
        let err = Catalog::from_file(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
