//! Session and locale lifecycle tests.
//!
//! These tests drive the public API the way a view layer would, with the
//! session record kept on disk between simulated process restarts.

use std::sync::Arc;

use tempfile::TempDir;
use traceagri::session::SESSION_KEY;
use traceagri::{
    FileStorage, Identity, IdentityUpdate, Locale, LocaleStore, SessionState, SessionStorage,
    SessionStore,
};

/// A fresh store over the same directory, as after a process restart.
fn restart(dir: &TempDir) -> SessionStore {
    let store = SessionStore::new(Arc::new(FileStorage::new(dir.path())));
    store.restore();
    store
}

// ============================================================================
// Session Tests
// ============================================================================

#[test]
fn test_restore_with_no_record_stays_anonymous() {
    let dir = TempDir::new().unwrap();
    let store = restart(&dir);

    assert_eq!(store.state(), SessionState::Anonymous);
    assert!(store.current_identity().is_none());
}

#[tokio::test]
async fn test_login_survives_restart() {
    let dir = TempDir::new().unwrap();

    let store = restart(&dir);
    assert!(store.authenticate("a@b.com", "pw").await.unwrap());
    let signed_in = store.current_identity().unwrap();

    let restarted = restart(&dir);
    assert!(restarted.is_authenticated());
    assert_eq!(restarted.current_identity().unwrap(), signed_in);
}

#[tokio::test]
async fn test_authenticate_contract() {
    let dir = TempDir::new().unwrap();
    let store = restart(&dir);

    assert!(!store.authenticate("", "x").await.unwrap());
    assert!(!store.authenticate("x", "").await.unwrap());
    assert!(!store.authenticate("", "").await.unwrap());
    assert!(!store.is_authenticated());
    assert!(!dir.path().join("traceagri-user.json").exists());

    assert!(store.authenticate("a@b.com", "pw").await.unwrap());
    assert!(store.is_authenticated());
    assert!(dir.path().join("traceagri-user.json").exists());
}

#[tokio::test]
async fn test_update_merges_and_persists() {
    let dir = TempDir::new().unwrap();
    let store = restart(&dir);
    store.authenticate("a@b.com", "pw").await.unwrap();
    store
        .update_identity(IdentityUpdate::new().name("A").phone("1"))
        .unwrap();

    store
        .update_identity(IdentityUpdate::new().phone("2"))
        .unwrap();

    let restarted = restart(&dir);
    let identity = restarted.current_identity().unwrap();
    assert_eq!(identity.name, "A");
    assert_eq!(identity.phone, "2");
    assert_eq!(identity.specialization, "Organic Farming");
}

#[tokio::test]
async fn test_logout_clears_across_restart() {
    let dir = TempDir::new().unwrap();
    let store = restart(&dir);
    store.authenticate("a@b.com", "pw").await.unwrap();

    store.deauthenticate().unwrap();
    assert!(!store.is_authenticated());
    assert!(store.current_identity().is_none());

    let restarted = restart(&dir);
    assert!(!restarted.is_authenticated());
}

#[tokio::test]
async fn test_restore_after_record_deleted_signs_out() {
    let dir = TempDir::new().unwrap();
    let store = restart(&dir);
    assert!(store.authenticate("a@b.com", "pw").await.unwrap());

    std::fs::remove_file(dir.path().join("traceagri-user.json")).unwrap();

    assert!(!store.restore());
    assert_eq!(store.state(), SessionState::Anonymous);
}

#[test]
fn test_corrupt_record_is_discarded() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path());
    storage.set(SESSION_KEY, r#"{"id": 1, "name": null}"#).unwrap();

    let store = restart(&dir);
    assert!(!store.is_authenticated());
    assert!(storage.get(SESSION_KEY).unwrap().is_none());
}

#[test]
fn test_externally_written_record_restores() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path());
    storage
        .set(
            SESSION_KEY,
            r#"{
                "id": "42",
                "name": "Sita Devi",
                "email": "sita@example.com",
                "farmerId": "F042",
                "phone": "+91 9123456780",
                "location": "Bihar, India",
                "experience": 8,
                "specialization": "Dairy"
            }"#,
        )
        .unwrap();

    let store = restart(&dir);
    let identity: Identity = store.current_identity().unwrap();
    assert_eq!(identity.farmer_id, "F042");
    assert_eq!(identity.experience, 8);
    assert!(identity.avatar.is_none());
}

// ============================================================================
// Locale Tests
// ============================================================================

#[test]
fn test_translation_fallback_in_both_locales() {
    let locale = LocaleStore::new();
    for tag in Locale::ALL {
        locale.set_locale(tag);
        assert_eq!(locale.translate("nonexistent.key"), "nonexistent.key");
    }
}

#[tokio::test]
async fn test_locale_switch_does_not_touch_session_record() {
    let dir = TempDir::new().unwrap();
    let store = restart(&dir);
    store.authenticate("a@b.com", "pw").await.unwrap();
    let record_path = dir.path().join("traceagri-user.json");
    let before = std::fs::read_to_string(&record_path).unwrap();

    let locale = LocaleStore::new();
    locale.set_locale(Locale::Hi);
    assert_eq!(locale.translate("nav.dashboard"), "डैशबोर्ड");
    locale.set_locale(Locale::En);
    assert_eq!(locale.translate("nav.dashboard"), "Dashboard");

    let after = std::fs::read_to_string(&record_path).unwrap();
    assert_eq!(before, after);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}
