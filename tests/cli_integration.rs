//! CLI integration tests.
//!
//! These tests verify argument parsing, configuration loading, and command
//! execution against on-disk session storage.

use std::ffi::OsString;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

use traceagri::cli::{parse_args_from, Command};
use traceagri::config::{Config, StorageBackend};
use traceagri::{commands, AppContext, Locale, Surface};

fn args(args: &[&str]) -> Vec<OsString> {
    std::iter::once("traceagri")
        .chain(args.iter().copied())
        .map(OsString::from)
        .collect()
}

async fn run(config: &Config, argv: &[&str]) -> (bool, String) {
    let parsed = parse_args_from(args(argv)).unwrap();
    let context = AppContext::start(config).unwrap();
    let mut out = Vec::new();
    let ok = commands::execute(&context, parsed.command.unwrap(), &mut out)
        .await
        .unwrap();
    (ok, String::from_utf8(out).unwrap())
}

// ============================================================================
// CLI Argument Tests
// ============================================================================

#[test]
fn test_cli_defaults() {
    let result = parse_args_from(args(&[])).unwrap();

    assert!(result.config.is_none());
    assert!(result.data_dir.is_none());
    assert!(result.locale.is_none());
    assert!(result.command.is_none());
    assert!(!result.help);
}

#[test]
fn test_cli_full_options() {
    let result = parse_args_from(args(&[
        "-c",
        "/etc/traceagri.json",
        "-d",
        "/var/lib/traceagri",
        "-L",
        "hi",
        "-l",
        "debug",
        "translate",
        "nav.profile",
    ]))
    .unwrap();

    assert_eq!(
        result.config.unwrap().to_str().unwrap(),
        "/etc/traceagri.json"
    );
    assert_eq!(result.locale, Some(Locale::Hi));
    assert_eq!(result.log_level, Some("debug".to_string()));
    assert_eq!(
        result.command,
        Some(Command::Translate(vec!["nav.profile".into()]))
    );
}

#[test]
fn test_cli_invalid_locale() {
    assert!(parse_args_from(args(&["-L", "de"])).is_err());
}

// ============================================================================
// Config Loading Tests
// ============================================================================

#[test]
fn test_config_file_then_args() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{"locale": {"default": "hi"}, "logging": {"level": "error"}}"#)
        .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let parsed = parse_args_from(args(&["-c", &path, "-l", "trace"])).unwrap();
    let config = Config::load(&parsed).unwrap();

    assert_eq!(config.locale.default, Locale::Hi);
    assert_eq!(config.log_filter(), "trace");
}

#[test]
fn test_config_missing_file() {
    let parsed = parse_args_from(args(&["-c", "/nonexistent/traceagri.json"])).unwrap();
    assert!(Config::load(&parsed).is_err());
}

// ============================================================================
// Command Tests
// ============================================================================

#[tokio::test]
async fn test_login_whoami_logout_flow() {
    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    config.storage.data_dir = dir.path().to_path_buf();

    let (ok, _) = run(&config, &["login", "ram@example.com", "secret"]).await;
    assert!(ok);

    let (ok, out) = run(&config, &["whoami"]).await;
    assert!(ok);
    assert!(out.contains("Email: ram@example.com"));
    assert!(out.contains("Farmer ID: F001"));

    let (ok, _) = run(&config, &["update", "--location", "Amritsar, India"]).await;
    assert!(ok);
    let (_, out) = run(&config, &["whoami"]).await;
    assert!(out.contains("Location: Amritsar, India"));

    let (ok, _) = run(&config, &["logout"]).await;
    assert!(ok);
    let context = AppContext::start(&config).unwrap();
    assert_eq!(context.surface(), Surface::SignIn);
}

#[tokio::test]
async fn test_update_while_signed_out() {
    let mut config = Config::default();
    config.storage.backend = StorageBackend::Memory;

    let (ok, out) = run(&config, &["update", "--phone", "1"]).await;
    assert!(!ok);
    assert!(out.contains("Welcome to TraceAgri Chain"));
}

#[tokio::test]
async fn test_translate_in_hindi() {
    let mut config = Config::default();
    config.storage.backend = StorageBackend::Memory;
    config.locale.default = Locale::Hi;

    let (ok, out) = run(&config, &["translate", "nav.dashboard", "missing.key"]).await;
    assert!(ok);
    assert_eq!(out, "डैशबोर्ड\nmissing.key\n");
}
