//! Environment override tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p bindcheck-infrastructure --test integration config_env -- --test-threads=1 --ignored
//! ```
//!
//! Tests use `unsafe` blocks for `env::set_var`/`env::remove_var` because
//! Rust 2024 edition requires this for environment variable mutations.

use bindcheck_infrastructure::ConfigLoader;
use bindcheck_infrastructure::config::ReporterKind;
use std::env;
use std::fs;
use tempfile::TempDir;

fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("bindcheck.toml");
    fs::write(&path, "parallel = false\nreporter = \"console\"\n").expect("write config");
    set_env("BINDCHECK_PARALLEL", "true");
    set_env("BINDCHECK_LOGGING__LEVEL", "warn");

    let config = ConfigLoader::new().with_config_path(&path).load();

    remove_env("BINDCHECK_PARALLEL");
    remove_env("BINDCHECK_LOGGING__LEVEL");

    let config = config.expect("config should load");
    assert!(config.parallel);
    assert_eq!(config.reporter, ReporterKind::Console);
    assert_eq!(config.logging.level, "warn");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_custom_env_prefix() {
    let dir = TempDir::new().expect("temp dir");
    set_env("VERIFYTEST_REPORTER", "silent");

    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .with_env_prefix("VERIFYTEST")
        .load();

    remove_env("VERIFYTEST_REPORTER");

    assert_eq!(
        config.expect("config should load").reporter,
        ReporterKind::Silent
    );
}
