//! Integration tests for error handling, exit codes and configuration.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Semantic failure (unknown locale, missing required value, invalid config)
//! - 3: No data directory configured
//! - 4: Invalid arguments
//! - 6: Other library errors
//! - 7: Configuration error
//!
//! Each test documents the expected error scenario and verifies both the
//! exit code and error message quality.

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// Success Cases (Exit Code 0)
// ============================================================================

/// Successful commands return exit code 0.
#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();
    env.command()
        .args(["resolve", "--locale", "de", "//ldml/foo"])
        .assert()
        .code(0);
    env.command()
        .args(["chain", "--locale", "de"])
        .assert()
        .code(0);
}

// ============================================================================
// Semantic Failures (Exit Code 1)
// ============================================================================

/// A locale without a snapshot fails with exit code 1.
#[test]
fn test_unknown_locale() {
    let env = TestEnv::new();
    env.command()
        .args(["resolve", "--locale", "fr", "//ldml/foo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown locale: fr"));
}

/// An invalid configuration file fails validation with exit code 1.
#[test]
fn test_validate_config_invalid() {
    let env = TestEnv::empty();
    let file = env.write_file("ldres.yaml", "resolution:\n  max_alias_hops: 0\n");

    env.command_bare()
        .arg("validate-config")
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Validation error"));
}

/// A configuration file that does not parse fails with exit code 1.
#[test]
fn test_validate_config_unparsable() {
    let env = TestEnv::empty();
    let file = env.write_file("other.yaml", "resolution: [1, 2]\n");

    env.command_bare()
        .arg("validate-config")
        .arg(&file)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Parse error"));
}

/// A valid configuration file passes.
#[test]
fn test_validate_config_valid() {
    let env = TestEnv::empty();
    let file = env.write_file(
        "other.yaml",
        "resolution:\n  max_alias_hops: 12\nparent_locales:\n  es_MX: es_419\n",
    );

    env.command_bare()
        .arg("validate-config")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

// ============================================================================
// No Data Directory (Exit Code 3)
// ============================================================================

/// Commands needing snapshots fail without a data directory.
#[test]
fn test_no_data_directory() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["resolve", "--locale", "de", "//ldml/foo"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No data directory"));
}

// ============================================================================
// Invalid Arguments (Exit Code 4)
// ============================================================================

/// A malformed query path is an argument error.
#[test]
fn test_malformed_query_path() {
    let env = TestEnv::new();
    env.command()
        .args(["resolve", "--locale", "de", "//ldml/foo[@type"])
        .assert()
        .code(4);
}

/// A malformed locale id is an argument error.
#[test]
fn test_malformed_locale() {
    let env = TestEnv::new();
    env.command()
        .args(["resolve", "--locale", "en__GB", "//ldml/foo"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid locale id"));
}

/// A data directory that does not exist is an argument error.
#[test]
fn test_missing_data_directory() {
    let env = TestEnv::empty();
    env.command_bare()
        .arg("--data-dir")
        .arg(env.path().join("nope"))
        .args(["chain", "--locale", "de"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Data directory not found"));
}

/// Validating a file that does not exist is an argument error.
#[test]
fn test_validate_config_missing_file() {
    let env = TestEnv::empty();
    env.command_bare()
        .args(["validate-config", "/nonexistent/ldres.yaml"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("File not found"));
}

// ============================================================================
// Library Errors (Exit Code 6)
// ============================================================================

/// A catalog without root cannot build chains.
#[test]
fn test_missing_root_snapshot() {
    let env = TestEnv::empty();
    env.write_snapshot("de.yaml", "locale: de\n");
    env.command()
        .args(["chain", "--locale", "de"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("root"));
}

/// Aliases that loop are reported as cycles.
#[test]
fn test_alias_cycle() {
    let env = TestEnv::empty();
    env.write_snapshot(
        "root.yaml",
        r#"locale: root
entries:
  - path: '//ldml/a/alias[@source="locale"][@path="../b"]'
    value: ''
  - path: '//ldml/b/alias[@source="locale"][@path="../a"]'
    value: ''
"#,
    );
    env.command()
        .args(["resolve", "--locale", "root", "//ldml/a/x"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("alias cycle"));
}

// ============================================================================
// Configuration (Exit Code 7) and Sources
// ============================================================================

/// A broken project configuration is a configuration error.
#[test]
fn test_broken_project_config() {
    let env = TestEnv::new();
    env.write_file("ldres.yaml", "resolution:\n  unknown_key: 1\n");

    env.command()
        .args(["chain", "--locale", "de"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

/// An invalid environment override is a configuration error.
#[test]
fn test_invalid_env_override() {
    let env = TestEnv::new();
    env.command()
        .env("LDRES_IMPLICIT_ALT", "maybe")
        .args(["chain", "--locale", "de"])
        .assert()
        .code(7);
}

/// The data directory can come from the project configuration.
#[test]
fn test_data_dir_from_project_config() {
    let env = TestEnv::new();
    env.write_file("ldres.yaml", "data_dir: locales\n");

    env.command_bare()
        .args(["resolve", "--locale", "de", "//ldml/foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("value:     X"));
}

/// The data directory can come from the environment.
#[test]
fn test_data_dir_from_env() {
    let env = TestEnv::new();
    env.command_bare()
        .env("LDRES_DATA_DIR", &env.data_dir)
        .args(["chain", "--locale", "en_GB"])
        .assert()
        .success()
        .stdout("en_GB -> en -> root\n");
}

/// Configured bounds apply to resolution.
#[test]
fn test_env_hop_bound_applies() {
    let env = TestEnv::new();
    env.command()
        .env("LDRES_MAX_ALIAS_HOPS", "1")
        .args(["resolve", "--locale", "de", "//ldml/a/c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("value:     Y"));

    env.command()
        .env("LDRES_IMPLICIT_COUNT", "false")
        .args([
            "resolve",
            "--locale",
            "de",
            "--require",
            r#"//ldml/units/unit[@type="m"]/unitPattern[@count="one"]"#,
        ])
        .assert()
        .code(1);
}
