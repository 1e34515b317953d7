//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Snapshot fixtures describing a small locale hierarchy

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables read by the binary.
const LDRES_VARS: &[&str] = &[
    "LDRES_DATA_DIR",
    "LDRES_MAX_ALIAS_HOPS",
    "LDRES_MAX_CLOSURE_ROUNDS",
    "LDRES_IMPLICIT_ALT",
    "LDRES_IMPLICIT_COUNT",
    "LDRES_LOG_MODE",
];

/// Root snapshot: one plain value, an alias subtree and a plural pattern.
const ROOT_SNAPSHOT: &str = r#"locale: root
entries:
  - path: //ldml/p
    value: V0
  - path: '//ldml/a/alias[@source="locale"][@path="../b"]'
    value: ''
  - path: '//ldml/b/c[@draft="contributed"]'
    value: Y
  - path: '//ldml/units/unit[@type="m"]/unitPattern[@count="other"]'
    value: '{0} m'
"#;

const EN_SNAPSHOT: &str = r#"locale: en
entries:
  - path: //ldml/p
    value: V1
    comment: checked
"#;

const EN_GB_SNAPSHOT: &str = "locale: en_GB\n";

const DE_SNAPSHOT: &str = r#"locale: de
entries:
  - path: //ldml/foo
    value: X
"#;

/// Test environment with isolated home, working and data directories.
///
/// Commands run with `HOME` and the working directory inside the temporary
/// directory so no user or project configuration leaks in.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the snapshot directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new environment with an empty snapshot directory.
    pub fn empty() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("locales");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Create a new environment holding the standard fixture hierarchy:
    /// root, en, en_GB and de.
    pub fn new() -> Self {
        let env = Self::empty();
        env.write_snapshot("root.yaml", ROOT_SNAPSHOT);
        env.write_snapshot("en.yaml", EN_SNAPSHOT);
        env.write_snapshot("en_GB.yaml", EN_GB_SNAPSHOT);
        env.write_snapshot("de.yaml", DE_SNAPSHOT);
        env
    }

    /// Get a bare command builder without `--data-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("ldres").expect("Failed to find ldres binary");
        for var in LDRES_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.temp_path);
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a snapshot file into the data directory.
    pub fn write_snapshot(&self, name: &str, contents: &str) {
        std::fs::write(self.data_dir.join(name), contents).expect("Failed to write snapshot");
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Run `ldres resolve` and return stdout, asserting success.
    pub fn resolve(&self, locale: &str, path: &str) -> String {
        let output = self
            .command()
            .args(["resolve", "--locale", locale, path])
            .output()
            .expect("Failed to run resolve command");

        assert!(
            output.status.success(),
            "Resolve failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
