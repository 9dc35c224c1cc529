//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for launcher testing:
//! - Test environment setup with a temporary directory tree
//! - Builders for scripts, interpreters, and symlinks
//! - A command constructor for the sibexec binary

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::{symlink, PermissionsExt};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated directory tree.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the sibexec binary.
    pub fn command(&self) -> Command {
        Command::cargo_bin("sibexec").expect("Failed to find sibexec binary")
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory tree under the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a plain (non-executable) file.
    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(rel);
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write an executable shell script.
    pub fn write_executable(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.write_file(rel, contents);
        let mut perms = fs::metadata(&path).expect("Failed to stat script").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to chmod script");
        path
    }

    /// Create a symlink at `link` (relative to the temp root) pointing at
    /// `target` (used verbatim, relative or absolute).
    pub fn link(&self, target: impl AsRef<Path>, link: &str) -> PathBuf {
        let path = self.temp_path.join(link);
        symlink(target, &path).expect("Failed to create symlink");
        path
    }

    /// Write an interpreter that prints its own argv, one entry per line.
    ///
    /// Lets tests observe exactly which argument vector survived the exec.
    pub fn write_echo_interpreter(&self, rel: &str) -> PathBuf {
        self.write_executable(rel, "#!/bin/sh\nprintf '%s\\n' \"$0\" \"$@\"\n")
    }
}
