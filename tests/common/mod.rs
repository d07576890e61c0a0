//! Isolated environment for running the sharetree binary in tests.
//!
//! Each `TestEnv` owns a temp directory used as working directory, HOME and
//! XDG_CONFIG_HOME, so no user config leaks in.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::Command;

use tempfile::TempDir;

/// Three files under the `library` root; `b/1.mp3` is already downloaded.
pub const LIBRARY_INDEX: &str = r#"{
  "node_id": "peer-1",
  "records": [
    { "root": "library", "path": "a/1.mp3", "file_size": { "kind": "actual", "bytes": 1000 } },
    { "root": "library", "path": "a/2.mp3", "file_size": { "kind": "estimated", "bytes": 2000 } },
    { "root": "library", "path": "b/1.mp3", "file_size": { "kind": "unknown" }, "downloaded": true }
  ]
}"#;

/// Result of running a sharetree command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub struct TestEnv {
    pub dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_sharetree")),
        }
    }

    /// Write a file relative to the environment root and return its path
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.dir.path())
            .args(args)
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join(".config"))
            .env("NO_COLOR", "1")
            .env("TERM", "xterm-256color")
            .env("LANG", "en_US.UTF-8")
            .env_remove("LC_ALL")
            .env_remove("LC_CTYPE")
            .env_remove("RUST_LOG")
            .env_remove("SHARETREE_COLOR")
            .env_remove("SHARETREE_UNICODE")
            .env_remove("SHARETREE_EXPAND_DEPTH")
            .env_remove("SHARETREE_SIZE_UNITS");
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
