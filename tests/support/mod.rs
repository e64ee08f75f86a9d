#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

/// Scratch working directory for one test
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn tasks_file(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    pub fn write_file(&self, rel_path: &str, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn read_tasks(&self) -> Value {
        let contents = fs::read_to_string(self.tasks_file()).expect("read tasks.json");
        serde_json::from_str(&contents).expect("tasks.json is json")
    }

    /// `task-cli` running inside this directory with a clean environment
    pub fn cmd(&self) -> Command {
        let mut cmd = task_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}

pub fn task_cmd() -> Command {
    let mut cmd = Command::cargo_bin("task-cli").expect("binary");
    cmd.env_remove("TASK_CLI_FILE").env_remove("RUST_LOG");
    cmd
}
