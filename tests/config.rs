mod support;

use std::fs;

use predicates::str::contains;
use task_cli::config::{Config, CONFIG_FILE};

use support::TestDir;

#[test]
fn config_defaults_when_missing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config::load_from_dir(dir.path());

    assert_eq!(config.storage.path, "tasks.json");
    assert_eq!(config.list.date_format, "%Y-%m-%d %H:%M:%S");
    assert_eq!(config.prompt.quit, "q");
}

#[test]
fn config_load_rejects_invalid_toml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = dir.path().join(CONFIG_FILE);
    fs::write(&config_path, "this = [not valid").expect("write config");

    let result = Config::load(&config_path);
    assert!(result.is_err());
}

#[test]
fn storage_path_comes_from_config() {
    let dir = TestDir::new();
    dir.write_file(CONFIG_FILE, "[storage]\npath = \"data/todo.json\"\n")
        .expect("write config");

    dir.cmd().args(["add", "configured"]).assert().success();

    assert!(dir.path().join("data").join("todo.json").exists());
    assert!(!dir.tasks_file().exists());
}

#[test]
fn file_flag_and_env_override_config() {
    let dir = TestDir::new();
    dir.write_file(CONFIG_FILE, "[storage]\npath = \"config.json\"\n")
        .expect("write config");

    dir.cmd()
        .args(["--file", "flag.json", "add", "from flag"])
        .assert()
        .success();
    dir.cmd()
        .env("TASK_CLI_FILE", "env.json")
        .args(["add", "from env"])
        .assert()
        .success();

    assert!(dir.path().join("flag.json").exists());
    assert!(dir.path().join("env.json").exists());
    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn date_format_and_quit_word_are_configurable() {
    let dir = TestDir::new();
    dir.write_file(
        CONFIG_FILE,
        "[list]\ndate_format = \"on %Y\"\n\n[prompt]\nquit = \"exit\"\n",
    )
    .expect("write config");
    dir.cmd().args(["add", "one"]).assert().success();

    dir.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::is_match(r"(?m)^1 one todo on \d{4} on \d{4}$").unwrap());

    dir.cmd()
        .arg("delete")
        .write_stdin("exit\n")
        .assert()
        .success()
        .stderr(contains("'exit' for exit"));
    assert_eq!(dir.read_tasks().as_array().expect("array").len(), 1);
}
