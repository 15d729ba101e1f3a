//! Binary-level tests for prism-scaffold.

use std::fs;

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

fn scaffold(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("prism-scaffold");
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("PRISM_SCAFFOLD__ENGINE__STRICT")
        .env_remove("PRISM_SCAFFOLD__ENGINE__WORKERS")
        .env_remove("PRISM_SCAFFOLD__TEMPLATES__OVERRIDE_DIR");
    cmd
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    scaffold(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PROJECT_NAME"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();
    scaffold(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_default_project_name() {
    let temp = TempDir::new().unwrap();
    scaffold(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Creating PRISM Carbon Registry structure: prism-carbon-registry",
        ))
        .stdout(predicate::str::is_match(r"Created \d+ directories").unwrap())
        .stdout(predicate::str::contains("cd prism-carbon-registry"))
        .stdout(predicate::str::contains("./tools/scripts/setup.sh"));

    let root = temp.path().join("prism-carbon-registry");
    assert!(root.join("docker-compose.yml").is_file());
    assert!(root.join("services/api-gateway/app/main.py").is_file());
    assert!(root.join("frontend/web-app/package.json").is_file());
    assert!(root.join(".github/workflows").is_dir());
}

#[test]
fn test_custom_project_name() {
    let temp = TempDir::new().unwrap();
    scaffold(&temp)
        .arg("my-registry")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Creating PRISM Carbon Registry structure: my-registry",
        ));

    let readme = fs::read_to_string(temp.path().join("my-registry/README.md")).unwrap();
    assert!(readme.starts_with("# My Registry"));
    assert!(!temp.path().join("prism-carbon-registry").exists());
}

#[test]
fn test_service_parameters_are_substituted() {
    let temp = TempDir::new().unwrap();
    scaffold(&temp).assert().success();

    let main = fs::read_to_string(
        temp.path()
            .join("prism-carbon-registry/services/user-service/app/main.py"),
    )
    .unwrap();
    assert!(main.contains("title=\"User Service\""));
    assert!(main.contains("\"service\": \"user-service\""));
    assert!(!main.contains("{{"));
}

#[test]
fn test_rerun_is_idempotent() {
    let temp = TempDir::new().unwrap();
    scaffold(&temp).arg("again").assert().success();
    let compose = temp.path().join("again/docker-compose.yml");
    let first = fs::read_to_string(&compose).unwrap();

    scaffold(&temp)
        .arg("again")
        .assert()
        .success()
        .stdout(predicate::str::contains("created successfully"));
    assert_eq!(fs::read_to_string(&compose).unwrap(), first);
}

#[test]
fn test_quiet_flag() {
    let temp = TempDir::new().unwrap();
    scaffold(&temp)
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(temp.path().join("prism-carbon-registry/README.md").is_file());
}

#[test]
fn test_workers_from_config_file() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("scaffold.toml");
    fs::write(&config, "[engine]\nworkers = 4\n").unwrap();

    scaffold(&temp)
        .args(["--config", "scaffold.toml", "pooled"])
        .assert()
        .success();
    assert!(temp.path().join("pooled/tools/scripts/setup.sh").is_file());
}
