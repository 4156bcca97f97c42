//! Tests for error handling, suggestions, and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cleanforge() -> Command {
    let mut cmd = Command::cargo_bin("cleanforge").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn new_over_existing_directory_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("existing-api")).unwrap();

    cleanforge()
        .current_dir(temp.path())
        .args(["new", "existing-api", "--database", "mongo", "--skip-install", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn invalid_project_name_is_rejected() {
    let temp = TempDir::new().unwrap();

    cleanforge()
        .current_dir(temp.path())
        .args(["new", ".hidden", "--database", "mongo", "--skip-install", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn interface_resource_without_entity_is_not_found() {
    let temp = TempDir::new().unwrap();

    cleanforge()
        .current_dir(temp.path())
        .args(["interface-resource", "--name", "user"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("does not exist"))
        .stderr(predicate::str::contains("cleanforge entity --name user"));
}

#[test]
fn adapter_orm_without_entity_is_not_found() {
    let temp = TempDir::new().unwrap();

    cleanforge()
        .current_dir(temp.path())
        .args(["adapter-orm", "--name", "user", "--orm", "mongo", "--skip-install"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn sequelize_without_manager_suggests_the_flag() {
    let temp = TempDir::new().unwrap();

    cleanforge()
        .current_dir(temp.path())
        .args(["adapter-orm", "--name", "user", "--orm", "sequelize", "--skip-install"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--manager"));
}

#[test]
fn mongoose_manager_with_sequelize_is_incompatible() {
    let temp = TempDir::new().unwrap();

    cleanforge()
        .current_dir(temp.path())
        .args([
            "adapter-orm",
            "--name",
            "user",
            "--orm",
            "sequelize",
            "--manager",
            "mongoose",
            "--skip-install",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn invalid_resource_name_is_rejected() {
    let temp = TempDir::new().unwrap();

    cleanforge()
        .current_dir(temp.path())
        .args(["entity", "--name", "User"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid resource name"));
}

#[test]
fn regenerating_an_existing_artifact_is_refused() {
    let temp = TempDir::new().unwrap();
    cleanforge()
        .current_dir(temp.path())
        .args(["new", "api", "--database", "mongo", "--skip-install", "--yes"])
        .assert()
        .success();
    let root = temp.path().join("api");

    cleanforge()
        .current_dir(&root)
        .args(["entity", "--name", "user"])
        .assert()
        .success();
    cleanforge()
        .current_dir(&root)
        .args(["entity", "--name", "user"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("File already exists"));
}

#[test]
fn corrupt_registry_reports_a_parse_error() {
    let temp = TempDir::new().unwrap();
    cleanforge()
        .current_dir(temp.path())
        .args(["new", "api", "--database", "mongo", "--skip-install", "--yes"])
        .assert()
        .success();
    let root = temp.path().join("api");

    cleanforge()
        .current_dir(&root)
        .args(["entity", "--name", "user"])
        .assert()
        .success();
    std::fs::write(
        root.join("src/application/singleton.ts"),
        "export const singletonInitializers: Array<() => Promise<void>> = [\n",
    )
    .unwrap();

    cleanforge()
        .current_dir(&root)
        .args(["adapter-orm", "--name", "user", "--orm", "mongo", "--skip-install"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("parse error"));
}

#[test]
fn missing_explicit_config_file_exits_with_config_code() {
    cleanforge()
        .args(["--config", "/definitely/not/here.toml", "config", "list"])
        .assert()
        .code(4);
}
