//! End-to-end tests for the cleanforge binary.
//!
//! Every invocation that touches the filesystem runs inside a `tempfile`
//! directory and passes `--skip-install` so no test ever shells out to npm.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cleanforge() -> Command {
    let mut cmd = Command::cargo_bin("cleanforge").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Scaffold a fresh project and return the tempdir holding it.
fn scaffolded_project() -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    cleanforge()
        .current_dir(temp.path())
        .args(["new", "test-api", "--database", "mongo", "--skip-install", "--yes"])
        .assert()
        .success();
    let root = temp.path().join("test-api");
    (temp, root)
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_generators() {
    cleanforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("entity"))
        .stdout(predicate::str::contains("adapter-orm"))
        .stdout(predicate::str::contains("interface-resource"));
}

#[test]
fn version_matches_cargo() {
    cleanforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_color_env_accepts_any_nonempty_value() {
    // no-color.org: the variable's value carries no meaning, only its
    // presence. "1" must not be rejected as a flag value.
    let temp = TempDir::new().unwrap();
    let assert = Command::cargo_bin("cleanforge")
        .unwrap()
        .env("NO_COLOR", "1")
        .current_dir(temp.path())
        .args(["new", "demo-api", "--skip-install", "--yes", "--dry-run"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).into_owned();
    assert!(!stdout.contains('\x1b'), "expected no ANSI escapes: {stdout}");
}

#[test]
fn completions_emit_a_script() {
    cleanforge()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cleanforge"));
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn new_creates_the_initial_tree() {
    let (_temp, root) = scaffolded_project();

    assert!(root.join("package.json").exists());
    assert!(root.join("tsconfig.json").exists());
    assert!(root.join("src/application/app.ts").exists());
    assert!(root.join("src/application/index.ts").exists());
    assert!(root.join("src/domain/models").is_dir());
    assert!(root.join("src/domain/use-cases/impl").is_dir());

    let manifest = fs::read_to_string(root.join("package.json")).unwrap();
    assert!(manifest.contains("\"name\": \"test-api\""));
}

#[test]
fn new_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    cleanforge()
        .current_dir(temp.path())
        .args(["new", "test-api", "--database", "mongo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("test-api").exists());
}

#[test]
fn new_force_scaffolds_into_existing_directory() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("test-api");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("notes.txt"), "keep me").unwrap();

    cleanforge()
        .current_dir(temp.path())
        .args([
            "new",
            "test-api",
            "--database",
            "mongo",
            "--skip-install",
            "--yes",
            "--force",
        ])
        .assert()
        .success();

    assert!(root.join("package.json").exists());
    assert!(root.join("src/application/app.ts").exists());
    // Pre-existing user content is left alone.
    assert_eq!(fs::read_to_string(root.join("notes.txt")).unwrap(), "keep me");
}

// ── artifact generators ───────────────────────────────────────────────────────

#[test]
fn entity_creates_model_and_gateway() {
    let (_temp, root) = scaffolded_project();

    cleanforge()
        .current_dir(&root)
        .args(["entity", "--name", "user-profile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user-profile.ts"));

    let model = fs::read_to_string(root.join("src/domain/models/user-profile.ts")).unwrap();
    assert!(model.contains("UserProfileModel"));
    assert!(model.contains("AddUserProfileParams"));

    assert!(
        root.join("src/domain/models/gateways/user-profile-repository.ts")
            .exists()
    );
}

#[test]
fn quiet_entity_prints_nothing() {
    let (_temp, root) = scaffolded_project();

    cleanforge()
        .current_dir(&root)
        .args(["-q", "entity", "--name", "user"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn service_creates_contract_and_impl() {
    let (_temp, root) = scaffolded_project();

    cleanforge()
        .current_dir(&root)
        .args(["service", "--name", "user"])
        .assert()
        .success();

    assert!(root.join("src/domain/use-cases/user-service.ts").exists());
    assert!(
        root.join("src/domain/use-cases/impl/user-service-impl.ts")
            .exists()
    );
}

#[test]
fn controller_injects_existing_service_impl() {
    let (_temp, root) = scaffolded_project();

    cleanforge()
        .current_dir(&root)
        .args(["service", "--name", "user"])
        .assert()
        .success();
    cleanforge()
        .current_dir(&root)
        .args(["controller", "--name", "user"])
        .assert()
        .success();

    let controller = fs::read_to_string(
        root.join("src/infrastructure/entry-points/api/user-controller.ts"),
    )
    .unwrap();
    assert!(controller.contains("UserServiceImpl"));
}

#[test]
fn controller_without_service_is_bare() {
    let (_temp, root) = scaffolded_project();

    cleanforge()
        .current_dir(&root)
        .args(["controller", "--name", "order"])
        .assert()
        .success();

    let controller = fs::read_to_string(
        root.join("src/infrastructure/entry-points/api/order-controller.ts"),
    )
    .unwrap();
    assert!(!controller.contains("ServiceImpl"));
}

// ── adapter-orm + registry ────────────────────────────────────────────────────

fn registry_path(root: &Path) -> std::path::PathBuf {
    root.join("src/application/singleton.ts")
}

#[test]
fn adapter_orm_wires_the_full_mongo_stack() {
    let (_temp, root) = scaffolded_project();

    cleanforge()
        .current_dir(&root)
        .args(["entity", "--name", "user"])
        .assert()
        .success();
    cleanforge()
        .current_dir(&root)
        .args(["adapter-orm", "--name", "user", "--orm", "mongo", "--skip-install"])
        .assert()
        .success();

    assert!(
        root.join(
            "src/infrastructure/driven-adapters/adapters/orm/mongo/user-mongo-repository-adapter.ts"
        )
        .exists()
    );
    assert!(
        root.join("src/infrastructure/driven-adapters/adapters/orm/mongo/models/user-mongo.ts")
            .exists()
    );
    assert!(root.join("src/application/config/mongoose-instance.ts").exists());

    let registry = fs::read_to_string(registry_path(&root)).unwrap();
    assert!(registry.contains("MongoConfiguration.getInstance()"));
    assert!(registry.contains(
        "import { MongoConfiguration } from \"@/application/config/mongoose-instance\";"
    ));

    let manifest = fs::read_to_string(root.join("package.json")).unwrap();
    assert!(manifest.contains("\"mongoose\""));
}

#[test]
fn adapter_orm_registry_patch_is_idempotent() {
    let (_temp, root) = scaffolded_project();

    cleanforge()
        .current_dir(&root)
        .args(["entity", "--name", "user"])
        .assert()
        .success();
    cleanforge()
        .current_dir(&root)
        .args(["adapter-orm", "--name", "user", "--orm", "mongo", "--skip-install"])
        .assert()
        .success();

    let first = fs::read_to_string(registry_path(&root)).unwrap();

    // Second run: the adapter and model already exist, so regenerate only
    // the registry by deleting the generated files first.
    fs::remove_file(root.join(
        "src/infrastructure/driven-adapters/adapters/orm/mongo/user-mongo-repository-adapter.ts",
    ))
    .unwrap();
    fs::remove_file(
        root.join("src/infrastructure/driven-adapters/adapters/orm/mongo/models/user-mongo.ts"),
    )
    .unwrap();
    cleanforge()
        .current_dir(&root)
        .args(["adapter-orm", "--name", "user", "--orm", "mongo", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already registered"));

    let second = fs::read_to_string(registry_path(&root)).unwrap();
    assert_eq!(first, second, "registry must be byte-identical after a repeat run");
}

// ── database ──────────────────────────────────────────────────────────────────

#[test]
fn database_rewrites_entry_and_adds_helper() {
    let (_temp, root) = scaffolded_project();

    cleanforge()
        .current_dir(&root)
        .args(["database", "--database", "mysql", "--skip-install"])
        .assert()
        .success();

    assert!(
        root.join("src/infrastructure/driven-adapters/adapters/mysql-adapter/mysql-helper.ts")
            .exists()
    );
    let entry = fs::read_to_string(root.join("src/application/index.ts")).unwrap();
    assert!(entry.contains("MysqlHelper"));

    let manifest = fs::read_to_string(root.join("package.json")).unwrap();
    assert!(manifest.contains("\"mysql\""));
}
