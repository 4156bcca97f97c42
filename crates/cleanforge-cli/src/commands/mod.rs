//! Command handlers.
//!
//! Each module translates CLI arguments into core types, wires up adapters,
//! calls the application services, and displays results.  No generation
//! logic lives here.

pub mod adapter;
pub mod completions;
pub mod config;
pub mod controller;
pub mod database;
pub mod entity;
pub mod interface;
pub mod new;
pub mod service;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use indicatif::ProgressBar;

use cleanforge_adapters::LocalFilesystem;
use cleanforge_core::{
    application::ports::Filesystem,
    domain::{
        DatabaseKind, InterfaceLocation, Manager, OrmKind, ProjectPaths, ResourceName,
    },
};

use crate::{
    cli::{Database, InterfacePath, ManagerArg, Orm},
    error::{CliError, CliResult},
};

// ── Shared wiring ─────────────────────────────────────────────────────────────

/// The production filesystem adapter, shared by the services of one command.
pub(crate) fn filesystem() -> Arc<dyn Filesystem> {
    Arc::new(LocalFilesystem::new())
}

/// Generators other than `new` operate on the project in the current
/// directory.
pub(crate) fn project_paths() -> CliResult<ProjectPaths> {
    let cwd = std::env::current_dir().map_err(|e| CliError::IoError {
        message: "failed to resolve the current directory".into(),
        source: e,
    })?;
    Ok(ProjectPaths::new(cwd))
}

/// Validate a `--name` argument into a [`ResourceName`].
pub(crate) fn resource_name(raw: &str) -> CliResult<ResourceName> {
    ResourceName::new(raw).map_err(|e| CliError::Core(e.into()))
}

/// Spinner shown while npm install runs; `None` in quiet mode.
pub(crate) fn install_spinner(quiet: bool) -> Option<ProgressBar> {
    if quiet {
        return None;
    }
    let pb = ProgressBar::new_spinner();
    pb.set_message("Installing dependencies...");
    pb.enable_steady_tick(Duration::from_millis(120));
    Some(pb)
}

/// Render a generated path relative to the project root for display.
pub(crate) fn display_path(paths: &ProjectPaths, file: &Path) -> String {
    file.strip_prefix(paths.root())
        .unwrap_or(file)
        .display()
        .to_string()
}

// ── Type conversions CLI → core ───────────────────────────────────────────────

pub(crate) fn convert_database(db: Database) -> DatabaseKind {
    match db {
        Database::Mongo => DatabaseKind::Mongo,
        Database::Mysql => DatabaseKind::Mysql,
        Database::Postgres => DatabaseKind::Postgres,
    }
}

pub(crate) fn convert_orm(orm: Orm) -> OrmKind {
    match orm {
        Orm::Mongo => OrmKind::Mongo,
        Orm::Sequelize => OrmKind::Sequelize,
    }
}

pub(crate) fn convert_manager(manager: ManagerArg) -> Manager {
    match manager {
        ManagerArg::Mysql => Manager::Mysql,
        ManagerArg::Postgres => Manager::Postgres,
        ManagerArg::Mongoose => Manager::Mongoose,
    }
}

pub(crate) fn convert_location(path: InterfacePath) -> InterfaceLocation {
    match path {
        InterfacePath::Entities => InterfaceLocation::Entities,
        InterfacePath::Service => InterfaceLocation::Service,
        InterfacePath::Infra => InterfaceLocation::Infra,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
