//! Artifact Service - shared generator orchestration.
//!
//! Every `create:*` style command funnels through the same steps: check the
//! precondition, create parent directories, write the rendered files. The
//! command layer decides which files and which preconditions; this service
//! owns the filesystem choreography.

use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{Manager, OrmKind, ProjectPaths, ResourceName},
    error::ForgeResult,
};

/// Orchestrates writing a single generated artifact (one or more files).
pub struct ArtifactService {
    filesystem: Arc<dyn Filesystem>,
}

impl ArtifactService {
    pub fn new(filesystem: Arc<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Strictly create a file: error if it already exists.
    ///
    /// Every generator refuses to overwrite hand-edited output; the user
    /// must delete the file to regenerate it.
    #[instrument(skip(self, content), fields(path = %path.display()))]
    pub fn create_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        if self.filesystem.exists(path) {
            return Err(ApplicationError::FileExists {
                path: path.to_path_buf(),
            }
            .into());
        }

        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, content)?;

        info!("Artifact written");
        Ok(())
    }

    /// Write a companion file only if it is not already present.
    ///
    /// Used for shared files (instance configs, database helpers) that
    /// several generators may request.
    pub fn create_file_if_absent(&self, path: &Path, content: &str) -> ForgeResult<bool> {
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file_if_absent(path, content)
    }

    /// Require that the entity model for `name` exists.
    pub fn require_entity(&self, paths: &ProjectPaths, name: &ResourceName) -> ForgeResult<()> {
        let entity = paths.entity_file(name);
        if !self.filesystem.exists(&entity) {
            return Err(ApplicationError::MissingEntity {
                name: name.to_string(),
                path: entity,
            }
            .into());
        }
        Ok(())
    }

    /// Reject generating ORM output for `manager` when the ORM directory
    /// already holds files for a different manager.
    pub fn check_manager_conflict(
        &self,
        paths: &ProjectPaths,
        orm: OrmKind,
        manager: Manager,
    ) -> ForgeResult<()> {
        // Mongo has a single manager, nothing to conflict with.
        let others: &[Manager] = match orm {
            OrmKind::Sequelize => &[Manager::Mysql, Manager::Postgres],
            OrmKind::Mongo => return Ok(()),
        };

        let dir = paths.orm_dir(orm);
        if !self.filesystem.exists(&dir) {
            return Ok(());
        }

        for entry in self.filesystem.list_dir(&dir)? {
            let Some(file_name) = entry.file_name().map(|n| n.to_string_lossy().into_owned())
            else {
                continue;
            };
            for other in others {
                if *other != manager && file_name.contains(&format!("-{}-", other.as_str())) {
                    return Err(ApplicationError::ManagerConflict {
                        orm: orm.as_str().to_string(),
                        existing: other.as_str().to_string(),
                        requested: manager.as_str().to_string(),
                    }
                    .into());
                }
            }
        }
        Ok(())
    }
}
