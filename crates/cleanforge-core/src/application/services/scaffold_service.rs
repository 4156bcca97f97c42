//! Scaffold Service - project bootstrap orchestrator.
//!
//! This service coordinates the `new` workflow:
//! 1. Validate the assembled project structure
//! 2. Write every entry to the filesystem (rollback on failure)
//! 3. Install dependencies
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, PackageInstaller},
    },
    domain::{FsEntry, ProjectStructure},
    error::ForgeResult,
};

/// Main project bootstrap service.
///
/// Materializes a validated `ProjectStructure` all-or-nothing, then hands
/// the project directory to the installer.
pub struct ScaffoldService {
    filesystem: Arc<dyn Filesystem>,
    installer: Box<dyn PackageInstaller>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(filesystem: Arc<dyn Filesystem>, installer: Box<dyn PackageInstaller>) -> Self {
        Self {
            filesystem,
            installer,
        }
    }

    /// Bootstrap a new project from a structure.
    ///
    /// The structure's root must not exist yet unless `force` is set, in
    /// which case entries are written into the existing directory. On any
    /// write failure the partially created tree is removed before the error
    /// propagates, except when the root pre-existed (forced runs never
    /// delete a directory they did not create); an install failure leaves
    /// the written tree in place (the project is complete, only its
    /// dependencies are missing).
    #[instrument(skip_all, fields(root = %structure.root().display()))]
    pub fn bootstrap(&self, structure: &ProjectStructure, force: bool) -> ForgeResult<()> {
        structure.validate()?;

        let root_existed = self.filesystem.exists(structure.root());
        if root_existed && !force {
            return Err(ApplicationError::ProjectExists {
                path: structure.root().to_path_buf(),
            }
            .into());
        }

        match self.write_all(structure) {
            Ok(()) => {
                info!(entries = structure.entry_count(), "Project tree written");
            }
            Err(e) => {
                if root_existed {
                    warn!("Write failed; leaving pre-existing directory in place");
                } else {
                    warn!("Write failed, attempting rollback");
                    self.rollback(structure.root());
                }
                return Err(e);
            }
        }

        self.installer.install(structure.root())?;

        info!("Scaffold completed successfully");
        Ok(())
    }

    /// Write all entries in the structure.
    fn write_all(&self, structure: &ProjectStructure) -> ForgeResult<()> {
        self.filesystem.create_dir_all(structure.root())?;

        for entry in &structure.entries {
            match entry {
                FsEntry::Directory(dir) => {
                    self.filesystem.create_dir_all(&structure.root().join(dir))?;
                }
                FsEntry::File(file) => {
                    let path = structure.root().join(&file.path);

                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }

                    if file.overwrite {
                        self.filesystem.write_file(&path, &file.content)?;
                    } else {
                        self.filesystem.write_file_if_absent(&path, &file.content)?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}
