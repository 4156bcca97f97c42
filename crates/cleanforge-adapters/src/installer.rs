//! Package installer adapters implementing the `PackageInstaller` port.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use cleanforge_core::{
    application::{ApplicationError, ports::PackageInstaller},
    error::ForgeResult,
};

/// Runs `npm install` in the project directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct NpmInstaller;

impl NpmInstaller {
    pub fn new() -> Self {
        Self
    }
}

impl PackageInstaller for NpmInstaller {
    fn install(&self, project_dir: &Path) -> ForgeResult<()> {
        info!(dir = %project_dir.display(), "Running npm install");

        let output = Command::new("npm")
            .arg("install")
            .current_dir(project_dir)
            .output()
            .map_err(|e| ApplicationError::InstallFailed {
                reason: format!("failed to spawn npm: {}", e),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ApplicationError::InstallFailed {
                reason: format!(
                    "npm install exited with {}: {}",
                    output.status,
                    stderr.trim()
                ),
            }
            .into());
        }

        debug!("npm install finished");
        Ok(())
    }
}

/// Installer that does nothing; used for `--skip-install` and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInstaller;

impl NoopInstaller {
    pub fn new() -> Self {
        Self
    }
}

impl PackageInstaller for NoopInstaller {
    fn install(&self, project_dir: &Path) -> ForgeResult<()> {
        debug!(dir = %project_dir.display(), "Dependency installation skipped");
        Ok(())
    }
}
