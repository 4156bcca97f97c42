//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use cleanforge_core::{application::ports::Filesystem, error::ForgeResult};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> ForgeResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn write_file_if_absent(&self, path: &Path, content: &str) -> ForgeResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))?;
        Ok(true)
    }

    fn read_file(&self, path: &Path) -> ForgeResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn delete_file(&self, path: &Path) -> ForgeResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "delete file"))
    }

    fn list_dir(&self, path: &Path) -> ForgeResult<Vec<PathBuf>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let entries =
            std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "list directory"))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, e, "list directory"))?;
            names.push(entry.path());
        }
        names.sort();
        Ok(names)
    }

    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> cleanforge_core::error::ForgeError {
    use cleanforge_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
