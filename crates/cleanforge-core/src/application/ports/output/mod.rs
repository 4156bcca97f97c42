//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `cleanforge-adapters` crate provides implementations.

use crate::error::ForgeResult;
use std::path::{Path, PathBuf};

/// Port for filesystem operations.
///
/// Implemented by:
/// - `cleanforge_adapters::filesystem::LocalFilesystem` (production)
/// - `cleanforge_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Reads and writes operate on whole files; content is always UTF-8 text
/// - `write_file` replaces any existing content in one call, so a failed
///   generator never leaves a half-written file behind
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ForgeResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ForgeResult<()>;

    /// Write content only when the file does not exist yet.
    ///
    /// Returns `false` (without touching the file) when the target is
    /// already present.
    fn write_file_if_absent(&self, path: &Path, content: &str) -> ForgeResult<bool>;

    /// Read a file to a string.
    fn read_file(&self, path: &Path) -> ForgeResult<String>;

    /// Delete a single file.
    fn delete_file(&self, path: &Path) -> ForgeResult<()>;

    /// List the entry names directly under a directory.
    ///
    /// A missing directory lists as empty rather than erroring.
    fn list_dir(&self, path: &Path) -> ForgeResult<Vec<PathBuf>>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ForgeResult<()>;
}

/// Port for installing a generated project's dependencies.
///
/// Implemented by:
/// - `cleanforge_adapters::installer::NpmInstaller` (production)
/// - `cleanforge_adapters::installer::NoopInstaller` (`--skip-install`, tests)
pub trait PackageInstaller: Send + Sync {
    /// Install dependencies for the project at `project_dir`.
    fn install(&self, project_dir: &Path) -> ForgeResult<()>;
}
