//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The artifact's primary file already exists (strict create).
    #[error("File already exists: {path}")]
    FileExists { path: PathBuf },

    /// A generator referenced an entity whose model file is missing.
    #[error("Entity '{name}' does not exist (expected {path})")]
    MissingEntity { name: String, path: PathBuf },

    /// The ORM directory already serves a different database manager.
    #[error("The '{orm}' ORM is already configured for '{existing}', cannot add '{requested}'")]
    ManagerConflict {
        orm: String,
        existing: String,
        requested: String,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Project already exists at target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Dependency installation failed.
    #[error("Dependency installation failed: {reason}")]
    InstallFailed { reason: String },

    /// Rollback failed (best-effort cleanup failed).
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FileExists { path } => vec![
                format!("Already present: {}", path.display()),
                "Delete the file first if you want to regenerate it".into(),
            ],
            Self::MissingEntity { name, path } => vec![
                format!("No entity model found at: {}", path.display()),
                format!("Run: cleanforge entity --name {} first", name),
            ],
            Self::ManagerConflict { existing, .. } => vec![
                format!("This project already uses the '{}' manager", existing),
                "A project supports one manager per ORM".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
            ],
            Self::InstallFailed { .. } => vec![
                "npm install did not complete".into(),
                "Check that npm is on your PATH and the registry is reachable".into(),
                "Re-run with --skip-install and install manually".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileExists { .. } | Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::MissingEntity { .. } => ErrorCategory::NotFound,
            Self::ManagerConflict { .. } => ErrorCategory::Compatibility,
            Self::FilesystemError { .. } | Self::RollbackFailed { .. } => ErrorCategory::Internal,
            Self::InstallFailed { .. } => ErrorCategory::Internal,
        }
    }
}
