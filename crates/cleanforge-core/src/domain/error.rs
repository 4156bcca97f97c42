// ============================================================================
// domain/error.rs - COMPREHENSIVE ERROR DOMAIN
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for retry logic)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Invalid resource name '{name}': {reason}")]
    InvalidResourceName { name: String, reason: String },

    #[error("Project structure is empty")]
    EmptyStructure,

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Configuration Errors (unsupported identifiers)
    // ========================================================================
    #[error("ORM '{orm}' does not correspond to mongo or sequelize")]
    UnsupportedOrm { orm: String },

    #[error("Database manager '{manager}' does not correspond to mysql, postgres or mongoose")]
    UnsupportedManager { manager: String },

    #[error("Database '{database}' does not correspond to mongo, mysql or postgres")]
    UnsupportedDatabase { database: String },

    #[error("Path '{location}' does not correspond to entities, service or infra")]
    UnsupportedInterfaceLocation { location: String },

    // ========================================================================
    // Compatibility Errors (409-level equivalent)
    // ========================================================================
    #[error("manager '{manager}' cannot be used with the '{orm}' ORM")]
    IncompatibleManager {
        orm: &'static str,
        manager: &'static str,
    },

    // ========================================================================
    // Registry Parse Errors
    // ========================================================================
    #[error("Registry parse error at line {line}: {reason}")]
    RegistryParse { line: usize, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidResourceName { name, reason } => vec![
                format!("Resource name '{}' is invalid: {}", name, reason),
                "Use hyphenated lowercase, e.g. user-profile".into(),
            ],
            Self::EmptyStructure | Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                vec!["This is an internal structure validation failure, please report it".into()]
            }
            Self::UnsupportedOrm { orm } => vec![
                format!("'{}' is not a supported ORM", orm),
                "Supported ORMs:".into(),
                "  • mongo     - document store via mongoose".into(),
                "  • sequelize - relational via mysql or postgres".into(),
            ],
            Self::UnsupportedManager { manager } => vec![
                format!("'{}' is not a supported database manager", manager),
                "Supported managers: mysql, postgres, mongoose".into(),
            ],
            Self::UnsupportedDatabase { database } => vec![
                format!("'{}' is not a supported database", database),
                "Supported databases: mongo, mysql, postgres".into(),
            ],
            Self::UnsupportedInterfaceLocation { location } => vec![
                format!("'{}' is not a valid interface location", location),
                "Use one of: entities, service, infra".into(),
            ],
            Self::IncompatibleManager { orm, manager } => vec![
                format!("The '{}' ORM cannot target the '{}' manager", orm, manager),
                "sequelize works with mysql or postgres".into(),
                "mongo works with mongoose only".into(),
            ],
            Self::RegistryParse { .. } => vec![
                "The singleton registry file could not be parsed".into(),
                "Expected: export const singletonInitializers: Array<() => Promise<void>> = [];"
                    .into(),
                "Fix or remove the declaration and re-run the command".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidResourceName { .. }
            | Self::EmptyStructure
            | Self::DuplicatePath { .. }
            | Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Validation,
            Self::UnsupportedOrm { .. }
            | Self::UnsupportedManager { .. }
            | Self::UnsupportedDatabase { .. }
            | Self::UnsupportedInterfaceLocation { .. } => ErrorCategory::Configuration,
            Self::IncompatibleManager { .. } => ErrorCategory::Compatibility,
            Self::RegistryParse { .. } => ErrorCategory::Parse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Compatibility,
    Parse,
}
