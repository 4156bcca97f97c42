//! Closed value objects for ORM kinds, database managers, and artifact
//! locations.
//!
//! The generated project supports exactly two ORM styles and three managers.
//! These are enums, not strings: an unsupported combination cannot reach the
//! path resolver or the template table undetected, it fails here with an
//! exhaustive-match guarantee.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Object mapping style of a generated ORM adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrmKind {
    /// Document store (mongoose). One file per resource, no manager suffix.
    Mongo,
    /// Relational (sequelize). Requires a concrete relational [`Manager`].
    Sequelize,
}

impl OrmKind {
    /// Lowercase token used in paths and templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mongo => "mongo",
            Self::Sequelize => "sequelize",
        }
    }

    /// Validate a manager against this ORM kind.
    ///
    /// Sequelize accepts the two relational managers; the document kind only
    /// accepts mongoose. This is the single place the compatibility rule
    /// lives; it runs before any file is written.
    pub fn validate_manager(&self, manager: Manager) -> Result<(), DomainError> {
        match (self, manager) {
            (Self::Sequelize, Manager::Mysql | Manager::Postgres) => Ok(()),
            (Self::Mongo, Manager::Mongoose) => Ok(()),
            (orm, manager) => Err(DomainError::IncompatibleManager {
                orm: orm.as_str(),
                manager: manager.as_str(),
            }),
        }
    }

    /// The manager implied when the user omits `--manager`.
    ///
    /// Only the document kind has one; sequelize must be told which
    /// relational manager to target.
    pub fn default_manager(&self) -> Option<Manager> {
        match self {
            Self::Mongo => Some(Manager::Mongoose),
            Self::Sequelize => None,
        }
    }
}

impl FromStr for OrmKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mongo" | "mongoose" => Ok(Self::Mongo),
            "sequelize" => Ok(Self::Sequelize),
            other => Err(DomainError::UnsupportedOrm { orm: other.into() }),
        }
    }
}

impl fmt::Display for OrmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Storage backend connection mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Manager {
    Mysql,
    Postgres,
    Mongoose,
}

impl Manager {
    /// Lowercase token used in paths, module specifiers, and templates.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Postgres => "postgres",
            Self::Mongoose => "mongoose",
        }
    }

    /// Capitalized form, e.g. `Mysql`, used to derive configuration symbols.
    pub fn capitalized(&self) -> &'static str {
        match self {
            Self::Mysql => "Mysql",
            Self::Postgres => "Postgres",
            Self::Mongoose => "Mongoose",
        }
    }

    /// `true` for the document-store manager.
    pub fn is_document(&self) -> bool {
        matches!(self, Self::Mongoose)
    }
}

impl FromStr for Manager {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" => Ok(Self::Mysql),
            "postgres" | "pg" => Ok(Self::Postgres),
            "mongoose" => Ok(Self::Mongoose),
            other => Err(DomainError::UnsupportedManager {
                manager: other.into(),
            }),
        }
    }
}

impl fmt::Display for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Database targeted by the standalone `database` command and the project
/// bootstrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    Mongo,
    Mysql,
    Postgres,
}

impl DatabaseKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mongo => "mongo",
            Self::Mysql => "mysql",
            Self::Postgres => "postgres",
        }
    }

    /// Helper object name in the generated helper file, e.g. `MongoHelper`.
    pub fn helper_symbol(&self) -> &'static str {
        match self {
            Self::Mongo => "MongoHelper",
            Self::Mysql => "MysqlHelper",
            Self::Postgres => "PostgresHelper",
        }
    }
}

impl FromStr for DatabaseKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "mysql" => Ok(Self::Mysql),
            "postgres" | "pg" => Ok(Self::Postgres),
            other => Err(DomainError::UnsupportedDatabase {
                database: other.into(),
            }),
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Layer a generated interface contract belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterfaceLocation {
    /// `src/domain/entities/contracts`
    Entities,
    /// `src/domain/use-cases`
    Service,
    /// `src/infrastructure/entry-points/contracts`
    Infra,
}

impl InterfaceLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entities => "entities",
            Self::Service => "service",
            Self::Infra => "infra",
        }
    }
}

impl FromStr for InterfaceLocation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "entities" => Ok(Self::Entities),
            "service" => Ok(Self::Service),
            "infra" => Ok(Self::Infra),
            other => Err(DomainError::UnsupportedInterfaceLocation {
                location: other.into(),
            }),
        }
    }
}

impl fmt::Display for InterfaceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
