//! Cleanforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Cleanforge
//! scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         cleanforge-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (RegistryService, ScaffoldService, ...) │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, Installer)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   cleanforge-adapters (Infrastructure)  │
//! │ (LocalFilesystem, NpmInstaller, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ResourceName, ProjectPaths, Registry)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cleanforge_core::{
//!     application::RegistryService,
//!     domain::{Manager, registry::SingletonRegistration},
//! };
//!
//! // 1. Describe the singleton to register
//! let registration = SingletonRegistration::new(Manager::Mysql, "sequelize");
//!
//! // 2. Use the application service (with an injected filesystem adapter)
//! let service = RegistryService::new(filesystem);
//! service.ensure_singleton_registered("src/application/singleton.ts".as_ref(), &registration)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ArtifactService, RegistryService, ScaffoldService,
        ports::{Filesystem, PackageInstaller},
    };
    pub use crate::domain::{
        DatabaseKind, FsEntry, Manager, OrmKind, ProjectPaths, ProjectStructure, ResourceName,
        registry::{RegistryDocument, SingletonRegistration},
    };
    pub use crate::error::{ForgeError, ForgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
