// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Cleanforge.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O and subprocess concerns are handled via ports (traits) defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Behavior lives in entities, not services
//!
// Public API - what the world sees
pub mod error;
pub mod naming;
pub mod paths;
pub mod project_structure;
pub mod registry;
pub mod value_objects;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use naming::ResourceName;
pub use paths::ProjectPaths;
pub use project_structure::{FileToWrite, FsEntry, ProjectStructure};
pub use value_objects::{DatabaseKind, InterfaceLocation, Manager, OrmKind};
