//! Infrastructure adapters for Cleanforge.
//!
//! This crate implements the ports defined in
//! `cleanforge-core::application::ports`. It contains all external
//! dependencies and I/O operations, plus the static template table for the
//! generated TypeScript project.

pub mod filesystem;
pub mod installer;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::{NoopInstaller, NpmInstaller};
