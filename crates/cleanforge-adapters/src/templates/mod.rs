//! Static template table for the generated TypeScript project.
//!
//! Every generator output is a pure function from validated domain values to
//! file content. The only branching in here is exhaustive enum dispatch on
//! [`OrmKind`], [`Manager`], [`DatabaseKind`], and [`InterfaceLocation`];
//! there is no template engine and no I/O.
//!
//! [`OrmKind`]: cleanforge_core::domain::OrmKind
//! [`Manager`]: cleanforge_core::domain::Manager
//! [`DatabaseKind`]: cleanforge_core::domain::DatabaseKind
//! [`InterfaceLocation`]: cleanforge_core::domain::InterfaceLocation

pub mod adapter;
pub mod controller;
pub mod database;
pub mod entity;
pub mod instance;
pub mod interfaces;
pub mod manifest;
pub mod model;
pub mod project;
pub mod service;
