//! The singleton registry model.
//!
//! The generated project keeps an ordered sequence of startup initializers
//! in `src/application/singleton.ts`:
//!
//! ```typescript
//! import { MysqlConfiguration } from "@/application/config/mysql-instance";
//!
//! export const singletonInitializers: Array<() => Promise<void>> = [
//!     async () => {
//!         const mysqlConfig = MysqlConfiguration.getInstance();
//!         await mysqlConfig.managerConnectionMysql();
//!     },
//! ];
//! ```
//!
//! This module owns the document model for that file: a minimal
//! parser/printer scoped to exactly the constructs the registry may contain
//! (import declarations and the one exported array declaration), plus the
//! idempotent patch operation. It is deliberately not a general-purpose
//! source toolchain; everything it does not understand is preserved
//! verbatim.

pub mod document;
mod registration;

pub use document::RegistryDocument;
pub use registration::SingletonRegistration;

/// Name of the exported declaration the patcher maintains.
pub const REGISTRY_VARIABLE: &str = "singletonInitializers";

/// Declared type of the registry sequence.
pub const REGISTRY_TYPE: &str = "Array<() => Promise<void>>";
