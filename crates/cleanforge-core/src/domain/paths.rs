//! Canonical paths inside a generated project.
//!
//! Every command computes its target file through this resolver; the fixed
//! directory convention lives nowhere else. Pure string/path construction,
//! no I/O, cannot fail — unsupported ORM/manager combinations are rejected
//! by the value objects before a path is ever requested.

use std::path::{Path, PathBuf};

use crate::domain::{InterfaceLocation, Manager, OrmKind, ResourceName, value_objects::DatabaseKind};

/// Path resolver rooted at a scaffolded project directory.
#[derive(Debug, Clone)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    // ── domain layer ──────────────────────────────────────────────────────

    /// `src/domain/models/`
    pub fn models_dir(&self) -> PathBuf {
        self.root.join("src/domain/models")
    }

    /// `src/domain/models/{name}.ts`
    pub fn entity_file(&self, name: &ResourceName) -> PathBuf {
        self.models_dir().join(format!("{name}.ts"))
    }

    /// `src/domain/models/gateways/{name}-repository.ts`
    pub fn entity_gateway_file(&self, name: &ResourceName) -> PathBuf {
        self.models_dir()
            .join("gateways")
            .join(format!("{name}-repository.ts"))
    }

    /// Contract location for the `interface` command.
    pub fn interface_file(&self, name: &ResourceName, location: InterfaceLocation) -> PathBuf {
        match location {
            InterfaceLocation::Entities => self
                .root
                .join("src/domain/entities/contracts")
                .join(format!("{name}-repository.ts")),
            InterfaceLocation::Service => self
                .use_cases_dir()
                .join(format!("{name}-service.ts")),
            InterfaceLocation::Infra => self
                .root
                .join("src/infrastructure/entry-points/contracts")
                .join(format!("{name}.ts")),
        }
    }

    /// `src/domain/entities/contracts/{name}-resource-repository.ts`
    pub fn interface_resource_file(&self, name: &ResourceName) -> PathBuf {
        self.root
            .join("src/domain/entities/contracts")
            .join(format!("{name}-resource-repository.ts"))
    }

    /// `src/domain/use-cases/`
    pub fn use_cases_dir(&self) -> PathBuf {
        self.root.join("src/domain/use-cases")
    }

    /// `src/domain/use-cases/impl/`
    pub fn service_impl_dir(&self) -> PathBuf {
        self.use_cases_dir().join("impl")
    }

    /// `src/domain/use-cases/{name}-service.ts`
    pub fn service_contract_file(&self, name: &ResourceName) -> PathBuf {
        self.use_cases_dir().join(format!("{name}-service.ts"))
    }

    /// `src/domain/use-cases/impl/{name}-service-impl.ts`
    pub fn service_impl_file(&self, name: &ResourceName) -> PathBuf {
        self.service_impl_dir()
            .join(format!("{name}-service-impl.ts"))
    }

    /// `src/domain/use-cases/{name}-service-resource.ts`
    pub fn service_resource_contract_file(&self, name: &ResourceName) -> PathBuf {
        self.use_cases_dir()
            .join(format!("{name}-service-resource.ts"))
    }

    /// `src/domain/use-cases/impl/{name}-service-resource-impl.ts`
    pub fn service_resource_impl_file(&self, name: &ResourceName) -> PathBuf {
        self.service_impl_dir()
            .join(format!("{name}-service-resource-impl.ts"))
    }

    // ── infrastructure layer ──────────────────────────────────────────────

    /// `src/infrastructure/entry-points/api/{name}-controller.ts`
    pub fn controller_file(&self, name: &ResourceName) -> PathBuf {
        self.root
            .join("src/infrastructure/entry-points/api")
            .join(format!("{name}-controller.ts"))
    }

    /// `src/infrastructure/driven-adapters/adapters/{name}-adapter.ts`
    pub fn simple_adapter_file(&self, name: &ResourceName) -> PathBuf {
        self.root
            .join("src/infrastructure/driven-adapters/adapters")
            .join(format!("{name}-adapter.ts"))
    }

    /// `src/infrastructure/driven-adapters/adapters/orm/{orm}/`
    pub fn orm_dir(&self, orm: OrmKind) -> PathBuf {
        self.root
            .join("src/infrastructure/driven-adapters/adapters/orm")
            .join(orm.as_str())
    }

    /// ORM repository adapter file.
    ///
    /// Relational kinds carry the manager as a filename suffix; the document
    /// kind repeats the orm token instead.
    pub fn orm_adapter_file(
        &self,
        name: &ResourceName,
        orm: OrmKind,
        manager: Manager,
    ) -> PathBuf {
        self.orm_dir(orm)
            .join(format!("{name}-{}-repository-adapter.ts", suffix(orm, manager)))
    }

    /// `…/orm/{orm}/models/{name}-{suffix}.ts`
    pub fn orm_model_file(&self, name: &ResourceName, orm: OrmKind, manager: Manager) -> PathBuf {
        self.orm_dir(orm)
            .join("models")
            .join(format!("{name}-{}.ts", suffix(orm, manager)))
    }

    /// `…/orm/{orm}/models/` — scanned for conflicting manager suffixes.
    pub fn orm_models_dir(&self, orm: OrmKind) -> PathBuf {
        self.orm_dir(orm).join("models")
    }

    /// `src/infrastructure/driven-adapters/adapters/{db}-adapter/{db}-helper.ts`
    pub fn database_helper_file(&self, database: DatabaseKind) -> PathBuf {
        self.root
            .join("src/infrastructure/driven-adapters/adapters")
            .join(format!("{}-adapter", database.as_str()))
            .join(format!("{}-helper.ts", database.as_str()))
    }

    // ── application layer ─────────────────────────────────────────────────

    /// `src/application/config/{manager}-instance.ts`
    ///
    /// Mirrors the `@/application/config/{manager}-instance` module specifier
    /// the registry import points at.
    pub fn instance_config_file(&self, manager: Manager) -> PathBuf {
        self.root
            .join("src/application/config")
            .join(format!("{}-instance.ts", manager.as_str()))
    }

    /// The fixed singleton registry file: `src/application/singleton.ts`.
    pub fn registry_file(&self) -> PathBuf {
        self.root.join("src/application/singleton.ts")
    }

    /// `src/application/index.ts` — the server entry point.
    pub fn server_entry_file(&self) -> PathBuf {
        self.root.join("src/application/index.ts")
    }

    /// `package.json` at the project root.
    pub fn manifest_file(&self) -> PathBuf {
        self.root.join("package.json")
    }
}

/// Filename suffix for ORM artifacts: manager token for relational kinds,
/// orm token for the document kind.
fn suffix(orm: OrmKind, manager: Manager) -> &'static str {
    match orm {
        OrmKind::Mongo => orm.as_str(),
        OrmKind::Sequelize => manager.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> ProjectPaths {
        ProjectPaths::new("/project")
    }

    fn name(raw: &str) -> ResourceName {
        ResourceName::new(raw).unwrap()
    }

    #[test]
    fn entity_paths() {
        let p = paths();
        assert_eq!(
            p.entity_file(&name("user")),
            PathBuf::from("/project/src/domain/models/user.ts")
        );
        assert_eq!(
            p.entity_gateway_file(&name("user")),
            PathBuf::from("/project/src/domain/models/gateways/user-repository.ts")
        );
    }

    #[test]
    fn sequelize_adapter_carries_manager_suffix() {
        let p = paths();
        assert_eq!(
            p.orm_adapter_file(&name("user"), OrmKind::Sequelize, Manager::Mysql),
            PathBuf::from(
                "/project/src/infrastructure/driven-adapters/adapters/orm/sequelize/user-mysql-repository-adapter.ts"
            )
        );
    }

    #[test]
    fn mongo_adapter_repeats_orm_token() {
        let p = paths();
        assert_eq!(
            p.orm_adapter_file(&name("user"), OrmKind::Mongo, Manager::Mongoose),
            PathBuf::from(
                "/project/src/infrastructure/driven-adapters/adapters/orm/mongo/user-mongo-repository-adapter.ts"
            )
        );
    }

    #[test]
    fn model_path_under_orm_models_dir() {
        let p = paths();
        assert_eq!(
            p.orm_model_file(&name("user-profile"), OrmKind::Sequelize, Manager::Postgres),
            PathBuf::from(
                "/project/src/infrastructure/driven-adapters/adapters/orm/sequelize/models/user-profile-postgres.ts"
            )
        );
    }

    #[test]
    fn registry_file_is_fixed() {
        assert_eq!(
            paths().registry_file(),
            PathBuf::from("/project/src/application/singleton.ts")
        );
    }

    #[test]
    fn instance_config_matches_module_specifier() {
        assert_eq!(
            paths().instance_config_file(Manager::Mongoose),
            PathBuf::from("/project/src/application/config/mongoose-instance.ts")
        );
    }

    #[test]
    fn interface_locations() {
        let p = paths();
        assert_eq!(
            p.interface_file(&name("user"), InterfaceLocation::Entities),
            PathBuf::from("/project/src/domain/entities/contracts/user-repository.ts")
        );
        assert_eq!(
            p.interface_file(&name("user"), InterfaceLocation::Service),
            PathBuf::from("/project/src/domain/use-cases/user-service.ts")
        );
        assert_eq!(
            p.interface_file(&name("user"), InterfaceLocation::Infra),
            PathBuf::from("/project/src/infrastructure/entry-points/contracts/user.ts")
        );
    }

    #[test]
    fn database_helper_path() {
        assert_eq!(
            paths().database_helper_file(DatabaseKind::Mongo),
            PathBuf::from(
                "/project/src/infrastructure/driven-adapters/adapters/mongo-adapter/mongo-helper.ts"
            )
        );
    }
}
