//! Naming rules for one singleton registration.

use crate::domain::{Manager, naming::pascal_case};

/// One (manager, instance) pair to register in the singleton registry.
///
/// The composite key identifies the entry; registering the same pair twice
/// is a no-op. `instance` is the ORM token supplied by the caller (e.g.
/// `mongo`, `sequelize`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingletonRegistration {
    manager: Manager,
    instance: String,
}

impl SingletonRegistration {
    pub fn new(manager: Manager, instance: impl Into<String>) -> Self {
        Self {
            manager,
            instance: instance.into(),
        }
    }

    pub fn manager(&self) -> Manager {
        self.manager
    }

    /// Configuration symbol prefix.
    ///
    /// The document-store manager names its configuration after the ORM
    /// instance (`mongoose`/`mongo` → `Mongo`); relational managers name it
    /// after themselves (`mysql` → `Mysql`).
    pub fn symbol_prefix(&self) -> String {
        if self.manager.is_document() {
            pascal_case(&self.instance)
        } else {
            self.manager.capitalized().to_string()
        }
    }

    /// Imported configuration symbol, e.g. `MongoConfiguration`.
    pub fn config_symbol(&self) -> String {
        format!("{}Configuration", self.symbol_prefix())
    }

    /// Module specifier the import resolves to, parameterized by manager.
    pub fn module_specifier(&self) -> String {
        format!("@/application/config/{}-instance", self.manager.as_str())
    }

    /// Local binding inside the initializer body, e.g. `mongoConfig`.
    pub fn binding(&self) -> String {
        let mut prefix = self.symbol_prefix();
        if let Some(first) = prefix.get(..1) {
            let lower = first.to_ascii_lowercase();
            prefix.replace_range(..1, &lower);
        }
        format!("{prefix}Config")
    }

    /// The acquisition statement fragment used for duplicate detection.
    ///
    /// An array element containing this text is considered this pair's
    /// entry; elements are never duplicated, reordered, or removed.
    pub fn acquisition_marker(&self) -> String {
        format!("{}.getInstance()", self.config_symbol())
    }

    /// Full initializer element body (unindented, no trailing comma).
    pub fn entry_body(&self) -> String {
        format!(
            "async () => {{\n    const {binding} = {symbol}.getInstance();\n    await {binding}.managerConnection{prefix}();\n}}",
            binding = self.binding(),
            symbol = self.config_symbol(),
            prefix = self.symbol_prefix(),
        )
    }

    /// Import declaration line for the configuration symbol.
    pub fn import_line(&self) -> String {
        format!(
            "import {{ {} }} from \"{}\";",
            self.config_symbol(),
            self.module_specifier()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mysql_names() {
        let reg = SingletonRegistration::new(Manager::Mysql, "sequelize");
        assert_eq!(reg.config_symbol(), "MysqlConfiguration");
        assert_eq!(reg.binding(), "mysqlConfig");
        assert_eq!(
            reg.module_specifier(),
            "@/application/config/mysql-instance"
        );
    }

    #[test]
    fn mongoose_names_after_instance() {
        let reg = SingletonRegistration::new(Manager::Mongoose, "mongo");
        assert_eq!(reg.config_symbol(), "MongoConfiguration");
        assert_eq!(reg.binding(), "mongoConfig");
        assert_eq!(
            reg.module_specifier(),
            "@/application/config/mongoose-instance"
        );
    }

    #[test]
    fn entry_body_references_connect_call() {
        let reg = SingletonRegistration::new(Manager::Mongoose, "mongo");
        let body = reg.entry_body();
        assert!(body.contains("MongoConfiguration.getInstance()"));
        assert!(body.contains("await mongoConfig.managerConnectionMongo();"));
    }

    #[test]
    fn import_line_shape() {
        let reg = SingletonRegistration::new(Manager::Postgres, "sequelize");
        assert_eq!(
            reg.import_line(),
            "import { PostgresConfiguration } from \"@/application/config/postgres-instance\";"
        );
    }
}
