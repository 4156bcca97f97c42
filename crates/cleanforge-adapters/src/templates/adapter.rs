//! Driven adapter templates (simple and ORM-backed).

use cleanforge_core::domain::{Manager, OrmKind, ResourceName};

/// `src/infrastructure/driven-adapters/adapters/{name}-adapter.ts`
pub fn simple_adapter(name: &ResourceName) -> String {
    let pascal = name.pascal_case();
    format!("export class {pascal}Adapter {{\n    // Implementation\n}}\n")
}

/// Repository adapter for `adapter-orm`, dispatched on the ORM kind.
///
/// The class name carries the manager for sequelize (`UserMysqlRepositoryAdapter`)
/// and the ORM for mongo (`UserMongoRepositoryAdapter`), matching the file
/// names the path resolver produces.
pub fn orm_adapter(name: &ResourceName, orm: OrmKind, manager: Manager) -> String {
    let pascal = name.pascal_case();

    match orm {
        OrmKind::Mongo => format!(
            r#"import {{{pascal}Model}} from "@/domain/models/{name}";
import {{{pascal}ModelSchema}} from "@/infrastructure/driven-adapters/adapters/orm/mongo/models/{name}-{manager}";

export class {pascal}MongoRepositoryAdapter {{
    // Implementation
}}
"#
        ),
        OrmKind::Sequelize => {
            let capitalized = manager.capitalized();
            format!(
                r#"import {{{pascal}Model}} from "@/domain/models/{name}";
import {{{pascal}Model{capitalized}}} from "@/infrastructure/driven-adapters/adapters/orm/sequelize/models/{name}-{manager}";

export class {pascal}{capitalized}RepositoryAdapter {{
    // Implementation
}}
"#
            )
        }
    }
}
