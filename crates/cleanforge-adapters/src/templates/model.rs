//! ORM model templates.

use cleanforge_core::domain::{Manager, OrmKind, ResourceName};

/// `src/infrastructure/driven-adapters/adapters/orm/{orm}/models/{name}-{manager}.ts`
pub fn orm_model(name: &ResourceName, orm: OrmKind, manager: Manager) -> String {
    let pascal = name.pascal_case();

    match orm {
        OrmKind::Mongo => format!(
            r#"import {{ model, Schema }} from "mongoose";
import {{ {pascal}Model }} from "@/domain/models/{name}";

const schema = new Schema<{pascal}Model>({{
    // Implementation
}});

export const {pascal}ModelSchema = model<{pascal}Model>('{name}s', schema);
"#
        ),
        OrmKind::Sequelize => {
            let capitalized = manager.capitalized();
            format!(
                r#"import {{ Table, Column, Model, Sequelize }} from 'sequelize-typescript'
import {{ {pascal}Model as {pascal}Entity }} from "@/domain/models/{name}";

@Table({{ tableName: '{name}s' }})
export class {pascal}Model{capitalized} extends Model<{pascal}Entity> {{
    // Implementation
}}
"#
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> ResourceName {
        ResourceName::new(raw).unwrap()
    }

    #[test]
    fn mongo_model_pluralizes_the_collection() {
        let content = orm_model(&name("user"), OrmKind::Mongo, Manager::Mongoose);
        assert!(content.contains("model<UserModel>('users', schema)"));
    }

    #[test]
    fn sequelize_model_class_carries_the_manager() {
        let content = orm_model(&name("user"), OrmKind::Sequelize, Manager::Mysql);
        assert!(content.contains("export class UserModelMysql extends Model<UserEntity>"));
        assert!(content.contains("tableName: 'users'"));
    }
}
