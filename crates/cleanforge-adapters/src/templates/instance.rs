//! Instance config singleton templates.
//!
//! These are the classes the singleton registry acquires at startup; their
//! symbol and connection-method names are derived by
//! [`SingletonRegistration`], so what the registry entry calls is exactly
//! what this file exports.

use cleanforge_core::domain::{Manager, registry::SingletonRegistration};

/// `src/application/config/{manager}-instance.ts`
pub fn instance_config(registration: &SingletonRegistration) -> String {
    let symbol = registration.config_symbol();
    let prefix = registration.symbol_prefix();

    let connection_body = match registration.manager() {
        Manager::Mysql => concat!(
            "        const sequelize = new Sequelize({\n",
            "            ...CONFIG_MYSQL,\n",
            "            dialect: \"mysql\",\n",
            "            models: [__dirname + \"/../../infrastructure/driven-adapters/adapters/orm/sequelize/models\"]\n",
            "        });\n",
            "        await sequelize.authenticate();\n",
            "        console.log(\"Connected MySQL.\");"
        ),
        Manager::Postgres => concat!(
            "        const sequelize = new Sequelize({\n",
            "            ...CONFIG_POSTGRES,\n",
            "            dialect: \"postgres\",\n",
            "            models: [__dirname + \"/../../infrastructure/driven-adapters/adapters/orm/sequelize/models\"]\n",
            "        });\n",
            "        await sequelize.authenticate();\n",
            "        console.log(\"Connected Postgres.\");"
        ),
        Manager::Mongoose => concat!(
            "        await mongoose.connect(MONGODB_URI);\n",
            "        console.log(\"Connected Mongo.\");"
        ),
    };

    let imports = match registration.manager() {
        Manager::Mysql => concat!(
            "import { Sequelize } from \"sequelize-typescript\";\n",
            "import { CONFIG_MYSQL } from \"@/application/config/environment\";"
        ),
        Manager::Postgres => concat!(
            "import { Sequelize } from \"sequelize-typescript\";\n",
            "import { CONFIG_POSTGRES } from \"@/application/config/environment\";"
        ),
        Manager::Mongoose => concat!(
            "import mongoose from \"mongoose\";\n",
            "import { MONGODB_URI } from \"@/application/config/environment\";"
        ),
    };

    format!(
        r#"{imports}

export class {symbol} {{
    private static instance: {symbol};

    public static getInstance(): {symbol} {{
        if (!{symbol}.instance) {{
            {symbol}.instance = new {symbol}();
        }}
        return {symbol}.instance;
    }}

    public async managerConnection{prefix}(): Promise<void> {{
{connection_body}
    }}
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mongoose_instance_exports_what_the_registry_calls() {
        let registration = SingletonRegistration::new(Manager::Mongoose, "mongo");
        let content = instance_config(&registration);
        assert!(content.contains("export class MongoConfiguration"));
        assert!(content.contains("public async managerConnectionMongo()"));
        assert!(content.contains("mongoose.connect(MONGODB_URI)"));
    }

    #[test]
    fn mysql_instance_authenticates_sequelize() {
        let registration = SingletonRegistration::new(Manager::Mysql, "sequelize");
        let content = instance_config(&registration);
        assert!(content.contains("export class MysqlConfiguration"));
        assert!(content.contains("managerConnectionMysql"));
        assert!(content.contains("CONFIG_MYSQL"));
        assert!(content.contains("dialect: \"mysql\""));
    }
}
