//! `package.json` generation and patching.
//!
//! Patching goes through `serde_json` so hand-added entries in the user's
//! manifest survive; only the keys each operation owns are inserted.

use serde_json::{Map, Value, json};

use cleanforge_core::{
    domain::{DatabaseKind, Manager, OrmKind},
    error::{ForgeError, ForgeResult},
};

/// Initial manifest for a fresh project, dependencies included.
pub fn initial(project_name: &str, database: DatabaseKind) -> ForgeResult<String> {
    let mut manifest = json!({
        "name": project_name,
        "version": "1.0.0",
        "description": "Awesome project developed with Clean Architecture",
        "scripts": {
            "start": "node ./dist/index.js",
            "build": "rimraf dist && tsc -p tsconfig-build.json",
            "watch": "nodemon --exec \"npm run build && npm run start\" --watch src --ext ts",
        },
        "dependencies": {
            "@tsclean/core": "^1.0.1",
            "dotenv": "^10.0.0",
            "helmet": "^4.6.0",
            "module-alias": "^2.2.2",
        },
        "devDependencies": {
            "@types/node": "^16.9.1",
            "@types/jest": "^27.0.1",
            "nodemon": "^2.0.9",
            "rimraf": "^3.0.2",
            "ts-jest": "^27.0.5",
            "ts-node": "^10.2.1",
            "typescript": "^4.4.3",
        },
        "_moduleAliases": {
            "@": "dist",
        },
    });

    if database == DatabaseKind::Mongo {
        set(&mut manifest, "devDependencies", "@shelf/jest-mongodb", "^2.0.3")?;
        set(&mut manifest, "devDependencies", "@types/mongodb", "^4.0.7")?;
        set(&mut manifest, "dependencies", "mongodb", "^4.1.1")?;
    }

    render(&manifest)
}

/// Add the ORM stack for `adapter-orm` to an existing manifest.
pub fn patch_for_orm(manifest: &str, orm: OrmKind, manager: Manager) -> ForgeResult<String> {
    let mut manifest = parse(manifest)?;

    match orm {
        OrmKind::Mongo => {
            set(&mut manifest, "dependencies", "mongoose", "^8.0.0")?;
        }
        OrmKind::Sequelize => {
            set(&mut manifest, "dependencies", "sequelize", "^6.37.5")?;
            set(&mut manifest, "dependencies", "sequelize-typescript", "^2.1.6")?;
            set(&mut manifest, "devDependencies", "@types/sequelize", "^4.28.20")?;
            match manager {
                Manager::Mysql => {
                    set(&mut manifest, "dependencies", "mysql2", "^3.11.3")?;
                }
                Manager::Postgres => {
                    set(&mut manifest, "dependencies", "pg", "^8.11.3")?;
                    set(&mut manifest, "dependencies", "pg-hstore", "^2.3.4")?;
                }
                Manager::Mongoose => {}
            }
        }
    }

    render(&manifest)
}

/// Add the database driver for the `database` command.
pub fn patch_for_database(manifest: &str, database: DatabaseKind) -> ForgeResult<String> {
    let mut manifest = parse(manifest)?;

    match database {
        DatabaseKind::Mongo => {
            set(&mut manifest, "devDependencies", "@shelf/jest-mongodb", "^1.2.4")?;
            set(&mut manifest, "devDependencies", "@types/mongodb", "^4.0.7")?;
            set(&mut manifest, "dependencies", "mongodb", "^4.1.2")?;
        }
        DatabaseKind::Mysql => {
            set(&mut manifest, "dependencies", "mysql", "^2.18.1")?;
        }
        DatabaseKind::Postgres => {
            set(&mut manifest, "dependencies", "pg", "^8.6.0")?;
        }
    }

    render(&manifest)
}

fn parse(manifest: &str) -> ForgeResult<Value> {
    serde_json::from_str(manifest).map_err(|e| ForgeError::Configuration {
        message: format!("package.json is not valid JSON: {}", e),
    })
}

/// Insert `key` into the `section` object, creating the section if missing.
fn set(manifest: &mut Value, section: &str, key: &str, version: &str) -> ForgeResult<()> {
    let root = manifest
        .as_object_mut()
        .ok_or_else(|| ForgeError::Configuration {
            message: "package.json root is not an object".into(),
        })?;

    let section = root
        .entry(section.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    let section = section
        .as_object_mut()
        .ok_or_else(|| ForgeError::Configuration {
            message: format!("package.json field '{}' is not an object", key),
        })?;

    section.insert(key.to_string(), Value::String(version.to_string()));
    Ok(())
}

fn render(manifest: &Value) -> ForgeResult<String> {
    let mut rendered =
        serde_json::to_string_pretty(manifest).map_err(|e| ForgeError::Configuration {
            message: format!("failed to serialize package.json: {}", e),
        })?;
    rendered.push('\n');
    Ok(rendered)
}
