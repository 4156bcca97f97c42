//! Project bootstrap templates and the initial tree layout.

use cleanforge_core::{
    domain::{DatabaseKind, ProjectStructure},
    error::ForgeResult,
};

use crate::templates::manifest;

/// `.env` / `.env.example` content.
pub fn env_example() -> &'static str {
    r#"# Mongo configuration
MONGO_DEVELOPMENT=
MONGO_PRODUCTION=

# Mysql configuration
DB_USER=
DB_PASSWORD=
DATABASE=

# Postgres configuration
DB_USER_POSTGRES=
DATABASE_POSTGRES=
DB_PASSWORD_POSTGRES=
DB_PORT_POSTGRES=

JWT_SECRET=
NODE_ENV=development
HOST=127.0.0.1
PORT=9000
"#
}

pub fn gitignore() -> &'static str {
    r#".idea/
.vscode/
node_modules/
build/
.env
package-lock.json
dist
"#
}

pub fn readme() -> &'static str {
    r#"## Awesome Project Build with Clean Architecture

Steps to run this project:

1. Run `npm watch` command

"#
}

pub fn tsconfig() -> &'static str {
    r#"{
   "compilerOptions": {
      "experimentalDecorators": true,
      "emitDecoratorMetadata": true,
      "outDir": "./dist",
      "module": "commonjs",
      "target": "es2019",
      "esModuleInterop": true,
      "sourceMap": true,
      "rootDirs": ["src", "tests"],
      "baseUrl": "src",
      "paths": {
         "@/tests/*": ["../tests/*"],
         "@/*": ["*"]
      }
   },
   "include": ["src", "tests"],
   "exclude": []
}
"#
}

pub fn tsconfig_build() -> &'static str {
    r#"{
  "extends": "./tsconfig.json",
  "exclude": [
    "coverage",
    "jest.config.js",
    "**/*.spec.ts",
    "**/*.test.ts",
    "**/tests"
  ]
}
"#
}

/// `src/application/config/environment.ts`.
pub fn environment_ts() -> &'static str {
    r#"import dotenv from "dotenv";

dotenv.config({ path: ".env" })

/**
|----------------------------------------------------------------------------------------|
    App Configuration
|----------------------------------------------------------------------------------------|
*/
export const ENVIRONMENT = process.env.NODE_ENV;
const PROD = ENVIRONMENT === "production"
export const PORT = process.env.PORT

/**
|----------------------------------------------------------------------------------------|
    Authentication Configuration
|----------------------------------------------------------------------------------------|
*/

export const SESSION_SECRET = process.env.JWT_SECRET || ""

/**
|----------------------------------------------------------------------------------------|
    Databases Configuration
|----------------------------------------------------------------------------------------|
*/

/**
*  MySQL
*/
export const CONFIG_MYSQL = {
    host     : process.env.HOST,
    user     : process.env.DB_USER,
    password : process.env.DB_PASSWORD,
    database : process.env.DATABASE
}

/**
*  Mongo DB
*/
export const MONGODB_URI = PROD
    ? process.env.MONGO_PRODUCTION
    : process.env.MONGO_DEVELOPMENT

/**
 * Postgres
 */
export const CONFIG_POSTGRES = {
    host    : process.env.HOST,
    user    : process.env.DB_USER_POSTGRES,
    database: process.env.DATABASE_POSTGRES,
    password: process.env.DB_PASSWORD_POSTGRES,
    port: 5432,
}
"#
}

/// `src/application/app.ts`.
pub fn app_ts() -> &'static str {
    r#"import {Container} from "@tsclean/core";

@Container({
    imports: [],
    controllers: [],
    providers: []
})

export class AppContainer {}
"#
}

/// `src/application/index.ts` (the default server entry).
pub fn server_index_ts() -> &'static str {
    r#"import "module-alias/register";

import helmet from 'helmet';
import {StartProjectServer} from "@tsclean/core";

import {AppContainer} from "@/application/app";
import {PORT} from "@/application/config/environment";

async function init() {
    const app = await StartProjectServer.create(AppContainer)
    app.use(helmet());
    await app.listen(PORT, () => console.log('Running on port ' + PORT))
}

init();
"#
}

/// Assemble the full initial project tree for `new`.
///
/// `package.json` is written non-destructively: an existing manifest at the
/// target path survives, matching the two-phase write the generated project's
/// dependency patching relies on.
pub fn initial_structure(
    root: impl Into<std::path::PathBuf>,
    project_name: &str,
    database: DatabaseKind,
) -> ForgeResult<ProjectStructure> {
    let mut structure = ProjectStructure::new(root);

    structure.add_file(".env", env_example().to_string());
    structure.add_file(".env.example", env_example().to_string());
    structure.add_file(".gitignore", gitignore().to_string());
    structure.add_file_if_absent("package.json", manifest::initial(project_name, database)?);
    structure.add_file("README.md", readme().to_string());
    structure.add_file("tsconfig.json", tsconfig().to_string());
    structure.add_file("tsconfig-build.json", tsconfig_build().to_string());

    structure.add_file(
        "src/application/config/environment.ts",
        environment_ts().to_string(),
    );
    structure.add_file("src/application/app.ts", app_ts().to_string());
    structure.add_file("src/application/index.ts", server_index_ts().to_string());

    structure.add_directory("src/domain/models");
    structure.add_directory("src/domain/use-cases/impl");
    structure.add_directory("src/infrastructure/driven-adapters/adapters");
    structure.add_directory("src/infrastructure/driven-adapters/providers");
    structure.add_directory("src/infrastructure/entry-points/api");

    structure.add_directory("tests/domain");
    structure.add_directory("tests/infrastructure");

    Ok(structure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_structure_validates() {
        let structure = initial_structure("my-app", "my-app", DatabaseKind::Mysql).unwrap();
        assert!(structure.validate().is_ok());
        assert!(structure.entry_count() > 10);
    }

    #[test]
    fn manifest_entry_is_non_destructive() {
        let structure = initial_structure("my-app", "my-app", DatabaseKind::Mongo).unwrap();
        let manifest_entry = structure
            .files()
            .find(|f| f.path.to_str() == Some("package.json"))
            .unwrap();
        assert!(!manifest_entry.overwrite);
    }
}
