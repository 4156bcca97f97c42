//! Standalone database helper and server entry templates.

use cleanforge_core::domain::DatabaseKind;

/// `src/infrastructure/driven-adapters/adapters/{database}-adapter/{database}-helper.ts`
pub fn helper(database: DatabaseKind) -> &'static str {
    match database {
        DatabaseKind::Mongo => {
            r#"import {Collection, MongoClient} from "mongodb";

export const MongoHelper = {
    client: null as MongoClient,
    uri: null as string,

    async connect(uri: string): Promise<void> {
        this.uri = uri
        this.client = new MongoClient(uri)
        await this.client.connect()
    },

    async disconnect(): Promise<void> {
        await this.client.close()
        this.client = null
    },

    async getCollection(name: string): Promise<Collection> {
        return this.client.db().collection(name)
    },

    map: (data: any): any => {
        const {_id, ...rest} = data
        return Object.assign({}, rest, {id: _id})
    },

    mapCollection: (collection: any[]): any[] => {
        return collection.map(c => MongoHelper.map(c))
    }
}
"#
        }
        DatabaseKind::Mysql => {
            r#"import mysql from "mysql";
import {CONFIG_MYSQL} from "@/application/config/environment";

export const MysqlHelper = {
    connection: null,

    async connect(): Promise<void> {
        this.connection = mysql.createConnection(CONFIG_MYSQL)

        await this.connection.connect((err, result) => err ? console.log(err) : console.log("Connected MySQL."))
    },

    async disconnect(): Promise<void> {
        await this.connection.end()
    },
}
"#
        }
        DatabaseKind::Postgres => {
            r#"import {Pool} from 'pg'
import {CONFIG_POSTGRES} from "@/application/config/environment";

export const PostgresHelper = {
    connection: null,

    async connect(): Promise<void> {
        this.connection = new Pool(CONFIG_POSTGRES)

        await this.connection.connect((err, result) => err ? console.log(err) : console.log("Connected Postgres."))
    },

    async disconnect(): Promise<void> {
        this.connection.close()
    }
}
"#
        }
    }
}

/// Replacement `src/application/index.ts` that connects before serving.
pub fn server_entry(database: DatabaseKind) -> &'static str {
    match database {
        DatabaseKind::Mongo => {
            r#"import "module-alias/register";

import {StartProjectServer} from "@tsclean/core";

import {AppContainer} from "@/application/app";
import {MONGODB_URI, PORT} from "@/application/config/environment";
import {MongoHelper} from "@/infrastructure/driven-adapters/adapters/mongo-adapter/mongo-helper";

MongoHelper.connect(MONGODB_URI)
    .then(async () => {
        console.log('Connected DB')
        const app = await StartProjectServer.create(AppContainer)
        await app.listen(PORT, () => console.log('Running on port ' + PORT))
    })
    .catch(error => console.log(error))
"#
        }
        DatabaseKind::Mysql => {
            r#"import "module-alias/register";

import {StartProjectServer} from "@tsclean/core";

import {AppContainer} from "@/application/app";
import {PORT} from "@/application/config/environment";
import {MysqlHelper} from "@/infrastructure/driven-adapters/adapters/mysql-adapter/mysql-helper";

MysqlHelper.connect()
    .then(async () => {
        const app = await StartProjectServer.create(AppContainer)
        await app.listen(PORT, () => console.log('Running on port ' + PORT))
    })
    .catch(err => console.log(err))
"#
        }
        DatabaseKind::Postgres => {
            r#"import "module-alias/register";

import {StartProjectServer} from "@tsclean/core";

import {AppContainer} from "@/application/app";
import {PORT} from "@/application/config/environment";
import {PostgresHelper} from "@/infrastructure/driven-adapters/adapters/postgres-adapter/postgres-helper";

PostgresHelper.connect()
    .then(async () => {
        const app = await StartProjectServer.create(AppContainer)
        await app.listen(PORT, () => console.log('Running on port ' + PORT))
    })
    .catch(err => console.log(err))
"#
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helper_exports_the_expected_symbol() {
        assert!(helper(DatabaseKind::Mongo).contains("export const MongoHelper"));
        assert!(helper(DatabaseKind::Mysql).contains("export const MysqlHelper"));
        assert!(helper(DatabaseKind::Postgres).contains("export const PostgresHelper"));
    }

    #[test]
    fn server_entry_connects_before_listening() {
        let content = server_entry(DatabaseKind::Mongo);
        assert!(content.contains("MongoHelper.connect(MONGODB_URI)"));
        assert!(content.contains("app.listen(PORT"));
    }
}
