//! End-to-end behavior of registry patching through the service and an
//! in-memory filesystem.

use std::path::Path;
use std::sync::Arc;

use cleanforge_adapters::MemoryFilesystem;
use cleanforge_core::{
    application::{RegistryService, ports::Filesystem},
    domain::{Manager, registry::SingletonRegistration},
    error::ForgeError,
};

fn registry_path() -> &'static Path {
    Path::new("project/src/application/singleton.ts")
}

fn service(fs: &MemoryFilesystem) -> RegistryService {
    RegistryService::new(Arc::new(fs.clone()))
}

fn mysql() -> SingletonRegistration {
    SingletonRegistration::new(Manager::Mysql, "sequelize")
}

fn mongo() -> SingletonRegistration {
    SingletonRegistration::new(Manager::Mongoose, "mongo")
}

#[test]
fn missing_file_is_bootstrapped() {
    let fs = MemoryFilesystem::new();
    let service = service(&fs);

    let changed = service
        .ensure_singleton_registered(registry_path(), &mysql())
        .unwrap();
    assert!(changed);

    let content = fs.read_file(registry_path()).unwrap();
    assert!(content.contains(
        r#"import { MysqlConfiguration } from "@/application/config/mysql-instance";"#
    ));
    assert!(
        content.contains("export const singletonInitializers: Array<() => Promise<void>> = [")
    );
    assert!(content.contains("const mysqlConfig = MysqlConfiguration.getInstance();"));
    assert!(content.contains("await mysqlConfig.managerConnectionMysql();"));
}

#[test]
fn patching_twice_is_byte_identical() {
    let fs = MemoryFilesystem::new();
    let service = service(&fs);

    service
        .ensure_singleton_registered(registry_path(), &mysql())
        .unwrap();
    let first = fs.read_file(registry_path()).unwrap();

    let changed = service
        .ensure_singleton_registered(registry_path(), &mysql())
        .unwrap();
    assert!(!changed);

    let second = fs.read_file(registry_path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn distinct_pairs_accumulate_in_call_order() {
    let fs = MemoryFilesystem::new();
    let service = service(&fs);

    service
        .ensure_singleton_registered(registry_path(), &mysql())
        .unwrap();
    let after_first = fs.read_file(registry_path()).unwrap();

    service
        .ensure_singleton_registered(
            registry_path(),
            &SingletonRegistration::new(Manager::Postgres, "sequelize"),
        )
        .unwrap();

    let content = fs.read_file(registry_path()).unwrap();

    // First entry text is untouched.
    assert!(content.contains("const mysqlConfig = MysqlConfiguration.getInstance();"));
    assert!(content.contains("const postgresConfig = PostgresConfiguration.getInstance();"));
    assert!(
        content.find("MysqlConfiguration.getInstance()").unwrap()
            < content.find("PostgresConfiguration.getInstance()").unwrap()
    );

    // Re-running the first pair after the second changes nothing.
    let changed = service
        .ensure_singleton_registered(registry_path(), &mysql())
        .unwrap();
    assert!(!changed);
    assert!(after_first.len() < content.len());
}

#[test]
fn mongoose_derives_symbols_from_the_instance() {
    let fs = MemoryFilesystem::new();
    let service = service(&fs);

    service
        .ensure_singleton_registered(registry_path(), &mongo())
        .unwrap();

    let content = fs.read_file(registry_path()).unwrap();
    assert!(content.contains(
        r#"import { MongoConfiguration } from "@/application/config/mongoose-instance";"#
    ));
    assert!(content.contains("const mongoConfig = MongoConfiguration.getInstance();"));
    assert!(content.contains("await mongoConfig.managerConnectionMongo();"));
}

#[test]
fn unrelated_declarations_survive_patching() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("project/src/application"))
        .unwrap();
    fs.write_file(
        registry_path(),
        "// wiring\nexport const appName = \"shop-api\";\n",
    )
    .unwrap();

    let service = service(&fs);
    service
        .ensure_singleton_registered(registry_path(), &mysql())
        .unwrap();

    let content = fs.read_file(registry_path()).unwrap();
    assert!(content.contains("// wiring"));
    let existing = content
        .find("export const appName = \"shop-api\";")
        .unwrap();
    let declaration = content.find("singletonInitializers").unwrap();
    assert!(existing < declaration, "declaration must be appended after existing code");
}

#[test]
fn malformed_registry_is_a_parse_error() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all(Path::new("project/src/application"))
        .unwrap();
    fs.write_file(
        registry_path(),
        "export const singletonInitializers: Array<() => Promise<void>> = [\n",
    )
    .unwrap();

    let service = service(&fs);
    let err = service
        .ensure_singleton_registered(registry_path(), &mysql())
        .unwrap_err();
    assert!(matches!(err, ForgeError::Domain(_)));

    // The broken file is left exactly as it was.
    let content = fs.read_file(registry_path()).unwrap();
    assert_eq!(
        content,
        "export const singletonInitializers: Array<() => Promise<void>> = [\n"
    );
}
