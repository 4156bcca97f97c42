//! Interface contract templates.

use cleanforge_core::domain::{InterfaceLocation, ResourceName};

/// Contract for the `interface` command, shaped by its target layer.
pub fn interface(name: &ResourceName, location: InterfaceLocation) -> String {
    let pascal = name.pascal_case();
    let constant = name.constant_case();
    let repository_const =
        format!("export const {constant}_REPOSITORY = '{constant}_REPOSITORY';");

    match location {
        InterfaceLocation::Entities => format!(
            "{repository_const}\n\nexport interface I{pascal}Repository {{\n\n}}\n"
        ),
        InterfaceLocation::Service => format!(
            "{repository_const}\n\nexport interface I{pascal}Service {{\n\n}}\n"
        ),
        InterfaceLocation::Infra => {
            format!("{repository_const}\n\nexport interface I{pascal} {{\n\n}}\n")
        }
    }
}

/// CRUD repository contract for `interface-resource`.
///
/// References the entity model, which is why the command requires the entity
/// to exist first.
pub fn interface_resource(name: &ResourceName) -> String {
    let pascal = name.pascal_case();
    let constant = name.constant_case();

    format!(
        r#"import {{Add{pascal}Params, {pascal}Model}} from "@/domain/models/{name}";

export const {constant}_RESOURCE_REPOSITORY = "{constant}_RESOURCE_REPOSITORY";

export interface I{pascal}ResourceRepository {{
    findAll: () => Promise<{pascal}Model[]>;
    save: (data: Add{pascal}Params) => Promise<{pascal}Model>;
    findById: (id: number) => Promise<{pascal}Model>;
    update: (id: number, data: any) => Promise<boolean | undefined>
}}
"#
    )
}
