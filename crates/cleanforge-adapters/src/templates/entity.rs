//! Entity model and gateway contract templates.

use cleanforge_core::domain::ResourceName;

/// `src/domain/models/{name}.ts`
pub fn entity_model(name: &ResourceName) -> String {
    let pascal = name.pascal_case();
    format!(
        "export type {pascal}Model = {{\n    // Attributes\n}}\n\nexport type Add{pascal}Params = Omit<{pascal}Model, 'id'>\n"
    )
}

/// `src/domain/models/gateways/{name}-repository.ts`
pub fn entity_gateway(name: &ResourceName) -> String {
    let pascal = name.pascal_case();
    format!("export interface I{pascal}Repository {{\n\n}}\n")
}
