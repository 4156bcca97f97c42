//! Service contract and implementation templates.

use cleanforge_core::domain::ResourceName;

/// `src/domain/use-cases/{name}-service.ts`
pub fn service_contract(name: &ResourceName) -> String {
    let pascal = name.pascal_case();
    format!("export interface I{pascal}Service {{\n\n}}\n")
}

/// `src/domain/use-cases/impl/{name}-service-impl.ts`
pub fn service_impl(name: &ResourceName) -> String {
    let pascal = name.pascal_case();
    format!(
        r#"import {{Service}} from "@tsclean/core";
import {{I{pascal}Service}} from "@/domain/use-cases/{name}-service";

@Service()
export class {pascal}ServiceImpl implements I{pascal}Service {{
    constructor() {{
    }}
}}
"#
    )
}

/// `src/domain/use-cases/{name}-service-resource.ts`
pub fn service_resource_contract(name: &ResourceName) -> String {
    let pascal = name.pascal_case();
    let constant = name.constant_case();
    format!(
        r#"export const {constant}_RESOURCE_SERVICE = "{constant}_RESOURCE_SERVICE";

export interface I{pascal}ResourceService {{
    findAll: () => Promise<any[]>;
    save: (data: any) => Promise<any>;
    findById: (id: number) => Promise<any>;
    update: (id: number, data: any) => Promise<boolean | undefined>
}}
"#
    )
}

/// `src/domain/use-cases/impl/{name}-service-resource-impl.ts`
pub fn service_resource_impl(name: &ResourceName) -> String {
    let pascal = name.pascal_case();
    format!(
        r#"import {{Service}} from "@tsclean/core";
import {{I{pascal}ResourceService}} from "@/domain/use-cases/{name}-service-resource";

@Service()
export class {pascal}ServiceImpl implements I{pascal}ResourceService {{
    constructor() {{
    }}

    async findAll(): Promise<any[]> {{
        return Promise.resolve([]);
    }}

    async findById(id: number): Promise<any> {{
        return Promise.resolve(undefined);
    }}

    async save(data: any): Promise<any> {{
        return Promise.resolve(undefined);
    }}

    async update(id: number, data: any): Promise<boolean | undefined> {{
        return Promise.resolve(undefined);
    }}
}}
"#
    )
}
