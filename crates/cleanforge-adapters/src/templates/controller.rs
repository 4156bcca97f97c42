//! Controller templates.

use cleanforge_core::domain::ResourceName;

/// `src/infrastructure/entry-points/api/{name}-controller.ts`
///
/// When a service implementation with the same name exists, it is injected
/// through the constructor and the controller is mapped to a versioned route.
pub fn controller(name: &ResourceName, inject_service: bool) -> String {
    let pascal = name.pascal_case();

    if inject_service {
        let binding = name.camel_case();
        return format!(
            r#"import {{Mapping}} from "@tsclean/core";
import {{{pascal}ServiceImpl}} from "@/domain/use-cases/impl/{name}-service-impl";

@Mapping('api/v1/{name}')
export class {pascal}Controller {{

    constructor(
        private readonly {binding}Service: {pascal}ServiceImpl
    ) {{
    }}
}}
"#
        );
    }

    format!(
        r#"import {{Mapping}} from "@tsclean/core";

@Mapping('')
export class {pascal}Controller {{
    constructor() {{

    }}
}}
"#
    )
}
