//! Parser, mutator, and printer for the singleton registry file.
//!
//! The document model splits the source text into three parts: everything
//! before the `singletonInitializers` declaration (verbatim), the parsed
//! array elements, and everything after the declaration (verbatim). The
//! declaration itself is reprinted in canonical form; since the file is
//! generated exclusively by this tool, a canonical reprint is stable, which
//! is what makes repeated patches byte-for-byte idempotent.
//!
//! Each `ensure_registered` call owns its own document for the duration of
//! the call; nothing is cached across invocations.

use crate::domain::error::DomainError;
use crate::domain::registry::{REGISTRY_TYPE, REGISTRY_VARIABLE, SingletonRegistration};

/// In-memory model of one registry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryDocument {
    /// Verbatim text preceding the declaration (imports live here).
    before: String,
    /// Normalized element bodies, in declaration order.
    elements: Vec<String>,
    /// Verbatim text following the declaration statement.
    after: String,
    /// Whether the source text already contained the declaration.
    had_declaration: bool,
}

impl RegistryDocument {
    /// Empty document; printing after a patch synthesizes the declaration.
    pub fn empty() -> Self {
        Self {
            before: String::new(),
            elements: Vec::new(),
            after: String::new(),
            had_declaration: false,
        }
    }

    /// Parse registry source text.
    ///
    /// Locates the exported `singletonInitializers` array declaration if
    /// present; all other content is retained verbatim. A declaration whose
    /// array or statement is unterminated is a [`DomainError::RegistryParse`].
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let Some(decl_start) = find_declaration(text) else {
            return Ok(Self {
                before: text.to_string(),
                elements: Vec::new(),
                after: String::new(),
                had_declaration: false,
            });
        };

        let open = scan_to_open_bracket(text, decl_start)?;
        let close = match_bracket(text, open)?;

        // Statement must terminate with ';' (whitespace tolerated).
        let mut end = close + 1;
        let bytes = text.as_bytes();
        while end < text.len() && bytes[end].is_ascii_whitespace() {
            end += 1;
        }
        if end >= text.len() || bytes[end] != b';' {
            return Err(parse_error(text, close, "declaration not terminated by ';'"));
        }
        end += 1;
        // Swallow the trailing newline of the statement so `after` starts on
        // its own line.
        if bytes.get(end) == Some(&b'\n') {
            end += 1;
        }

        let inner = &text[open + 1..close];
        let elements = split_elements(inner)
            .into_iter()
            .map(dedent)
            .filter(|e| !e.is_empty())
            .collect();

        Ok(Self {
            before: text[..decl_start].to_string(),
            elements,
            after: text[end..].to_string(),
            had_declaration: true,
        })
    }

    /// Number of initializer entries.
    pub fn entry_count(&self) -> usize {
        self.elements.len()
    }

    /// Iterate over element bodies in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(String::as_str)
    }

    /// Idempotently ensure the entry and import for `registration` exist.
    ///
    /// Returns `true` if the document changed. Existing entries are never
    /// duplicated, reordered, or removed; a second call with the same pair
    /// is a no-op.
    pub fn ensure_registered(&mut self, registration: &SingletonRegistration) -> bool {
        let entry_added = self.ensure_entry(registration);
        let import_added = self.ensure_import(registration);
        entry_added || import_added
    }

    fn ensure_entry(&mut self, registration: &SingletonRegistration) -> bool {
        let marker = registration.acquisition_marker();
        if self.elements.iter().any(|e| e.contains(&marker)) {
            return false;
        }
        self.elements.push(registration.entry_body());
        true
    }

    fn ensure_import(&mut self, registration: &SingletonRegistration) -> bool {
        let symbol = registration.config_symbol();
        if has_import(&self.before, &symbol) || has_import(&self.after, &symbol) {
            return false;
        }

        let line = registration.import_line();
        let mut lines: Vec<&str> = self.before.lines().collect();
        let insert_at = lines
            .iter()
            .rposition(|l| is_import_line(l))
            .map(|i| i + 1)
            .unwrap_or(0);
        lines.insert(insert_at, &line);

        let mut rebuilt = lines.join("\n");
        rebuilt.push('\n');
        // A fresh import block gets a blank line before the rest of the
        // original content.
        if insert_at == 0 && lines.len() > 1 && !lines[1].trim().is_empty() {
            rebuilt = format!("{line}\n\n{}", lines[1..].join("\n"));
            if !rebuilt.ends_with('\n') {
                rebuilt.push('\n');
            }
        }
        self.before = rebuilt;
        true
    }

    /// Serialize the document.
    ///
    /// `before` and `after` are emitted byte-for-byte; the declaration is
    /// printed canonically (4-space indent, one trailing comma per element).
    pub fn print(&self) -> String {
        let mut out = String::new();

        if !self.before.is_empty() {
            out.push_str(&self.before);
            if !out.ends_with('\n') {
                out.push('\n');
            }
            // Synthesized declarations are separated from prior content by a
            // blank line; an existing declaration keeps its original spacing
            // (already part of `before`).
            if !self.had_declaration && !out.ends_with("\n\n") {
                out.push('\n');
            }
        }

        out.push_str("export const ");
        out.push_str(REGISTRY_VARIABLE);
        out.push_str(": ");
        out.push_str(REGISTRY_TYPE);
        out.push_str(" = [");
        if self.elements.is_empty() {
            out.push_str("];\n");
        } else {
            out.push('\n');
            for element in &self.elements {
                for line in element.lines() {
                    if line.is_empty() {
                        out.push('\n');
                    } else {
                        out.push_str("    ");
                        out.push_str(line);
                        out.push('\n');
                    }
                }
                // Trailing comma sits on the element's closing line.
                debug_assert!(out.ends_with('\n'));
                out.pop();
                out.push_str(",\n");
            }
            out.push_str("];\n");
        }

        out.push_str(&self.after);
        out
    }
}

// ── text scanning helpers ─────────────────────────────────────────────────────

/// Byte offset of the `export const singletonInitializers` declaration.
fn find_declaration(text: &str) -> Option<usize> {
    let needle = format!("export const {REGISTRY_VARIABLE}");
    text.find(&needle)
}

/// Scan from the declaration start to the opening '[' of its initializer.
fn scan_to_open_bracket(text: &str, decl_start: usize) -> Result<usize, DomainError> {
    let rest = &text[decl_start..];
    for (offset, c) in rest.char_indices() {
        match c {
            '[' => return Ok(decl_start + offset),
            ';' => {
                return Err(parse_error(
                    text,
                    decl_start,
                    "declaration is not initialized with an array literal",
                ));
            }
            _ => {}
        }
    }
    Err(parse_error(
        text,
        decl_start,
        "declaration has no array initializer",
    ))
}

/// Index of the ']' matching the '[' at `open`, skipping string literals.
fn match_bracket(text: &str, open: usize) -> Result<usize, DomainError> {
    let mut depth = 0usize;
    let mut chars = text[open..].char_indices().peekable();
    let mut in_string: Option<char> = None;

    while let Some((offset, c)) = chars.next() {
        if let Some(quote) = in_string {
            match c {
                '\\' => {
                    chars.next();
                }
                c if c == quote => in_string = None,
                _ => {}
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => in_string = Some(c),
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(open + offset);
                }
            }
            _ => {}
        }
    }
    Err(parse_error(text, open, "unterminated array literal"))
}

/// Split array-literal text at top-level commas, respecting nesting and
/// string literals.
fn split_elements(inner: &str) -> Vec<String> {
    let mut elements = Vec::new();
    let mut current = String::new();
    let mut depth = 0i32;
    let mut in_string: Option<char> = None;
    let mut chars = inner.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some(quote) = in_string {
            current.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        current.push(escaped);
                    }
                }
                c if c == quote => in_string = None,
                _ => {}
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => {
                in_string = Some(c);
                current.push(c);
            }
            '[' | '(' | '{' => {
                depth += 1;
                current.push(c);
            }
            ']' | ')' | '}' => {
                depth -= 1;
                current.push(c);
            }
            ',' if depth == 0 => {
                elements.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    if !current.trim().is_empty() {
        elements.push(current);
    }
    elements
}

/// Strip the common leading indentation from an element's lines.
///
/// Normalizes an element back to the form `SingletonRegistration::entry_body`
/// produces, so reparsing our own output yields identical element text.
fn dedent(raw: String) -> String {
    let lines: Vec<&str> = raw
        .lines()
        .skip_while(|l| l.trim().is_empty())
        .collect();
    let lines: &[&str] = {
        let mut end = lines.len();
        while end > 0 && lines[end - 1].trim().is_empty() {
            end -= 1;
        }
        &lines[..end]
    };
    if lines.is_empty() {
        return String::new();
    }

    let indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|l| {
            if l.trim().is_empty() {
                return "";
            }
            // Byte offset capped at this line's own leading whitespace, then
            // snapped down to a char boundary: indentation may contain
            // multibyte whitespace such as U+00A0.
            let mut cut = indent.min(l.len() - l.trim_start().len());
            while !l.is_char_boundary(cut) {
                cut -= 1;
            }
            &l[cut..]
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `true` if `text` contains an import statement naming `symbol`.
fn has_import(text: &str, symbol: &str) -> bool {
    text.lines()
        .any(|line| is_import_line(line) && line.contains(symbol))
}

fn is_import_line(line: &str) -> bool {
    line.trim_start().starts_with("import ") || line.trim_start().starts_with("import{")
}

fn parse_error(text: &str, at: usize, reason: &str) -> DomainError {
    DomainError::RegistryParse {
        line: text[..at].matches('\n').count() + 1,
        reason: reason.into(),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Manager;

    fn mysql() -> SingletonRegistration {
        SingletonRegistration::new(Manager::Mysql, "sequelize")
    }

    fn mongo() -> SingletonRegistration {
        SingletonRegistration::new(Manager::Mongoose, "mongo")
    }

    #[test]
    fn dedent_stops_at_char_boundaries() {
        // Two no-break spaces (2 bytes each) on the first line, a single
        // ASCII space on the second: the common indent is one byte, which
        // falls inside the first line's U+00A0.
        let out = dedent("\u{a0}\u{a0}first\n second".to_string());
        assert_eq!(out, "\u{a0}\u{a0}first\nsecond");
    }

    #[test]
    fn bootstrap_from_empty() {
        let mut doc = RegistryDocument::empty();
        assert!(doc.ensure_registered(&mongo()));

        let printed = doc.print();
        assert_eq!(
            printed,
            "import { MongoConfiguration } from \"@/application/config/mongoose-instance\";\n\
             \n\
             export const singletonInitializers: Array<() => Promise<void>> = [\n\
             \x20   async () => {\n\
             \x20       const mongoConfig = MongoConfiguration.getInstance();\n\
             \x20       await mongoConfig.managerConnectionMongo();\n\
             \x20   },\n\
             ];\n"
        );
    }

    #[test]
    fn second_call_is_byte_identical() {
        let mut doc = RegistryDocument::empty();
        doc.ensure_registered(&mysql());
        let first = doc.print();

        let mut reparsed = RegistryDocument::parse(&first).unwrap();
        assert!(!reparsed.ensure_registered(&mysql()));
        assert_eq!(reparsed.print(), first);
    }

    #[test]
    fn two_pairs_are_independent_in_call_order() {
        let mut doc = RegistryDocument::empty();
        doc.ensure_registered(&mysql());
        let text = doc.print();

        let mut doc = RegistryDocument::parse(&text).unwrap();
        let postgres = SingletonRegistration::new(Manager::Postgres, "sequelize");
        assert!(doc.ensure_registered(&postgres));
        assert_eq!(doc.entry_count(), 2);

        let printed = doc.print();
        let mysql_at = printed.find("MysqlConfiguration.getInstance()").unwrap();
        let postgres_at = printed.find("PostgresConfiguration.getInstance()").unwrap();
        assert!(mysql_at < postgres_at, "entries must keep call order");

        let mysql_import = printed.find("mysql-instance").unwrap();
        let postgres_import = printed.find("postgres-instance").unwrap();
        assert!(mysql_import < postgres_import);
    }

    #[test]
    fn unrelated_content_is_preserved() {
        let source = "// startup wiring\nexport const foo = 1;\n";
        let mut doc = RegistryDocument::parse(source).unwrap();
        doc.ensure_registered(&mysql());

        let printed = doc.print();
        assert!(printed.contains("// startup wiring\n"));
        assert!(printed.contains("export const foo = 1;\n"));
        // Declaration is appended after the unrelated export.
        assert!(
            printed.find("export const foo = 1;").unwrap()
                < printed.find(REGISTRY_VARIABLE).unwrap()
        );
    }

    #[test]
    fn existing_empty_declaration_is_reused() {
        let source = "export const singletonInitializers: Array<() => Promise<void>> = [];\n";
        let mut doc = RegistryDocument::parse(source).unwrap();
        assert!(doc.had_declaration);
        assert_eq!(doc.entry_count(), 0);

        doc.ensure_registered(&mysql());
        assert_eq!(doc.entry_count(), 1);
        // Only one declaration in the output.
        let printed = doc.print();
        assert_eq!(printed.matches(REGISTRY_VARIABLE).count(), 1);
    }

    #[test]
    fn declaration_in_the_middle_preserves_surroundings() {
        let source = "\
import { MysqlConfiguration } from \"@/application/config/mysql-instance\";

export const singletonInitializers: Array<() => Promise<void>> = [
    async () => {
        const mysqlConfig = MysqlConfiguration.getInstance();
        await mysqlConfig.managerConnectionMysql();
    },
];

export const trailing = true;
";
        let mut doc = RegistryDocument::parse(source).unwrap();
        assert_eq!(doc.entry_count(), 1);
        assert!(!doc.ensure_registered(&mysql()));
        assert_eq!(doc.print(), source);
    }

    #[test]
    fn unterminated_array_is_parse_error() {
        let source = "export const singletonInitializers: Array<() => Promise<void>> = [\n";
        assert!(matches!(
            RegistryDocument::parse(source),
            Err(DomainError::RegistryParse { .. })
        ));
    }

    #[test]
    fn missing_semicolon_is_parse_error() {
        let source = "export const singletonInitializers: Array<() => Promise<void>> = []\n";
        assert!(matches!(
            RegistryDocument::parse(source),
            Err(DomainError::RegistryParse { .. })
        ));
    }

    #[test]
    fn non_array_initializer_is_parse_error() {
        let source = "export const singletonInitializers = 42;\n";
        assert!(matches!(
            RegistryDocument::parse(source),
            Err(DomainError::RegistryParse { .. })
        ));
    }

    #[test]
    fn commas_inside_strings_do_not_split_elements() {
        let source = "export const singletonInitializers: Array<() => Promise<void>> = [\n    async () => {\n        console.log(\"a, b\");\n    },\n];\n";
        let doc = RegistryDocument::parse(source).unwrap();
        assert_eq!(doc.entry_count(), 1);
    }

    #[test]
    fn brackets_inside_strings_do_not_confuse_matching() {
        let source = "export const singletonInitializers: Array<() => Promise<void>> = [\n    async () => {\n        console.log(\"]\");\n    },\n];\n";
        let doc = RegistryDocument::parse(source).unwrap();
        assert_eq!(doc.entry_count(), 1);
    }

    #[test]
    fn import_insertion_appends_after_existing_imports() {
        let mut doc = RegistryDocument::empty();
        doc.ensure_registered(&mysql());
        let text = doc.print();

        let mut doc = RegistryDocument::parse(&text).unwrap();
        doc.ensure_registered(&mongo());
        let printed = doc.print();

        let lines: Vec<&str> = printed.lines().collect();
        assert!(lines[0].contains("MysqlConfiguration"));
        assert!(lines[1].contains("MongoConfiguration"));
        assert_eq!(lines[2], "");
    }
}
