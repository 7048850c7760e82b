//! Per-file extraction: syntax tree in, `FileFacts` out.
//!
//! Two sub-passes over top-level declarations: types first (records with
//! fields, interfaces), then functions (params/results, receiver attachment,
//! body calls). Method bodies are walked in a follow-up sweep that locates
//! each method's body by name within the same file; the first name hit wins.

use rustc_hash::FxHashSet;
use tree_sitter::{Node, Tree};

use crate::imports;

use super::calls::collect_body_calls;
use super::types::{
    FieldDesc, FileFacts, FunctionDecl, ImportEntry, InterfaceDecl, PackageFacts, Position,
    RecordDecl,
};
use super::typestr::type_string;

/// Extract one file's contribution to the project facts.
pub fn extract_file(tree: &Tree, source: &str, file: &str) -> FileFacts {
    let root = tree.root_node();
    let src = source.as_bytes();

    let package_name = package_name(root, src);
    let imports = extract_imports(root, src);

    let mut facts = FileFacts {
        package: PackageFacts {
            name: package_name.clone(),
            file: file.to_string(),
            imports,
        },
        records: Vec::new(),
        interfaces: Vec::new(),
        functions: Vec::new(),
    };

    extract_types(root, src, file, &package_name, &mut facts);
    extract_functions(root, src, file, &package_name, &mut facts);
    attach_method_bodies(root, src, &mut facts);

    facts
}

fn package_name(root: Node, src: &[u8]) -> String {
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        if child.kind() == "package_clause" {
            if let Some(ident) = child.named_child(0) {
                return text(ident, src);
            }
        }
    }
    String::new()
}

/// Imports in declaration order, deduplicated by path within the file.
fn extract_imports(root: Node, src: &[u8]) -> Vec<ImportEntry> {
    let mut entries = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();

    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        if child.kind() != "import_declaration" {
            continue;
        }
        collect_import_specs(child, src, &mut entries, &mut seen);
    }
    entries
}

fn collect_import_specs(
    node: Node,
    src: &[u8],
    entries: &mut Vec<ImportEntry>,
    seen: &mut FxHashSet<String>,
) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "import_spec" => {
                let Some(path_node) = child.child_by_field_name("path") else {
                    continue;
                };
                let path = text(path_node, src).trim_matches('"').to_string();
                if path.is_empty() || !seen.insert(path.clone()) {
                    continue;
                }
                let declared = child
                    .child_by_field_name("name")
                    .map(|n| text(n, src))
                    .unwrap_or_default();
                let alias = imports::extract_alias(&path, &declared);
                entries.push(ImportEntry { path, alias });
            }
            "import_spec_list" => collect_import_specs(child, src, entries, seen),
            _ => {}
        }
    }
}

/// Pass 1: record and interface declarations.
fn extract_types(root: Node, src: &[u8], file: &str, package: &str, facts: &mut FileFacts) {
    let mut cursor = root.walk();
    for decl in root.named_children(&mut cursor) {
        if decl.kind() != "type_declaration" {
            continue;
        }
        let mut spec_cursor = decl.walk();
        for spec in decl.named_children(&mut spec_cursor) {
            if spec.kind() != "type_spec" {
                continue;
            }
            let (Some(name_node), Some(type_node)) = (
                spec.child_by_field_name("name"),
                spec.child_by_field_name("type"),
            ) else {
                continue;
            };
            let name = text(name_node, src);
            let position = position_of(spec);

            match type_node.kind() {
                "struct_type" => facts.records.push(RecordDecl {
                    name,
                    package: package.to_string(),
                    file: file.to_string(),
                    position,
                    fields: struct_fields(type_node, src),
                    methods: Vec::new(),
                }),
                "interface_type" => facts.interfaces.push(InterfaceDecl {
                    name,
                    package: package.to_string(),
                    file: file.to_string(),
                    position,
                }),
                _ => {}
            }
        }
    }
}

fn struct_fields(struct_type: Node, src: &[u8]) -> Vec<FieldDesc> {
    let mut fields = Vec::new();
    let mut cursor = struct_type.walk();
    for child in struct_type.named_children(&mut cursor) {
        if child.kind() != "field_declaration_list" {
            continue;
        }
        let mut field_cursor = child.walk();
        for field in child.named_children(&mut field_cursor) {
            if field.kind() != "field_declaration" {
                continue;
            }
            let Some(type_node) = field.child_by_field_name("type") else {
                continue;
            };
            let mut type_name = type_string(type_node, src);

            let names: Vec<String> = {
                let mut names_cursor = field.walk();
                field
                    .children_by_field_name("name", &mut names_cursor)
                    .map(|n| text(n, src))
                    .collect()
            };

            if names.is_empty() {
                // Anonymous (embedded) field; a leading `*` sits outside the
                // type field in the grammar.
                if field.child(0).map(|c| c.kind()) == Some("*") {
                    type_name = format!("*{}", type_name);
                }
                fields.push(FieldDesc {
                    name: String::new(),
                    type_name,
                });
            } else {
                for name in names {
                    fields.push(FieldDesc {
                        name,
                        type_name: type_name.clone(),
                    });
                }
            }
        }
    }
    fields
}

/// Pass 2: function and method declarations. Methods attach to a record
/// declared in the same file; unattached ones fall back to free functions.
/// Body calls are collected here for free functions only.
fn extract_functions(root: Node, src: &[u8], file: &str, package: &str, facts: &mut FileFacts) {
    let mut cursor = root.walk();
    for decl in root.named_children(&mut cursor) {
        let is_method = match decl.kind() {
            "function_declaration" => false,
            "method_declaration" => true,
            _ => continue,
        };

        let Some(name_node) = decl.child_by_field_name("name") else {
            continue;
        };
        let name = text(name_node, src);

        let params = decl
            .child_by_field_name("parameters")
            .map(|p| parameter_fields(p, src))
            .unwrap_or_default();
        let results = decl
            .child_by_field_name("result")
            .map(|r| result_fields(r, src))
            .unwrap_or_default();

        let mut func = FunctionDecl {
            name,
            package: package.to_string(),
            file: file.to_string(),
            position: position_of(decl),
            receiver: String::new(),
            params,
            results,
            body_calls: Vec::new(),
        };

        let receiver = if is_method {
            decl.child_by_field_name("receiver")
                .and_then(|r| receiver_type_name(r, src))
        } else {
            None
        };

        match receiver {
            Some(receiver_name) => {
                if let Some(record) = facts
                    .records
                    .iter_mut()
                    .find(|r| r.name == receiver_name)
                {
                    func.receiver = receiver_name;
                    record.methods.push(func);
                } else {
                    // Receiver's record is not declared in this file.
                    if let Some(body) = decl.child_by_field_name("body") {
                        func.body_calls = collect_body_calls(body, src);
                    }
                    facts.functions.push(func);
                }
            }
            None => {
                if let Some(body) = decl.child_by_field_name("body") {
                    func.body_calls = collect_body_calls(body, src);
                }
                facts.functions.push(func);
            }
        }
    }
}

/// Receiver type name with a single leading pointer indirection stripped.
fn receiver_type_name(receiver: Node, src: &[u8]) -> Option<String> {
    let mut cursor = receiver.walk();
    for param in receiver.named_children(&mut cursor) {
        if param.kind() != "parameter_declaration" {
            continue;
        }
        let type_node = param.child_by_field_name("type")?;
        let base = if type_node.kind() == "pointer_type" {
            type_node.named_child(0)?
        } else {
            type_node
        };
        if base.kind() == "type_identifier" {
            return Some(text(base, src));
        }
        return None;
    }
    None
}

fn parameter_fields(list: Node, src: &[u8]) -> Vec<FieldDesc> {
    let mut fields = Vec::new();
    let mut cursor = list.walk();
    for param in list.named_children(&mut cursor) {
        match param.kind() {
            "parameter_declaration" | "variadic_parameter_declaration" => {
                let Some(type_node) = param.child_by_field_name("type") else {
                    continue;
                };
                let type_name = type_string(type_node, src);
                let names: Vec<String> = {
                    let mut names_cursor = param.walk();
                    param
                        .children_by_field_name("name", &mut names_cursor)
                        .map(|n| text(n, src))
                        .collect()
                };
                if names.is_empty() {
                    fields.push(FieldDesc {
                        name: String::new(),
                        type_name,
                    });
                } else {
                    for name in names {
                        fields.push(FieldDesc {
                            name,
                            type_name: type_name.clone(),
                        });
                    }
                }
            }
            _ => {}
        }
    }
    fields
}

/// Result can be a bare type or a parenthesized parameter list.
fn result_fields(result: Node, src: &[u8]) -> Vec<FieldDesc> {
    if result.kind() == "parameter_list" {
        parameter_fields(result, src)
    } else {
        vec![FieldDesc {
            name: String::new(),
            type_name: type_string(result, src),
        }]
    }
}

/// Follow-up sweep: walk each attached method's body, located by method name
/// within the same file. When two receivers share a method name the first
/// declaration in source order wins.
fn attach_method_bodies(root: Node, src: &[u8], facts: &mut FileFacts) {
    let mut method_bodies: Vec<(String, Node)> = Vec::new();
    let mut cursor = root.walk();
    for decl in root.named_children(&mut cursor) {
        if decl.kind() != "method_declaration" {
            continue;
        }
        if let (Some(name_node), Some(body)) = (
            decl.child_by_field_name("name"),
            decl.child_by_field_name("body"),
        ) {
            method_bodies.push((text(name_node, src), body));
        }
    }

    for record in &mut facts.records {
        for method in &mut record.methods {
            if let Some((_, body)) = method_bodies.iter().find(|(n, _)| *n == method.name) {
                method.body_calls = collect_body_calls(*body, src);
            }
        }
    }
}

fn position_of(node: Node) -> Position {
    Position {
        line: node.start_position().row + 1,
        column: node.start_position().column + 1,
    }
}

fn text(node: Node, src: &[u8]) -> String {
    node.utf8_text(src).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use crate::parser::GoParser;

    use super::*;

    fn extract(source: &str) -> FileFacts {
        let mut parser = GoParser::new().unwrap();
        let tree = parser.parse(source, "fixture.go").unwrap();
        extract_file(&tree, source, "fixture.go")
    }

    #[test]
    fn extracts_package_and_imports() {
        let facts = extract(
            r#"package sample

import (
    "fmt"
    o "github.com/x/other"
    _ "github.com/x/sideeffect"
)
"#,
        );
        assert_eq!(facts.package.name, "sample");
        assert_eq!(facts.package.imports.len(), 3);
        assert_eq!(facts.package.imports[0].path, "fmt");
        assert_eq!(facts.package.imports[0].alias, "fmt");
        assert_eq!(facts.package.imports[1].alias, "o");
        assert_eq!(facts.package.imports[2].alias, "_");
    }

    #[test]
    fn extracts_record_fields_including_anonymous() {
        let facts = extract(
            r#"package sample

type Base struct{}

type User struct {
    Name    string
    Profile *Profile
    Posts   []Post
    Base
}
"#,
        );
        assert_eq!(facts.records.len(), 2);
        let user = &facts.records[1];
        assert_eq!(user.name, "User");
        assert_eq!(user.fields.len(), 4);
        assert_eq!(user.fields[1].type_name, "*Profile");
        assert_eq!(user.fields[2].type_name, "[]Post");
        assert_eq!(user.fields[3].name, "");
        assert_eq!(user.fields[3].type_name, "Base");
    }

    #[test]
    fn extracts_interfaces_identity_only() {
        let facts = extract("package sample\n\ntype UserService interface { Create() }\n");
        assert_eq!(facts.interfaces.len(), 1);
        assert_eq!(facts.interfaces[0].name, "UserService");
    }

    #[test]
    fn attaches_methods_to_same_file_record() {
        let facts = extract(
            r#"package sample

type User struct{}

func (u *User) Save() {
    validate(u)
}

func validate(u *User) {}
"#,
        );
        assert_eq!(facts.records[0].methods.len(), 1);
        let save = &facts.records[0].methods[0];
        assert_eq!(save.name, "Save");
        assert_eq!(save.receiver, "User");
        assert_eq!(save.body_calls, vec!["validate"]);
        // validate is the only free function
        assert_eq!(facts.functions.len(), 1);
        assert_eq!(facts.functions[0].name, "validate");
    }

    #[test]
    fn method_without_local_record_becomes_free_function() {
        let facts = extract(
            r#"package sample

func (e *Elsewhere) Run() {
    helper()
}
"#,
        );
        assert!(facts.records.is_empty());
        assert_eq!(facts.functions.len(), 1);
        assert_eq!(facts.functions[0].name, "Run");
        assert!(facts.functions[0].receiver.is_empty());
        assert_eq!(facts.functions[0].body_calls, vec!["helper"]);
    }

    #[test]
    fn free_function_signature_and_body_calls() {
        let facts = extract(
            r#"package sample

type User struct{}
type Profile struct{}

func CreateUser(name, email string) *User {
    p := Profile{}
    _ = p
    return &User{}
}
"#,
        );
        let f = &facts.functions[0];
        assert_eq!(f.params.len(), 2);
        assert_eq!(f.params[0].type_name, "string");
        assert_eq!(f.results.len(), 1);
        assert_eq!(f.results[0].type_name, "*User");
        assert_eq!(f.body_calls, vec!["Profile", "User"]);
    }

    #[test]
    fn duplicate_method_names_take_first_body() {
        let facts = extract(
            r#"package sample

type A struct{}
type B struct{}

func (a *A) Reset() { fromA() }
func (b *B) Reset() { fromB() }
"#,
        );
        let a_reset = &facts.records[0].methods[0];
        let b_reset = &facts.records[1].methods[0];
        assert_eq!(a_reset.body_calls, vec!["fromA"]);
        // Name-based lookup finds the first Reset in the file.
        assert_eq!(b_reset.body_calls, vec!["fromA"]);
    }
}
