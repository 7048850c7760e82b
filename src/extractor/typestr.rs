//! Type-string projection.
//!
//! Projects syntactic type expressions to plain strings. Lossy on purpose:
//! downstream resolvers only act on pointer/slice prefixes and the package
//! qualifier, so anything richer collapses to `unknown`.

use tree_sitter::Node;

/// Render a type node as a string.
pub fn type_string(node: Node, source: &[u8]) -> String {
    match node.kind() {
        "type_identifier" | "package_identifier" | "identifier" => text(node, source),
        "pointer_type" => match node.named_child(0) {
            Some(inner) => format!("*{}", type_string(inner, source)),
            None => "unknown".to_string(),
        },
        "slice_type" => match node.child_by_field_name("element") {
            Some(elem) => format!("[]{}", type_string(elem, source)),
            None => "unknown".to_string(),
        },
        "map_type" => {
            let key = node.child_by_field_name("key");
            let value = node.child_by_field_name("value");
            match (key, value) {
                (Some(k), Some(v)) => {
                    format!("map[{}]{}", type_string(k, source), type_string(v, source))
                }
                _ => "unknown".to_string(),
            }
        }
        "interface_type" => "interface{}".to_string(),
        "qualified_type" => {
            let pkg = node.child_by_field_name("package");
            let name = node.child_by_field_name("name");
            match (pkg, name) {
                (Some(p), Some(n)) => format!("{}.{}", text(p, source), text(n, source)),
                _ => "unknown".to_string(),
            }
        }
        _ => "unknown".to_string(),
    }
}

fn text(node: Node, source: &[u8]) -> String {
    node.utf8_text(source).unwrap_or("unknown").to_string()
}

#[cfg(test)]
mod tests {
    use crate::parser::GoParser;

    /// Parse a struct with a single field of the given type and return the
    /// projected string of that field's type node.
    fn project(type_expr: &str) -> String {
        let src = format!("package p\n\ntype S struct {{ F {} }}\n", type_expr);
        let mut parser = GoParser::new().unwrap();
        let tree = parser.parse(&src, "p.go").unwrap();
        let root = tree.root_node();

        let mut cursor = root.walk();
        for decl in root.named_children(&mut cursor) {
            if decl.kind() != "type_declaration" {
                continue;
            }
            let spec = decl.named_child(0).unwrap();
            let body = spec.child_by_field_name("type").unwrap();
            let list = body.child_by_field_name("body").unwrap_or(body);
            let mut c2 = list.walk();
            for field in list.named_children(&mut c2) {
                if field.kind() == "field_declaration" {
                    let ty = field.child_by_field_name("type").unwrap();
                    return super::type_string(ty, src.as_bytes());
                }
            }
            // struct_type wraps its fields in a field_declaration_list child
            let mut c3 = body.walk();
            for child in body.named_children(&mut c3) {
                if child.kind() == "field_declaration_list" {
                    let mut c4 = child.walk();
                    for field in child.named_children(&mut c4) {
                        if field.kind() == "field_declaration" {
                            let ty = field.child_by_field_name("type").unwrap();
                            return super::type_string(ty, src.as_bytes());
                        }
                    }
                }
            }
        }
        panic!("no field found in fixture");
    }

    #[test]
    fn plain_name() {
        assert_eq!(project("User"), "User");
    }

    #[test]
    fn pointer_and_slice() {
        assert_eq!(project("*User"), "*User");
        assert_eq!(project("[]Post"), "[]Post");
        assert_eq!(project("[]*Post"), "[]*Post");
        assert_eq!(project("*[]Post"), "*[]Post");
    }

    #[test]
    fn map_and_interface() {
        assert_eq!(project("map[string]User"), "map[string]User");
        assert_eq!(project("interface{}"), "interface{}");
    }

    #[test]
    fn qualified() {
        assert_eq!(project("other.User"), "other.User");
        assert_eq!(project("*other.User"), "*other.User");
    }

    #[test]
    fn exotic_types_collapse_to_unknown() {
        assert_eq!(project("chan int"), "unknown");
        assert_eq!(project("func() error"), "unknown");
    }
}
