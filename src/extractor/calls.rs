//! Body-call extraction.
//!
//! Records calls and composite-literal references in source order, with
//! duplicates. Only the syntactic shape matters: `f(...)` yields `f`,
//! `x.f(...)` yields `x.f` when `x` is a bare identifier and `f` otherwise,
//! `pkg.T{...}` yields `pkg.T`, `T{...}` yields `T`.

use tree_sitter::Node;

/// Collect body calls from a function body subtree.
pub fn collect_body_calls(body: Node, source: &[u8]) -> Vec<String> {
    let mut calls = Vec::new();
    walk(body, source, &mut calls);
    calls
}

fn walk(node: Node, source: &[u8], out: &mut Vec<String>) {
    match node.kind() {
        "call_expression" => {
            if let Some(function) = node.child_by_field_name("function") {
                if let Some(name) = call_name(function, source) {
                    out.push(name);
                }
            }
        }
        "composite_literal" => {
            if let Some(name) = node
                .child_by_field_name("type")
                .and_then(|ty| literal_name(ty, source))
            {
                out.push(name);
            }
        }
        _ => {}
    }

    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        walk(child, source, out);
    }
}

fn call_name(function: Node, source: &[u8]) -> Option<String> {
    match function.kind() {
        "identifier" => Some(text(function, source)?),
        "selector_expression" => {
            let field = function.child_by_field_name("field")?;
            let field_name = text(field, source)?;
            match function.child_by_field_name("operand") {
                Some(operand) if operand.kind() == "identifier" => {
                    Some(format!("{}.{}", text(operand, source)?, field_name))
                }
                _ => Some(field_name),
            }
        }
        _ => None,
    }
}

fn literal_name(ty: Node, source: &[u8]) -> Option<String> {
    match ty.kind() {
        "type_identifier" => text(ty, source),
        "qualified_type" => {
            let pkg = ty.child_by_field_name("package")?;
            let name = ty.child_by_field_name("name")?;
            Some(format!("{}.{}", text(pkg, source)?, text(name, source)?))
        }
        _ => None,
    }
}

fn text(node: Node, source: &[u8]) -> Option<String> {
    node.utf8_text(source).ok().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use crate::parser::GoParser;

    fn calls_of(body_src: &str) -> Vec<String> {
        let src = format!("package p\n\nfunc f() {{\n{}\n}}\n", body_src);
        let mut parser = GoParser::new().unwrap();
        let tree = parser.parse(&src, "p.go").unwrap();
        let root = tree.root_node();

        let mut cursor = root.walk();
        for decl in root.named_children(&mut cursor) {
            if decl.kind() == "function_declaration" {
                let body = decl.child_by_field_name("body").unwrap();
                return super::collect_body_calls(body, src.as_bytes());
            }
        }
        panic!("no function in fixture");
    }

    #[test]
    fn identifier_calls() {
        assert_eq!(calls_of("helper()\nhelper()"), vec!["helper", "helper"]);
    }

    #[test]
    fn selector_calls_keep_bare_identifier_base() {
        assert_eq!(calls_of("fmt.Println(1)"), vec!["fmt.Println"]);
        // Chained base is not a bare identifier; only the field survives.
        assert_eq!(calls_of("a.b.C()"), vec!["C"]);
    }

    #[test]
    fn composite_literals() {
        assert_eq!(
            calls_of("u := User{}\np := other.Profile{}\n_ = u\n_ = p"),
            vec!["User", "other.Profile"]
        );
    }

    #[test]
    fn nested_calls_in_source_order() {
        assert_eq!(calls_of("outer(inner())"), vec!["outer", "inner"]);
    }
}
