//! Mermaid identifier sanitization and label escaping.

/// Reserved Mermaid keywords that may not appear as bare node ids.
const RESERVED: &[&str] = &[
    "graph",
    "flowchart",
    "subgraph",
    "end",
    "default",
    "circle",
    "rect",
    "diamond",
    "hexagon",
    "stadium",
    "cylinder",
    "TD",
    "TB",
    "BT",
    "LR",
    "RL",
    "class",
    "classDef",
    "click",
    "style",
    "linkStyle",
    "fill",
    "stroke",
    "color",
    "node",
    "edge",
    "link",
];

/// Sanitize a node id for Mermaid output.
///
/// `.` and `-` become `_`, any remaining non-word character becomes `_`,
/// and a `node_` prefix is added when the result starts with a digit or
/// collides with a reserved keyword. Keyword collision is checked on the
/// lowercased last `_`-delimited segment and, separately, case-sensitively
/// on the whole identifier (downstream renderers depend on exactly this
/// asymmetry).
pub fn sanitize_id(id: &str) -> String {
    let mut sanitized: String = id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    let starts_with_digit = sanitized
        .chars()
        .next()
        .map(|c| c.is_ascii_digit())
        .unwrap_or(false);

    if starts_with_digit || reserved_suffix(&sanitized) || RESERVED.contains(&sanitized.as_str()) {
        sanitized.insert_str(0, "node_");
    }
    sanitized
}

fn reserved_suffix(id: &str) -> bool {
    let last = id.rsplit('_').next().unwrap_or(id).to_ascii_lowercase();
    RESERVED.iter().any(|k| k.to_ascii_lowercase() == last)
}

/// HTML-escape a label for embedding in a Mermaid node.
pub fn escape_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_dots_and_dashes() {
        assert_eq!(sanitize_id("pkg.User"), "pkg_User");
        assert_eq!(sanitize_id("pkg.User-Service"), "pkg_User_Service");
        assert_eq!(sanitize_id("a/b c"), "a_b_c");
    }

    #[test]
    fn prefixes_digits_and_reserved_words() {
        assert_eq!(sanitize_id("1stUser"), "node_1stUser");
        assert_eq!(sanitize_id("pkg.graph"), "node_pkg_graph");
        assert_eq!(sanitize_id("subgraph"), "node_subgraph");
        assert_eq!(sanitize_id("my_end"), "node_my_end");
        // Suffix matching is case-insensitive.
        assert_eq!(sanitize_id("my_End"), "node_my_End");
    }

    #[test]
    fn safe_identifiers_pass_through() {
        assert_eq!(sanitize_id("sample_User"), "sample_User");
        assert_eq!(sanitize_id("pkg.UserService"), "pkg_UserService");
    }

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            escape_label(r#"User "Svc" & <X>"#),
            "User &quot;Svc&quot; &amp; &lt;X&gt;"
        );
        assert_eq!(escape_label("it's"), "it&#39;s");
    }
}
