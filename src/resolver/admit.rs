//! Type-string admission shared by the Field and Signature extractors.

use rustc_hash::FxHashMap;

use crate::imports;

/// Built-in type names that never form dependencies.
const BASIC_TYPES: &[&str] = &[
    "int",
    "int8",
    "int16",
    "int32",
    "int64",
    "uint",
    "uint8",
    "uint16",
    "uint32",
    "uint64",
    "uintptr",
    "float32",
    "float64",
    "complex64",
    "complex128",
    "bool",
    "string",
    "error",
    "byte",
    "rune",
    "any",
    "interface{}",
];

/// Strip leading `*` and `[]` prefixes in any order.
pub fn strip_type_prefixes(type_name: &str) -> &str {
    let mut rest = type_name;
    loop {
        if let Some(stripped) = rest.strip_prefix('*') {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix("[]") {
            rest = stripped;
        } else {
            return rest;
        }
    }
}

fn is_basic(name: &str) -> bool {
    BASIC_TYPES.contains(&name)
}

/// Decide whether a type string names a dependency inside `package`.
///
/// Qualified names are admitted only when the qualifier is an import alias
/// of the current package whose path resolves back to the package itself;
/// cross-package type dependencies are out of scope here.
pub fn admissible_local_name(
    type_name: &str,
    package: &str,
    aliases: Option<&FxHashMap<&str, &str>>,
) -> Option<String> {
    let clean = strip_type_prefixes(type_name);
    if clean.is_empty() || is_basic(clean) || clean.contains("map[") {
        return None;
    }

    match clean.split_once('.') {
        Some((qualifier, name)) => {
            let path = aliases?.get(qualifier)?;
            if imports::extract_package_name(path) == package {
                Some(name.to_string())
            } else {
                None
            }
        }
        None => Some(clean.to_string()),
    }
}
