//! Extraction facts — the typed declaration records the resolver operates on.

use serde::{Deserialize, Serialize};

/// Source position, 1-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

/// One import of a file. `alias` is the declared alias verbatim (`.` and `_`
/// included) or the last path segment when none was declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportEntry {
    pub path: String,
    pub alias: String,
}

/// A named or anonymous (embedded) field, parameter, or result.
/// The type is kept as a lossy string; resolvers only act on pointer/slice
/// prefixes and the package qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDesc {
    /// Empty for anonymous fields and unnamed results.
    pub name: String,
    pub type_name: String,
}

/// A record (struct) declaration with its fields and attached methods.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordDecl {
    pub name: String,
    pub package: String,
    pub file: String,
    pub position: Position,
    pub fields: Vec<FieldDesc>,
    /// Methods whose receiver resolved to this record in the same file.
    pub methods: Vec<FunctionDecl>,
}

/// An interface declaration. Identity only; method sets are not analyzed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceDecl {
    pub name: String,
    pub package: String,
    pub file: String,
    pub position: Position,
}

/// A function or method declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    pub package: String,
    pub file: String,
    pub position: Position,
    /// Receiver type name with one pointer stripped; empty for free functions.
    pub receiver: String,
    pub params: Vec<FieldDesc>,
    pub results: Vec<FieldDesc>,
    /// Calls in source order; duplicates preserved.
    pub body_calls: Vec<String>,
}

impl FunctionDecl {
    pub fn is_method(&self) -> bool {
        !self.receiver.is_empty()
    }
}

/// Package name and imports as seen by one file. Files of the same package
/// are coalesced at resolver time, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageFacts {
    pub name: String,
    pub file: String,
    pub imports: Vec<ImportEntry>,
}

/// Everything extracted from a single file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFacts {
    pub package: PackageFacts,
    pub records: Vec<RecordDecl>,
    pub interfaces: Vec<InterfaceDecl>,
    pub functions: Vec<FunctionDecl>,
}

/// Project-level facts: per-file facts concatenated in walk order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Facts {
    pub records: Vec<RecordDecl>,
    pub interfaces: Vec<InterfaceDecl>,
    /// Free functions only; methods live on their records.
    pub functions: Vec<FunctionDecl>,
    pub packages: Vec<PackageFacts>,
}

impl Facts {
    pub fn merge_file(&mut self, file: FileFacts) {
        self.records.extend(file.records);
        self.interfaces.extend(file.interfaces);
        self.functions.extend(file.functions);
        self.packages.push(file.package);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.interfaces.is_empty() && self.functions.is_empty()
    }

    /// All free functions followed by all methods, in insertion order.
    pub fn all_functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.functions
            .iter()
            .chain(self.records.iter().flat_map(|r| r.methods.iter()))
    }
}
