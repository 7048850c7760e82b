//! Extraction subsystem — converts parsed syntax trees into typed
//! declaration records (`Facts`) the dependency resolver consumes.

mod calls;
mod file;
mod types;
mod typestr;

pub use file::extract_file;
pub use types::{
    Facts, FieldDesc, FileFacts, FunctionDecl, ImportEntry, InterfaceDecl, PackageFacts,
    Position, RecordDecl,
};
