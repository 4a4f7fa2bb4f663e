//! Conversion of language server protocol diagnostics into the host model.

pub mod from_proto;
pub mod report;

pub use lsp_types;
