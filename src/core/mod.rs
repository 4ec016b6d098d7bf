//! Core resume logic — types, loading, escaping, assembly, checking.

pub mod assembler;
pub mod checker;
pub mod escape;
pub mod parser;
pub mod paths;
pub mod settings;
pub mod types;
pub mod writer;
