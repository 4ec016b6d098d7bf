//! resume2latex — structured resume data to LaTeX.
//!
//! Fixed-layout document assembly with literal-text escaping, a heuristic
//! syntax checker, and isolated builds through an external LaTeX compiler.

pub mod cli;
pub mod compiler;
pub mod core;
pub mod error;
pub mod sections;
