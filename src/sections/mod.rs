//! Section builders — one fixed LaTeX skeleton per resume section.
//!
//! Each builder escapes the literal field values of its sub-record and
//! substitutes them into markup it emits itself. Markup produced here is
//! never passed through the escaper.

pub mod additional;
pub mod education;
pub mod experience;
pub mod heading;
pub mod preamble;
pub mod projects;

use crate::core::escape::escape_latex;

/// Bullet list lines for `items`, or nothing when `items` is empty.
///
/// An empty `itemize` is a LaTeX error, so callers never get one.
pub(crate) fn bullet_list(items: &[String], indent: usize) -> Vec<String> {
    if items.is_empty() {
        return Vec::new();
    }
    let pad = " ".repeat(indent);
    let mut lines = Vec::with_capacity(items.len() + 2);
    lines.push(format!("{}\\resumeItemListStart", pad));
    for item in items {
        lines.push(format!("            \\resumeItem{{{}}}", escape_latex(item)));
    }
    lines.push(format!("{}\\resumeItemListEnd", pad));
    lines
}
