//! RL-002: LaTeX literal-text escaping.
//!
//! Every input character is mapped exactly once in a single left-to-right
//! pass, so the replacement text for one character (e.g. the braces in
//! `\textbackslash{}`) is never re-escaped by a later rule.

/// Escape sequences produced by [`escape_latex`], used to spot input that was
/// already escaped by hand.
const ESCAPE_SEQUENCES: &[&str] = &[
    "\\textbackslash{}",
    "\\textasciitilde{}",
    "\\textasciicircum{}",
    "\\&",
    "\\%",
    "\\$",
    "\\#",
    "\\_",
    "\\{",
    "\\}",
];

/// Escape text for use as literal LaTeX content.
///
/// Not idempotent: escaping twice turns `\&` into `\textbackslash{}\&`.
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\textbackslash{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            _ => out.push(c),
        }
    }
    out
}

/// True when `text` already contains an escape sequence this module emits.
pub fn looks_escaped(text: &str) -> bool {
    ESCAPE_SEQUENCES.iter().any(|seq| text.contains(seq))
}
