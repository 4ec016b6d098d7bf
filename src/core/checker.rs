//! RL-007: Heuristic LaTeX syntax checker.
//!
//! Not a parser. Scans for a handful of defects that escaping bugs or hand
//! edits typically introduce:
//! - `%` glued to text (e.g. `25%`), which silently comments out the rest of the line
//! - `&` outside a tabular after `\begin{document}`
//! - unbalanced `{` / `}`
//! - missing `\documentclass`, `\begin{document}` or `\end{document}`
//!
//! A `%` is treated as a real comment and stripped before the other checks
//! run when it starts a line, follows whitespace, `\\` or a closing `}`, or
//! ends the line (the space-suppressing `}%` idiom). Only a `%` glued to text
//! with more text after it, like `25% growth`, is reported.

use crate::error::{Error, Result};
use crate::sections::preamble::{BEGIN_DOCUMENT, DOCUMENT_CLASS, END_DOCUMENT};
use std::fmt;
use std::iter::Peekable;
use std::path::Path;
use std::str::CharIndices;
use tracing::debug;

/// One defect found by the checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    UnescapedPercent { count: usize },
    UnescapedAmpersand { count: usize },
    UnbalancedBraces { open: usize, close: usize },
    MissingElements(Vec<&'static str>),
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::UnescapedPercent { count } => {
                write!(f, "Found {} unescaped percent signs (%) in content", count)
            }
            Finding::UnescapedAmpersand { count } => {
                write!(f, "Found {} unescaped ampersands (&) in content", count)
            }
            Finding::UnbalancedBraces { open, close } => {
                write!(f, "Unbalanced braces: {} open, {} close", open, close)
            }
            Finding::MissingElements(missing) => {
                write!(f, "Missing required elements: {}", missing.join(", "))
            }
        }
    }
}

/// Result of checking one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub findings: Vec<Finding>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Characters of `text` that are not consumed by a control symbol.
///
/// `\` followed by a non-letter escapes exactly that character (so `\\{`
/// still opens a group). Control words (`\section`) pass through; their
/// letters are never significant.
struct Unescaped<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Unescaped<'a> {
    fn new(text: &'a str) -> Self {
        Unescaped {
            chars: text.char_indices().peekable(),
        }
    }
}

impl Iterator for Unescaped<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (i, c) = self.chars.next()?;
            if c != '\\' {
                return Some((i, c));
            }
            match self.chars.peek() {
                Some(&(_, n)) if !n.is_ascii_alphabetic() => {
                    self.chars.next();
                }
                _ => {}
            }
        }
    }
}

/// Strip comments line by line. Returns the stripped text and the number of
/// `%` signs that were glued to preceding text.
fn strip_comments(content: &str) -> (String, usize) {
    let mut stripped = String::with_capacity(content.len());
    let mut stray = 0;

    for line in content.split_inclusive('\n') {
        let mut cut = line.trim_end_matches('\n').len();
        let mut prev: Option<char> = None;
        let mut after_linebreak = false;
        let mut chars = line.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            if c == '\\' {
                if let Some(&(_, n)) = chars.peek() {
                    if !n.is_ascii_alphabetic() {
                        chars.next();
                        after_linebreak = n == '\\';
                        prev = Some(c);
                        continue;
                    }
                }
                after_linebreak = false;
                prev = Some(c);
                continue;
            }
            if c == '%' {
                let rest = &line[i + 1..];
                let is_comment = after_linebreak
                    || prev.is_none_or(|p| p.is_whitespace() || p == '}')
                    || rest.trim().is_empty();
                if !is_comment {
                    stray += 1;
                }
                cut = i;
                break;
            }
            after_linebreak = false;
            prev = Some(c);
        }

        stripped.push_str(&line[..cut]);
        if line.ends_with('\n') {
            stripped.push('\n');
        }
    }

    (stripped, stray)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Check LaTeX source text.
pub fn check_latex(content: &str) -> CheckReport {
    let mut findings = Vec::new();
    let (stripped, stray_percent) = strip_comments(content);

    if stray_percent > 0 {
        findings.push(Finding::UnescapedPercent {
            count: stray_percent,
        });
    }

    // `&word` is deliberately not flagged: it may be an entity-like literal
    // such as `&nbsp` that the author intended.
    if let Some(start) = stripped.find(BEGIN_DOCUMENT) {
        let body = &stripped[start..];
        let count = Unescaped::new(body)
            .filter(|&(i, c)| c == '&' && !body[i + 1..].chars().next().is_some_and(is_word_char))
            .count();
        if count > 0 {
            findings.push(Finding::UnescapedAmpersand { count });
        }
    }

    let (mut open, mut close) = (0, 0);
    for (_, c) in Unescaped::new(&stripped) {
        match c {
            '{' => open += 1,
            '}' => close += 1,
            _ => {}
        }
    }
    if open != close {
        findings.push(Finding::UnbalancedBraces { open, close });
    }

    let missing: Vec<&'static str> = [DOCUMENT_CLASS, BEGIN_DOCUMENT, END_DOCUMENT]
        .into_iter()
        .filter(|marker| !stripped.contains(*marker))
        .collect();
    if !missing.is_empty() {
        findings.push(Finding::MissingElements(missing));
    }

    debug!(findings = findings.len(), "checked LaTeX source");
    CheckReport { findings }
}

/// Read a file and check it. The file is never modified.
pub fn check_file(path: &Path) -> Result<CheckReport> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(check_latex(&content))
}
