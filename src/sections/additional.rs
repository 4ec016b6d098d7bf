//! RL-005: Additional information block — languages and skills.
//!
//! Each line is joined first and escaped as a whole.

use crate::core::escape::escape_latex;
use crate::core::types::AdditionalInfo;

/// `English (Native), French (Fluent)`, unescaped.
pub fn languages_line(info: &AdditionalInfo) -> String {
    info.languages
        .iter()
        .map(|l| format!("{} ({})", l.language, l.proficiency))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render(info: &AdditionalInfo) -> String {
    let languages = escape_latex(&languages_line(info));
    let skills = escape_latex(&info.skills.join(", "));

    let lines = [
        "%---------- ADDITIONAL INFORMATION -----------".to_string(),
        "\\section{ADDITIONAL INFORMATION}".to_string(),
        "  \\vspace{2pt}".to_string(),
        "  \\resumeSubHeadingListStart".to_string(),
        "    \\small{\\item{".to_string(),
        format!("        \\textbf{{Languages:}} {} \\\\ \\vspace{{3pt}}", languages),
        String::new(),
        format!("        \\textbf{{Skills:}} {} \\\\ \\vspace{{3pt}}", skills),
        "    }}".to_string(),
        "  \\resumeSubHeadingListEnd".to_string(),
    ];

    format!("{}\n\n", lines.join("\n"))
}
