//! RL-005: Professional experience block.

use super::bullet_list;
use crate::core::escape::escape_latex;
use crate::core::types::ExperienceEntry;

/// Render all experience entries in input order.
pub fn render(entries: &[ExperienceEntry]) -> String {
    let mut lines = vec![
        "%---------- PROFESSIONAL EXPERIENCE -----------".to_string(),
        "\\section{PROFESSIONAL EXPERIENCE}".to_string(),
        "  \\vspace{3pt}".to_string(),
    ];

    // The heading list is an itemize; with no entries it would be empty.
    if entries.is_empty() {
        return format!("{}\n\n", lines.join("\n"));
    }

    lines.push("  \\resumeSubHeadingListStart".to_string());
    lines.push(String::new());

    for entry in entries {
        lines.push("    \\resumeSubheading".to_string());
        lines.push(format!(
            "      {{{}}}{{{}}}",
            escape_latex(&entry.company),
            escape_latex(&entry.location)
        ));
        lines.push(format!(
            "      {{{}}}{{{}}}",
            escape_latex(&entry.position),
            escape_latex(&entry.period)
        ));
        lines.extend(bullet_list(&entry.description, 8));
    }

    lines.push("  \\resumeSubHeadingListEnd".to_string());
    format!("{}\n\n", lines.join("\n"))
}
