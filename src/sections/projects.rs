//! RL-005: Project experience block.
//!
//! A project whose `description` key is absent gets no bullet list. A present
//! but empty list is treated the same way: `itemize` with no `\item` does not
//! compile.

use super::bullet_list;
use crate::core::escape::escape_latex;
use crate::core::types::ProjectEntry;

/// Render all project entries in input order.
pub fn render(projects: &[ProjectEntry]) -> String {
    let mut lines = vec![
        "%---------- PROJECT EXPERIENCE -----------".to_string(),
        "\\section{PROJECT EXPERIENCE}".to_string(),
        "    \\vspace{3pt}".to_string(),
    ];

    // The heading list is an itemize; with no entries it would be empty.
    if projects.is_empty() {
        return format!("{}\n\n", lines.join("\n"));
    }

    lines.push("    \\resumeSubHeadingListStart".to_string());
    lines.push(String::new());

    for project in projects {
        lines.push("      \\resumeProjectHeading".to_string());
        lines.push(format!(
            "        {{\\textbf{{{}}}}}{{{}}}",
            escape_latex(&project.name),
            escape_latex(&project.period)
        ));
        if let Some(ref description) = project.description {
            lines.extend(bullet_list(description, 10));
        }
    }

    lines.push("    \\resumeSubHeadingListEnd".to_string());
    format!("{}\n\n", lines.join("\n"))
}
