//! RL-005: Education block.
//!
//! Core modules are joined with ", " before escaping, so a comma inside a
//! module name cannot be told apart from the separator.

use crate::core::escape::escape_latex;
use crate::core::types::Education;

/// Render the education section.
pub fn render(education: &Education) -> String {
    let core_modules = escape_latex(&education.details.core_modules.join(", "));
    let lines = [
        "%---------- EDUCATION -----------".to_string(),
        "\\section{EDUCATION}".to_string(),
        "  \\vspace{3pt}".to_string(),
        "  \\resumeSubHeadingListStart".to_string(),
        String::new(),
        "    \\resumeEducationHeading".to_string(),
        format!(
            "      {{{}}}{{{}}}",
            escape_latex(&education.institution),
            escape_latex(&education.location)
        ),
        format!(
            "      {{{}}}{{{}}}",
            escape_latex(&education.degree),
            escape_latex(&education.period)
        ),
        String::new(),
        "        \\resumeItemListStart".to_string(),
        format!("            \\resumeItem{{Core Modules: {}}}", core_modules),
        format!(
            "            \\resumeItem{{Grade: {}}}",
            escape_latex(&education.details.grade)
        ),
        "        \\resumeItemListEnd".to_string(),
        String::new(),
        "  \\resumeSubHeadingListEnd".to_string(),
    ];

    format!("{}\n\n", lines.join("\n"))
}
