//! RL-005: Heading block — name and contact line.

use crate::core::escape::escape_latex;
use crate::core::types::PersonalInfo;

/// Separator between contact fields.
pub const CONTACT_SEPARATOR: &str = " $|$ ";

/// Render the centered name and contact line.
pub fn render(info: &PersonalInfo) -> String {
    let contact = [&info.phone, &info.email, &info.location, &info.website]
        .iter()
        .map(|field| escape_latex(field))
        .collect::<Vec<_>>()
        .join(CONTACT_SEPARATOR);

    let lines = [
        "%---------- HEADING ----------".to_string(),
        "\\begin{center}".to_string(),
        format!(
            "    \\textbf{{\\Huge \\scshape {}}} \\\\ \\vspace{{3pt}}",
            escape_latex(&info.name)
        ),
        "    \\small".to_string(),
        format!("    {}", contact),
        "\\end{center}".to_string(),
    ];

    format!("{}\n\n", lines.join("\n"))
}
