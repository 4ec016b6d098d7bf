//! RL-004: Document assembly.
//!
//! Fixed order, no optional or reorderable sections:
//! header → heading → education → experience → projects → additional → footer

use super::types::ResumeRecord;
use crate::sections::{additional, education, experience, heading, preamble, projects};
use tracing::debug;

/// Section titles in the order they appear in every generated document.
pub const SECTION_ORDER: [&str; 4] = [
    "EDUCATION",
    "PROFESSIONAL EXPERIENCE",
    "PROJECT EXPERIENCE",
    "ADDITIONAL INFORMATION",
];

/// Render a complete LaTeX document for a resume.
pub fn assemble(record: &ResumeRecord) -> String {
    let blocks = [
        preamble::header().to_string(),
        heading::render(&record.personal_info),
        education::render(&record.education),
        experience::render(&record.professional_experience),
        projects::render(&record.project_experience),
        additional::render(&record.additional_information),
        preamble::footer().to_string(),
    ];
    let document = blocks.concat();
    debug!(
        bytes = document.len(),
        experience = record.professional_experience.len(),
        projects = record.project_experience.len(),
        "assembled document"
    );
    document
}
