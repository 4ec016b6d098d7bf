//! RL-001: Resume record types.
//!
//! Defines the input schema for a resume: personal info, education, work
//! history, projects and additional information. All types derive
//! Serialize/Deserialize so the same record loads from JSON or YAML and the
//! starter template can be written back out.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Top-level record
// ============================================================================

/// Root input record — everything needed to render one resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResumeRecord {
    /// Contact details shown in the heading
    pub personal_info: PersonalInfo,

    /// Single education entry
    pub education: Education,

    /// Work history, rendered in input order
    pub professional_experience: Vec<ExperienceEntry>,

    /// Projects, rendered in input order
    pub project_experience: Vec<ProjectEntry>,

    /// Languages and skills
    pub additional_information: AdditionalInfo,
}

// ============================================================================
// Sections
// ============================================================================

/// Heading fields. All five are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PersonalInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Education {
    pub institution: String,
    pub location: String,
    pub degree: String,
    pub period: String,
    pub details: EducationDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EducationDetails {
    /// Module names, joined with ", " into a single line
    pub core_modules: Vec<String>,
    pub grade: String,
}

/// One job. An empty or missing description renders no bullet list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ExperienceEntry {
    pub company: String,
    pub location: String,
    pub position: String,
    pub period: String,

    #[serde(default)]
    pub description: Vec<String>,
}

/// One project. `description: None` means the key was absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectEntry {
    pub name: String,
    pub period: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AdditionalInfo {
    pub languages: Vec<LanguageSkill>,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LanguageSkill {
    pub language: String,
    pub proficiency: String,
}

// ============================================================================
// Field walking
// ============================================================================

impl ResumeRecord {
    /// Every text field with a dotted path, in document order.
    ///
    /// Used by the lint pass to report fields by location.
    pub fn text_fields(&self) -> Vec<(String, &str)> {
        let mut fields: Vec<(String, &str)> = Vec::new();
        let p = &self.personal_info;
        fields.push(("personal_info.name".into(), &p.name));
        fields.push(("personal_info.phone".into(), &p.phone));
        fields.push(("personal_info.email".into(), &p.email));
        fields.push(("personal_info.location".into(), &p.location));
        fields.push(("personal_info.website".into(), &p.website));

        let e = &self.education;
        fields.push(("education.institution".into(), &e.institution));
        fields.push(("education.location".into(), &e.location));
        fields.push(("education.degree".into(), &e.degree));
        fields.push(("education.period".into(), &e.period));
        for (i, m) in e.details.core_modules.iter().enumerate() {
            fields.push((format!("education.details.core_modules[{i}]"), m));
        }
        fields.push(("education.details.grade".into(), &e.details.grade));

        for (i, x) in self.professional_experience.iter().enumerate() {
            let base = format!("professional_experience[{i}]");
            fields.push((format!("{base}.company"), &x.company));
            fields.push((format!("{base}.location"), &x.location));
            fields.push((format!("{base}.position"), &x.position));
            fields.push((format!("{base}.period"), &x.period));
            for (j, d) in x.description.iter().enumerate() {
                fields.push((format!("{base}.description[{j}]"), d));
            }
        }

        for (i, pr) in self.project_experience.iter().enumerate() {
            let base = format!("project_experience[{i}]");
            fields.push((format!("{base}.name"), &pr.name));
            fields.push((format!("{base}.period"), &pr.period));
            for (j, d) in pr.description.iter().flatten().enumerate() {
                fields.push((format!("{base}.description[{j}]"), d));
            }
        }

        let a = &self.additional_information;
        for (i, l) in a.languages.iter().enumerate() {
            let base = format!("additional_information.languages[{i}]");
            fields.push((format!("{base}.language"), &l.language));
            fields.push((format!("{base}.proficiency"), &l.proficiency));
        }
        for (i, s) in a.skills.iter().enumerate() {
            fields.push((format!("additional_information.skills[{i}]"), s));
        }

        fields
    }
}

// ============================================================================
// Starter template
// ============================================================================

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ResumeRecord {
    /// A filled-in example record with hints in parentheses.
    pub fn template() -> Self {
        let experience = |company: &str, location: &str, position: &str, period: &str, d: &[&str]| {
            ExperienceEntry {
                company: company.into(),
                location: location.into(),
                position: position.into(),
                period: period.into(),
                description: strings(d),
            }
        };
        let project = |name: &str, period: &str, d: &[&str]| ProjectEntry {
            name: name.into(),
            period: period.into(),
            description: Some(strings(d)),
        };
        let language = |language: &str| LanguageSkill {
            language: language.into(),
            proficiency: "Native/Fluent/Intermediate/Basic".into(),
        };

        ResumeRecord {
            personal_info: PersonalInfo {
                name: "John Doe".into(),
                phone: "+44 7123 456789".into(),
                email: "your.email@example.com".into(),
                location: "City, Country".into(),
                website: "your-website.com".into(),
            },
            education: Education {
                institution: "University Name (e.g., University College London)".into(),
                location: "City, Country".into(),
                degree: "Degree Type (e.g., B.S. Computer Science)".into(),
                period: "Start Date -- End Date (e.g., Sept. 2020 -- June 2024)".into(),
                details: EducationDetails {
                    core_modules: strings(&[
                        "Course Module 1 (e.g., Data Structures and Algorithms)",
                        "Course Module 2 (e.g., Database Systems)",
                        "Course Module 3 (e.g., Software Engineering)",
                        "Course Module 4 (e.g., Machine Learning)",
                    ]),
                    grade: "Expected Grade (e.g., First Class, 3.8 GPA)".into(),
                },
            },
            professional_experience: vec![
                experience(
                    "Company Name 1 (e.g., Google Inc.)",
                    "City, Country (e.g., Mountain View, CA, USA)",
                    "Job Title (e.g., Software Engineer)",
                    "Start Date -- End Date (e.g., Jan. 2024 -- Present)",
                    &[
                        "Describe a specific accomplishment with quantifiable results (e.g., Increased efficiency by 25%)",
                        "Another accomplishment with measurable impact",
                        "A third accomplishment highlighting your skills and contributions",
                    ],
                ),
                experience(
                    "Company Name 2 (e.g., Microsoft Corporation)",
                    "City, Country (e.g., Redmond, WA, USA)",
                    "Previous Job Title (e.g., Junior Developer)",
                    "Start Date -- End Date (e.g., June 2023 -- Dec. 2023)",
                    &[
                        "Specific accomplishment with metrics",
                        "Another significant contribution",
                    ],
                ),
                experience(
                    "Company Name 3 (e.g., Startup Inc.)",
                    "City, Country (e.g., San Francisco, CA, USA)",
                    "Internship/Entry Level Position (e.g., Software Engineering Intern)",
                    "Start Date -- End Date (e.g., May 2022 -- Aug. 2022)",
                    &[],
                ),
            ],
            project_experience: vec![
                project(
                    "Project Name 1 (e.g., E-commerce Platform)",
                    "Start Date -- End Date (e.g., Mar. 2024 -- Mar. 2024)",
                    &[
                        "Describe a key feature or functionality you implemented",
                        "Another important feature or technical achievement",
                    ],
                ),
                project(
                    "Competition/Challenge Name (e.g., Hackathon Winner)",
                    "Start Date -- End Date (e.g., Feb. 2024 -- Feb. 2024)",
                    &["What you accomplished in the competition"],
                ),
            ],
            additional_information: AdditionalInfo {
                languages: vec![
                    language("English"),
                    language("Second Language (e.g., Spanish)"),
                ],
                skills: strings(&[
                    "Programming Language 1 (e.g., Python)",
                    "Programming Language 2 (e.g., JavaScript)",
                    "Database Technology (e.g., PostgreSQL)",
                    "Framework (e.g., React)",
                    "Tool (e.g., Git)",
                    "Platform (e.g., AWS)",
                ]),
            },
        }
    }
}
