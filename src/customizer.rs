//! Job-specific resume document generation
//!
//! Deterministic re-presentation of a parsed resume against a target job.
//! No hidden randomness: identical inputs yield byte-identical output.

use crate::parser::ParsedResume;

/// Render a plain-text resume document tailored to `job_title`.
///
/// Skills appearing case-insensitively in `job_description` are promoted;
/// when nothing matches, the first 8 parsed skills are used instead. Output
/// is opaque downloadable text: no validation, no escaping, no length limits.
pub fn generate_custom_resume(
    resume: &ParsedResume,
    job_title: &str,
    job_description: &str,
) -> String {
    let description_lower = job_description.to_lowercase();

    let relevant_skills: Vec<&str> = resume
        .skills
        .iter()
        .filter(|skill| description_lower.contains(&skill.to_lowercase()))
        .map(String::as_str)
        .collect();

    let skills_line = if relevant_skills.is_empty() {
        resume
            .skills
            .iter()
            .take(8)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" \u{2022} ")
    } else {
        relevant_skills.join(" \u{2022} ")
    };

    format!(
        "# {name}\n\
         {email} | {phone}\n\
         \n\
         ## Professional Summary\n\
         Experienced professional seeking {job_title} position. {summary}\n\
         \n\
         ## Key Skills Relevant to {job_title}\n\
         {skills_line}\n\
         \n\
         ## Experience\n\
         {experience}\n\
         \n\
         ## Education\n\
         {education}\n\
         \n\
         ---\n\
         *This resume has been customized for the {job_title} position*",
        name = resume.name,
        email = resume.email,
        phone = resume.phone,
        job_title = job_title,
        summary = resume.summary,
        skills_line = skills_line,
        experience = resume.experience.join("\n"),
        education = resume.education.join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resume() -> ParsedResume {
        ParsedResume {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: "555-123-4567".to_string(),
            skills: vec![
                "React".to_string(),
                "Node.js".to_string(),
                "SQL".to_string(),
            ],
            experience: vec!["Engineer at Acme 2019-2023".to_string()],
            education: vec!["BSc Computer Science".to_string()],
            summary: "Engineer with a frontend focus".to_string(),
            raw_text: String::new(),
        }
    }

    #[test]
    fn test_contains_name_and_title() {
        let doc = generate_custom_resume(
            &sample_resume(),
            "Frontend Developer",
            "We want React experience",
        );

        assert!(doc.contains("Jane Doe"));
        assert!(doc.contains("Frontend Developer"));
        assert!(doc.contains("jane@x.com | 555-123-4567"));
        assert!(doc.contains("Engineer at Acme 2019-2023"));
        assert!(doc.contains("BSc Computer Science"));
    }

    #[test]
    fn test_relevant_skills_promoted() {
        let doc = generate_custom_resume(
            &sample_resume(),
            "Backend Developer",
            "Looking for SQL and node.js expertise",
        );

        assert!(doc.contains("Node.js \u{2022} SQL"));
        assert!(!doc.contains("React \u{2022}"));
    }

    #[test]
    fn test_fallback_when_no_skill_matches() {
        let doc = generate_custom_resume(
            &sample_resume(),
            "Product Manager",
            "Stakeholder management and roadmaps",
        );

        // Falls back to the first parsed skills.
        assert!(doc.contains("React \u{2022} Node.js \u{2022} SQL"));
    }

    #[test]
    fn test_idempotent() {
        let resume = sample_resume();
        let a = generate_custom_resume(&resume, "Data Analyst", "SQL dashboards");
        let b = generate_custom_resume(&resume, "Data Analyst", "SQL dashboards");

        assert_eq!(a, b);
    }

    #[test]
    fn test_degrades_on_empty_resume() {
        let resume = ParsedResume {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            skills: vec![],
            experience: vec![],
            education: vec![],
            summary: String::new(),
            raw_text: String::new(),
        };

        let doc = generate_custom_resume(&resume, "Engineer", "anything");
        assert!(doc.contains("## Experience"));
        assert!(doc.contains("customized for the Engineer position"));
    }
}
