//! Heuristic resume parsing
//!
//! Converts raw line-oriented resume text into a structured record using
//! anchor keywords and windowed regex scans. This is intentionally a
//! low-precision extractor: no NLP, no validation, garbage-in/garbage-out.

use crate::config::ParserConfig;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Structured record extracted from raw resume text.
///
/// `skills`, `experience`, and `education` are always present (empty when
/// nothing matched); `raw_text` is the unmodified input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub summary: String,
    pub raw_text: String,
}

pub struct ResumeParser {
    config: ParserConfig,
    email_regex: Regex,
    phone_regex: Regex,
    skill_token_regex: Regex,
    skill_anchors: Vec<Regex>,
    experience_anchors: Vec<Regex>,
    education_anchors: Vec<Regex>,
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResumeParser {
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    pub fn with_config(config: ParserConfig) -> Self {
        let email_regex = Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("Invalid email regex");

        let phone_regex =
            Regex::new(r"(\+\d{1,3}[\s-]?)?\(?\d{3}\)?[\s.-]?\d{3}[\s.-]?\d{4}")
                .expect("Invalid phone regex");

        // Token shape admits +, # and . so C++, C# and Node.js survive intact.
        let skill_token_regex = Regex::new(r"[A-Za-z+#.]+").expect("Invalid skill token regex");

        let skill_anchors = compile_anchors(&config.skill_anchors);
        let experience_anchors = compile_anchors(&config.experience_anchors);
        let education_anchors = compile_anchors(&config.education_anchors);

        Self {
            config,
            email_regex,
            phone_regex,
            skill_token_regex,
            skill_anchors,
            experience_anchors,
            education_anchors,
        }
    }

    /// Parse raw resume text into a structured record. Total over any input.
    pub fn parse(&self, raw_text: &str) -> ParsedResume {
        let email = self
            .email_regex
            .find(raw_text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let phone = self
            .phone_regex
            .find(raw_text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let lines: Vec<&str> = raw_text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .collect();

        let name = lines
            .first()
            .map(|line| line.trim().to_string())
            .unwrap_or_default();

        let skills = self.extract_skills(raw_text);
        let experience = self.extract_lines_after(
            raw_text,
            &self.experience_anchors,
            self.config.experience_window,
            self.config.max_experience,
        );
        let education = self.extract_lines_after(
            raw_text,
            &self.education_anchors,
            self.config.education_window,
            self.config.max_education,
        );

        let summary = self.build_summary(&lines);

        ParsedResume {
            name,
            email,
            phone,
            skills,
            experience,
            education,
            summary,
            raw_text: raw_text.to_string(),
        }
    }

    /// Scan the window after each skill anchor for skill-shaped tokens,
    /// deduplicating across anchors in first-seen order.
    fn extract_skills(&self, text: &str) -> Vec<String> {
        let mut skills = Vec::new();
        let mut seen = HashSet::new();

        for anchor in &self.skill_anchors {
            let Some(m) = anchor.find(text) else {
                continue;
            };

            let window = slice_window(text, m.end(), self.config.skill_window);
            for token in self
                .skill_token_regex
                .find_iter(window)
                .take(self.config.skills_per_anchor)
            {
                let token = token.as_str().to_string();
                if seen.insert(token.clone()) {
                    skills.push(token);
                }
            }
        }

        skills.truncate(self.config.max_skills);
        skills
    }

    /// Take the non-blank lines immediately following each anchor's own line,
    /// bounded by the scan window and the per-anchor line cap.
    fn extract_lines_after(
        &self,
        text: &str,
        anchors: &[Regex],
        window: usize,
        max_lines: usize,
    ) -> Vec<String> {
        let mut fragments = Vec::new();

        for anchor in anchors {
            let Some(m) = anchor.find(text) else {
                continue;
            };

            let section = slice_window(text, m.start(), window);
            for line in section.lines().skip(1).take(max_lines) {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    fragments.push(trimmed.to_string());
                }
            }
        }

        fragments.truncate(max_lines);
        fragments
    }

    fn build_summary(&self, lines: &[&str]) -> String {
        let joined = lines
            .iter()
            .skip(1)
            .take(3)
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        joined
            .graphemes(true)
            .take(self.config.summary_max_chars)
            .collect()
    }
}

fn compile_anchors(anchors: &[String]) -> Vec<Regex> {
    anchors
        .iter()
        .map(|anchor| {
            Regex::new(&format!("(?i){}", regex::escape(anchor))).expect("Invalid anchor regex")
        })
        .collect()
}

/// Byte window into `text` starting at `start`, clamped back to a char boundary.
fn slice_window(text: &str, start: usize, len: usize) -> &str {
    let mut end = (start + len).min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe\njane@x.com\n555-123-4567\n\nSkills\nReact, Node.js, SQL\n\nExperience\nEngineer at Acme 2019-2023";

    #[test]
    fn test_parse_scenario() {
        let parser = ResumeParser::new();
        let resume = parser.parse(SAMPLE);

        assert_eq!(resume.name, "Jane Doe");
        assert_eq!(resume.email, "jane@x.com");
        assert_eq!(resume.phone, "555-123-4567");
        assert!(resume.skills.contains(&"React".to_string()));
        assert!(resume.skills.contains(&"Node.js".to_string()));
        assert!(resume
            .experience
            .contains(&"Engineer at Acme 2019-2023".to_string()));
        assert_eq!(resume.raw_text, SAMPLE);
    }

    #[test]
    fn test_first_email_wins() {
        let parser = ResumeParser::new();
        let resume = parser.parse("Contact: a@b.com or backup c@d.org");

        assert_eq!(resume.email, "a@b.com");
    }

    #[test]
    fn test_no_email_is_empty_string() {
        let parser = ResumeParser::new();
        let resume = parser.parse("John Smith\nNo contact details here");

        assert_eq!(resume.email, "");
        assert_eq!(resume.phone, "");
    }

    #[test]
    fn test_phone_variants() {
        let parser = ResumeParser::new();

        assert_eq!(parser.parse("(555) 123-4567").phone, "(555) 123-4567");
        assert_eq!(parser.parse("+1 555.123.4567").phone, "+1 555.123.4567");
        assert_eq!(parser.parse("5551234567").phone, "5551234567");
    }

    #[test]
    fn test_skills_capped_and_deduplicated() {
        let words = "Ada Bash Cobol Dart Elm Forth Go Haskell Idris Java Kotlin Lua ML Nim OCaml Perl Qt Ruby Scala Tcl";
        let text = format!(
            "Header\nSkills\n{words}\nTechnical Skills\n{words}\nCore Competencies\n{words}"
        );

        let parser = ResumeParser::new();
        let resume = parser.parse(&text);

        assert!(resume.skills.len() <= 15);
        let unique: HashSet<&String> = resume.skills.iter().collect();
        assert_eq!(unique.len(), resume.skills.len());
        assert_eq!(resume.skills[0], "Ada");
    }

    #[test]
    fn test_experience_and_education_caps() {
        let text = "Name\nExperience\nA\nB\nC\nD\nE\nF\nG\nEducation\nX\nY\nZ\nW";
        let parser = ResumeParser::new();
        let resume = parser.parse(text);

        assert!(resume.experience.len() <= 5);
        assert!(resume.education.len() <= 3);
    }

    #[test]
    fn test_empty_input() {
        let parser = ResumeParser::new();
        let resume = parser.parse("");

        assert_eq!(resume.name, "");
        assert_eq!(resume.email, "");
        assert!(resume.skills.is_empty());
        assert!(resume.experience.is_empty());
        assert!(resume.education.is_empty());
        assert_eq!(resume.summary, "");
    }

    #[test]
    fn test_summary_from_early_lines() {
        let text = "Jane Doe\nSenior Engineer\nTen years building backend systems\nBoston, MA\nSkills\nRust";
        let parser = ResumeParser::new();
        let resume = parser.parse(text);

        assert!(resume.summary.contains("Senior Engineer"));
        assert!(resume.summary.contains("backend systems"));
        assert!(resume.summary.contains("Boston"));
        assert!(!resume.summary.contains("Rust"));
        assert!(resume.summary.graphemes(true).count() <= 200);
    }

    #[test]
    fn test_custom_anchor_config() {
        let mut config = ParserConfig::default();
        config.skill_anchors = vec!["toolbox".to_string()];

        let parser = ResumeParser::with_config(config);
        let resume = parser.parse("Jane\nToolbox\nRust Python");

        assert!(resume.skills.contains(&"Rust".to_string()));
        assert!(resume.skills.contains(&"Python".to_string()));
    }
}
