//! Console and JSON rendering of pipeline results

use crate::error::Result;
use crate::matcher::{Job, JobStatus};
use crate::parser::ParsedResume;
use colored::Colorize;
use serde::Serialize;

pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    pub fn format_resume(&self, resume: &ParsedResume) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}\n", self.heading("Parsed Resume")));
        out.push_str(&format!("  Name:  {}\n", field_or_dash(&resume.name)));
        out.push_str(&format!("  Email: {}\n", field_or_dash(&resume.email)));
        out.push_str(&format!("  Phone: {}\n", field_or_dash(&resume.phone)));

        if !resume.summary.is_empty() {
            out.push_str(&format!("  Summary: {}\n", resume.summary));
        }

        out.push_str(&format!("  Skills ({}):", resume.skills.len()));
        if resume.skills.is_empty() {
            out.push_str(" -\n");
        } else {
            out.push_str(&format!(" {}\n", resume.skills.join(", ")));
        }

        if self.detailed {
            out.push_str(&format!("  Experience ({} lines):\n", resume.experience.len()));
            for line in &resume.experience {
                out.push_str(&format!("    - {}\n", line));
            }
            out.push_str(&format!("  Education ({} lines):\n", resume.education.len()));
            for line in &resume.education {
                out.push_str(&format!("    - {}\n", line));
            }
        }

        out
    }

    pub fn format_jobs(&self, jobs: &[Job]) -> String {
        let mut out = String::new();

        out.push_str(&format!("{}\n", self.heading("Matched Jobs")));
        for (i, job) in jobs.iter().enumerate() {
            out.push_str(&format!(
                "  {:>2}. [{}] {} at {}\n",
                i + 1,
                self.score_badge(job.match_score),
                job.title,
                job.company
            ));
            out.push_str(&format!(
                "      {} | {} | {}\n",
                job.location,
                job.salary,
                status_label(job.status)
            ));

            if self.detailed {
                out.push_str(&format!("      {}\n", job.url));
                for line in job.description.lines().filter(|l| !l.is_empty()) {
                    out.push_str(&format!("      {}\n", line));
                }
            }
        }

        out
    }

    fn heading(&self, text: &str) -> String {
        if self.use_colors {
            text.bold().cyan().to_string()
        } else {
            text.to_string()
        }
    }

    fn score_badge(&self, score: u32) -> String {
        let badge = format!("{:>2}%", score);
        if !self.use_colors {
            return badge;
        }

        if score >= 85 {
            badge.green().to_string()
        } else if score >= 70 {
            badge.yellow().to_string()
        } else {
            badge.red().to_string()
        }
    }
}

pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

fn field_or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn status_label(status: JobStatus) -> &'static str {
    match status {
        JobStatus::Pending => "pending",
        JobStatus::Applying => "applying",
        JobStatus::Applied => "applied",
        JobStatus::Failed => "failed",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_resume() -> ParsedResume {
        ParsedResume {
            name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            phone: String::new(),
            skills: vec!["React".to_string(), "SQL".to_string()],
            experience: vec!["Engineer at Acme".to_string()],
            education: vec![],
            summary: "Frontend engineer".to_string(),
            raw_text: String::new(),
        }
    }

    #[test]
    fn test_console_resume_plain() {
        let formatter = ConsoleFormatter::new(false, false);
        let out = formatter.format_resume(&sample_resume());

        assert!(out.contains("Jane Doe"));
        assert!(out.contains("jane@x.com"));
        assert!(out.contains("Phone: -"));
        assert!(out.contains("React, SQL"));
        // Experience detail only in detailed mode.
        assert!(!out.contains("Engineer at Acme"));
    }

    #[test]
    fn test_console_resume_detailed() {
        let formatter = ConsoleFormatter::new(false, true);
        let out = formatter.format_resume(&sample_resume());

        assert!(out.contains("Engineer at Acme"));
    }

    #[test]
    fn test_json_round_trip() {
        let formatter = JsonFormatter::new(true);
        let json = formatter.format(&sample_resume()).unwrap();
        let restored: ParsedResume = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, sample_resume());
    }
}
