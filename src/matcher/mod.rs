//! Personalized job synthesis and match scoring

pub mod templates;

use crate::config::MatcherConfig;
use crate::parser::ParsedResume;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use templates::{JobTemplate, SalaryRange, LOCATIONS, SALARY_RANGES};

/// Sentinel location meaning "pick one at random".
pub const ANY_LOCATION: &str = "Any";

/// Caller-supplied search preferences, immutable per matching call.
/// `job_type` is informational only; the salary bounds participate in the
/// salary pick only when `MatcherConfig::filter_by_salary` is enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPreferences {
    pub job_title: String,
    pub location: String,
    pub job_type: String,
    pub salary_min: u64,
    pub salary_max: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Applying,
    Applied,
    Failed,
}

/// A synthesized job posting. The matcher emits jobs in state `Pending` and
/// relinquishes all write access; the calling workflow is the sole mutator of
/// `status`, `applied_at`, and `custom_resume` thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    #[serde(rename = "match")]
    pub match_score: u32,
    pub status: JobStatus,
    pub description: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_resume: Option<String>,
}

impl Job {
    pub fn mark_applying(&mut self) {
        self.status = JobStatus::Applying;
    }

    pub fn mark_applied(&mut self) {
        self.status = JobStatus::Applied;
        self.applied_at = Some(Utc::now());
    }

    pub fn mark_failed(&mut self) {
        self.status = JobStatus::Failed;
        self.applied_at = Some(Utc::now());
    }
}

/// Synthesizes ranked job postings from the template catalog, scored against
/// the parsed resume's skills. Randomness is owned by the matcher so callers
/// (and tests) can pin it with a seed.
pub struct JobMatcher {
    config: MatcherConfig,
    rng: StdRng,
}

impl JobMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic matcher for reproducible runs.
    pub fn with_seed(config: MatcherConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate `jobs_per_search` postings sorted by match score descending.
    /// Total over any input; a resume with no skills just yields baseline
    /// scores. Stable sort keeps tie order deterministic under a fixed seed.
    pub fn generate(&mut self, resume: &ParsedResume, prefs: &SearchPreferences) -> Vec<Job> {
        let template = templates::select_template(&prefs.job_title);
        let generated_at = Utc::now().timestamp_millis();

        let mut jobs = Vec::with_capacity(self.config.jobs_per_search);
        for i in 0..self.config.jobs_per_search {
            jobs.push(self.synthesize_job(template, resume, prefs, generated_at, i));
        }

        jobs.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        jobs
    }

    fn synthesize_job(
        &mut self,
        template: &JobTemplate,
        resume: &ParsedResume,
        prefs: &SearchPreferences,
        generated_at: i64,
        index: usize,
    ) -> Job {
        let title = *pick(&mut self.rng, template.titles);
        let company = *pick(&mut self.rng, template.companies);
        let description = *pick(&mut self.rng, template.descriptions);

        // jitter_max of 0 disables the jitter term entirely.
        let jitter = if self.config.jitter_max == 0 {
            0
        } else {
            self.rng.gen_range(0..self.config.jitter_max)
        };
        let match_score = self.score_description(&resume.skills, description, jitter);

        let location = if prefs.location == ANY_LOCATION {
            pick(&mut self.rng, LOCATIONS).to_string()
        } else {
            prefs.location.clone()
        };

        let salary = self.pick_salary(prefs).label.to_string();

        let top_skills: Vec<&str> = resume.skills.iter().take(5).map(String::as_str).collect();
        let full_description = format!(
            "{}\n\nRequired Skills: {}",
            description,
            top_skills.join(", ")
        );

        let url = format!(
            "https://www.linkedin.com/jobs/view/{}",
            self.rng.gen_range(0..1_000_000_000u64)
        );

        Job {
            id: format!("job-{}-{}", generated_at, index),
            title: title.to_string(),
            company: company.to_string(),
            location,
            salary,
            match_score,
            status: JobStatus::Pending,
            description: full_description,
            url,
            applied_at: None,
            custom_resume: None,
        }
    }

    /// Baseline plus a per-skill bonus for every resume skill appearing as a
    /// substring of a description token, plus the explicit jitter term,
    /// capped. The jitter is a parameter so the overlap property is testable
    /// without randomness.
    fn score_description(&self, skills: &[String], description: &str, jitter: u32) -> u32 {
        let tokens: Vec<String> = description
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let matching = skills
            .iter()
            .filter(|skill| {
                let skill = skill.to_lowercase();
                tokens.iter().any(|token| token.contains(&skill))
            })
            .count() as u32;

        let raw = self.config.base_score + self.config.per_skill_bonus * matching + jitter;
        raw.min(self.config.score_cap)
    }

    /// Salary band pick. With filtering enabled and a non-zero bound, only
    /// bands overlapping the requested range are candidates; nothing
    /// overlapping falls back to the full list.
    fn pick_salary(&mut self, prefs: &SearchPreferences) -> &'static SalaryRange {
        if self.config.filter_by_salary && (prefs.salary_min > 0 || prefs.salary_max > 0) {
            let upper = if prefs.salary_max > 0 {
                prefs.salary_max
            } else {
                u64::MAX
            };

            let candidates: Vec<&'static SalaryRange> = SALARY_RANGES
                .iter()
                .filter(|range| range.max >= prefs.salary_min && range.min <= upper)
                .collect();

            if !candidates.is_empty() {
                return candidates[self.rng.gen_range(0..candidates.len())];
            }
        }

        pick(&mut self.rng, SALARY_RANGES)
    }
}

fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}
