//! Configuration management for the job pilot

use crate::error::{JobPilotError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub parser: ParserConfig,
    pub matcher: MatcherConfig,
    pub output: OutputConfig,
}

/// Heuristic extraction policy: anchor keywords, scan windows, and caps.
/// Kept as data so the policy is swappable without touching the scan mechanism.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    pub skill_anchors: Vec<String>,
    pub experience_anchors: Vec<String>,
    pub education_anchors: Vec<String>,
    pub skill_window: usize,
    pub experience_window: usize,
    pub education_window: usize,
    pub skills_per_anchor: usize,
    pub max_skills: usize,
    pub max_experience: usize,
    pub max_education: usize,
    pub summary_max_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherConfig {
    pub jobs_per_search: usize,
    pub base_score: u32,
    pub per_skill_bonus: u32,
    pub jitter_max: u32,
    pub score_cap: u32,
    /// When true, the generated salary is restricted to ranges overlapping the
    /// requested bounds. Off by default.
    pub filter_by_salary: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            skill_anchors: vec![
                "skills".to_string(),
                "technical skills".to_string(),
                "core competencies".to_string(),
            ],
            experience_anchors: vec![
                "experience".to_string(),
                "work experience".to_string(),
                "employment".to_string(),
            ],
            education_anchors: vec![
                "education".to_string(),
                "academic".to_string(),
                "qualification".to_string(),
            ],
            skill_window: 300,
            experience_window: 500,
            education_window: 300,
            skills_per_anchor: 10,
            max_skills: 15,
            max_experience: 5,
            max_education: 3,
            summary_max_chars: 200,
        }
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            jobs_per_search: 10,
            base_score: 60,
            per_skill_bonus: 5,
            jitter_max: 10,
            score_cap: 95,
            filter_by_salary: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            matcher: MatcherConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            JobPilotError::Configuration(format!("Failed to parse config: {}", e))
        })?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            JobPilotError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("job-pilot")
            .join("config.toml")
    }
}
