//! Job pilot: resume parsing, job matching, and resume tailoring toolkit

mod cli;
mod config;
mod customizer;
mod error;
mod input;
mod matcher;
mod output;
mod parser;
mod store;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::{Config, OutputFormat};
use error::{JobPilotError, Result};
use input::SourceReader;
use log::{error, info};
use matcher::{JobMatcher, SearchPreferences};
use output::{ConsoleFormatter, JsonFormatter};
use parser::ResumeParser;
use std::path::{Path, PathBuf};
use std::process;
use store::FileStore;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Parse {
            resume,
            output,
            detailed,
            save,
        } => {
            info!("Starting resume parsing");

            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| JobPilotError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format = resolve_output_format(output.as_deref(), &config)?;

            let parsed = parse_resume_file(&resume, &config).await?;

            match output_format {
                OutputFormat::Console => {
                    let formatter =
                        ConsoleFormatter::new(config.output.color_output, detailed || config.output.detailed);
                    print!("{}", formatter.format_resume(&parsed));
                }
                OutputFormat::Json => {
                    println!("{}", JsonFormatter::new(true).format(&parsed)?);
                }
            }

            if let Some(key) = save {
                let store = FileStore::open_default()?;
                store.save(&key, &parsed)?;
                println!("💾 Saved parsed resume under key '{}'", key);
            }
        }

        Commands::Match {
            resume,
            title,
            location,
            job_type,
            salary_min,
            salary_max,
            seed,
            output,
            detailed,
            save,
        } => {
            info!("Starting job matching");

            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| JobPilotError::InvalidInput(format!("Resume file: {}", e)))?;

            let output_format = resolve_output_format(output.as_deref(), &config)?;

            let parsed = parse_resume_file(&resume, &config).await?;

            let preferences = SearchPreferences {
                job_title: title,
                location,
                job_type,
                salary_min,
                salary_max,
            };

            let mut job_matcher = match seed {
                Some(seed) => JobMatcher::with_seed(config.matcher.clone(), seed),
                None => JobMatcher::new(config.matcher.clone()),
            };

            println!("🔍 Matching jobs for '{}'...", preferences.job_title);
            let jobs = job_matcher.generate(&parsed, &preferences);

            match output_format {
                OutputFormat::Console => {
                    let formatter =
                        ConsoleFormatter::new(config.output.color_output, detailed || config.output.detailed);
                    print!("{}", formatter.format_jobs(&jobs));
                    println!(
                        "\n🎯 {} jobs generated, top match {}%",
                        jobs.len(),
                        jobs.first().map(|j| j.match_score).unwrap_or(0)
                    );
                }
                OutputFormat::Json => {
                    println!("{}", JsonFormatter::new(true).format(&jobs)?);
                }
            }

            if let Some(key) = save {
                let store = FileStore::open_default()?;
                store.save(&key, &jobs)?;
                println!("💾 Saved job list under key '{}'", key);
            }
        }

        Commands::Tailor {
            resume,
            title,
            job,
            out,
        } => {
            info!("Starting resume tailoring");

            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| JobPilotError::InvalidInput(format!("Resume file: {}", e)))?;

            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(|e| JobPilotError::InvalidInput(format!("Job description file: {}", e)))?;

            let mut reader = SourceReader::new();
            let resume_text = reader.read_text(&resume).await?;
            let job_description = reader.read_text(&job).await?;

            let resume_parser = ResumeParser::with_config(config.parser.clone());
            let parsed = resume_parser.parse(&resume_text);

            let document = customizer::generate_custom_resume(&parsed, &title, &job_description);

            match out {
                Some(path) => {
                    write_document(&path, &document)?;
                    println!("📄 Tailored resume written to {}", path.display());
                }
                None => println!("{}", document),
            }
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Parser:");
                println!("  Skill anchors: {}", config.parser.skill_anchors.join(", "));
                println!(
                    "  Caps: {} skills, {} experience, {} education",
                    config.parser.max_skills,
                    config.parser.max_experience,
                    config.parser.max_education
                );
                println!("\nMatcher:");
                println!("  Jobs per search: {}", config.matcher.jobs_per_search);
                println!(
                    "  Score: base {} + {} per skill + jitter 0..{}, capped at {}",
                    config.matcher.base_score,
                    config.matcher.per_skill_bonus,
                    config.matcher.jitter_max,
                    config.matcher.score_cap
                );
                println!("  Salary filter: {}", config.matcher.filter_by_salary);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

fn resolve_output_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(JobPilotError::InvalidInput),
        None => Ok(config.output.format.clone()),
    }
}

async fn parse_resume_file(path: &PathBuf, config: &Config) -> Result<parser::ParsedResume> {
    println!("📂 Extracting text from {}...", path.display());

    let mut reader = SourceReader::new();
    let resume_text = reader.read_text(path).await?;

    info!("Extracted {} characters", resume_text.len());

    let resume_parser = ResumeParser::with_config(config.parser.clone());
    Ok(resume_parser.parse(&resume_text))
}

fn write_document(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, document)?;
    Ok(())
}
