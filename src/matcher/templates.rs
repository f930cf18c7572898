//! Job posting catalog
//!
//! Immutable read-only data the matcher synthesizes postings from: one
//! template per broad occupational category, plus location and salary lists.

/// A bundle of plausible titles, companies, and description paragraphs for
/// one occupational category.
pub struct JobTemplate {
    pub titles: &'static [&'static str],
    pub companies: &'static [&'static str],
    pub descriptions: &'static [&'static str],
}

pub const CATALOG: &[JobTemplate] = &[
    JobTemplate {
        titles: &[
            "Software Engineer",
            "Full Stack Developer",
            "Backend Developer",
            "Frontend Developer",
        ],
        companies: &[
            "Google", "Microsoft", "Amazon", "Meta", "Apple", "Netflix", "Spotify", "Uber",
        ],
        descriptions: &[
            "Build scalable web applications using modern technologies. Work with cross-functional teams.",
            "Design and implement robust backend systems. Experience with cloud platforms required.",
            "Create beautiful user interfaces with React and TypeScript. Strong CSS skills needed.",
            "Develop microservices architecture. Knowledge of Docker and Kubernetes preferred.",
        ],
    },
    JobTemplate {
        titles: &["Data Analyst", "Business Analyst", "Data Scientist", "ML Engineer"],
        companies: &[
            "IBM", "Oracle", "SAP", "Salesforce", "Adobe", "Tableau", "DataBricks",
        ],
        descriptions: &[
            "Analyze large datasets to derive actionable insights. Proficiency in SQL and Python required.",
            "Build predictive models using machine learning algorithms. Experience with TensorFlow preferred.",
            "Create data visualizations and dashboards. Strong communication skills needed.",
            "Work with big data technologies. Experience with Spark and Hadoop is a plus.",
        ],
    },
    JobTemplate {
        titles: &["Product Manager", "Project Manager", "Scrum Master", "Program Manager"],
        companies: &[
            "LinkedIn", "Twitter", "Slack", "Atlassian", "Asana", "Monday.com",
        ],
        descriptions: &[
            "Lead product development from conception to launch. Strong stakeholder management required.",
            "Coordinate agile teams and ensure timely delivery. Certified Scrum Master preferred.",
            "Define product roadmap and prioritize features. Experience in SaaS products needed.",
            "Manage multiple projects simultaneously. PMP certification is a plus.",
        ],
    },
];

pub const LOCATIONS: &[&str] = &[
    "San Francisco, CA",
    "New York, NY",
    "Austin, TX",
    "Seattle, WA",
    "Boston, MA",
    "Remote",
    "Hybrid",
];

/// Salary band with numeric bounds so preference filtering can reason about
/// overlap while the display label stays in the original format.
pub struct SalaryRange {
    pub label: &'static str,
    pub min: u64,
    pub max: u64,
}

pub const SALARY_RANGES: &[SalaryRange] = &[
    SalaryRange { label: "$80k - $120k", min: 80_000, max: 120_000 },
    SalaryRange { label: "$100k - $150k", min: 100_000, max: 150_000 },
    SalaryRange { label: "$120k - $180k", min: 120_000, max: 180_000 },
    SalaryRange { label: "$90k - $130k", min: 90_000, max: 130_000 },
    SalaryRange { label: "$110k - $160k", min: 110_000, max: 160_000 },
];

/// Select the template whose titles have a case-insensitive substring
/// relationship (either direction) with the requested title; first template
/// is the fallback.
pub fn select_template(job_title: &str) -> &'static JobTemplate {
    let wanted = job_title.to_lowercase();

    CATALOG
        .iter()
        .find(|template| {
            template.titles.iter().any(|title| {
                let title = title.to_lowercase();
                title.contains(&wanted) || wanted.contains(&title)
            })
        })
        .unwrap_or(&CATALOG[0])
}
