//! Portfolio catalog: the three data tables rendered on the home page.
//!
//! The content is embedded in code as literal tables. Nothing here is
//! mutated after construction; entities have no identity beyond their
//! position in their containing sequence.

use indexmap::IndexMap;
use validator::Validate;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Value objects
// ---------------------------------------------------------------------------

/// A showcased work entry with descriptive metadata and links.
#[derive(Debug, Clone, Validate)]
pub struct Project {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    /// Technology labels, in display order. Never empty.
    #[validate(length(min = 1))]
    pub technologies: Vec<String>,
    #[validate(url)]
    pub github: String,
    #[validate(url)]
    pub demo: String,
    /// Relative path resolved under the static asset mount.
    #[validate(length(min = 1))]
    pub image: String,
}

/// An offered capability with an icon glyph, title, and description.
#[derive(Debug, Clone, Validate)]
pub struct Service {
    #[validate(length(min = 1))]
    pub icon: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
}

/// Ordered mapping of category name to skill labels.
///
/// Both the key order and each list's order are display order, so this is
/// an `IndexMap` rather than a `HashMap`.
pub type Skills = IndexMap<String, Vec<String>>;

/// The three catalogs, side by side.
///
/// Constructed once at process start, validated, then shared read-only.
/// The catalogs are independent; nothing relates a project to a skill or
/// a service.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub projects: Vec<Project>,
    pub skills: Skills,
    pub services: Vec<Service>,
}

// ---------------------------------------------------------------------------
// Embedded content
// ---------------------------------------------------------------------------

impl Catalog {
    /// Build the catalog from the embedded literal tables.
    ///
    /// Declaration order is display order for all three tables.
    pub fn load() -> Self {
        let projects = vec![
            Project {
                title: "Weather App".to_string(),
                description: "A robust web-based inventory management system that enables \
                    businesses to track stock levels, manage orders, and generate detailed \
                    reports in real time."
                    .to_string(),
                technologies: strings(&["Python", "Flask", "SQLite", "Jinja2", "Bootstrap"]),
                github: "https://github.com/spw3bt3ch/ai-weather-app".to_string(),
                demo: "https://ai-weather-app-p7qr.onrender.com/".to_string(),
                image: "images/weather.png".to_string(),
            },
            Project {
                title: "Finance Tracker".to_string(),
                description: "A fully functional finance tracker for organizations, supporting \
                    inbox management, compose, reply, and attachment functionalities."
                    .to_string(),
                technologies: strings(&["Python", "Flask", "SQLite", "REST API", "JavaScript"]),
                github: "https://github.com/spw3bt3ch/finance-trkr".to_string(),
                // The demo link for this project is its repository;
                // intentional content, not a typo.
                demo: "https://github.com/spw3bt3ch/finance-trkr".to_string(),
                image: "images/finance-trckr.png".to_string(),
            },
            Project {
                title: "Portfolio Platform for Designers".to_string(),
                description: "A dynamic portfolio web application built for creative designers \
                    to showcase their work, attract clients, and manage project galleries."
                    .to_string(),
                technologies: strings(&["Python", "Flask", "Tailwind CSS", "SQLite", "Jinja2"]),
                github: "https://github.com/spw3bt3ch".to_string(),
                demo: "https://graphics-designers-portfolio-websit.vercel.app/".to_string(),
                image: "images/graphics-design.png".to_string(),
            },
            Project {
                title: "Health Radar".to_string(),
                description: "A modern Flask web application for evaluating 14 key health \
                    metrics including BMI, cardiovascular health, stroke risk, metabolic \
                    health, respiratory health, and more."
                    .to_string(),
                technologies: strings(&["Python", "Flask", "SQLite", "Jinja2", "Bootstrap"]),
                github: "https://github.com/spw3bt3ch".to_string(),
                demo: "https://health-plus-v1u7.onrender.com/".to_string(),
                image: "images/health-radarr.png".to_string(),
            },
        ];

        let mut skills = Skills::new();
        skills.insert(
            "Backend".to_string(),
            strings(&["Python", "Flask", "FastAPI", "REST APIs"]),
        );
        skills.insert(
            "Frontend".to_string(),
            strings(&["HTML5", "Tailwind CSS", "JavaScript", "Jinja2"]),
        );
        skills.insert(
            "Database".to_string(),
            strings(&["SQLite", "PostgreSQL", "MySQL"]),
        );
        skills.insert(
            "Tools".to_string(),
            strings(&["Git", "GitHub", "Vercel", "Docker"]),
        );

        let services = vec![
            Service {
                icon: "🖥️".to_string(),
                title: "Backend Development".to_string(),
                description: "Scalable, secure, and high-performance backend systems using \
                    Python, Flask, and FastAPI tailored to your business needs."
                    .to_string(),
            },
            Service {
                icon: "🌐".to_string(),
                title: "Fullstack Web Development".to_string(),
                description: "End-to-end web applications with clean frontends and robust \
                    backends, from design to deployment."
                    .to_string(),
            },
            Service {
                icon: "🔗".to_string(),
                title: "API Development".to_string(),
                description: "Custom RESTful APIs that power mobile apps, web clients, and \
                    third-party integrations with full documentation."
                    .to_string(),
            },
            Service {
                icon: "⚙️".to_string(),
                title: "Custom Software Development".to_string(),
                description: "Bespoke software solutions engineered from scratch to solve \
                    unique business challenges efficiently."
                    .to_string(),
            },
            Service {
                icon: "🤖".to_string(),
                title: "Automation Systems".to_string(),
                description: "Intelligent automation tools and scripts that eliminate \
                    repetitive tasks and streamline operations at scale."
                    .to_string(),
            },
            Service {
                icon: "🎨".to_string(),
                title: "Graphics & Product Design".to_string(),
                description: "Creative visual solutions spanning brand identity, UI/UX design, \
                    and product graphics — delivering stunning, user-centred designs that \
                    communicate and convert."
                    .to_string(),
            },
        ];

        Self {
            projects,
            skills,
            services,
        }
    }

    /// Check every catalog invariant.
    ///
    /// Intended to run once at startup; a failure means the embedded content
    /// is broken and the server should refuse to start.
    ///
    /// Invariants:
    /// - every string field is non-empty;
    /// - `github` and `demo` are well-formed URLs;
    /// - `technologies` and each skills list are non-empty, with non-empty
    ///   member strings;
    /// - at least one project, skill category, and service exists.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.projects.is_empty() {
            return Err(CoreError::Validation("no projects defined".to_string()));
        }
        for project in &self.projects {
            Validate::validate(project)
                .map_err(|e| CoreError::Validation(format!("project '{}': {e}", project.title)))?;
            if project.technologies.iter().any(|t| t.trim().is_empty()) {
                return Err(CoreError::Validation(format!(
                    "project '{}': empty technology label",
                    project.title
                )));
            }
        }

        if self.skills.is_empty() {
            return Err(CoreError::Validation(
                "no skill categories defined".to_string(),
            ));
        }
        for (category, labels) in &self.skills {
            if category.trim().is_empty() {
                return Err(CoreError::Validation(
                    "empty skill category name".to_string(),
                ));
            }
            if labels.is_empty() {
                return Err(CoreError::Validation(format!(
                    "skill category '{category}' has no labels"
                )));
            }
            if labels.iter().any(|label| label.trim().is_empty()) {
                return Err(CoreError::Validation(format!(
                    "skill category '{category}': empty label"
                )));
            }
        }

        if self.services.is_empty() {
            return Err(CoreError::Validation("no services defined".to_string()));
        }
        for service in &self.services {
            Validate::validate(service)
                .map_err(|e| CoreError::Validation(format!("service '{}': {e}", service.title)))?;
        }

        Ok(())
    }
}

fn strings(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| (*s).to_string()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
