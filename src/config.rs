//! Site content and settings.
//!
//! Everything a page shows that is not already in the markup lives here:
//! the owner's name for the footer, the fun facts, the education details,
//! and the project records. Defaults reproduce the published site; a host
//! page can override any field with a JSON document.

use serde::Deserialize;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_HOME_PAGE: &str = "index.html";
pub const DEFAULT_OWNER: &str = "Sangay Namling Yoezer";

/// Error returned by [`SiteConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The override document is not valid JSON for [`SiteConfig`].
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The storage key is empty, so the preference could never be read back.
    #[error("storage key must not be empty")]
    EmptyStorageKey,
}

/// A project entry shown on the projects page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub status: String,
}

impl ProjectRecord {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self { name: name.into(), status: status.into() }
    }
}

/// All configurable site content.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Name printed in the footer copyright line.
    pub owner: String,
    /// `localStorage` key holding the theme preference.
    pub storage_key: String,
    /// Page assumed when the URL path has no file segment.
    pub home_page: String,
    pub fun_facts: Vec<String>,
    /// Detail text for each education item, by position.
    pub education_details: Vec<String>,
    /// Project records, by position in the project list.
    pub projects: Vec<ProjectRecord>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            home_page: DEFAULT_HOME_PAGE.to_string(),
            fun_facts: [
                "I once spent an entire weekend trying to debug a missing semicolon.",
                "My favorite Bhutanese dish is Ema Datshi (chili and cheese stew).",
                "I use photography and sketching to balance out my screen time.",
                "I speak three languages: Dzongkha, Nepali, and English.",
                "I'm training to be a teacher, so debugging code and explaining concepts are two sides of the same coin!",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            education_details: [
                "Focus on foundation and core subjects, building basic academic skills.",
                "Explored foundational concepts in economics, preparing for higher studies in arts and commerce streams.",
                "Developed critical thinking skills in Arts, complemented by quantitative analysis from Mathematics.",
                "Current focus includes web development, database management, and pedagogical technology integration.",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            projects: vec![
                ProjectRecord::new("Personal Portfolio Website", "Completed (Ongoing Enhancement)"),
                ProjectRecord::new("Oral History Projects", "Completed (Archived)"),
                ProjectRecord::new("Webpage UI Design", "In Progress (Design Phase)"),
                ProjectRecord::new("Short Film Project", "Completed (Post-production)"),
            ],
        }
    }
}

impl SiteConfig {
    /// Parse a JSON override. Fields missing from `raw` keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(config)
    }
}
