//! Chart metadata and the form-side validation rules.
//!
//! Validation is the form collaborator's concern: the preview synchronizer
//! and the generator run regardless of whether the metadata would pass, so
//! a half-filled form still previews.

use lc_theme::THEMES;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed category catalog offered by the form.
pub const CATEGORIES: [&str; 8] = [
    "Sports",
    "Coding",
    "Languages",
    "Music",
    "Art",
    "Life Skills",
    "Professional Skills",
    "Hobbies",
];

/// Fixed difficulty catalog offered by the form.
pub const DIFFICULTIES: [&str; 4] = [
    "Beginner Friendly",
    "Intermediate",
    "Advanced",
    "Expert Level",
];

const TITLE_MIN_CHARS: usize = 2;
const TITLE_MAX_CHARS: usize = 50;
const TIME_TO_MASTER_MIN_DAYS: u32 = 1;
const TIME_TO_MASTER_MAX_DAYS: u32 = 1000;

/// Descriptive fields of one chart, mutated freely by the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: String,
    pub difficulty: String,
    pub time_to_master_days: u32,
    pub theme_id: usize,
}

impl Default for ChartMetadata {
    fn default() -> Self {
        Self {
            title: String::new(),
            created_by: None,
            description: None,
            category: "Coding".to_string(),
            difficulty: "Beginner Friendly".to_string(),
            time_to_master_days: 30,
            theme_id: 0,
        }
    }
}

impl ChartMetadata {
    /// Check the submission rules. Returns every problem, not just the first,
    /// so the form can flag all offending fields at once.
    pub fn validate(&self) -> Result<(), Vec<ChartError>> {
        let mut problems = Vec::new();

        let title_chars = self.title.chars().count();
        if title_chars < TITLE_MIN_CHARS || title_chars > TITLE_MAX_CHARS {
            problems.push(ChartError::TitleLength {
                chars: title_chars,
                min: TITLE_MIN_CHARS,
                max: TITLE_MAX_CHARS,
            });
        }
        if !CATEGORIES.contains(&self.category.as_str()) {
            problems.push(ChartError::UnknownCategory(self.category.clone()));
        }
        if !DIFFICULTIES.contains(&self.difficulty.as_str()) {
            problems.push(ChartError::UnknownDifficulty(self.difficulty.clone()));
        }
        if self.time_to_master_days < TIME_TO_MASTER_MIN_DAYS
            || self.time_to_master_days > TIME_TO_MASTER_MAX_DAYS
        {
            problems.push(ChartError::TimeToMaster {
                days: self.time_to_master_days,
            });
        }
        if self.theme_id >= THEMES.len() {
            problems.push(ChartError::ThemeOutOfRange {
                theme_id: self.theme_id,
                catalog_len: THEMES.len(),
            });
        }

        if problems.is_empty() { Ok(()) } else { Err(problems) }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Title must be {min}-{max} characters, got {chars}")]
    TitleLength {
        chars: usize,
        min: usize,
        max: usize,
    },

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error("Time to master must be 1-1000 days, got {days}")]
    TimeToMaster { days: u32 },

    #[error("Theme id {theme_id} outside catalog (len {catalog_len})")]
    ThemeOutOfRange { theme_id: usize, catalog_len: usize },
}
