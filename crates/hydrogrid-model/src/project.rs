//! Project records as delivered by the content backend.

use serde::{Deserialize, Deserializer};

/// Completion status of an infrastructure project.
///
/// The backend stores status as free text. Only a recognisable
/// `"completed"` maps to [`ProjectStatus::Completed`]; every other value
/// renders as ongoing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    #[default]
    Ongoing,
}

impl ProjectStatus {
    /// Parses the backend's status string.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("completed") {
            ProjectStatus::Completed
        } else {
            ProjectStatus::Ongoing
        }
    }

    /// Badge label shown on project cards.
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "completed",
            ProjectStatus::Ongoing => "ongoing",
        }
    }
}

impl<'de> Deserialize<'de> for ProjectStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(ProjectStatus::parse(&raw))
    }
}

/// A single project record.
///
/// Identity (`id`) is stable across renders; display fields are read-only
/// to everything downstream of this crate. `capacity` and `value` arrive
/// preformatted and are always copied verbatim into cards.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Project {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub capacity: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub description: String,
}
