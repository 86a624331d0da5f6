//! Catalog decoding and upstream data shaping.
//!
//! The windowed grid renders whatever ordered sequence it is handed;
//! filtering and sorting live here, on the caller side of that boundary.

use serde::Deserialize;
use thiserror::Error;

use crate::project::Project;

/// Failure to decode a catalog payload.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed catalog document: {0}")]
    Decode(#[from] serde_json::Error),
}

/// An ordered collection of projects decoded from one backend payload.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Decodes a `{"projects": [...]}` payload.
    pub fn from_json(payload: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Applies a filter and returns the shaped sequence the grid consumes:
    /// newest year first, ties broken by name. The catalog itself is never
    /// mutated and the sort is stable.
    pub fn select(&self, filter: &ProjectFilter) -> Vec<&Project> {
        let mut picked: Vec<&Project> = self
            .projects
            .iter()
            .filter(|project| filter.admits(project))
            .collect();
        picked.sort_by(|a, b| b.year.cmp(&a.year).then_with(|| a.name.cmp(&b.name)));
        picked
    }
}

/// Criteria for [`ProjectCatalog::select`].
///
/// The free-text query doubles as the highlight query downstream, so both
/// sides agree on what matches.
#[derive(Clone, Debug, Default)]
pub struct ProjectFilter {
    pub category: Option<String>,
    pub query: Option<String>,
}

impl ProjectFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    fn admits(&self, project: &Project) -> bool {
        if let Some(category) = &self.category {
            if !project.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        match &self.query {
            Some(query) if !query.is_empty() => {
                let needle = query.to_lowercase();
                project.name.to_lowercase().contains(&needle)
                    || project.location.to_lowercase().contains(&needle)
                    || project.description.to_lowercase().contains(&needle)
            }
            _ => true,
        }
    }
}
