//! Project card view model.
//!
//! Cards are stateless with respect to the grid: each one is built from a
//! single [`Project`] and the active query, and every build is independent
//! of every other.

use hydrogrid_foundation::highlight::{Highlighted, Highlighter};
use hydrogrid_model::{Project, ProjectStatus};

/// Semantic badge tone; the rendering substrate maps these to colors
/// (positive → green, warning → orange).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Positive,
    Warning,
}

/// Status badge shown in the card header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub tone: BadgeTone,
}

impl StatusBadge {
    fn for_status(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Completed => Self {
                label: "completed",
                tone: BadgeTone::Positive,
            },
            ProjectStatus::Ongoing => Self {
                label: "ongoing",
                tone: BadgeTone::Warning,
            },
        }
    }
}

/// Description lines shown before the visual clamp.
pub const DESCRIPTION_MAX_LINES: usize = 2;

/// The card footer block. Capacity and value arrive preformatted and are
/// copied verbatim, never highlighted.
#[derive(Clone, Debug, PartialEq)]
pub struct CardDetails {
    pub category: Highlighted,
    pub location: Highlighted,
    pub capacity: String,
    pub value: String,
}

/// Fully resolved view model for one project card.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    /// Stable identity, carried from the project record.
    pub key: u64,
    pub badge: StatusBadge,
    pub title: Highlighted,
    pub description: Highlighted,
    /// Clamp hint for the description block.
    pub description_max_lines: usize,
    pub details: CardDetails,
}

impl CardView {
    /// Builds the view model for `project`, emphasizing `query` matches in
    /// the text fields via the supplied highlighter.
    pub fn build(project: &Project, query: &str, highlighter: &Highlighter) -> Self {
        let emphasize = highlighter.as_ref();
        Self {
            key: project.id,
            badge: StatusBadge::for_status(project.status),
            title: emphasize(&project.name, query),
            description: emphasize(&project.description, query),
            description_max_lines: DESCRIPTION_MAX_LINES,
            details: CardDetails {
                category: emphasize(&project.category, query),
                location: emphasize(&project.location, query),
                capacity: project.capacity.clone(),
                value: project.value.clone(),
            },
        }
    }
}
