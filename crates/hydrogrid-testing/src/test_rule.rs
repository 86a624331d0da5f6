//! The grid test harness.

use hydrogrid_foundation::grid::GridState;
use hydrogrid_foundation::viewport::{ResizeEvents, Viewport};
use hydrogrid_model::Project;
use hydrogrid_ui::{AttachedGrid, GridWindow, ProjectGrid, ProjectGridSpec};

/// Drives a mounted grid with synthetic scroll/resize input and exposes
/// rendered windows for assertions.
pub struct GridTestRule {
    resize: ResizeEvents,
    grid: AttachedGrid,
    viewport: Viewport,
}

impl GridTestRule {
    /// Mounts `projects` at the default desktop viewport (1280×720) with no
    /// active query.
    pub fn new(projects: Vec<Project>) -> Self {
        Self::with_spec(projects, "", ProjectGridSpec::default())
    }

    pub fn with_query(projects: Vec<Project>, query: &str) -> Self {
        Self::with_spec(projects, query, ProjectGridSpec::default())
    }

    pub fn with_spec(projects: Vec<Project>, query: &str, spec: ProjectGridSpec) -> Self {
        let resize = ResizeEvents::new();
        let viewport = Viewport::new(1280.0, 720.0);
        let grid = ProjectGrid::new(projects, query, spec).attach(&resize, viewport);
        Self {
            resize,
            grid,
            viewport,
        }
    }

    /// Emits a resize notification, as the host window would.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.resize.emit(self.viewport);
    }

    pub fn scroll_by(&self, delta: f32) {
        self.grid.scroll_by(delta);
    }

    pub fn scroll_to_row(&self, index: usize) {
        self.grid.scroll_to_row(index);
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn state(&self) -> GridState {
        self.grid.state()
    }

    pub fn grid(&self) -> &AttachedGrid {
        &self.grid
    }

    /// Computes the current window.
    pub fn window(&self) -> GridWindow {
        self.grid.window()
    }

    /// First and last rendered row index, if anything rendered.
    pub fn visible_row_span(&self) -> Option<(usize, usize)> {
        self.window().row_span()
    }

    /// Scrolls from the top through the whole grid, window by window, and
    /// returns every card key exactly once in render order.
    pub fn collect_all_card_keys(&self) -> Vec<u64> {
        let mut keys = Vec::new();
        let mut covered_through: Option<usize> = None;

        self.grid.scroll_to_row(0);
        loop {
            let window = self.grid.window();
            let Some((_, last)) = window.row_span() else {
                break;
            };
            for row in &window.rows {
                if covered_through.map_or(true, |prev| row.index > prev) {
                    keys.extend(row.cards.iter().map(|card| card.key));
                }
            }
            covered_through = Some(last);
            if !window.can_scroll_forward {
                break;
            }
            self.grid.scroll_to_row(last + 1);
        }
        keys
    }
}
