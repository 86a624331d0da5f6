//! The row-windowed project grid.
//!
//! Renders a large, already-shaped project sequence inside a fixed-height
//! scrollable viewport, materializing only the rows near the visible
//! window. The grid performs no filtering or sorting; it renders exactly
//! the sequence it is handed, in order.

use std::cell::RefCell;
use std::rc::Rc;

use smallvec::SmallVec;

use hydrogrid_foundation::grid::{
    measure_grid, resolve_columns, row_count, row_items, GridItemProvider, GridMeasureConfig,
    GridState, OVERSCAN_ROWS, ROW_HEIGHT_ESTIMATE,
};
use hydrogrid_foundation::highlight::{default_highlighter, Highlighter};
use hydrogrid_foundation::viewport::{ResizeEvents, ResizeSubscription, Viewport};
use hydrogrid_model::Project;

use super::card::CardView;

/// Default height of the scrollable region.
const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;

/// Layout configuration for [`ProjectGrid`].
#[derive(Clone, Debug)]
pub struct ProjectGridSpec {
    /// Fixed height of the scrollable region.
    pub viewport_height: f32,
    /// Estimated height of every row.
    pub row_height: f32,
    /// Rows rendered beyond the visible window on each side.
    pub overscan_rows: usize,
}

impl Default for ProjectGridSpec {
    fn default() -> Self {
        Self {
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            row_height: ROW_HEIGHT_ESTIMATE,
            overscan_rows: OVERSCAN_ROWS,
        }
    }
}

impl ProjectGridSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewport_height(mut self, height: f32) -> Self {
        self.viewport_height = height;
        self
    }

    pub fn row_height(mut self, height: f32) -> Self {
        self.row_height = height;
        self
    }

    pub fn overscan_rows(mut self, rows: usize) -> Self {
        self.overscan_rows = rows;
        self
    }
}

/// Provider over the grid's project sequence; keys are project ids.
struct ProjectItems<'a>(&'a [Project]);

impl GridItemProvider for ProjectItems<'_> {
    fn item_count(&self) -> usize {
        self.0.len()
    }

    fn get_key(&self, index: usize) -> u64 {
        self.0[index].id
    }
}

struct GridCore {
    items: Vec<Project>,
    query: String,
    highlighter: Highlighter,
    config: GridMeasureConfig,
    viewport_height: f32,
    columns: usize,
    state: GridState,
}

/// A windowed grid of project cards, not yet mounted to a host viewport.
pub struct ProjectGrid {
    core: Rc<RefCell<GridCore>>,
}

impl ProjectGrid {
    /// Creates a grid over an already filtered and sorted sequence.
    ///
    /// `query` is used only to emphasize matches inside rendered fields; it
    /// never filters.
    pub fn new(items: Vec<Project>, query: impl Into<String>, spec: ProjectGridSpec) -> Self {
        Self::with_highlighter(items, query, default_highlighter(), spec)
    }

    /// Same as [`ProjectGrid::new`] with a caller-supplied highlight
    /// function. The function must be pure and cheap; it runs per visible
    /// card per highlighted field.
    pub fn with_highlighter(
        items: Vec<Project>,
        query: impl Into<String>,
        highlighter: Highlighter,
        spec: ProjectGridSpec,
    ) -> Self {
        Self {
            core: Rc::new(RefCell::new(GridCore {
                items,
                query: query.into(),
                highlighter,
                config: GridMeasureConfig {
                    row_height: spec.row_height,
                    overscan_rows: spec.overscan_rows,
                },
                viewport_height: spec.viewport_height,
                columns: 1,
                state: GridState::new(),
            })),
        }
    }

    /// Shared scroll state, e.g. for a progress bar.
    pub fn state(&self) -> GridState {
        self.core.borrow().state.clone()
    }

    /// Mounts the grid: resolves the column count from the current viewport
    /// width and subscribes for resize notifications. The subscription is
    /// scoped to the returned attachment; dropping it detaches the listener
    /// on every exit path.
    pub fn attach(self, resize: &ResizeEvents, viewport: Viewport) -> AttachedGrid {
        self.core.borrow_mut().columns = resolve_columns(viewport.width);

        let core_for_resize = Rc::clone(&self.core);
        let subscription =
            resize.subscribe(move |viewport: Viewport| apply_viewport(&core_for_resize, viewport));

        AttachedGrid {
            core: self.core,
            _resize: subscription,
        }
    }
}

fn apply_viewport(core: &Rc<RefCell<GridCore>>, viewport: Viewport) {
    let mut core = core.borrow_mut();
    let columns = resolve_columns(viewport.width);
    if columns != core.columns {
        log::debug!("grid: column count {} -> {columns}", core.columns);
        core.columns = columns;
    }
}

/// A mounted [`ProjectGrid`]. Holds the resize subscription guard.
pub struct AttachedGrid {
    core: Rc<RefCell<GridCore>>,
    _resize: ResizeSubscription,
}

impl AttachedGrid {
    /// Applies a viewport change directly, for hosts that deliver resize
    /// notifications themselves instead of through [`ResizeEvents`].
    pub fn handle_resize(&self, viewport: Viewport) {
        apply_viewport(&self.core, viewport);
    }

    /// Current column count (1, 2 or 3 at the observed breakpoints).
    pub fn columns(&self) -> usize {
        self.core.borrow().columns
    }

    pub fn state(&self) -> GridState {
        self.core.borrow().state.clone()
    }

    /// Queues a scroll delta for the next window computation.
    pub fn scroll_by(&self, delta: f32) {
        self.core.borrow().state.dispatch_scroll_delta(delta);
    }

    /// Queues a jump to a row index.
    pub fn scroll_to_row(&self, index: usize) {
        self.core.borrow().state.scroll_to_row(index);
    }

    /// Queues a jump to the row containing the project with `key`.
    /// Unknown keys are ignored.
    pub fn scroll_to_key(&self, key: u64) {
        let core = self.core.borrow();
        if let Some(index) = ProjectItems(&core.items).get_index(key) {
            core.state.scroll_to_row(index / core.columns.max(1));
        }
    }

    /// Computes the current window: the spacer height plus the rows (and
    /// their cards) that should actually exist right now.
    pub fn window(&self) -> GridWindow {
        let core = self.core.borrow();
        let provider = ProjectItems(&core.items);
        let columns = core.columns.max(1);

        let result = measure_grid(
            row_count(provider.item_count(), columns),
            &core.state,
            core.viewport_height,
            &core.config,
        );

        let mut rows = Vec::with_capacity(result.visible_rows.len());
        for measured in &result.visible_rows {
            let slice = row_items(&core.items, columns, measured.index);
            let cards: SmallVec<[CardView; 3]> = slice
                .iter()
                .map(|project| CardView::build(project, &core.query, &core.highlighter))
                .collect();
            rows.push(RenderedRow {
                index: measured.index,
                offset: measured.offset,
                trailing_placeholders: columns - cards.len(),
                cards,
            });
        }

        GridWindow {
            total_height: result.total_height,
            columns,
            rows,
            can_scroll_forward: result.can_scroll_forward,
            can_scroll_backward: result.can_scroll_backward,
        }
    }
}

/// One materialized row of the window.
#[derive(Clone, Debug)]
pub struct RenderedRow {
    /// Row index within the partition.
    pub index: usize,
    /// Vertical offset inside the spacer container.
    pub offset: f32,
    /// Empty cells after the cards; nonzero only on a short final row.
    pub trailing_placeholders: usize,
    pub cards: SmallVec<[CardView; 3]>,
}

/// The renderable output of one window computation.
///
/// The rendering substrate sizes an inner container to `total_height` (so
/// the scrollbar reflects true content length) and absolutely positions
/// each row at its offset.
#[derive(Clone, Debug)]
pub struct GridWindow {
    pub total_height: f32,
    pub columns: usize,
    pub rows: Vec<RenderedRow>,
    pub can_scroll_forward: bool,
    pub can_scroll_backward: bool,
}

impl GridWindow {
    /// Indices of the first and last rendered row, if any row rendered.
    pub fn row_span(&self) -> Option<(usize, usize)> {
        match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => Some((first.index, last.index)),
            _ => None,
        }
    }

    /// Keys of every card in the window, in render order.
    pub fn card_keys(&self) -> Vec<u64> {
        self.rows
            .iter()
            .flat_map(|row| row.cards.iter().map(|card| card.key))
            .collect()
    }
}
