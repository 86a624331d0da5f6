//! Grid state management.
//!
//! Provides [`GridState`] for controlling and observing the grid's scroll
//! position. State is component-local and mutated only by the UI thread in
//! response to events; there are no concurrent writers.

use std::cell::RefCell;
use std::rc::Rc;

use crate::scroll::ScrollPosition;

/// Layout info from the last measure pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLayoutInfo {
    /// First row index in the rendered span (overscan included).
    pub first_visible_row: usize,

    /// Last row index in the rendered span (overscan included).
    pub last_visible_row: usize,

    /// Total number of rows in the partition.
    pub row_count: usize,

    /// Estimated height of all rows; what the scrollbar reflects.
    pub total_height: f32,

    /// Height of the scrollable viewport.
    pub viewport_height: f32,

    /// Row height estimate used for the pass.
    pub row_height: f32,
}

/// State object for grid scroll tracking.
///
/// Holds the current scroll position and provides methods to
/// programmatically control scrolling. Cloning shares the underlying state.
#[derive(Clone)]
pub struct GridState {
    inner: Rc<RefCell<GridStateInner>>,
}

struct GridStateInner {
    scroll: ScrollPosition,

    /// Scroll delta to be consumed in the next measure pass.
    scroll_to_be_consumed: f32,

    /// Pending scroll-to-row request.
    pending_scroll_to_row: Option<usize>,

    layout_info: GridLayoutInfo,

    /// Invalidation callbacks, id-keyed so removal is targeted.
    /// Callbacks only flag re-render work; they must not mutate this state.
    invalidate_callbacks: Vec<(u64, Box<dyn Fn()>)>,
    next_callback_id: u64,
}

impl GridState {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(GridStateInner {
                scroll: ScrollPosition::new(),
                scroll_to_be_consumed: 0.0,
                pending_scroll_to_row: None,
                layout_info: GridLayoutInfo::default(),
                invalidate_callbacks: Vec::new(),
                next_callback_id: 1,
            })),
        }
    }

    /// Current scroll offset in pixels.
    pub fn scroll_top(&self) -> f32 {
        self.inner.borrow().scroll.value()
    }

    /// Layout info from the last measure pass.
    pub fn layout_info(&self) -> GridLayoutInfo {
        self.inner.borrow().layout_info.clone()
    }

    /// First rendered row index from the last measure pass.
    pub fn first_visible_row(&self) -> usize {
        self.inner.borrow().layout_info.first_visible_row
    }

    /// Queues a raw scroll delta for the next measure pass.
    pub fn dispatch_scroll_delta(&self, delta: f32) {
        self.inner.borrow_mut().scroll_to_be_consumed += delta;
        self.invalidate();
    }

    /// Queues a jump to the given row.
    pub fn scroll_to_row(&self, index: usize) {
        self.inner.borrow_mut().pending_scroll_to_row = Some(index);
        self.invalidate();
    }

    pub fn can_scroll_backward(&self) -> bool {
        self.scroll_top() > 0.0
    }

    pub fn can_scroll_forward(&self) -> bool {
        let inner = self.inner.borrow();
        let info = &inner.layout_info;
        inner.scroll.value() + info.viewport_height < info.total_height
    }

    /// Adds an invalidation callback, returning its removal id.
    pub fn add_invalidate_callback(&self, callback: Box<dyn Fn()>) -> u64 {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_callback_id;
        inner.next_callback_id += 1;
        inner.invalidate_callbacks.push((id, callback));
        id
    }

    /// Removes a previously added invalidation callback.
    pub fn remove_invalidate_callback(&self, id: u64) {
        let mut inner = self.inner.borrow_mut();
        inner.invalidate_callbacks.retain(|(cb_id, _)| *cb_id != id);
    }

    /// Consumes and returns the pending scroll delta.
    pub(crate) fn consume_scroll_delta(&self) -> f32 {
        let mut inner = self.inner.borrow_mut();
        let delta = inner.scroll_to_be_consumed;
        inner.scroll_to_be_consumed = 0.0;
        delta
    }

    /// Consumes and returns the pending scroll-to-row request.
    pub(crate) fn consume_scroll_to_row(&self) -> Option<usize> {
        self.inner.borrow_mut().pending_scroll_to_row.take()
    }

    /// Runs `update` against the scroll position during measurement.
    pub(crate) fn scroll_position_mut<R>(&self, update: impl FnOnce(&mut ScrollPosition) -> R) -> R {
        update(&mut self.inner.borrow_mut().scroll)
    }

    /// Updates the layout info after a measure pass.
    pub(crate) fn update_layout_info(&self, info: GridLayoutInfo) {
        self.inner.borrow_mut().layout_info = info;
    }

    fn invalidate(&self) {
        let inner = self.inner.borrow();
        for (_, callback) in &inner.invalidate_callbacks {
            callback();
        }
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GridState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("GridState")
            .field("scroll_top", &inner.scroll.value())
            .field("layout_info", &inner.layout_info)
            .finish_non_exhaustive()
    }
}
