//! Visible-range computation for windowed grids.
//!
//! This is the core virtualization algorithm: given the row partition size,
//! the scroll state and the viewport height, decide which rows to
//! materialize and where each sits, while reserving the full estimated
//! content height so the scrollbar reflects true content length.

use smallvec::SmallVec;

use super::state::{GridLayoutInfo, GridState};

/// Fixed per-row height estimate.
///
/// Cards have a pinned height (badge, title, clamped description, footer),
/// so rows are never re-measured after first layout.
pub const ROW_HEIGHT_ESTIMATE: f32 = 380.0;

/// Rows rendered beyond the visible window on each side to reduce flicker
/// during fast scrolling.
pub const OVERSCAN_ROWS: usize = 2;

/// Configuration for a grid measure pass.
#[derive(Clone, Debug)]
pub struct GridMeasureConfig {
    /// Estimated height of every row.
    pub row_height: f32,

    /// Extra rows rendered above and below the visible window.
    pub overscan_rows: usize,
}

impl Default for GridMeasureConfig {
    fn default() -> Self {
        Self {
            row_height: ROW_HEIGHT_ESTIMATE,
            overscan_rows: OVERSCAN_ROWS,
        }
    }
}

/// A row selected for rendering, with its precomputed vertical offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasuredRow {
    pub index: usize,
    pub offset: f32,
}

/// Result of a grid measure pass.
#[derive(Clone, Debug, Default)]
pub struct GridMeasureResult {
    /// Rows to render, in index order; overscan included.
    pub visible_rows: SmallVec<[MeasuredRow; 8]>,

    /// First index of `visible_rows` (0 when nothing is rendered).
    pub first_visible_row: usize,

    /// Last index of `visible_rows` (0 when nothing is rendered).
    pub last_visible_row: usize,

    /// Estimated height of the full content; the spacer height.
    pub total_height: f32,

    /// Viewport height the pass measured against.
    pub viewport_height: f32,

    pub can_scroll_forward: bool,
    pub can_scroll_backward: bool,
}

// Anything beyond this is treated as an unconstrained host, not a viewport.
const MAX_REASONABLE_VIEWPORT: f32 = 100_000.0;

/// Computes the rows to render for the current scroll position.
///
/// 1. Consume any pending scroll-to-row request, else the queued scroll
///    delta, clamping the offset into `[0, total - viewport]`.
/// 2. `first = max(0, floor(scroll_top / row_height) - overscan)`.
/// 3. `last = min(row_count - 1, ceil((scroll_top + viewport) / row_height) + overscan)`.
/// 4. Each selected row is offset by `index * row_height` inside a spacer of
///    height `row_count * row_height`.
///
/// Zero rows or a non-positive viewport measures to the empty result; no
/// error paths exist.
pub fn measure_grid(
    row_count: usize,
    state: &GridState,
    viewport_height: f32,
    config: &GridMeasureConfig,
) -> GridMeasureResult {
    if row_count == 0 || viewport_height <= 0.0 {
        state.update_layout_info(GridLayoutInfo::default());
        return GridMeasureResult::default();
    }

    if !viewport_height.is_finite() || viewport_height > MAX_REASONABLE_VIEWPORT {
        log::warn!(
            "grid: unbounded viewport ({viewport_height}); wrap the grid in a \
             constrained container"
        );
        state.update_layout_info(GridLayoutInfo::default());
        return GridMeasureResult::default();
    }

    let row_height = config.row_height.max(1.0);
    let overscan = config.overscan_rows;
    let total_height = row_count as f32 * row_height;

    // A jump request wins over accumulated wheel deltas, which it discards.
    let delta = state.consume_scroll_delta();
    let jump = state.consume_scroll_to_row();
    state.scroll_position_mut(|pos| {
        pos.set_bounds(total_height, viewport_height);
        match jump {
            Some(target) => pos.scroll_to(target.min(row_count - 1) as f32 * row_height),
            None => {
                pos.consume_delta(delta);
            }
        }
    });

    let scroll_top = state.scroll_top();

    let first_visible = ((scroll_top / row_height).floor() as usize).saturating_sub(overscan);
    let last_visible = (((scroll_top + viewport_height) / row_height).ceil() as usize + overscan)
        .min(row_count - 1);

    let mut visible_rows: SmallVec<[MeasuredRow; 8]> = SmallVec::new();
    for index in first_visible..=last_visible {
        visible_rows.push(MeasuredRow {
            index,
            offset: index as f32 * row_height,
        });
    }

    state.update_layout_info(GridLayoutInfo {
        first_visible_row: first_visible,
        last_visible_row: last_visible,
        row_count,
        total_height,
        viewport_height,
        row_height,
    });

    GridMeasureResult {
        visible_rows,
        first_visible_row: first_visible,
        last_visible_row: last_visible,
        total_height,
        viewport_height,
        can_scroll_forward: scroll_top + viewport_height < total_height,
        can_scroll_backward: scroll_top > 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_partition_measures_to_nothing() {
        let state = GridState::new();
        let result = measure_grid(0, &state, 720.0, &GridMeasureConfig::default());

        assert!(result.visible_rows.is_empty());
        assert_eq!(result.total_height, 0.0);
        assert!(!result.can_scroll_forward);
        assert!(!result.can_scroll_backward);
    }

    #[test]
    fn non_positive_viewport_measures_to_nothing() {
        let state = GridState::new();
        let result = measure_grid(10, &state, 0.0, &GridMeasureConfig::default());
        assert!(result.visible_rows.is_empty());
    }

    #[test]
    fn infinite_viewport_is_refused() {
        let state = GridState::new();
        let result = measure_grid(10, &state, f32::INFINITY, &GridMeasureConfig::default());
        assert!(result.visible_rows.is_empty());
    }

    #[test]
    fn total_height_is_row_count_times_estimate() {
        let state = GridState::new();
        let result = measure_grid(50, &state, 720.0, &GridMeasureConfig::default());

        assert_eq!(result.total_height, 50.0 * ROW_HEIGHT_ESTIMATE);
        // Only a window of the 50 rows is actually rendered.
        assert!(result.visible_rows.len() < 50);
    }

    #[test]
    fn window_at_rest_starts_at_row_zero() {
        let state = GridState::new();
        let result = measure_grid(50, &state, 720.0, &GridMeasureConfig::default());

        assert_eq!(result.first_visible_row, 0);
        // ceil(720 / 380) = 2, plus 2 overscan.
        assert_eq!(result.last_visible_row, 4);
        assert_eq!(result.visible_rows.len(), 5);
        assert!(result.can_scroll_forward);
        assert!(!result.can_scroll_backward);
    }

    #[test]
    fn window_tracks_scroll_position() {
        let state = GridState::new();
        let config = GridMeasureConfig::default();

        state.dispatch_scroll_delta(10.0 * ROW_HEIGHT_ESTIMATE);
        let result = measure_grid(50, &state, 720.0, &config);

        // floor(3800 / 380) = 10, minus 2 overscan.
        assert_eq!(result.first_visible_row, 8);
        // ceil((3800 + 720) / 380) = 12, plus 2 overscan.
        assert_eq!(result.last_visible_row, 14);
        assert!(result.can_scroll_backward);
        assert!(result.can_scroll_forward);
    }

    #[test]
    fn offsets_are_index_times_row_height() {
        let state = GridState::new();
        let result = measure_grid(50, &state, 720.0, &GridMeasureConfig::default());

        for row in &result.visible_rows {
            assert_eq!(row.offset, row.index as f32 * ROW_HEIGHT_ESTIMATE);
        }
    }

    #[test]
    fn window_clamps_at_the_end() {
        let state = GridState::new();
        let config = GridMeasureConfig::default();

        state.dispatch_scroll_delta(f32::MAX);
        let result = measure_grid(10, &state, 720.0, &config);

        assert_eq!(result.last_visible_row, 9);
        assert!(!result.can_scroll_forward);
        assert!(result.can_scroll_backward);
        // Offset landed on max scroll: total - viewport.
        assert_eq!(state.scroll_top(), 10.0 * ROW_HEIGHT_ESTIMATE - 720.0);
    }

    #[test]
    fn scroll_to_row_wins_over_deltas() {
        let state = GridState::new();
        let config = GridMeasureConfig::default();

        state.dispatch_scroll_delta(500.0);
        state.scroll_to_row(20);
        let result = measure_grid(50, &state, 720.0, &config);

        assert_eq!(state.scroll_top(), 20.0 * ROW_HEIGHT_ESTIMATE);
        assert_eq!(result.first_visible_row, 18);
    }

    #[test]
    fn in_view_row_count_is_ceil_of_viewport_over_row_height() {
        let state = GridState::new();
        let config = GridMeasureConfig::default();
        let viewport = 700.0;

        state.dispatch_scroll_delta(10.0 * ROW_HEIGHT_ESTIMATE);
        let result = measure_grid(100, &state, viewport, &config);

        // Rows whose extent intersects [scroll_top, scroll_top + viewport);
        // the rest of the rendered set is overscan.
        let top = state.scroll_top();
        let in_view = result
            .visible_rows
            .iter()
            .filter(|row| row.offset < top + viewport && row.offset + ROW_HEIGHT_ESTIMATE > top)
            .count();
        assert_eq!(in_view, (viewport / ROW_HEIGHT_ESTIMATE).ceil() as usize);
    }

    #[test]
    fn custom_config_is_honored() {
        let state = GridState::new();
        let config = GridMeasureConfig {
            row_height: 100.0,
            overscan_rows: 1,
        };

        let result = measure_grid(30, &state, 250.0, &config);

        assert_eq!(result.total_height, 3000.0);
        assert_eq!(result.first_visible_row, 0);
        // ceil(250 / 100) = 3, plus 1 overscan.
        assert_eq!(result.last_visible_row, 4);
    }
}
