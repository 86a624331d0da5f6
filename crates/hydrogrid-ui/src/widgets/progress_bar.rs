//! Scroll progress indicator.

use hydrogrid_foundation::grid::GridState;

/// Fraction of the scrollable range consumed, in `[0, 1]`.
///
/// Content shorter than the viewport reports 1.0 (nothing left to scroll);
/// empty content reports 0.0.
pub fn scroll_fraction(scroll_top: f32, total_height: f32, viewport_height: f32) -> f32 {
    if total_height <= 0.0 {
        return 0.0;
    }
    let range = total_height - viewport_height;
    if range <= 0.0 {
        return 1.0;
    }
    (scroll_top / range).clamp(0.0, 1.0)
}

/// Progress bar bound to a grid's scroll state.
#[derive(Clone)]
pub struct ScrollProgressBar {
    state: GridState,
}

impl ScrollProgressBar {
    pub fn new(state: GridState) -> Self {
        Self { state }
    }

    /// Current fill fraction, from the last measured layout.
    pub fn fraction(&self) -> f32 {
        let info = self.state.layout_info();
        scroll_fraction(self.state.scroll_top(), info.total_height, info.viewport_height)
    }
}
