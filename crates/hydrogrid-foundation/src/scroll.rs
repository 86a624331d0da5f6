//! Scroll position tracking.
//!
//! Manages the scroll offset of a fixed-height viewport over virtualized
//! content, clamping every movement into `[0, max]`.

/// Scroll offset with content bounds.
///
/// Starts unbounded; the first measure pass supplies real bounds via
/// [`ScrollPosition::set_bounds`], which also re-clamps the current value
/// when content shrinks.
#[derive(Clone, Debug)]
pub struct ScrollPosition {
    value: f32,
    max_value: f32,
    viewport_size: f32,
}

impl ScrollPosition {
    pub fn new() -> Self {
        Self {
            value: 0.0,
            max_value: f32::MAX,
            viewport_size: 0.0,
        }
    }

    /// Current offset in pixels from the top of the content.
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    pub fn viewport_size(&self) -> f32 {
        self.viewport_size
    }

    /// Updates bounds from measured content; `max = content - viewport`,
    /// floored at zero.
    pub fn set_bounds(&mut self, content_size: f32, viewport_size: f32) {
        self.viewport_size = viewport_size;
        self.max_value = (content_size - viewport_size).max(0.0);
        if self.value > self.max_value {
            self.value = self.max_value;
        }
    }

    /// Clamped jump to an absolute offset.
    pub fn scroll_to(&mut self, target: f32) {
        self.value = target.clamp(0.0, self.max_value);
    }

    /// Applies a scroll delta and returns the amount actually consumed
    /// after clamping.
    pub fn consume_delta(&mut self, delta: f32) -> f32 {
        let target = (self.value + delta).clamp(0.0, self.max_value);
        let consumed = target - self.value;
        self.value = target;
        consumed
    }
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounded() -> ScrollPosition {
        let mut pos = ScrollPosition::new();
        pos.set_bounds(1000.0, 400.0);
        pos
    }

    #[test]
    fn bounds_derive_max_from_content_and_viewport() {
        let pos = bounded();
        assert_eq!(pos.max_value(), 600.0);
        assert_eq!(pos.viewport_size(), 400.0);
    }

    #[test]
    fn short_content_cannot_scroll() {
        let mut pos = ScrollPosition::new();
        pos.set_bounds(300.0, 400.0);
        assert_eq!(pos.max_value(), 0.0);
        assert_eq!(pos.consume_delta(50.0), 0.0);
    }

    #[test]
    fn consume_delta_reports_clamped_amount() {
        let mut pos = bounded();
        assert_eq!(pos.consume_delta(250.0), 250.0);
        assert_eq!(pos.consume_delta(1000.0), 350.0);
        assert_eq!(pos.value(), 600.0);
        assert_eq!(pos.consume_delta(-900.0), -600.0);
        assert_eq!(pos.value(), 0.0);
    }

    #[test]
    fn shrinking_content_reclamps_the_offset() {
        let mut pos = bounded();
        pos.scroll_to(600.0);
        pos.set_bounds(500.0, 400.0);
        assert_eq!(pos.value(), 100.0);
    }
}
