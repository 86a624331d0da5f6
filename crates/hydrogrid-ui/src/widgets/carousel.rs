//! Hero carousel with auto-advance.
//!
//! No threads and no timers: the host event loop feeds the current instant
//! and the state advances at most one slide per elapsed interval. Manual
//! navigation resets the clock so a click is never immediately followed by
//! an automatic advance.

use std::time::Duration;

use instant::Instant;

/// Behavior configuration for [`CarouselState`].
#[derive(Clone, Debug)]
pub struct CarouselSpec {
    /// Time between automatic advances.
    pub advance_interval: Duration,
    /// Whether navigation wraps around at the ends.
    pub wrap: bool,
}

impl Default for CarouselSpec {
    fn default() -> Self {
        Self {
            advance_interval: Duration::from_secs(5),
            wrap: true,
        }
    }
}

impl CarouselSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance_interval(mut self, interval: Duration) -> Self {
        self.advance_interval = interval;
        self
    }

    pub fn wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }
}

/// Slide position and auto-advance clock for one carousel.
#[derive(Clone, Debug)]
pub struct CarouselState {
    slide_count: usize,
    current: usize,
    last_advance: Instant,
    spec: CarouselSpec,
}

impl CarouselState {
    pub fn new(slide_count: usize, spec: CarouselSpec) -> Self {
        Self::with_clock(slide_count, spec, Instant::now())
    }

    /// Like [`CarouselState::new`] with an explicit clock origin.
    pub fn with_clock(slide_count: usize, spec: CarouselSpec, now: Instant) -> Self {
        Self {
            slide_count,
            current: 0,
            last_advance: now,
            spec,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Advances automatically when the interval has elapsed. Returns whether
    /// the slide changed; at most one step per call regardless of how late
    /// the tick arrives.
    pub fn maybe_advance(&mut self, now: Instant) -> bool {
        if self.slide_count < 2 {
            return false;
        }
        if now.duration_since(self.last_advance) < self.spec.advance_interval {
            return false;
        }
        if self.step_forward() {
            self.last_advance = now;
            true
        } else {
            false
        }
    }

    /// Manual next; resets the auto-advance clock.
    pub fn next(&mut self, now: Instant) {
        self.step_forward();
        self.last_advance = now;
    }

    /// Manual previous; resets the auto-advance clock.
    pub fn prev(&mut self, now: Instant) {
        self.step_backward();
        self.last_advance = now;
    }

    /// Jumps to a slide (clamped); resets the auto-advance clock.
    pub fn jump_to(&mut self, index: usize, now: Instant) {
        self.current = index.min(self.slide_count.saturating_sub(1));
        self.last_advance = now;
    }

    fn step_forward(&mut self) -> bool {
        if self.slide_count < 2 {
            return false;
        }
        if self.current + 1 < self.slide_count {
            self.current += 1;
            true
        } else if self.spec.wrap {
            self.current = 0;
            true
        } else {
            false
        }
    }

    fn step_backward(&mut self) -> bool {
        if self.slide_count < 2 {
            return false;
        }
        if self.current > 0 {
            self.current -= 1;
            true
        } else if self.spec.wrap {
            self.current = self.slide_count - 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval() -> Duration {
        Duration::from_secs(5)
    }

    #[test]
    fn advances_only_after_the_interval() {
        let start = Instant::now();
        let mut carousel = CarouselState::with_clock(3, CarouselSpec::default(), start);

        assert!(!carousel.maybe_advance(start + Duration::from_secs(4)));
        assert_eq!(carousel.current(), 0);

        assert!(carousel.maybe_advance(start + interval()));
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn one_step_per_tick_even_when_late() {
        let start = Instant::now();
        let mut carousel = CarouselState::with_clock(5, CarouselSpec::default(), start);

        assert!(carousel.maybe_advance(start + Duration::from_secs(60)));
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn wraps_around_at_the_end() {
        let start = Instant::now();
        let mut carousel = CarouselState::with_clock(3, CarouselSpec::default(), start);

        carousel.jump_to(2, start);
        carousel.next(start);
        assert_eq!(carousel.current(), 0);

        carousel.prev(start);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn without_wrap_auto_advance_stops_at_the_last_slide() {
        let start = Instant::now();
        let spec = CarouselSpec::new().wrap(false);
        let mut carousel = CarouselState::with_clock(2, spec, start);

        assert!(carousel.maybe_advance(start + interval()));
        assert_eq!(carousel.current(), 1);
        assert!(!carousel.maybe_advance(start + interval() + interval()));
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn manual_navigation_resets_the_clock() {
        let start = Instant::now();
        let mut carousel = CarouselState::with_clock(3, CarouselSpec::default(), start);

        let almost = start + Duration::from_secs(4);
        carousel.next(almost);
        assert_eq!(carousel.current(), 1);

        // The old deadline has passed, but the clock restarted at `almost`.
        assert!(!carousel.maybe_advance(start + interval()));
        assert!(carousel.maybe_advance(almost + interval()));
    }

    #[test]
    fn single_slide_never_advances() {
        let start = Instant::now();
        let mut carousel = CarouselState::with_clock(1, CarouselSpec::default(), start);
        assert!(!carousel.maybe_advance(start + Duration::from_secs(3600)));
        assert_eq!(carousel.current(), 0);
    }
}
