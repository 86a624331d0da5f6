//! Windowing foundation for Hydrogrid.
//!
//! Everything needed to render a large card collection inside a fixed-height
//! scrollable viewport while keeping render cost proportional to the visible
//! window: row partitioning, responsive column resolution, scroll position
//! tracking, visible-range measurement, viewport resize lifecycle, and query
//! highlighting. This crate performs no I/O and raises no errors; an empty
//! item sequence is a valid state that measures to nothing.

pub mod grid;
pub mod highlight;
pub mod scroll;
pub mod viewport;
