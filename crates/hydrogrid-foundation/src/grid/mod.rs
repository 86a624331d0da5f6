//! Row-windowed grid virtualization.
//!
//! Items are partitioned into fixed-column rows, and only the rows within
//! (or near) the visible scroll window are materialized:
//! - [`resolve_columns`] - viewport-width → column count policy
//! - [`rows`] / [`RowSlice`] - partitioning into borrowed row views
//! - [`GridState`] - scroll position and layout info holder
//! - [`measure_grid`] - the visible-range computation
//!
//! # Example
//!
//! ```rust,ignore
//! let state = GridState::new();
//! let columns = resolve_columns(viewport.width);
//! let result = measure_grid(
//!     row_count(items.len(), columns),
//!     &state,
//!     viewport.height,
//!     &GridMeasureConfig::default(),
//! );
//! for row in &result.visible_rows {
//!     let slice = row_items(&items, columns, row.index);
//!     // place `slice` at `row.offset`
//! }
//! ```

mod columns;
mod item_provider;
mod measure;
mod rows;
mod state;

pub use columns::*;
pub use item_provider::*;
pub use measure::*;
pub use rows::*;
pub use state::*;
