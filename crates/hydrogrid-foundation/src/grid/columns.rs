//! Responsive column policy.

/// Viewports narrower than this get a single column.
pub const TWO_COLUMN_MIN_WIDTH: f32 = 768.0;

/// Viewports at least this wide get the full three columns.
pub const THREE_COLUMN_MIN_WIDTH: f32 = 1024.0;

/// Resolves the column count for a viewport width in device-independent
/// pixels. Recomputed on every resize notification; there is no debounce,
/// so the value always reflects the latest width.
pub fn resolve_columns(viewport_width: f32) -> usize {
    if viewport_width >= THREE_COLUMN_MIN_WIDTH {
        3
    } else if viewport_width >= TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    }
}
