//! Row partitioning.
//!
//! Rows are pure slices of the item sequence; nothing here owns or copies
//! items. The final row of a ragged sequence reports how many placeholder
//! cells it needs so the grid stays rectangular.

/// Number of rows needed for `item_count` items at `columns` per row.
pub fn row_count(item_count: usize, columns: usize) -> usize {
    debug_assert!(columns > 0, "column count must be at least 1");
    item_count.div_ceil(columns.max(1))
}

/// A borrowed view of one grid row.
#[derive(Clone, Copy, Debug)]
pub struct RowSlice<'a, T> {
    /// Row index within the partition.
    pub index: usize,

    /// Up to `columns` consecutive items from the source sequence.
    pub items: &'a [T],

    /// Empty cells appended after `items` so a short final row does not
    /// stretch; always 0 for full rows.
    pub trailing_placeholders: usize,
}

/// Partitions `items` into rows of `columns` consecutive items.
///
/// Every item appears in exactly one row, in original order. An empty
/// sequence yields no rows.
pub fn rows<T>(items: &[T], columns: usize) -> impl Iterator<Item = RowSlice<'_, T>> {
    let columns = columns.max(1);
    items
        .chunks(columns)
        .enumerate()
        .map(move |(index, chunk)| RowSlice {
            index,
            items: chunk,
            trailing_placeholders: columns - chunk.len(),
        })
}

/// The item slice for a single row index; empty when the index is past the
/// last row.
pub fn row_items<T>(items: &[T], columns: usize, row_index: usize) -> &[T] {
    let columns = columns.max(1);
    let start = row_index.saturating_mul(columns);
    if start >= items.len() {
        return &[];
    }
    let end = (start + columns).min(items.len());
    &items[start..end]
}
