use thiserror::Error;

use crate::geom::Point;

/// Errors raised while building a [`Grid`](crate::Grid).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// The grid has no rows or no columns.
    #[error("grid must have at least one row and one column")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A map character that is neither free nor blocked.
    #[error("unknown map tile {ch:?} at {pos}")]
    UnknownTile { ch: char, pos: Point },
}
