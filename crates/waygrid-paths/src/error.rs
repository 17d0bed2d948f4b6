use thiserror::Error;
use waygrid_core::{Point, Range};

/// Errors raised when a search or sampling request is malformed.
///
/// An unreachable goal is not an error: it is reported through
/// [`SearchResult::found`](crate::SearchResult::found).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("{point} is outside the grid bounds {bounds}")]
    OutOfBounds { point: Point, bounds: Range },

    #[error("start cell {0} is blocked")]
    StartBlocked(Point),

    #[error("goal cell {0} is blocked")]
    GoalBlocked(Point),

    /// A cost-field cell holds NaN or a negative value.
    #[error("cell {point} has invalid traversal cost {value}")]
    InvalidCost { point: Point, value: f64 },

    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),

    #[error("sampling step must be at least 1")]
    ZeroStep,
}

pub type Result<T> = std::result::Result<T, PathError>;
