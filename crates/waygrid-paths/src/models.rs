//! The two cost models: binary obstacles and continuous cost fields.

use waygrid_core::{BoolGrid, CostGrid, Point, Range};

use crate::config::SearchConfig;
use crate::distance::{euclidean, manhattan};
use crate::error::{PathError, Result};
use crate::traits::{Passable, SearchModel, Weighted};

// ---------------------------------------------------------------------------
// ObstacleModel
// ---------------------------------------------------------------------------

/// Binary occupancy: blocked cells are impassable, every step costs its
/// Euclidean length plus a turning penalty.
///
/// The penalty is the L1 norm of `parent + to - 2·from`, which is zero when
/// the move continues in the direction `from` was entered and grows with the
/// sharpness of the turn. It biases the search towards straight runs.
#[derive(Clone, Copy, Debug)]
pub struct ObstacleModel<'a> {
    grid: &'a BoolGrid,
}

impl<'a> ObstacleModel<'a> {
    pub fn new(grid: &'a BoolGrid) -> Self {
        Self { grid }
    }
}

impl Passable for ObstacleModel<'_> {
    fn bounds(&self) -> Range {
        self.grid.bounds()
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.grid.at(p) == Some(false)
    }
}

impl Weighted for ObstacleModel<'_> {
    #[inline]
    fn step_cost(&self, parent: Point, from: Point, to: Point) -> f64 {
        let turn = parent + to - from * 2;
        euclidean(from, to) + f64::from(manhattan(turn, Point::ZERO))
    }
}

impl SearchModel for ObstacleModel<'_> {
    #[inline]
    fn estimate(&self, from: Point, goal: Point) -> f64 {
        f64::from(manhattan(from, goal))
    }
}

// ---------------------------------------------------------------------------
// FieldModel
// ---------------------------------------------------------------------------

/// Continuous cost field: leaving a cell costs its field value plus the L1
/// length of the step, and cells at or above the obstacle threshold are
/// impassable.
///
/// The heuristic is the Euclidean distance scaled by
/// [`SearchConfig::heuristic_coefficient`]; with the default of `1e-3` the
/// search is close to a plain cost-ordered expansion.
#[derive(Clone, Copy, Debug)]
pub struct FieldModel<'a> {
    grid: &'a CostGrid,
    threshold: f64,
    heuristic_coefficient: f64,
}

impl<'a> FieldModel<'a> {
    /// Wrap `grid`, checking the configuration and that every cell holds a
    /// non-negative cost. `+∞` is accepted and treated as an obstacle.
    pub fn new(grid: &'a CostGrid, config: &SearchConfig) -> Result<Self> {
        config.validate()?;
        if let Some((point, value)) = grid.iter().find(|&(_, v)| v.is_nan() || v < 0.0) {
            return Err(PathError::InvalidCost { point, value });
        }
        Ok(Self {
            grid,
            threshold: config.obstacle_threshold(),
            heuristic_coefficient: config.heuristic_coefficient,
        })
    }
}

impl Passable for FieldModel<'_> {
    fn bounds(&self) -> Range {
        self.grid.bounds()
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.grid.at(p).is_some_and(|c| c < self.threshold)
    }
}

impl Weighted for FieldModel<'_> {
    #[inline]
    fn step_cost(&self, _parent: Point, from: Point, to: Point) -> f64 {
        // `from` has already been expanded, so it is always in bounds.
        let field = self.grid.at(from).unwrap_or(0.0);
        field + f64::from(manhattan(from, to))
    }
}

impl SearchModel for FieldModel<'_> {
    #[inline]
    fn estimate(&self, from: Point, goal: Point) -> f64 {
        self.heuristic_coefficient * euclidean(from, goal)
    }
}
