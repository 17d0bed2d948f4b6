//! A* search over 8-connected grids.

use std::time::Instant;

use log::{debug, trace};
use waygrid_core::{BoolGrid, CostGrid, Point, Range};

use crate::config::{Relaxation, SearchConfig};
use crate::error::{PathError, Result};
use crate::frontier::{Frontier, Node};
use crate::models::{FieldModel, ObstacleModel};
use crate::neighbors::OFFSETS_8;
use crate::sample::sample_path;
use crate::traits::SearchModel;

/// Outcome of one search.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Whether the goal was reached.
    pub found: bool,
    /// Cells from start to goal inclusive; empty when `found` is false.
    pub path: Vec<Point>,
    /// Every expanded cell, in expansion order.
    pub visited: Vec<Point>,
    /// Best known cost of the goal when it was expanded.
    pub cost: Option<f64>,
}

impl SearchResult {
    /// Number of moves along the path.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Downsample the path into waypoints every `step` cells.
    pub fn waypoints(&self, step: usize) -> Result<Vec<Point>> {
        sample_path(&self.path, step)
    }
}

/// A* driver shared by every cost model.
///
/// Holds no state between calls; each search allocates its own cost,
/// parent and frontier storage sized to the grid.
#[derive(Clone, Debug, Default)]
pub struct GridSearch {
    config: SearchConfig,
}

impl GridSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search a binary occupancy grid (`true` = blocked).
    pub fn obstacles(&self, grid: &BoolGrid, start: Point, goal: Point) -> Result<SearchResult> {
        self.run(&ObstacleModel::new(grid), start, goal)
    }

    /// Search a cost-field grid.
    pub fn field(&self, grid: &CostGrid, start: Point, goal: Point) -> Result<SearchResult> {
        let model = FieldModel::new(grid, &self.config)?;
        self.run(&model, start, goal)
    }

    /// Search with an arbitrary cost model.
    ///
    /// Fails fast if `start` or `goal` is out of bounds or impassable. An
    /// unreachable goal is reported with `found == false`.
    pub fn run<M: SearchModel>(&self, model: &M, start: Point, goal: Point) -> Result<SearchResult> {
        let bounds = model.bounds();
        for point in [start, goal] {
            if !bounds.contains(point) {
                return Err(PathError::OutOfBounds { point, bounds });
            }
        }
        if !model.passable(start) {
            return Err(PathError::StartBlocked(start));
        }
        if !model.passable(goal) {
            return Err(PathError::GoalBlocked(goal));
        }

        debug!("[AStar] search started: {start} -> {goal}");
        let started = Instant::now();

        let result = self.expand(model, Layout::new(bounds), start, goal);

        let elapsed = started.elapsed();
        debug!(
            "[AStar] search {}, time elapsed: {}.{:03}ms",
            if result.found { "succeeded" } else { "failed" },
            elapsed.as_millis(),
            elapsed.as_micros() % 1000
        );
        Ok(result)
    }

    fn expand<M: SearchModel>(
        &self,
        model: &M,
        layout: Layout,
        start: Point,
        goal: Point,
    ) -> SearchResult {
        let reinsert = self.config.relaxation == Relaxation::Reinsert;
        let start_idx = layout.idx(start);
        let goal_idx = layout.idx(goal);

        let mut nodes = vec![Node::default(); layout.len];
        let mut open = Frontier::default();
        let mut visited = Vec::new();

        nodes[start_idx].g = 0.0;
        nodes[start_idx].parent = start_idx;
        open.push(model.estimate(start, goal), start_idx, 0.0);

        let found = 'search: loop {
            let Some(entry) = open.pop() else {
                break 'search false;
            };
            let ci = entry.idx;

            // Skip entries superseded by a reinsertion.
            if nodes[ci].closed || (reinsert && entry.g > nodes[ci].g) {
                continue;
            }
            nodes[ci].closed = true;

            let current = layout.point(ci);
            visited.push(current);
            if ci == goal_idx {
                break 'search true;
            }

            let current_g = nodes[ci].g;
            let parent = layout.point(nodes[ci].parent);

            for offset in OFFSETS_8 {
                let next = current + offset;
                let Some(ni) = layout.checked_idx(next) else {
                    continue;
                };
                if !model.passable(next) {
                    continue;
                }
                let tentative = current_g + model.step_cost(parent, current, next);

                let n = &mut nodes[ni];
                if n.reached() {
                    if tentative >= n.g {
                        continue;
                    }
                    n.g = tentative;
                    n.parent = ci;
                    if reinsert && !n.closed {
                        open.push(tentative + model.estimate(next, goal), ni, tentative);
                    }
                } else {
                    n.g = tentative;
                    n.parent = ci;
                    open.push(tentative + model.estimate(next, goal), ni, tentative);
                }
            }
        };

        trace!(
            "[AStar] expanded {} cells, {} frontier pushes",
            visited.len(),
            open.pushed()
        );

        if !found {
            return SearchResult {
                found,
                path: Vec::new(),
                visited,
                cost: None,
            };
        }

        // Reconstruct path.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != start_idx {
            path.push(layout.point(ci));
            ci = nodes[ci].parent;
        }
        path.push(start);
        path.reverse();

        SearchResult {
            found,
            path,
            visited,
            cost: Some(nodes[goal_idx].g),
        }
    }
}

/// Flat row-major indexing over a search rectangle.
#[derive(Clone, Copy, Debug)]
struct Layout {
    rng: Range,
    width: usize,
    len: usize,
}

impl Layout {
    fn new(rng: Range) -> Self {
        Self {
            rng,
            width: rng.width().max(0) as usize,
            len: rng.len(),
        }
    }

    #[inline]
    fn checked_idx(&self, p: Point) -> Option<usize> {
        if self.rng.contains(p) {
            Some(self.idx(p))
        } else {
            None
        }
    }

    /// `p` must be inside the rectangle.
    #[inline]
    fn idx(&self, p: Point) -> usize {
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        y * self.width + x
    }

    #[inline]
    fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}
