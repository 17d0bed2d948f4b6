use waygrid_core::{Point, Range};

/// Minimal search interface — which cells exist and which may be entered.
pub trait Passable {
    /// The rectangle of cells the search may touch.
    fn bounds(&self) -> Range;

    /// Whether the in-bounds cell `p` can be entered.
    fn passable(&self, p: Point) -> bool;
}

/// Passable map with positive step costs.
pub trait Weighted: Passable {
    /// Cost of moving from `from` to the adjacent cell `to`. `parent` is the
    /// cell `from` was reached through; the start cell is its own parent.
    /// Must be > 0.
    fn step_cost(&self, parent: Point, from: Point, to: Point) -> f64;
}

/// Full A* cost model.
pub trait SearchModel: Weighted {
    /// Heuristic term added to the cost-so-far of `from` to form its
    /// frontier priority. Any weighting is already applied.
    fn estimate(&self, from: Point, goal: Point) -> f64;
}
