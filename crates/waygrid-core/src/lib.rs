//! **waygrid-core** — grid and geometry types for waygrid path planning.
//!
//! This crate provides the foundational types shared across the *waygrid*
//! workspace: integer geometry primitives, the dense [`Grid`] container used
//! for both occupancy ([`BoolGrid`]) and cost-field ([`CostGrid`]) maps, and
//! the [`GridError`] raised when a grid would violate its shape invariants.

pub mod error;
pub mod geom;
pub mod grid;

pub use error::GridError;
pub use geom::{Point, Range, RangeIter};
pub use grid::{BoolGrid, CostGrid, Grid};
