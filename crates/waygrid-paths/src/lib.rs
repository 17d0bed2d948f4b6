//! A* path planning on 2D occupancy grids.
//!
//! This crate finds short paths between two cells of a grid and thins them
//! into waypoints for a motion controller:
//!
//! - **A\*** search with 8-connected moves ([`GridSearch`]) over either a
//!   binary obstacle grid ([`GridSearch::obstacles`]) or a continuous cost
//!   field ([`GridSearch::field`])
//! - **Waypoint sampling** at a fixed stride ([`sample_path`], [`PathSampler`])
//!
//! Every search is self-contained: working storage is allocated per call and
//! dropped on return, so one [`GridSearch`] can serve many threads.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Passable`] | bounds and obstacle test |
//! | [`Weighted`] : [`Passable`] | step cost |
//! | [`SearchModel`] : [`Weighted`] | weighted heuristic |
//!
//! [`ObstacleModel`] and [`FieldModel`] implement the full hierarchy; custom
//! models can be searched with [`GridSearch::run`].

mod astar;
mod config;
mod distance;
mod error;
mod frontier;
mod models;
mod neighbors;
mod sample;
mod traits;

pub use astar::{GridSearch, SearchResult};
pub use config::{
    HEURISTIC_COEFFICIENT, OBSTACLE_EPSILON, OBSTACLE_OFFSET, Relaxation, SearchConfig,
};
pub use distance::{chebyshev, euclidean, manhattan};
pub use error::{PathError, Result};
pub use models::{FieldModel, ObstacleModel};
pub use neighbors::OFFSETS_8;
pub use sample::{DEFAULT_SAMPLE_STEP, PathSampler, sample_path};
pub use traits::{Passable, SearchModel, Weighted};
