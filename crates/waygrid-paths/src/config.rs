//! Search tuning knobs.

use crate::error::{PathError, Result};

/// Cost-field value at which a cell becomes an obstacle.
pub const OBSTACLE_OFFSET: f64 = 100.0;

/// Tolerance below [`OBSTACLE_OFFSET`] that still counts as an obstacle.
pub const OBSTACLE_EPSILON: f64 = 0.01;

/// Weight of the Euclidean heuristic in cost-field searches.
pub const HEURISTIC_COEFFICIENT: f64 = 1e-3;

/// What happens when a cheaper route to an already discovered cell is found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Relaxation {
    /// Update the cell's cost and parent but keep its existing frontier
    /// entry, which stays ordered by the old priority.
    #[default]
    InPlace,
    /// Push a fresh frontier entry at the improved priority. Superseded
    /// entries are discarded when popped.
    Reinsert,
}

/// Parameters shared by both cost models.
///
/// Only the cost-field model reads the obstacle and heuristic settings; the
/// relaxation policy applies to every search.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub obstacle_offset: f64,
    pub obstacle_epsilon: f64,
    pub heuristic_coefficient: f64,
    pub relaxation: Relaxation,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            obstacle_offset: OBSTACLE_OFFSET,
            obstacle_epsilon: OBSTACLE_EPSILON,
            heuristic_coefficient: HEURISTIC_COEFFICIENT,
            relaxation: Relaxation::InPlace,
        }
    }
}

impl SearchConfig {
    /// Use the given relaxation policy.
    pub fn with_relaxation(mut self, relaxation: Relaxation) -> Self {
        self.relaxation = relaxation;
        self
    }

    /// Use a different cost-field obstacle offset.
    pub fn with_obstacle_offset(mut self, offset: f64) -> Self {
        self.obstacle_offset = offset;
        self
    }

    /// Use a different heuristic weight for cost-field searches.
    pub fn with_heuristic_coefficient(mut self, coefficient: f64) -> Self {
        self.heuristic_coefficient = coefficient;
        self
    }

    /// Field values at or above this are impassable.
    #[inline]
    pub fn obstacle_threshold(&self) -> f64 {
        self.obstacle_offset - self.obstacle_epsilon
    }

    /// Reject settings that would make the cost-field search meaningless.
    pub fn validate(&self) -> Result<()> {
        if !self.obstacle_offset.is_finite() || self.obstacle_offset <= 0.0 {
            return Err(PathError::InvalidConfig(format!(
                "obstacle_offset must be positive and finite, got {}",
                self.obstacle_offset
            )));
        }
        if !(0.0..self.obstacle_offset).contains(&self.obstacle_epsilon) {
            return Err(PathError::InvalidConfig(format!(
                "obstacle_epsilon must be in [0, {}), got {}",
                self.obstacle_offset, self.obstacle_epsilon
            )));
        }
        if !self.heuristic_coefficient.is_finite() || self.heuristic_coefficient < 0.0 {
            return Err(PathError::InvalidConfig(format!(
                "heuristic_coefficient must be non-negative and finite, got {}",
                self.heuristic_coefficient
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.obstacle_offset, 100.0);
        assert_eq!(cfg.obstacle_epsilon, 0.01);
        assert_eq!(cfg.heuristic_coefficient, 1e-3);
        assert_eq!(cfg.relaxation, Relaxation::InPlace);
        assert!((cfg.obstacle_threshold() - 99.99).abs() < 1e-12);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builders_override_fields() {
        let cfg = SearchConfig::default()
            .with_relaxation(Relaxation::Reinsert)
            .with_obstacle_offset(10.0)
            .with_heuristic_coefficient(0.5);
        assert_eq!(cfg.relaxation, Relaxation::Reinsert);
        assert_eq!(cfg.obstacle_offset, 10.0);
        assert_eq!(cfg.heuristic_coefficient, 0.5);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_nonsense() {
        let bad = [
            SearchConfig::default().with_obstacle_offset(0.0),
            SearchConfig::default().with_obstacle_offset(f64::NAN),
            SearchConfig::default().with_heuristic_coefficient(-1.0),
            SearchConfig {
                obstacle_epsilon: 200.0,
                ..Default::default()
            },
        ];
        for cfg in bad {
            assert!(
                matches!(cfg.validate(), Err(PathError::InvalidConfig(_))),
                "{cfg:?} should be rejected"
            );
        }
    }
}
