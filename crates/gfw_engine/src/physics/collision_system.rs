//! Combined collision test and strategy selection
//!
//! This module implements the public entry points that take two point sets
//! and answer whether they intersect. It validates both shapes once, then
//! dispatches to the selected algorithm and runs it in both directions.
//!
//! For SAT the two directional results are combined with AND: the shapes
//! collide only if neither shape's edge normals contain a separating axis.
//! An earlier revision of this framework used OR here, which reports a hit
//! whenever *one* direction fails to find a separation and is wrong for
//! convex polygons.

use crate::core::config::CollisionConfig;
use crate::physics::collision::point_set::PointSet;
use crate::physics::collision::{ray_crossing, sat};
use crate::physics::error::CollisionError;
use serde::{Deserialize, Serialize};

/// Algorithm used to test two point sets for intersection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionStrategy {
    /// Separating Axis Theorem on both shapes' edge normals (convex shapes)
    #[default]
    SeparatingAxis,
    /// Legacy centroid-to-vertex ray crossing, see [`ray_crossing`]
    RayCrossing,
}

/// Tests whether two point sets intersect using SAT in both directions
///
/// Touching shapes count as colliding.
///
/// # Errors
/// Returns [`CollisionError`] when either set has fewer than three vertices
/// or all of its vertices coincide.
pub fn detect_collision(a: &PointSet, b: &PointSet) -> Result<bool, CollisionError> {
    detect_collision_with(CollisionStrategy::SeparatingAxis, a, b)
}

/// Tests whether two point sets intersect using the given strategy
///
/// # Errors
/// Same preconditions as [`detect_collision`].
pub fn detect_collision_with(
    strategy: CollisionStrategy,
    a: &PointSet,
    b: &PointSet,
) -> Result<bool, CollisionError> {
    a.validate()?;
    b.validate()?;

    let hit = match strategy {
        CollisionStrategy::SeparatingAxis => {
            let (fa, fb) = (sat::to_float(a), sat::to_float(b));
            sat::sat_pass(&fa, &fb) && sat::sat_pass(&fb, &fa)
        }
        // A crossing found from either side is a crossing
        CollisionStrategy::RayCrossing => {
            ray_crossing::ray_crossing_pass(a, b) || ray_crossing::ray_crossing_pass(b, a)
        }
    };
    log::trace!("{strategy:?}: collision = {hit}");
    Ok(hit)
}

/// Configured collision tester
///
/// Holds a [`CollisionConfig`] so callers pick the strategy (and, with the
/// `parallel` feature, whether the two SAT directions run concurrently)
/// once instead of at every call site.
#[derive(Debug, Clone, Default)]
pub struct CollisionDetector {
    config: CollisionConfig,
}

impl CollisionDetector {
    /// Create a detector from configuration
    pub fn new(config: CollisionConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &CollisionConfig {
        &self.config
    }

    /// Tests two point sets with the configured strategy
    ///
    /// # Errors
    /// Same preconditions as [`detect_collision`].
    pub fn detect(&self, a: &PointSet, b: &PointSet) -> Result<bool, CollisionError> {
        if self.config.parallel && self.config.strategy == CollisionStrategy::SeparatingAxis {
            return self.detect_parallel(a, b);
        }
        detect_collision_with(self.config.strategy, a, b)
    }

    #[cfg(feature = "parallel")]
    fn detect_parallel(&self, a: &PointSet, b: &PointSet) -> Result<bool, CollisionError> {
        a.validate()?;
        b.validate()?;
        let (fa, fb) = (sat::to_float(a), sat::to_float(b));
        let (forward, backward) =
            rayon::join(|| sat::sat_pass(&fa, &fb), || sat::sat_pass(&fb, &fa));
        Ok(forward && backward)
    }

    #[cfg(not(feature = "parallel"))]
    fn detect_parallel(&self, a: &PointSet, b: &PointSet) -> Result<bool, CollisionError> {
        log::trace!("parallel collision requested without the `parallel` feature");
        detect_collision_with(self.config.strategy, a, b)
    }
}
