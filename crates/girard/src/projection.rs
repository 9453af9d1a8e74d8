//! Orthographic projection onto the comparison plane.
//!
//! Display aid only: `(x, y, z) ↦ (k·x, k·y, z₀)`. Angles are not preserved and
//! nothing in `angles` reads projected coordinates.

use nalgebra::Vector3;

use crate::cfg::ProjectionCfg;
use crate::types::Point;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlaneProjector {
    pub cfg: ProjectionCfg,
}

impl PlaneProjector {
    #[inline]
    pub fn new(cfg: ProjectionCfg) -> Self {
        Self { cfg }
    }
    #[inline]
    pub fn project(&self, v: Vector3<f64>) -> Vector3<f64> {
        Vector3::new(v.x * self.cfg.scale, v.y * self.cfg.scale, self.cfg.depth)
    }
    /// Project every vertex of a cycle, keeping its order.
    pub fn project_cycle(&self, cycle: &[Point]) -> Vec<Vector3<f64>> {
        cycle.iter().map(|p| self.project(p.pos())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn scales_xy_and_pins_depth() {
        let pr = PlaneProjector::new(ProjectionCfg {
            scale: 2.0,
            depth: -1.5,
        });
        let q = pr.project(vector![0.6, -0.8, 0.0]);
        assert_eq!(q, vector![1.2, -1.6, -1.5]);
        // depth is independent of the hemisphere
        assert_eq!(pr.project(vector![0.0, 0.0, 1.0]).z, -1.5);
        assert_eq!(pr.project(vector![0.0, 0.0, -1.0]).z, -1.5);
    }

    #[test]
    fn default_is_drop_z() {
        let q = PlaneProjector::default().project(vector![0.36, 0.48, 0.8]);
        assert_eq!(q, vector![0.36, 0.48, 0.0]);
    }
}
