//! Tolerances and fixed constants for the sphere geometry core.
//!
//! Policy
//! - Defaults are fixed constants; the pipeline carries one `SphereCfg` and
//!   passes it down so call sites never invent their own epsilons.
//! - Every threshold is absolute (unit sphere, so lengths and angles are O(1)).

/// Number of parameter steps per great-circle arc (arcs carry `N + 1` samples).
pub const ARC_SEGMENTS: usize = 30;

/// Central angle below which two endpoints are treated as coincident, and the
/// gap `π − θ` below which they are treated as antipodal.
pub(crate) const ARC_EPS: f64 = 1e-9;
/// Tangent-plane vector length below which a vertex angle collapses to 0°.
pub(crate) const TANGENT_EPS: f64 = 1e-12;
/// Chord length below which a planar vertex angle collapses to 0°.
pub(crate) const SIDE_EPS: f64 = 1e-12;
/// Accepted deviation of `|p|` from 1 before a picked point is renormalized.
pub(crate) const UNIT_EPS: f64 = 1e-9;

/// Geometry configuration (tolerances and sampling density).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereCfg {
    pub eps_arc: f64,
    pub eps_tangent: f64,
    pub eps_side: f64,
    pub arc_segments: usize,
}

impl Default for SphereCfg {
    fn default() -> Self {
        Self {
            eps_arc: ARC_EPS,
            eps_tangent: TANGENT_EPS,
            eps_side: SIDE_EPS,
            arc_segments: ARC_SEGMENTS,
        }
    }
}

/// Orthographic comparison plane: `(x, y, z) ↦ (scale·x, scale·y, depth)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectionCfg {
    pub scale: f64,
    pub depth: f64,
}

impl Default for ProjectionCfg {
    fn default() -> Self {
        Self {
            scale: 1.0,
            depth: 0.0,
        }
    }
}
