//! Snapshot data: placed points, sampled arcs, angle records and totals.
//!
//! Everything here is a value type. The pipeline owns one `GeometrySnapshot`
//! and rebuilds it wholesale on every mutation; consumers only ever borrow it.

use nalgebra::Vector3;

use crate::cfg::UNIT_EPS;

/// Stable identifier of a placed point. Never reused within a pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(pub u64);

/// A point on the unit sphere.
///
/// Invariants:
/// - `|pos| = 1` within `UNIT_EPS` (inputs are renormalized on construction).
/// - `id` and `index` are fixed once assigned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    id: PointId,
    index: usize,
    pos: Vector3<f64>,
}

impl Point {
    /// Place `v` on the sphere. Returns `None` for zero or non-finite input;
    /// vectors slightly off unit length are pulled back onto the sphere.
    pub fn from_vector(id: PointId, index: usize, v: Vector3<f64>) -> Option<Self> {
        let norm = v.norm();
        if !norm.is_finite() || norm <= 0.0 {
            return None;
        }
        let pos = if (norm - 1.0).abs() > UNIT_EPS {
            v / norm
        } else {
            v
        };
        Some(Self { id, index, pos })
    }
    #[inline]
    pub fn id(&self) -> PointId {
        self.id
    }
    /// Position in insertion order (0-based, reset by `clear`).
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }
    #[inline]
    pub fn pos(&self) -> Vector3<f64> {
        self.pos
    }
    /// Azimuth `atan2(y, x)` in (−π, π].
    #[inline]
    pub fn azimuth(&self) -> f64 {
        self.pos.y.atan2(self.pos.x)
    }
}

/// How an arc's samples were produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArcKind {
    /// Regular slerp samples, `arc_segments + 1` of them.
    Geodesic,
    /// Endpoints coincide; the arc is the single point `[start]`.
    Coincident,
    /// Endpoints are antipodal; the arc falls back to `[start, end]`.
    Antipodal,
}

/// Great-circle arc between two placed points.
#[derive(Clone, Debug, PartialEq)]
pub struct Arc {
    pub start: PointId,
    pub end: PointId,
    pub kind: ArcKind,
    /// Central angle in radians (arc length on the unit sphere).
    pub theta: f64,
    pub samples: Vec<Vector3<f64>>,
}

/// Interior angle at one vertex of the cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleRecord {
    pub vertex: PointId,
    pub pos: Vector3<f64>,
    pub degrees: f64,
    pub label: String,
}

impl AngleRecord {
    pub fn new(vertex: &Point, degrees: f64) -> Self {
        Self {
            vertex: vertex.id(),
            pos: vertex.pos(),
            degrees,
            label: format_degrees(degrees),
        }
    }
}

/// Aggregate angle metrics for a cycle of `n ≥ 3` vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleTotals {
    /// Sum of spherical interior angles (degrees).
    pub spherical_sum: f64,
    /// Closed form `(n − 2)·180°`; the authoritative planar total.
    pub planar_sum: f64,
    /// Sum of the per-vertex planar angles as actually computed (diagnostic).
    pub planar_measured: f64,
}

impl AngleTotals {
    /// Spherical excess in degrees: spherical sum minus the planar closed form.
    #[inline]
    pub fn excess_deg(&self) -> f64 {
        self.spherical_sum - self.planar_sum
    }
    #[inline]
    pub fn excess_rad(&self) -> f64 {
        self.excess_deg().to_radians()
    }
    /// Enclosed area on the unit sphere (= solid angle in steradians), Girard.
    #[inline]
    pub fn area(&self) -> f64 {
        self.excess_rad()
    }
    pub fn spherical_label(&self) -> String {
        format_degrees(self.spherical_sum)
    }
    pub fn planar_label(&self) -> String {
        format_degrees(self.planar_sum)
    }
    pub fn excess_label(&self) -> String {
        format_degrees(self.excess_deg())
    }
}

/// Read-only view of the pipeline state after a mutation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometrySnapshot {
    /// All placed points, insertion order.
    pub points: Vec<Point>,
    /// Points in drawing order (see `hull::order_cycle`).
    pub cycle: Vec<Point>,
    /// One arc per consecutive pair of `cycle`, wrapping last → first.
    pub arcs: Vec<Arc>,
    pub spherical: Vec<AngleRecord>,
    pub planar: Vec<AngleRecord>,
    /// `None` while the cycle has fewer than three points.
    pub totals: Option<AngleTotals>,
}

impl GeometrySnapshot {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Sum of arc lengths (radians on the unit sphere).
    pub fn perimeter(&self) -> f64 {
        self.arcs.iter().map(|a| a.theta).sum()
    }
}

/// Degree label with exactly one decimal digit, e.g. `92.3°`.
pub fn format_degrees(deg: f64) -> String {
    format!("{deg:.1}°")
}
