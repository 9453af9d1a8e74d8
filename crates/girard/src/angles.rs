//! Interior angles of a cycle, on the sphere and on the flat chord polygon.
//!
//! Purpose
//! - Spherical: angle between the two arcs meeting at a vertex, measured in
//!   the tangent plane at that vertex, with an orientation flip tied to the
//!   azimuth drawing order.
//! - Planar: law of cosines on the chords between neighbouring vertices
//!   (straight segments in R³, not projected coordinates).
//!
//! Degenerate vertices (a neighbour on the vertex direction, or a zero-length
//! chord) yield 0°. Every `acos` argument is clamped to [−1, 1].
//!
//! Known limitation
//! - The `360° − angle` flip assumes the winding produced by `hull::order_cycle`.
//!   Cycles that straddle a pole or both hemispheres can report reflex angles
//!   where a convex reading is expected; this is kept as-is.

use nalgebra::Vector3;

use crate::cfg::SphereCfg;
use crate::types::{AngleRecord, AngleTotals, Point};

#[inline]
fn acos_deg(cos: f64) -> f64 {
    cos.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Component of `w` orthogonal to the unit vector `v` (tangent plane at `v`).
#[inline]
pub fn tangent_at(v: Vector3<f64>, w: Vector3<f64>) -> Vector3<f64> {
    w - v * v.dot(&w)
}

/// Spherical interior angle at `v` between arcs towards `prev` and `next`, degrees.
pub fn spherical_angle(
    prev: Vector3<f64>,
    v: Vector3<f64>,
    next: Vector3<f64>,
    eps_tangent: f64,
) -> f64 {
    let v1 = tangent_at(v, prev);
    let v2 = tangent_at(v, next);
    let (n1, n2) = (v1.norm(), v2.norm());
    if n1 < eps_tangent || n2 < eps_tangent {
        tracing::debug!(vertex = ?v, "degenerate spherical angle");
        return 0.0;
    }
    let angle = acos_deg(v1.dot(&v2) / (n1 * n2));
    if v1.cross(&v2).dot(&v) > 0.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Planar interior angle at `v` of the chord triangle `(prev, v, next)`, degrees.
pub fn planar_angle(
    prev: Vector3<f64>,
    v: Vector3<f64>,
    next: Vector3<f64>,
    eps_side: f64,
) -> f64 {
    let a = (prev - v).norm();
    let b = (v - next).norm();
    let c = (next - prev).norm();
    if a < eps_side || b < eps_side {
        return 0.0;
    }
    acos_deg((a * a + b * b - c * c) / (2.0 * a * b))
}

/// Closed-form interior-angle sum of a flat `n`-gon: `(n − 2)·180°`.
#[inline]
pub fn planar_sum(n: usize) -> f64 {
    (n as f64 - 2.0) * 180.0
}

/// Apply `f(prev, v, next)` to each vertex of the cycle (wrapping both ends).
fn per_vertex<F>(cycle: &[Point], mut f: F) -> Vec<AngleRecord>
where
    F: FnMut(Vector3<f64>, Vector3<f64>, Vector3<f64>) -> f64,
{
    let n = cycle.len();
    (0..n)
        .map(|i| {
            let prev = cycle[(i + n - 1) % n].pos();
            let next = cycle[(i + 1) % n].pos();
            let v = &cycle[i];
            AngleRecord::new(v, f(prev, v.pos(), next))
        })
        .collect()
}

pub fn spherical_angles(cycle: &[Point], cfg: &SphereCfg) -> Vec<AngleRecord> {
    per_vertex(cycle, |p, v, n| spherical_angle(p, v, n, cfg.eps_tangent))
}

pub fn planar_angles(cycle: &[Point], cfg: &SphereCfg) -> Vec<AngleRecord> {
    per_vertex(cycle, |p, v, n| planar_angle(p, v, n, cfg.eps_side))
}

/// Both angle lists and their totals, or `None` for fewer than three vertices.
pub fn compute(
    cycle: &[Point],
    cfg: &SphereCfg,
) -> Option<(Vec<AngleRecord>, Vec<AngleRecord>, AngleTotals)> {
    if cycle.len() < 3 {
        return None;
    }
    let spherical = spherical_angles(cycle, cfg);
    let planar = planar_angles(cycle, cfg);
    let totals = AngleTotals {
        spherical_sum: spherical.iter().map(|r| r.degrees).sum(),
        planar_sum: planar_sum(cycle.len()),
        planar_measured: planar.iter().map(|r| r.degrees).sum(),
    };
    Some((spherical, planar, totals))
}
