//! Great-circle arcs by spherical linear interpolation.
//!
//! - `central_angle`: clamped `arccos(a·b)`.
//! - `slerp`: single sample at parameter `t` (caller guarantees `sin θ ≠ 0`).
//! - `interpolate`: `N + 1` samples on the minor arc, with fallbacks for
//!   coincident and antipodal endpoints.
//!
//! Samples are not renormalized; the slerp formula keeps them on the sphere up
//! to rounding, and that rounding is tolerated rather than corrected.

use nalgebra::Vector3;

use crate::cfg::SphereCfg;
use crate::types::{Arc, ArcKind, Point};

/// Angle between two unit vectors in [0, π].
#[inline]
pub fn central_angle(a: Vector3<f64>, b: Vector3<f64>) -> f64 {
    a.dot(&b).clamp(-1.0, 1.0).acos()
}

/// `(sin((1−t)θ)·a + sin(tθ)·b) / sin θ`.
#[inline]
pub fn slerp(a: Vector3<f64>, b: Vector3<f64>, theta: f64, t: f64) -> Vector3<f64> {
    let s = theta.sin();
    (a * ((1.0 - t) * theta).sin() + b * (t * theta).sin()) / s
}

/// Classify the pair `(a, b)` by central angle.
pub fn classify(theta: f64, eps: f64) -> ArcKind {
    if theta < eps {
        ArcKind::Coincident
    } else if std::f64::consts::PI - theta < eps {
        ArcKind::Antipodal
    } else {
        ArcKind::Geodesic
    }
}

/// Sample the minor arc from `a` to `b` at `segments + 1` uniform parameters.
///
/// Degenerate endpoints never produce NaN:
/// - coincident → `[a]`
/// - antipodal → `[a, b]` (no unique great circle)
pub fn interpolate(
    a: Vector3<f64>,
    b: Vector3<f64>,
    segments: usize,
    eps: f64,
) -> (ArcKind, f64, Vec<Vector3<f64>>) {
    let theta = central_angle(a, b);
    let kind = classify(theta, eps);
    let samples = match kind {
        ArcKind::Coincident => vec![a],
        ArcKind::Antipodal => vec![a, b],
        ArcKind::Geodesic => {
            let n = segments.max(1);
            (0..=n)
                .map(|i| slerp(a, b, theta, i as f64 / n as f64))
                .collect()
        }
    };
    (kind, theta, samples)
}

/// Build the arc `start → end` for the snapshot.
pub fn build_arc(start: &Point, end: &Point, cfg: &SphereCfg) -> Arc {
    let (kind, theta, samples) =
        interpolate(start.pos(), end.pos(), cfg.arc_segments, cfg.eps_arc);
    if kind != ArcKind::Geodesic {
        tracing::debug!(
            start = start.id().0,
            end = end.id().0,
            ?kind,
            theta,
            "degenerate arc"
        );
    }
    Arc {
        start: start.id(),
        end: end.id(),
        kind,
        theta,
        samples,
    }
}
