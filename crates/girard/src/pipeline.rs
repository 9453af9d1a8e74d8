//! Point placement state machine and snapshot producer.
//!
//! Purpose
//! - Own the placed points and everything derived from them.
//! - Expose exactly two mutators, `add_point` and `clear`, each followed by a
//!   full rebuild of the snapshot (ordering, arcs, angles, totals).
//!
//! Why full recompute
//! - Point counts stay in the tens during interactive use, so re-sorting and
//!   re-sampling everything on each event is cheap and keeps the snapshot
//!   trivially consistent. A 5th point re-sorts and re-draws all arcs.
//!
//! Code cross-refs: `hull::order_cycle`, `geodesic::build_arc`, `angles::compute`.

use nalgebra::Vector3;

use crate::angles;
use crate::cfg::SphereCfg;
use crate::geodesic::build_arc;
use crate::hull::order_cycle;
use crate::types::{Arc, GeometrySnapshot, Point, PointId};

#[derive(Clone, Debug, Default)]
pub struct GeometryPipeline {
    cfg: SphereCfg,
    next_id: u64,
    snapshot: GeometrySnapshot,
}

impl GeometryPipeline {
    pub fn new(cfg: SphereCfg) -> Self {
        Self {
            cfg,
            next_id: 0,
            snapshot: GeometrySnapshot::default(),
        }
    }

    #[inline]
    pub fn cfg(&self) -> &SphereCfg {
        &self.cfg
    }

    /// Current snapshot (read-only; replaced wholesale by the next mutation).
    #[inline]
    pub fn snapshot(&self) -> &GeometrySnapshot {
        &self.snapshot
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.snapshot.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.snapshot.points.is_empty()
    }

    /// Place a picked point and rebuild the snapshot.
    ///
    /// Pre: `v` lies on the unit sphere (small drift is renormalized).
    /// Returns `None` and leaves the state untouched if `v` is zero or
    /// non-finite.
    pub fn add_point(&mut self, v: Vector3<f64>) -> Option<&GeometrySnapshot> {
        let id = PointId(self.next_id);
        let index = self.snapshot.points.len();
        let Some(p) = Point::from_vector(id, index, v) else {
            tracing::debug!(?v, "rejected point off the sphere");
            return None;
        };
        self.next_id += 1;
        self.snapshot.points.push(p);
        self.recompute();
        Some(&self.snapshot)
    }

    /// Drop all points and derived geometry. Idempotent; ids are not reused.
    pub fn clear(&mut self) -> &GeometrySnapshot {
        self.snapshot = GeometrySnapshot::default();
        &self.snapshot
    }

    fn recompute(&mut self) {
        let points = std::mem::take(&mut self.snapshot.points);
        let mut snap = GeometrySnapshot {
            cycle: if points.len() >= 2 {
                order_cycle(&points)
            } else {
                points.clone()
            },
            points,
            ..GeometrySnapshot::default()
        };
        if snap.cycle.len() >= 2 {
            snap.arcs = cycle_arcs(&snap.cycle, &self.cfg);
        }
        if let Some((spherical, planar, totals)) = angles::compute(&snap.cycle, &self.cfg) {
            snap.spherical = spherical;
            snap.planar = planar;
            snap.totals = Some(totals);
        }
        tracing::trace!(
            points = snap.points.len(),
            arcs = snap.arcs.len(),
            excess = snap.totals.map(|t| t.excess_deg()),
            "recomputed snapshot"
        );
        self.snapshot = snap;
    }
}

/// One arc per consecutive pair, wrapping last → first.
fn cycle_arcs(cycle: &[Point], cfg: &SphereCfg) -> Vec<Arc> {
    let n = cycle.len();
    (0..n)
        .map(|i| build_arc(&cycle[i], &cycle[(i + 1) % n], cfg))
        .collect()
}
