//! JSON view of a `GeometrySnapshot` for downstream renderers and notebooks.

use girard::{AngleRecord, Arc, ArcKind, GeometrySnapshot, PlaneProjector};
use nalgebra::Vector3;
use serde::Serialize;

#[derive(Serialize)]
pub struct SnapshotReport {
    pub version: &'static str,
    pub points: Vec<PointOut>,
    /// Point ids in drawing order.
    pub cycle: Vec<u64>,
    pub arcs: Vec<ArcOut>,
    pub spherical: Vec<AngleOut>,
    pub planar: Vec<AngleOut>,
    pub totals: Option<TotalsOut>,
    pub perimeter: f64,
}

#[derive(Serialize)]
pub struct PointOut {
    pub id: u64,
    pub index: usize,
    pub pos: [f64; 3],
    /// Position on the comparison plane.
    pub plane: [f64; 3],
}

#[derive(Serialize)]
pub struct ArcOut {
    pub start: u64,
    pub end: u64,
    pub kind: &'static str,
    pub theta: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<[f64; 3]>,
}

#[derive(Serialize)]
pub struct AngleOut {
    pub vertex: u64,
    pub degrees: f64,
    pub label: String,
}

#[derive(Serialize)]
pub struct TotalsOut {
    pub spherical_sum: f64,
    pub planar_sum: f64,
    pub planar_measured: f64,
    pub excess_deg: f64,
    pub excess_rad: f64,
    pub area_sr: f64,
    pub spherical_label: String,
    pub planar_label: String,
    pub excess_label: String,
}

#[inline]
fn xyz(v: Vector3<f64>) -> [f64; 3] {
    [v.x, v.y, v.z]
}

fn kind_name(kind: ArcKind) -> &'static str {
    match kind {
        ArcKind::Geodesic => "geodesic",
        ArcKind::Coincident => "coincident",
        ArcKind::Antipodal => "antipodal",
    }
}

fn arc_out(a: &Arc, with_samples: bool) -> ArcOut {
    ArcOut {
        start: a.start.0,
        end: a.end.0,
        kind: kind_name(a.kind),
        theta: a.theta,
        samples: if with_samples {
            a.samples.iter().copied().map(xyz).collect()
        } else {
            Vec::new()
        },
    }
}

fn angle_out(r: &AngleRecord) -> AngleOut {
    AngleOut {
        vertex: r.vertex.0,
        degrees: r.degrees,
        label: r.label.clone(),
    }
}

impl SnapshotReport {
    pub fn new(snap: &GeometrySnapshot, projector: &PlaneProjector, with_samples: bool) -> Self {
        Self {
            version: girard::VERSION,
            points: snap
                .points
                .iter()
                .map(|p| PointOut {
                    id: p.id().0,
                    index: p.index(),
                    pos: xyz(p.pos()),
                    plane: xyz(projector.project(p.pos())),
                })
                .collect(),
            cycle: snap.cycle.iter().map(|p| p.id().0).collect(),
            arcs: snap.arcs.iter().map(|a| arc_out(a, with_samples)).collect(),
            spherical: snap.spherical.iter().map(angle_out).collect(),
            planar: snap.planar.iter().map(angle_out).collect(),
            totals: snap.totals.map(|t| TotalsOut {
                spherical_sum: t.spherical_sum,
                planar_sum: t.planar_sum,
                planar_measured: t.planar_measured,
                excess_deg: t.excess_deg(),
                excess_rad: t.excess_rad(),
                area_sr: t.area(),
                spherical_label: t.spherical_label(),
                planar_label: t.planar_label(),
                excess_label: t.excess_label(),
            }),
            perimeter: snap.perimeter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use girard::GeometryPipeline;

    #[test]
    fn octant_report_json() {
        let mut p = GeometryPipeline::default();
        for v in [Vector3::x(), Vector3::y(), Vector3::z()] {
            p.add_point(v).unwrap();
        }
        let rep = SnapshotReport::new(p.snapshot(), &PlaneProjector::default(), true);
        let json = serde_json::to_value(&rep).unwrap();
        assert_eq!(json["cycle"], serde_json::json!([0, 1, 2]));
        assert_eq!(json["arcs"][0]["samples"].as_array().unwrap().len(), 31);
        assert_eq!(json["arcs"][2]["kind"], "geodesic");
        assert_eq!(json["spherical"][1]["label"], "90.0°");
        assert_eq!(json["totals"]["planar_label"], "180.0°");
        assert_eq!(json["totals"]["excess_label"], "90.0°");
        assert_eq!(json["points"][2]["plane"], serde_json::json!([0.0, 0.0, 0.0]));
    }

    #[test]
    fn samples_can_be_omitted() {
        let mut p = GeometryPipeline::default();
        p.add_point(Vector3::x()).unwrap();
        p.add_point(Vector3::y()).unwrap();
        let rep = SnapshotReport::new(p.snapshot(), &PlaneProjector::default(), false);
        let json = serde_json::to_value(&rep).unwrap();
        assert!(json["arcs"][0].get("samples").is_none());
        assert!(json["totals"].is_null());
    }
}
