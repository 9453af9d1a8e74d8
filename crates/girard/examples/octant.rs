//! Octant triangle walkthrough: the textbook spherical-excess example.
//!
//! Places (1,0,0), (0,1,0), (0,0,1) and prints each vertex angle on the sphere
//! and on the flat chord triangle, then the totals. Expected: three right
//! angles on the sphere (270°) against 180° flat, excess 90° = π/2 sr.

use girard::prelude::*;

fn main() {
    let mut pipeline = GeometryPipeline::default();
    let clicks = [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    ];
    for v in clicks {
        pipeline.add_point(v).expect("axis vectors lie on the sphere");
    }
    let snap = pipeline.snapshot();
    for (s, p) in snap.spherical.iter().zip(&snap.planar) {
        println!(
            "vertex={} sphere={} plane={}",
            s.vertex.0, s.label, p.label
        );
    }
    if let Some(t) = snap.totals {
        println!(
            "sphere_sum={} plane_sum={} excess={} area_sr={:.6}",
            t.spherical_label(),
            t.planar_label(),
            t.excess_label(),
            t.area()
        );
    }
    println!(
        "arcs={} samples_per_arc={}",
        snap.arcs.len(),
        snap.arcs.first().map_or(0, |a| a.samples.len())
    );
}
