use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use girard::sample::{band_points, uniform_points};
use girard::{GeometryPipeline, PlaneProjector, ProjectionCfg, SphereCfg, ARC_SEGMENTS};
use nalgebra::Vector3;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod report;

use provenance::Payload;
use report::SnapshotReport;

#[derive(Parser)]
#[command(name = "girard")]
#[command(about = "Spherical polygons vs. their flat counterparts (spherical excess)")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

/// Options shared by every command that builds a snapshot.
#[derive(Args, Clone, Debug)]
struct Render {
    /// Parameter steps per great-circle arc
    #[arg(long, default_value_t = ARC_SEGMENTS)]
    segments: usize,
    /// Comparison-plane scale for x and y
    #[arg(long, default_value_t = 1.0)]
    scale: f64,
    /// Comparison-plane depth (z)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    depth: f64,
    /// Omit arc samples from the report
    #[arg(long)]
    no_samples: bool,
    /// Write the report here (plus a provenance sidecar) instead of stdout
    #[arg(long)]
    out: Option<String>,
}

#[derive(Subcommand)]
enum Action {
    /// Place points (in the given order) and print the snapshot
    Snapshot {
        /// Point as x,y,z; repeat for several points
        #[arg(long = "point", allow_hyphen_values = true)]
        points: Vec<String>,
        /// CSV or Parquet file with x,y,z columns (appended after --point)
        #[arg(long)]
        input: Option<String>,
        #[command(flatten)]
        render: Render,
    },
    /// The octant triangle: three right angles, 90° excess
    Octant {
        #[command(flatten)]
        render: Render,
    },
    /// Seeded random points, uniform on the sphere or within a latitude band
    Random {
        #[arg(long, default_value_t = 5)]
        n: usize,
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Latitude band lo,hi in degrees (e.g. 10,60)
        #[arg(long, allow_hyphen_values = true)]
        band: Option<String>,
        #[command(flatten)]
        render: Render,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Snapshot {
            points,
            input,
            render,
        } => snapshot(points, input, render),
        Action::Octant { render } => octant(render),
        Action::Random {
            n,
            seed,
            band,
            render,
        } => random(n, seed, band, render),
        Action::Report => report(),
    }
}

fn snapshot(points: Vec<String>, input: Option<String>, render: Render) -> Result<()> {
    tracing::info!(points = points.len(), input = ?input, "snapshot");
    let mut clicks = points
        .iter()
        .map(|s| crate::input::parse_point(s))
        .collect::<Result<Vec<_>>>()?;
    if let Some(path) = &input {
        clicks.extend(crate::input::read_table(path)?);
    }
    let params = serde_json::json!({ "points": points, "input": input });
    emit("snapshot", &clicks, &render, params)
}

fn octant(render: Render) -> Result<()> {
    tracing::info!("octant");
    let clicks = [Vector3::x(), Vector3::y(), Vector3::z()];
    emit("octant", &clicks, &render, serde_json::json!({}))
}

fn random(n: usize, seed: u64, band: Option<String>, render: Render) -> Result<()> {
    tracing::info!(n, seed, band = ?band, "random");
    let clicks = match &band {
        Some(b) => {
            let (lo, hi) = parse_band(b)?;
            band_points(n, lo, hi, seed)
        }
        None => uniform_points(n, seed),
    };
    let params = serde_json::json!({ "n": n, "seed": seed, "band": band });
    emit("random", &clicks, &render, params)
}

fn parse_band(s: &str) -> Result<(f64, f64)> {
    let Some((lo, hi)) = s.split_once(',') else {
        bail!("expected lo,hi but got {s:?}");
    };
    Ok((lo.trim().parse()?, hi.trim().parse()?))
}

/// Feed the clicks through a fresh pipeline and write the final snapshot.
fn emit(
    command: &'static str,
    clicks: &[Vector3<f64>],
    render: &Render,
    mut params: serde_json::Value,
) -> Result<()> {
    let cfg = SphereCfg {
        arc_segments: render.segments,
        ..SphereCfg::default()
    };
    let mut pipeline = GeometryPipeline::new(cfg);
    for (i, &v) in clicks.iter().enumerate() {
        if pipeline.add_point(v).is_none() {
            bail!("point #{i} ({}, {}, {}) cannot be placed on the sphere", v.x, v.y, v.z);
        }
    }
    let snap = pipeline.snapshot();
    if let Some(t) = snap.totals {
        tracing::info!(
            n = snap.points.len(),
            spherical = %t.spherical_label(),
            planar = %t.planar_label(),
            excess = %t.excess_label(),
            "totals"
        );
    }
    let projector = PlaneProjector::new(ProjectionCfg {
        scale: render.scale,
        depth: render.depth,
    });
    let rep = SnapshotReport::new(snap, &projector, !render.no_samples);
    let body = serde_json::to_string_pretty(&rep)?;

    match &render.out {
        None => println!("{body}"),
        Some(out) => {
            let out_path = Path::new(out);
            provenance::ensure_parent(out_path)?;
            std::fs::write(out_path, body.as_bytes())?;
            if let Some(obj) = params.as_object_mut() {
                obj.insert("segments".into(), render.segments.into());
                obj.insert("scale".into(), render.scale.into());
                obj.insert("depth".into(), render.depth.into());
            }
            let prov = provenance::write_sidecar(out_path, Payload::new(command, params))?;
            tracing::info!(out, provenance = %prov.display(), "wrote");
        }
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "girard_version": girard::VERSION,
        "defaults": {
            "segments": ARC_SEGMENTS,
            "scale": ProjectionCfg::default().scale,
            "depth": ProjectionCfg::default().depth,
        },
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
