//! Spherical polygon geometry core.
//!
//! Places points on the unit sphere, orders them into a closed cycle, samples
//! the great-circle arcs between neighbours, and compares interior angles on
//! the sphere against the flat chord polygon (spherical excess, Girard).
//!
//! Layout
//! - `geodesic`: slerp arcs with coincident/antipodal fallbacks.
//! - `hull`: azimuth drawing order (heuristic, not a spherical hull).
//! - `angles`: spherical and planar interior angles, totals.
//! - `projection`: orthographic comparison plane.
//! - `pipeline`: `GeometryPipeline` owning the state, `add_point`/`clear`.
//!
//! Rendering, picking and layout live outside this crate; they consume
//! `GeometrySnapshot` read-only.

pub mod angles;
pub mod cfg;
pub mod geodesic;
pub mod hull;
pub mod pipeline;
pub mod projection;
pub mod sample;
mod types;

pub use cfg::{ProjectionCfg, SphereCfg, ARC_SEGMENTS};
pub use pipeline::GeometryPipeline;
pub use projection::PlaneProjector;
pub use types::{
    format_degrees, AngleRecord, AngleTotals, Arc, ArcKind, GeometrySnapshot, Point, PointId,
};

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::sample::{band_points, from_lat_lon, uniform_points};
    pub use crate::{
        format_degrees, AngleRecord, AngleTotals, Arc, ArcKind, GeometryPipeline,
        GeometrySnapshot, PlaneProjector, Point, PointId, ProjectionCfg, SphereCfg,
    };
    pub use nalgebra::Vector3 as Vec3;
}
