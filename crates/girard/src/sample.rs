//! Points on the unit sphere: lat/lon constructor and seeded uniform draws.
//!
//! Used by the demo binary, benches and randomized tests. Uniform sampling uses
//! Archimedes' hat-box theorem: `z ~ U[−1, 1]`, `φ ~ U[0, 2π)`.

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Unit vector at latitude/longitude in degrees (latitude from the equator).
pub fn from_lat_lon(lat_deg: f64, lon_deg: f64) -> Vector3<f64> {
    let (lat, lon) = (lat_deg.to_radians(), lon_deg.to_radians());
    Vector3::new(lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin())
}

/// One uniform draw on the sphere.
pub fn uniform<R: Rng>(rng: &mut R) -> Vector3<f64> {
    let z: f64 = rng.gen_range(-1.0..=1.0);
    let phi: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
    let r = (1.0 - z * z).max(0.0).sqrt();
    Vector3::new(r * phi.cos(), r * phi.sin(), z)
}

/// `n` reproducible uniform draws.
pub fn uniform_points(n: usize, seed: u64) -> Vec<Vector3<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| uniform(&mut rng)).collect()
}

/// `n` reproducible draws restricted to a latitude band `[lo, hi]` (degrees).
pub fn band_points(n: usize, lat_lo: f64, lat_hi: f64, seed: u64) -> Vec<Vector3<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let (lo, hi) = (lat_lo.min(lat_hi), lat_lo.max(lat_hi));
    (0..n)
        .map(|_| {
            let lat = rng.gen_range(lo..=hi);
            let lon = rng.gen_range(-180.0..180.0);
            from_lat_lon(lat, lon)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lat_lon_axes() {
        assert!((from_lat_lon(0.0, 0.0) - Vector3::x()).norm() < 1e-12);
        assert!((from_lat_lon(0.0, 90.0) - Vector3::y()).norm() < 1e-12);
        assert!((from_lat_lon(90.0, 0.0) - Vector3::z()).norm() < 1e-12);
    }

    #[test]
    fn draws_are_unit_and_reproducible() {
        let a = uniform_points(64, 42);
        let b = uniform_points(64, 42);
        assert_eq!(a, b);
        assert!(a.iter().all(|v| (v.norm() - 1.0).abs() < 1e-12));
        assert_ne!(a, uniform_points(64, 43));
    }

    #[test]
    fn band_respects_latitude() {
        let pts = band_points(100, 10.0, 40.0, 7);
        for v in pts {
            let lat = v.z.asin().to_degrees();
            assert!((10.0 - 1e-9..=40.0 + 1e-9).contains(&lat));
        }
    }
}
