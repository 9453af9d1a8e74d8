//! Cyclic drawing order for placed points (azimuth heuristic).
//!
//! Policy
//! - `n ≤ 3`: identity. Three points always bound one (possibly degenerate)
//!   spherical triangle regardless of labeling order.
//! - `n ≥ 4`: ascending azimuth `atan2(y, x)`, colatitude ignored, with the
//!   −π/π seam moved into the largest cyclic gap between neighbours. Pairs that
//!   sit more than π apart across the seam therefore compare as if the smaller
//!   one were shifted by 2π, e.g. {170°, −170°, 0°, 90°} → 0°, 90°, 170°, −170°.
//!
//! The order depends only on the azimuths, not on click order; equal azimuths
//! keep click order (stable sort).
//!
//! This is not a spherical convex hull: points near a pole or points that are
//! not azimuthally convex can come out in a self-intersecting order.

use std::f64::consts::TAU;

use crate::types::Point;

/// Minimum count at which reordering kicks in.
pub const REORDER_MIN: usize = 4;

/// Permutation that puts points with the given azimuths into drawing order.
pub fn cycle_permutation(azimuths: &[f64]) -> Vec<usize> {
    let n = azimuths.len();
    let mut perm: Vec<usize> = (0..n).collect();
    if n < REORDER_MIN {
        return perm;
    }
    perm.sort_by(|&i, &j| azimuths[i].total_cmp(&azimuths[j]));

    // Seam goes after the widest gap; the wrap gap wins ties so an
    // already-unbroken run keeps its plain ascending order.
    let mut start = 0;
    let mut widest = azimuths[perm[0]] + TAU - azimuths[perm[n - 1]];
    for k in 1..n {
        let gap = azimuths[perm[k]] - azimuths[perm[k - 1]];
        if gap > widest {
            widest = gap;
            start = k;
        }
    }
    perm.rotate_left(start);
    perm
}

/// Reorder `points` into a cycle suitable for drawing a closed polygon.
pub fn order_cycle(points: &[Point]) -> Vec<Point> {
    let azimuths: Vec<f64> = points.iter().map(Point::azimuth).collect();
    cycle_permutation(&azimuths)
        .into_iter()
        .map(|i| points[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PointId;
    use nalgebra::Vector3;
    use proptest::prelude::*;

    fn at_azimuth_deg(deg: f64, z: f64) -> Vector3<f64> {
        let r = (1.0 - z * z).sqrt();
        let t = deg.to_radians();
        Vector3::new(r * t.cos(), r * t.sin(), z)
    }

    fn points_at(degs: &[f64], z: f64) -> Vec<Point> {
        degs.iter()
            .enumerate()
            .map(|(i, &d)| {
                Point::from_vector(PointId(i as u64), i, at_azimuth_deg(d, z)).unwrap()
            })
            .collect()
    }

    /// Drawing order as rounded azimuths in degrees.
    fn ordered_deg(degs: &[f64]) -> Vec<f64> {
        order_cycle(&points_at(degs, 0.2))
            .iter()
            .map(|p| p.azimuth().to_degrees().round())
            .collect()
    }

    fn ordered_pos(degs: &[f64]) -> Vec<Vector3<f64>> {
        order_cycle(&points_at(degs, 0.2))
            .iter()
            .map(|p| p.pos())
            .collect()
    }

    #[test]
    fn seam_example_in_click_order() {
        assert_eq!(
            ordered_deg(&[170.0, -170.0, 0.0, 90.0]),
            vec![0.0, 90.0, 170.0, -170.0]
        );
    }

    #[test]
    fn seam_example_any_click_order() {
        let expected = vec![0.0, 90.0, 170.0, -170.0];
        for clicks in [
            [170.0, 90.0, 0.0, -170.0],
            [90.0, -170.0, 0.0, 170.0],
            [-170.0, 170.0, 90.0, 0.0],
            [0.0, 90.0, 170.0, -170.0],
        ] {
            assert_eq!(ordered_deg(&clicks), expected, "clicks {clicks:?}");
        }
    }

    #[test]
    fn small_inputs_are_identity() {
        let az = [120f64.to_radians(), (-30f64).to_radians(), 10f64.to_radians()];
        for n in 0..=3 {
            assert_eq!(cycle_permutation(&az[..n]), (0..n).collect::<Vec<_>>());
        }
    }

    #[test]
    fn equal_azimuths_keep_input_order() {
        // same meridian, different colatitude: stable tie
        let az = [0.0, (-40f64).to_radians(), 0.0, 60f64.to_radians()];
        assert_eq!(cycle_permutation(&az), vec![1, 0, 2, 3]);
    }

    #[test]
    fn order_cycle_carries_point_identity() {
        let pts = points_at(&[90.0, 0.0, 170.0, -100.0], 0.1);
        let ids: Vec<u64> = order_cycle(&pts).iter().map(|p| p.id().0).collect();
        // widest gap is −100° → 0°, so the cycle starts at 0°
        assert_eq!(ids, vec![1, 0, 2, 3]);
    }

    proptest! {
        #[test]
        fn identity_below_four(degs in prop::collection::vec(-179.0f64..179.0, 1..=3)) {
            let az: Vec<f64> = degs.iter().map(|d| d.to_radians()).collect();
            prop_assert_eq!(cycle_permutation(&az), (0..az.len()).collect::<Vec<_>>());
        }

        #[test]
        fn plain_sort_away_from_seam(degs in prop::collection::vec(-85.0f64..85.0, 4..12)) {
            // span < 180°, so the wrap gap is the widest and no rotation happens
            let az: Vec<f64> = degs.iter().map(|d| d.to_radians()).collect();
            let perm = cycle_permutation(&az);
            let sorted: Vec<f64> = perm.iter().map(|&i| az[i]).collect();
            prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
            let mut seen = perm.clone();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..az.len()).collect::<Vec<_>>());
        }

        #[test]
        fn order_ignores_click_order(
            degs in prop::collection::hash_set(-1790i32..1800, 4..12),
            shift in 0usize..12,
        ) {
            // distinct azimuths in 0.1° steps
            let degs: Vec<f64> = degs.into_iter().map(|d| d as f64 / 10.0).collect();
            let base = ordered_pos(&degs);
            let mut rotated = degs.clone();
            rotated.rotate_left(shift % degs.len());
            let mut reversed = degs.clone();
            reversed.reverse();
            prop_assert_eq!(&ordered_pos(&rotated), &base);
            prop_assert_eq!(&ordered_pos(&reversed), &base);
        }
    }
}
