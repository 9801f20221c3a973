//! Pixel-space hit testing: point picking and on-line insertion.

use glam::Vec2;

use crate::model::{CurveStore, PointRef};

/// Default pick radius around a control point, in pixels.
pub const PICK_RADIUS: f32 = 5.0;

/// The first point within `radius` of `position`, scanning curves in
/// iteration order and points in index order.
///
/// First match wins: when two points are both in range, the earlier one
/// in iteration order is returned, not the nearer one.
pub fn find_point_at(store: &CurveStore, position: Vec2, radius: f32) -> Option<PointRef> {
    for (i, curve) in store.curves().iter().enumerate() {
        for (j, node) in curve.nodes().iter().enumerate() {
            if node.pixel.distance(position) <= radius {
                return Some(PointRef::new(i, j));
            }
        }
    }
    None
}

/// Where a click on a curve line would insert a new point, as
/// `(curve index, insertion index)`.
///
/// For each curve, binary-searches the x-sorted nodes for the segment
/// straddling `position.x`. A click before the first point or after the
/// last never hits. Whether the click counts as "on the line" uses the
/// slope-equality test with truncating integer division:
///
/// ```text
/// trunc((x2 - x1) / (x3 - x2)) == trunc((y2 - y1) / (y3 - y2))
/// ```
///
/// where `(x1, y1)` is the left node, `(x2, y2)` the click, and
/// `(x3, y3)` the right node. The truncation toward zero is what gives
/// the test its (asymmetric) tolerance; it is deliberately kept rather
/// than replaced by an exact distance-to-segment check, since tightening
/// it would change which clicks are accepted. A zero denominator (click
/// sharing an x or y coordinate with the right node) counts as no hit.
pub fn find_insertion_on_line(store: &CurveStore, position: Vec2) -> Option<(usize, usize)> {
    for (n, curve) in store.curves().iter().enumerate() {
        let nodes = curve.nodes();
        let k = nodes.partition_point(|node| node.pixel.x <= position.x);
        if k == 0 || k == nodes.len() {
            continue;
        }
        let before = nodes[k - 1].pixel;
        let after = nodes[k].pixel;
        let run = after.x - position.x;
        let rise = after.y - position.y;
        if run == 0.0 || rise == 0.0 {
            continue;
        }
        let slope_x = ((position.x - before.x) / run) as i64;
        let slope_y = ((position.y - before.y) / rise) as i64;
        if slope_x == slope_y {
            return Some((n, k));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Colour;
    use crate::view::ViewState;

    /// Store with one curve per pixel-x list, points spaced on a plain
    /// 0..100 → 0..100 view (padding 0) so pixel positions are easy to
    /// reason about.
    fn store_at(curves: &[&[(f32, f32)]]) -> CurveStore {
        let view = ViewState::new(0.0, 100.0, 100.0, 100.0, 0.0);
        let mut store = CurveStore::new();
        let points = curves
            .iter()
            .map(|pixels| {
                pixels
                    .iter()
                    .map(|&(x, y)| view.to_domain(Vec2::new(x, y)).unwrap())
                    .collect()
            })
            .collect();
        let colours = curves
            .iter()
            .map(|pixels| vec![Colour::BLACK; pixels.len()])
            .collect();
        store.replace_all(points, colours);
        store.rebuild_pixel_cache(&view).unwrap();
        store
    }

    #[test]
    fn test_find_point_within_radius() {
        let store = store_at(&[&[(10.0, 50.0), (90.0, 50.0)]]);
        assert_eq!(
            find_point_at(&store, Vec2::new(12.0, 53.0), PICK_RADIUS),
            Some(PointRef::new(0, 0))
        );
        assert_eq!(find_point_at(&store, Vec2::new(50.0, 50.0), PICK_RADIUS), None);
    }

    #[test]
    fn test_first_hit_wins_over_nearer_hit() {
        // Both points are within radius of the click; the second is
        // nearer but the first is earlier in iteration order.
        let store = store_at(&[&[(46.0, 50.0), (52.0, 50.0)]]);
        let click = Vec2::new(50.0, 50.0);
        let first = store.curves()[0].nodes()[0].pixel;
        let second = store.curves()[0].nodes()[1].pixel;
        assert!(second.distance(click) < first.distance(click));
        assert_eq!(
            find_point_at(&store, click, PICK_RADIUS),
            Some(PointRef::new(0, 0))
        );
    }

    #[test]
    fn test_earlier_curve_wins_across_curves() {
        let store = store_at(&[&[(46.0, 50.0)], &[(52.0, 50.0)]]);
        assert_eq!(
            find_point_at(&store, Vec2::new(50.0, 50.0), PICK_RADIUS),
            Some(PointRef::new(0, 0))
        );
    }

    #[test]
    fn test_insertion_on_straight_line() {
        let store = store_at(&[&[(0.0, 0.0), (100.0, 100.0)]]);
        // Exactly on the diagonal.
        assert_eq!(
            find_insertion_on_line(&store, Vec2::new(40.0, 40.0)),
            Some((0, 1))
        );
    }

    #[test]
    fn test_insertion_accepts_truncation_tolerance() {
        let store = store_at(&[&[(0.0, 0.0), (100.0, 100.0)]]);
        // Slightly off the diagonal: both slope ratios truncate to the
        // same integer, so the click still counts as on the line.
        assert_eq!(
            find_insertion_on_line(&store, Vec2::new(40.0, 42.0)),
            Some((0, 1))
        );
    }

    #[test]
    fn test_truncation_rejects_near_midpoint_on_diagonal() {
        let store = store_at(&[&[(0.0, 0.0), (100.0, 100.0)]]);
        // Just left of the segment midpoint, on the line in y: the x
        // ratio is 49.9 / 50.1 and truncates to 0 while the y ratio is
        // exactly 1. The test is asymmetric around ratio 1.0, so this
        // click is rejected even though it sits a tenth of a pixel from
        // the diagonal. Clicks whose ratios both stay below 1 (the
        // quarter point here) are accepted.
        assert_eq!(find_insertion_on_line(&store, Vec2::new(49.9, 50.0)), None);
        assert_eq!(
            find_insertion_on_line(&store, Vec2::new(25.0, 25.0)),
            Some((0, 1))
        );
    }

    #[test]
    fn test_insertion_rejects_far_from_line() {
        let store = store_at(&[&[(0.0, 0.0), (100.0, 100.0)]]);
        assert_eq!(find_insertion_on_line(&store, Vec2::new(40.0, 90.0)), None);
    }

    #[test]
    fn test_click_outside_span_never_inserts() {
        let store = store_at(&[&[(30.0, 50.0), (70.0, 50.0)]]);
        assert_eq!(find_insertion_on_line(&store, Vec2::new(10.0, 50.0)), None);
        assert_eq!(find_insertion_on_line(&store, Vec2::new(90.0, 50.0)), None);
    }

    #[test]
    fn test_zero_denominator_is_no_hit() {
        let store = store_at(&[&[(30.0, 50.0), (70.0, 50.0)]]);
        // Click shares y with the right node (horizontal segment), so
        // the slope test's denominator is zero: treated as no hit.
        assert_eq!(find_insertion_on_line(&store, Vec2::new(50.0, 50.0)), None);
    }
}
