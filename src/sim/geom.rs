//! Segment geometry for the collision pass
//!
//! Projectiles and mirrors are both collided as the line segment along
//! their length axis. Intersection uses the classic four-orientation test
//! with exact floating-point comparisons: no epsilon, so near-collinear
//! grazes can land either way. That matches the reference behavior and the
//! gameplay tolerates it (a missed graze is corrected one tick later when
//! the segments properly cross).

use glam::Vec2;

use crate::heading_vec;

/// Winding of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation of the triple (p, q, r) from the sign of the cross product.
pub fn orientation(p: Vec2, q: Vec2, r: Vec2) -> Orientation {
    let cross = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if cross == 0.0 {
        Orientation::Collinear
    } else if cross > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// True if `q` lies inside the axis-aligned bounding box of `p` and `r`.
/// Only meaningful once the triple is known to be collinear.
pub fn on_segment(p: Vec2, q: Vec2, r: Vec2) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Segment intersection predicate: does p1-q1 touch p2-q2 anywhere?
pub fn segments_intersect(p1: Vec2, q1: Vec2, p2: Vec2, q2: Vec2) -> bool {
    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    // Collinear fallbacks: an endpoint of one segment lies on the other.
    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}

/// A line segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
}

impl Segment {
    /// Segment of half-length `half_len` through `center` along `angle`.
    pub fn from_center_angle(center: Vec2, half_len: f32, angle: f32) -> Self {
        let offset = half_len * heading_vec(angle);
        Self {
            a: center - offset,
            b: center + offset,
        }
    }

    pub fn intersects(&self, other: &Segment) -> bool {
        segments_intersect(self.a, self.b, other.a, other.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn orientation_follows_the_cross_sign() {
        let p = Vec2::new(0.0, 0.0);
        let q = Vec2::new(10.0, 0.0);
        assert_eq!(
            orientation(p, q, Vec2::new(20.0, 0.0)),
            Orientation::Collinear
        );
        assert_eq!(
            orientation(p, q, Vec2::new(10.0, -5.0)),
            Orientation::Clockwise
        );
        assert_eq!(
            orientation(p, q, Vec2::new(10.0, 5.0)),
            Orientation::CounterClockwise
        );
    }

    #[test]
    fn on_segment_is_a_bounding_box_test() {
        let p = Vec2::new(0.0, 0.0);
        let r = Vec2::new(10.0, 10.0);
        assert!(on_segment(p, Vec2::new(5.0, 5.0), r));
        // Box only; callers must have established collinearity first.
        assert!(on_segment(p, Vec2::new(5.0, 0.0), r));
        assert!(!on_segment(p, Vec2::new(11.0, 5.0), r));
    }

    #[test]
    fn crossing_segments_intersect() {
        assert!(segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
        ));
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        assert!(!segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(10.0, 1.0),
        ));
    }

    #[test]
    fn collinear_overlapping_segments_intersect() {
        assert!(segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(15.0, 0.0),
        ));
    }

    #[test]
    fn collinear_disjoint_segments_do_not_intersect() {
        assert!(!segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(9.0, 0.0),
        ));
    }

    #[test]
    fn touching_endpoints_intersect() {
        assert!(segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 5.0),
            Vec2::new(5.0, 5.0),
            Vec2::new(9.0, 0.0),
        ));
    }

    #[test]
    fn segment_from_center_spans_both_sides() {
        let seg = Segment::from_center_angle(Vec2::new(10.0, 10.0), 5.0, 0.0);
        assert!((seg.a - Vec2::new(5.0, 10.0)).length() < 1e-4);
        assert!((seg.b - Vec2::new(15.0, 10.0)).length() < 1e-4);
    }

    proptest! {
        #[test]
        fn intersection_is_symmetric(coords in proptest::array::uniform8(-600.0f32..600.0)) {
            let [ax, ay, bx, by, cx, cy, dx, dy] = coords;
            let (p1, q1) = (Vec2::new(ax, ay), Vec2::new(bx, by));
            let (p2, q2) = (Vec2::new(cx, cy), Vec2::new(dx, dy));
            prop_assert_eq!(
                segments_intersect(p1, q1, p2, q2),
                segments_intersect(p2, q2, p1, q1)
            );
        }
    }
}
