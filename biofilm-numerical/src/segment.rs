use crate::vec2::Vec2;

/// Finds the point on the segment `a..b` that lies closest to a given point `p`.
///
/// The segment parameter is clamped to `[0, 1]`, so the returned point never leaves
/// the segment. A zero-length segment yields `a`.
///
/// ```
/// # use biofilm_numerical::{closest_point_on_segment, Vec2};
/// let a = Vec2::new(-1.0, 0.0);
/// let b = Vec2::new(1.0, 0.0);
/// let q = closest_point_on_segment(&Vec2::new(0.3, 5.0), &a, &b);
/// assert!(q.distance_to(&Vec2::new(0.3, 0.0)) < 0.000001);
/// let q = closest_point_on_segment(&Vec2::new(7.0, 1.0), &a, &b);
/// assert!(q.distance_to(&b) < 0.000001);
/// ```
pub fn closest_point_on_segment(p: &Vec2, a: &Vec2, b: &Vec2) -> Vec2 {
    let ab = *b - *a;
    let ab_len2 = ab.length_squared();
    if ab_len2 == 0.0 {
        return *a;
    }
    let mut t = Vec2::dot(&(*p - *a), &ab) / ab_len2;
    t = t.clamp(0.0, 1.0);
    return *a + ab * t;
}

/// Finds the pair of closest points between two segments `p1..q1` and `p2..q2`.
///
/// Solves the two-parameter linear system for the infinite lines and clamps both
/// parameters to `[0, 1]`, re-projecting each clamped parameter onto the other
/// segment. Degenerate (zero-length) segments are handled as points.
///
/// Returns the closest point on the first segment and on the second one, in that order.
///
/// ```
/// # use biofilm_numerical::{closest_points_on_segments, Vec2};
/// // two parallel horizontal segments, one unit apart
/// let (c1, c2) = closest_points_on_segments(
///     &Vec2::new(0.0, 0.0), &Vec2::new(2.0, 0.0),
///     &Vec2::new(3.0, 1.0), &Vec2::new(5.0, 1.0));
/// assert!(c1.distance_to(&Vec2::new(2.0, 0.0)) < 0.000001);
/// assert!(c2.distance_to(&Vec2::new(3.0, 1.0)) < 0.000001);
/// ```
pub fn closest_points_on_segments(p1: &Vec2, q1: &Vec2, p2: &Vec2, q2: &Vec2) -> (Vec2, Vec2) {
    let d1 = *q1 - *p1;
    let d2 = *q2 - *p2;
    let r = *p1 - *p2;
    let a = d1.length_squared();
    let e = d2.length_squared();
    let f = Vec2::dot(&d2, &r);

    // both segments degenerate to points
    if a == 0.0 && e == 0.0 {
        return (*p1, *p2);
    }

    let (s, t);
    if a == 0.0 {
        s = 0.0;
        t = (f / e).clamp(0.0, 1.0);
    } else {
        let c = Vec2::dot(&d1, &r);
        if e == 0.0 {
            t = 0.0;
            s = (-c / a).clamp(0.0, 1.0);
        } else {
            let b = Vec2::dot(&d1, &d2);
            let denom = a * e - b * b;

            // pick a point on segment 1; for parallel lines any point does
            let mut s_tmp = if denom != 0.0 {
                ((b * f - c * e) / denom).clamp(0.0, 1.0)
            } else {
                0.0
            };
            // closest point on line 2 to the chosen point, clamped to the segment
            let mut t_tmp = (b * s_tmp + f) / e;

            if t_tmp < 0.0 {
                t_tmp = 0.0;
                s_tmp = (-c / a).clamp(0.0, 1.0);
            } else if t_tmp > 1.0 {
                t_tmp = 1.0;
                s_tmp = ((b - c) / a).clamp(0.0, 1.0);
            }
            s = s_tmp;
            t = t_tmp;
        }
    }

    return (*p1 + d1 * s, *p2 + d2 * t);
}
