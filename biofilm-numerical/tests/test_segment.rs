#[cfg(test)]
mod segment_test {
    use biofilm_numerical::{closest_point_on_segment, closest_points_on_segments, Vec2};
    use biofilm_numerical::{assert_eq_float, assert_eq_vec2};

    #[test]
    fn point_projects_inside_segment_test() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        let q = closest_point_on_segment(&Vec2::new(4.0, -3.0), &a, &b);
        assert_eq_vec2!(q, Vec2::new(4.0, 0.0), 0.000001);
    }

    #[test]
    fn point_clamps_to_endpoint_test() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(1.0, 1.0);
        let q = closest_point_on_segment(&Vec2::new(5.0, 5.0), &a, &b);
        assert_eq_vec2!(q, b, 0.000001);
        let q = closest_point_on_segment(&Vec2::new(-5.0, -2.0), &a, &b);
        assert_eq_vec2!(q, a, 0.000001);
    }

    #[test]
    fn degenerate_segment_test() {
        let a = Vec2::new(2.0, 3.0);
        let q = closest_point_on_segment(&Vec2::new(0.0, 0.0), &a, &a);
        assert_eq_vec2!(q, a, 0.000001);
    }

    #[test]
    fn crossing_segments_test() {
        // crossing segments share their closest point
        let (c1, c2) = closest_points_on_segments(
            &Vec2::new(-1.0, 0.0), &Vec2::new(1.0, 0.0),
            &Vec2::new(0.0, -1.0), &Vec2::new(0.0, 1.0));
        assert_eq_float!(c1.distance_to(&c2), 0.0, 0.000001);
        assert_eq_vec2!(c1, Vec2::new(0.0, 0.0), 0.000001);
    }

    #[test]
    fn parallel_segments_test() {
        let (c1, c2) = closest_points_on_segments(
            &Vec2::new(0.0, 0.0), &Vec2::new(4.0, 0.0),
            &Vec2::new(0.0, 2.0), &Vec2::new(4.0, 2.0));
        assert_eq_float!(c1.distance_to(&c2), 2.0, 0.000001);
    }

    #[test]
    fn skew_segments_test() {
        // the true minimum is between an endpoint of one segment and the interior of the other
        let (c1, c2) = closest_points_on_segments(
            &Vec2::new(0.0, 0.0), &Vec2::new(4.0, 0.0),
            &Vec2::new(5.0, 1.0), &Vec2::new(5.0, 4.0));
        assert_eq_vec2!(c1, Vec2::new(4.0, 0.0), 0.000001);
        assert_eq_vec2!(c2, Vec2::new(5.0, 1.0), 0.000001);
    }

    #[test]
    fn segment_vs_point_test() {
        let p = Vec2::new(1.0, 5.0);
        let (c1, c2) = closest_points_on_segments(
            &Vec2::new(0.0, 0.0), &Vec2::new(4.0, 0.0), &p, &p);
        assert_eq_vec2!(c1, Vec2::new(1.0, 0.0), 0.000001);
        assert_eq_vec2!(c2, p, 0.000001);
    }
}
