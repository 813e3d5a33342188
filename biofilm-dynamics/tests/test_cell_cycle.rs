#[cfg(test)]
mod cell_cycle_test {
    use std::f64::consts::PI;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use biofilm_numerical::Vec2;
    use biofilm_numerical::{assert_eq_float, assert_eq_vec2};
    use biofilm_particles::Cell;
    use biofilm_dynamics::CellCycle;

    fn cycle() -> CellCycle {
        // growth 3.5, division length 5, cell diameter 1, eps diameter 0.5,
        // eps rate 1, density thresholds 5 / 0.3, sensing radius 2
        CellCycle::new(3.5, 5.0, 1.0, 0.5, 1.0, 5.0, 0.3, 2.0)
    }

    fn cell(length: f64) -> Cell {
        Cell::new(0, Vec2::from_float(0.0), Vec2::new(1.0, 0.0), 1.0, length)
    }

    #[test]
    fn no_growth_without_nutrient_test() {
        let c = cell(3.0);
        assert_eq!(cycle().growth_increment(&c, 0.0, 0.1), 0.0);
    }

    #[test]
    fn growth_scales_with_relative_area_test() {
        let c = cell(5.0);
        // area of the cell and of the reference average cell
        let area = PI * 0.25 + 2.0 * 0.5 * 4.0;
        let average = PI * 0.25 + 1.5 * 0.5 * 5.0;
        let expected = 3.5 * (area / average) * 0.75 * 0.1;
        assert_eq_float!(cycle().growth_increment(&c, 0.75, 0.1), expected, 0.000001);
    }

    #[test]
    fn division_threshold_test() {
        let cycle = cycle();
        assert!(!cycle.should_divide(&cell(4.999)));
        assert!(cycle.should_divide(&cell(5.0)));
        assert!(cycle.should_divide(&cell(5.2)));
    }

    #[test]
    fn division_splits_mother_at_midpoint_test() {
        let cycle = cycle();
        let mother = cell(5.0);
        let mut rng = SmallRng::seed_from_u64(3);
        let (first, second) = cycle.divide(&mother, &mut rng);

        assert_eq_vec2!(first.position, Vec2::new(-1.25, 0.0), 0.000001);
        assert_eq_vec2!(second.position, Vec2::new(1.25, 0.0), 0.000001);
        assert_eq_float!(first.length, 2.5, 0.000001);
        assert_eq_float!(second.length, 2.5, 0.000001);
        // total cell length is conserved
        assert_eq_float!(first.length + second.length, mother.length, 0.000001);
    }

    #[test]
    fn daughter_orientations_are_jittered_within_bounds_test() {
        let cycle = cycle();
        let mother = cell(5.0);
        let max_deviation = (8.0 * PI / 180.0).cos();
        let mut rng = SmallRng::seed_from_u64(19);
        for _ in 0..200 {
            let (first, second) = cycle.divide(&mother, &mut rng);
            assert!((first.orientation.length() - 1.0).abs() < 1e-9);
            assert!((second.orientation.length() - 1.0).abs() < 1e-9);
            assert!(Vec2::dot(&first.orientation, &mother.orientation) >= max_deviation - 1e-9);
            assert!(Vec2::dot(&second.orientation, &mother.orientation) >= max_deviation - 1e-9);
        }
    }

    #[test]
    fn sparse_neighbourhood_never_secretes_test() {
        // an isolated cell senses only its own area, far below the crowding threshold
        let cycle = cycle();
        let c = cell(3.0);
        let own_area = c.area();
        assert!(own_area < 5.0);
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..1000 {
            assert!(cycle.secretion_attempt(&c, own_area, 0.0, &mut rng).is_none());
        }
    }

    #[test]
    fn saturated_eps_neighbourhood_stops_secretion_test() {
        let cycle = cycle();
        let c = cell(3.0);
        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..1000 {
            assert!(cycle.secretion_attempt(&c, 8.0, 0.5, &mut rng).is_none());
        }
    }

    #[test]
    fn eligible_cell_secretes_at_rate_test() {
        // with k_eps = 1 the per-tick success probability is 1/10
        let cycle = cycle();
        let c = cell(3.0);
        let mut rng = SmallRng::seed_from_u64(23);
        let mut successes = 0;
        for _ in 0..10000 {
            if cycle.secretion_attempt(&c, 8.0, 0.0, &mut rng).is_some() {
                successes += 1;
            }
        }
        let rate = successes as f64 / 10000.0;
        assert!((rate - 0.1).abs() < 0.02, "secretion rate {} far from 0.1", rate);
    }

    #[test]
    fn secreted_particle_geometry_test() {
        // k_eps = 10 makes every eligible attempt succeed
        let cycle = CellCycle::new(3.5, 5.0, 1.0, 0.5, 10.0, 5.0, 0.3, 2.0);
        let c = cell(3.0);
        let mut rng = SmallRng::seed_from_u64(41);
        for _ in 0..50 {
            let eps = cycle.secretion_attempt(&c, 8.0, 0.0, &mut rng).unwrap();
            // placed one EPS diameter away, oriented along the placement direction
            assert_eq_float!(eps.position.distance_to(&c.position), 0.5, 0.000001);
            assert_eq_float!(eps.radius, 0.25, 0.000001);
            let direction = (eps.position - c.position).normalized();
            assert_eq_vec2!(eps.orientation, direction, 0.000001);
        }
    }
}
