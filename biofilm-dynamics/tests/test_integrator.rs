#[cfg(test)]
mod integrator_test {
    use biofilm_numerical::Vec2;
    use biofilm_numerical::{assert_eq_float, assert_eq_vec2};
    use biofilm_particles::{Cell, Eps, Particle};
    use biofilm_dynamics::{OverdampedIntegrator, OMEGA_MAX};

    fn cell(length: f64) -> Particle {
        Particle::Cell(Cell::new(0, Vec2::from_float(0.0), Vec2::new(1.0, 0.0), 1.0, length))
    }

    #[test]
    fn velocity_is_force_over_friction_test() {
        let integrator = OverdampedIntegrator::new(200.0, 100.0);
        let c = cell(2.5);
        let v = integrator.velocity(&c, &Vec2::new(100.0, 0.0));
        assert_eq_vec2!(v, Vec2::new(100.0 / (200.0 * 2.5), 0.0), 0.000001);

        // an EPS particle uses its own friction and its diameter as effective length
        let e = Particle::Eps(Eps::new(10000, Vec2::from_float(0.0), Vec2::new(1.0, 0.0), 0.25));
        let v = integrator.velocity(&e, &Vec2::new(0.0, 50.0));
        assert_eq_vec2!(v, Vec2::new(0.0, 50.0 / (100.0 * 0.5)), 0.000001);
    }

    #[test]
    fn position_advances_linearly_test() {
        // a single particle under constant force travels with slope F / (eta * L)
        let integrator = OverdampedIntegrator::new(200.0, 200.0);
        let mut c = cell(2.0);
        let force = Vec2::new(80.0, 0.0);
        let dt = 0.1;
        for _ in 0..10 {
            let v = integrator.velocity(&c, &force);
            integrator.advance(&mut c, &v, 0.0, dt);
        }
        let expected = 80.0 / (200.0 * 2.0);
        assert_eq_float!(c.position().x, expected * 1.0, 0.000001);
        assert_eq_float!(c.position().y, 0.0, 0.000001);
    }

    #[test]
    fn angular_velocity_formula_test() {
        let integrator = OverdampedIntegrator::new(200.0, 200.0);
        let c = cell(2.0);
        let omega = integrator.angular_velocity(&c, 10.0);
        assert_eq_float!(omega, 12.0 * 10.0 / (200.0 * 8.0), 0.000001);
    }

    #[test]
    fn angular_velocity_is_clamped_test() {
        let integrator = OverdampedIntegrator::new(1.0, 1.0);
        let c = cell(1.0);
        assert_eq_float!(integrator.angular_velocity(&c, 1.0e9), OMEGA_MAX, 1e-12);
        assert_eq_float!(integrator.angular_velocity(&c, -1.0e9), -OMEGA_MAX, 1e-12);
    }

    #[test]
    fn degenerate_friction_yields_zero_velocity_test() {
        let integrator = OverdampedIntegrator::new(0.0, -1.0);
        let c = cell(2.0);
        assert_eq!(integrator.velocity(&c, &Vec2::new(100.0, 0.0)).length(), 0.0);
        assert_eq!(integrator.angular_velocity(&c, 5.0), 0.0);
    }

    #[test]
    fn orientation_stays_normalised_test() {
        let integrator = OverdampedIntegrator::new(200.0, 200.0);
        let mut c = cell(2.0);
        for k in 0..1000 {
            let omega = (k as f64 * 0.37).sin() * 3.0;
            integrator.advance(&mut c, &Vec2::from_float(0.0), omega, 0.1);
            assert!((c.orientation().length() - 1.0).abs() <= 1e-9);
        }
    }

    #[test]
    fn rotation_angle_matches_omega_dt_test() {
        let integrator = OverdampedIntegrator::new(200.0, 200.0);
        let mut c = cell(2.0);
        let omega = std::f64::consts::FRAC_PI_2;
        integrator.advance(&mut c, &Vec2::from_float(0.0), omega, 1.0);
        assert_eq_vec2!(c.orientation(), Vec2::new(0.0, 1.0), 0.000001);
    }
}
