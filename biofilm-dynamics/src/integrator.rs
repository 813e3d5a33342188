use std::f64::consts::PI;

use biofilm_numerical::Vec2;
use biofilm_particles::Particle;

/// Angular velocities are clamped to this magnitude for numerical safety
pub const OMEGA_MAX: f64 = 4.0 * PI;

/// Overdamped equations of motion.
///
/// Inertia is neglected: the linear velocity is `F / (eta * L)` and the angular
/// velocity `12 * tau / (eta * L^3)`, where `eta` is the per-variant friction
/// coefficient and `L` the effective hydrodynamic length (spherocylinder length for
/// a cell, diameter for an EPS sphere). Degenerate inputs (non-positive `eta` or
/// `L`) yield zero velocities instead of propagating a division by zero.
#[derive(Clone, Debug)]
pub struct OverdampedIntegrator {
    eta_cell: f64,
    eta_eps: f64,
    omega_max: f64,
}

impl OverdampedIntegrator {
    pub fn new(eta_cell: f64, eta_eps: f64) -> OverdampedIntegrator {
        OverdampedIntegrator { eta_cell, eta_eps, omega_max: OMEGA_MAX }
    }

    fn friction(&self, p: &Particle) -> f64 {
        match p {
            Particle::Cell(_) => self.eta_cell,
            Particle::Eps(_) => self.eta_eps,
        }
    }

    /// Linear velocity of a particle under the given summed force
    pub fn velocity(&self, p: &Particle, force: &Vec2) -> Vec2 {
        let eta = self.friction(p);
        let l = p.effective_length();
        if eta <= 0.0 || l <= 0.0 {
            return Vec2::from_float(0.0);
        }
        return *force * (1.0 / (eta * l));
    }

    /// Angular velocity of a particle under the given summed torque, clamped to
    /// `[-OMEGA_MAX, OMEGA_MAX]`
    pub fn angular_velocity(&self, p: &Particle, torque: f64) -> f64 {
        let eta = self.friction(p);
        let l = p.effective_length();
        if eta <= 0.0 || l <= 0.0 {
            return 0.0;
        }
        let omega = 12.0 * torque / (eta * l * l * l);
        return omega.clamp(-self.omega_max, self.omega_max);
    }

    /// Advances position and orientation over one timestep.
    ///
    /// The rotated orientation is renormalised to keep it a unit vector; if the
    /// rotation degenerates to a zero vector the orientation is left unchanged.
    pub fn advance(&self, p: &mut Particle, v: &Vec2, omega: f64, dt: f64) {
        p.set_position(p.position() + *v * dt);
        let rotated = p.orientation().rotated(omega * dt);
        if rotated.length_squared() > 0.0 {
            p.set_orientation(rotated.normalized());
        }
    }
}
