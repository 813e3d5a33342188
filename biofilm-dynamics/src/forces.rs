use rand::Rng;

use biofilm_numerical::Vec2;
use biofilm_particles::{contact_point, overlap, Particle};

/// Below this centre-to-centre distance the contact normal degenerates and the
/// kernels fall back to their documented defaults
const DEGENERACY_EPSILON: f64 = 1e-9;

/// Amplitude of the uniform random kick, per component
const RANDOM_FORCE_AMPLITUDE: f64 = 0.001;

/// Pairwise force and torque kernels.
///
/// Every kernel is a pure function of the particles it is given: forces from
/// different neighbours are summed independently by the caller and no kernel
/// mutates any state. Torques are scalars, positive counter-clockwise.
#[derive(Clone, Debug)]
pub struct ForceField {
    /// elastic modulus for cell-cell contacts
    pub e_cell_cell: f64,
    /// elastic modulus for EPS-EPS contacts
    pub e_eps_eps: f64,
    /// elastic modulus for mixed contacts
    pub e_eps_cell: f64,
    /// reference contact diameter of the Hertzian law
    pub d0: f64,
    /// magnitude of the motility force along a cell's axis
    pub motility: f64,
}

impl ForceField {
    pub fn new(e_cell_cell: f64, e_eps_eps: f64, e_eps_cell: f64, d0: f64, motility: f64) -> ForceField {
        ForceField { e_cell_cell, e_eps_eps, e_eps_cell, d0, motility }
    }

    /// Elastic modulus selected by the variants of the interacting pair
    fn modulus(&self, a: &Particle, b: &Particle) -> f64 {
        match (a.is_cell(), b.is_cell()) {
            (true, true) => self.e_cell_cell,
            (false, false) => self.e_eps_eps,
            _ => self.e_eps_cell,
        }
    }

    /// Hertzian soft repulsion exerted on `a` by its neighbour `b`.
    ///
    /// With penetration depth `h` the magnitude is `E * sqrt(d0) * h^(3/2)`; the force
    /// acts along the centre-to-centre direction, pushing `a` away from `b`. Coincident
    /// centres fall back to the `(1, 0)` direction.
    pub fn repulsion(&self, a: &Particle, b: &Particle) -> Vec2 {
        let h = overlap(a, b);
        if h <= 0.0 {
            return Vec2::from_float(0.0);
        }
        let magnitude = self.modulus(a, b) * self.d0.sqrt() * h.powf(1.5);
        let towards_a = a.position() - b.position();
        let normal = if towards_a.length() <= DEGENERACY_EPSILON {
            Vec2::new(1.0, 0.0)
        } else {
            towards_a.normalized()
        };
        return normal * magnitude;
    }

    /// Constant-magnitude motility force along the long axis; zero for EPS particles
    pub fn motility_force(&self, p: &Particle) -> Vec2 {
        match p {
            Particle::Cell(c) => c.orientation * self.motility,
            Particle::Eps(_) => Vec2::from_float(0.0),
        }
    }

    /// Thermal kick with each component drawn uniformly from the fixed amplitude range,
    /// independent of the particle state
    pub fn random_kick<R: Rng>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(
            rng.gen_range(-RANDOM_FORCE_AMPLITUDE..=RANDOM_FORCE_AMPLITUDE),
            rng.gen_range(-RANDOM_FORCE_AMPLITUDE..=RANDOM_FORCE_AMPLITUDE),
        )
    }

    /// Torque about the centre of `a` produced by the repulsive contact with `b`:
    /// the 2D scalar cross product of the contact lever arm and the repulsion force
    pub fn repulsion_torque(&self, a: &Particle, b: &Particle) -> f64 {
        let force = self.repulsion(a, b);
        if force.length_squared() == 0.0 {
            return 0.0;
        }
        let p = contact_point(a, b, DEGENERACY_EPSILON);
        let lever = p - a.position();
        return Vec2::cross(&lever, &force);
    }
}
