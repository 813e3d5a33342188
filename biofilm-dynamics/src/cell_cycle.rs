use std::f64::consts::{PI, TAU};

use rand::Rng;

use biofilm_numerical::Vec2;
use biofilm_particles::{Cell, NewCell, NewEps};

/// Daughter orientations are jittered by an independent uniform angle within this bound
const DIVISION_JITTER: f64 = 8.0 * PI / 180.0;

/// Growth, division and EPS secretion rules, evaluated per cell per tick.
///
/// All rules are pure: they read an immutable snapshot of the colony and return
/// either a length increment or a staged membership event, never touching the
/// population themselves.
#[derive(Clone, Debug)]
pub struct CellCycle {
    growth_rate: f64,
    division_length: f64,
    eps_diameter: f64,
    eps_production_rate: f64,
    cell_density_threshold: f64,
    eps_density_threshold: f64,
    sensing_radius: f64,
    /// reference area of an average cell, `pi*(d/2)^2 + 1.5*(d/2)*l_c`
    average_area: f64,
}

impl CellCycle {
    pub fn new(growth_rate: f64, division_length: f64, diameter: f64, eps_diameter: f64,
            eps_production_rate: f64, cell_density_threshold: f64,
            eps_density_threshold: f64, sensing_radius: f64) -> CellCycle {
        let r = diameter / 2.0;
        CellCycle {
            growth_rate,
            division_length,
            eps_diameter,
            eps_production_rate,
            cell_density_threshold,
            eps_density_threshold,
            sensing_radius,
            average_area: PI * r * r + 1.5 * r * division_length,
        }
    }

    /// Radius of the neighbourhood sensed by the secretion rule
    pub fn sensing_radius(&self) -> f64 {
        self.sensing_radius
    }

    /// Length gained over one tick under the local Monod factor `m`.
    ///
    /// The linear rate is scaled by the cell's area relative to the average cell,
    /// so long cells elongate faster than fresh daughters.
    pub fn growth_increment(&self, cell: &Cell, monod: f64, dt: f64) -> f64 {
        return self.growth_rate * (cell.area() / self.average_area) * monod * dt;
    }

    /// A cell keeps growing below the critical length and divides upon reaching it
    pub fn should_divide(&self, cell: &Cell) -> bool {
        return cell.length >= self.division_length;
    }

    /// Splits a mother at its midpoint into two half-length daughters.
    ///
    /// Daughter centres sit at `+/- length/4` along the mother's orientation, so the
    /// total cell length is conserved exactly. Each daughter orientation is the
    /// mother's, rotated by its own uniform jitter angle.
    pub fn divide<R: Rng>(&self, mother: &Cell, rng: &mut R) -> (NewCell, NewCell) {
        let half_length = mother.length / 2.0;
        let offset = mother.orientation * (half_length / 2.0);
        let first_angle = rng.gen_range(-DIVISION_JITTER..=DIVISION_JITTER);
        let second_angle = rng.gen_range(-DIVISION_JITTER..=DIVISION_JITTER);

        let first = NewCell {
            position: mother.position - offset,
            orientation: mother.orientation.rotated(first_angle).normalized(),
            diameter: mother.diameter,
            length: half_length,
        };
        let second = NewCell {
            position: mother.position + offset,
            orientation: mother.orientation.rotated(second_angle).normalized(),
            diameter: mother.diameter,
            length: half_length,
        };
        return (first, second);
    }

    /// Attempts EPS secretion for a cell sitting in local cell area density `cell_density`
    /// and EPS area density `eps_density`.
    ///
    /// Secretion requires a crowded cell neighbourhood not yet saturated with EPS;
    /// an eligible cell secretes with probability `k_eps / 10` per tick. The new
    /// particle is placed one EPS diameter away from the cell centre under a uniform
    /// random angle, which also becomes its orientation.
    pub fn secretion_attempt<R: Rng>(&self, cell: &Cell, cell_density: f64,
            eps_density: f64, rng: &mut R) -> Option<NewEps> {
        if cell_density < self.cell_density_threshold || eps_density >= self.eps_density_threshold {
            return None;
        }
        if rng.gen::<f64>() >= self.eps_production_rate / 10.0 {
            return None;
        }
        let angle = rng.gen_range(0.0..TAU);
        let direction = Vec2::from_angle(angle);
        return Some(NewEps {
            position: cell.position + direction * self.eps_diameter,
            orientation: direction,
            radius: self.eps_diameter / 2.0,
        });
    }
}
