use std::f64::consts::PI;

use biofilm_numerical::Vec2;

/// A bacterial cell, modelled as a spherocylinder.
///
/// The shape is a cylindrical body of length `length - diameter` laid along `orientation`,
/// capped with two hemispheres of radius `diameter / 2`. A freshly divided cell has
/// `length == diameter`, i.e. no cylindrical body at all.
#[derive(Clone, Debug)]
pub struct Cell {
    pub id: u32,
    pub position: Vec2,
    /// unit vector along the long axis; renormalised after every rotation update
    pub orientation: Vec2,
    pub diameter: f64,
    pub length: f64,
}

impl Cell {
    pub fn new(id: u32, position: Vec2, orientation: Vec2, diameter: f64, length: f64) -> Cell {
        Cell { id, position, orientation, diameter, length }
    }

    /// Radius of the cylindrical body and of both hemispherical caps
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Surface area of this spherocylinder.
    ///
    /// ```
    /// # use biofilm_numerical::Vec2;
    /// # use biofilm_particles::Cell;
    /// // a cell with no cylindrical body is just a disk
    /// let c = Cell::new(0, Vec2::from_float(0.0), Vec2::new(1.0, 0.0), 1.0, 1.0);
    /// assert!((c.area() - std::f64::consts::PI * 0.25).abs() < 0.000001);
    /// ```
    pub fn area(&self) -> f64 {
        let r = self.radius();
        return PI * r * r + 2.0 * r * (self.length - self.diameter);
    }

    /// Endpoints of the cylindrical axis segment, excluding the hemispherical caps.
    ///
    /// The body length is `max(0, length - diameter)`; for a cell that has not grown yet
    /// both endpoints coincide with the centre.
    pub fn axis_endpoints(&self) -> (Vec2, Vec2) {
        let half_body = (self.length - self.diameter).max(0.0) / 2.0;
        let offset = self.orientation * half_body;
        return (self.position - offset, self.position + offset);
    }

    /// Centres of the two hemispherical caps, offset by half the total length
    pub fn cap_centres(&self) -> (Vec2, Vec2) {
        let offset = self.orientation * (self.length / 2.0);
        return (self.position - offset, self.position + offset);
    }
}

/// A spherical particle of extracellular polymeric substance.
///
/// EPS particles are secreted by cells; once created they only move, they never
/// grow, divide nor disappear.
#[derive(Clone, Debug)]
pub struct Eps {
    pub id: u32,
    pub position: Vec2,
    pub orientation: Vec2,
    pub radius: f64,
}

impl Eps {
    pub fn new(id: u32, position: Vec2, orientation: Vec2, radius: f64) -> Eps {
        Eps { id, position, orientation, radius }
    }

    /// Area of the disk occupied by this particle
    pub fn area(&self) -> f64 {
        return PI * self.radius * self.radius;
    }

    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}

/// A particle of the simulated colony: either a bacterial cell or an EPS sphere.
///
/// All shape-specific branching lives in the contact module; everything above it
/// treats particles uniformly through the accessors below.
#[derive(Clone, Debug)]
pub enum Particle {
    Cell(Cell),
    Eps(Eps),
}

impl Particle {
    pub fn id(&self) -> u32 {
        match self {
            Particle::Cell(c) => c.id,
            Particle::Eps(e) => e.id,
        }
    }

    pub fn position(&self) -> Vec2 {
        match self {
            Particle::Cell(c) => c.position,
            Particle::Eps(e) => e.position,
        }
    }

    pub fn set_position(&mut self, p: Vec2) {
        match self {
            Particle::Cell(c) => c.position = p,
            Particle::Eps(e) => e.position = p,
        }
    }

    pub fn orientation(&self) -> Vec2 {
        match self {
            Particle::Cell(c) => c.orientation,
            Particle::Eps(e) => e.orientation,
        }
    }

    pub fn set_orientation(&mut self, o: Vec2) {
        match self {
            Particle::Cell(c) => c.orientation = o,
            Particle::Eps(e) => e.orientation = o,
        }
    }

    /// Radius of the circular cross-section: half the diameter for a cell,
    /// the disk radius for an EPS particle
    pub fn radius(&self) -> f64 {
        match self {
            Particle::Cell(c) => c.radius(),
            Particle::Eps(e) => e.radius,
        }
    }

    /// Effective hydrodynamic length of this particle: the spherocylinder length for
    /// a cell, the diameter for an EPS sphere
    pub fn effective_length(&self) -> f64 {
        match self {
            Particle::Cell(c) => c.length,
            Particle::Eps(e) => e.radius * 2.0,
        }
    }

    /// Area contributed to the local density sums
    pub fn area(&self) -> f64 {
        match self {
            Particle::Cell(c) => c.area(),
            Particle::Eps(e) => e.area(),
        }
    }

    pub fn is_cell(&self) -> bool {
        matches!(self, Particle::Cell(_))
    }

    pub fn as_cell(&self) -> Option<&Cell> {
        match self {
            Particle::Cell(c) => Some(c),
            Particle::Eps(_) => None,
        }
    }

    pub fn as_cell_mut(&mut self) -> Option<&mut Cell> {
        match self {
            Particle::Cell(c) => Some(c),
            Particle::Eps(_) => None,
        }
    }
}
