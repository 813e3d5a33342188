mod particle;
mod population;
mod grid_hash;
mod contact;

pub use particle::{Cell, Eps, Particle};
pub use population::{NewCell, NewEps, Population, PopulationEvent, EPS_ID_BASE};
pub use grid_hash::GridHash;
pub use contact::{contact_point, min_distance, overlap};
