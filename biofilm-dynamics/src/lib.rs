mod cell_cycle;
mod error;
mod forces;
mod integrator;
mod nutrient;
mod observers;
mod rng;
mod simulation;

pub use cell_cycle::CellCycle;
pub use error::SimulationError;
pub use forces::ForceField;
pub use integrator::{OverdampedIntegrator, OMEGA_MAX};
pub use nutrient::NutrientField;
pub use observers::{CsvTrajectory, Observer};
pub use rng::RandomStreams;
pub use simulation::{Simulation, NEIGHBOR_CUTOFF};
