use log::info;
use rand_distr::{Distribution, Normal};
use rayon::prelude::*;

use biofilm_io::SimulationParameters;
use biofilm_numerical::{random_unit_versor, Vec2};
use biofilm_particles::{GridHash, Particle, Population, PopulationEvent};

use crate::cell_cycle::CellCycle;
use crate::error::SimulationError;
use crate::forces::ForceField;
use crate::integrator::OverdampedIntegrator;
use crate::nutrient::NutrientField;
use crate::observers::Observer;
use crate::rng::RandomStreams;

/// Interaction cutoff radius; also the spacing of the spatial hash, so a 3x3 tile
/// block is guaranteed to cover the whole neighbourhood of any particle
pub const NEIGHBOR_CUTOFF: f64 = 4.0;

/// The biofilm simulation driver.
///
/// Owns the whole mutable state of a run and advances it tick by tick through a
/// fixed sequence of phases with a barrier between each:
///
/// 1. nutrient diffusion and consumption,
/// 2. parallel growth, then division/secretion staging from an immutable snapshot,
/// 3. merge of the staged membership changes,
/// 4. spatial index rebuild,
/// 5. parallel force/torque accumulation into scratch arrays,
/// 6. parallel integration,
/// 7. frame emission to the observers.
///
/// Within a phase every index is owned by exactly one rayon worker; phases never
/// observe state mutated concurrently by another thread.
pub struct Simulation {
    params: SimulationParameters,
    population: Population,
    hash: GridHash,
    nutrient: NutrientField,
    forces: ForceField,
    integrator: OverdampedIntegrator,
    cycle: CellCycle,
    streams: RandomStreams,
    observers: Vec<Box<dyn Observer>>,
    positions: Vec<Vec2>,
    velocities: Vec<Vec2>,
    omegas: Vec<f64>,
    tick: usize,
}

impl Simulation {
    /// Assembles a simulation from an immutable parameter record; the colony is
    /// empty until [`start()`](Simulation::start) seeds the initial cluster
    pub fn new(params: &SimulationParameters) -> Simulation {
        let forces = ForceField::new(params.em_cell_cell, params.em_eps_eps, params.em_eps_cell,
            params.diameter, params.motility_force);
        let integrator = OverdampedIntegrator::new(params.friction_coefficient_cell,
            params.friction_coefficient_eps);
        let cycle = CellCycle::new(params.growth_rate, params.division_length, params.diameter,
            params.eps_diameter, params.eps_production_rate, params.cell_density_threshold,
            params.eps_density_threshold, params.local_sensing_radius);
        let nutrient = NutrientField::new(params.grid_width, params.grid_height,
            params.grid_cell_size, params.grid_cell_size, params.diffusion_rate,
            params.nutrient_consumption_rate, params.nutrient_concentration);

        Simulation {
            params: params.clone(),
            population: Population::new(),
            hash: GridHash::new(NEIGHBOR_CUTOFF),
            nutrient,
            forces,
            integrator,
            cycle,
            streams: RandomStreams::new(params.random_seed),
            observers: Vec::new(),
            positions: Vec::new(),
            velocities: Vec::new(),
            omegas: Vec::new(),
            tick: 0,
        }
    }

    /// Seeds the initial cluster: `initial_count` fresh cells jittered around the
    /// domain centre, each with a uniform random orientation
    pub fn start(&mut self) {
        let mut rng = self.streams.bootstrap_stream();
        let centre = Vec2::new(self.params.width / 2.0, self.params.height / 2.0);
        let jitter = Normal::new(0.0, self.params.diameter).unwrap();
        for _ in 0..self.params.initial_count {
            let offset = Vec2::new(jitter.sample(&mut rng), jitter.sample(&mut rng));
            let orientation = random_unit_versor(&mut rng);
            self.population.add_cell(centre + offset, orientation,
                self.params.diameter, self.params.diameter);
        }
        self.refresh_index();
        info!("started with {} cell(s) around ({:.1}, {:.1})",
            self.params.initial_count, centre.x, centre.y);
    }

    pub fn add_observer(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Mutable access to the colony, for assembling scenarios by hand;
    /// call [`refresh_index()`](Simulation::refresh_index) afterwards
    pub fn population_mut(&mut self) -> &mut Population {
        &mut self.population
    }

    pub fn nutrient(&self) -> &NutrientField {
        &self.nutrient
    }

    pub fn tick(&self) -> usize {
        self.tick
    }

    /// Rebuilds the spatial index from the current particle centres
    pub fn refresh_index(&mut self) {
        self.population.copy_positions(&mut self.positions);
        self.hash.rebuild(&self.positions);
    }

    /// Advances the simulation by one tick
    pub fn step(&mut self) -> Result<(), SimulationError> {
        let dt = self.params.delta_time;
        let tick = self.tick;

        // ---------- nutrient field: area accumulation, then the parallel FD step
        self.nutrient.clear_areas();
        for p in self.population.iter() {
            if let Particle::Cell(c) = p {
                self.nutrient.accumulate_area(c.position.x, c.position.y, c.area());
            }
        }
        self.nutrient.step(dt);

        // ---------- growth; only the cell's own length is written
        {
            let nutrient = &self.nutrient;
            let cycle = &self.cycle;
            self.population.as_mut_slice().par_iter_mut().for_each(|p| {
                if let Particle::Cell(c) = p {
                    let monod = nutrient.monod_at(c.position.x, c.position.y);
                    let dl = cycle.growth_increment(c, monod, dt);
                    if dl > 0.0 {
                        c.length += dl;
                    }
                }
            });
        }

        // ---------- division and secretion, staged against an immutable snapshot;
        // the index built at the end of the previous tick narrows the density queries,
        // the exact distance filter runs on current positions
        let staged: Vec<Option<PopulationEvent>> = {
            let population = &self.population;
            let hash = &self.hash;
            let cycle = &self.cycle;
            let streams = &self.streams;
            (0..population.len())
                .into_par_iter()
                .map(|i| {
                    let cell = population.particle(i).as_cell()?;
                    let mut rng = streams.cell_cycle_stream(tick as u64, cell.id as u64);
                    if cycle.should_divide(cell) {
                        let (first, second) = cycle.divide(cell, &mut rng);
                        return Some(PopulationEvent::Division { mother: i, first, second });
                    }
                    let (cell_density, eps_density) =
                        local_densities(population, hash, &cell.position, cycle.sensing_radius());
                    cycle.secretion_attempt(cell, cell_density, eps_density, &mut rng)
                        .map(PopulationEvent::Secretion)
                })
                .collect()
        };
        let events: Vec<PopulationEvent> = staged.into_iter().flatten().collect();
        self.population.apply_events(&events);

        // ---------- the new membership needs a fresh spatial index
        self.refresh_index();

        // ---------- force, torque and velocity computation into scratch arrays
        let n = self.population.len();
        self.velocities.resize(n, Vec2::from_float(0.0));
        self.omegas.resize(n, 0.0);
        {
            let population = &self.population;
            let positions = &self.positions;
            let hash = &self.hash;
            let forces = &self.forces;
            let integrator = &self.integrator;
            let streams = &self.streams;
            let cutoff_sq = NEIGHBOR_CUTOFF * NEIGHBOR_CUTOFF;
            self.velocities
                .par_iter_mut()
                .zip(self.omegas.par_iter_mut())
                .enumerate()
                .for_each(|(i, (v_out, w_out))| {
                    let a = population.particle(i);
                    let mut rng = streams.force_stream(tick as u64, a.id() as u64);
                    let mut force = forces.motility_force(a);
                    force += &forces.random_kick(&mut rng);
                    let mut torque = 0.0;
                    hash.for_each_neighbor(&positions[i], |j| {
                        if j == i {
                            return;
                        }
                        if positions[i].distance_square_to(&positions[j]) > cutoff_sq {
                            return;
                        }
                        let b = population.particle(j);
                        force += &forces.repulsion(a, b);
                        if a.is_cell() {
                            torque += forces.repulsion_torque(a, b);
                        }
                    });
                    *v_out = integrator.velocity(a, &force);
                    *w_out = integrator.angular_velocity(a, torque);
                });
        }

        // ---------- integration
        {
            let integrator = &self.integrator;
            let velocities = &self.velocities;
            let omegas = &self.omegas;
            self.population.as_mut_slice().par_iter_mut().enumerate().for_each(|(i, p)| {
                integrator.advance(p, &velocities[i], omegas[i], dt);
            });
        }

        // ---------- emit one frame
        for observer in self.observers.iter_mut() {
            observer.observe(&self.population, tick)?;
        }

        self.tick += 1;
        return Ok(());
    }

    /// Runs the configured number of ticks, then flushes all observers
    pub fn run(&mut self) -> Result<(), SimulationError> {
        let n_ticks = self.params.num_ticks;
        let n_nodes = (self.nutrient.width() * self.nutrient.height()) as f64;
        info!("running {} tick(s) with dt = {}", n_ticks, self.params.delta_time);
        for _ in 0..n_ticks {
            self.step()?;
            if self.tick % 100 == 0 {
                info!("tick {:>6}: {} cell(s), {} EPS particle(s), mean nutrient {:.4}",
                    self.tick, self.population.count_cells(), self.population.count_eps(),
                    self.nutrient.total_concentration() / n_nodes);
            }
        }
        for observer in self.observers.iter_mut() {
            observer.flush()?;
        }
        return Ok(());
    }
}

/// Sums cell and EPS areas over all particles whose centre lies within `radius`
/// of a given centre; the sensing particle itself contributes to its own sums
fn local_densities(population: &Population, hash: &GridHash, centre: &Vec2, radius: f64) -> (f64, f64) {
    let mut cell_density = 0.0;
    let mut eps_density = 0.0;
    hash.for_each_within(centre.x, centre.y, radius, |j| {
        let p = population.particle(j);
        if p.position().distance_to(centre) <= radius {
            match p {
                Particle::Cell(c) => cell_density += c.area(),
                Particle::Eps(e) => eps_density += e.area(),
            }
        }
    });
    return (cell_density, eps_density);
}
