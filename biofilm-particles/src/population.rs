use std::slice::{Iter, IterMut};

use log::debug;

use biofilm_numerical::Vec2;

use crate::particle::{Cell, Eps, Particle};

/// First identifier of the EPS numbering space; cell ids start at 0 and stay below it
pub const EPS_ID_BASE: u32 = 10_000;

/// Blueprint of a daughter cell staged by a division event.
///
/// Identifiers are not part of a blueprint: they are allocated by the population
/// when the staged events are merged, which keeps the numbering monotonic no matter
/// how many worker threads produced the events.
#[derive(Clone, Debug)]
pub struct NewCell {
    pub position: Vec2,
    pub orientation: Vec2,
    pub diameter: f64,
    pub length: f64,
}

/// Blueprint of an EPS particle staged by a secretion event
#[derive(Clone, Debug)]
pub struct NewEps {
    pub position: Vec2,
    pub orientation: Vec2,
    pub radius: f64,
}

/// A change to the population membership, staged during the parallel per-cell phase
/// and applied after the barrier.
#[derive(Clone, Debug)]
pub enum PopulationEvent {
    /// The mother at `mother` is replaced by its two daughters within the same tick
    Division { mother: usize, first: NewCell, second: NewCell },
    /// One new EPS particle appears; it becomes visible to forces next tick
    Secretion(NewEps),
}

/// An ordered, index-addressed collection of all particles of the colony.
///
/// Worker threads never touch the membership directly: divisions and secretions are
/// recorded as [`PopulationEvent`]s in per-worker journals and merged here, on the
/// driver thread, once the parallel phase has completed.
#[derive(Clone)]
pub struct Population {
    particles: Vec<Particle>,
    next_cell_id: u32,
    next_eps_id: u32,
}

impl Population {
    pub fn new() -> Population {
        Population { particles: Vec::new(), next_cell_id: 0, next_eps_id: EPS_ID_BASE }
    }

    /// Appends a new cell, allocating its identifier; returns the allocated id
    pub fn add_cell(&mut self, position: Vec2, orientation: Vec2, diameter: f64, length: f64) -> u32 {
        let id = self.next_cell_id;
        self.next_cell_id += 1;
        self.particles.push(Particle::Cell(Cell::new(id, position, orientation, diameter, length)));
        return id;
    }

    /// Appends a new EPS particle, allocating its identifier; returns the allocated id
    pub fn add_eps(&mut self, position: Vec2, orientation: Vec2, radius: f64) -> u32 {
        let id = self.next_eps_id;
        self.next_eps_id += 1;
        self.particles.push(Particle::Eps(Eps::new(id, position, orientation, radius)));
        return id;
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particle(&self, i: usize) -> &Particle {
        &self.particles[i]
    }

    pub fn particle_mut(&mut self, i: usize) -> &mut Particle {
        &mut self.particles[i]
    }

    pub fn iter(&self) -> Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, Particle> {
        self.particles.iter_mut()
    }

    pub fn as_slice(&self) -> &[Particle] {
        self.particles.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        self.particles.as_mut_slice()
    }

    pub fn count_cells(&self) -> usize {
        self.particles.iter().filter(|p| p.is_cell()).count()
    }

    pub fn count_eps(&self) -> usize {
        self.particles.len() - self.count_cells()
    }

    /// Copies all particle centres into the given buffer, reusing its allocation.
    /// The spatial index is rebuilt from this array once per tick.
    pub fn copy_positions(&self, out: &mut Vec<Vec2>) {
        out.clear();
        out.extend(self.particles.iter().map(|p| p.position()));
    }

    /// Merges staged membership changes: removes every divided mother, then appends
    /// daughters and secreted EPS in event order.
    ///
    /// The merge runs on the driver thread. Identifiers are allocated here, so the
    /// numbering is monotonic and the resulting list is the same for any worker count,
    /// provided the journals were concatenated in worker-index order.
    pub fn apply_events(&mut self, events: &[PopulationEvent]) {
        if events.is_empty() {
            return;
        }

        let mut removed = vec![false; self.particles.len()];
        let mut n_divisions = 0;
        let mut n_secretions = 0;
        for event in events {
            if let PopulationEvent::Division { mother, .. } = event {
                removed[*mother] = true;
                n_divisions += 1;
            } else {
                n_secretions += 1;
            }
        }

        if n_divisions > 0 {
            let mut i = 0;
            self.particles.retain(|_| {
                let keep = !removed[i];
                i += 1;
                keep
            });
        }

        for event in events {
            match event {
                PopulationEvent::Division { first, second, .. } => {
                    self.add_cell(first.position, first.orientation, first.diameter, first.length);
                    self.add_cell(second.position, second.orientation, second.diameter, second.length);
                }
                PopulationEvent::Secretion(eps) => {
                    self.add_eps(eps.position, eps.orientation, eps.radius);
                }
            }
        }
        debug!("merged {} division(s) and {} secretion(s); population size is now {}",
            n_divisions, n_secretions, self.particles.len());
    }
}
