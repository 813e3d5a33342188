use std::io;

use biofilm_io::TrajectoryWriter;
use biofilm_particles::{Particle, Population};

/// Takes per-tick observations of the simulated colony.
///
/// The driver calls [`observe()`](Observer::observe) once per tick, after the
/// integration phase. Observers write to external sinks, so both methods are
/// fallible; a failed observation is fatal to the tick loop.
pub trait Observer {
    /// Records one frame of the simulation
    fn observe(&mut self, population: &Population, tick: usize) -> io::Result<()>;

    /// Writes buffered data to the underlying sink
    fn flush(&mut self) -> io::Result<()>;

    fn name(&self) -> &str;
}

/// Observes the colony as rows of the rotating CSV trajectory.
///
/// Each frame contributes one row per particle, in list order: cells carry their
/// diameter and length, EPS particles report their disk diameter and a zero length.
pub struct CsvTrajectory {
    writer: TrajectoryWriter,
}

impl CsvTrajectory {
    pub fn new(writer: TrajectoryWriter) -> CsvTrajectory {
        CsvTrajectory { writer }
    }
}

impl Observer for CsvTrajectory {
    fn observe(&mut self, population: &Population, tick: usize) -> io::Result<()> {
        for particle in population.iter() {
            match particle {
                Particle::Cell(c) => {
                    self.writer.write_row(c.id, tick, "cell", c.position.x, c.position.y,
                        c.diameter, c.length, c.orientation.x, c.orientation.y)?;
                }
                Particle::Eps(e) => {
                    self.writer.write_row(e.id, tick, "eps", e.position.x, e.position.y,
                        e.diameter(), 0.0, e.orientation.x, e.orientation.y)?;
                }
            }
        }
        return self.writer.end_tick();
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn name(&self) -> &str {
        "CsvTrajectory"
    }
}
