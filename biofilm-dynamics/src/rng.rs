use rand::rngs::SmallRng;
use rand::SeedableRng;

const CELL_CYCLE_SALT: u64 = 0x1;
const FORCE_SALT: u64 = 0x2;
const BOOTSTRAP_SALT: u64 = 0x3;

/// splitmix64 finalizer, used to spread structured keys over the seed space
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    return z ^ (z >> 31);
}

/// Factory of all random number streams used by a simulation.
///
/// Every stochastic decision draws from a fresh [`SmallRng`] keyed by the root
/// seed, the tick number and the identifier of the particle making the decision.
/// A rerun with the same seed therefore reproduces the simulation exactly, and
/// the outcome never depends on how particles were distributed over worker
/// threads. The cell-cycle and force phases are salted differently so the two
/// draws of one particle within one tick never share a stream.
#[derive(Clone)]
pub struct RandomStreams {
    seed: u64,
}

impl RandomStreams {
    pub fn new(seed: u64) -> RandomStreams {
        RandomStreams { seed }
    }

    fn stream(&self, salt: u64, tick: u64, id: u64) -> SmallRng {
        let key = mix(mix(mix(self.seed ^ salt) ^ tick) ^ id);
        return SmallRng::seed_from_u64(key);
    }

    /// Stream driving growth, division angles and secretion draws of one particle at one tick
    pub fn cell_cycle_stream(&self, tick: u64, id: u64) -> SmallRng {
        self.stream(CELL_CYCLE_SALT, tick, id)
    }

    /// Stream driving the random force of one particle at one tick
    pub fn force_stream(&self, tick: u64, id: u64) -> SmallRng {
        self.stream(FORCE_SALT, tick, id)
    }

    /// Stream used once, to lay out the initial cluster
    pub fn bootstrap_stream(&self) -> SmallRng {
        self.stream(BOOTSTRAP_SALT, 0, 0)
    }
}
