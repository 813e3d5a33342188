use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::warn;
use thiserror::Error;

/// Errors that may appear while loading a simulation configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("can't open configuration file {fname}: {source}")]
    /// The configuration file could not be opened for reading
    FileNotReadable { fname: String, source: std::io::Error },

    #[error("malformed value '{value}' for configuration key '{key}'")]
    /// A recognised key carries a value that does not parse as a number
    MalformedValue { key: String, value: String },
}

/// Immutable record of all simulation parameters.
///
/// The record is created once at start-up, either from [`Default`] or by
/// [`load_parameters()`], and threaded through every constructor; no component
/// reaches for a global configuration.
#[derive(Clone, Debug)]
pub struct SimulationParameters {
    /// domain width; informational, particles are free to drift outside
    pub width: f64,
    /// domain height; informational
    pub height: f64,
    /// number of cells in the initial cluster
    pub initial_count: usize,
    /// maximum cell length
    pub max_length: f64,
    /// cell diameter, also the reference contact diameter of the repulsion law
    pub diameter: f64,
    /// diameter of a secreted EPS particle
    pub eps_diameter: f64,
    /// linear growth rate
    pub growth_rate: f64,
    /// critical length triggering division
    pub division_length: f64,
    /// reserved; carried in the record but not used by the core rules
    pub division_rate: f64,
    /// EPS production rate constant
    pub eps_production_rate: f64,
    /// magnitude of the motility force along a cell's axis
    pub motility_force: f64,
    /// fallback elastic modulus for pairs not covered by the specific moduli
    pub repulsion_force: f64,
    /// elastic modulus for EPS-EPS contacts
    pub em_eps_eps: f64,
    /// elastic modulus for EPS-cell contacts
    pub em_eps_cell: f64,
    /// elastic modulus for cell-cell contacts
    pub em_cell_cell: f64,
    pub friction_coefficient_cell: f64,
    pub friction_coefficient_eps: f64,
    /// initial nutrient concentration
    pub nutrient_concentration: f64,
    pub nutrient_consumption_rate: f64,
    pub diffusion_rate: f64,
    /// local cell area density required before a cell may secrete EPS
    pub cell_density_threshold: f64,
    /// local EPS area density above which secretion stops
    pub eps_density_threshold: f64,
    /// radius of the neighbourhood sensed for the density sums
    pub local_sensing_radius: f64,
    pub grid_width: usize,
    pub grid_height: usize,
    /// physical spacing of the nutrient grid, same in both directions
    pub grid_cell_size: f64,
    pub delta_time: f64,
    pub num_ticks: usize,
    /// root seed of all random streams; reruns with the same seed reproduce bit-wise
    pub random_seed: u64,
}

impl Default for SimulationParameters {
    fn default() -> SimulationParameters {
        SimulationParameters {
            width: 800.0,
            height: 800.0,
            initial_count: 1,
            max_length: 5.0,
            diameter: 1.0,
            eps_diameter: 0.5,
            growth_rate: 3.5,
            division_length: 5.0,
            division_rate: 1.0,
            eps_production_rate: 1.0,
            motility_force: 300.0,
            repulsion_force: 100.0,
            em_eps_eps: 200.0,
            em_eps_cell: 200.0,
            em_cell_cell: 200.0,
            friction_coefficient_cell: 200.0,
            friction_coefficient_eps: 200.0,
            nutrient_concentration: 3.0,
            nutrient_consumption_rate: 1.0,
            diffusion_rate: 300.0,
            cell_density_threshold: 5.0,
            eps_density_threshold: 0.3,
            local_sensing_radius: 2.0,
            grid_width: 50,
            grid_height: 50,
            grid_cell_size: 10.0,
            delta_time: 0.1,
            num_ticks: 1000,
            random_seed: 0,
        }
    }
}

/// All keys the loader recognises; anything else in the file is reported and skipped
const RECOGNISED_KEYS: [&str; 29] = [
    "width", "height", "initial_count", "length", "diameter", "eps_diameter",
    "growth_rate", "division_length", "division_rate", "eps_production_rate",
    "motility_force", "repulsion_force", "em_eps_eps", "em_eps_cell", "em_cell_cell",
    "friction_coefficient_cell", "friction_coefficient_eps",
    "nutrient_concentration", "nutrient_consumption_rate", "diffusion_rate",
    "cell_density_threshold", "eps_density_threshold", "local_sensing_radius",
    "grid_width", "grid_height", "grid_cell_size", "delta_time", "num_ticks",
    "random_seed",
];

macro_rules! parse_number {
    ($key:expr, $value:expr, $type:ty) => {
        $value.parse::<$type>().map_err(|_| ConfigError::MalformedValue {
            key: $key.to_string(),
            value: $value.to_string(),
        })?
    };
}

/// Loads simulation parameters from an INI-style file.
///
/// Section headers and `#` comments are ignored; inline `#` comments are stripped.
/// Recognised keys missing from the file fall back to their defaults with a warning,
/// while a malformed number aborts start-up with [`ConfigError::MalformedValue`].
pub fn load_parameters(fname: &str) -> Result<SimulationParameters, ConfigError> {
    let file = File::open(Path::new(fname)).map_err(|e| ConfigError::FileNotReadable {
        fname: fname.to_string(),
        source: e,
    })?;
    return parse_parameters(BufReader::new(file));
}

/// Parses simulation parameters from any buffered reader; see [`load_parameters()`]
pub fn parse_parameters<R: BufRead>(reader: R) -> Result<SimulationParameters, ConfigError> {
    let mut params = SimulationParameters::default();
    let mut seen: Vec<String> = Vec::new();

    for line in reader.lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        // strip inline comments, then surrounding whitespace
        let line = match line.split_once('#') {
            Some((before, _)) => before.trim(),
            None => line.trim(),
        };
        if line.is_empty() || line.starts_with('[') {
            continue;
        }
        let (key, value) = match line.split_once('=') {
            Some((k, v)) => (k.trim(), v.trim()),
            None => {
                warn!("skipping configuration line without '=': '{}'", line);
                continue;
            }
        };

        match key {
            "width" => params.width = parse_number!(key, value, f64),
            "height" => params.height = parse_number!(key, value, f64),
            "initial_count" => params.initial_count = parse_number!(key, value, usize),
            "length" => params.max_length = parse_number!(key, value, f64),
            "diameter" => params.diameter = parse_number!(key, value, f64),
            "eps_diameter" => params.eps_diameter = parse_number!(key, value, f64),
            "growth_rate" => params.growth_rate = parse_number!(key, value, f64),
            "division_length" => params.division_length = parse_number!(key, value, f64),
            "division_rate" => params.division_rate = parse_number!(key, value, f64),
            "eps_production_rate" => params.eps_production_rate = parse_number!(key, value, f64),
            "motility_force" => params.motility_force = parse_number!(key, value, f64),
            "repulsion_force" => params.repulsion_force = parse_number!(key, value, f64),
            "em_eps_eps" => params.em_eps_eps = parse_number!(key, value, f64),
            "em_eps_cell" => params.em_eps_cell = parse_number!(key, value, f64),
            "em_cell_cell" => params.em_cell_cell = parse_number!(key, value, f64),
            "friction_coefficient_cell" => params.friction_coefficient_cell = parse_number!(key, value, f64),
            "friction_coefficient_eps" => params.friction_coefficient_eps = parse_number!(key, value, f64),
            "nutrient_concentration" => params.nutrient_concentration = parse_number!(key, value, f64),
            "nutrient_consumption_rate" => params.nutrient_consumption_rate = parse_number!(key, value, f64),
            "diffusion_rate" => params.diffusion_rate = parse_number!(key, value, f64),
            "cell_density_threshold" => params.cell_density_threshold = parse_number!(key, value, f64),
            "eps_density_threshold" => params.eps_density_threshold = parse_number!(key, value, f64),
            "local_sensing_radius" => params.local_sensing_radius = parse_number!(key, value, f64),
            "grid_width" => params.grid_width = parse_number!(key, value, usize),
            "grid_height" => params.grid_height = parse_number!(key, value, usize),
            "grid_cell_size" => params.grid_cell_size = parse_number!(key, value, f64),
            "delta_time" => params.delta_time = parse_number!(key, value, f64),
            "num_ticks" => params.num_ticks = parse_number!(key, value, usize),
            "random_seed" => params.random_seed = parse_number!(key, value, u64),
            _ => {
                warn!("unrecognised configuration key '{}' ignored", key);
                continue;
            }
        }
        seen.push(key.to_string());
    }

    for key in RECOGNISED_KEYS {
        if !seen.iter().any(|k| k == key) {
            warn!("configuration key '{}' not found, using its default value", key);
        }
    }

    return Ok(params);
}
