mod config;
mod trajectory;
mod utils;

pub use config::{load_parameters, parse_parameters, ConfigError, SimulationParameters};
pub use trajectory::{TrajectoryWriter, ROTATION_LINE_LIMIT, TRAJECTORY_HEADER};
pub use utils::out_writer;
