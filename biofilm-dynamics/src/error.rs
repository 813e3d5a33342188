use thiserror::Error;

/// Errors that may abort a running simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("can't write the trajectory: {0}")]
    /// The output sink failed; the tick loop terminates
    TrajectorySink(#[from] std::io::Error),
}
