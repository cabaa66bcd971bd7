use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MandelbrotColourMapError {
    #[error("iterations {iterations} exceeds maximum {max_iterations}")]
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}
