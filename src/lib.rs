pub mod core;

// Re-export commonly used types
pub use crate::core::errors::SimulationError;
pub use crate::core::params::SimulationParameters;
pub use crate::core::random::{RandomSource, SeededRandomSource};
pub use crate::core::simulation_engine::{SimulationEngine, SimulationResult};
