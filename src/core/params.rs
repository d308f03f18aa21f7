use serde::{Deserialize, Serialize};

use super::errors::SimulationError;

/// Input parameters for one simulation run. Immutable once handed to the
/// engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Arrival rate of the discretized exponential inter-arrival distribution
    pub lambda: f64,
    /// Mean of the Gaussian service-time sample
    pub mu: f64,
    /// Standard deviation of the Gaussian service-time sample
    pub sigma: f64,
    /// Number of patients to generate
    pub patients: usize,
    /// Number of parallel servers
    pub servers: usize,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            lambda: 2.0,
            mu: 2.58,
            sigma: 2.58,
            patients: 5,
            servers: 1,
        }
    }
}

impl SimulationParameters {
    /// Reject out-of-range or non-finite parameters before any sampling
    /// happens.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.lambda.is_finite() || self.lambda <= 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "lambda must be positive and finite, got {}",
                self.lambda
            )));
        }
        if !self.mu.is_finite() {
            return Err(SimulationError::InvalidParameter(format!(
                "mu must be finite, got {}",
                self.mu
            )));
        }
        if !self.sigma.is_finite() || self.sigma < 0.0 {
            return Err(SimulationError::InvalidParameter(format!(
                "sigma must be non-negative and finite, got {}",
                self.sigma
            )));
        }
        if self.patients < 1 {
            return Err(SimulationError::InvalidParameter(
                "patient count must be at least 1".to_string(),
            ));
        }
        if self.servers < 1 {
            return Err(SimulationError::InvalidParameter(
                "server count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
