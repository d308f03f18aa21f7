use std::f64::consts::PI;

use log::warn;

use super::errors::SimulationError;
use super::random::{RandomSource, MAX_REJECTION_ITERATIONS};

/// Draws integer service times from a rounded Gaussian sample.
///
/// Each value comes from the trigonometric Box-Muller transform and is
/// redrawn while the rounded result is below 1, so every returned service
/// time is an integer of at least 1 tick.
pub struct ServiceTimeSampler {
    mu: f64,
    sigma: f64,
}

impl ServiceTimeSampler {
    pub fn new(mu: f64, sigma: f64) -> Self {
        Self { mu, sigma }
    }

    /// Draw `count` service times.
    pub fn sample(
        &self,
        count: usize,
        random: &mut dyn RandomSource,
    ) -> Result<Vec<u64>, SimulationError> {
        let mut services = Vec::with_capacity(count);
        for _ in 0..count {
            services.push(self.sample_one(random)?);
        }
        Ok(services)
    }

    fn sample_one(&self, random: &mut dyn RandomSource) -> Result<u64, SimulationError> {
        for attempt in 0..MAX_REJECTION_ITERATIONS {
            let r1 = random.next_uniform();
            let r2 = random.next_positive_uniform();
            if r2 <= 0.0 {
                // ln(0) is undefined; a source handing out 0 here is broken
                return Err(SimulationError::DegenerateDistribution(
                    "uniform draw of zero reached the log transform".to_string(),
                ));
            }
            let gaussian = (2.0 * PI * r1).cos() * (-2.0 * r2.ln()).sqrt();
            let service = (self.mu + self.sigma * gaussian).round();
            if service >= 1.0 {
                if attempt > MAX_REJECTION_ITERATIONS / 2 {
                    warn!("service time accepted only after {} rejections", attempt);
                }
                return Ok(service as u64);
            }
        }
        Err(SimulationError::DegenerateDistribution(format!(
            "no service time of at least 1 within {} attempts (mu={}, sigma={})",
            MAX_REJECTION_ITERATIONS, self.mu, self.sigma
        )))
    }
}
