use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::errors::SimulationError;
use super::metrics::Metrics;
use super::params::SimulationParameters;
use super::random::SeededRandomSource;
use super::simulation_engine::{SimulationEngine, SimulationResult};

/// Mean metrics across a batch of independent replications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplicationSummary {
    pub replications: usize,
    pub mean_metrics: Metrics,
}

/// Run `count` independent replications in parallel, seeding replication k
/// with `base_seed + k`.
///
/// Each replication owns its draw source and produces an independent result,
/// so the batch needs no locking. The first failing replication aborts the
/// whole batch.
pub fn run_replications(
    params: &SimulationParameters,
    base_seed: u64,
    count: usize,
) -> Result<(Vec<SimulationResult>, ReplicationSummary), SimulationError> {
    if count == 0 {
        return Err(SimulationError::InvalidParameter(
            "replication count must be at least 1".to_string(),
        ));
    }
    let engine = SimulationEngine::new(params.clone())?;

    let results: Vec<SimulationResult> = (0..count)
        .into_par_iter()
        .map(|k| {
            let mut random = SeededRandomSource::from_seed(base_seed.wrapping_add(k as u64));
            engine.run(&mut random)
        })
        .collect::<Result<_, _>>()?;

    debug!("completed {} replications", results.len());
    let summary = summarize(&results);
    Ok((results, summary))
}

fn summarize(results: &[SimulationResult]) -> ReplicationSummary {
    let count = results.len() as f64;
    let mut mean = Metrics {
        avg_waiting: 0.0,
        avg_response: 0.0,
        avg_turnaround: 0.0,
        avg_service: 0.0,
        utilization: 0.0,
    };
    for result in results {
        mean.avg_waiting += result.metrics.avg_waiting;
        mean.avg_response += result.metrics.avg_response;
        mean.avg_turnaround += result.metrics.avg_turnaround;
        mean.avg_service += result.metrics.avg_service;
        mean.utilization += result.metrics.utilization;
    }
    mean.avg_waiting /= count;
    mean.avg_response /= count;
    mean.avg_turnaround /= count;
    mean.avg_service /= count;
    mean.utilization /= count;

    ReplicationSummary {
        replications: results.len(),
        mean_metrics: mean,
    }
}
