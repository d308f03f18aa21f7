use serde::{Deserialize, Serialize};

use super::errors::SimulationError;
use super::scheduler::PatientSchedule;

/// Aggregate performance figures for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub avg_waiting: f64,
    pub avg_response: f64,
    pub avg_turnaround: f64,
    pub avg_service: f64,
    /// Busy server-time over total capacity up to the latest finish tick
    pub utilization: f64,
}

/// Reduce per-patient schedules into arithmetic means and utilization.
///
/// An empty schedule set or an all-zero finish column is reported as an
/// error rather than silently producing NaN.
pub fn aggregate(
    schedules: &[PatientSchedule],
    services: &[u64],
    servers: usize,
) -> Result<Metrics, SimulationError> {
    if schedules.is_empty() {
        return Err(SimulationError::DivisionByZero(
            "metrics over zero patients".to_string(),
        ));
    }

    let latest_finish = schedules.iter().map(|s| s.finish).max().unwrap_or(0);
    if latest_finish == 0 {
        return Err(SimulationError::DivisionByZero(
            "every finish time is zero, utilization is undefined".to_string(),
        ));
    }

    let count = schedules.len() as f64;
    let total_waiting: u64 = schedules.iter().map(|s| s.waiting).sum();
    let total_response: u64 = schedules.iter().map(|s| s.response).sum();
    let total_turnaround: u64 = schedules.iter().map(|s| s.turnaround).sum();
    let total_service: u64 = services.iter().sum();
    let busy: u64 = schedules.iter().map(|s| s.finish - s.start).sum();

    Ok(Metrics {
        avg_waiting: total_waiting as f64 / count,
        avg_response: total_response as f64 / count,
        avg_turnaround: total_turnaround as f64 / count,
        avg_service: total_service as f64 / count,
        utilization: busy as f64 / (servers as f64 * latest_finish as f64),
    })
}
