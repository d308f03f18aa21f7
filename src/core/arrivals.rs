use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::distribution::ArrivalDistributionTable;
use super::errors::SimulationError;
use super::random::{RandomSource, MAX_REJECTION_ITERATIONS};
use super::types::{PatientId, SimulationTime};

/// Resolved arrival of a single patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrivalRecord {
    pub patient: PatientId,
    /// The accepted uniform draw; 0.0 for patient 0, which draws nothing.
    pub draw: f64,
    /// Inter-arrival increment resolved through the bin table.
    pub increment: u64,
    /// Absolute arrival tick, the running sum of increments so far.
    pub timestamp: SimulationTime,
}

/// Generates absolute arrival timestamps by rejection-sampling uniform draws
/// against the bin table.
pub struct ArrivalGenerator<'a> {
    table: &'a ArrivalDistributionTable,
}

impl<'a> ArrivalGenerator<'a> {
    pub fn new(table: &'a ArrivalDistributionTable) -> Self {
        Self { table }
    }

    /// Generate one arrival record per patient.
    ///
    /// Patient 0 arrives at tick 0 without consuming a draw. Every later
    /// patient redraws until the sample falls below the table's final
    /// cumulative bound, resolves it to a bin, and accumulates that bin's
    /// increment onto the previous timestamp.
    pub fn generate(
        &self,
        patients: usize,
        random: &mut dyn RandomSource,
    ) -> Result<Vec<ArrivalRecord>, SimulationError> {
        if patients == 0 {
            return Ok(Vec::new());
        }

        let mut records = Vec::with_capacity(patients);
        records.push(ArrivalRecord {
            patient: 0,
            draw: 0.0,
            increment: 0,
            timestamp: 0,
        });

        if patients == 1 {
            return Ok(records);
        }

        let ceiling = self.table.final_cumulative();
        if ceiling <= 0.0 {
            return Err(SimulationError::DegenerateDistribution(format!(
                "final cumulative bound {} leaves no acceptable draws",
                ceiling
            )));
        }

        for patient in 1..patients {
            let draw = accept_draw(ceiling, random)?;
            let increment = self.table.lookup(draw).ok_or_else(|| {
                SimulationError::DegenerateDistribution(format!(
                    "accepted draw {} matched no bin",
                    draw
                ))
            })? as u64;
            let timestamp = records[patient - 1].timestamp + increment;
            records.push(ArrivalRecord {
                patient,
                draw,
                increment,
                timestamp,
            });
        }

        debug!(
            "generated {} arrivals, last at tick {}",
            records.len(),
            records[records.len() - 1].timestamp
        );
        Ok(records)
    }
}

/// Redraw until a sample falls below `ceiling`, bounded by the iteration cap.
fn accept_draw(ceiling: f64, random: &mut dyn RandomSource) -> Result<f64, SimulationError> {
    for attempt in 0..MAX_REJECTION_ITERATIONS {
        let draw = random.next_uniform();
        if draw < ceiling {
            if attempt > MAX_REJECTION_ITERATIONS / 2 {
                warn!(
                    "arrival draw accepted only after {} rejections (bound {})",
                    attempt, ceiling
                );
            }
            return Ok(draw);
        }
    }
    Err(SimulationError::DegenerateDistribution(format!(
        "no arrival draw below {} within {} attempts",
        ceiling, MAX_REJECTION_ITERATIONS
    )))
}
