use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::arrivals::{ArrivalGenerator, ArrivalRecord};
use super::distribution::ArrivalDistributionTable;
use super::errors::SimulationError;
use super::metrics::{self, Metrics};
use super::params::SimulationParameters;
use super::random::RandomSource;
use super::scheduler::{PatientSchedule, ServerScheduler, ServerTask};
use super::service::ServiceTimeSampler;
use super::types::SimulationTime;

/// One row of the per-patient report, with the cumulative-probability
/// columns preformatted to six decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientDetail {
    /// 1-based patient number as reported to the user
    pub patient_no: usize,
    pub service_time: u64,
    /// Lower cumulative bound of the patient's bin
    pub cp_lookup: String,
    /// Upper cumulative bound of the patient's bin
    pub cp: String,
    /// Integer increment the bin maps to
    pub min_value: usize,
    /// "lower - upper" with six decimal places each
    pub ia_range: String,
    /// Inter-arrival increment resolved for this patient
    pub ia_final: u64,
    pub arrival: SimulationTime,
}

/// Complete output of one simulation run. Read-only after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Random identifier of this run
    pub run_id: String,
    pub parameters: SimulationParameters,
    pub arrivals: Vec<ArrivalRecord>,
    /// Timing records indexed by patient
    pub schedules: Vec<PatientSchedule>,
    pub details: Vec<PatientDetail>,
    /// Tasks per server, in assignment order
    pub server_timelines: Vec<Vec<ServerTask>>,
    pub metrics: Metrics,
}

impl SimulationResult {
    pub fn service_times(&self) -> Vec<u64> {
        self.details.iter().map(|d| d.service_time).collect()
    }

    pub fn arrival_times(&self) -> Vec<SimulationTime> {
        self.arrivals.iter().map(|r| r.timestamp).collect()
    }

    pub fn start_times(&self) -> Vec<SimulationTime> {
        self.schedules.iter().map(|s| s.start).collect()
    }

    pub fn finish_times(&self) -> Vec<SimulationTime> {
        self.schedules.iter().map(|s| s.finish).collect()
    }

    pub fn turnaround_times(&self) -> Vec<u64> {
        self.schedules.iter().map(|s| s.turnaround).collect()
    }

    pub fn waiting_times(&self) -> Vec<u64> {
        self.schedules.iter().map(|s| s.waiting).collect()
    }

    pub fn response_times(&self) -> Vec<u64> {
        self.schedules.iter().map(|s| s.response).collect()
    }
}

/// Runs the full pipeline: service sampling, bin table construction, arrival
/// generation, dispatch, metrics.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    params: SimulationParameters,
}

impl SimulationEngine {
    /// Validate parameters and prepare an engine. Out-of-range parameters
    /// are rejected here, before any sampling.
    pub fn new(params: SimulationParameters) -> Result<Self, SimulationError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }

    /// Execute one run against the given draw source.
    ///
    /// Stages consume draws in a fixed order (all service times first, then
    /// arrivals) so that two runs sharing a seeded source replay
    /// identically.
    pub fn run(&self, random: &mut dyn RandomSource) -> Result<SimulationResult, SimulationError> {
        let params = &self.params;

        let sampler = ServiceTimeSampler::new(params.mu, params.sigma);
        let services = sampler.sample(params.patients, random)?;
        debug!("sampled {} service times", services.len());

        let table = ArrivalDistributionTable::build(params.lambda, params.patients);
        debug!(
            "distribution table final bound {:.6}",
            table.final_cumulative()
        );

        let arrivals = ArrivalGenerator::new(&table).generate(params.patients, random)?;

        let arrival_times: Vec<SimulationTime> = arrivals.iter().map(|r| r.timestamp).collect();
        let (schedules, server_timelines) =
            ServerScheduler::new(params.servers).schedule(&arrival_times, &services);

        let metrics = metrics::aggregate(&schedules, &services, params.servers)?;
        let details = build_details(&table, &arrivals, &services);

        Ok(SimulationResult {
            run_id: Uuid::new_v4().to_string(),
            parameters: params.clone(),
            arrivals,
            schedules,
            details,
            server_timelines,
            metrics,
        })
    }
}

fn build_details(
    table: &ArrivalDistributionTable,
    arrivals: &[ArrivalRecord],
    services: &[u64],
) -> Vec<PatientDetail> {
    arrivals
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let bin = &table.bins()[i];
            PatientDetail {
                patient_no: i + 1,
                service_time: services[i],
                cp_lookup: format!("{:.6}", bin.lower),
                cp: format!("{:.6}", bin.upper),
                min_value: bin.value,
                ia_range: format!("{:.6} - {:.6}", bin.lower, bin.upper),
                ia_final: record.increment,
                arrival: record.timestamp,
            }
        })
        .collect()
}
