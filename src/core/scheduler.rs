use serde::{Deserialize, Serialize};

use super::types::{PatientId, SimulationTime};

/// One assignment on a server's timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerTask {
    pub patient: PatientId,
    pub start: SimulationTime,
    pub finish: SimulationTime,
}

/// Complete timing record for one scheduled patient. Created exactly once
/// during dispatch and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientSchedule {
    pub patient: PatientId,
    /// Server index the patient was dispatched to
    pub server: usize,
    pub start: SimulationTime,
    pub finish: SimulationTime,
    /// finish - arrival
    pub turnaround: u64,
    /// turnaround - service
    pub waiting: u64,
    /// start - arrival
    pub response: u64,
}

/// Dispatches patients to servers under the first-available, else
/// least-loaded policy.
pub struct ServerScheduler {
    servers: usize,
}

impl ServerScheduler {
    /// `servers` must be at least 1; the engine validates this before
    /// constructing a scheduler.
    pub fn new(servers: usize) -> Self {
        debug_assert!(servers >= 1);
        Self { servers }
    }

    /// Schedule every patient. `arrivals[i]` and `services[i]` describe
    /// patient i; the returned schedules are indexed by patient, alongside
    /// each server's task timeline in assignment order.
    ///
    /// Patients are processed in arrival order (original index breaks ties).
    /// Each is dispatched to the first server already free at its arrival,
    /// scanning upward from server 0; if every server is busy, to the one
    /// that frees up soonest, lowest index winning ties.
    pub fn schedule(
        &self,
        arrivals: &[SimulationTime],
        services: &[u64],
    ) -> (Vec<PatientSchedule>, Vec<Vec<ServerTask>>) {
        let patients = arrivals.len();
        let mut availability: Vec<SimulationTime> = vec![0; self.servers];
        let mut timelines: Vec<Vec<ServerTask>> = vec![Vec::new(); self.servers];

        let mut assigned_server = vec![0usize; patients];
        let mut starts: Vec<SimulationTime> = vec![0; patients];
        let mut finishes: Vec<SimulationTime> = vec![0; patients];

        let mut order: Vec<PatientId> = (0..patients).collect();
        order.sort_by_key(|&patient| arrivals[patient]);

        for &patient in &order {
            let arrival = arrivals[patient];
            let service = services[patient];

            let mut candidate = None;
            for (index, &available_at) in availability.iter().enumerate() {
                if available_at <= arrival {
                    candidate = Some(index);
                    break;
                }
            }
            let server = candidate.unwrap_or_else(|| {
                let mut best = 0;
                for index in 1..self.servers {
                    if availability[index] < availability[best] {
                        best = index;
                    }
                }
                best
            });

            let start = availability[server].max(arrival);
            let finish = start + service;
            availability[server] = finish;
            timelines[server].push(ServerTask {
                patient,
                start,
                finish,
            });

            assigned_server[patient] = server;
            starts[patient] = start;
            finishes[patient] = finish;
        }

        let schedules = (0..patients)
            .map(|patient| {
                let turnaround = finishes[patient] - arrivals[patient];
                PatientSchedule {
                    patient,
                    server: assigned_server[patient],
                    start: starts[patient],
                    finish: finishes[patient],
                    turnaround,
                    waiting: turnaround - services[patient],
                    response: starts[patient] - arrivals[patient],
                }
            })
            .collect();

        (schedules, timelines)
    }
}
