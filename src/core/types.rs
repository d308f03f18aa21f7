/// Discrete simulation clock value. Arrival, start, and finish times are
/// all integer ticks on this clock.
pub type SimulationTime = u64;

/// Zero-based patient identifier, stable for the whole run.
pub type PatientId = usize;
