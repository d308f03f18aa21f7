/// Errors that can occur during a single simulation invocation
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A parameter failed validation before the run started
    InvalidParameter(String),
    /// A rejection-sampling loop could not produce an acceptable value
    DegenerateDistribution(String),
    /// A metrics reduction had nothing to divide by
    DivisionByZero(String),
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulationError::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            SimulationError::DegenerateDistribution(msg) => {
                write!(f, "Degenerate distribution: {}", msg)
            }
            SimulationError::DivisionByZero(msg) => write!(f, "Division by zero: {}", msg),
        }
    }
}

impl std::error::Error for SimulationError {}
