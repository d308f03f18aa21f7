/// One interval of the discretized inter-arrival distribution.
///
/// An accepted uniform draw landing in `[lower, upper)` resolves to the
/// integer increment `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeBin {
    pub lower: f64,
    pub upper: f64,
    pub value: usize,
}

/// Lookup table mapping uniform draws to integer inter-arrival increments.
///
/// Bin bounds come from a discrete summation of exponential CDF terms: with
/// m = 1/lambda, bound i is the sum of `1 - exp(-m*x)` for x = 0..=i. The
/// summation accumulates CDF-shaped terms rather than probability masses, so
/// the running total is not a true CDF and exceeds 1 for larger indices.
/// Bin matching and the arrival rejection bound are calibrated against those
/// exact values, so the summation is kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrivalDistributionTable {
    bins: Vec<CumulativeBin>,
}

impl ArrivalDistributionTable {
    /// Build the table of `patients` bins for the given arrival rate.
    ///
    /// Bin 0 always has zero width (`1 - exp(0) = 0`), and consecutive bins
    /// share their boundary, so accepted draws below the final bound land in
    /// exactly one bin.
    pub fn build(lambda: f64, patients: usize) -> Self {
        let mut bins = Vec::with_capacity(patients);
        let mut previous = 0.0;
        for i in 0..patients {
            let cumulative = exp_cumulative(lambda, i);
            bins.push(CumulativeBin {
                lower: previous,
                upper: cumulative,
                value: i,
            });
            previous = cumulative;
        }
        Self { bins }
    }

    pub fn bins(&self) -> &[CumulativeBin] {
        &self.bins
    }

    /// Upper bound of the last bin, the acceptance threshold for arrival
    /// draws. May exceed 1.
    pub fn final_cumulative(&self) -> f64 {
        self.bins.last().map(|bin| bin.upper).unwrap_or(0.0)
    }

    /// Resolve a draw to its inter-arrival increment by scanning every bin.
    ///
    /// The scan never breaks early: should a later bin's range also contain
    /// `draw`, the later match overwrites the earlier one.
    pub fn lookup(&self, draw: f64) -> Option<usize> {
        let mut matched = None;
        for bin in &self.bins {
            if bin.lower <= draw && draw < bin.upper {
                matched = Some(bin.value);
            }
        }
        matched
    }
}

/// Discrete summation approximation of the exponential CDF at index `k`,
/// with the rate inverted to a mean before use.
fn exp_cumulative(lambda: f64, k: usize) -> f64 {
    let mean = 1.0 / lambda;
    let mut cumulative = 0.0;
    for x in 0..=k {
        cumulative += 1.0 - (-mean * x as f64).exp();
    }
    cumulative
}
