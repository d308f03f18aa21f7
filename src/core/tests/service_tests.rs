use super::ScriptedSource;
use crate::core::errors::SimulationError;
use crate::core::random::SeededRandomSource;
use crate::core::service::ServiceTimeSampler;

#[test]
fn scripted_draws_produce_hand_computed_value() {
    // r1=0.3, r2=0.7: 2.58 + 2.58 * cos(0.6*pi) * sqrt(-2 ln 0.7) = 1.9066 -> 2
    let sampler = ServiceTimeSampler::new(2.58, 2.58);
    let mut source = ScriptedSource::new(vec![0.3, 0.7]);
    let services = sampler.sample(5, &mut source).unwrap();
    assert_eq!(services, vec![2, 2, 2, 2, 2]);
}

#[test]
fn values_below_one_are_rejected_and_redrawn() {
    // r1=r2=0.5 rounds to 0 and is rejected; the next pair rounds to 2
    let sampler = ServiceTimeSampler::new(2.58, 2.58);
    let mut source = ScriptedSource::new(vec![0.5, 0.5, 0.3, 0.7]);
    let services = sampler.sample(1, &mut source).unwrap();
    assert_eq!(services, vec![2]);
    assert_eq!(source.consumed(), 4);
}

#[test]
fn zero_sigma_rounds_the_mean() {
    let sampler = ServiceTimeSampler::new(3.4, 0.0);
    let mut source = ScriptedSource::new(vec![0.1, 0.9]);
    let services = sampler.sample(3, &mut source).unwrap();
    assert_eq!(services, vec![3, 3, 3]);
}

#[test]
fn always_rejecting_parameters_hit_the_iteration_cap() {
    let sampler = ServiceTimeSampler::new(-50.0, 0.0);
    let mut source = ScriptedSource::new(vec![0.3, 0.7]);
    let result = sampler.sample(1, &mut source);
    assert!(matches!(
        result,
        Err(SimulationError::DegenerateDistribution(_))
    ));
}

#[test]
fn zero_draw_reaching_the_log_transform_is_an_error() {
    let sampler = ServiceTimeSampler::new(2.58, 2.58);
    let mut source = ScriptedSource::new(vec![0.3, 0.0]);
    let result = sampler.sample(1, &mut source);
    assert!(matches!(
        result,
        Err(SimulationError::DegenerateDistribution(_))
    ));
}

#[test]
fn seeded_source_yields_positive_integers() {
    let sampler = ServiceTimeSampler::new(2.58, 2.58);
    let mut source = SeededRandomSource::from_seed(42);
    let services = sampler.sample(200, &mut source).unwrap();
    assert_eq!(services.len(), 200);
    assert!(services.iter().all(|&s| s >= 1));
}
