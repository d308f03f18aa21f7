use std::time::Instant;

use mgsim::core::batch::run_replications;
use mgsim::SimulationParameters;

/// Entry point for replication benchmarking.
///
/// Usage: batch_benchmark [replications] [base_seed]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let replications: usize = args.get(1).map(|s| s.parse()).transpose()?.unwrap_or(100);
    let base_seed: u64 = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(42);

    let params = SimulationParameters {
        patients: 500,
        servers: 3,
        ..SimulationParameters::default()
    };

    println!("Batch Replication Benchmark");
    println!("===========================");
    println!(
        "lambda={} mu={} sigma={} patients={} servers={}",
        params.lambda, params.mu, params.sigma, params.patients, params.servers
    );
    println!("replications={} base seed={}", replications, base_seed);

    let started = Instant::now();
    let (results, summary) = run_replications(&params, base_seed, replications)?;
    let elapsed = started.elapsed();

    println!();
    println!(
        "Completed {} replications in {:.3} s",
        results.len(),
        elapsed.as_secs_f64()
    );
    println!(
        "Throughput: {:.1} runs/sec",
        results.len() as f64 / elapsed.as_secs_f64()
    );
    println!();
    println!("Mean metrics across replications:");
    println!(
        "  Average Waiting Time:    {:.4}",
        summary.mean_metrics.avg_waiting
    );
    println!(
        "  Average Response Time:   {:.4}",
        summary.mean_metrics.avg_response
    );
    println!(
        "  Average Turnaround Time: {:.4}",
        summary.mean_metrics.avg_turnaround
    );
    println!(
        "  Average Service Time:    {:.4}",
        summary.mean_metrics.avg_service
    );
    println!(
        "  Server Utilization:      {:.4}",
        summary.mean_metrics.utilization
    );

    Ok(())
}
