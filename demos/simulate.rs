use std::process;

use log::info;

use mgsim::{SeededRandomSource, SimulationEngine, SimulationParameters, SimulationResult};

const USAGE: &str = "Usage: simulate [--lambda <f64>] [--mu <f64>] [--sigma <f64>] \
[--patients <n>] [--servers <n>] [--seed <n>] [--json]";

/// Command-line options for the simulation shell.
struct CliOptions {
    params: SimulationParameters,
    seed: Option<u64>,
    json: bool,
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions {
        params: SimulationParameters::default(),
        seed: None,
        json: false,
    };
    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        match flag.as_str() {
            "--lambda" => options.params.lambda = parse_value(&mut iter, flag)?,
            "--mu" => options.params.mu = parse_value(&mut iter, flag)?,
            "--sigma" => options.params.sigma = parse_value(&mut iter, flag)?,
            "--patients" => options.params.patients = parse_value(&mut iter, flag)?,
            "--servers" => options.params.servers = parse_value(&mut iter, flag)?,
            "--seed" => options.seed = Some(parse_value(&mut iter, flag)?),
            "--json" => options.json = true,
            other => return Err(format!("unknown flag '{}'", other)),
        }
    }
    Ok(options)
}

fn parse_value<T: std::str::FromStr>(
    iter: &mut std::slice::Iter<'_, String>,
    flag: &str,
) -> Result<T, String> {
    let raw = iter
        .next()
        .ok_or_else(|| format!("flag '{}' expects a value", flag))?;
    raw.parse()
        .map_err(|_| format!("invalid value '{}' for flag '{}'", raw, flag))
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp(None)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    if let Err(error) = run(options) {
        eprintln!("simulation failed: {}", error);
        process::exit(1);
    }
}

fn run(options: CliOptions) -> Result<(), Box<dyn std::error::Error>> {
    let engine = SimulationEngine::new(options.params)?;
    let mut random = match options.seed {
        Some(seed) => SeededRandomSource::from_seed(seed),
        None => SeededRandomSource::from_entropy(),
    };

    let result = engine.run(&mut random)?;
    info!(
        "run {} finished with {} patients on {} servers",
        result.run_id,
        result.schedules.len(),
        result.server_timelines.len()
    );

    if options.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_report(&result);
    }
    Ok(())
}

fn print_report(result: &SimulationResult) {
    println!("Patient Details with IA Information");
    println!(
        "{:<9} {:<8} {:<10} {:<10} {:<4} {:<23} {:<9} {:<8}",
        "Patient", "Service", "CP Lookup", "CP", "Min", "IA Range", "IA Final", "Arrival"
    );
    for detail in &result.details {
        println!(
            "{:<9} {:<8} {:<10} {:<10} {:<4} {:<23} {:<9} {:<8}",
            detail.patient_no,
            detail.service_time,
            detail.cp_lookup,
            detail.cp,
            detail.min_value,
            detail.ia_range,
            detail.ia_final,
            detail.arrival
        );
    }
    println!();

    println!("Patient Schedule");
    println!(
        "{:<9} {:<8} {:<8} {:<7} {:<7} {:<9} {:<11} {:<8}",
        "Patient", "Service", "Arrival", "Start", "Finish", "Response", "Turnaround", "Waiting"
    );
    for schedule in &result.schedules {
        let detail = &result.details[schedule.patient];
        println!(
            "{:<9} {:<8} {:<8} {:<7} {:<7} {:<9} {:<11} {:<8}",
            schedule.patient + 1,
            detail.service_time,
            detail.arrival,
            schedule.start,
            schedule.finish,
            schedule.response,
            schedule.turnaround,
            schedule.waiting
        );
    }
    println!();

    println!("Simulation Metrics");
    println!("  Average Waiting Time:    {:.4}", result.metrics.avg_waiting);
    println!("  Average Response Time:   {:.4}", result.metrics.avg_response);
    println!(
        "  Average Turnaround Time: {:.4}",
        result.metrics.avg_turnaround
    );
    println!("  Average Service Time:    {:.4}", result.metrics.avg_service);
    println!("  Server Utilization:      {:.4}", result.metrics.utilization);
    println!();

    for (index, timeline) in result.server_timelines.iter().enumerate() {
        let busy: u64 = timeline.iter().map(|t| t.finish - t.start).sum();
        println!(
            "Server {} handled {} patients, busy {} ticks",
            index,
            timeline.len(),
            busy
        );
    }
}
