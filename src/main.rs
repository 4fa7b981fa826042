//! Command-line driver for the ATSP genetic algorithm.

use atsp_ga::config::{Config, MutationMethod, Sweep};
use atsp_ga::problem::{DistanceOracle, Problem};
use atsp_ga::utils::{format_duration, relative_error};
use atsp_ga::GeneticAlgorithm;
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;
use std::time::Duration;

/// Search near-optimal ATSP tours with a time-boxed genetic algorithm.
#[derive(Parser, Debug)]
#[command(name = "atsp-ga", version, about)]
struct Args {
    /// Instance file (TSPLIB full matrix or plain matrix)
    instance: PathBuf,

    /// Number of tours per generation
    #[arg(short, long, default_value_t = 100)]
    population_size: usize,

    /// Probability of mutating a child
    #[arg(short, long, default_value_t = 0.05)]
    mutation_rate: f64,

    /// Probability of producing a child by crossover
    #[arg(short, long, default_value_t = 0.8)]
    crossover_rate: f64,

    /// Time budget per run in seconds
    #[arg(short = 't', long, default_value_t = 60.0)]
    stop_time: f64,

    /// Mutation method: swap or invert
    #[arg(long, default_value = "swap")]
    mutation_method: String,

    /// Seed for reproducible runs; run k uses seed + k
    #[arg(long)]
    seed: Option<u64>,

    /// Number of independent runs
    #[arg(short, long, default_value_t = 1)]
    runs: usize,

    /// Known optimal tour cost, used to report relative error
    #[arg(long)]
    optimum: Option<u64>,

    /// Print every run result as JSON
    #[arg(long)]
    json: bool,

    /// Repeat the runs over a parameter grid for both mutation methods:
    /// "population" (50, 100, 200) or "mutation" (0.02, 0.05, 0.10)
    #[arg(long)]
    sweep: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mutation_method: MutationMethod = args.mutation_method.parse()?;
    let sweep = args.sweep.as_deref().map(str::parse::<Sweep>).transpose()?;
    if !args.stop_time.is_finite() || args.stop_time < 0.0 {
        return Err(format!("stop time must be a non-negative number, got {}", args.stop_time).into());
    }

    let config = Config::new()
        .with_population_size(args.population_size)
        .with_mutation_rate(args.mutation_rate)
        .with_crossover_rate(args.crossover_rate)
        .with_stop_duration(Duration::from_secs_f64(args.stop_time))
        .with_mutation_method(mutation_method);
    config.validate()?;

    info!("Loading problem from: {}", args.instance.display());
    let problem = Problem::from_file(&args.instance)?;
    info!(
        "Loaded problem: {} with {} cities",
        problem.name,
        problem.city_count()
    );

    match sweep {
        Some(sweep) => {
            for setting in sweep.configs(&config) {
                info!(
                    "Sweep setting: {} mutation, population {}, mutation rate {}",
                    setting.mutation_method, setting.population_size, setting.mutation_rate
                );
                if !args.json {
                    println!(
                        "Setting: {} mutation, population {}, mutation rate {}",
                        setting.mutation_method, setting.population_size, setting.mutation_rate
                    );
                }
                run_batch(&problem, &setting, &args)?;
            }
        }
        None => run_batch(&problem, &config, &args)?,
    }

    Ok(())
}

/// Run `args.runs` independent searches with `config` and report each one.
fn run_batch(
    problem: &Problem,
    config: &Config,
    args: &Args,
) -> Result<(), Box<dyn std::error::Error>> {
    for run in 1..=args.runs {
        let mut run_config = config.clone();
        if let Some(seed) = args.seed {
            run_config = run_config.with_seed(seed.wrapping_add(run as u64 - 1));
        }

        let mut algorithm = GeneticAlgorithm::new(problem, run_config)?;
        let result = algorithm.run();

        if args.json {
            println!("{}", serde_json::to_string(&result)?);
            continue;
        }

        match &result.best {
            Some(best) => {
                let error = args
                    .optimum
                    .and_then(|optimum| relative_error(best.cost, optimum))
                    .map(|e| format!(", relative error {:.2}%", e))
                    .unwrap_or_default();

                println!(
                    "Run {}: best cost {}{}, found after {} ns, run time {} ({} generations)",
                    run,
                    best.cost,
                    error,
                    best.found_after.as_nanos(),
                    format_duration(result.run_time),
                    result.generations
                );
                println!("Best tour: {}", best.tour);
            }
            None => warn!("Run {}: no generation completed within the time budget", run),
        }
    }

    Ok(())
}
