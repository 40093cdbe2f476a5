//! weasel: compare evolutionary strategies on the weasel string benchmark.
//!
//! Runs the selected strategies on a target string, printing a line each
//! time a run finds a new best and a summary per strategy at the end.
//! Set `RUST_LOG=debug` for per-run diagnostics.

use anyhow::Context;
use clap::Parser;
use u_weasel::experiment::Experiment;
use u_weasel::genome::Target;
use u_weasel::search::{Progress, SearchConfig, SearchObserver, Strategy};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "weasel")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Target string, drawn from printable ASCII
    #[arg(short, long, default_value = "methinks it is like a weasel")]
    target: String,

    /// Population size
    #[arg(short, long, default_value_t = 500)]
    population: usize,

    /// Per-symbol mutation probability, defaults to 1/length
    #[arg(short, long)]
    mutation_rate: Option<f64>,

    /// Strategies to run: hill-climber, mutation-ga, crossover-ga
    #[arg(short, long, value_delimiter = ',', default_values_t = Strategy::ALL)]
    strategy: Vec<Strategy>,

    /// Evaluation budget per run
    #[arg(short = 'e', long)]
    max_evaluations: Option<u64>,

    /// Base random seed; repetition r uses seed + r
    #[arg(long)]
    seed: Option<u64>,

    /// Runs per strategy
    #[arg(short, long, default_value_t = 1)]
    repetitions: usize,
}

/// Prints one line per improvement.
struct ProgressPrinter;

impl SearchObserver for ProgressPrinter {
    fn on_improvement(&mut self, strategy: Strategy, progress: &Progress) {
        println!(
            "[{strategy}] {:>8} evals  fitness {:>3}  {}",
            progress.evaluations, progress.best.fitness, progress.best.individual
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let target = Target::ascii(&args.target).context("invalid target")?;

    let mut config = SearchConfig::default().with_population_size(args.population);
    if let Some(rate) = args.mutation_rate {
        config = config.with_mutation_rate(rate);
    }
    if let Some(n) = args.max_evaluations {
        config = config.with_max_evaluations(n);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let experiment = Experiment::new(target, config)
        .with_strategies(args.strategy)
        .with_repetitions(args.repetitions);
    let report = experiment
        .run_with_observer(&mut ProgressPrinter)
        .context("search failed")?;

    println!();
    println!("target: {:?} ({} symbols)", args.target, experiment.target().len());
    for summary in &report.summaries {
        println!(
            "{:<13} runs {:>3}  converged {:>3}  evaluations mean {:>10.1}  sd {:>10.1}  min {:>8}  max {:>8}",
            summary.strategy.name(),
            summary.runs,
            summary.converged_runs,
            summary.mean_evaluations,
            summary.std_dev_evaluations,
            summary.min_evaluations,
            summary.max_evaluations
        );
    }
    Ok(())
}
