use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use labor_core::telemetry::MarketSnapshot;
use labor_core::{LaborMarketSimulation, ScenarioParams, ScenarioPreset};
use labor_experiments::{
    aggregate_by_experiment, export_aggregates_to_csv, export_aggregates_to_json,
    export_daily_records_to_csv, export_to_csv, export_to_json, ParameterSpace,
};
use labor_experiments::runner::run_experiments_with_progress;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "labor_sim",
    about = "Restaurant part-time labor market simulation",
    long_about = "Runs the daily labor-market model for a preset or a JSON\n\
                  configuration, or sweeps it over seeds and market sizes."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one simulation and print its summary
    Run {
        #[command(flatten)]
        scenario: ScenarioArgs,
        /// Write the daily records to this CSV file
        #[arg(long)]
        output: Option<PathBuf>,
        /// Print every worker and company from the latest snapshot
        #[arg(long)]
        agents: bool,
    },
    /// Run a configuration over many seeds and aggregate the results
    Sweep {
        #[command(flatten)]
        scenario: ScenarioArgs,
        /// Number of seeds per configuration
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
        seeds: u64,
        /// Worker counts to sweep (comma separated)
        #[arg(long, value_delimiter = ',')]
        workers: Vec<usize>,
        /// Company counts to sweep (comma separated)
        #[arg(long, value_delimiter = ',')]
        companies: Vec<usize>,
        /// Directory for results and aggregates (CSV and JSON)
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },
}

#[derive(clap::Args)]
struct ScenarioArgs {
    /// Named market size and horizon
    #[arg(long, value_enum, default_value_t = PresetArg::Standard)]
    preset: PresetArg,
    /// JSON file with scenario parameters (replaces the preset's)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for the random stream (first seed for sweeps)
    #[arg(long)]
    seed: Option<u64>,
    /// Days to simulate (defaults to the preset's horizon)
    #[arg(long)]
    periods: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PresetArg {
    Standard,
    Demo,
    Research,
}

impl From<PresetArg> for ScenarioPreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Standard => ScenarioPreset::Standard,
            PresetArg::Demo => ScenarioPreset::Demo,
            PresetArg::Research => ScenarioPreset::Research,
        }
    }
}

impl ScenarioArgs {
    fn resolve(&self) -> Result<(ScenarioParams, u64)> {
        let preset = ScenarioPreset::from(self.preset);
        let mut params = match &self.config {
            Some(path) => load_params(path)?,
            None => preset.params(),
        };
        if let Some(seed) = self.seed {
            params = params.with_seed(seed);
        }
        Ok((params, self.periods.unwrap_or_else(|| preset.periods())))
    }
}

fn load_params(path: &Path) -> Result<ScenarioParams> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(file).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match Cli::parse().command {
        Commands::Run {
            scenario,
            output,
            agents,
        } => run(&scenario, output.as_deref(), agents),
        Commands::Sweep {
            scenario,
            seeds,
            workers,
            companies,
            output_dir,
            no_progress,
        } => sweep(
            &scenario,
            seeds,
            workers,
            companies,
            output_dir.as_deref(),
            !no_progress,
        ),
    }
}

fn run(scenario: &ScenarioArgs, output: Option<&Path>, agents: bool) -> Result<()> {
    let (params, periods) = scenario.resolve()?;
    let mut sim = LaborMarketSimulation::new(params)?;
    sim.run(periods)?;

    if let Some(summary) = sim.summary() {
        println!("Periods run:           {}", summary.periods_run);
        println!("Final employment rate: {:.4}", summary.final_employment_rate);
        println!("Final average wage:    {:.2}", summary.final_average_wage);
        println!("Final total profit:    {:.2}", summary.final_total_profit);
        println!("Final matching rate:   {:.4}", summary.final_job_matching_rate);
        println!(
            "Employment rate range: {:.4} .. {:.4}",
            summary.min_employment_rate, summary.max_employment_rate
        );
    }

    if let Some(snapshot) = sim.snapshots().latest() {
        print_snapshot(snapshot, agents);
    }

    if let Some(path) = output {
        export_daily_records_to_csv(sim.records(), path)?;
        println!("Daily records written to {}", path.display());
    }
    Ok(())
}

fn print_snapshot(snapshot: &MarketSnapshot, agents: bool) {
    println!("\nMarket on day {}", snapshot.day);
    for (kind, count) in &snapshot.workers_by_kind {
        println!("  {:<10} {count}", kind.label());
    }
    for (level, count) in &snapshot.companies_by_level {
        println!("  level {level}    {count}");
    }
    if agents {
        for worker in &snapshot.workers {
            println!("{worker}");
        }
        for company in &snapshot.companies {
            println!("{company}");
        }
    }
}

fn sweep(
    scenario: &ScenarioArgs,
    seeds: u64,
    workers: Vec<usize>,
    companies: Vec<usize>,
    output_dir: Option<&Path>,
    show_progress: bool,
) -> Result<()> {
    let (params, periods) = scenario.resolve()?;
    let first_seed = params.seed_or_default();
    let sets = ParameterSpace::grid()
        .with_base(params.with_status_log_interval_days(0))
        .worker_count(workers)
        .company_count(companies)
        .seed_range(first_seed, seeds)
        .periods(periods)
        .generate()?;

    let results = run_experiments_with_progress(&sets, show_progress)?;
    let aggregates = aggregate_by_experiment(&results);

    println!(
        "{:<8} {:>8} {:>10} {:>5} {:>12} {:>12} {:>14}",
        "exp", "workers", "companies", "runs", "employment", "wage", "profit"
    );
    for aggregate in &aggregates {
        println!(
            "{:<8} {:>8} {:>10} {:>5} {:>12.4} {:>12.2} {:>14.2}",
            aggregate.experiment_id,
            aggregate.worker_count,
            aggregate.company_count,
            aggregate.runs,
            aggregate.final_employment_rate.mean,
            aggregate.final_average_wage.mean,
            aggregate.final_total_profit.mean
        );
    }

    if let Some(dir) = output_dir {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
        export_to_csv(&results, dir.join("results.csv"))?;
        export_to_json(&results, dir.join("results.json"))?;
        export_aggregates_to_csv(&aggregates, dir.join("aggregates.csv"))?;
        export_aggregates_to_json(&aggregates, dir.join("aggregates.json"))?;
        println!("Results written to {}", dir.display());
    }
    Ok(())
}
