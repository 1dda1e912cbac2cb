//! yard — charging-yard simulator.
//!
//! Schedules K vehicles with random arrivals and battery levels onto N
//! charging stations, then dispatches M random operational tasks across the
//! same vehicles on a worker pool.  Results, scheduling events, and task
//! outcomes are written as CSV to `--out`.
//!
//! ```text
//! yard --stations 2 --vehicles 8 --tasks 12 --seed 7
//! yard --config yard.json --skip-tasks
//! RUST_LOG=warn yard            # only high waits and failed tasks
//! ```

use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info_span;
use tracing_subscriber::EnvFilter;

use yard_charge::{ArrivalGenerator, ChargeSummary, ChargingScheduler, TracingNotifier};
use yard_core::{YardConfig, YardRng};
use yard_output::{ChargeEventRecorder, CsvWriter, OutputWriter};
use yard_tasks::{
    CancelToken, Equipment, EquipmentKind, TaskRunner, TaskStatus, make_agvs, make_random_tasks,
};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "yard", about = "Charging-yard contention simulator")]
struct Args {
    /// JSON file with `YardConfig` fields; missing fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Charging stations (N).
    #[arg(long)]
    stations: Option<u32>,

    /// Vehicles (K).
    #[arg(long)]
    vehicles: Option<u32>,

    /// Operational tasks (M).
    #[arg(long)]
    tasks: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the CSV output.
    #[arg(long, default_value = "output/yard")]
    out: PathBuf,

    /// Only run the charging simulation.
    #[arg(long)]
    skip_tasks: bool,
}

fn load_config(args: &Args) -> Result<YardConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(file).with_context(|| format!("parsing {}", path.display()))?
        }
        None => YardConfig::default(),
    };

    if let Some(n) = args.stations {
        config.stations = n;
    }
    if let Some(k) = args.vehicles {
        config.vehicles = k;
    }
    if let Some(m) = args.tasks {
        config.tasks = m;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    config.validate()?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    println!("=== yard — charging-yard simulator ===");
    println!(
        "Stations: {}  |  Vehicles: {}  |  Tasks: {}  |  Seed: {}",
        config.stations, config.vehicles, config.tasks, config.seed
    );
    println!();

    let mut rng = YardRng::new(config.seed);

    // 1. Arrivals.
    let arrivals = ArrivalGenerator::from_config(&config)?.generate(config.vehicles, &mut rng);

    // 2. Output.
    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    let recorder = ChargeEventRecorder::new(CsvWriter::new(&args.out)?);

    // 3. Charging run, logged and recorded.
    let scheduler = ChargingScheduler::from_config(&config)?;
    let charger = Equipment::new("CS-SIM", "Charger Simulator", EquipmentKind::Charging);
    let mut notifier = (TracingNotifier, recorder);
    let results = {
        let _span = info_span!("charging", equipment = %charger).entered();
        scheduler.run(config.stations, &arrivals, &mut notifier)?
    };
    let (_, mut recorder) = notifier;
    if let Some(e) = recorder.take_error() {
        eprintln!("output error: {e}");
    }

    println!();
    println!(
        "{:<8} {:>5} {:>5} {:>5} {:>5} {:>6} {:>6} {:>6}",
        "Vehicle", "Arr", "Batt", "Wait", "Chg", "Start", "End", "Sta"
    );
    println!("{}", "-".repeat(56));
    for r in &results {
        println!(
            "{:<8} {:>5} {:>4}% {:>5} {:>5} {:>6} {:>6} {:>6}",
            r.vehicle.to_string(), r.arrival.0, r.battery_pct, r.wait_min,
            r.charge_min, r.start.0, r.end.0, r.station.to_string(),
        );
    }

    let summary = ChargeSummary::from_results(&results, config.stations, scheduler.wait_threshold());
    println!();
    println!(
        "Mean wait {:.1} min, max {} min, {} at or above {} min; last charge ends at {}",
        summary.mean_wait_min, summary.max_wait_min, summary.high_waits,
        config.wait_threshold_min, summary.makespan,
    );
    for s in &summary.stations {
        println!(
            "  {:<5} {:>3} jobs {:>5} min busy {:>5.1}%",
            s.station.to_string(), s.jobs, s.busy_min, s.utilization * 100.0
        );
    }

    let mut writer = recorder.into_writer();
    writer.write_charge_results(&results)?;

    // 4. Operational tasks across the fleet.
    if !args.skip_tasks && config.tasks > 0 {
        let cancel = CancelToken::new();
        {
            let cancel = cancel.clone();
            ctrlc::set_handler(move || cancel.cancel())?;
        }

        let agvs = make_agvs(config.vehicles);
        let mut tasks = make_random_tasks(config.tasks, &mut rng);
        println!();
        println!("Running {} tasks on {} vehicles (Ctrl-C cancels)…", tasks.len(), agvs.len());

        let t0 = Instant::now();
        let outcomes = TaskRunner::from_config(&config)?.run_parallel(&mut tasks, &agvs, &mut rng, &cancel)?;
        let done = tasks.iter().filter(|t| t.status() == TaskStatus::Done).count();
        println!(
            "{done}/{} tasks done in {:.2} s",
            tasks.len(),
            t0.elapsed().as_secs_f64()
        );
        for (task, outcome) in tasks.iter().zip(&outcomes) {
            println!("  {:<7} {task} ({} min)", outcome.assignee, outcome.work_minutes);
        }

        writer.write_task_outcomes(&outcomes)?;
    }

    writer.finish()?;
    println!();
    println!("Output written to {}", args.out.display());
    Ok(())
}
