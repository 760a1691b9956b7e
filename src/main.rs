use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use bikeshare_sim::utils::logger;
use bikeshare_sim::{
    BikeLedger, CalendarPeriods, CliConfig, CsvSink, PeriodSource, RunMode, Simulation,
    TrajectoryRecord, TrajectorySink,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting bikeshare-sim");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let mut rng = match settings.seed {
        Some(seed) => {
            tracing::info!("Seeded run (seed = {})", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    let mut simulation = Simulation::new(BikeLedger::new(settings.olin, settings.wellesley));
    tracing::info!(
        "Initial inventory: Olin = {}, Wellesley = {}",
        settings.olin,
        settings.wellesley
    );

    let records: Vec<TrajectoryRecord> = match settings.mode {
        RunMode::Calendar { start, end } => {
            let periods = CalendarPeriods::new(start, end).periods()?;
            if periods.is_empty() {
                tracing::warn!("Date range contains no days; writing an empty trajectory");
            }
            tracing::info!("Calendar run: {} day(s) from {} to {}", periods.len(), start, end);
            simulation.run_trajectory(periods, &mut rng)
        }
        RunMode::Walk { steps } => {
            let steps = steps.unwrap_or_else(|| rng.gen_range(40..=150));
            tracing::info!("Walk run: {} step(s)", steps);
            simulation.run_walk(steps, &mut rng)
        }
    };

    let sink = CsvSink::new(settings.output_path.clone());
    let output_file = sink.write(&records)?;

    tracing::info!("✅ Simulation completed: {} period(s) recorded", records.len());
    println!("✅ Simulation completed: {} period(s) recorded", records.len());
    println!("📁 Output saved to: {}", output_file);

    Ok(())
}
