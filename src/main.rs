use lot_sizing::io::reporting;
use lot_sizing::{logging, PlanningConfig, PlanningScenario};
use std::env;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> lot_sizing::Result<()> {
    println!("=== Lot Sizing Heuristics: Fixed Planning Horizon ===");

    // 1. CONFIGURATION
    // First argument is a TOML config; without one the built-in example runs.
    let config = match env::args().nth(1) {
        Some(path) => {
            info!(path = %path, "loading configuration");
            PlanningConfig::load(Path::new(&path))?
        }
        None => PlanningConfig::default(),
    };

    // 2. DEMAND
    let scenario = PlanningScenario::from_config(&config)?;
    println!(
        "Demand over {} {}s: {:?}",
        scenario.demand.len(),
        config.period_label.to_lowercase(),
        scenario.demand
    );

    // 3. PLAN EVERY HEURISTIC
    let report = scenario.run()?;

    // 4. EXPORT
    let written = reporting::export_scenario(&config.output_dir, &report, &config.period_label)?;
    println!(
        "Wrote {} files to ./{}",
        written.len(),
        config.output_dir.display()
    );

    // 5. COMPARISON
    println!("\n=== Comparison ===");
    print!("{}", report.comparison);
    if let Some(best) = report.comparison.cheapest() {
        println!("\nLowest total cost: {} (${:.2})", best.approach, best.total_cost);
    }

    Ok(())
}
