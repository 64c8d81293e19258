// Waste Sort Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/waste-sort-simulator
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/waste-sort-simulator --generators 5 --duration-ms 30000 --verbose
// ```

use anyhow::Context;
use clap::Parser;
use std::process;
use tracing::{error, info};
use waste_sort_simulator::simulation::{LoggingConfig, SimulationOrchestrator, SimulationReport};
use waste_sort_simulator::types::config::CliArgs;
use waste_sort_simulator::types::SimulationConfig;

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = SimulationConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Waste Sort Simulator");

    // Load configuration from CLI arguments and optional config file
    let config = match SimulationConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - simulation will not be executed.");
        print_configuration_summary(&config);
        return;
    }

    // Print startup banner and configuration
    print_startup_banner(&config);

    // Run the simulation
    info!("Starting simulation");
    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            error!("Simulation failed: {:#}", e);
            process::exit(1);
        }
    };

    eprintln!("{}", report.summary_report());

    // Persist the JSON report if a path was configured
    if let Some(path) = &config.report_path {
        if let Err(e) = write_report(&report, path) {
            error!("Report writing failed: {:#}", e);
            process::exit(1);
        }
        eprintln!("JSON report written to: {}", path);
    }

    info!("Waste Sort Simulator completed successfully");
}

/// Run the full simulation lifecycle and return its report
fn run_simulation(config: &SimulationConfig) -> anyhow::Result<SimulationReport> {
    let orchestrator = SimulationOrchestrator::new(config.clone())
        .context("failed to initialize the simulation orchestrator")?;

    eprintln!(
        "Running simulation {} for {:.1} minutes with {} generators...",
        orchestrator.run_id(),
        config.simulation_duration_ms as f64 / 60_000.0,
        config.generator_count
    );

    let report = orchestrator.run().context("simulation run failed")?;
    Ok(report)
}

/// Write the JSON report to the configured path
fn write_report(report: &SimulationReport, path: &str) -> anyhow::Result<()> {
    report
        .write_json(path)
        .with_context(|| format!("failed to write JSON report to '{}'", path))?;
    Ok(())
}

/// Print startup banner and configuration summary
fn print_startup_banner(config: &SimulationConfig) {
    eprintln!("Waste Sort Simulator");
    eprintln!("====================");
    eprintln!("A multi-threaded waste generation and sorting simulation");
    eprintln!();

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulationConfig) {
    eprintln!("Configuration:");
    eprintln!("  Generator Threads: {}", config.generator_count);
    eprintln!(
        "  Simulation Window: {} ms ({:.1} minutes)",
        config.simulation_duration_ms,
        config.simulation_duration_ms as f64 / 60_000.0
    );
    eprintln!(
        "  Generation Pause: {} - {} ms",
        config.min_generation_pause_ms, config.max_generation_pause_ms
    );
    eprintln!("  Dequeue Timeout: {} ms", config.dequeue_timeout_ms);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    if let Some(path) = &config.report_path {
        eprintln!("  Report Path: {}", path);
    }
    eprintln!();
}
