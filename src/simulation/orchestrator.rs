//! Simulation orchestration
//!
//! The orchestrator owns the lifecycle of a run: it builds the shared
//! queue, starts the generator and collector threads, holds the window
//! open, and shuts everything down in the one order that cannot lose
//! items.

use crate::simulation::collector::WasteCollector;
use crate::simulation::error::SimulationResult;
use crate::simulation::generator::WasteGenerator;
use crate::simulation::queue::CollectionQueue;
use crate::simulation::statistics::SimulationReport;
use crate::types::{RunId, SimulationConfig};
use crate::waste::RandomWasteSource;
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Coordinates one complete simulation run
///
/// Construction validates the configuration and allocates a run
/// identifier; [`run`](SimulationOrchestrator::run) executes the whole
/// producer/collector lifecycle and returns the final report.
#[derive(Debug)]
pub struct SimulationOrchestrator {
    config: SimulationConfig,
    run_id: RunId,
}

impl SimulationOrchestrator {
    /// Create a new orchestrator for the given configuration
    ///
    /// Validates the configuration up front so a run can only start from
    /// parameters the simulation can actually honor.
    #[instrument(skip(config), fields(generators = config.generator_count, duration_ms = config.simulation_duration_ms))]
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;

        let run_id = RunId::new();
        info!(%run_id, "simulation orchestrator initialized");

        if let Some(seed) = config.seed {
            info!(seed, "using deterministic random seeds");
        }

        Ok(Self { config, run_id })
    }

    /// Identifier allocated for this orchestrator's run
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// The validated configuration this orchestrator runs with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Execute one complete simulation and assemble the final report
    ///
    /// Starts every generator and the collector on a fresh shared queue,
    /// keeps the window open for the configured duration, then stops and
    /// joins all generators before stopping the collector. The collector
    /// must only be stopped after every generator has been joined: a
    /// generator still racing an enqueue against the collector's final
    /// emptiness check could otherwise strand items in the queue.
    #[instrument(skip(self), fields(run_id = %self.run_id))]
    pub fn run(&self) -> SimulationResult<SimulationReport> {
        let started_at = Instant::now();
        let queue = Arc::new(CollectionQueue::new());

        let mut generators = Vec::with_capacity(self.config.generator_count);
        for index in 0..self.config.generator_count {
            let seed = self.config.seed.map(|seed| seed.wrapping_add(index as u64));
            let source = RandomWasteSource::new(self.config.generation_pause_range(), seed);
            let mut generator = WasteGenerator::new(
                format!("waste-generator-{}", index + 1),
                Arc::clone(&queue),
                source,
            );
            generator.start();
            generators.push(generator);
        }

        let mut collector = WasteCollector::new(Arc::clone(&queue), self.config.dequeue_timeout());
        collector.start();

        info!(
            generators = generators.len(),
            window_ms = self.config.simulation_duration_ms,
            "simulation window open"
        );
        thread::sleep(self.config.simulation_duration());

        debug!("simulation window closed, stopping generators");
        for generator in &generators {
            generator.request_stop();
        }

        let mut items_generated = 0;
        for generator in &mut generators {
            generator.join()?;
            let produced = generator.items_produced();
            debug!(generator = generator.name(), produced, "generator joined");
            items_generated += produced;
        }

        debug!(queued = queue.len(), "all generators joined, stopping collector");
        collector.request_stop();
        let statistics = collector.join()?;

        let elapsed = started_at.elapsed();
        info!(
            items_generated,
            items_collected = statistics.total_items(),
            recycling_rate = statistics.recycling_rate(),
            elapsed_ms = elapsed.as_millis() as u64,
            "simulation complete"
        );

        Ok(SimulationReport::new(
            self.run_id,
            elapsed,
            items_generated,
            statistics,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::error::SimulationError;

    fn short_test_config() -> SimulationConfig {
        SimulationConfig {
            generator_count: 2,
            simulation_duration_ms: 40,
            min_generation_pause_ms: 1,
            max_generation_pause_ms: 3,
            dequeue_timeout_ms: 5,
            seed: Some(7),
            report_path: None,
        }
    }

    #[test]
    fn test_new_rejects_invalid_configuration() {
        let mut config = short_test_config();
        config.generator_count = 0;

        assert!(matches!(
            SimulationOrchestrator::new(config),
            Err(SimulationError::Configuration(_))
        ));
    }

    #[test]
    fn test_run_collects_everything_generated() {
        let orchestrator = SimulationOrchestrator::new(short_test_config()).unwrap();
        let report = orchestrator.run().unwrap();

        assert!(report.items_generated > 0);
        assert_eq!(report.statistics.total_items(), report.items_generated);

        let count_sum: usize = report.statistics.counts_by_category().values().sum();
        assert_eq!(count_sum, report.items_generated);
    }

    #[test]
    fn test_run_reports_at_least_the_window_as_elapsed() {
        let config = short_test_config();
        let window = config.simulation_duration();
        let orchestrator = SimulationOrchestrator::new(config).unwrap();

        let report = orchestrator.run().unwrap();
        assert!(report.elapsed >= window);
    }

    #[test]
    fn test_each_orchestrator_gets_its_own_run_id() {
        let first = SimulationOrchestrator::new(short_test_config()).unwrap();
        let second = SimulationOrchestrator::new(short_test_config()).unwrap();

        assert_ne!(first.run_id(), second.run_id());
    }
}
