//! Configuration structures for the waste sorting simulator
//!
//! This module contains the simulation configuration structure and validation logic
//! that control how many generators run, how long the simulation window lasts, and
//! the timing bounds used by the generator and collector threads.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default simulation parameters
pub mod defaults {
    /// Number of concurrent waste generators
    pub const GENERATOR_COUNT: usize = 3;

    /// Length of the simulation window in milliseconds (3 minutes)
    pub const SIMULATION_DURATION_MS: u64 = 180_000;

    /// Shortest pause between two generated items, in milliseconds
    pub const MIN_GENERATION_PAUSE_MS: u64 = 200;

    /// Longest pause between two generated items, in milliseconds
    pub const MAX_GENERATION_PAUSE_MS: u64 = 1_000;

    /// Upper bound on a single blocking dequeue attempt, in milliseconds
    pub const DEQUEUE_TIMEOUT_MS: u64 = 500;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "waste-sort-simulator",
    version = "0.1.0",
    about = "Waste Sort Simulator - Concurrent generators feeding a classifying collector",
    long_about = "Runs a multi-threaded waste sorting simulation: several generator threads \
produce waste items of random categories at random intervals into a shared queue, while a \
single collector thread drains the queue, classifies every item as recyclable or not, and \
tallies per-category statistics. At the end of the run a sorting report with the recycling \
rate and a sustainability verdict is printed.

EXAMPLES:
    # Run with default settings (3 generators, 3 minute window)
    waste-sort-simulator

    # Use a configuration file
    waste-sort-simulator --config config.json

    # Short reproducible run with five generators
    waste-sort-simulator --generators 5 --duration-ms 10000 --seed 42

    # Generate configuration template
    waste-sort-simulator --print-config > my-config.json

    # Validate configuration without running
    waste-sort-simulator --config my-config.json --dry-run

    # Write the final report as JSON
    waste-sort-simulator --report report.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file format: JSON (.json)

    Use --print-config to generate a template configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of generator threads
    #[arg(
        long,
        help = "Number of generator threads",
        long_help = "Number of concurrent waste generator threads. Must be greater than 0. Default: 3"
    )]
    pub generators: Option<usize>,

    /// Simulation window length in milliseconds
    #[arg(
        long,
        help = "Simulation window in milliseconds",
        long_help = "How long generators keep producing before the shutdown handshake starts. Must be greater than 0. Default: 180000 (3 minutes)"
    )]
    pub duration_ms: Option<u64>,

    /// Minimum pause between generated items in milliseconds
    #[arg(long, help = "Minimum generation pause in milliseconds")]
    pub min_pause_ms: Option<u64>,

    /// Maximum pause between generated items in milliseconds
    #[arg(long, help = "Maximum generation pause in milliseconds")]
    pub max_pause_ms: Option<u64>,

    /// Collector dequeue timeout in milliseconds
    #[arg(
        long,
        help = "Collector dequeue timeout in milliseconds",
        long_help = "Upper bound on a single blocking dequeue attempt by the collector. Keeps the collector responsive to stop requests. Must be greater than 0. Default: 500"
    )]
    pub dequeue_timeout_ms: Option<u64>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Output path for the final JSON report
    #[arg(long, help = "Output path for the final JSON report")]
    pub report: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of generator threads
    pub generator_count: Option<usize>,

    /// Simulation window length in milliseconds
    pub simulation_duration_ms: Option<u64>,

    /// Minimum pause between generated items in milliseconds
    pub min_generation_pause_ms: Option<u64>,

    /// Maximum pause between generated items in milliseconds
    pub max_generation_pause_ms: Option<u64>,

    /// Collector dequeue timeout in milliseconds
    pub dequeue_timeout_ms: Option<u64>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output path for the final JSON report
    pub report_path: Option<String>,
}

/// Configuration for the waste sorting simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of generator threads
    pub generator_count: usize,

    /// Simulation window length in milliseconds
    pub simulation_duration_ms: u64,

    /// Minimum pause between generated items in milliseconds
    pub min_generation_pause_ms: u64,

    /// Maximum pause between generated items in milliseconds
    pub max_generation_pause_ms: u64,

    /// Collector dequeue timeout in milliseconds
    pub dequeue_timeout_ms: u64,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Output path for the final JSON report
    pub report_path: Option<String>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Generator count is invalid
    #[error("Generator count must be greater than 0, got {0}")]
    InvalidGeneratorCount(usize),

    /// Simulation duration is invalid
    #[error("Simulation duration must be greater than 0 ms, got {0}")]
    InvalidDuration(u64),

    /// Generation pause range is invalid
    #[error("Invalid generation pause range: min ({0} ms) must be <= max ({1} ms)")]
    InvalidPauseRange(u64, u64),

    /// Dequeue timeout is invalid
    #[error("Dequeue timeout must be greater than 0 ms, got {0}")]
    InvalidDequeueTimeout(u64),
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generator_count: defaults::GENERATOR_COUNT,
            simulation_duration_ms: defaults::SIMULATION_DURATION_MS,
            min_generation_pause_ms: defaults::MIN_GENERATION_PAUSE_MS,
            max_generation_pause_ms: defaults::MAX_GENERATION_PAUSE_MS,
            dequeue_timeout_ms: defaults::DEQUEUE_TIMEOUT_MS,
            seed: None,
            report_path: None,
        }
    }
}

impl SimulationConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            generator_count: config_file.generator_count.unwrap_or(defaults.generator_count),
            simulation_duration_ms: config_file
                .simulation_duration_ms
                .unwrap_or(defaults.simulation_duration_ms),
            min_generation_pause_ms: config_file
                .min_generation_pause_ms
                .unwrap_or(defaults.min_generation_pause_ms),
            max_generation_pause_ms: config_file
                .max_generation_pause_ms
                .unwrap_or(defaults.max_generation_pause_ms),
            dequeue_timeout_ms: config_file
                .dequeue_timeout_ms
                .unwrap_or(defaults.dequeue_timeout_ms),
            seed: config_file.seed.or(defaults.seed),
            report_path: config_file.report_path.or(defaults.report_path),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.generators {
            config.generator_count = value;
        }
        if let Some(value) = args.duration_ms {
            config.simulation_duration_ms = value;
        }
        if let Some(value) = args.min_pause_ms {
            config.min_generation_pause_ms = value;
        }
        if let Some(value) = args.max_pause_ms {
            config.max_generation_pause_ms = value;
        }
        if let Some(value) = args.dequeue_timeout_ms {
            config.dequeue_timeout_ms = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.report {
            config.report_path = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // Validate generator count
        if self.generator_count == 0 {
            return Err(ConfigValidationError::InvalidGeneratorCount(self.generator_count));
        }

        // Validate simulation window
        if self.simulation_duration_ms == 0 {
            return Err(ConfigValidationError::InvalidDuration(self.simulation_duration_ms));
        }

        // Validate pause range
        if self.min_generation_pause_ms > self.max_generation_pause_ms {
            return Err(ConfigValidationError::InvalidPauseRange(
                self.min_generation_pause_ms,
                self.max_generation_pause_ms,
            ));
        }

        // Validate dequeue timeout (a zero bound would turn the collector into a busy loop)
        if self.dequeue_timeout_ms == 0 {
            return Err(ConfigValidationError::InvalidDequeueTimeout(self.dequeue_timeout_ms));
        }

        Ok(())
    }

    /// Get the simulation window as a `Duration`
    pub fn simulation_duration(&self) -> Duration {
        Duration::from_millis(self.simulation_duration_ms)
    }

    /// Get the generation pause bounds as a `(min, max)` tuple of `Duration`
    pub fn generation_pause_range(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.min_generation_pause_ms),
            Duration::from_millis(self.max_generation_pause_ms),
        )
    }

    /// Get the collector dequeue timeout as a `Duration`
    pub fn dequeue_timeout(&self) -> Duration {
        Duration::from_millis(self.dequeue_timeout_ms)
    }
}
