//! Statistics collection and reporting
//!
//! This module contains the run tally maintained by the collector, the
//! sustainability verdict derived from it, and the final report assembled
//! by the orchestrator.

use crate::types::{RunId, WasteCategory};
use crate::waste::WasteItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::simulation::error::SimulationResult;

/// Recycling rate at or above which a run counts as sustainable, in percent
pub const SUSTAINABLE_RATE_THRESHOLD: f64 = 60.0;

/// Recycling rate at or above which a run counts as moderate, in percent
pub const MODERATE_RATE_THRESHOLD: f64 = 40.0;

/// Tally of everything the collector has processed during a run
///
/// Owned exclusively by the collector thread while the simulation runs and
/// transferred to the orchestrator by the collector's `join`. Single
/// ownership is what keeps the counts consistent without locks: nobody can
/// read a half-updated tally.
///
/// The per-category map always contains every [`WasteCategory`], so report
/// consumers see explicit zeroes instead of missing keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionStatistics {
    recyclables: Vec<WasteItem>,
    non_recyclables: Vec<WasteItem>,
    counts_by_category: BTreeMap<WasteCategory, usize>,
    total_processing_time: Duration,
}

impl CollectionStatistics {
    /// Create an empty tally with every category counted at zero
    pub fn new() -> Self {
        let mut counts_by_category = BTreeMap::new();
        for category in WasteCategory::ALL {
            counts_by_category.insert(category, 0);
        }

        Self {
            recyclables: Vec::new(),
            non_recyclables: Vec::new(),
            counts_by_category,
            total_processing_time: Duration::ZERO,
        }
    }

    /// Classify one item into the tally
    ///
    /// Routes the item by its category's recyclability, bumps the category
    /// count, and accumulates the time the processing took.
    pub fn record(&mut self, item: WasteItem) {
        let started_at = Instant::now();

        *self.counts_by_category.entry(item.category()).or_insert(0) += 1;
        if item.is_recyclable() {
            self.recyclables.push(item);
        } else {
            self.non_recyclables.push(item);
        }

        self.total_processing_time += started_at.elapsed();
    }

    /// Recyclable items in the order they were collected
    pub fn recyclables(&self) -> &[WasteItem] {
        &self.recyclables
    }

    /// Non-recyclable items in the order they were collected
    pub fn non_recyclables(&self) -> &[WasteItem] {
        &self.non_recyclables
    }

    /// Per-category item counts, every category present
    pub fn counts_by_category(&self) -> &BTreeMap<WasteCategory, usize> {
        &self.counts_by_category
    }

    /// Number of items collected for one category
    pub fn count_for(&self, category: WasteCategory) -> usize {
        self.counts_by_category.get(&category).copied().unwrap_or(0)
    }

    /// Total number of items processed
    pub fn total_items(&self) -> usize {
        self.recyclables.len() + self.non_recyclables.len()
    }

    /// Number of recyclable items processed
    pub fn recycled_count(&self) -> usize {
        self.recyclables.len()
    }

    /// Number of non-recyclable items processed
    pub fn non_recycled_count(&self) -> usize {
        self.non_recyclables.len()
    }

    /// Cumulative time spent classifying and recording items
    pub fn total_processing_time(&self) -> Duration {
        self.total_processing_time
    }

    /// Share of processed items that were recyclable, in percent
    ///
    /// Returns 0.0 for a run that processed nothing.
    pub fn recycling_rate(&self) -> f64 {
        let total = self.total_items();
        if total == 0 {
            0.0
        } else {
            (self.recycled_count() as f64 / total as f64) * 100.0
        }
    }

    /// Sustainability verdict for the current recycling rate
    pub fn verdict(&self) -> SustainabilityVerdict {
        SustainabilityVerdict::from_rate(self.recycling_rate())
    }

    /// Generate a compact one-line summary suitable for logging
    pub fn compact_summary(&self) -> String {
        format!(
            "Collected: {} items ({} recyclable, {} non-recyclable), recycling rate {:.2}%, verdict {}",
            self.total_items(),
            self.recycled_count(),
            self.non_recycled_count(),
            self.recycling_rate(),
            self.verdict()
        )
    }
}

impl Default for CollectionStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CollectionStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compact_summary())
    }
}

/// Three-tier environmental assessment of a simulation run
///
/// Derived from the recycling rate: at least 60% recyclable is
/// [`Sustainable`](SustainabilityVerdict::Sustainable), at least 40% is
/// [`Moderate`](SustainabilityVerdict::Moderate), anything below that is
/// [`Unsustainable`](SustainabilityVerdict::Unsustainable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SustainabilityVerdict {
    /// Most of the waste was recycled (rate >= 60%)
    Sustainable,
    /// A fair share was recycled but separation can improve (rate >= 40%)
    Moderate,
    /// Very little of the waste was recycled (rate < 40%)
    Unsustainable,
}

impl SustainabilityVerdict {
    /// Classify a recycling rate given in percent
    pub fn from_rate(rate: f64) -> Self {
        if rate >= SUSTAINABLE_RATE_THRESHOLD {
            SustainabilityVerdict::Sustainable
        } else if rate >= MODERATE_RATE_THRESHOLD {
            SustainabilityVerdict::Moderate
        } else {
            SustainabilityVerdict::Unsustainable
        }
    }

    /// Explanatory sentence shown next to the verdict in reports
    pub fn message(&self) -> &'static str {
        match self {
            SustainabilityVerdict::Sustainable => "Most of the waste was recycled.",
            SustainabilityVerdict::Moderate => "There is room to improve waste separation.",
            SustainabilityVerdict::Unsustainable => "Very little of the waste was recycled.",
        }
    }
}

impl fmt::Display for SustainabilityVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SustainabilityVerdict::Sustainable => "Sustainable",
            SustainabilityVerdict::Moderate => "Moderate",
            SustainabilityVerdict::Unsustainable => "Unsustainable",
        };
        write!(f, "{}", label)
    }
}

/// Final report for one complete simulation run
///
/// Assembled by the orchestrator after all workers have been joined, so
/// every number in it is final.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Identifier of the run this report describes
    pub run_id: RunId,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Wall-clock duration of the run, including shutdown
    pub elapsed: Duration,
    /// Total items enqueued across all generators
    pub items_generated: usize,
    /// The collector's final tally
    pub statistics: CollectionStatistics,
}

impl SimulationReport {
    /// Assemble a report from a finished run
    pub fn new(
        run_id: RunId,
        elapsed: Duration,
        items_generated: usize,
        statistics: CollectionStatistics,
    ) -> Self {
        Self {
            run_id,
            generated_at: Utc::now(),
            elapsed,
            items_generated,
            statistics,
        }
    }

    /// Generate the human-readable results block
    pub fn summary_report(&self) -> String {
        let stats = &self.statistics;
        let mut report = String::new();

        report.push_str("===== Waste Sorting Simulation Results =====\n");
        report.push_str(&format!("Run: {}\n", self.run_id));
        report.push_str(&format!("Completed: {}\n", self.generated_at.to_rfc3339()));
        report.push_str(&format!(
            "Wall-clock time: {:.1} seconds\n",
            self.elapsed.as_secs_f64()
        ));
        report.push_str(&format!(
            "Item processing time: {} ms\n",
            stats.total_processing_time().as_millis()
        ));
        report.push_str(&format!("Items generated: {}\n", self.items_generated));

        report.push_str("\nItems collected per category:\n");
        for (category, count) in stats.counts_by_category() {
            report.push_str(&format!("  - {}: {}\n", category, count));
        }

        report.push_str(&format!("\nRecyclable items: {}\n", stats.recycled_count()));
        report.push_str(&format!(
            "Non-recyclable items: {}\n",
            stats.non_recycled_count()
        ));
        report.push_str(&format!("\nRecycling rate: {:.2}%\n", stats.recycling_rate()));

        let verdict = stats.verdict();
        report.push_str("\nEnvironmental analysis:\n");
        report.push_str(&format!("-> {} simulation. {}\n", verdict, verdict.message()));

        report.push_str("============================================\n");
        report
    }

    /// Write the report to a file as pretty-printed JSON
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> SimulationResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary_report())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statistics_with(categories: &[WasteCategory]) -> CollectionStatistics {
        let mut statistics = CollectionStatistics::new();
        for &category in categories {
            statistics.record(WasteItem::new(category));
        }
        statistics
    }

    #[test]
    fn test_new_statistics_count_every_category_at_zero() {
        let statistics = CollectionStatistics::new();

        assert_eq!(statistics.counts_by_category().len(), WasteCategory::ALL.len());
        for category in WasteCategory::ALL {
            assert_eq!(statistics.count_for(category), 0);
        }
        assert_eq!(statistics.total_items(), 0);
        assert_eq!(statistics.total_processing_time(), Duration::ZERO);
    }

    #[test]
    fn test_record_routes_items_by_recyclability() {
        let statistics = statistics_with(&WasteCategory::ALL);

        for item in statistics.recyclables() {
            assert!(item.is_recyclable());
        }
        for item in statistics.non_recyclables() {
            assert!(!item.is_recyclable());
        }
        assert_eq!(statistics.recycled_count(), 4);
        assert_eq!(statistics.non_recycled_count(), 2);
    }

    #[test]
    fn test_counts_stay_consistent_with_lists() {
        let mut statistics = CollectionStatistics::new();
        let sequence = [
            WasteCategory::Paper,
            WasteCategory::Paper,
            WasteCategory::Organic,
            WasteCategory::Glass,
            WasteCategory::NonRecyclable,
        ];

        for &category in &sequence {
            statistics.record(WasteItem::new(category));
            let count_sum: usize = statistics.counts_by_category().values().sum();
            assert_eq!(count_sum, statistics.total_items());
        }

        assert_eq!(statistics.count_for(WasteCategory::Paper), 2);
        assert_eq!(statistics.count_for(WasteCategory::Plastic), 0);
        assert_eq!(statistics.total_items(), 5);
    }

    #[test]
    fn test_recycling_rate_computation() {
        let statistics = statistics_with(&[
            WasteCategory::Paper,
            WasteCategory::Glass,
            WasteCategory::Metal,
            WasteCategory::Organic,
        ]);

        assert_eq!(statistics.recycling_rate(), 75.0);
    }

    #[test]
    fn test_recycling_rate_of_empty_run_is_zero() {
        let statistics = CollectionStatistics::new();
        let rate = statistics.recycling_rate();

        assert_eq!(rate, 0.0);
        assert!(!rate.is_nan());
    }

    #[test]
    fn test_verdict_thresholds() {
        assert_eq!(
            SustainabilityVerdict::from_rate(100.0),
            SustainabilityVerdict::Sustainable
        );
        assert_eq!(
            SustainabilityVerdict::from_rate(60.0),
            SustainabilityVerdict::Sustainable
        );
        assert_eq!(
            SustainabilityVerdict::from_rate(59.9),
            SustainabilityVerdict::Moderate
        );
        assert_eq!(
            SustainabilityVerdict::from_rate(40.0),
            SustainabilityVerdict::Moderate
        );
        assert_eq!(
            SustainabilityVerdict::from_rate(39.9),
            SustainabilityVerdict::Unsustainable
        );
        assert_eq!(
            SustainabilityVerdict::from_rate(0.0),
            SustainabilityVerdict::Unsustainable
        );
    }

    #[test]
    fn test_statistics_verdict_follows_rate() {
        let sustainable = statistics_with(&[WasteCategory::Paper, WasteCategory::Glass]);
        assert_eq!(sustainable.verdict(), SustainabilityVerdict::Sustainable);

        // 1 of 2 recyclable is 50%
        let moderate = statistics_with(&[WasteCategory::Paper, WasteCategory::Organic]);
        assert_eq!(moderate.verdict(), SustainabilityVerdict::Moderate);

        let unsustainable = statistics_with(&[
            WasteCategory::Organic,
            WasteCategory::NonRecyclable,
            WasteCategory::Organic,
        ]);
        assert_eq!(unsustainable.verdict(), SustainabilityVerdict::Unsustainable);
    }

    #[test]
    fn test_verdict_display_and_messages() {
        assert_eq!(SustainabilityVerdict::Sustainable.to_string(), "Sustainable");
        assert_eq!(SustainabilityVerdict::Moderate.to_string(), "Moderate");
        assert_eq!(
            SustainabilityVerdict::Unsustainable.to_string(),
            "Unsustainable"
        );

        assert_eq!(
            SustainabilityVerdict::Sustainable.message(),
            "Most of the waste was recycled."
        );
        assert!(!SustainabilityVerdict::Moderate.message().is_empty());
        assert!(!SustainabilityVerdict::Unsustainable.message().is_empty());
    }

    #[test]
    fn test_compact_summary_contents() {
        let statistics = statistics_with(&[WasteCategory::Paper, WasteCategory::Organic]);
        let summary = statistics.compact_summary();

        assert!(summary.contains("2 items"));
        assert!(summary.contains("1 recyclable"));
        assert!(summary.contains("1 non-recyclable"));
        assert!(summary.contains("50.00%"));
    }

    #[test]
    fn test_summary_report_contents() {
        let statistics = statistics_with(&[
            WasteCategory::Paper,
            WasteCategory::Paper,
            WasteCategory::Organic,
        ]);
        let total = statistics.total_items();
        let report = SimulationReport::new(
            RunId::new(),
            Duration::from_millis(1500),
            total,
            statistics,
        );

        let summary = report.summary_report();
        assert!(summary.contains("Run: RUN_"));
        assert!(summary.contains("Wall-clock time: 1.5 seconds"));
        assert!(summary.contains("Items generated: 3"));
        assert!(summary.contains("  - Paper: 2"));
        assert!(summary.contains("  - Plastic: 0"));
        assert!(summary.contains("Recyclable items: 2"));
        assert!(summary.contains("Non-recyclable items: 1"));
        assert!(summary.contains("Recycling rate: 66.67%"));
        assert!(summary.contains("-> Sustainable simulation."));
    }

    #[test]
    fn test_report_serialization_roundtrip() {
        let statistics = statistics_with(&[WasteCategory::Metal, WasteCategory::Organic]);
        let report = SimulationReport::new(RunId::new(), Duration::from_secs(2), 2, statistics);

        let json = serde_json::to_string(&report).unwrap();
        let restored: SimulationReport = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.run_id, report.run_id);
        assert_eq!(restored.items_generated, 2);
        assert_eq!(restored.statistics.total_items(), 2);
        assert_eq!(
            restored.statistics.count_for(WasteCategory::Metal),
            report.statistics.count_for(WasteCategory::Metal)
        );
    }

    #[test]
    fn test_write_json_produces_readable_report() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("report.json");

        let statistics = statistics_with(&[WasteCategory::Glass]);
        let report = SimulationReport::new(RunId::new(), Duration::from_secs(1), 1, statistics);
        report.write_json(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert!(value["run_id"].as_str().unwrap().starts_with("RUN_"));
        assert_eq!(value["items_generated"], 1);
        assert_eq!(
            value["statistics"]["counts_by_category"]
                .as_object()
                .unwrap()
                .len(),
            WasteCategory::ALL.len()
        );
    }
}
