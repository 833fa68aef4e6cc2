//! Stage timing for a single pipeline run
//!
//! One `StageProfiler` is constructed per run, driven at each phase
//! boundary by the orchestrator, and asked for a `ProfileReport` once the
//! run finishes. The profiler holds no process-wide state; concurrent runs
//! each own their own instance.

use std::time::Instant;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::types::{ProfileReport, StageSummary};

/// One closed or skipped phase record
///
/// Immutable once appended to the profiler's stage sequence. Skipped
/// stages carry no timestamps and a zero duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub name: String,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub duration_ms: u64,
    pub skipped: bool,
}

/// Stage currently being timed
#[derive(Debug, Clone)]
struct OpenStage {
    name: String,
    started_at: DateTime<Utc>,
    start: Instant,
}

/// Wall-clock profiler for the phases of one pipeline run
///
/// Two states: idle (no stage open) and open (one stage timing). Every
/// operation is safe in either state; sloppy call sequences degrade to
/// silent auto-closes or no-ops instead of errors. Durations come from the
/// monotonic clock, absolute stamps from the UTC wall clock.
#[derive(Debug, Clone)]
pub struct StageProfiler {
    run_id: Uuid,
    constructed_at: DateTime<Utc>,
    started: Instant,
    open: Option<OpenStage>,
    stages: Vec<Stage>,
}

impl StageProfiler {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            constructed_at: Utc::now(),
            started: Instant::now(),
            open: None,
            stages: Vec::new(),
        }
    }

    /// Identifier correlating this run's report with host logs
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Absolute stamp of profiler construction
    pub fn started_at(&self) -> DateTime<Utc> {
        self.constructed_at
    }

    /// Closed and skipped stages recorded so far, in insertion order
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Whether a stage is currently being timed
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Open a new stage, silently closing the previous one if still open
    pub fn start_stage<S: Into<String>>(&mut self, name: S) {
        self.close_open();
        self.open = Some(OpenStage {
            name: name.into(),
            started_at: Utc::now(),
            start: Instant::now(),
        });
    }

    /// Close the open stage; no-op when nothing is open, so callers may
    /// invoke it defensively
    pub fn end_stage(&mut self) {
        self.close_open();
    }

    /// Record a stage that never ran, closing the open one first
    ///
    /// The skipped entry is appended with a zero duration and the profiler
    /// stays idle; skipping never opens a stage.
    pub fn skip<S: Into<String>>(&mut self, name: S) {
        self.close_open();
        self.stages.push(Stage {
            name: name.into(),
            started_at: None,
            ended_at: None,
            duration_ms: 0,
            skipped: true,
        });
    }

    /// Idempotent finalizer
    ///
    /// Call before the final report whenever the last phase may still be
    /// open; a stage left open is excluded from the report's stage list
    /// (though still covered by its total).
    pub fn close_all(&mut self) {
        self.close_open();
    }

    fn close_open(&mut self) {
        if let Some(open) = self.open.take() {
            self.stages.push(Stage {
                name: open.name,
                started_at: Some(open.started_at),
                ended_at: Some(Utc::now()),
                duration_ms: open.start.elapsed().as_millis() as u64,
                skipped: false,
            });
        }
    }

    /// Snapshot the run without mutating profiler state
    ///
    /// `total_ms` is anchored at construction and independent of stage
    /// bookkeeping. `slowest` is a left-to-right strict-maximum scan, so
    /// the first stage to reach the maximum duration wins ties and an
    /// empty or all-skipped sequence yields `"none"`.
    pub fn report(&self) -> ProfileReport {
        let total_ms = self.started.elapsed().as_millis() as u64;

        let mut slowest: &str = "none";
        let mut best_ms = 0u64;
        for stage in &self.stages {
            if stage.duration_ms > best_ms {
                best_ms = stage.duration_ms;
                slowest = &stage.name;
            }
        }

        ProfileReport {
            run_id: self.run_id,
            stages: self
                .stages
                .iter()
                .map(|stage| StageSummary {
                    name: stage.name.clone(),
                    duration_ms: stage.duration_ms,
                    duration_s: format_seconds(stage.duration_ms),
                    skipped: stage.skipped,
                })
                .collect(),
            total_ms,
            total_s: format_seconds(total_ms),
            slowest: slowest.to_string(),
        }
    }
}

impl Default for StageProfiler {
    fn default() -> Self {
        Self::new()
    }
}

/// Milliseconds rendered as a two-decimal seconds string
pub(crate) fn format_seconds(ms: u64) -> String {
    format!("{:.2}", ms as f64 / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    fn closed_stage(name: &str, duration_ms: u64) -> Stage {
        Stage {
            name: name.to_string(),
            started_at: Some(Utc::now()),
            ended_at: Some(Utc::now()),
            duration_ms,
            skipped: false,
        }
    }

    #[test]
    fn test_start_stage_auto_closes_previous() {
        let mut profiler = StageProfiler::new();
        profiler.start_stage("research");
        thread::sleep(Duration::from_millis(10));
        profiler.start_stage("hooks");

        assert_eq!(profiler.stages().len(), 1);
        let research = &profiler.stages()[0];
        assert_eq!(research.name, "research");
        assert!(!research.skipped);
        assert!(research.duration_ms >= 10);
        assert!(research.started_at.is_some());
        assert!(research.ended_at.is_some());
        assert!(profiler.is_open());
    }

    #[test]
    fn test_end_stage_is_noop_when_idle() {
        let mut profiler = StageProfiler::new();
        profiler.end_stage();
        profiler.end_stage();

        assert!(profiler.stages().is_empty());
        assert!(!profiler.is_open());
    }

    #[test]
    fn test_skip_records_zero_duration_entry() {
        let mut profiler = StageProfiler::new();
        profiler.skip("images");

        assert_eq!(profiler.stages().len(), 1);
        let skipped = &profiler.stages()[0];
        assert!(skipped.skipped);
        assert_eq!(skipped.duration_ms, 0);
        assert!(skipped.started_at.is_none());
        assert!(skipped.ended_at.is_none());
        assert!(!profiler.is_open());
    }

    #[test]
    fn test_skip_closes_open_stage_first() {
        let mut profiler = StageProfiler::new();
        profiler.start_stage("research");
        profiler.skip("images");

        assert_eq!(profiler.stages().len(), 2);
        assert_eq!(profiler.stages()[0].name, "research");
        assert!(!profiler.stages()[0].skipped);
        assert_eq!(profiler.stages()[1].name, "images");
        assert!(profiler.stages()[1].skipped);
        assert!(!profiler.is_open());
    }

    #[test]
    fn test_close_all_is_idempotent() {
        let mut profiler = StageProfiler::new();
        profiler.start_stage("script");
        profiler.close_all();
        let once = profiler.stages().to_vec();
        profiler.close_all();

        assert_eq!(profiler.stages(), once.as_slice());
        assert_eq!(profiler.stages().len(), 1);
    }

    #[test]
    fn test_report_excludes_open_stage_but_counts_total() {
        let mut profiler = StageProfiler::new();
        profiler.start_stage("research");
        profiler.end_stage();
        profiler.start_stage("script");
        thread::sleep(Duration::from_millis(10));

        let report = profiler.report();
        assert_eq!(report.stages.len(), 1);
        assert_eq!(report.stages[0].name, "research");
        assert!(report.total_ms >= 10);
        // report() is a pure read; the stage is still open afterwards
        assert!(profiler.is_open());
    }

    #[test]
    fn test_report_total_is_independent_of_stages() {
        let profiler = StageProfiler::new();
        thread::sleep(Duration::from_millis(10));

        let report = profiler.report();
        assert!(report.stages.is_empty());
        assert!(report.total_ms >= 10);
        assert_eq!(report.slowest, "none");
    }

    #[test]
    fn test_slowest_first_wins_on_ties() {
        let mut profiler = StageProfiler::new();
        profiler.stages = vec![
            closed_stage("research", 5),
            closed_stage("hooks", 5),
            closed_stage("script", 3),
        ];

        assert_eq!(profiler.report().slowest, "research");
    }

    #[test]
    fn test_slowest_picks_strict_maximum() {
        let mut profiler = StageProfiler::new();
        profiler.stages = vec![
            closed_stage("research", 3),
            closed_stage("script", 12),
            closed_stage("hooks", 7),
        ];

        assert_eq!(profiler.report().slowest, "script");
    }

    #[test]
    fn test_all_skipped_stages_yield_none() {
        let mut profiler = StageProfiler::new();
        profiler.skip("research");
        profiler.skip("hooks");

        let report = profiler.report();
        assert_eq!(report.stages.len(), 2);
        assert_eq!(report.slowest, "none");
    }

    #[test]
    fn test_duration_seconds_formatting() {
        assert_eq!(format_seconds(0), "0.00");
        assert_eq!(format_seconds(10), "0.01");
        assert_eq!(format_seconds(1500), "1.50");
        assert_eq!(format_seconds(61230), "61.23");
    }

    #[test]
    fn test_stage_names_need_not_be_unique() {
        let mut profiler = StageProfiler::new();
        profiler.start_stage("retry");
        profiler.end_stage();
        profiler.start_stage("retry");
        profiler.end_stage();

        assert_eq!(profiler.stages().len(), 2);
        assert_eq!(profiler.stages()[0].name, "retry");
        assert_eq!(profiler.stages()[1].name, "retry");
    }
}
