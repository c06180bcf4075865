//! Cycle scheduling.
//!
//! One scheduler, two run policies. The continuous policy is a repeating
//! fixed-interval timer that also fires immediately at startup; the bounded
//! policy runs a fixed number of cycles back-to-back with a fixed pause,
//! then holds connections open until the stop signal arrives.
//!
//! The run counter lives here, on the scheduler, and is incremented once
//! per cycle start for the lifetime of the process.

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use pulsecheck_core::{CategoryTally, CoreError, EndpointRegistry, RunSummary};
use pulsecheck_probe::{HttpClient, Probe};
use tracing::{error, info};

use crate::reporter::{now_stamp, Reporter};

/// How the scheduler drives cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPolicy {
    /// Repeating fixed-interval timer, first cycle immediate, until the
    /// stop signal.
    Continuous {
        /// Time between cycle starts.
        interval: Duration,
    },
    /// A fixed number of cycles with a fixed pause between them, then idle
    /// until the stop signal.
    Bounded {
        /// Number of cycles to run.
        max_runs: u32,
        /// Pause between consecutive cycles.
        pause: Duration,
    },
}

/// Drives the probe/report cycle.
pub struct Scheduler {
    registry_path: PathBuf,
    client: HttpClient,
    probe_timeout: Duration,
    reporter: Reporter,
    runs_completed: u64,
}

impl Scheduler {
    /// Creates a scheduler probing the registry at `registry_path`.
    pub fn new(
        registry_path: impl Into<PathBuf>,
        client: HttpClient,
        probe_timeout: Duration,
        reporter: Reporter,
    ) -> Self {
        Self {
            registry_path: registry_path.into(),
            client,
            probe_timeout,
            reporter,
            runs_completed: 0,
        }
    }

    /// Number of cycles started so far.
    pub fn runs_completed(&self) -> u64 {
        self.runs_completed
    }

    /// Runs under the given policy until `shutdown` resolves.
    ///
    /// Cycle-level failures (an unreadable registry) are logged and abort
    /// only that cycle; the loop continues.
    pub async fn run<F>(&mut self, policy: RunPolicy, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        match policy {
            RunPolicy::Continuous { interval } => {
                self.run_continuous(interval, shutdown).await;
            }
            RunPolicy::Bounded { max_runs, pause } => {
                self.run_bounded(max_runs, pause).await;
                info!(
                    runs = max_runs,
                    "Bounded runs complete, holding connections until stop signal"
                );
                shutdown.await;
            }
        }
    }

    /// Continuous mode: immediate first cycle, then one per interval tick.
    async fn run_continuous<F>(&mut self, interval: Duration, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(interval);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                () = &mut shutdown => {
                    info!("Stop signal received");
                    break;
                }
                _ = ticker.tick() => {
                    if let Err(err) = self.run_cycle(SummaryStyle::Categories).await {
                        error!(error = %err, "Cycle aborted");
                    }
                }
            }
        }
    }

    /// Bounded mode: `max_runs` cycles with a fixed pause between them.
    pub async fn run_bounded(&mut self, max_runs: u32, pause: Duration) {
        for run in 1..=max_runs {
            if let Err(err) = self.run_cycle(SummaryStyle::TotalOnly).await {
                error!(error = %err, "Cycle aborted");
            }
            if run < max_runs {
                tokio::time::sleep(pause).await;
            }
        }
    }

    /// Runs one full cycle: reload the registry, probe every endpoint in
    /// order, report each result, then report the summary.
    ///
    /// # Errors
    ///
    /// Propagates a registry load failure; the run counter has already
    /// been incremented by then, so the failed cycle keeps its number.
    pub async fn run_cycle(&mut self, style: SummaryStyle) -> Result<RunSummary, CoreError> {
        self.runs_completed += 1;
        let run_number = self.runs_completed;

        // Reread every cycle so registry edits apply without a restart.
        let registry = EndpointRegistry::load(&self.registry_path)?;

        println!("\n=== Running checks at {} (Run #{}) ===", now_stamp(), run_number);

        let mut tally = CategoryTally::new();
        for (name, url) in registry.iter() {
            let result = Probe::new(name, url)
                .with_timeout(self.probe_timeout)
                .check(&self.client)
                .await;
            tally.record(result.category());
            self.reporter.report_result(&result).await;
        }

        let summary = match style {
            SummaryStyle::Categories => RunSummary::with_tally(run_number, now_stamp(), tally),
            SummaryStyle::TotalOnly => {
                RunSummary::with_total(run_number, now_stamp(), registry.len())
            }
        };
        self.reporter.report_summary(&summary).await;

        Ok(summary)
    }
}

/// Which summary shape a cycle reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStyle {
    /// Full per-category counts.
    Categories,
    /// Endpoint total only.
    TotalOnly,
}
