use crate::core::driver::RunDriver;
use crate::domain::model::RunReport;
use crate::domain::ports::{PageSource, Storage};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use chrono::Local;

/// Runs a [`RunDriver`] and reports on it: start banner, optional process
/// stats, and the completion summary.
pub struct FetchEngine<S: Storage, P: PageSource> {
    driver: RunDriver<S, P>,
    monitor: SystemMonitor,
}

impl<S: Storage, P: PageSource> FetchEngine<S, P> {
    pub fn new(driver: RunDriver<S, P>) -> Self {
        Self::new_with_monitoring(driver, false)
    }

    pub fn new_with_monitoring(driver: RunDriver<S, P>, monitor_enabled: bool) -> Self {
        Self {
            driver,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub async fn run(&self) -> Result<RunReport> {
        let started_at = Local::now();
        let range = self.driver.settings().range;

        tracing::info!(
            "🚀 Starting to fetch words {:04}..{:04} ({} IDs)",
            range.start,
            range.end,
            range.len()
        );
        self.monitor.log_stats("Start");

        let report = self.driver.run().await?;

        self.monitor.log_final_stats();
        let elapsed = Local::now() - started_at;
        log_completion(&report, started_at.format("%Y-%m-%d %H:%M:%S").to_string(), elapsed);

        Ok(report)
    }
}

fn log_completion(report: &RunReport, started_at: String, elapsed: chrono::TimeDelta) {
    let summary = &report.summary;
    tracing::info!("✅ Fetching completed!");
    tracing::info!("Total words attempted: {}", summary.total_attempted);
    tracing::info!("Successful fetches: {}", summary.successful_fetches);
    tracing::info!("Failed fetches: {}", summary.failed_fetches);
    tracing::info!("Success rate: {}", summary.success_rate);
    tracing::info!("Data saved to: {}", report.output_dir);
    tracing::info!(
        "Started at {}, took {:.1}s",
        started_at,
        elapsed.num_milliseconds() as f64 / 1000.0
    );
}
