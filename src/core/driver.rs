use crate::core::extractor::extract_word;
use crate::domain::model::{IdRange, RunReport, RunSummary, RunTally, WordId, WordRecord};
use crate::domain::ports::{PageSource, Storage};
use crate::utils::error::Result;
use std::time::Duration;

pub const WORDS_FILE: &str = "all_words.json";
pub const SUMMARY_FILE: &str = "summary.json";

#[derive(Debug, Clone)]
pub struct RunSettings {
    pub range: IdRange,
    /// 每個編號處理完後固定休息的時間
    pub delay: Duration,
    pub progress_every: u32,
    pub checkpoint_every: Option<u32>,
}

/// Walks the ID range once, fetching and extracting each page in order.
///
/// Per-ID failures (transport errors, pages without a word) are counted and
/// logged; only storage or serialization errors abort the run.
pub struct RunDriver<S: Storage, P: PageSource> {
    storage: S,
    source: P,
    settings: RunSettings,
}

impl<S: Storage, P: PageSource> RunDriver<S, P> {
    pub fn new(storage: S, source: P, settings: RunSettings) -> Self {
        Self {
            storage,
            source,
            settings,
        }
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    pub async fn run(&self) -> Result<RunReport> {
        let range = self.settings.range;
        self.storage.ensure_dir().await?;

        let mut tally = RunTally::new();

        for id in range.iter() {
            self.process_id(id, &mut tally).await;

            if !self.settings.delay.is_zero() {
                tokio::time::sleep(self.settings.delay).await;
            }

            if self.settings.progress_every > 0 && id.value() % self.settings.progress_every == 0 {
                tracing::info!(
                    "Progress: {}/{}, Success: {}, Failed: {}.",
                    id.value(),
                    range.end,
                    tally.successful,
                    tally.failed
                );
            }

            if let Some(every) = self.settings.checkpoint_every {
                let processed = tally.processed();
                if every > 0 && processed % every as usize == 0 && processed < range.len() {
                    tracing::debug!("💾 Checkpoint after {} IDs", processed);
                    self.persist(&tally, &tally.summary()).await?;
                }
            }
        }

        let summary = RunSummary::new(range.len(), tally.successful, tally.failed);
        self.persist(&tally, &summary).await?;

        Ok(RunReport {
            summary,
            output_dir: self.storage.location().to_string(),
        })
    }

    async fn process_id(&self, id: WordId, tally: &mut RunTally) {
        tracing::info!("Fetching word ID {}...", id);

        let html = match self.source.fetch_page(id).await {
            Ok(html) => html,
            Err(e) => {
                tracing::error!("Error fetching word ID {}: {}", id, e);
                tracing::error!("✗ (fetch failed)");
                tally.record_failure();
                return;
            }
        };

        match extract_word(Some(html.as_str())) {
            Some(word) => {
                tracing::debug!("✓ {} -> {}", id, word);
                tally.record_success(WordRecord::new(id, word));
            }
            None => {
                tracing::warn!("✗ (no data)");
                tally.record_failure();
            }
        }
    }

    async fn persist(&self, tally: &RunTally, summary: &RunSummary) -> Result<()> {
        let words_json = serde_json::to_string_pretty(&tally.document())?;
        self.storage
            .write_file(WORDS_FILE, words_json.as_bytes())
            .await?;

        let summary_json = serde_json::to_string_pretty(summary)?;
        self.storage
            .write_file(SUMMARY_FILE, summary_json.as_bytes())
            .await?;

        Ok(())
    }
}
