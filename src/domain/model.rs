use serde::{Deserialize, Serialize};
use std::fmt;

/// 詞表編號，輸出時一律補零至四位數 (1 -> "0001")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordId(u32);

impl WordId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// Closed interval `[start, end]` of IDs to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub start: u32,
    pub end: u32,
}

impl IdRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = WordId> {
        (self.start..=self.end).map(WordId::new)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub id: String,
}

impl WordRecord {
    pub fn new(id: WordId, word: String) -> Self {
        Self {
            word,
            id: id.to_string(),
        }
    }
}

/// `all_words.json` 的內容
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordsDocument {
    pub words: Vec<WordRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub total_attempted: usize,
    pub successful_fetches: usize,
    pub failed_fetches: usize,
    pub success_rate: String,
}

impl RunSummary {
    pub fn new(total_attempted: usize, successful_fetches: usize, failed_fetches: usize) -> Self {
        Self {
            total_attempted,
            successful_fetches,
            failed_fetches,
            success_rate: format_success_rate(successful_fetches, total_attempted),
        }
    }
}

pub fn format_success_rate(successful: usize, total: usize) -> String {
    let rate = if total == 0 {
        0.0
    } else {
        successful as f64 / total as f64 * 100.0
    };
    format!("{:.2}%", rate)
}

/// 單次執行期間的累計狀態，由 driver 擁有
#[derive(Debug, Default)]
pub struct RunTally {
    pub words: Vec<WordRecord>,
    pub successful: usize,
    pub failed: usize,
}

impl RunTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_success(&mut self, record: WordRecord) {
        self.words.push(record);
        self.successful += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn processed(&self) -> usize {
        self.successful + self.failed
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary::new(self.processed(), self.successful, self.failed)
    }

    pub fn document(&self) -> WordsDocument {
        WordsDocument {
            words: self.words.clone(),
        }
    }
}

/// Outcome of a finished run, returned to the caller for reporting.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub summary: RunSummary,
    pub output_dir: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_id_is_zero_padded() {
        assert_eq!(WordId::new(1).to_string(), "0001");
        assert_eq!(WordId::new(42).to_string(), "0042");
        assert_eq!(WordId::new(4762).to_string(), "4762");
    }

    #[test]
    fn test_id_range_len_and_order() {
        let range = IdRange::new(1, 3);
        assert_eq!(range.len(), 3);
        let ids: Vec<String> = range.iter().map(|id| id.to_string()).collect();
        assert_eq!(ids, vec!["0001", "0002", "0003"]);
        assert!(IdRange::new(5, 4).is_empty());
    }

    #[test]
    fn test_success_rate_two_decimals() {
        assert_eq!(format_success_rate(1, 3), "33.33%");
        assert_eq!(format_success_rate(2, 3), "66.67%");
        assert_eq!(format_success_rate(4762, 4762), "100.00%");
        assert_eq!(format_success_rate(0, 0), "0.00%");
    }

    #[test]
    fn test_tally_counts_add_up() {
        let mut tally = RunTally::new();
        tally.record_failure();
        tally.record_success(WordRecord::new(WordId::new(2), "水".to_string()));
        tally.record_failure();

        let summary = tally.summary();
        assert_eq!(summary.total_attempted, 3);
        assert_eq!(summary.successful_fetches, 1);
        assert_eq!(summary.failed_fetches, 2);
        assert_eq!(summary.success_rate, "33.33%");
        assert_eq!(tally.words.len(), summary.successful_fetches);
    }

    #[test]
    fn test_word_record_field_order() {
        let record = WordRecord::new(WordId::new(2), "水".to_string());
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"word":"水","id":"0002"}"#);
    }
}
