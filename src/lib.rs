pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::cli::LocalStorage;
pub use crate::config::toml_config::FetchConfig;
pub use crate::core::{
    driver::{RunDriver, RunSettings},
    engine::FetchEngine,
    extractor::extract_word,
    fetcher::{HttpPageSource, HttpSettings},
};
pub use crate::domain::model::{IdRange, RunReport, RunSummary, WordId, WordRecord, WordsDocument};
pub use crate::utils::error::{FetchError, Result};
