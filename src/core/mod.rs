pub mod driver;
pub mod engine;
pub mod extractor;
pub mod fetcher;

pub use crate::domain::model::{RunReport, RunSummary, WordId, WordRecord};
pub use crate::domain::ports::{PageSource, Storage};
pub use crate::utils::error::Result;
