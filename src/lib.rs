pub mod classify;
pub mod config;
pub mod image;
pub mod models;
pub mod utils;

// 重新导出主要类型
pub use classify::{ClassificationPipeline, ClassificationResult, PredictionOutcome};
pub use config::Config;
pub use utils::error::ClassifyError;

pub type Result<T> = std::result::Result<T, ClassifyError>;
