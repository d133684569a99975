pub mod pipeline;
pub mod ranker;
pub mod report;
pub mod types;

pub use pipeline::ClassificationPipeline;
pub use ranker::ResultRanker;
pub use report::ReportFormat;
pub use types::{
    ClassConfidence, ClassificationResult, ClassificationStats, PredictionOutcome, RankedResult,
};
