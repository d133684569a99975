pub mod backend;
pub mod classifier;
pub mod fixed;
pub mod labels;
pub mod onnx;

pub use backend::{ClassificationModel, ModelInfo};
pub use classifier::Classifier;
pub use fixed::FixedScoresModel;
pub use labels::{load_labels, CIFAR10_LABELS};
pub use onnx::OnnxModel;
