use crate::classify::ClassConfidence;
use crate::config::{OnnxConfig, PreprocessConfig};
use crate::image::{Image, ImagePreprocessor};
use crate::models::backend::{ClassificationModel, ModelInfo};
use crate::models::labels::load_labels;
use crate::utils::error::ClassifyError;
use crate::{Config, Result};
use ort::{
    inputs,
    session::{builder::GraphOptimizationLevel, Session},
    value::Tensor,
};
use parking_lot::Mutex;
use std::path::Path;

/// 基于 ONNX Runtime 的分类模型
pub struct OnnxModel {
    session: Mutex<Session>,
    input_name: String,  // 动态发现的输入名称
    output_name: String, // 动态发现的输出名称
    labels: Vec<String>,
    preprocess: PreprocessConfig,
}

impl OnnxModel {
    pub fn load(config: &Config) -> Result<Self> {
        let labels = load_labels(config.labels_path.as_deref())?;
        let session = Self::build_session(&config.model_path, &config.onnx_config)?;

        let input_name = match session.inputs.first() {
            Some(input) => input.name.clone(),
            None => {
                return Err(ClassifyError::ModelLoad(
                    "Classification model has no inputs".to_string(),
                ))
            }
        };

        let output_name = match session.outputs.first() {
            Some(output) => output.name.clone(),
            None => {
                return Err(ClassifyError::ModelLoad(
                    "Classification model has no outputs".to_string(),
                ))
            }
        };

        tracing::info!(
            "Classification model input: '{}', output: '{}'",
            input_name,
            output_name
        );
        // 记录所有可用输出用于调试
        for (i, output) in session.outputs.iter().enumerate() {
            tracing::debug!("Classification output[{}]: '{}'", i, output.name);
        }

        Ok(Self {
            session: Mutex::new(session),
            input_name,
            output_name,
            labels,
            preprocess: config.preprocess_config.clone(),
        })
    }

    fn build_session(model_path: &Path, onnx_config: &OnnxConfig) -> Result<Session> {
        if !model_path.exists() {
            return Err(ClassifyError::ModelLoad(format!(
                "Classification model not found: {}",
                model_path.display()
            )));
        }

        tracing::info!("Loading classification model from: {}", model_path.display());

        let level = match onnx_config.optimization_level {
            0 => GraphOptimizationLevel::Disable,
            1 => GraphOptimizationLevel::Level1,
            2 => GraphOptimizationLevel::Level2,
            _ => GraphOptimizationLevel::Level3,
        };

        Session::builder()
            .and_then(|b| b.with_optimization_level(level))
            .and_then(|b| b.with_intra_threads(onnx_config.intra_threads))
            .and_then(|b| b.commit_from_file(model_path))
            .map_err(|e| {
                ClassifyError::ModelLoad(format!(
                    "Failed to create session for {}: {}",
                    model_path.display(),
                    e
                ))
            })
    }

    /// 将模型输出与标签配对
    fn pair_with_labels(&self, name: &str, scores: &[f32]) -> Result<Vec<ClassConfidence>> {
        if scores.len() != self.labels.len() {
            return Err(ClassifyError::inference(
                name,
                format!(
                    "model produced {} scores but {} labels are loaded",
                    scores.len(),
                    self.labels.len()
                ),
            ));
        }

        Ok(self
            .labels
            .iter()
            .zip(scores)
            .map(|(label, score)| ClassConfidence::new(label.clone(), *score))
            .collect())
    }
}

impl ClassificationModel for OnnxModel {
    fn invoke(&self, image: &Image) -> Result<Vec<ClassConfidence>> {
        let name = image.name();
        let input = ImagePreprocessor::to_tensor(image, &self.preprocess);
        let input_tensor =
            Tensor::from_array(input).map_err(|e| ClassifyError::inference(name, e))?;

        let scores: Vec<f32> = {
            let mut session = self.session.lock();
            let outputs = session
                .run(inputs![self.input_name.as_str() => input_tensor])
                .map_err(|e| ClassifyError::inference(name, e))?;

            match outputs.get(self.output_name.as_str()) {
                Some(output) => output
                    .try_extract_array::<f32>()
                    .map_err(|e| ClassifyError::inference(name, e))?
                    .iter()
                    .copied()
                    .collect(),
                None => {
                    let available: Vec<String> = outputs.keys().map(|s| s.to_string()).collect();
                    return Err(ClassifyError::inference(
                        name,
                        format!(
                            "output '{}' not found, available outputs: {:?}",
                            self.output_name, available
                        ),
                    ));
                }
            }
        };

        self.pair_with_labels(name, &scores)
    }

    fn info(&self) -> ModelInfo {
        ModelInfo {
            backend: "onnxruntime".to_string(),
            num_classes: self.labels.len(),
            input_shape: Some([
                1,
                3,
                self.preprocess.input_height as usize,
                self.preprocess.input_width as usize,
            ]),
        }
    }
}
