use crate::classify::ClassConfidence;
use crate::image::Image;
use crate::models::backend::{ClassificationModel, ModelInfo};
use crate::utils::error::ClassifyError;
use crate::Result;
use std::sync::atomic::{AtomicUsize, Ordering};

/// 对任意图像都返回固定置信度的模型，用于测试与离线演示
pub struct FixedScoresModel {
    scores: Vec<ClassConfidence>,
    invocations: AtomicUsize,
}

impl FixedScoresModel {
    pub fn new(scores: Vec<ClassConfidence>) -> Self {
        Self {
            scores,
            invocations: AtomicUsize::new(0),
        }
    }

    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, f32)>) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(label, score)| ClassConfidence::new(label, score))
                .collect(),
        )
    }

    /// 解析 "airplane=2.0,cat=0.5" 形式的分数列表
    pub fn parse(input: &str) -> Result<Self> {
        let mut scores = Vec::new();
        for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (label, value) = entry.split_once('=').ok_or_else(|| {
                ClassifyError::ModelLoad(format!("Expected label=score, got '{}'", entry))
            })?;
            let value: f32 = value.trim().parse().map_err(|e| {
                ClassifyError::ModelLoad(format!("Invalid score in '{}': {}", entry, e))
            })?;
            scores.push(ClassConfidence::new(label.trim(), value));
        }
        Ok(Self::new(scores))
    }

    pub fn invocations(&self) -> usize {
        self.invocations.load(Ordering::SeqCst)
    }
}

impl ClassificationModel for FixedScoresModel {
    fn invoke(&self, _image: &Image) -> Result<Vec<ClassConfidence>> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        Ok(self.scores.clone())
    }

    fn info(&self) -> ModelInfo {
        ModelInfo {
            backend: "fixed".to_string(),
            num_classes: self.scores.len(),
            input_shape: None,
        }
    }
}
