use crate::classify::ClassConfidence;
use crate::image::Image;
use crate::models::backend::{ClassificationModel, ModelInfo};
use crate::utils::error::ClassifyError;
use crate::Result;
use std::sync::Arc;

/// 图像分类器，持有一个已初始化的模型句柄
#[derive(Clone)]
pub struct Classifier {
    model: Arc<dyn ClassificationModel>,
}

impl Classifier {
    pub fn new(model: Arc<dyn ClassificationModel>) -> Self {
        Self { model }
    }

    pub fn model_info(&self) -> ModelInfo {
        self.model.info()
    }

    /// 图像分类，返回每个类别的原始置信度（模型原始顺序）
    pub fn classify(&self, image: Image) -> Result<Vec<ClassConfidence>> {
        let name = image.name().to_string();

        let confidences = self.model.invoke(&image).map_err(|e| match e {
            err @ ClassifyError::Inference { .. } => err,
            other => ClassifyError::inference(&name, other),
        })?;

        let expected = self.model.info().num_classes;
        if confidences.len() != expected {
            return Err(ClassifyError::inference(
                &name,
                format!(
                    "expected {} class scores, got {}",
                    expected,
                    confidences.len()
                ),
            ));
        }

        if let Some(bad) = confidences.iter().find(|c| !c.confidence.is_finite()) {
            return Err(ClassifyError::inference(
                &name,
                format!("non-finite score {} for class '{}'", bad.confidence, bad.label),
            ));
        }

        tracing::debug!("Raw confidences for '{}': {:?}", name, confidences);
        Ok(confidences)
    }
}
