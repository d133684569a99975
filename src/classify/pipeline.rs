use crate::{
    classify::{ClassificationResult, ClassificationStats, ResultRanker},
    image::ImageLoader,
    models::Classifier,
    Result,
};
use std::time::Instant;

/// 分类流水线：加载图像 → 模型推理 → softmax 排序
pub struct ClassificationPipeline {
    loader: ImageLoader,
    classifier: Classifier,
}

impl ClassificationPipeline {
    pub fn new(loader: ImageLoader, classifier: Classifier) -> Self {
        Self { loader, classifier }
    }

    /// 对图像目录中的单张图像分类
    pub fn classify(&self, name: &str) -> Result<ClassificationResult> {
        let start_time = Instant::now();

        let image = self.loader.load(name)?;
        let (width, height) = (image.width(), image.height());
        let load_time = start_time.elapsed();

        let inference_start = Instant::now();
        let confidences = self.classifier.classify(image)?;
        let inference_time = inference_start.elapsed();

        let rank_start = Instant::now();
        let outcome = ResultRanker::rank(confidences)?;
        let rank_time = rank_start.elapsed();

        let total_time = start_time.elapsed();

        tracing::info!(
            "Classification completed: image={}, top={}, probability={:.4}, total_time={:.3}s",
            name,
            outcome.top.label,
            outcome.top.probability,
            total_time.as_secs_f32()
        );

        Ok(ClassificationResult {
            image: name.to_string(),
            width,
            height,
            outcome,
            stats: ClassificationStats {
                load_time_ms: load_time.as_millis() as u64,
                inference_time_ms: inference_time.as_millis() as u64,
                rank_time_ms: rank_time.as_millis() as u64,
                total_time_ms: total_time.as_millis() as u64,
            },
            model_info: self.classifier.model_info(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FixedScoresModel;
    use crate::utils::error::ClassifyError;
    use image::{Rgb, RgbImage};
    use std::sync::Arc;
    use tempfile::TempDir;

    fn pipeline_with(dir: &TempDir, model: Arc<FixedScoresModel>) -> ClassificationPipeline {
        ClassificationPipeline::new(ImageLoader::new(dir.path()), Classifier::new(model))
    }

    #[test]
    fn reports_image_dimensions() {
        let dir = TempDir::new().unwrap();
        RgbImage::from_pixel(12, 7, Rgb([1, 2, 3]))
            .save(dir.path().join("frog.png"))
            .unwrap();

        let model = Arc::new(FixedScoresModel::from_pairs([("frog", 1.0), ("deer", 0.0)]));
        let result = pipeline_with(&dir, model).classify("frog.png").unwrap();

        assert_eq!(result.image, "frog.png");
        assert_eq!((result.width, result.height), (12, 7));
        assert_eq!(result.outcome.top.label, "frog");
        assert_eq!(result.model_info.backend, "fixed");
        assert_eq!(result.model_info.num_classes, 2);
        assert!(result.stats.total_time_ms >= result.stats.inference_time_ms);
    }

    #[test]
    fn empty_model_output_fails_the_request() {
        let dir = TempDir::new().unwrap();
        RgbImage::new(4, 4).save(dir.path().join("blank.png")).unwrap();

        let model = Arc::new(FixedScoresModel::new(Vec::new()));
        let err = pipeline_with(&dir, model).classify("blank.png").unwrap_err();
        assert!(matches!(err, ClassifyError::EmptyInput));
    }
}
