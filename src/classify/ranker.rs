use crate::classify::types::{ClassConfidence, PredictionOutcome, RankedResult};
use crate::utils::error::ClassifyError;
use crate::Result;

/// softmax 归一化与结果排序
pub struct ResultRanker;

impl ResultRanker {
    /// 数值稳定的 softmax：先减去最大值再取指数
    pub fn softmax(scores: &[f32]) -> Vec<f64> {
        let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max) as f64;

        let exp_values: Vec<f64> = scores.iter().map(|&s| (s as f64 - max).exp()).collect();
        let sum: f64 = exp_values.iter().sum();

        exp_values.into_iter().map(|v| v / sum).collect()
    }

    /// 对原始置信度做 softmax 并排序
    ///
    /// 输入已经是概率时也会再次归一化。
    pub fn rank(confidences: Vec<ClassConfidence>) -> Result<PredictionOutcome> {
        if confidences.is_empty() {
            return Err(ClassifyError::EmptyInput);
        }

        if let Some(bad) = confidences.iter().find(|c| !c.confidence.is_finite()) {
            return Err(ClassifyError::InvalidScore {
                label: bad.label.clone(),
                value: bad.confidence,
            });
        }

        let scores: Vec<f32> = confidences.iter().map(|c| c.confidence).collect();
        let probabilities = Self::softmax(&scores);

        let results: Vec<RankedResult> = confidences
            .into_iter()
            .zip(probabilities)
            .enumerate()
            .map(|(class_index, (c, probability))| RankedResult {
                label: c.label,
                probability,
                class_index,
            })
            .collect();

        // 只有严格更大才替换，保证相同概率时取第一个
        let mut top_idx = 0;
        for (i, result) in results.iter().enumerate().skip(1) {
            if result.probability > results[top_idx].probability {
                top_idx = i;
            }
        }
        let top = results[top_idx].clone();

        let mut ranking = results;
        ranking.sort_by(|a, b| b.probability.total_cmp(&a.probability));

        Ok(PredictionOutcome { ranking, top })
    }
}
