use crate::models::ModelInfo;
use serde::{Deserialize, Serialize};

/// 模型输出的原始类别置信度（未必是概率）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassConfidence {
    pub label: String,
    pub confidence: f32,
}

impl ClassConfidence {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }
}

/// softmax 归一化后的类别概率
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub label: String,
    /// 归一化概率 (0.0 - 1.0)
    pub probability: f64,
    /// 类别在模型原始输出中的位置
    pub class_index: usize,
}

/// 单次分类的完整排序结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionOutcome {
    /// 按概率降序排列，概率相同的条目保持模型原始顺序
    pub ranking: Vec<RankedResult>,
    /// 概率最大的条目，相同时取原始顺序中的第一个
    pub top: RankedResult,
}

impl PredictionOutcome {
    /// 按模型原始类别顺序返回结果
    pub fn in_model_order(&self) -> Vec<&RankedResult> {
        let mut entries: Vec<&RankedResult> = self.ranking.iter().collect();
        entries.sort_by_key(|r| r.class_index);
        entries
    }

    pub fn probability_of(&self, label: &str) -> Option<f64> {
        self.ranking
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.probability)
    }
}

/// 分类处理统计信息
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationStats {
    /// 图像加载耗时（毫秒）
    pub load_time_ms: u64,
    /// 模型推理耗时（毫秒）
    pub inference_time_ms: u64,
    /// 排序耗时（毫秒）
    pub rank_time_ms: u64,
    /// 总耗时（毫秒）
    pub total_time_ms: u64,
}

/// 单张图像的分类结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub image: String,
    pub width: u32,
    pub height: u32,
    pub outcome: PredictionOutcome,
    pub stats: ClassificationStats,
    /// 模型信息
    pub model_info: ModelInfo,
}
