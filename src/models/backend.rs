use crate::classify::ClassConfidence;
use crate::image::Image;
use crate::Result;
use serde::{Deserialize, Serialize};

/// 可替换的分类模型后端
///
/// 实现方需保证类别数量与标签在加载后固定不变；推理对调用方而言是同步的。
/// 一个已加载的模型句柄可以在多个请求之间只读共享。
pub trait ClassificationModel: Send + Sync {
    /// 对单张图像推理，按模型类别顺序返回原始置信度
    fn invoke(&self, image: &Image) -> Result<Vec<ClassConfidence>>;

    fn info(&self) -> ModelInfo;
}

/// 模型信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// 后端名称
    pub backend: String,
    /// 类别数量
    pub num_classes: usize,
    /// 输入张量形状 (N, C, H, W)，无固定输入时为空
    pub input_shape: Option<[usize; 4]>,
}
