use crate::utils::error::ClassifyError;
use crate::Result;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// 待分类图像所在目录
    pub images_dir: PathBuf,

    /// ONNX模型文件路径
    pub model_path: PathBuf,

    /// 类别标签文件（每行一个），为空时使用内置CIFAR-10标签
    pub labels_path: Option<PathBuf>,

    /// ONNX Runtime配置
    pub onnx_config: OnnxConfig,

    /// 输入张量预处理配置
    pub preprocess_config: PreprocessConfig,
}

#[derive(Debug, Clone)]
pub struct OnnxConfig {
    /// CPU线程数
    pub intra_threads: usize,

    /// 优化级别 (0-3)
    pub optimization_level: i32,
}

#[derive(Debug, Clone)]
pub struct PreprocessConfig {
    /// 模型输入宽度
    pub input_width: u32,

    /// 模型输入高度
    pub input_height: u32,

    /// 每通道均值（作用于 [0,1] 缩放后的像素）
    pub mean: [f32; 3],

    /// 每通道标准差
    pub std: [f32; 3],
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        // CIFAR-10 模型的输入尺寸
        Self {
            input_width: 32,
            input_height: 32,
            mean: [0.0; 3],
            std: [1.0; 3],
        }
    }
}

impl Config {
    pub fn new(
        images_dir: impl Into<PathBuf>,
        model_path: impl Into<PathBuf>,
        labels_path: Option<PathBuf>,
        input_size: u32,
        threads: Option<usize>,
    ) -> Result<Self> {
        let cpu_cores = num_cpus::get();
        let intra_threads = threads.unwrap_or((cpu_cores * 3 / 4).max(1)); // 使用75%的CPU核心

        let onnx_config = OnnxConfig {
            intra_threads,
            optimization_level: 3,
        };

        let preprocess_config = PreprocessConfig {
            input_width: input_size,
            input_height: input_size,
            ..PreprocessConfig::default()
        };

        let config = Self {
            images_dir: images_dir.into(),
            model_path: model_path.into(),
            labels_path,
            onnx_config,
            preprocess_config,
        };
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let pre = &self.preprocess_config;
        if pre.input_width == 0 || pre.input_height == 0 {
            return Err(ClassifyError::Config(format!(
                "Invalid input size {}x{}",
                pre.input_width, pre.input_height
            )));
        }

        if let Some(value) = pre.std.iter().find(|s| !s.is_finite() || **s <= 0.0) {
            return Err(ClassifyError::Config(format!(
                "Channel std must be positive, got {}",
                value
            )));
        }

        if self.onnx_config.intra_threads == 0 {
            return Err(ClassifyError::Config(
                "intra_threads must be at least 1".to_string(),
            ));
        }

        if !(0..=3).contains(&self.onnx_config.optimization_level) {
            return Err(ClassifyError::Config(format!(
                "Unknown optimization level {}",
                self.onnx_config.optimization_level
            )));
        }

        Ok(())
    }
}
