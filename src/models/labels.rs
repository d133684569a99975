use crate::utils::error::ClassifyError;
use crate::Result;
use std::fs;
use std::path::Path;

/// CIFAR-10 类别，按模型输出顺序排列
pub const CIFAR10_LABELS: [&str; 10] = [
    "airplane",
    "automobile",
    "bird",
    "cat",
    "deer",
    "dog",
    "frog",
    "horse",
    "ship",
    "truck",
];

pub fn default_labels() -> Vec<String> {
    CIFAR10_LABELS.iter().map(|s| s.to_string()).collect()
}

/// 加载类别标签；未指定文件时使用 CIFAR-10 标签
pub fn load_labels(path: Option<&Path>) -> Result<Vec<String>> {
    let Some(path) = path else {
        tracing::info!("No labels file configured, using built-in CIFAR-10 labels");
        return Ok(default_labels());
    };

    if !path.exists() {
        return Err(ClassifyError::ModelLoad(format!(
            "Labels file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ClassifyError::ModelLoad(format!("Failed to read labels: {}", e)))?;

    let labels = parse_labels(&content);
    if labels.is_empty() {
        return Err(ClassifyError::ModelLoad(format!(
            "Labels file is empty: {}",
            path.display()
        )));
    }

    tracing::info!("Loaded {} labels from {}", labels.len(), path.display());
    Ok(labels)
}

fn parse_labels(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
