use crate::classify::ClassificationResult;
use crate::Result;
use clap::ValueEnum;

/// 输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub fn render(result: &ClassificationResult, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(format_text(result)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(result)?),
    }
}

/// 纯文本输出：每个类别一行（模型原始顺序），最后一行为最佳结果
pub fn format_text(result: &ClassificationResult) -> String {
    let outcome = &result.outcome;
    let mut lines: Vec<String> = outcome
        .in_model_order()
        .into_iter()
        .map(|r| {
            format!(
                "Classification: {}, Softmax confidence: {}",
                r.label, r.probability
            )
        })
        .collect();

    lines.push(format!(
        "Top classification: {}, Softmax confidence: {}",
        outcome.top.label, outcome.top.probability
    ));

    lines.join("\n")
}
