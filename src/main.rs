use anyhow::{bail, Result};
use clap::Parser;
use onnx_classify::{
    classify::{report, ReportFormat},
    image::ImageLoader,
    models::{Classifier, ClassificationModel, FixedScoresModel, OnnxModel},
    ClassificationPipeline, Config,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "onnx-classify")]
#[command(about = "Classify images with a pre-trained ONNX model")]
struct Args {
    /// Image file names, resolved inside the images directory
    #[arg(default_value = "airplane.jpg")]
    images: Vec<String>,

    /// Directory containing the images
    #[arg(long, default_value = "images")]
    images_dir: PathBuf,

    /// ONNX model path
    #[arg(long, default_value = "models/cifar10.onnx")]
    model: PathBuf,

    /// Labels file, one class per line (defaults to CIFAR-10)
    #[arg(long)]
    labels: Option<PathBuf>,

    /// Square model input size in pixels
    #[arg(long, default_value_t = 32)]
    input_size: u32,

    /// Number of intra-op threads
    #[arg(long)]
    threads: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,

    /// Use fixed raw scores instead of the ONNX model, e.g. "airplane=2.0,cat=0.5"
    #[arg(long)]
    scores: Option<String>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化日志系统
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_target(false)
        .init();

    tracing::info!("Images directory: {}", args.images_dir.display());

    let config = Config::new(
        args.images_dir,
        args.model,
        args.labels,
        args.input_size,
        args.threads,
    )?;

    // 模型加载失败时直接退出
    let model: Arc<dyn ClassificationModel> = match &args.scores {
        Some(scores) => Arc::new(FixedScoresModel::parse(scores)?),
        None => Arc::new(OnnxModel::load(&config)?),
    };
    let classifier = Classifier::new(model);
    let info = classifier.model_info();
    tracing::info!(
        "Model ready: backend={}, classes={}, input={:?}",
        info.backend,
        info.num_classes,
        info.input_shape
    );

    let pipeline = ClassificationPipeline::new(ImageLoader::new(config.images_dir.clone()), classifier);

    let mut failures = 0;
    for name in &args.images {
        match pipeline
            .classify(name)
            .and_then(|result| report::render(&result, args.format))
        {
            Ok(output) => println!("{}", output),
            Err(e) => {
                failures += 1;
                tracing::error!("Classification failed [{}]: {}", e.error_code(), e);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} images failed", failures, args.images.len());
    }

    Ok(())
}
