//! End-to-end tests for the load → classify → rank pipeline using the
//! fixed-score backend in place of a real ONNX model.

use image::{Rgb, RgbImage};
use onnx_classify::{
    classify::{report, ReportFormat},
    image::ImageLoader,
    models::{Classifier, FixedScoresModel},
    ClassificationPipeline, ClassifyError,
};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn write_image(dir: &Path, name: &str) {
    RgbImage::from_pixel(32, 32, Rgb([200, 200, 255]))
        .save(dir.join(name))
        .expect("Failed to write test image");
}

fn cifar_like_model() -> Arc<FixedScoresModel> {
    Arc::new(FixedScoresModel::from_pairs([
        ("airplane", 2.0),
        ("cat", 0.5),
        ("dog", 0.5),
    ]))
}

#[test]
fn airplane_is_the_top_prediction() {
    let dir = TempDir::new().unwrap();
    write_image(dir.path(), "airplane.png");

    let model = cifar_like_model();
    let pipeline =
        ClassificationPipeline::new(ImageLoader::new(dir.path()), Classifier::new(model.clone()));

    let result = pipeline.classify("airplane.png").unwrap();
    let outcome = &result.outcome;

    // e^2 / (e^2 + 2 * e^0.5)
    let expected = 2.0f64.exp() / (2.0f64.exp() + 2.0 * 0.5f64.exp());
    assert_eq!(outcome.top.label, "airplane");
    assert!((outcome.top.probability - expected).abs() < 1e-12);
    assert!((outcome.top.probability - 0.6914).abs() < 1e-3);

    let mut labels: Vec<&str> = outcome.ranking.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels[0], "airplane");
    labels.sort();
    assert_eq!(labels, vec!["airplane", "cat", "dog"]);

    let sum: f64 = outcome.ranking.iter().map(|r| r.probability).sum();
    assert!((sum - 1.0).abs() < 1e-9);
    assert_eq!(model.invocations(), 1);
}

#[test]
fn missing_image_never_reaches_the_model() {
    let dir = TempDir::new().unwrap();
    let model = cifar_like_model();
    let pipeline =
        ClassificationPipeline::new(ImageLoader::new(dir.path()), Classifier::new(model.clone()));

    let err = pipeline.classify("ghost.jpg").unwrap_err();
    assert!(matches!(err, ClassifyError::NotFound { .. }));
    assert_eq!(err.error_code(), "NOT_FOUND");
    assert_eq!(model.invocations(), 0);
}

#[test]
fn corrupt_image_never_reaches_the_model() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("corrupt.png"), [0x89, b'P', b'N', b'G', 0, 0]).unwrap();

    let model = cifar_like_model();
    let pipeline =
        ClassificationPipeline::new(ImageLoader::new(dir.path()), Classifier::new(model.clone()));

    assert!(matches!(
        pipeline.classify("corrupt.png"),
        Err(ClassifyError::Decode { .. })
    ));
    assert_eq!(model.invocations(), 0);
}

#[test]
fn failed_request_does_not_affect_the_next() {
    let dir = TempDir::new().unwrap();
    write_image(dir.path(), "ship.png");

    let model = cifar_like_model();
    let pipeline =
        ClassificationPipeline::new(ImageLoader::new(dir.path()), Classifier::new(model.clone()));

    assert!(pipeline.classify("missing.png").is_err());
    let first = pipeline.classify("ship.png").unwrap();
    let second = pipeline.classify("ship.png").unwrap();

    assert_eq!(first.outcome, second.outcome);
    assert_eq!(model.invocations(), 2);
}

#[test]
fn text_report_matches_console_layout() {
    let dir = TempDir::new().unwrap();
    write_image(dir.path(), "airplane.png");

    let pipeline = ClassificationPipeline::new(
        ImageLoader::new(dir.path()),
        Classifier::new(cifar_like_model()),
    );
    let result = pipeline.classify("airplane.png").unwrap();
    let text = report::render(&result, ReportFormat::Text).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Classification: airplane, Softmax confidence: "));
    assert!(lines[1].starts_with("Classification: cat, "));
    assert!(lines[2].starts_with("Classification: dog, "));
    assert!(lines[3].starts_with("Top classification: airplane, "));
}
