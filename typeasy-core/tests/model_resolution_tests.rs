//! 模型目录解析集成测试
//!
//! 用临时目录摆出各种发布布局, 验证变体识别和报错

use std::fs::File;
use std::path::Path;
use tempfile::TempDir;
use typeasy_core::models::{self, GigaAmModelFiles, ModelVariant};
use typeasy_core::TypeasyError;

fn touch(dir: &TempDir, name: &str) {
    File::create(dir.path().join(name)).unwrap();
}

fn ctc_model(files: &GigaAmModelFiles) -> &Path {
    match files {
        GigaAmModelFiles::Ctc { model, .. } => model,
        other => panic!("expected ctc layout, got {:?}", other),
    }
}

#[test]
fn test_ctc_int8_layout() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "model.int8.onnx");
    touch(&dir, "tokens.txt");

    let files = models::resolve(dir.path()).unwrap();
    assert_eq!(files.variant(), ModelVariant::Ctc);
    assert!(ctc_model(&files).ends_with("model.int8.onnx"));
    assert!(files.tokens().ends_with("tokens.txt"));
}

#[test]
fn test_ctc_prefers_int8_over_fp32() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "model.onnx");
    touch(&dir, "model.int8.onnx");
    touch(&dir, "tokens.txt");

    let files = models::resolve(dir.path()).unwrap();
    assert!(ctc_model(&files).ends_with("model.int8.onnx"));
}

#[test]
fn test_ctc_falls_back_to_fp32() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "model.onnx");
    touch(&dir, "tokens.txt");

    let files = models::resolve(dir.path()).unwrap();
    assert!(ctc_model(&files).ends_with("model.onnx"));
}

#[test]
fn test_transducer_layout() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "encoder.int8.onnx");
    touch(&dir, "decoder.onnx");
    touch(&dir, "joiner.int8.onnx");
    touch(&dir, "tokens.txt");

    let files = models::resolve(dir.path()).unwrap();
    match files {
        GigaAmModelFiles::Transducer {
            encoder,
            decoder,
            joiner,
            ..
        } => {
            assert!(encoder.ends_with("encoder.int8.onnx"));
            assert!(decoder.ends_with("decoder.onnx"));
            assert!(joiner.ends_with("joiner.int8.onnx"));
        }
        other => panic!("expected transducer layout, got {:?}", other),
    }
}

#[test]
fn test_ctc_wins_when_both_layouts_present() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "model.int8.onnx");
    touch(&dir, "encoder.int8.onnx");
    touch(&dir, "decoder.int8.onnx");
    touch(&dir, "joiner.int8.onnx");
    touch(&dir, "tokens.txt");

    let files = models::resolve(dir.path()).unwrap();
    assert_eq!(files.variant(), ModelVariant::Ctc);
}

#[test]
fn test_explicit_variant_overrides_precedence() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "model.int8.onnx");
    touch(&dir, "encoder.int8.onnx");
    touch(&dir, "decoder.int8.onnx");
    touch(&dir, "joiner.int8.onnx");
    touch(&dir, "tokens.txt");

    let files = models::resolve_variant(dir.path(), ModelVariant::Transducer).unwrap();
    assert_eq!(files.variant(), ModelVariant::Transducer);
}

#[test]
fn test_explicit_variant_does_not_fall_back() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "model.int8.onnx");
    touch(&dir, "tokens.txt");

    let err = models::resolve_variant(dir.path(), ModelVariant::Transducer).unwrap_err();
    assert!(matches!(err, TypeasyError::ModelLoad { .. }));
    assert!(err.to_string().contains("transducer"));
}

#[test]
fn test_missing_tokens_is_error() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "model.int8.onnx");

    let err = models::resolve(dir.path()).unwrap_err();
    assert!(err.to_string().contains("tokens.txt"));
}

#[test]
fn test_empty_dir_is_error() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "tokens.txt");

    let err = models::resolve(dir.path()).unwrap_err();
    assert!(err.to_string().contains("no GigaAM model"));
}

#[test]
fn test_incomplete_transducer_is_error() {
    let dir = TempDir::new().unwrap();
    touch(&dir, "encoder.int8.onnx");
    touch(&dir, "decoder.int8.onnx");
    touch(&dir, "tokens.txt");

    // joiner 缺失, 不能算 transducer
    let err = models::resolve(dir.path()).unwrap_err();
    assert!(matches!(err, TypeasyError::ModelLoad { .. }));
}
