//! 配置序列化集成测试

use typeasy_core::{ModelVariant, RecognizerConfig, TypeasyConfig, VadConfig};

#[test]
fn test_default_asr_matches_gigaam() {
    let config = RecognizerConfig::default();
    assert_eq!(config.sample_rate, 16000);
    // GigaAM 用 64 维梅尔特征
    assert_eq!(config.feature_dim, 64);
    assert_eq!(config.decoding_method, "greedy_search");
    assert_eq!(config.max_active_paths, 4);
}

#[test]
fn test_default_vad_matches_silero() {
    let config = VadConfig::default();
    assert_eq!(config.window_size, 512);
    assert_eq!(config.sample_rate, 16000);
    assert!(config.buffer_size_seconds >= config.max_speech_duration);
}

#[test]
fn test_full_round_trip() {
    let mut config = TypeasyConfig::default();
    config.asr.model_dir = "/opt/typeasy/models/gigaam".to_string();
    config.asr.model_variant = Some(ModelVariant::Transducer);
    config.asr.hotwords_file = Some("/opt/typeasy/hotwords.txt".to_string());
    config.vad.threshold = 0.65;

    let text = toml::to_string_pretty(&config).unwrap();
    let parsed: TypeasyConfig = toml::from_str(&text).unwrap();

    assert_eq!(parsed.asr.model_dir, config.asr.model_dir);
    assert_eq!(parsed.asr.model_variant, Some(ModelVariant::Transducer));
    assert_eq!(parsed.asr.hotwords_file, config.asr.hotwords_file);
    assert!((parsed.vad.threshold - 0.65).abs() < 1e-6);
    assert_eq!(parsed.asr.feature_dim, config.asr.feature_dim);
}

#[test]
fn test_partial_file_fills_defaults() {
    let text = r#"
[asr]
model_dir = "/bundle/models/gigaam"

[vad]
threshold = 0.8
"#;
    let parsed: TypeasyConfig = toml::from_str(text).unwrap();
    assert_eq!(parsed.asr.model_dir, "/bundle/models/gigaam");
    assert_eq!(parsed.asr.feature_dim, 64);
    assert!((parsed.vad.threshold - 0.8).abs() < 1e-6);
    assert_eq!(parsed.vad.window_size, 512);
}

#[test]
fn test_empty_file_is_all_defaults() {
    let parsed: TypeasyConfig = toml::from_str("").unwrap();
    assert_eq!(parsed.asr.decoding_method, "greedy_search");
    assert!(parsed.asr.model_variant.is_none());
}

#[test]
fn test_variant_parses_snake_case() {
    let parsed: TypeasyConfig = toml::from_str("[asr]\nmodel_variant = \"ctc\"").unwrap();
    assert_eq!(parsed.asr.model_variant, Some(ModelVariant::Ctc));

    let parsed: TypeasyConfig = toml::from_str("[asr]\nmodel_variant = \"transducer\"").unwrap();
    assert_eq!(parsed.asr.model_variant, Some(ModelVariant::Transducer));
}

#[test]
fn test_unknown_variant_is_rejected() {
    let result = toml::from_str::<TypeasyConfig>("[asr]\nmodel_variant = \"whisper\"");
    assert!(result.is_err());
}
