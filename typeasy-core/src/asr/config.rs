//! 离线识别器配置

use crate::models::ModelVariant;
use serde::{Deserialize, Serialize};

/// 离线识别器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecognizerConfig {
    /// GigaAM 模型目录路径
    pub model_dir: String,
    /// 采样率 (Hz)
    pub sample_rate: i32,
    /// 特征维度 (GigaAM 的梅尔维数是 64, 不是常见的 80)
    pub feature_dim: i32,
    /// 解码方法 ("greedy_search" 或 "modified_beam_search")
    pub decoding_method: String,
    /// 最大活跃路径数 (仅 modified_beam_search 生效)
    pub max_active_paths: i32,
    /// 推理线程数
    pub num_threads: i32,
    /// onnxruntime 执行后端 ("cpu" / "coreml" / "cuda")
    pub provider: String,
    /// 模型变体, 缺省按目录内容自动识别
    pub model_variant: Option<ModelVariant>,
    /// 热词文件路径 (仅 transducer + modified_beam_search 生效)
    pub hotwords_file: Option<String>,
    /// 热词得分
    pub hotwords_score: f32,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            model_dir: String::new(),
            sample_rate: 16000,
            feature_dim: 64,
            decoding_method: "greedy_search".to_string(),
            max_active_paths: 4,
            num_threads: 2,
            provider: "cpu".to_string(),
            model_variant: None,
            hotwords_file: None,
            hotwords_score: 1.5,
        }
    }
}
