//! VAD 配置模块

use serde::{Deserialize, Serialize};

/// Silero VAD 配置
///
/// 分段逻辑 (阈值 / 迟滞 / 最短时长) 都在 sherpa-onnx 内部完成,
/// 这里只暴露它的参数。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VadConfig {
    /// silero_vad.onnx 模型文件路径
    pub model_path: String,

    /// 语音判定阈值, 越高越不容易误触发
    pub threshold: f32,

    /// 结束一段语音所需的最小静音时长 (秒)
    pub min_silence_duration: f32,

    /// 低于此时长的语音段直接丢弃 (秒)
    pub min_speech_duration: f32,

    /// 单段语音的最大时长 (秒), 超过强制切分
    pub max_speech_duration: f32,

    /// 分析窗口大小 (样本数), Silero v5 @ 16kHz 固定 512
    pub window_size: i32,

    /// 采样率 (Hz)
    pub sample_rate: i32,

    /// 推理线程数
    pub num_threads: i32,

    /// onnxruntime 执行后端
    pub provider: String,

    /// VAD 内部环形缓冲容量 (秒), 决定一次会话能缓存多少未切分音频
    pub buffer_size_seconds: f32,
}

impl Default for VadConfig {
    fn default() -> Self {
        Self {
            model_path: "models/silero-vad/silero_vad.onnx".to_string(),
            threshold: 0.5,
            min_silence_duration: 0.5,
            min_speech_duration: 0.25,
            max_speech_duration: 20.0,
            window_size: 512, // 32ms @ 16kHz
            sample_rate: 16000,
            num_threads: 1,
            provider: "cpu".to_string(),
            buffer_size_seconds: 30.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VadConfig::default();
        assert_eq!(config.window_size, 512);
        assert_eq!(config.sample_rate, 16000);
        assert!((config.threshold - 0.5).abs() < 1e-6);
        assert!(config.max_speech_duration > config.min_speech_duration);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: VadConfig = toml::from_str("threshold = 0.7").unwrap();
        assert!((config.threshold - 0.7).abs() < 1e-6);
        assert_eq!(config.window_size, 512);
        assert_eq!(config.model_path, "models/silero-vad/silero_vad.onnx");
    }
}
