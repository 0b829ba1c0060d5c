//! VAD (Voice Activity Detection) 模块
//!
//! 通过 sherpa-onnx 的 Silero VAD 把长音频切成语音段,
//! 每段单独送离线识别器转写。

pub mod config;
#[cfg(feature = "sherpa")]
pub mod detector;

pub use config::VadConfig;
#[cfg(feature = "sherpa")]
pub use detector::VoiceActivityDetector;

/// 一段完整语音
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechSegment {
    /// 段起点, 相对整段录音的采样偏移
    pub start_sample: usize,
    /// 单声道 f32 采样
    pub samples: Vec<f32>,
}

impl SpeechSegment {
    /// 段起点 (秒)
    pub fn start_seconds(&self, sample_rate: u32) -> f32 {
        if sample_rate == 0 {
            return 0.0;
        }
        self.start_sample as f32 / sample_rate as f32
    }

    /// 段时长 (秒)
    pub fn duration_seconds(&self, sample_rate: u32) -> f32 {
        if sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / sample_rate as f32
    }
}
