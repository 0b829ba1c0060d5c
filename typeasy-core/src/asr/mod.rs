//! ASR (Automatic Speech Recognition) 模块
//!
//! 基于 sherpa-onnx 离线识别器的 GigaAM 俄语转写

pub mod config;
#[cfg(feature = "sherpa")]
pub mod recognizer;

pub use config::RecognizerConfig;
#[cfg(feature = "sherpa")]
pub use recognizer::{OfflineRecognizer, OfflineStream};

/// 识别结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecognitionResult {
    /// 识别文本 (UTF-8)
    pub text: String,
    /// 每个 token 的起始时间戳 (秒), 解码器不输出时为空
    pub timestamps: Vec<f32>,
}

impl RecognitionResult {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
