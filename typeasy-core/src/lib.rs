//! Typeasy Core Engine
//!
//! Typeasy 宿主 App 的 GigaAM 俄语转写核心, 把 sherpa-onnx 的
//! C API 封装成安全的 Rust 层, 再以 C ABI 导出给 Swift 侧
//! (见 include/typeasy_core.h)。
//!
//! 默认构建不链接 sherpa-onnx (只有配置 / 音频 / 模型解析等纯 Rust
//! 部分); 开 `sherpa` feature 后提供识别器、VAD 和 FFI 导出。

#![warn(rust_2018_idioms)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod ffi;
pub mod sys;
pub mod audio;
pub mod models;
pub mod vad;
pub mod asr;
pub mod config;
pub mod error;

// Re-export key types
pub use asr::{RecognitionResult, RecognizerConfig};
pub use config::TypeasyConfig;
pub use error::{TypeasyError, TypeasyResult};
pub use models::{GigaAmModelFiles, ModelVariant};
pub use vad::{SpeechSegment, VadConfig};

#[cfg(feature = "sherpa")]
pub use asr::{OfflineRecognizer, OfflineStream};
#[cfg(feature = "sherpa")]
pub use vad::VoiceActivityDetector;

/// 初始化日志系统
///
/// 生产模式: 静默, 不注册任何订阅者
/// 调试模式 (--features debug-logs): 按 TYPEASY_LOG 过滤, 默认 warn
///
/// 注意: 此函数可以安全地多次调用 (宿主每次 init 都会调)
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter =
            EnvFilter::try_from_env("TYPEASY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

        // 使用 try_init() 代替 init(), 避免重复初始化时 panic
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }

    #[cfg(not(feature = "debug-logs"))]
    {
        // 生产模式: 静默运行, tracing 调用点保留但没有订阅者
        // 如需日志, 用 --features debug-logs 编译
    }
}
