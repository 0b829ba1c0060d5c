use thiserror::Error;

#[derive(Error, Debug)]
pub enum TypeasyError {
    // ASR 错误
    #[error("Model load failed: {path} - {reason}")]
    ModelLoad { path: String, reason: String },

    #[error("ASR inference failed: {0}")]
    AsrInference(String),

    #[error("Recognizer not initialized")]
    RecognizerNotReady,

    // VAD 错误
    #[error("Silero VAD model load failed: {0}")]
    VadModelLoad(String),

    // 音频错误
    #[error("Invalid audio: {reason}")]
    InvalidAudio { reason: String },

    #[error("WAV decode error: {0}")]
    Wav(#[from] hound::Error),

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    // FFI 错误
    #[error("FFI null pointer: {param}")]
    NullPointer { param: String },

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type TypeasyResult<T> = Result<T, TypeasyError>;
