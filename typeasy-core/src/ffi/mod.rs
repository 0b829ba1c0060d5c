//! FFI (Foreign Function Interface) 模块
//!
//! 提供给 Typeasy Swift 宿主的 C-compatible API,
//! 函数签名见 include/typeasy_core.h

pub mod safety;
pub mod types;

#[cfg(feature = "sherpa")]
pub mod exports;

pub use types::{TypeasyFfiResult, TypeasyTranscript};
