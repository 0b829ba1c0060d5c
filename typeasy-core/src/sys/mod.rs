//! sherpa-onnx C API 原始绑定
//!
//! 默认使用提交在 bindings.rs 里的预生成声明, 不依赖本机的
//! sherpa-onnx 头文件; 开 `buildtime-bindgen` feature 时改用
//! build.rs 现场生成的全量绑定 (升级 sherpa-onnx 版本时校对用)。
//!
//! 结构体布局必须和链接的 libsherpa-onnx-c-api 完全一致,
//! 调整字段前先对照对应版本的 c-api.h。

#[cfg(not(feature = "buildtime-bindgen"))]
#[path = "bindings.rs"]
#[allow(non_snake_case)]
mod bindings;

#[cfg(feature = "buildtime-bindgen")]
#[allow(
    non_snake_case,
    non_camel_case_types,
    non_upper_case_globals,
    dead_code,
    unused_imports
)]
mod bindings {
    include!(concat!(env!("OUT_DIR"), "/sherpa_bindings.rs"));
}

pub use bindings::*;
