//! FFI 契约测试
//!
//! 校验 C 头文件里硬编码的结果码, 以及 sys 绑定结构体的 ABI 形状。
//! 这些断言挡住的是"改了 Rust 侧却忘了同步 typeasy_core.h / c-api.h"
//! 这类只在运行期才炸的错误。

use std::ffi::CString;
use std::mem::{align_of, size_of};
use std::os::raw::c_char;
use typeasy_core::ffi::types::{TypeasyFfiResult, TypeasyTranscript};
use typeasy_core::sys;

#[test]
fn test_result_codes_match_header() {
    // include/typeasy_core.h 的 TYPEASY_* 常量
    assert_eq!(TypeasyFfiResult::Success as i32, 0);
    assert_eq!(TypeasyFfiResult::NullPointer as i32, -1);
    assert_eq!(TypeasyFfiResult::InvalidArgument as i32, -2);
    assert_eq!(TypeasyFfiResult::InitFailed as i32, -3);
    assert_eq!(TypeasyFfiResult::NotInitialized as i32, -4);
    assert_eq!(TypeasyFfiResult::InternalError as i32, -5);
    assert_eq!(TypeasyFfiResult::NoData as i32, -6);
    assert_eq!(TypeasyFfiResult::AudioError as i32, -7);
}

#[test]
fn test_result_code_is_c_enum_sized() {
    assert_eq!(size_of::<TypeasyFfiResult>(), 4);
}

#[test]
fn test_transcript_layout_matches_header() {
    // char* + size_t
    assert_eq!(
        size_of::<TypeasyTranscript>(),
        size_of::<*mut c_char>() + size_of::<usize>()
    );
    assert_eq!(align_of::<TypeasyTranscript>(), align_of::<*mut c_char>());
}

#[test]
fn test_transcript_text_round_trip() {
    let transcript = TypeasyTranscript::from_text("привет, мир");
    assert_eq!(transcript.text_len, "привет, мир".len());

    // 调用方释放路径: 收回 CString
    let owned = unsafe { CString::from_raw(transcript.text) };
    assert_eq!(owned.to_str().unwrap(), "привет, мир");
}

#[test]
fn test_sherpa_config_pointer_fields() {
    // 纯指针结构体: 大小必须正好是指针数 x 指针宽
    assert_eq!(
        size_of::<sys::SherpaOnnxOfflineTransducerModelConfig>(),
        3 * size_of::<*const c_char>()
    );
    assert_eq!(
        size_of::<sys::SherpaOnnxOfflineNemoEncDecCtcModelConfig>(),
        size_of::<*const c_char>()
    );
    assert_eq!(
        size_of::<sys::SherpaOnnxHomophoneReplacerConfig>(),
        3 * size_of::<*const c_char>()
    );
}

#[test]
fn test_sherpa_feature_config_shape() {
    // 两个 int32
    assert_eq!(size_of::<sys::SherpaOnnxFeatureConfig>(), 8);
    assert_eq!(align_of::<sys::SherpaOnnxFeatureConfig>(), 4);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_sherpa_speech_segment_shape() {
    // int32 + pad + float* + int32 + pad
    assert_eq!(size_of::<sys::SherpaOnnxSpeechSegment>(), 24);
    assert_eq!(align_of::<sys::SherpaOnnxSpeechSegment>(), 8);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_sherpa_vad_config_shape() {
    assert_eq!(size_of::<sys::SherpaOnnxSileroVadModelConfig>(), 32);
    assert_eq!(size_of::<sys::SherpaOnnxVadModelConfig>(), 88);
}

#[test]
fn test_zeroed_model_config_is_all_null() {
    // 未用到的子模型清零后必须是空指针 + 0, C 侧按"未配置"处理
    let config: sys::SherpaOnnxOfflineModelConfig = unsafe { std::mem::zeroed() };
    assert!(config.tokens.is_null());
    assert!(config.provider.is_null());
    assert!(config.model_type.is_null());
    assert!(config.transducer.encoder.is_null());
    assert!(config.nemo_ctc.model.is_null());
    assert!(config.whisper.encoder.is_null());
    assert!(config.sense_voice.model.is_null());
    assert!(config.canary.encoder.is_null());
    assert_eq!(config.num_threads, 0);
    assert_eq!(config.debug, 0);
}

#[test]
fn test_zeroed_recognizer_config_is_inert() {
    let config: sys::SherpaOnnxOfflineRecognizerConfig = unsafe { std::mem::zeroed() };
    assert!(config.decoding_method.is_null());
    assert!(config.hotwords_file.is_null());
    assert!(config.lm_config.model.is_null());
    assert!(config.hr.dict_dir.is_null());
    assert_eq!(config.feat_config.sample_rate, 0);
    assert_eq!(config.max_active_paths, 0);
    assert_eq!(config.blank_penalty, 0.0);
}

#[test]
fn test_safe_call_shields_panic() {
    use typeasy_core::ffi::safety::ffi_safe_call;

    let code = ffi_safe_call(|| panic!("must not cross the boundary"));
    assert_eq!(code, TypeasyFfiResult::InternalError);
}
