//! FFI C-compatible 类型定义
//!
//! 取值和布局必须和 include/typeasy_core.h 保持一致

use std::ffi::CString;
use std::os::raw::c_char;

/// FFI 结果码
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeasyFfiResult {
    /// 成功
    Success = 0,
    /// 空指针错误
    NullPointer = -1,
    /// 无效参数
    InvalidArgument = -2,
    /// 初始化失败
    InitFailed = -3,
    /// 未初始化
    NotInitialized = -4,
    /// 内部错误
    InternalError = -5,
    /// 无数据可读
    NoData = -6,
    /// 音频错误
    AudioError = -7,
}

/// 转写结果 (Rust Core -> Swift 宿主)
#[repr(C)]
#[derive(Debug)]
pub struct TypeasyTranscript {
    /// 识别文本 (UTF-8, null 结尾), 用 typeasy_transcript_free 释放
    pub text: *mut c_char,
    /// 文本字节长度 (不含 null)
    pub text_len: usize,
}

// Transcript 要在队列里暂存; text 来自 CString::into_raw,
// 所有权随结构体一起移动
unsafe impl Send for TypeasyTranscript {}

impl TypeasyTranscript {
    /// 空结果
    pub fn empty() -> Self {
        Self {
            text: std::ptr::null_mut(),
            text_len: 0,
        }
    }

    /// 从识别文本构造, text 的所有权转给结构体
    ///
    /// 识别文本来自 C 字符串, 不会含内部 NUL; 万一含有则
    /// 返回空结果而不是截断。
    pub fn from_text(text: &str) -> Self {
        let text_len = text.len();
        match CString::new(text) {
            Ok(c) => Self {
                text: c.into_raw(),
                text_len,
            },
            Err(_) => Self::empty(),
        }
    }

    /// 收回并释放文本
    pub(crate) fn release(&mut self) {
        if !self.text.is_null() {
            unsafe {
                let _ = CString::from_raw(self.text);
            }
            self.text = std::ptr::null_mut();
            self.text_len = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CStr;

    #[test]
    fn test_empty_transcript() {
        let t = TypeasyTranscript::empty();
        assert!(t.text.is_null());
        assert_eq!(t.text_len, 0);
    }

    #[test]
    fn test_from_text_owns_cstring() {
        let mut t = TypeasyTranscript::from_text("привет мир");
        assert!(!t.text.is_null());
        assert_eq!(t.text_len, "привет мир".len());

        let read_back = unsafe { CStr::from_ptr(t.text) }.to_str().unwrap();
        assert_eq!(read_back, "привет мир");

        t.release();
        assert!(t.text.is_null());
        assert_eq!(t.text_len, 0);
    }

    #[test]
    fn test_from_text_interior_nul() {
        let t = TypeasyTranscript::from_text("a\0b");
        assert!(t.text.is_null());
        assert_eq!(t.text_len, 0);
    }

    #[test]
    fn test_release_twice_is_safe() {
        let mut t = TypeasyTranscript::from_text("x");
        t.release();
        t.release();
        assert!(t.text.is_null());
    }

    #[test]
    fn test_result_codes() {
        assert_eq!(TypeasyFfiResult::Success as i32, 0);
        assert_eq!(TypeasyFfiResult::NullPointer as i32, -1);
        assert_eq!(TypeasyFfiResult::InvalidArgument as i32, -2);
        assert_eq!(TypeasyFfiResult::InitFailed as i32, -3);
        assert_eq!(TypeasyFfiResult::NotInitialized as i32, -4);
        assert_eq!(TypeasyFfiResult::InternalError as i32, -5);
        assert_eq!(TypeasyFfiResult::NoData as i32, -6);
        assert_eq!(TypeasyFfiResult::AudioError as i32, -7);
    }
}
