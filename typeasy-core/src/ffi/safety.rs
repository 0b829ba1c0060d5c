//! FFI 安全封装
//!
//! 使用 catch_unwind 防止 panic 跨越 FFI 边界

use super::types::TypeasyFfiResult;
use crate::error::{TypeasyError, TypeasyResult};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// FFI 安全调用包装器
///
/// 闭包里 Ok / Err 两路都携带结果码, 统一展开成一个返回值;
/// panic 被捕获并转成 InternalError。
pub fn ffi_safe_call<F>(f: F) -> TypeasyFfiResult
where
    F: FnOnce() -> Result<TypeasyFfiResult, TypeasyFfiResult>,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(code)) => code,
        Ok(Err(code)) => code,
        Err(panic_err) => {
            // 记录 panic 信息
            if let Some(msg) = panic_err.downcast_ref::<&str>() {
                tracing::error!("FFI panic: {}", msg);
            } else if let Some(msg) = panic_err.downcast_ref::<String>() {
                tracing::error!("FFI panic: {}", msg);
            } else {
                tracing::error!("FFI panic: unknown error");
            }

            TypeasyFfiResult::InternalError
        }
    }
}

/// 将 Rust Result 转换为 FFI 结果码
pub fn to_ffi_result<T>(result: TypeasyResult<T>) -> Result<T, TypeasyFfiResult> {
    result.map_err(|e| {
        tracing::error!("FFI error: {}", e);
        match &e {
            TypeasyError::ModelLoad { .. } | TypeasyError::VadModelLoad(_) => {
                TypeasyFfiResult::InitFailed
            }
            TypeasyError::RecognizerNotReady => TypeasyFfiResult::NotInitialized,
            TypeasyError::InvalidAudio { .. } | TypeasyError::Wav(_) => TypeasyFfiResult::AudioError,
            TypeasyError::NullPointer { .. } => TypeasyFfiResult::NullPointer,
            _ => TypeasyFfiResult::InternalError,
        }
    })
}

/// 验证指针非空
#[inline]
pub fn check_null<T>(ptr: *const T, param_name: &str) -> Result<(), TypeasyFfiResult> {
    if ptr.is_null() {
        tracing::error!("Null pointer: {}", param_name);
        Err(TypeasyFfiResult::NullPointer)
    } else {
        Ok(())
    }
}

/// 验证可变指针非空
#[inline]
pub fn check_null_mut<T>(ptr: *mut T, param_name: &str) -> Result<(), TypeasyFfiResult> {
    if ptr.is_null() {
        tracing::error!("Null pointer: {}", param_name);
        Err(TypeasyFfiResult::NullPointer)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_call_passthrough() {
        let code = ffi_safe_call(|| Ok(TypeasyFfiResult::Success));
        assert_eq!(code, TypeasyFfiResult::Success);

        let code = ffi_safe_call(|| Err(TypeasyFfiResult::NoData));
        assert_eq!(code, TypeasyFfiResult::NoData);
    }

    #[test]
    fn test_safe_call_catches_panic() {
        let code = ffi_safe_call(|| panic!("boom"));
        assert_eq!(code, TypeasyFfiResult::InternalError);

        let code = ffi_safe_call(|| panic!("{}", String::from("formatted")));
        assert_eq!(code, TypeasyFfiResult::InternalError);
    }

    #[test]
    fn test_error_mapping() {
        let err: TypeasyResult<()> = Err(TypeasyError::ModelLoad {
            path: "x".into(),
            reason: "y".into(),
        });
        assert_eq!(to_ffi_result(err), Err(TypeasyFfiResult::InitFailed));

        let err: TypeasyResult<()> = Err(TypeasyError::RecognizerNotReady);
        assert_eq!(to_ffi_result(err), Err(TypeasyFfiResult::NotInitialized));

        let err: TypeasyResult<()> = Err(TypeasyError::InvalidAudio {
            reason: "8bit".into(),
        });
        assert_eq!(to_ffi_result(err), Err(TypeasyFfiResult::AudioError));

        let err: TypeasyResult<()> = Err(TypeasyError::AsrInference("fail".into()));
        assert_eq!(to_ffi_result(err), Err(TypeasyFfiResult::InternalError));

        assert_eq!(to_ffi_result(Ok(7)), Ok(7));
    }

    #[test]
    fn test_check_null() {
        let value = 1i32;
        assert!(check_null(&value as *const i32, "value").is_ok());
        assert_eq!(
            check_null(std::ptr::null::<i32>(), "value"),
            Err(TypeasyFfiResult::NullPointer)
        );
        assert_eq!(
            check_null_mut(std::ptr::null_mut::<i32>(), "value"),
            Err(TypeasyFfiResult::NullPointer)
        );
    }
}
