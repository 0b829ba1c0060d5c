//! sherpa-onnx VAD 安全封装

use crate::error::{TypeasyError, TypeasyResult};
use crate::sys;
use std::ffi::CString;
use std::path::Path;

use super::config::VadConfig;
use super::SpeechSegment;

/// Silero VAD 检测器
///
/// 持续喂入音频, 内部缓冲并切分; 切出的完整语音段通过
/// [`front`](Self::front) / [`drain_segments`](Self::drain_segments) 取出。
pub struct VoiceActivityDetector {
    inner: *const sys::SherpaOnnxVoiceActivityDetector,
}

// VAD 有内部可变状态, 只允许跨线程移交, 不允许共享
unsafe impl Send for VoiceActivityDetector {}

impl VoiceActivityDetector {
    /// 创建 VAD 检测器
    pub fn new(config: &VadConfig) -> TypeasyResult<Self> {
        if !Path::new(&config.model_path).is_file() {
            return Err(TypeasyError::VadModelLoad(format!(
                "VAD model not found: {}",
                config.model_path
            )));
        }

        let model_cstr = CString::new(config.model_path.as_str()).map_err(|e| {
            TypeasyError::VadModelLoad(format!("Invalid model path encoding: {}", e))
        })?;
        let provider_cstr = CString::new(config.provider.as_str())
            .map_err(|e| TypeasyError::VadModelLoad(format!("Invalid provider: {}", e)))?;

        let vad_config = sys::SherpaOnnxVadModelConfig {
            silero_vad: sys::SherpaOnnxSileroVadModelConfig {
                model: model_cstr.as_ptr(),
                threshold: config.threshold,
                min_silence_duration: config.min_silence_duration,
                min_speech_duration: config.min_speech_duration,
                window_size: config.window_size,
                max_speech_duration: config.max_speech_duration,
            },
            sample_rate: config.sample_rate,
            num_threads: config.num_threads,
            provider: provider_cstr.as_ptr(),
            debug: 0,
            ten_vad: unsafe { std::mem::zeroed() },
        };

        let vad = unsafe {
            sys::SherpaOnnxCreateVoiceActivityDetector(&vad_config, config.buffer_size_seconds)
        };

        if vad.is_null() {
            return Err(TypeasyError::VadModelLoad(format!(
                "Failed to create VAD: {}",
                config.model_path
            )));
        }

        tracing::info!("Silero VAD 加载成功: {}", config.model_path);
        Ok(Self { inner: vad })
    }

    /// 喂入音频 (任意长度, 单声道 f32, 采样率须与配置一致)
    pub fn accept_waveform(&mut self, samples: &[f32]) {
        unsafe {
            sys::SherpaOnnxVoiceActivityDetectorAcceptWaveform(
                self.inner,
                samples.as_ptr(),
                samples.len() as i32,
            );
        }
    }

    /// 队列里是否没有待取的语音段
    pub fn is_empty(&self) -> bool {
        unsafe { sys::SherpaOnnxVoiceActivityDetectorEmpty(self.inner) != 0 }
    }

    /// 当前是否正处在语音中
    pub fn detected(&self) -> bool {
        unsafe { sys::SherpaOnnxVoiceActivityDetectorDetected(self.inner) != 0 }
    }

    /// 取出队首语音段, 队列为空时返回 None
    pub fn front(&mut self) -> Option<SpeechSegment> {
        if self.is_empty() {
            return None;
        }

        unsafe {
            let segment_ptr = sys::SherpaOnnxVoiceActivityDetectorFront(self.inner);
            if segment_ptr.is_null() {
                return None;
            }

            let n = (*segment_ptr).n;
            let samples_ptr = (*segment_ptr).samples;
            let samples = if !samples_ptr.is_null() && n > 0 {
                std::slice::from_raw_parts(samples_ptr, n as usize).to_vec()
            } else {
                Vec::new()
            };
            let start_sample = (*segment_ptr).start.max(0) as usize;

            sys::SherpaOnnxDestroySpeechSegment(segment_ptr);
            sys::SherpaOnnxVoiceActivityDetectorPop(self.inner);

            Some(SpeechSegment {
                start_sample,
                samples,
            })
        }
    }

    /// 取空所有已切分的语音段
    pub fn drain_segments(&mut self) -> Vec<SpeechSegment> {
        let mut segments = Vec::new();
        while let Some(segment) = self.front() {
            segments.push(segment);
        }
        segments
    }

    /// 冲刷尾段 (录音结束时调用, 把未满足静音条件的结尾也切出来)
    pub fn flush(&mut self) {
        unsafe {
            sys::SherpaOnnxVoiceActivityDetectorFlush(self.inner);
        }
    }

    /// 重置检测状态 (新会话开始前调用)
    pub fn reset(&mut self) {
        unsafe {
            sys::SherpaOnnxVoiceActivityDetectorReset(self.inner);
        }
    }

    /// 丢弃已缓冲、尚未切分的音频
    pub fn clear(&mut self) {
        unsafe {
            sys::SherpaOnnxVoiceActivityDetectorClear(self.inner);
        }
    }
}

impl Drop for VoiceActivityDetector {
    fn drop(&mut self) {
        if !self.inner.is_null() {
            unsafe {
                sys::SherpaOnnxDestroyVoiceActivityDetector(self.inner);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_missing_model() {
        let config = VadConfig {
            model_path: "/nonexistent/silero_vad.onnx".to_string(),
            ..Default::default()
        };
        let err = VoiceActivityDetector::new(&config).unwrap_err();
        assert!(matches!(err, TypeasyError::VadModelLoad(_)));
    }
}
