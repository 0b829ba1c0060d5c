//! sherpa-onnx 离线识别器安全封装

use crate::error::{TypeasyError, TypeasyResult};
use crate::models::{self, GigaAmModelFiles};
use crate::sys;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::path::Path;
use std::ptr;

use super::config::RecognizerConfig;
use super::RecognitionResult;

/// 离线识别器 (线程安全)
pub struct OfflineRecognizer {
    inner: *const sys::SherpaOnnxOfflineRecognizer,
}

// sherpa-onnx 的离线 recognizer 创建后只读, 可以跨线程共享
unsafe impl Send for OfflineRecognizer {}
unsafe impl Sync for OfflineRecognizer {}

impl OfflineRecognizer {
    /// 创建离线识别器
    ///
    /// 先解析模型目录 (CTC 或 transducer), 文件缺失在进入 C API
    /// 之前就报错; C 侧加载失败返回 [`TypeasyError::ModelLoad`]。
    pub fn new(config: &RecognizerConfig) -> TypeasyResult<Self> {
        // 验证模型路径
        let model_dir = Path::new(&config.model_dir);
        if !model_dir.exists() {
            return Err(TypeasyError::ModelLoad {
                path: config.model_dir.clone(),
                reason: "Model directory not found".to_string(),
            });
        }

        let files = match config.model_variant {
            Some(variant) => models::resolve_variant(model_dir, variant)?,
            None => models::resolve(model_dir)?,
        };
        tracing::debug!("解析到 GigaAM {:?} 模型: {:?}", files.variant(), files);

        // 转换为 CString, 必须存活到 Create 调用结束
        let tokens_cstr = path_cstring(files.tokens(), &config.model_dir)?;
        let (ctc_cstr, encoder_cstr, decoder_cstr, joiner_cstr, model_type_cstr) = match &files {
            GigaAmModelFiles::Ctc { model, .. } => {
                (Some(path_cstring(model, &config.model_dir)?), None, None, None, None)
            }
            GigaAmModelFiles::Transducer {
                encoder,
                decoder,
                joiner,
                ..
            } => (
                None,
                Some(path_cstring(encoder, &config.model_dir)?),
                Some(path_cstring(decoder, &config.model_dir)?),
                Some(path_cstring(joiner, &config.model_dir)?),
                // 跳过 C 侧的模型类型探测
                Some(CString::new("nemo_transducer").unwrap()),
            ),
        };

        let provider_cstr = config_cstring("provider", &config.provider)?;
        let decoding_method_cstr = config_cstring("decoding_method", &config.decoding_method)?;
        let hotwords_cstr = match config.hotwords_file.as_deref() {
            Some(path) => Some(config_cstring("hotwords_file", path)?),
            None => None,
        };

        // 构建配置结构体, 未用到的子模型一律清零 (空指针 + 0)
        let model_config = sys::SherpaOnnxOfflineModelConfig {
            transducer: sys::SherpaOnnxOfflineTransducerModelConfig {
                encoder: opt_ptr(&encoder_cstr),
                decoder: opt_ptr(&decoder_cstr),
                joiner: opt_ptr(&joiner_cstr),
            },
            paraformer: unsafe { std::mem::zeroed() },
            nemo_ctc: sys::SherpaOnnxOfflineNemoEncDecCtcModelConfig {
                model: opt_ptr(&ctc_cstr),
            },
            whisper: unsafe { std::mem::zeroed() },
            tdnn: unsafe { std::mem::zeroed() },
            tokens: tokens_cstr.as_ptr(),
            num_threads: config.num_threads,
            debug: 0,
            provider: provider_cstr.as_ptr(),
            model_type: opt_ptr(&model_type_cstr),
            modeling_unit: ptr::null(),
            bpe_vocab: ptr::null(),
            telespeech_ctc: ptr::null(),
            sense_voice: unsafe { std::mem::zeroed() },
            moonshine: unsafe { std::mem::zeroed() },
            fire_red_asr: unsafe { std::mem::zeroed() },
            dolphin: unsafe { std::mem::zeroed() },
            zipformer_ctc: unsafe { std::mem::zeroed() },
            canary: unsafe { std::mem::zeroed() },
        };

        let recognizer_config = sys::SherpaOnnxOfflineRecognizerConfig {
            feat_config: sys::SherpaOnnxFeatureConfig {
                sample_rate: config.sample_rate,
                feature_dim: config.feature_dim,
            },
            model_config,
            lm_config: unsafe { std::mem::zeroed() },
            decoding_method: decoding_method_cstr.as_ptr(),
            max_active_paths: config.max_active_paths,
            hotwords_file: opt_ptr(&hotwords_cstr),
            hotwords_score: config.hotwords_score,
            rule_fsts: ptr::null(),
            rule_fars: ptr::null(),
            blank_penalty: 0.0,
            hr: unsafe { std::mem::zeroed() },
        };

        // 调用 C API 创建识别器
        let recognizer = unsafe { sys::SherpaOnnxCreateOfflineRecognizer(&recognizer_config) };

        if recognizer.is_null() {
            return Err(TypeasyError::ModelLoad {
                path: config.model_dir.clone(),
                reason: "Failed to create recognizer".to_string(),
            });
        }

        tracing::info!(
            "GigaAM {:?} 模型加载成功: {}",
            files.variant(),
            config.model_dir
        );
        Ok(Self { inner: recognizer })
    }

    /// 创建新的识别流 (一段发声一个流)
    pub fn create_stream(&self) -> TypeasyResult<OfflineStream<'_>> {
        let stream = unsafe { sys::SherpaOnnxCreateOfflineStream(self.inner) };

        if stream.is_null() {
            return Err(TypeasyError::AsrInference(
                "Failed to create stream".to_string(),
            ));
        }

        Ok(OfflineStream {
            inner: stream,
            _recognizer: std::marker::PhantomData,
        })
    }

    /// 解码流 (整段波形喂完后调用一次)
    pub fn decode(&self, stream: &mut OfflineStream<'_>) {
        unsafe {
            sys::SherpaOnnxDecodeOfflineStream(self.inner, stream.inner);
        }
    }

    /// 一次完成建流 / 喂音频 / 解码 / 取结果
    ///
    /// `sample_rate` 是采样的实际采样率, 与模型不一致时
    /// sherpa-onnx 内部自动重采样。
    pub fn transcribe(&self, samples: &[f32], sample_rate: i32) -> TypeasyResult<RecognitionResult> {
        let mut stream = self.create_stream()?;
        stream.accept_waveform(samples, sample_rate);
        self.decode(&mut stream);
        Ok(stream.result())
    }
}

impl Drop for OfflineRecognizer {
    fn drop(&mut self) {
        if !self.inner.is_null() {
            unsafe {
                sys::SherpaOnnxDestroyOfflineRecognizer(self.inner);
            }
        }
    }
}

/// 离线识别流
pub struct OfflineStream<'a> {
    inner: *const sys::SherpaOnnxOfflineStream,
    _recognizer: std::marker::PhantomData<&'a OfflineRecognizer>,
}

// 流本身没有内部同步, 只允许跨线程移交, 不允许共享
unsafe impl Send for OfflineStream<'_> {}

impl<'a> OfflineStream<'a> {
    /// 输入音频数据 (单声道 f32)
    pub fn accept_waveform(&mut self, samples: &[f32], sample_rate: i32) {
        unsafe {
            sys::SherpaOnnxAcceptWaveformOffline(
                self.inner,
                sample_rate,
                samples.as_ptr(),
                samples.len() as i32,
            );
        }
    }

    /// 获取识别结果 (解码之后调用)
    pub fn result(&self) -> RecognitionResult {
        unsafe {
            let result_ptr = sys::SherpaOnnxGetOfflineStreamResult(self.inner);
            if result_ptr.is_null() {
                return RecognitionResult::default();
            }

            let text_ptr = (*result_ptr).text;
            let text = if !text_ptr.is_null() {
                CStr::from_ptr(text_ptr).to_string_lossy().into_owned()
            } else {
                String::new()
            };

            let count = (*result_ptr).count;
            let timestamps_ptr = (*result_ptr).timestamps;
            let timestamps = if !timestamps_ptr.is_null() && count > 0 {
                std::slice::from_raw_parts(timestamps_ptr, count as usize).to_vec()
            } else {
                Vec::new()
            };

            sys::SherpaOnnxDestroyOfflineRecognizerResult(result_ptr);
            RecognitionResult { text, timestamps }
        }
    }
}

impl<'a> Drop for OfflineStream<'a> {
    fn drop(&mut self) {
        if !self.inner.is_null() {
            unsafe {
                sys::SherpaOnnxDestroyOfflineStream(self.inner);
            }
        }
    }
}

fn path_cstring(path: &Path, model_dir: &str) -> TypeasyResult<CString> {
    let text = path.to_str().ok_or_else(|| TypeasyError::ModelLoad {
        path: model_dir.to_string(),
        reason: format!("Non-UTF-8 path: {}", path.display()),
    })?;
    CString::new(text).map_err(|e| TypeasyError::ModelLoad {
        path: model_dir.to_string(),
        reason: format!("Invalid path encoding: {}", e),
    })
}

fn config_cstring(field: &str, value: &str) -> TypeasyResult<CString> {
    CString::new(value)
        .map_err(|_| TypeasyError::AsrInference(format!("{} contains interior NUL", field)))
}

fn opt_ptr(s: &Option<CString>) -> *const c_char {
    s.as_ref().map(|s| s.as_ptr()).unwrap_or(ptr::null())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_cstring_ok() {
        let c = path_cstring(Path::new("/tmp/model.onnx"), "/tmp").unwrap();
        assert_eq!(c.to_str().unwrap(), "/tmp/model.onnx");
    }

    #[test]
    fn test_opt_ptr_null_for_none() {
        assert!(opt_ptr(&None).is_null());
        let c = Some(CString::new("x").unwrap());
        assert!(!opt_ptr(&c).is_null());
    }

    #[test]
    fn test_new_rejects_missing_dir() {
        let config = RecognizerConfig {
            model_dir: "/nonexistent/gigaam".to_string(),
            ..Default::default()
        };
        let err = OfflineRecognizer::new(&config).unwrap_err();
        assert!(matches!(err, TypeasyError::ModelLoad { .. }));
    }
}
