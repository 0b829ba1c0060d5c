//! FFI 导出函数
//!
//! Rust cdylib FFI 接口, 供 Typeasy Swift 宿主经 bridging header 调用。
//! 完整集成: GigaAM 离线识别 + Silero VAD 分段会话。

use super::safety::{check_null, check_null_mut, ffi_safe_call, to_ffi_result};
use super::types::{TypeasyFfiResult, TypeasyTranscript};
use crate::asr::OfflineRecognizer;
use crate::audio;
use crate::config::TypeasyConfig;
use crate::error::TypeasyResult;
use crate::sys;
use crate::vad::VoiceActivityDetector;
use std::collections::VecDeque;
use std::ffi::CStr;
use std::os::raw::c_char;
use std::path::Path;
use std::sync::Mutex;

/// 全局 Typeasy Core 实例
static TYPEASY_CORE: Mutex<Option<TypeasyCoreState>> = Mutex::new(None);

/// Typeasy Core 完整状态
struct TypeasyCoreState {
    /// GigaAM 离线识别器
    recognizer: OfflineRecognizer,
    /// VAD 检测器, 模型缺失时为 None (只能整段转写)
    vad: Option<VoiceActivityDetector>,
    /// 已转写、待宿主取走的文本队列
    transcript_queue: VecDeque<TypeasyTranscript>,
    /// 会话状态
    session_active: bool,
    /// 本次会话累计接收的采样数
    session_samples: u64,
    /// 会话采样率 (Hz)
    sample_rate: i32,
}

impl TypeasyCoreState {
    fn new(config: &TypeasyConfig) -> TypeasyResult<Self> {
        tracing::info!("初始化 Typeasy Core");

        let recognizer = OfflineRecognizer::new(&config.asr)?;

        // VAD 模型可选, 没有时降级成整段转写
        let vad = match VoiceActivityDetector::new(&config.vad) {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("⚠️ VAD 不可用, 分段会话被禁用: {}", e);
                None
            }
        };

        Ok(Self {
            recognizer,
            vad,
            transcript_queue: VecDeque::new(),
            session_active: false,
            session_samples: 0,
            sample_rate: config.asr.sample_rate,
        })
    }

    /// 会话音频入口: 喂 VAD, 切出的完整段立即转写进队列
    fn push_session_audio(&mut self, samples: &[f32]) -> TypeasyResult<()> {
        if let Some(vad) = self.vad.as_mut() {
            vad.accept_waveform(samples);
        }
        self.session_samples += samples.len() as u64;
        self.transcribe_pending_segments()
    }

    fn transcribe_pending_segments(&mut self) -> TypeasyResult<()> {
        // 每次循环重新借用 vad, front() 结束后才能动 recognizer
        while let Some(segment) = self.vad.as_mut().and_then(|v| v.front()) {
            let result = self
                .recognizer
                .transcribe(&segment.samples, self.sample_rate)?;

            if result.is_empty() {
                tracing::debug!(
                    "空白段 [{:.2}s, {:.2}s长] 跳过",
                    segment.start_seconds(self.sample_rate as u32),
                    segment.duration_seconds(self.sample_rate as u32)
                );
                continue;
            }

            tracing::info!(
                "🎤 识别段 [{:.2}s]: {}",
                segment.start_seconds(self.sample_rate as u32),
                result.text
            );
            self.transcript_queue
                .push_back(TypeasyTranscript::from_text(&result.text));
        }
        Ok(())
    }

    fn end_session(&mut self) -> TypeasyResult<()> {
        if let Some(vad) = self.vad.as_mut() {
            vad.flush();
        }
        self.transcribe_pending_segments()?;
        if let Some(vad) = self.vad.as_mut() {
            vad.reset();
        }

        self.session_active = false;
        tracing::info!("会话结束, 共接收 {} 个采样", self.session_samples);
        Ok(())
    }

    /// 释放队列里所有未取走的文本
    fn clear_queue(&mut self) {
        for mut transcript in self.transcript_queue.drain(..) {
            transcript.release();
        }
    }
}

/// 加载配置文件, 失败时退回默认配置
fn load_config_or_default() -> TypeasyConfig {
    match TypeasyConfig::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("加载配置文件失败: {}, 使用默认配置", e);
            TypeasyConfig::default()
        }
    }
}

fn create_state_into(
    slot: &mut Option<TypeasyCoreState>,
    config: &TypeasyConfig,
) -> Result<TypeasyFfiResult, TypeasyFfiResult> {
    match TypeasyCoreState::new(config) {
        Ok(state) => {
            *slot = Some(state);
            tracing::info!("✅ Typeasy Core 初始化成功");
            Ok(TypeasyFfiResult::Success)
        }
        Err(e) => {
            tracing::error!("❌ Typeasy Core 初始化失败: {}", e);
            Err(TypeasyFfiResult::InitFailed)
        }
    }
}

/// 初始化 Typeasy Core, 配置来自用户配置文件
///
/// 重复调用是幂等的: 已初始化时直接返回 Success。
#[no_mangle]
pub extern "C" fn typeasy_core_init() -> TypeasyFfiResult {
    ffi_safe_call(|| {
        // 初始化日志
        crate::init_logging();
        tracing::info!("Typeasy Core FFI: 初始化");

        let mut core = TYPEASY_CORE.lock().unwrap();

        if core.is_some() {
            tracing::warn!("Typeasy Core 已经初始化");
            return Ok(TypeasyFfiResult::Success);
        }

        let config = load_config_or_default();
        create_state_into(&mut core, &config)
    })
}

/// 以指定模型目录初始化 (宿主传 app bundle 里的路径)
///
/// `vad_model` 可以为 NULL, 此时按配置文件里的 VAD 路径加载;
/// 已初始化时释放旧引擎重建, 未取走的文本一并清掉。
#[no_mangle]
pub extern "C" fn typeasy_core_init_with_model_dir(
    model_dir: *const c_char,
    vad_model: *const c_char,
) -> TypeasyFfiResult {
    ffi_safe_call(|| {
        check_null(model_dir, "model_dir")?;

        crate::init_logging();
        let model_dir = unsafe { CStr::from_ptr(model_dir) }
            .to_string_lossy()
            .into_owned();
        tracing::info!("Typeasy Core FFI: 初始化, model_dir={}", model_dir);

        let mut config = load_config_or_default();
        config.asr.model_dir = model_dir;
        if !vad_model.is_null() {
            config.vad.model_path = unsafe { CStr::from_ptr(vad_model) }
                .to_string_lossy()
                .into_owned();
        }

        let mut core = TYPEASY_CORE.lock().unwrap();
        if let Some(mut old) = core.take() {
            tracing::info!("重新初始化, 释放旧引擎");
            old.clear_queue();
        }

        create_state_into(&mut core, &config)
    })
}

/// 关闭 Typeasy Core
#[no_mangle]
pub extern "C" fn typeasy_core_shutdown() -> TypeasyFfiResult {
    ffi_safe_call(|| {
        tracing::info!("Typeasy Core FFI: 关闭");

        let mut core = TYPEASY_CORE.lock().unwrap();

        if core.is_none() {
            tracing::warn!("Typeasy Core 未初始化");
            return Ok(TypeasyFfiResult::Success);
        }

        // 清理资源, 未取走的文本一并释放
        if let Some(ref mut state) = *core {
            state.clear_queue();
        }
        *core = None;

        tracing::info!("Typeasy Core 关闭成功");
        Ok(TypeasyFfiResult::Success)
    })
}

/// 查询引擎是否已初始化 (1 = 就绪, 0 = 未初始化)
#[no_mangle]
pub extern "C" fn typeasy_core_is_ready() -> i32 {
    match TYPEASY_CORE.lock() {
        Ok(core) => core.is_some() as i32,
        Err(_) => 0,
    }
}

/// 整段转写 WAV 文件
///
/// 支持 16/24/32-bit PCM 和 float WAV, 采样率任意 (内部重采样)。
/// 成功时 `out` 里的文本需要调用方用 typeasy_transcript_free 释放。
#[no_mangle]
pub extern "C" fn typeasy_core_transcribe_file(
    path: *const c_char,
    out: *mut TypeasyTranscript,
) -> TypeasyFfiResult {
    ffi_safe_call(|| {
        check_null(path, "path")?;
        check_null_mut(out, "out")?;

        let path = unsafe { CStr::from_ptr(path) }.to_string_lossy().into_owned();

        let mut core_lock = TYPEASY_CORE.lock().unwrap();
        let core = core_lock
            .as_mut()
            .ok_or(TypeasyFfiResult::NotInitialized)?;

        let wav = to_ffi_result(audio::read_wav_samples(Path::new(&path)))?;
        if wav.samples.is_empty() {
            tracing::warn!("音频文件没有采样数据: {}", path);
            return Err(TypeasyFfiResult::AudioError);
        }

        let result = to_ffi_result(
            core.recognizer
                .transcribe(&wav.samples, wav.sample_rate as i32),
        )?;

        tracing::info!(
            "🎤 转写完成 [{:.2}s]: {} 字节文本",
            wav.duration_seconds(),
            result.text.len()
        );
        unsafe {
            *out = TypeasyTranscript::from_text(&result.text);
        }
        Ok(TypeasyFfiResult::Success)
    })
}

/// 整段转写 PCM 采样 (单声道 f32, [-1.0, 1.0])
#[no_mangle]
pub extern "C" fn typeasy_core_transcribe_samples(
    samples: *const f32,
    len: usize,
    sample_rate: i32,
    out: *mut TypeasyTranscript,
) -> TypeasyFfiResult {
    ffi_safe_call(|| {
        check_null(samples, "samples")?;
        check_null_mut(out, "out")?;
        if len == 0 || sample_rate <= 0 {
            tracing::error!("无效参数: len={}, sample_rate={}", len, sample_rate);
            return Err(TypeasyFfiResult::InvalidArgument);
        }

        let samples = unsafe { std::slice::from_raw_parts(samples, len) };

        let mut core_lock = TYPEASY_CORE.lock().unwrap();
        let core = core_lock
            .as_mut()
            .ok_or(TypeasyFfiResult::NotInitialized)?;

        let result = to_ffi_result(core.recognizer.transcribe(samples, sample_rate))?;

        unsafe {
            *out = TypeasyTranscript::from_text(&result.text);
        }
        Ok(TypeasyFfiResult::Success)
    })
}

/// 开始 VAD 分段会话
///
/// 会话模式: push_audio 持续喂麦克风音频, VAD 切出的每段
/// 转写后进队列, poll 轮询取走; VAD 不可用时返回 InitFailed。
#[no_mangle]
pub extern "C" fn typeasy_core_session_begin() -> TypeasyFfiResult {
    ffi_safe_call(|| {
        let mut core_lock = TYPEASY_CORE.lock().unwrap();
        let core = core_lock
            .as_mut()
            .ok_or(TypeasyFfiResult::NotInitialized)?;

        if core.vad.is_none() {
            tracing::error!("VAD 不可用, 无法开始会话");
            return Err(TypeasyFfiResult::InitFailed);
        }
        if core.session_active {
            tracing::warn!("会话已在进行中");
            return Ok(TypeasyFfiResult::Success);
        }

        core.clear_queue();
        if let Some(vad) = core.vad.as_mut() {
            vad.reset();
        }
        core.session_active = true;
        core.session_samples = 0;

        tracing::info!("会话开始");
        Ok(TypeasyFfiResult::Success)
    })
}

/// 向会话喂入音频 (16kHz 单声道 f32)
#[no_mangle]
pub extern "C" fn typeasy_core_session_push_audio(
    samples: *const f32,
    len: usize,
) -> TypeasyFfiResult {
    ffi_safe_call(|| {
        check_null(samples, "samples")?;
        if len == 0 {
            return Ok(TypeasyFfiResult::Success);
        }

        let samples = unsafe { std::slice::from_raw_parts(samples, len) };

        let mut core_lock = TYPEASY_CORE.lock().unwrap();
        let core = core_lock
            .as_mut()
            .ok_or(TypeasyFfiResult::NotInitialized)?;

        if !core.session_active {
            tracing::warn!("会话未开始, 丢弃 {} 个采样", len);
            return Err(TypeasyFfiResult::InvalidArgument);
        }

        to_ffi_result(core.push_session_audio(samples))?;
        Ok(TypeasyFfiResult::Success)
    })
}

/// 轮询已转写的文本
///
/// 队列非空时取出队首写入 `out` 并返回 Success,
/// 否则返回 NoData; 取走的文本由调用方释放。
#[no_mangle]
pub extern "C" fn typeasy_core_session_poll(out: *mut TypeasyTranscript) -> TypeasyFfiResult {
    ffi_safe_call(|| {
        check_null_mut(out, "out")?;

        let mut core_lock = TYPEASY_CORE.lock().unwrap();
        let core = core_lock
            .as_mut()
            .ok_or(TypeasyFfiResult::NotInitialized)?;

        if let Some(transcript) = core.transcript_queue.pop_front() {
            unsafe {
                *out = transcript;
            }
            Ok(TypeasyFfiResult::Success)
        } else {
            Err(TypeasyFfiResult::NoData)
        }
    })
}

/// 结束会话, 冲刷 VAD 尾段
///
/// 返回后可能还有新转写的文本进队列, 宿主应继续 poll 到 NoData。
#[no_mangle]
pub extern "C" fn typeasy_core_session_end() -> TypeasyFfiResult {
    ffi_safe_call(|| {
        let mut core_lock = TYPEASY_CORE.lock().unwrap();
        let core = core_lock
            .as_mut()
            .ok_or(TypeasyFfiResult::NotInitialized)?;

        if !core.session_active {
            tracing::warn!("会话未开始");
            return Ok(TypeasyFfiResult::Success);
        }

        to_ffi_result(core.end_session())?;
        Ok(TypeasyFfiResult::Success)
    })
}

/// 释放转写结果里的文本
///
/// 只释放 text 字段, 结构体本身由调用方分配; 重复调用安全。
#[no_mangle]
pub extern "C" fn typeasy_transcript_free(transcript: *mut TypeasyTranscript) {
    if transcript.is_null() {
        return;
    }

    unsafe {
        (*transcript).release();
    }
}

/// Typeasy Core 版本号
#[no_mangle]
pub extern "C" fn typeasy_core_version() -> *const c_char {
    static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");
    VERSION.as_ptr() as *const c_char
}

/// 链接的 sherpa-onnx 运行时版本号
#[no_mangle]
pub extern "C" fn typeasy_core_sherpa_version() -> *const c_char {
    unsafe { sys::SherpaOnnxGetVersionStr() }
}
