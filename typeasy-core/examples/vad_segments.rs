//! VAD 分段 + 逐段转写测试
//!
//! 模拟宿主的会话模式: 把 WAV 按小块喂给 VAD, 切出的每段
//! 单独转写, 验证长录音的分段效果。
//!
//! 用法:
//!   TYPEASY_MODEL_DIR=models/gigaam cargo run --example vad_segments --features sherpa -- long.wav

use std::env;
use std::ffi::CStr;
use std::path::Path;
use typeasy_core::{
    audio, sys, OfflineRecognizer, RecognizerConfig, TypeasyResult, VadConfig,
    VoiceActivityDetector,
};

fn main() -> TypeasyResult<()> {
    typeasy_core::init_logging();

    println!("=== Typeasy VAD 分段转写测试 ===");
    let sherpa_version = unsafe { CStr::from_ptr(sys::SherpaOnnxGetVersionStr()) };
    println!("sherpa-onnx 版本: {}\n", sherpa_version.to_string_lossy());

    let audio_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "models/gigaam/test_wavs/long.wav".to_string());
    if !Path::new(&audio_path).exists() {
        eprintln!("❌ 错误: 音频文件不存在: {}", audio_path);
        std::process::exit(1);
    }

    let mut asr_config = RecognizerConfig::default();
    asr_config.model_dir =
        env::var("TYPEASY_MODEL_DIR").unwrap_or_else(|_| "models/gigaam".to_string());
    let vad_config = VadConfig {
        model_path: env::var("TYPEASY_VAD_MODEL")
            .unwrap_or_else(|_| "models/silero-vad/silero_vad.onnx".to_string()),
        ..Default::default()
    };

    println!("⏳ 加载模型...");
    let recognizer = OfflineRecognizer::new(&asr_config)?;
    let mut vad = VoiceActivityDetector::new(&vad_config)?;
    println!("✅ 模型加载成功\n");

    println!("📖 读取音频: {}", audio_path);
    let wav = audio::read_wav_samples(Path::new(&audio_path))?;
    println!(
        "   {} 采样 @ {} Hz ({:.2} 秒)\n",
        wav.samples.len(),
        wav.sample_rate,
        wav.duration_seconds()
    );
    if wav.sample_rate != vad_config.sample_rate as u32 {
        eprintln!(
            "❌ VAD 需要 {} Hz 输入, 文件是 {} Hz",
            vad_config.sample_rate, wav.sample_rate
        );
        std::process::exit(1);
    }

    // 按 VAD 窗口大小分块喂入, 模拟实时音频流
    println!("🚀 分段识别...\n");
    let window = vad_config.window_size as usize;
    let mut segment_count = 0;

    let handle_pending = |vad: &mut VoiceActivityDetector,
                          count: &mut usize|
     -> TypeasyResult<()> {
        for segment in vad.drain_segments() {
            *count += 1;
            let result = recognizer.transcribe(&segment.samples, asr_config.sample_rate)?;
            println!(
                "[{:>2}] {:.2}s + {:.2}s  {}",
                *count,
                segment.start_seconds(wav.sample_rate),
                segment.duration_seconds(wav.sample_rate),
                result.text
            );
        }
        Ok(())
    };

    for chunk in wav.samples.chunks(window) {
        vad.accept_waveform(chunk);
        handle_pending(&mut vad, &mut segment_count)?;
    }

    // 录音结束, 把不满静音条件的尾段也切出来
    vad.flush();
    handle_pending(&mut vad, &mut segment_count)?;

    println!("\n✅ 共 {} 段", segment_count);
    Ok(())
}
