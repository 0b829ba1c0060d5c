//! GigaAM 离线整段转写测试
//!
//! 用法:
//!   TYPEASY_MODEL_DIR=models/gigaam cargo run --example transcribe_file --features sherpa -- audio.wav
//!
//! 需要本机装好 sherpa-onnx 运行时和 GigaAM 模型。

use std::env;
use std::path::Path;
use typeasy_core::{audio, OfflineRecognizer, RecognizerConfig, TypeasyResult};

fn main() -> TypeasyResult<()> {
    typeasy_core::init_logging();

    println!("=== Typeasy GigaAM 离线转写测试 ===\n");

    let audio_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "models/gigaam/test_wavs/example.wav".to_string());
    println!("📁 音频文件: {}", audio_path);

    if !Path::new(&audio_path).exists() {
        eprintln!("❌ 错误: 音频文件不存在: {}", audio_path);
        std::process::exit(1);
    }

    let mut config = RecognizerConfig::default();
    config.model_dir =
        env::var("TYPEASY_MODEL_DIR").unwrap_or_else(|_| "models/gigaam".to_string());

    println!("🔧 模型配置:");
    println!("   - 模型目录: {}", config.model_dir);
    println!("   - 解码方法: {}", config.decoding_method);
    println!("   - 线程数:   {}\n", config.num_threads);

    println!("⏳ 加载 GigaAM 模型...");
    let recognizer = OfflineRecognizer::new(&config)?;
    println!("✅ 模型加载成功\n");

    println!("📖 读取音频数据...");
    let wav = audio::read_wav_samples(Path::new(&audio_path))?;
    println!(
        "   {} 采样 @ {} Hz ({:.2} 秒)\n",
        wav.samples.len(),
        wav.sample_rate,
        wav.duration_seconds()
    );

    println!("🚀 开始识别...");
    let start = std::time::Instant::now();
    let result = recognizer.transcribe(&wav.samples, wav.sample_rate as i32)?;
    let elapsed = start.elapsed();

    println!("\n=== 识别结果 ===");
    println!("{}", result.text);
    if !result.timestamps.is_empty() {
        println!("\n⏱️  token 时间戳: {:?}", &result.timestamps);
    }

    let duration = wav.duration_seconds();
    if duration > 0.0 {
        println!(
            "\n⏱️  耗时: {:.2?} (RTF {:.3})",
            elapsed,
            elapsed.as_secs_f32() / duration
        );
    }

    Ok(())
}
