//! WAV 音频读取
//!
//! 解码成单声道 f32 采样 ([-1.0, 1.0]), 保留源采样率。
//! sherpa-onnx 在 AcceptWaveform 内部按需重采样, 这里不做重采样。

use crate::error::{TypeasyError, TypeasyResult};
use hound::{SampleFormat, WavReader};
use std::path::Path;

/// 解码后的音频数据
#[derive(Debug, Clone)]
pub struct WavAudio {
    /// 单声道采样, 取值范围 [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// 源文件采样率 (Hz)
    pub sample_rate: u32,
}

impl WavAudio {
    pub fn duration_seconds(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

/// 读取 WAV 文件
///
/// 支持 16/24/32-bit PCM 和 32-bit float, 多声道取均值混成单声道。
pub fn read_wav_samples(path: &Path) -> TypeasyResult<WavAudio> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (SampleFormat::Float, 32) => reader
            .samples::<f32>()
            .collect::<Result<Vec<_>, _>>()?,
        (SampleFormat::Int, 16) => reader
            .samples::<i16>()
            .map(|s| s.map(|s| s as f32 / 32768.0))
            .collect::<Result<Vec<_>, _>>()?,
        (SampleFormat::Int, 24) => reader
            .samples::<i32>()
            .map(|s| s.map(|s| s as f32 / 8_388_608.0))
            .collect::<Result<Vec<_>, _>>()?,
        (SampleFormat::Int, 32) => reader
            .samples::<i32>()
            .map(|s| s.map(|s| s as f32 / 2_147_483_648.0))
            .collect::<Result<Vec<_>, _>>()?,
        (format, bits) => {
            return Err(TypeasyError::InvalidAudio {
                reason: format!("unsupported WAV format: {:?} {}bit", format, bits),
            })
        }
    };

    let samples = mix_to_mono(&interleaved, spec.channels as usize)?;

    Ok(WavAudio {
        samples,
        sample_rate: spec.sample_rate,
    })
}

fn mix_to_mono(interleaved: &[f32], channels: usize) -> TypeasyResult<Vec<f32>> {
    match channels {
        0 => Err(TypeasyError::InvalidAudio {
            reason: "WAV reports zero channels".to_string(),
        }),
        1 => Ok(interleaved.to_vec()),
        n => Ok(interleaved
            .chunks_exact(n)
            .map(|frame| frame.iter().sum::<f32>() / n as f32)
            .collect()),
    }
}
