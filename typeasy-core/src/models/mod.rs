//! GigaAM 模型目录解析
//!
//! sherpa-onnx 发布的 GigaAM 俄语模型有两种打包形式:
//! - CTC: 单个 model.onnx (或 int8 量化版) + tokens.txt
//! - Transducer: encoder / decoder / joiner 三个模型 + tokens.txt
//!
//! 按目录内容自动识别变体, 也可以在配置里显式指定。
//! 同名模型的 int8 量化版优先 (官方发布默认只带 int8)。

use crate::error::{TypeasyError, TypeasyResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// GigaAM 模型变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelVariant {
    Ctc,
    Transducer,
}

/// 解析完成的模型文件集合, 所有路径都已确认存在
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GigaAmModelFiles {
    Ctc {
        model: PathBuf,
        tokens: PathBuf,
    },
    Transducer {
        encoder: PathBuf,
        decoder: PathBuf,
        joiner: PathBuf,
        tokens: PathBuf,
    },
}

impl GigaAmModelFiles {
    pub fn variant(&self) -> ModelVariant {
        match self {
            GigaAmModelFiles::Ctc { .. } => ModelVariant::Ctc,
            GigaAmModelFiles::Transducer { .. } => ModelVariant::Transducer,
        }
    }

    pub fn tokens(&self) -> &Path {
        match self {
            GigaAmModelFiles::Ctc { tokens, .. } => tokens,
            GigaAmModelFiles::Transducer { tokens, .. } => tokens,
        }
    }
}

const CTC_MODEL_CANDIDATES: &[&str] = &["model.int8.onnx", "model.onnx"];
const ENCODER_CANDIDATES: &[&str] = &["encoder.int8.onnx", "encoder.onnx"];
const DECODER_CANDIDATES: &[&str] = &["decoder.int8.onnx", "decoder.onnx"];
const JOINER_CANDIDATES: &[&str] = &["joiner.int8.onnx", "joiner.onnx"];
const TOKENS_FILE: &str = "tokens.txt";

/// 自动识别模型目录
///
/// tokens.txt 必须存在; 两种变体的文件都齐时选 CTC
/// (单模型加载更快, 也是 GigaAM 的主力发布形式)。
pub fn resolve(model_dir: &Path) -> TypeasyResult<GigaAmModelFiles> {
    let tokens = require_tokens(model_dir)?;

    if let Some(model) = find_first(model_dir, CTC_MODEL_CANDIDATES) {
        return Ok(GigaAmModelFiles::Ctc { model, tokens });
    }

    match transducer_files(model_dir) {
        Some((encoder, decoder, joiner)) => Ok(GigaAmModelFiles::Transducer {
            encoder,
            decoder,
            joiner,
            tokens,
        }),
        None => Err(missing(
            model_dir,
            "no GigaAM model found (expected model.int8.onnx/model.onnx or encoder/decoder/joiner)",
        )),
    }
}

/// 按显式指定的变体解析, 文件不齐时报错而不回退
pub fn resolve_variant(model_dir: &Path, variant: ModelVariant) -> TypeasyResult<GigaAmModelFiles> {
    let tokens = require_tokens(model_dir)?;

    match variant {
        ModelVariant::Ctc => match find_first(model_dir, CTC_MODEL_CANDIDATES) {
            Some(model) => Ok(GigaAmModelFiles::Ctc { model, tokens }),
            None => Err(missing(model_dir, "ctc variant requested but model.int8.onnx/model.onnx not found")),
        },
        ModelVariant::Transducer => match transducer_files(model_dir) {
            Some((encoder, decoder, joiner)) => Ok(GigaAmModelFiles::Transducer {
                encoder,
                decoder,
                joiner,
                tokens,
            }),
            None => Err(missing(model_dir, "transducer variant requested but encoder/decoder/joiner not found")),
        },
    }
}

fn require_tokens(model_dir: &Path) -> TypeasyResult<PathBuf> {
    let tokens = model_dir.join(TOKENS_FILE);
    if tokens.is_file() {
        Ok(tokens)
    } else {
        Err(missing(model_dir, "tokens.txt not found"))
    }
}

fn transducer_files(model_dir: &Path) -> Option<(PathBuf, PathBuf, PathBuf)> {
    let encoder = find_first(model_dir, ENCODER_CANDIDATES)?;
    let decoder = find_first(model_dir, DECODER_CANDIDATES)?;
    let joiner = find_first(model_dir, JOINER_CANDIDATES)?;
    Some((encoder, decoder, joiner))
}

fn find_first(dir: &Path, candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

fn missing(dir: &Path, what: &str) -> TypeasyError {
    TypeasyError::ModelLoad {
        path: dir.display().to_string(),
        reason: what.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_missing_dir() {
        let err = resolve(Path::new("/nonexistent/gigaam")).unwrap_err();
        assert!(err.to_string().contains("tokens.txt"));
    }

    #[test]
    fn test_variant_accessor() {
        let files = GigaAmModelFiles::Ctc {
            model: PathBuf::from("m.onnx"),
            tokens: PathBuf::from("tokens.txt"),
        };
        assert_eq!(files.variant(), ModelVariant::Ctc);
        assert_eq!(files.tokens(), Path::new("tokens.txt"));
    }

    #[test]
    fn test_model_variant_serde_names() {
        // 顶层枚举没法直接序列化成 TOML 文档, 放进表里验证命名
        #[derive(serde::Serialize, serde::Deserialize)]
        struct Wrap {
            variant: ModelVariant,
        }
        let s = toml::to_string(&Wrap {
            variant: ModelVariant::Transducer,
        })
        .unwrap();
        assert!(s.contains("transducer"));

        let parsed: Wrap = toml::from_str("variant = \"ctc\"").unwrap();
        assert_eq!(parsed.variant, ModelVariant::Ctc);
    }
}
