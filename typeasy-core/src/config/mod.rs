//! Typeasy 配置模块
//!
//! 统一的配置管理, 从 ~/.config/typeasy/config.toml (macOS 上是
//! ~/Library/Application Support/typeasy/config.toml) 加载

use crate::asr::RecognizerConfig;
use crate::error::{TypeasyError, TypeasyResult};
use crate::vad::VadConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Typeasy 完整配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeasyConfig {
    /// ASR 配置
    pub asr: RecognizerConfig,
    /// VAD 配置
    pub vad: VadConfig,
}

impl Default for TypeasyConfig {
    fn default() -> Self {
        // 默认模型路径, 宿主 App 一般通过 TYPEASY_MODEL_DIR
        // 或 init_with_model_dir 传 bundle 里的路径
        let default_model_dir =
            std::env::var("TYPEASY_MODEL_DIR").unwrap_or_else(|_| "models/gigaam".to_string());

        let mut asr = RecognizerConfig::default();
        asr.model_dir = default_model_dir;

        Self {
            asr,
            vad: VadConfig::default(),
        }
    }
}

impl TypeasyConfig {
    /// 加载配置文件, 不存在时返回默认配置
    pub fn load() -> TypeasyResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("配置文件不存在, 使用默认配置: {:?}", config_path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content).map_err(|e| TypeasyError::ConfigParse {
            path: config_path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!("📋 加载配置成功: {:?}", config_path);
        tracing::info!(
            "📊 ASR 配置: model_dir={}, decoding={}, threads={}",
            config.asr.model_dir,
            config.asr.decoding_method,
            config.asr.num_threads
        );
        Ok(config)
    }

    /// 保存配置文件
    pub fn save(&self) -> TypeasyResult<()> {
        let config_path = Self::config_path()?;

        // 确保目录存在
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| TypeasyError::ConfigParse {
            path: config_path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(&config_path, content)?;

        tracing::info!("保存配置成功: {:?}", config_path);
        Ok(())
    }

    /// 获取配置文件路径
    fn config_path() -> TypeasyResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| TypeasyError::ConfigNotFound("no user config directory".to_string()))?;

        Ok(config_dir.join("typeasy").join("config.toml"))
    }
}
