//! 配置服务
//!
//! 配置文件位置：`<config dir>/banwarden/config.json`，
//! 文件不存在时使用默认值；`BANWARDEN_URL` 环境变量覆盖 `base_url`。

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use banwarden_client::{ClientConfig, DEFAULT_BASE_URL, LOG_LINE_CHOICES};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 覆盖后端地址的环境变量
pub const URL_ENV_VAR: &str = "BANWARDEN_URL";

/// 获取配置目录路径
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("banwarden")
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 后端地址
    pub base_url: String,
    /// 封禁列表每页条数
    pub page_size: usize,
    /// 单个请求超时（秒）
    pub timeout_secs: u64,
    pub theme: Theme,
    /// 语言代码（BCP 47）
    pub language: String,
    /// 日志页默认行数
    pub log_lines: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: 5,
            timeout_secs: 10,
            theme: Theme::Dark,
            language: "en-US".to_string(),
            log_lines: LOG_LINE_CHOICES[0],
        }
    }
}

impl AppConfig {
    /// 校验取值范围
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("page_size must be a positive integer");
        }
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be a positive integer");
        }
        if !LOG_LINE_CHOICES.contains(&self.log_lines) {
            bail!(
                "log_lines must be one of {:?}, got {}",
                LOG_LINE_CHOICES,
                self.log_lines
            );
        }
        if self.base_url.trim().is_empty() {
            bail!("base_url must not be empty");
        }
        Ok(())
    }

    /// 用环境变量的值覆盖后端地址（空值忽略）
    #[must_use]
    pub fn with_url_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        self
    }

    pub fn page_size(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.page_size).unwrap_or(banwarden_core::DEFAULT_PAGE_SIZE)
    }

    /// 转换为 HTTP 客户端配置
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..ClientConfig::default()
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 基于 JSON 文件的配置服务
pub struct JsonConfigService {
    path: PathBuf,
}

impl JsonConfigService {
    pub fn new() -> Self {
        Self::at(config_dir().join("config.json"))
    }

    /// 使用指定的文件路径
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for JsonConfigService {
    fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", self.path.display()))?;
        config.validate()?;

        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        Ok(())
    }
}
