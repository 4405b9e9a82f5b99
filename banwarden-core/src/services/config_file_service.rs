//! `jail.local` 读取与保存

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;

/// jail 配置文件服务
pub struct ConfigFileService {
    ctx: Arc<ServiceContext>,
}

impl ConfigFileService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 读取配置文本
    pub async fn load(&self) -> CoreResult<String> {
        self.ctx
            .service_api
            .view_jail_config()
            .await
            .map_err(|e| ServiceContext::log_failure("Load jail config", e.into()))
    }

    /// 覆盖写入配置文本
    pub async fn save(&self, content: &str) -> CoreResult<()> {
        self.ctx
            .service_api
            .edit_jail_config(content)
            .await
            .map_err(|e| ServiceContext::log_failure("Save jail config", e.into()))?;
        log::info!("Saved jail.local ({} bytes)", content.len());
        Ok(())
    }
}
