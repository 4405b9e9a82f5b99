//! 服务状态：查询、重启、重新加载

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::ServiceStatus;

/// 服务状态服务
pub struct StatusService {
    ctx: Arc<ServiceContext>,
}

impl StatusService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    pub async fn status(&self) -> CoreResult<ServiceStatus> {
        self.ctx
            .service_api
            .status()
            .await
            .map_err(|e| ServiceContext::log_failure("Status", e.into()))
    }

    /// 重启服务，返回后端消息
    pub async fn restart(&self) -> CoreResult<String> {
        let message = self
            .ctx
            .service_api
            .restart()
            .await
            .map_err(|e| ServiceContext::log_failure("Restart", e.into()))?;
        log::info!("Service restarted: {message}");
        Ok(message)
    }

    /// 重新加载配置，返回后端消息
    pub async fn reload(&self) -> CoreResult<String> {
        let message = self
            .ctx
            .service_api
            .reload()
            .await
            .map_err(|e| ServiceContext::log_failure("Reload", e.into()))?;
        log::info!("Service reloaded: {message}");
        Ok(message)
    }
}
