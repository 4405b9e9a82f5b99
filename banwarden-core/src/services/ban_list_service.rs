//! 封禁列表服务
//!
//! 拉取完整集合、封禁/解封单个地址。成功的修改之后总是从后端重新拉取，
//! 不在本地修补集合。

use std::sync::Arc;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::types::Jail;
use crate::utils::{validate_ip, validate_member};

/// 封禁列表服务
pub struct BanListService {
    ctx: Arc<ServiceContext>,
}

impl BanListService {
    /// 创建封禁列表服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 拉取完整的封禁列表
    pub async fn fetch(&self) -> CoreResult<Vec<String>> {
        let ips = self
            .ctx
            .ban_api
            .list_banned()
            .await
            .map_err(|e| ServiceContext::log_failure("List banned IPs", e.into()))?;
        log::debug!("Fetched {} banned IPs", ips.len());
        Ok(ips)
    }

    /// 封禁地址，返回后端消息
    pub async fn ban(&self, ip: &str, jail: Jail) -> CoreResult<String> {
        let ip = validate_ip(ip)?;
        let message = self
            .ctx
            .ban_api
            .ban(&ip, jail)
            .await
            .map_err(|e| ServiceContext::log_failure("Ban", e.into()))?;
        log::info!("Banned {ip} in jail {jail}");
        Ok(message)
    }

    /// 解封地址，返回后端消息
    ///
    /// 条目由后端列出，原样发回，不做 IP 格式校验。
    pub async fn unban(&self, ip: &str, jail: Jail) -> CoreResult<String> {
        let ip = validate_member(ip)?;
        let message = self
            .ctx
            .ban_api
            .unban(&ip, jail)
            .await
            .map_err(|e| ServiceContext::log_failure("Unban", e.into()))?;
        log::info!("Unbanned {ip} from jail {jail}");
        Ok(message)
    }
}
