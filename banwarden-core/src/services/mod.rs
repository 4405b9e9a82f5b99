//! 业务逻辑服务层

mod account_service;
mod ban_list_service;
mod config_file_service;
mod log_service;
mod session_service;
mod status_service;

pub use account_service::AccountService;
pub use ban_list_service::BanListService;
pub use config_file_service::ConfigFileService;
pub use log_service::{LogService, NO_MATCHING_LOGS};
pub use session_service::SessionService;
pub use status_service::StatusService;

use std::sync::Arc;

use banwarden_client::{AuthApi, BanApi, ServiceApi};

use crate::error::CoreError;
use crate::traits::TokenStore;

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入后端客户端与 token 存储实现。
pub struct ServiceContext {
    /// 封禁列表接口
    pub ban_api: Arc<dyn BanApi>,
    /// 服务管理接口
    pub service_api: Arc<dyn ServiceApi>,
    /// 认证接口
    pub auth_api: Arc<dyn AuthApi>,
    /// 会话 token 存储
    pub token_store: Arc<dyn TokenStore>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        ban_api: Arc<dyn BanApi>,
        service_api: Arc<dyn ServiceApi>,
        auth_api: Arc<dyn AuthApi>,
        token_store: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            ban_api,
            service_api,
            auth_api,
            token_store,
        }
    }

    /// 按预期程度分级记录错误后原样返回
    pub(crate) fn log_failure(operation: &str, err: CoreError) -> CoreError {
        if err.is_expected() {
            log::warn!("{operation} rejected: {err}");
        } else {
            log::error!("{operation} failed: {err}");
        }
        err
    }
}
