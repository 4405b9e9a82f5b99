//! 核心服务
//!
//! 封装 banwarden-core 的各种服务，
//! 提供给 TUI 层使用的统一接口

use std::sync::Arc;

use banwarden_client::HttpBanClient;
use banwarden_core::services::{
    AccountService, BanListService, ConfigFileService, LogService, ServiceContext,
    SessionService, StatusService,
};
use banwarden_core::{CoreResult, StoredCredentials, TokenStore};

use super::config_service::AppConfig;
use super::credential_service::KeyringTokenStore;

/// TUI 核心服务
///
/// 持有服务上下文，按需创建各业务服务
pub struct CoreService {
    ctx: Arc<ServiceContext>,
}

impl CoreService {
    /// 根据配置创建核心服务实例
    pub fn new(config: &AppConfig) -> CoreResult<Self> {
        let token_store: Arc<dyn TokenStore> = Arc::new(KeyringTokenStore::new());
        Self::with_token_store(config, token_store)
    }

    /// 使用指定的 token 存储
    pub fn with_token_store(
        config: &AppConfig,
        token_store: Arc<dyn TokenStore>,
    ) -> CoreResult<Self> {
        // 1. HTTP 客户端，bearer token 从 token 存储读取
        let credentials = Arc::new(StoredCredentials::new(token_store.clone()));
        let client =
            Arc::new(HttpBanClient::new(config.client_config())?.with_credentials(credentials));

        log::info!("Backend endpoint: {}", client.base_url());

        // 2. 同一个客户端实现全部三个接口
        let ctx = Arc::new(ServiceContext::new(
            client.clone(),
            client.clone(),
            client,
            token_store,
        ));

        Ok(Self { ctx })
    }

    // ========== 会话 ==========

    pub fn session(&self) -> SessionService {
        SessionService::new(self.ctx.clone())
    }

    // ========== 封禁列表 ==========

    pub fn ban_list(&self) -> BanListService {
        BanListService::new(self.ctx.clone())
    }

    // ========== 服务管理 ==========

    pub fn status(&self) -> StatusService {
        StatusService::new(self.ctx.clone())
    }

    pub fn logs(&self) -> LogService {
        LogService::new(self.ctx.clone())
    }

    pub fn jail_config(&self) -> ConfigFileService {
        ConfigFileService::new(self.ctx.clone())
    }

    // ========== 账号 ==========

    pub fn account(&self) -> AccountService {
        AccountService::new(self.ctx.clone())
    }
}
