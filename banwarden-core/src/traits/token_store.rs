//! 会话 token 存储抽象 Trait

use std::sync::Arc;

use async_trait::async_trait;
use banwarden_client::CredentialProvider;

use crate::error::CoreResult;

/// 会话 token 存储 Trait
///
/// 平台实现:
/// - TUI: `KeyringTokenStore` (keyring crate)
/// - 测试: `InMemoryTokenStore`
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// 读取 token
    ///
    /// # Returns
    /// * `Ok(Some(token))` - 已登录
    /// * `Ok(None)` - 未保存 token
    async fn get(&self) -> CoreResult<Option<String>>;

    /// 保存 token（覆盖旧值）
    async fn set(&self, token: &str) -> CoreResult<()>;

    /// 删除 token；不存在时视为成功
    async fn remove(&self) -> CoreResult<()>;
}

/// 把 [`TokenStore`] 适配为客户端的 [`CredentialProvider`]
///
/// 读取失败时按未登录处理，错误只记录日志。
pub struct StoredCredentials {
    store: Arc<dyn TokenStore>,
}

impl StoredCredentials {
    #[must_use]
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CredentialProvider for StoredCredentials {
    async fn access_token(&self) -> Option<String> {
        match self.store.get().await {
            Ok(token) => token,
            Err(e) => {
                log::error!("Failed to read session token: {e}");
                None
            }
        }
    }
}
