//! 账号设置与安装

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;

/// 账号服务
///
/// 修改密码/用户名需要已登录（bearer token 由客户端从 token 存储读取）。
pub struct AccountService {
    ctx: Arc<ServiceContext>,
}

impl AccountService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 修改密码
    pub async fn change_password(&self, current: &str, new: &str) -> CoreResult<()> {
        if current.is_empty() || new.is_empty() {
            return Err(CoreError::ValidationError(
                "Both current and new password are required".to_string(),
            ));
        }
        self.ensure_logged_in().await?;

        self.ctx
            .auth_api
            .change_password(current, new)
            .await
            .map_err(|e| ServiceContext::log_failure("Change password", e.into()))?;
        log::info!("Password changed");
        Ok(())
    }

    /// 修改用户名
    ///
    /// 后端签发的旧 token 仍以旧用户名为 `sub`，调用方应随后要求重新登录。
    pub async fn change_username(&self, new_username: &str) -> CoreResult<()> {
        let new_username = new_username.trim();
        if new_username.is_empty() {
            return Err(CoreError::ValidationError(
                "New username is required".to_string(),
            ));
        }
        self.ensure_logged_in().await?;

        self.ctx
            .auth_api
            .change_username(new_username)
            .await
            .map_err(|e| ServiceContext::log_failure("Change username", e.into()))?;
        log::info!("Username changed to {new_username}");
        Ok(())
    }

    /// 安装 Fail2Ban，返回后端消息
    pub async fn install(&self, sudo_password: &str) -> CoreResult<String> {
        if sudo_password.is_empty() {
            return Err(CoreError::ValidationError(
                "Sudo password is required".to_string(),
            ));
        }

        let message = self
            .ctx
            .service_api
            .install(sudo_password)
            .await
            .map_err(|e| ServiceContext::log_failure("Install", e.into()))?;
        log::info!("Install finished: {message}");
        Ok(message)
    }

    async fn ensure_logged_in(&self) -> CoreResult<()> {
        match self.ctx.token_store.get().await? {
            Some(_) => Ok(()),
            None => Err(CoreError::NotLoggedIn),
        }
    }
}
