//! 会话服务：登录、当前用户、登出

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::Session;
use crate::utils::jwt;

/// 会话服务
pub struct SessionService {
    ctx: Arc<ServiceContext>,
}

impl SessionService {
    /// 创建会话服务实例
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 登录并保存 token
    pub async fn login(&self, username: &str, password: &str) -> CoreResult<Session> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(CoreError::ValidationError(
                "Username and password are required".to_string(),
            ));
        }

        let response = self
            .ctx
            .auth_api
            .login(username, password)
            .await
            .map_err(|e| ServiceContext::log_failure("Login", e.into()))?;

        let claims = jwt::decode_claims(&response.access_token)?;
        self.ctx.token_store.set(&response.access_token).await?;

        log::info!("Logged in as {}", claims.sub);
        Ok(Session {
            username: claims.sub,
        })
    }

    /// 读取当前会话
    ///
    /// 没有 token、token 无法解码或已过期都返回错误，调用方应显示登录页。
    pub async fn current_user(&self) -> CoreResult<Session> {
        let token = self
            .ctx
            .token_store
            .get()
            .await?
            .ok_or(CoreError::NotLoggedIn)?;

        let claims = jwt::decode_claims(&token)?;
        if jwt::is_expired(&claims, unix_now()) {
            return Err(CoreError::InvalidToken("session expired".to_string()));
        }

        Ok(Session {
            username: claims.sub,
        })
    }

    /// 登出
    pub async fn logout(&self) -> CoreResult<()> {
        self.ctx.token_store.remove().await?;
        log::info!("Logged out");
        Ok(())
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}
