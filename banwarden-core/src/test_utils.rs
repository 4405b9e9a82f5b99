//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::Arc;

use async_trait::async_trait;
use banwarden_client::{
    ApiError, AuthApi, BanApi, Jail, LoginResponse, Result as ApiResult, ServiceApi,
    ServiceStatus, RUNNING_STATUS,
};
use tokio::sync::RwLock;

use crate::error::CoreResult;
use crate::services::ServiceContext;
use crate::traits::TokenStore;

/// `10.0.0.1` .. `10.0.0.n`
pub fn ips(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("10.0.0.{i}")).collect()
}

// ===== MockBanApi =====

#[derive(Default)]
pub struct MockBanApi {
    banned: RwLock<Vec<String>>,
    list_calls: RwLock<usize>,
    mutations: RwLock<Vec<(String, String, Jail)>>,
    /// 如果 Some，list_banned 返回此错误
    list_error: RwLock<Option<ApiError>>,
    /// 如果 Some，ban/unban 返回此错误
    mutation_error: RwLock<Option<ApiError>>,
}

impl MockBanApi {
    pub async fn set_banned(&self, ips: Vec<String>) {
        *self.banned.write().await = ips;
    }

    pub async fn fail_list_with(&self, err: Option<ApiError>) {
        *self.list_error.write().await = err;
    }

    pub async fn fail_mutations_with(&self, err: Option<ApiError>) {
        *self.mutation_error.write().await = err;
    }

    pub async fn list_calls(&self) -> usize {
        *self.list_calls.read().await
    }

    pub async fn mutations(&self) -> Vec<(String, String, Jail)> {
        self.mutations.read().await.clone()
    }
}

#[async_trait]
impl BanApi for MockBanApi {
    async fn list_banned(&self) -> ApiResult<Vec<String>> {
        *self.list_calls.write().await += 1;
        if let Some(err) = self.list_error.read().await.clone() {
            return Err(err);
        }
        Ok(self.banned.read().await.clone())
    }

    async fn ban(&self, ip: &str, jail: Jail) -> ApiResult<String> {
        if let Some(err) = self.mutation_error.read().await.clone() {
            return Err(err);
        }
        self.mutations
            .write()
            .await
            .push(("ban".to_string(), ip.to_string(), jail));
        let mut banned = self.banned.write().await;
        if !banned.iter().any(|b| b == ip) {
            banned.push(ip.to_string());
        }
        Ok(format!("IP {ip} has been banned in jail {jail}"))
    }

    async fn unban(&self, ip: &str, jail: Jail) -> ApiResult<String> {
        if let Some(err) = self.mutation_error.read().await.clone() {
            return Err(err);
        }
        self.mutations
            .write()
            .await
            .push(("unban".to_string(), ip.to_string(), jail));
        let mut banned = self.banned.write().await;
        let Some(pos) = banned.iter().position(|b| b == ip) else {
            return Err(ApiError::HttpStatus {
                status: 400,
                detail: Some("IP is not banned".to_string()),
            });
        };
        banned.remove(pos);
        Ok(format!("IP {ip} has been unbanned from jail {jail}"))
    }
}

// ===== MockServiceApi =====

pub struct MockServiceApi {
    running: RwLock<bool>,
    logs: RwLock<String>,
    jail_config: RwLock<String>,
    install_calls: RwLock<usize>,
    /// 如果 Some，所有调用返回此错误
    error: RwLock<Option<ApiError>>,
}

impl Default for MockServiceApi {
    fn default() -> Self {
        Self {
            running: RwLock::new(true),
            logs: RwLock::new(String::new()),
            jail_config: RwLock::new(String::new()),
            install_calls: RwLock::new(0),
            error: RwLock::new(None),
        }
    }
}

impl MockServiceApi {
    pub async fn set_running(&self, running: bool) {
        *self.running.write().await = running;
    }

    pub async fn set_logs(&self, logs: &str) {
        *self.logs.write().await = logs.to_string();
    }

    pub async fn fail_with(&self, err: Option<ApiError>) {
        *self.error.write().await = err;
    }

    pub async fn install_calls(&self) -> usize {
        *self.install_calls.read().await
    }

    async fn check(&self) -> ApiResult<()> {
        match self.error.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ServiceApi for MockServiceApi {
    async fn status(&self) -> ApiResult<ServiceStatus> {
        self.check().await?;
        let status = if *self.running.read().await {
            RUNNING_STATUS
        } else {
            "Fail2Ban is not running"
        };
        Ok(ServiceStatus {
            status: status.to_string(),
            details: String::new(),
        })
    }

    async fn restart(&self) -> ApiResult<String> {
        self.check().await?;
        *self.running.write().await = true;
        Ok("Fail2Ban restarted successfully".to_string())
    }

    async fn reload(&self) -> ApiResult<String> {
        self.check().await?;
        Ok("Fail2Ban configuration reloaded successfully".to_string())
    }

    async fn view_logs(&self, lines: u32) -> ApiResult<Option<String>> {
        self.check().await?;
        let logs = self.logs.read().await;
        let all: Vec<&str> = logs.lines().collect();
        let start = all.len().saturating_sub(lines as usize);
        Ok(Some(all[start..].join("\n")))
    }

    async fn search_logs(&self, query: &str) -> ApiResult<Option<String>> {
        self.check().await?;
        let hits: Vec<String> = self
            .logs
            .read()
            .await
            .lines()
            .filter(|l| l.contains(query))
            .map(str::to_string)
            .collect();
        Ok((!hits.is_empty()).then(|| hits.join("\n")))
    }

    async fn view_jail_config(&self) -> ApiResult<String> {
        self.check().await?;
        Ok(self.jail_config.read().await.clone())
    }

    async fn edit_jail_config(&self, content: &str) -> ApiResult<()> {
        self.check().await?;
        *self.jail_config.write().await = content.to_string();
        Ok(())
    }

    async fn install(&self, _sudo_password: &str) -> ApiResult<String> {
        self.check().await?;
        *self.install_calls.write().await += 1;
        Ok("Fail2Ban installed successfully".to_string())
    }
}

// ===== MockAuthApi =====

#[derive(Default)]
pub struct MockAuthApi {
    token: RwLock<String>,
    calls: RwLock<Vec<String>>,
    /// 如果 Some，所有调用返回此错误
    error: RwLock<Option<ApiError>>,
}

impl MockAuthApi {
    pub async fn set_token(&self, token: &str) {
        *self.token.write().await = token.to_string();
    }

    pub async fn fail_with(&self, err: Option<ApiError>) {
        *self.error.write().await = err;
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    async fn record(&self, call: String) -> ApiResult<()> {
        if let Some(err) = self.error.read().await.clone() {
            return Err(err);
        }
        self.calls.write().await.push(call);
        Ok(())
    }
}

#[async_trait]
impl AuthApi for MockAuthApi {
    async fn login(&self, username: &str, _password: &str) -> ApiResult<LoginResponse> {
        self.record(format!("login:{username}")).await?;
        Ok(LoginResponse {
            access_token: self.token.read().await.clone(),
            token_type: Some("bearer".to_string()),
        })
    }

    async fn change_password(&self, _current_password: &str, _new_password: &str) -> ApiResult<()> {
        self.record("change_password".to_string()).await
    }

    async fn change_username(&self, new_username: &str) -> ApiResult<()> {
        self.record(format!("change_username:{new_username}")).await
    }
}

// ===== InMemoryTokenStore =====

#[derive(Default)]
pub struct InMemoryTokenStore {
    token: RwLock<Option<String>>,
}

#[async_trait]
impl TokenStore for InMemoryTokenStore {
    async fn get(&self) -> CoreResult<Option<String>> {
        Ok(self.token.read().await.clone())
    }

    async fn set(&self, token: &str) -> CoreResult<()> {
        *self.token.write().await = Some(token.to_string());
        Ok(())
    }

    async fn remove(&self) -> CoreResult<()> {
        *self.token.write().await = None;
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 所有 mock 的句柄，用于在测试中预置数据和检查调用
pub struct Mocks {
    pub ban_api: Arc<MockBanApi>,
    pub service_api: Arc<MockServiceApi>,
    pub auth_api: Arc<MockAuthApi>,
    pub token_store: Arc<InMemoryTokenStore>,
}

/// 创建由 mock 组成的 `ServiceContext`
pub fn mock_context() -> (Arc<ServiceContext>, Mocks) {
    let mocks = Mocks {
        ban_api: Arc::new(MockBanApi::default()),
        service_api: Arc::new(MockServiceApi::default()),
        auth_api: Arc::new(MockAuthApi::default()),
        token_store: Arc::new(InMemoryTokenStore::default()),
    };
    let ctx = Arc::new(ServiceContext::new(
        mocks.ban_api.clone(),
        mocks.service_api.clone(),
        mocks.auth_api.clone(),
        mocks.token_store.clone(),
    ));
    (ctx, mocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::StoredCredentials;
    use banwarden_client::CredentialProvider;

    #[tokio::test]
    async fn stored_credentials_read_through_token_store() {
        let (_, mocks) = mock_context();
        let provider = StoredCredentials::new(mocks.token_store.clone());
        assert_eq!(provider.access_token().await, None);

        mocks.token_store.set("abc").await.unwrap();
        assert_eq!(provider.access_token().await, Some("abc".to_string()));
    }
}
