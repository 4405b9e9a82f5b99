//! reqwest 实现的后端客户端

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::{Host, Url};

use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;
use crate::traits::{AuthApi, BanApi, CredentialProvider, ServiceApi};
use crate::types::{
    BannedList, ChangePasswordRequest, ChangeUsernameRequest, ClientConfig, InstallRequest, Jail,
    LoginResponse, LogsResponse, MessageResponse, ServiceStatus,
};

const JAIL_CONFIG_FILE: &str = "local";

/// 后端 HTTP 客户端
///
/// 实现 [`BanApi`]、[`ServiceApi`] 与 [`AuthApi`]。
/// 只读请求按 `max_retries` 重试，修改类请求只发送一次。
pub struct HttpBanClient {
    client: Client,
    base_url: String,
    max_retries: u32,
    credentials: Option<Arc<dyn CredentialProvider>>,
}

impl HttpBanClient {
    /// 根据配置创建客户端
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().timeout(config.timeout);
        // 本机守护进程不走系统代理
        if is_loopback(&config.base_url) {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::NetworkError {
                detail: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_retries: config.max_retries,
            credentials: None,
        })
    }

    /// 注入凭证来源
    #[must_use]
    pub fn with_credentials(mut self, credentials: Arc<dyn CredentialProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// 后端地址
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// 附加 Authorization 头；`required` 时缺少 token 直接报错
    async fn authorize(&self, request: RequestBuilder, required: bool) -> Result<RequestBuilder> {
        let token = match &self.credentials {
            Some(provider) => provider.access_token().await,
            None => None,
        };

        match token {
            Some(token) => Ok(request.bearer_auth(token)),
            None if required => Err(ApiError::CredentialError {
                detail: "not logged in".to_string(),
            }),
            None => Ok(request),
        }
    }

    /// 发送只读请求（可重试），返回响应文本
    async fn read(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let request = self.client.get(self.url(path)).query(query);
        let request = self.authorize(request, false).await?;

        let (status, text) =
            HttpUtils::execute_request_with_retry(request, "GET", path, self.max_retries).await?;
        HttpUtils::ensure_success(status, &text)?;
        Ok(text)
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let text = self.read(path, query).await?;
        HttpUtils::parse_json(&text)
    }

    /// 发送修改类请求（不重试），返回响应文本
    async fn write(
        &self,
        request: RequestBuilder,
        method: &str,
        path: &str,
        auth_required: bool,
    ) -> Result<String> {
        let request = self.authorize(request, auth_required).await?;
        let (status, text) = HttpUtils::execute_request(request, method, path).await?;
        HttpUtils::ensure_success(status, &text)?;
        Ok(text)
    }

    async fn post_for_message(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let request = self.client.post(self.url(path)).query(query);
        let text = self.write(request, "POST", path, false).await?;
        let body: MessageResponse = HttpUtils::parse_json(&text)?;
        Ok(body.message)
    }
}

fn is_loopback(base_url: &str) -> bool {
    let Ok(url) = Url::parse(base_url) else {
        return false;
    };
    match url.host() {
        Some(Host::Ipv4(ip)) => ip.is_loopback(),
        Some(Host::Ipv6(ip)) => ip.is_loopback(),
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        None => false,
    }
}

/// 校验非空参数
fn require_non_empty(param: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidParameter {
            param: param.to_string(),
            detail: "must not be empty".to_string(),
        });
    }
    Ok(())
}

fn member_query(ip: &str, jail: Jail) -> [(&'static str, String); 2] {
    [("ip", ip.trim().to_string()), ("jail", jail.as_str().to_string())]
}

#[async_trait]
impl BanApi for HttpBanClient {
    async fn list_banned(&self) -> Result<Vec<String>> {
        let list: BannedList = self.read_json("/fail2ban/list", &[]).await?;
        Ok(list.banned_ips)
    }

    async fn ban(&self, ip: &str, jail: Jail) -> Result<String> {
        require_non_empty("ip", ip)?;
        self.post_for_message("/fail2ban/ban", &member_query(ip, jail))
            .await
    }

    async fn unban(&self, ip: &str, jail: Jail) -> Result<String> {
        require_non_empty("ip", ip)?;
        self.post_for_message("/fail2ban/unban", &member_query(ip, jail))
            .await
    }
}

#[async_trait]
impl ServiceApi for HttpBanClient {
    async fn status(&self) -> Result<ServiceStatus> {
        self.read_json("/fail2ban/statusplease", &[]).await
    }

    async fn restart(&self) -> Result<String> {
        self.post_for_message("/fail2ban/restart", &[]).await
    }

    async fn reload(&self) -> Result<String> {
        self.post_for_message("/fail2ban/reload", &[]).await
    }

    async fn view_logs(&self, lines: u32) -> Result<Option<String>> {
        let body: LogsResponse = self
            .read_json("/fail2ban/viewlogs", &[("lines", lines.to_string())])
            .await?;
        Ok(body.logs)
    }

    async fn search_logs(&self, query: &str) -> Result<Option<String>> {
        let body: LogsResponse = self
            .read_json("/fail2ban/search", &[("query", query.to_string())])
            .await?;
        Ok(body.logs)
    }

    async fn view_jail_config(&self) -> Result<String> {
        self.read(
            "/fail2ban/view-jail-config",
            &[("file", JAIL_CONFIG_FILE.to_string())],
        )
        .await
    }

    async fn edit_jail_config(&self, content: &str) -> Result<()> {
        let path = "/fail2ban/edit-jail-config";
        let request = self
            .client
            .put(self.url(path))
            .query(&[("file", JAIL_CONFIG_FILE)])
            .header(reqwest::header::CONTENT_TYPE, "text/plain")
            .body(content.to_string());
        self.write(request, "PUT", path, false).await?;
        Ok(())
    }

    async fn install(&self, sudo_password: &str) -> Result<String> {
        require_non_empty("sudoPassword", sudo_password)?;
        let path = "/fail2ban/install";
        let request = self
            .client
            .post(self.url(path))
            .json(&InstallRequest { sudo_password });
        let text = self.write(request, "POST", path, false).await?;
        let body: MessageResponse = HttpUtils::parse_json(&text)?;
        Ok(body.message)
    }
}

#[async_trait]
impl AuthApi for HttpBanClient {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        require_non_empty("username", username)?;
        let path = "/auth/login";
        let request = self
            .client
            .post(self.url(path))
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[("username", username), ("password", password)]);

        // 登录本身不需要也不应携带旧 token
        let (status, text) = HttpUtils::execute_request(request, "POST", path).await?;
        HttpUtils::ensure_success(status, &text)?;
        HttpUtils::parse_json(&text)
    }

    async fn change_password(&self, current_password: &str, new_password: &str) -> Result<()> {
        require_non_empty("new_password", new_password)?;
        let path = "/auth/change-password";
        let request = self.client.post(self.url(path)).json(&ChangePasswordRequest {
            current_password,
            new_password,
        });
        self.write(request, "POST", path, true).await?;
        Ok(())
    }

    async fn change_username(&self, new_username: &str) -> Result<()> {
        require_non_empty("new_username", new_username)?;
        let path = "/auth/change-username";
        let request = self
            .client
            .post(self.url(path))
            .json(&ChangeUsernameRequest { new_username });
        self.write(request, "POST", path, true).await?;
        Ok(())
    }
}
