//! HttpBanClient 集成测试（本地 axum 模拟守护进程）
//!
//! 运行方式:
//! ```bash
//! cargo test -p banwarden-client --test http_client_test
//! ```

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use banwarden_client::{
    ApiError, AuthApi, BanApi, ClientConfig, CredentialProvider, HttpBanClient, Jail, ServiceApi,
};
use common::{FakeDaemon, PASSWORD, TOKEN, USERNAME, client_for, spawn_daemon};

struct StaticToken(Option<String>);

#[async_trait]
impl CredentialProvider for StaticToken {
    async fn access_token(&self) -> Option<String> {
        self.0.clone()
    }
}

fn authed_client(base_url: &str) -> HttpBanClient {
    client_for(base_url).with_credentials(Arc::new(StaticToken(Some(TOKEN.to_string()))))
}

// ============ BanApi ============

#[tokio::test]
async fn test_list_banned_returns_full_collection() {
    let daemon = FakeDaemon::with_banned(&["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
    let url = spawn_daemon(daemon).await;

    let ips = client_for(&url).list_banned().await.expect("list_banned");
    assert_eq!(ips, vec!["10.0.0.1", "10.0.0.2", "10.0.0.3"]);
}

#[tokio::test]
async fn test_ban_then_list_contains_ip() {
    let daemon = FakeDaemon::with_banned(&[]);
    let url = spawn_daemon(daemon.clone()).await;
    let client = client_for(&url);

    let message = client
        .ban("203.0.113.7", Jail::NginxHttpAuth)
        .await
        .expect("ban");
    assert_eq!(
        message,
        "IP 203.0.113.7 has been banned in jail nginx-http-auth"
    );

    let ips = client.list_banned().await.expect("list_banned");
    assert_eq!(ips, vec!["203.0.113.7"]);
}

#[tokio::test]
async fn test_unban_unknown_ip_surfaces_detail() {
    let daemon = FakeDaemon::with_banned(&["10.0.0.1"]);
    let url = spawn_daemon(daemon.clone()).await;

    let err = client_for(&url)
        .unban("10.9.9.9", Jail::Ssh)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::HttpStatus {
            status: 400,
            detail: Some("IP is not banned".to_string())
        }
    );
    assert_eq!(daemon.banned.lock().await.len(), 1);
}

#[tokio::test]
async fn test_bearer_token_is_attached_when_available() {
    let daemon = FakeDaemon::with_banned(&[]);
    let url = spawn_daemon(daemon.clone()).await;

    authed_client(&url).list_banned().await.expect("authed");
    client_for(&url).list_banned().await.expect("anonymous");

    let headers = daemon.auth_headers.lock().await.clone();
    assert_eq!(
        headers,
        vec![Some(format!("Bearer {TOKEN}")), None],
        "only the client with credentials sends Authorization"
    );
}

#[tokio::test]
async fn test_list_is_retried_on_gateway_error() {
    let daemon = FakeDaemon::with_banned(&["10.0.0.1"]);
    *daemon.list_failures.lock().await = 1;
    let url = spawn_daemon(daemon.clone()).await;

    let ips = client_for(&url).list_banned().await.expect("retry succeeds");
    assert_eq!(ips, vec!["10.0.0.1"]);
    assert_eq!(*daemon.list_calls.lock().await, 2);
}

#[tokio::test]
async fn test_list_without_retries_fails_fast() {
    let daemon = FakeDaemon::with_banned(&["10.0.0.1"]);
    *daemon.list_failures.lock().await = 1;
    let url = spawn_daemon(daemon.clone()).await;

    let config = ClientConfig {
        max_retries: 0,
        ..ClientConfig::with_base_url(&url)
    };
    let client = HttpBanClient::new(config).expect("build client");
    let err = client.list_banned().await.unwrap_err();
    assert!(matches!(err, ApiError::NetworkError { .. }), "{err:?}");
    assert_eq!(*daemon.list_calls.lock().await, 1);
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    // 端口 9 (discard) 在测试环境中通常没有监听
    let config = ClientConfig {
        max_retries: 0,
        ..ClientConfig::with_base_url("http://127.0.0.1:9")
    };
    let client = HttpBanClient::new(config).expect("build client");
    let err = client.ban("10.0.0.1", Jail::Ssh).await.unwrap_err();
    assert!(
        matches!(err, ApiError::NetworkError { .. } | ApiError::Timeout { .. }),
        "{err:?}"
    );
}

// ============ ServiceApi ============

#[tokio::test]
async fn test_status_running() {
    let url = spawn_daemon(FakeDaemon::with_banned(&[])).await;

    let status = client_for(&url).status().await.expect("status");
    assert!(status.is_running());
    assert!(status.details.contains("Jail list"));
}

#[tokio::test]
async fn test_restart_brings_service_up() {
    let daemon = FakeDaemon::with_banned(&[]);
    *daemon.running.lock().await = false;
    let url = spawn_daemon(daemon).await;
    let client = client_for(&url);

    assert!(!client.status().await.expect("status").is_running());
    let message = client.restart().await.expect("restart");
    assert_eq!(message, "Fail2Ban restarted successfully");
    assert!(client.status().await.expect("status").is_running());
}

#[tokio::test]
async fn test_view_logs_honours_line_count() {
    let daemon = FakeDaemon::with_banned(&[]);
    *daemon.logs.lock().await = (1..=10)
        .map(|i| format!("line {i}"))
        .collect::<Vec<_>>()
        .join("\n");
    let url = spawn_daemon(daemon).await;

    let logs = client_for(&url).view_logs(3).await.expect("view_logs");
    assert_eq!(logs.as_deref(), Some("line 8\nline 9\nline 10"));
}

#[tokio::test]
async fn test_search_logs_without_hits_is_none() {
    let daemon = FakeDaemon::with_banned(&[]);
    *daemon.logs.lock().await = "NOTICE [sshd] Ban 10.0.0.1".to_string();
    let url = spawn_daemon(daemon).await;
    let client = client_for(&url);

    let hit = client.search_logs("10.0.0.1").await.expect("search");
    assert_eq!(hit.as_deref(), Some("NOTICE [sshd] Ban 10.0.0.1"));

    let miss = client.search_logs("192.168.1.1").await.expect("search");
    assert_eq!(miss, None);
}

#[tokio::test]
async fn test_jail_config_round_trip_as_plain_text() {
    let daemon = FakeDaemon::with_banned(&[]);
    *daemon.jail_config.lock().await = "[sshd]\nenabled = true\n".to_string();
    let url = spawn_daemon(daemon.clone()).await;
    let client = client_for(&url);

    let before = client.view_jail_config().await.expect("view");
    assert_eq!(before, "[sshd]\nenabled = true\n");

    let edited = "[sshd]\nenabled = true\nmaxretry = 3\n";
    client.edit_jail_config(edited).await.expect("edit");
    assert_eq!(*daemon.jail_config.lock().await, edited);
}

#[tokio::test]
async fn test_install_sends_sudo_password() {
    let daemon = FakeDaemon::with_banned(&[]);
    let url = spawn_daemon(daemon.clone()).await;

    let message = client_for(&url).install("hunter2").await.expect("install");
    assert_eq!(message, "Fail2Ban installed successfully");
    assert_eq!(*daemon.install_passwords.lock().await, vec!["hunter2"]);
}

// ============ AuthApi ============

#[tokio::test]
async fn test_login_returns_token() {
    let url = spawn_daemon(FakeDaemon::with_banned(&[])).await;

    let response = client_for(&url)
        .login(USERNAME, PASSWORD)
        .await
        .expect("login");
    assert_eq!(response.access_token, TOKEN);
    assert_eq!(response.token_type.as_deref(), Some("bearer"));
}

#[tokio::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let url = spawn_daemon(FakeDaemon::with_banned(&[])).await;

    let err = client_for(&url)
        .login(USERNAME, "wrong")
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ApiError::Unauthorized {
            detail: Some("Incorrect username or password".to_string())
        }
    );
}

#[tokio::test]
async fn test_change_username_with_token() {
    let daemon = FakeDaemon::with_banned(&[]);
    let url = spawn_daemon(daemon.clone()).await;

    authed_client(&url)
        .change_username("operator")
        .await
        .expect("change_username");
    assert_eq!(*daemon.username.lock().await, "operator");
}

#[tokio::test]
async fn test_change_password_with_stale_token_is_unauthorized() {
    let url = spawn_daemon(FakeDaemon::with_banned(&[])).await;
    let client = client_for(&url).with_credentials(Arc::new(StaticToken(Some(
        "expired".to_string(),
    ))));

    let err = client
        .change_password(PASSWORD, "new-secret")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { .. }), "{err:?}");
}

#[tokio::test]
async fn test_change_password_rejects_wrong_current_password() {
    let url = spawn_daemon(FakeDaemon::with_banned(&[])).await;

    let err = authed_client(&url)
        .change_password("nope", "new-secret")
        .await
        .unwrap_err();
    assert_eq!(err.detail(), Some("Incorrect current password"));
}
