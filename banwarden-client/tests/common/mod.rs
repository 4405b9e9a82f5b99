//! 共享测试工具：本地模拟的 Fail2Ban 管理守护进程

#![allow(dead_code)]

use std::sync::Arc;

use axum::extract::{Form, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use banwarden_client::{ClientConfig, HttpBanClient};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "secret";
pub const TOKEN: &str = "test-token";

const JAILS: [&str; 3] = ["ssh", "http-auth", "nginx-http-auth"];

/// 模拟守护进程的可观察状态
#[derive(Clone, Default)]
pub struct FakeDaemon {
    pub banned: Arc<Mutex<Vec<String>>>,
    pub running: Arc<Mutex<bool>>,
    pub logs: Arc<Mutex<String>>,
    pub jail_config: Arc<Mutex<String>>,
    pub username: Arc<Mutex<String>>,
    /// 接下来的 N 次 `/fail2ban/list` 返回 503
    pub list_failures: Arc<Mutex<u32>>,
    pub list_calls: Arc<Mutex<u32>>,
    pub ban_calls: Arc<Mutex<u32>>,
    /// 每次请求收到的 Authorization 头
    pub auth_headers: Arc<Mutex<Vec<Option<String>>>>,
    pub install_passwords: Arc<Mutex<Vec<String>>>,
}

impl FakeDaemon {
    pub fn with_banned(ips: &[&str]) -> Self {
        let daemon = Self::default();
        *daemon.banned.try_lock().expect("fresh mutex") =
            ips.iter().map(|ip| (*ip).to_string()).collect();
        *daemon.running.try_lock().expect("fresh mutex") = true;
        *daemon.username.try_lock().expect("fresh mutex") = USERNAME.to_string();
        daemon
    }
}

/// 启动模拟服务，返回 base URL 与共享状态
pub async fn spawn_daemon(daemon: FakeDaemon) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");

    let app = Router::new()
        .route("/fail2ban/list", get(list_banned))
        .route("/fail2ban/ban", post(ban))
        .route("/fail2ban/unban", post(unban))
        .route("/fail2ban/statusplease", get(status))
        .route("/fail2ban/restart", post(restart))
        .route("/fail2ban/reload", post(reload))
        .route("/fail2ban/viewlogs", get(view_logs))
        .route("/fail2ban/search", get(search_logs))
        .route("/fail2ban/view-jail-config", get(view_jail_config))
        .route("/fail2ban/edit-jail-config", axum::routing::put(edit_jail_config))
        .route("/fail2ban/install", post(install))
        .route("/auth/login", post(login))
        .route("/auth/change-password", post(change_password))
        .route("/auth/change-username", post(change_username))
        .with_state(daemon);

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

/// 创建指向模拟服务的客户端（默认超时与重试）
pub fn client_for(base_url: &str) -> HttpBanClient {
    HttpBanClient::new(ClientConfig::with_base_url(base_url)).expect("build client")
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

async fn record_auth(state: &FakeDaemon, headers: &HeaderMap) -> Option<String> {
    let header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.auth_headers.lock().await.push(header.clone());
    header
}

async fn require_token(state: &FakeDaemon, headers: &HeaderMap) -> Result<(), Response> {
    match record_auth(state, headers).await {
        Some(h) if h == format!("Bearer {TOKEN}") => Ok(()),
        _ => Err(detail(
            StatusCode::UNAUTHORIZED,
            "Could not validate credentials",
        )),
    }
}

#[derive(Deserialize)]
struct MemberQuery {
    ip: String,
    jail: String,
}

async fn list_banned(State(state): State<FakeDaemon>, headers: HeaderMap) -> Response {
    record_auth(&state, &headers).await;
    *state.list_calls.lock().await += 1;

    let mut failures = state.list_failures.lock().await;
    if *failures > 0 {
        *failures -= 1;
        return (StatusCode::SERVICE_UNAVAILABLE, "upstream down").into_response();
    }
    drop(failures);

    let banned = state.banned.lock().await.clone();
    Json(json!({ "banned_ips": banned })).into_response()
}

async fn ban(State(state): State<FakeDaemon>, Query(q): Query<MemberQuery>) -> Response {
    *state.ban_calls.lock().await += 1;
    if !JAILS.contains(&q.jail.as_str()) {
        return detail(StatusCode::BAD_REQUEST, "Invalid jail");
    }
    let mut banned = state.banned.lock().await;
    if !banned.contains(&q.ip) {
        banned.push(q.ip.clone());
    }
    Json(json!({ "message": format!("IP {} has been banned in jail {}", q.ip, q.jail) }))
        .into_response()
}

async fn unban(State(state): State<FakeDaemon>, Query(q): Query<MemberQuery>) -> Response {
    let mut banned = state.banned.lock().await;
    let Some(pos) = banned.iter().position(|ip| *ip == q.ip) else {
        return detail(StatusCode::BAD_REQUEST, "IP is not banned");
    };
    banned.remove(pos);
    Json(json!({ "message": format!("IP {} has been unbanned from jail {}", q.ip, q.jail) }))
        .into_response()
}

async fn status(State(state): State<FakeDaemon>) -> Response {
    if *state.running.lock().await {
        Json(json!({
            "status": "Fail2Ban is running",
            "details": "Status\n|- Number of jail:\t1\n`- Jail list:\tsshd"
        }))
        .into_response()
    } else {
        Json(json!({ "status": "Fail2Ban is not running", "details": "" })).into_response()
    }
}

async fn restart(State(state): State<FakeDaemon>) -> Response {
    *state.running.lock().await = true;
    Json(json!({ "message": "Fail2Ban restarted successfully" })).into_response()
}

async fn reload() -> Response {
    Json(json!({ "message": "Fail2Ban configuration reloaded successfully" })).into_response()
}

#[derive(Deserialize)]
struct LinesQuery {
    lines: usize,
}

async fn view_logs(State(state): State<FakeDaemon>, Query(q): Query<LinesQuery>) -> Response {
    let logs = state.logs.lock().await.clone();
    let tail: Vec<&str> = logs.lines().rev().take(q.lines).collect();
    let tail: Vec<&str> = tail.into_iter().rev().collect();
    Json(json!({ "logs": tail.join("\n") })).into_response()
}

#[derive(Deserialize)]
struct SearchQuery {
    query: String,
}

async fn search_logs(State(state): State<FakeDaemon>, Query(q): Query<SearchQuery>) -> Response {
    let logs = state.logs.lock().await.clone();
    let hits: Vec<&str> = logs.lines().filter(|l| l.contains(&q.query)).collect();
    if hits.is_empty() {
        Json(json!({ "logs": null })).into_response()
    } else {
        Json(json!({ "logs": hits.join("\n") })).into_response()
    }
}

#[derive(Deserialize)]
struct FileQuery {
    file: String,
}

async fn view_jail_config(State(state): State<FakeDaemon>, Query(q): Query<FileQuery>) -> Response {
    if q.file != "local" {
        return detail(StatusCode::BAD_REQUEST, "Invalid file");
    }
    state.jail_config.lock().await.clone().into_response()
}

async fn edit_jail_config(
    State(state): State<FakeDaemon>,
    Query(q): Query<FileQuery>,
    headers: HeaderMap,
    body: String,
) -> Response {
    if q.file != "local" {
        return detail(StatusCode::BAD_REQUEST, "Invalid file");
    }
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if !content_type.starts_with("text/plain") {
        return detail(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Expected text/plain");
    }
    *state.jail_config.lock().await = body;
    Json(json!({ "message": "Jail configuration updated" })).into_response()
}

#[derive(Deserialize)]
struct InstallBody {
    #[serde(rename = "sudoPassword")]
    sudo_password: String,
}

async fn install(State(state): State<FakeDaemon>, Json(body): Json<InstallBody>) -> Response {
    state.install_passwords.lock().await.push(body.sudo_password);
    Json(json!({ "message": "Fail2Ban installed successfully" })).into_response()
}

#[derive(Deserialize)]
struct LoginForm {
    username: String,
    password: String,
}

async fn login(State(state): State<FakeDaemon>, Form(form): Form<LoginForm>) -> Response {
    let username = state.username.lock().await.clone();
    if form.username != username || form.password != PASSWORD {
        return detail(StatusCode::UNAUTHORIZED, "Incorrect username or password");
    }
    Json(json!({ "access_token": TOKEN, "token_type": "bearer" })).into_response()
}

#[derive(Deserialize)]
struct ChangePasswordBody {
    current_password: String,
    new_password: String,
}

async fn change_password(
    State(state): State<FakeDaemon>,
    headers: HeaderMap,
    Json(body): Json<ChangePasswordBody>,
) -> Response {
    if let Err(resp) = require_token(&state, &headers).await {
        return resp;
    }
    if body.current_password != PASSWORD {
        return detail(StatusCode::BAD_REQUEST, "Incorrect current password");
    }
    let _ = body.new_password;
    Json(json!({ "message": "Password changed successfully" })).into_response()
}

#[derive(Deserialize)]
struct ChangeUsernameBody {
    new_username: String,
}

async fn change_username(
    State(state): State<FakeDaemon>,
    headers: HeaderMap,
    Json(body): Json<ChangeUsernameBody>,
) -> Response {
    if let Err(resp) = require_token(&state, &headers).await {
        return resp;
    }
    *state.username.lock().await = body.new_username;
    Json(json!({ "message": "Username changed successfully" })).into_response()
}
