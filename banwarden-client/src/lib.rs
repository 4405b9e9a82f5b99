//! # banwarden-client
//!
//! Typed async client for the local Fail2Ban management daemon
//! (default `http://127.0.0.1:31948`).
//!
//! ## Endpoints
//!
//! | Trait | Operation | Endpoint |
//! |-------|-----------|----------|
//! | [`BanApi`] | `list_banned` | `GET /fail2ban/list` |
//! | [`BanApi`] | `ban` / `unban` | `POST /fail2ban/ban`, `POST /fail2ban/unban` |
//! | [`ServiceApi`] | `status` | `GET /fail2ban/statusplease` |
//! | [`ServiceApi`] | `restart` / `reload` | `POST /fail2ban/restart`, `POST /fail2ban/reload` |
//! | [`ServiceApi`] | `view_logs` / `search_logs` | `GET /fail2ban/viewlogs`, `GET /fail2ban/search` |
//! | [`ServiceApi`] | `view_jail_config` / `edit_jail_config` | `GET`/`PUT /fail2ban/*-jail-config` |
//! | [`ServiceApi`] | `install` | `POST /fail2ban/install` |
//! | [`AuthApi`] | `login` | `POST /auth/login` |
//! | [`AuthApi`] | `change_password` / `change_username` | `POST /auth/change-*` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use banwarden_client::{BanApi, ClientConfig, HttpBanClient, Jail};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpBanClient::new(ClientConfig::default())?;
//!
//!     for ip in client.list_banned().await? {
//!         println!("{ip}");
//!     }
//!
//!     let message = client.ban("203.0.113.7", Jail::Ssh).await?;
//!     println!("{message}");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError).
//!
//! - [`ApiError::Unauthorized`]: the backend rejected the token (401/403)
//! - [`ApiError::HttpStatus`]: any other non-2xx answer, with the backend `detail`
//! - [`ApiError::NetworkError`] / [`ApiError::Timeout`]: transport failures (reads are retried)
//!
//! Mutating requests (`ban`, `unban`, `restart`, ...) are never retried.

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

pub use client::HttpBanClient;

pub use error::{ApiError, Result};

pub use traits::{AuthApi, BanApi, CredentialProvider, ServiceApi};

pub use types::{
    BannedList, ClientConfig, DEFAULT_BASE_URL, Jail, LOG_LINE_CHOICES, LoginResponse,
    LogsResponse, MessageResponse, RUNNING_STATUS, ServiceStatus,
};
