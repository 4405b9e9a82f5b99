//! Request / response types exchanged with the Fail2Ban management daemon.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Default backend endpoint.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:31948";

/// Status string the backend reports when the service is up.
pub const RUNNING_STATUS: &str = "Fail2Ban is running";

/// Line counts offered by the log viewer.
pub const LOG_LINE_CHOICES: [u32; 4] = [50, 100, 200, 500];

// ============ Client Configuration ============

/// Connection settings for [`HttpBanClient`](crate::HttpBanClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL without trailing path, e.g. `http://127.0.0.1:31948`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retries for idempotent reads (0 disables retrying).
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            max_retries: 2,
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at `base_url` with default timeouts.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

// ============ Jail ============

/// Fail2Ban jail a ban/unban applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Jail {
    #[default]
    Ssh,
    HttpAuth,
    NginxHttpAuth,
}

impl Jail {
    /// All jails, in selector order.
    pub fn all() -> &'static [Jail] {
        &[Jail::Ssh, Jail::HttpAuth, Jail::NginxHttpAuth]
    }

    /// Wire name used in the `jail` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Jail::Ssh => "ssh",
            Jail::HttpAuth => "http-auth",
            Jail::NginxHttpAuth => "nginx-http-auth",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Jail::Ssh => "SSH",
            Jail::HttpAuth => "HTTP Auth",
            Jail::NginxHttpAuth => "Nginx HTTP Auth",
        }
    }

    #[must_use]
    pub fn next(&self) -> Jail {
        match self {
            Jail::Ssh => Jail::HttpAuth,
            Jail::HttpAuth => Jail::NginxHttpAuth,
            Jail::NginxHttpAuth => Jail::Ssh,
        }
    }

    #[must_use]
    pub fn prev(&self) -> Jail {
        match self {
            Jail::Ssh => Jail::NginxHttpAuth,
            Jail::HttpAuth => Jail::Ssh,
            Jail::NginxHttpAuth => Jail::HttpAuth,
        }
    }
}

impl fmt::Display for Jail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Jail {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Jail::all()
            .iter()
            .copied()
            .find(|jail| jail.as_str() == s)
            .ok_or_else(|| ApiError::InvalidParameter {
                param: "jail".to_string(),
                detail: format!("unknown jail '{s}'"),
            })
    }
}

// ============ Responses ============

/// `GET /fail2ban/list`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannedList {
    #[serde(default)]
    pub banned_ips: Vec<String>,
}

/// Generic `{ message }` acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// `GET /fail2ban/statusplease`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
    #[serde(default)]
    pub details: String,
}

impl ServiceStatus {
    /// Whether the daemon reports the service as running.
    pub fn is_running(&self) -> bool {
        self.status == RUNNING_STATUS
    }
}

/// `GET /fail2ban/viewlogs` and `GET /fail2ban/search`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogsResponse {
    #[serde(default)]
    pub logs: Option<String>,
}

/// `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Error body shape used by the backend (`{ "detail": ... }`).
///
/// `detail` is usually a string but validation errors carry a list.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    pub(crate) fn into_message(self) -> Option<String> {
        match self.detail? {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

// ============ Requests ============

/// `POST /auth/change-password`
#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest<'a> {
    pub current_password: &'a str,
    pub new_password: &'a str,
}

/// `POST /auth/change-username`
#[derive(Debug, Clone, Serialize)]
pub struct ChangeUsernameRequest<'a> {
    pub new_username: &'a str,
}

/// `POST /fail2ban/install`
#[derive(Debug, Clone, Serialize)]
pub struct InstallRequest<'a> {
    #[serde(rename = "sudoPassword")]
    pub sudo_password: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jail_wire_names() {
        assert_eq!(Jail::Ssh.as_str(), "ssh");
        assert_eq!(Jail::HttpAuth.as_str(), "http-auth");
        assert_eq!(Jail::NginxHttpAuth.as_str(), "nginx-http-auth");
    }

    #[test]
    fn jail_cycles_through_all() {
        let mut jail = Jail::default();
        for _ in 0..Jail::all().len() {
            jail = jail.next();
        }
        assert_eq!(jail, Jail::Ssh);
        assert_eq!(Jail::Ssh.prev(), Jail::NginxHttpAuth);
    }

    #[test]
    fn jail_from_str() {
        assert_eq!("http-auth".parse::<Jail>().unwrap(), Jail::HttpAuth);
        assert!("apache".parse::<Jail>().is_err());
    }

    #[test]
    fn banned_list_missing_field_is_empty() {
        let list: BannedList = serde_json::from_str("{}").unwrap();
        assert!(list.banned_ips.is_empty());
    }

    #[test]
    fn service_status_running() {
        let status = ServiceStatus {
            status: RUNNING_STATUS.to_string(),
            details: String::new(),
        };
        assert!(status.is_running());

        let stopped = ServiceStatus {
            status: "Fail2Ban is not running".to_string(),
            details: String::new(),
        };
        assert!(!stopped.is_running());
    }

    #[test]
    fn error_body_string_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":"Incorrect username"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Incorrect username"));
    }

    #[test]
    fn error_body_list_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail":[{"msg":"field required"}]}"#).unwrap();
        let msg = body.into_message().unwrap();
        assert!(msg.contains("field required"));
    }

    #[test]
    fn install_request_uses_camel_case_field() {
        let json = serde_json::to_value(InstallRequest {
            sudo_password: "pw",
        })
        .unwrap();
        assert_eq!(json["sudoPassword"], "pw");
    }
}
