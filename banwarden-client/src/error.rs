use serde::{Deserialize, Serialize};

/// Unified error type for all backend API operations.
///
/// All variants are serializable for structured error reporting.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError): connection refused, DNS failure, 502/503/504
/// - [`Timeout`](Self::Timeout): request timed out
///
/// Only idempotent reads are retried by the built-in HTTP client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred.
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The backend rejected the session (HTTP 401/403).
    Unauthorized {
        /// `detail` field of the backend error body, if present.
        detail: Option<String>,
    },

    /// The backend answered with a non-2xx status.
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// `detail` field of the backend error body, if present.
        detail: Option<String>,
    },

    /// Failed to parse the backend response.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// A request parameter is invalid (empty IP, empty username, ...).
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The operation needs a bearer token and none is available.
    CredentialError {
        /// Error details.
        detail: String,
    },
}

impl ApiError {
    /// 是否为预期行为（用户输入、认证失败等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Unauthorized { .. }
            | Self::InvalidParameter { .. }
            | Self::CredentialError { .. } => true,
            Self::HttpStatus { status, .. } => (400..500).contains(status),
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::ParseError { .. } => false,
        }
    }

    /// 后端返回的 `detail` 文本（如有）
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail } | Self::HttpStatus { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => write!(f, "Network error: {detail}"),
            Self::Timeout { detail } => write!(f, "Request timeout: {detail}"),
            Self::Unauthorized { detail } => {
                if let Some(msg) = detail {
                    write!(f, "Unauthorized: {msg}")
                } else {
                    write!(f, "Unauthorized")
                }
            }
            Self::HttpStatus { status, detail } => {
                if let Some(msg) = detail {
                    write!(f, "HTTP {status}: {msg}")
                } else {
                    write!(f, "HTTP {status}")
                }
            }
            Self::ParseError { detail } => write!(f, "Parse error: {detail}"),
            Self::InvalidParameter { param, detail } => {
                write!(f, "Invalid parameter '{param}': {detail}")
            }
            Self::CredentialError { detail } => write!(f, "Credential error: {detail}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
