//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use banwarden_client::ApiError;

/// Core layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// No session token is stored
    #[error("Not logged in")]
    NotLoggedIn,

    /// Stored token cannot be decoded
    #[error("Invalid session token: {0}")]
    InvalidToken(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Backend error (converting from client library)
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, expired session, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::NotLoggedIn | Self::InvalidToken(_) | Self::ValidationError(_) => true,
            Self::Api(e) => e.is_expected(),
            Self::StorageError(_) | Self::SerializationError(_) => false,
        }
    }

    /// 会话是否已失效（需要重新登录）
    #[must_use]
    pub fn requires_login(&self) -> bool {
        matches!(
            self,
            Self::NotLoggedIn | Self::InvalidToken(_) | Self::Api(ApiError::Unauthorized { .. })
        )
    }

    /// 面向用户的错误消息
    ///
    /// 后端返回 `detail` 时优先展示，否则使用 `fallback`。
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api(e) => e.detail().map_or_else(|| fallback.to_string(), str::to_string),
            Self::ValidationError(msg) => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_converts_and_keeps_classification() {
        let err: CoreError = ApiError::HttpStatus {
            status: 400,
            detail: Some("Invalid jail".to_string()),
        }
        .into();
        assert!(err.is_expected());
        assert_eq!(err.to_string(), "HTTP 400: Invalid jail");
    }

    #[test]
    fn storage_error_is_unexpected() {
        assert!(!CoreError::StorageError("keyring locked".into()).is_expected());
    }

    #[test]
    fn unauthorized_requires_login() {
        assert!(CoreError::Api(ApiError::Unauthorized { detail: None }).requires_login());
        assert!(CoreError::NotLoggedIn.requires_login());
        assert!(!CoreError::ValidationError("bad ip".into()).requires_login());
    }

    #[test]
    fn user_message_prefers_backend_detail() {
        let err = CoreError::Api(ApiError::HttpStatus {
            status: 400,
            detail: Some("Incorrect current password".to_string()),
        });
        assert_eq!(
            err.user_message("Failed to change password"),
            "Incorrect current password"
        );

        let err = CoreError::Api(ApiError::Timeout {
            detail: "30s".to_string(),
        });
        assert_eq!(
            err.user_message("Failed to change password"),
            "Failed to change password"
        );
    }
}
