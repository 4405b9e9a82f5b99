//! Banwarden Core Library
//!
//! Provides the business logic behind the Fail2Ban console, including:
//! - Client-side pagination of the banned-address collection ([`Paginator`])
//! - Ban list fetch / ban / unban orchestration (`BanListService`)
//! - Session, service status, logs, jail config and account services
//!
//! This library is platform-independent: the backend client is injected through
//! the `banwarden-client` traits and the session token through [`TokenStore`].

pub mod error;
pub mod pagination;
pub mod services;
pub mod traits;
pub mod types;
pub mod utils;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use pagination::{Paginator, DEFAULT_PAGE_SIZE};
pub use services::ServiceContext;
pub use traits::{StoredCredentials, TokenStore};
