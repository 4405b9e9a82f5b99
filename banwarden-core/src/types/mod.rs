//! 类型定义模块

mod ban_list;
mod session;

pub use ban_list::{BanListState, MutationOutcome};
pub(crate) use session::Claims;
pub use session::Session;

// Re-export client 库的公共类型
pub use banwarden_client::{
    Jail, LoginResponse, ServiceStatus, DEFAULT_BASE_URL, LOG_LINE_CHOICES, RUNNING_STATUS,
};
