//! 服务状态页面状态

use banwarden_core::types::ServiceStatus;

/// 服务状态页面状态
#[derive(Debug, Clone, Default)]
pub struct StatusState {
    /// 最近一次成功获取的状态
    pub status: Option<ServiceStatus>,
    pub loading: bool,
    pub error: Option<String>,
    /// 重启/重载请求在途
    pub action_pending: bool,
}

impl StatusState {
    pub fn new() -> Self {
        Self::default()
    }
}
