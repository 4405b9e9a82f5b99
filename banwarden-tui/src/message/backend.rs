//! 后端结果消息
//!
//! Backend 层在 tokio 任务中执行命令，结果通过 channel 送回主循环，
//! 再作为 `AppMessage::Backend` 交给 Update 层一次性应用。

use banwarden_client::ServiceStatus;
use banwarden_core::types::Session;
use banwarden_core::CoreResult;

/// 后端结果
#[derive(Debug, Clone)]
pub enum BackendEvent {
    /// 启动时的会话检查结果
    SessionRestored(CoreResult<Session>),
    /// 登录结果
    LoggedIn(CoreResult<Session>),
    LoggedOut(CoreResult<()>),

    Status(CoreResult<ServiceStatus>),
    /// 重启 / 重新加载的后端消息
    ServiceAction(CoreResult<String>),

    BannedList(CoreResult<Vec<String>>),
    /// 封禁 / 解封的后端消息
    Mutation(CoreResult<String>),

    Logs(CoreResult<String>),

    JailConfigLoaded(CoreResult<String>),
    JailConfigSaved {
        content: String,
        result: CoreResult<()>,
    },

    PasswordChanged(CoreResult<()>),
    UsernameChanged(CoreResult<()>),
    Installed(CoreResult<String>),
}
