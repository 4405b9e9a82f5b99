//! Update 层发往 Backend 层的请求

use std::fmt;

use banwarden_client::Jail;

/// 需要访问后端的操作
///
/// Update 层只负责把命令放进 `App::commands`，由主循环交给 [`super::Backend`] 执行。
#[derive(Clone, PartialEq, Eq)]
pub enum Command {
    /// 启动时检查已保存的会话
    CheckSession,
    Login { username: String, password: String },
    Logout,

    FetchStatus,
    RestartService,
    ReloadService,

    FetchBanned,
    Ban { ip: String, jail: Jail },
    Unban { ip: String, jail: Jail },

    ViewLogs { lines: u32 },
    SearchLogs { query: String },

    LoadJailConfig,
    SaveJailConfig { content: String },

    ChangePassword { current: String, new: String },
    ChangeUsername { new_username: String },
    Install { sudo_password: String },
}

impl Command {
    /// 用于日志的名称（不含密码等敏感字段）
    pub fn name(&self) -> &'static str {
        match self {
            Command::CheckSession => "check_session",
            Command::Login { .. } => "login",
            Command::Logout => "logout",
            Command::FetchStatus => "fetch_status",
            Command::RestartService => "restart_service",
            Command::ReloadService => "reload_service",
            Command::FetchBanned => "fetch_banned",
            Command::Ban { .. } => "ban",
            Command::Unban { .. } => "unban",
            Command::ViewLogs { .. } => "view_logs",
            Command::SearchLogs { .. } => "search_logs",
            Command::LoadJailConfig => "load_jail_config",
            Command::SaveJailConfig { .. } => "save_jail_config",
            Command::ChangePassword { .. } => "change_password",
            Command::ChangeUsername { .. } => "change_username",
            Command::Install { .. } => "install",
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Ban { ip, jail } | Command::Unban { ip, jail } => {
                write!(f, "{}({ip}, {jail})", self.name())
            }
            Command::ViewLogs { lines } => write!(f, "{}({lines})", self.name()),
            Command::SearchLogs { query } => write!(f, "{}({query:?})", self.name()),
            Command::ChangeUsername { new_username } => {
                write!(f, "{}({new_username:?})", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_secrets() {
        let login = Command::Login {
            username: "admin".into(),
            password: "hunter2".into(),
        };
        let install = Command::Install {
            sudo_password: "hunter2".into(),
        };
        assert_eq!(format!("{login:?}"), "login");
        assert!(!format!("{install:?}").contains("hunter2"));
    }

    #[test]
    fn debug_output_shows_target() {
        let ban = Command::Ban {
            ip: "10.0.0.1".into(),
            jail: Jail::HttpAuth,
        };
        assert_eq!(format!("{ban:?}"), "ban(10.0.0.1, http-auth)");
    }
}
