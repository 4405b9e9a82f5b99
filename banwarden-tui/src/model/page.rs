//! 页面状态定义

use crate::i18n::t;

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// 登录页（没有有效会话时显示）
    #[default]
    Login,
    /// 服务状态（首页）
    Status,
    /// 封禁列表
    BanList,
    /// 日志
    Logs,
    /// jail.local 编辑器
    JailConfig,
    /// 设置
    Settings,
}

impl Page {
    /// 获取页面标题
    pub fn title(&self) -> &'static str {
        let texts = t();
        match self {
            Page::Login => texts.login.title,
            Page::Status => texts.nav.status,
            Page::BanList => texts.nav.ban_list,
            Page::Logs => texts.nav.logs,
            Page::JailConfig => texts.nav.jail_config,
            Page::Settings => texts.nav.settings,
        }
    }

    pub fn is_login(&self) -> bool {
        matches!(self, Page::Login)
    }
}
