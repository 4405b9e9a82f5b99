//! 应用主状态结构

use banwarden_core::types::Session;

use super::state::{
    BanListPageState, JailConfigState, LoginState, LogsState, ModalState, SettingsState,
    StatusState,
};
use super::{FocusPanel, NavigationState, Page};
use crate::backend::{AppConfig, Command};
use crate::i18n::Language;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 当前登录会话
    pub session: Option<Session>,

    /// 后端地址（只用于显示）
    pub backend_url: String,

    // === 各页面状态 ===
    /// 登录页面状态
    pub login: LoginState,
    /// 服务状态页面
    pub status: StatusState,
    /// 封禁列表页面状态
    pub ban_list: BanListPageState,
    /// 日志页面状态
    pub logs: LogsState,
    /// jail.local 编辑器状态
    pub jail_config: JailConfigState,
    /// 设置页面状态
    pub settings: SettingsState,

    /// 弹窗状态
    pub modal: ModalState,

    /// 等待派发给 Backend 的命令
    pub commands: Vec<Command>,

    /// 主题或语言改动后需要写回配置文件
    pub config_dirty: bool,
}

impl App {
    /// 创建新的应用实例，并请求检查已保存的会话
    pub fn new(config: &AppConfig) -> Self {
        let language = Language::from_code(&config.language).unwrap_or_default();
        let mut app = Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Login,
            status_message: None,
            session: None,
            backend_url: config.base_url.clone(),
            login: LoginState::new(),
            status: StatusState::new(),
            ban_list: BanListPageState::new(config.page_size()),
            logs: LogsState::new(config.log_lines),
            jail_config: JailConfigState::new(),
            settings: SettingsState::new(config.theme, language),
            modal: ModalState::new(),
            commands: Vec::new(),
            config_dirty: false,
        };

        app.login.checking = true;
        app.send(Command::CheckSession);
        app
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 请求后端执行命令
    pub fn send(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// 取出本轮积累的命令
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }
}
