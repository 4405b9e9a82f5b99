//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `modal.*`**：所有弹窗（Modal）的内容都放在 modal 下
//! 3. **页面内容归对应页面**：如 `ban_list.*`, `settings.*`
//! 4. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 5. **键盘提示归 `hints.*`**：按键名称和操作提示
//! 6. **界面自身产生的状态栏消息归 `status_bar.*`**（后端返回的消息原样显示）

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 导航栏文本
    pub nav: NavTexts,
    /// 登录页文本
    pub login: LoginTexts,
    /// 服务状态页文本
    pub status: StatusTexts,
    /// 封禁列表页文本
    pub ban_list: BanListTexts,
    /// 日志页文本
    pub logs: LogsTexts,
    /// jail 配置页文本
    pub jail_config: JailConfigTexts,
    /// 设置页文本
    pub settings: SettingsTexts,
    /// 弹窗文本（所有弹窗的内容）
    pub modal: ModalTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 帮助页面文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

/// 通用文本（跨多处复用的词汇）
pub struct CommonTexts {
    pub app_name: &'static str,
    pub cancel: &'static str,
    pub save: &'static str,
    pub confirm: &'static str,
    pub close: &'static str,
    pub loading: &'static str,
    pub error: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

/// 键盘提示文本
pub struct HintTexts {
    /// 按键名称
    pub keys: KeyNames,
    /// 动作描述
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub enter: &'static str,
    pub esc: &'static str,
    pub tab: &'static str,
    pub arrows_lr: &'static str, // "←→"
    pub arrows_ud: &'static str, // "↑↓"
}

/// 动作描述（用于组合提示）
pub struct ActionTexts {
    pub navigate: &'static str,
    pub open: &'static str,
    pub switch_panel: &'static str,
    pub switch_field: &'static str,
    pub select: &'static str,
    pub page: &'static str,
    pub ban: &'static str,
    pub unban: &'static str,
    pub jail: &'static str,
    pub refresh: &'static str,
    pub restart: &'static str,
    pub reload: &'static str,
    pub search: &'static str,
    pub lines: &'static str,
    pub scroll: &'static str,
    pub edit: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub change: &'static str,
    pub login: &'static str,
    pub show_secrets: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 导航栏
// ============================================================================

/// 导航栏文本
pub struct NavTexts {
    pub title: &'static str,
    pub status: &'static str,
    pub ban_list: &'static str,
    pub logs: &'static str,
    pub jail_config: &'static str,
    pub settings: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

/// 登录页文本
pub struct LoginTexts {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub username: &'static str,
    pub password: &'static str,
    pub logging_in: &'static str,
    pub checking_session: &'static str,
}

/// 服务状态页文本
pub struct StatusTexts {
    pub service: &'static str,
    pub running: &'static str,
    pub stopped: &'static str,
    pub unknown: &'static str,
    pub details: &'static str,
    pub backend: &'static str,
    pub signed_in_as: &'static str,
}

/// 封禁列表页文本
pub struct BanListTexts {
    pub no_banned: &'static str,
    /// "Page X of Y" 的前半部分
    pub page: &'static str,
    /// "Page X of Y" 的连接词
    pub of: &'static str,
    pub total: &'static str,
    pub unban_jail: &'static str,
}

/// 日志页文本
pub struct LogsTexts {
    pub last_lines: &'static str,
    pub results_for: &'static str,
    pub search: &'static str,
    pub search_placeholder: &'static str,
    pub no_logs: &'static str,
}

/// jail 配置页文本
pub struct JailConfigTexts {
    pub file: &'static str,
    pub read_only: &'static str,
    pub editing: &'static str,
    pub empty: &'static str,
}

/// 设置页面文本
pub struct SettingsTexts {
    pub appearance: &'static str,
    pub account: &'static str,
    /// 主题设置
    pub theme: ThemeTexts,
    /// 语言设置
    pub language: LanguageTexts,
    pub change_username: &'static str,
    pub change_password: &'static str,
    pub install: &'static str,
    pub logout: &'static str,
}

pub struct ThemeTexts {
    pub label: &'static str,
    pub dark: &'static str,
    pub light: &'static str,
}

pub struct LanguageTexts {
    pub label: &'static str,
    pub description: &'static str,
}

// ============================================================================
// 弹窗文本
// ============================================================================

/// 弹窗文本（所有弹窗的内容都在这里）
pub struct ModalTexts {
    pub ban_ip: BanIpModalTexts,
    pub confirm_unban: ConfirmUnbanTexts,
    pub change_password: ChangePasswordTexts,
    pub change_username: ChangeUsernameTexts,
    pub install: InstallTexts,
}

/// 封禁地址弹窗
pub struct BanIpModalTexts {
    pub title: &'static str,
    pub ip: &'static str,
    pub ip_hint: &'static str,
    pub jail: &'static str,
    pub jail_hint: &'static str,
}

/// 确认解封弹窗
pub struct ConfirmUnbanTexts {
    pub title: &'static str,
    pub message: &'static str,
    pub from_jail: &'static str,
    pub confirm_button: &'static str,
    pub cancel_button: &'static str,
}

/// 修改密码弹窗
pub struct ChangePasswordTexts {
    pub title: &'static str,
    pub current: &'static str,
    pub new: &'static str,
}

/// 修改用户名弹窗
pub struct ChangeUsernameTexts {
    pub title: &'static str,
    pub new_username: &'static str,
    pub relogin_hint: &'static str,
}

/// 安装弹窗
pub struct InstallTexts {
    pub title: &'static str,
    pub sudo_password: &'static str,
    pub description: &'static str,
    pub installing: &'static str,
    pub password_required: &'static str,
}

// ============================================================================
// 其他组件
// ============================================================================

/// 状态栏文本（界面自身产生的消息）
pub struct StatusBarTexts {
    pub ready: &'static str,
    pub refreshing: &'static str,
    pub session_expired: &'static str,
    pub logged_in: &'static str,
    pub logged_out: &'static str,
    pub config_saved: &'static str,
    pub config_save_failed: &'static str,
    pub jail_config_saved: &'static str,
    pub password_changed: &'static str,
    pub username_changed: &'static str,
    pub no_selection: &'static str,
}

/// 帮助页面文本
pub struct HelpTexts {
    pub title: &'static str,
    pub global_shortcuts: &'static str,
    pub ban_list_shortcuts: &'static str,
    pub page_shortcuts: &'static str,
    pub close_hint: &'static str,
    /// 快捷键动作描述
    pub actions: HelpActionTexts,
}

/// 帮助页面快捷键动作描述
pub struct HelpActionTexts {
    pub switch_panel: &'static str,
    pub move_up_down: &'static str,
    pub change_page: &'static str,
    pub confirm: &'static str,
    pub back_cancel: &'static str,
    pub refresh: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub ban: &'static str,
    pub unban: &'static str,
    pub cycle_jail: &'static str,
    pub restart_reload: &'static str,
    pub search_logs: &'static str,
    pub cycle_lines: &'static str,
    pub edit_save: &'static str,
}
