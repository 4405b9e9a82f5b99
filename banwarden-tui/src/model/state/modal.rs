//! 弹窗/对话框状态

use banwarden_core::types::Jail;

/// 封禁弹窗的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BanField {
    #[default]
    Ip,
    Jail,
}

impl BanField {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            BanField::Ip => BanField::Jail,
            BanField::Jail => BanField::Ip,
        }
    }
}

/// 修改密码弹窗的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordField {
    #[default]
    Current,
    New,
}

impl PasswordField {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            PasswordField::Current => PasswordField::New,
            PasswordField::New => PasswordField::Current,
        }
    }
}

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 封禁地址
    BanIp {
        ip: String,
        jail: Jail,
        focus: BanField,
        error: Option<String>,
    },
    /// 确认解封
    ConfirmUnban {
        ip: String,
        jail: Jail,
        /// 焦点是否在确认按钮上（默认在取消上）
        confirm_focused: bool,
    },
    /// 修改密码
    ChangePassword {
        current: String,
        new: String,
        focus: PasswordField,
        show_secrets: bool,
        submitting: bool,
        error: Option<String>,
    },
    /// 修改用户名
    ChangeUsername {
        username: String,
        submitting: bool,
        error: Option<String>,
    },
    /// 安装 Fail2Ban
    Install {
        /// sudo 密码；每次提交后清空
        password: String,
        show_secrets: bool,
        running: bool,
        /// 最近一次安装的结果（成功输出或错误）
        result: Option<Result<String, String>>,
    },
    /// 帮助
    Help,
    /// 错误提示
    Error { title: String, message: String },
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示封禁弹窗
    pub fn show_ban_ip(&mut self) {
        self.active = Some(Modal::BanIp {
            ip: String::new(),
            jail: Jail::default(),
            focus: BanField::Ip,
            error: None,
        });
    }

    /// 显示解封确认弹窗
    pub fn show_confirm_unban(&mut self, ip: &str, jail: Jail) {
        self.active = Some(Modal::ConfirmUnban {
            ip: ip.to_string(),
            jail,
            confirm_focused: false,
        });
    }

    pub fn show_change_password(&mut self) {
        self.active = Some(Modal::ChangePassword {
            current: String::new(),
            new: String::new(),
            focus: PasswordField::Current,
            show_secrets: false,
            submitting: false,
            error: None,
        });
    }

    pub fn show_change_username(&mut self) {
        self.active = Some(Modal::ChangeUsername {
            username: String::new(),
            submitting: false,
            error: None,
        });
    }

    pub fn show_install(&mut self) {
        self.active = Some(Modal::Install {
            password: String::new(),
            show_secrets: false,
            running: false,
            result: None,
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.active = Some(Modal::Help);
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.active = Some(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
