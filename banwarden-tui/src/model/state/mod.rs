//! 页面状态模块
//!
//! 定义各个页面的状态数据结构

mod ban_list;
mod jail_config;
mod login;
mod logs;
mod modal;
mod settings;
mod status;

pub use ban_list::BanListPageState;
pub use jail_config::JailConfigState;
pub use login::{LoginField, LoginState};
pub use logs::LogsState;
pub use modal::{BanField, Modal, ModalState, PasswordField};
pub use settings::{SettingItem, SettingsState};
pub use status::StatusState;
