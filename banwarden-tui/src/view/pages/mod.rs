//! 页面内容渲染

pub mod ban_list;
pub mod jail_config;
pub mod login;
pub mod logs;
pub mod settings;
pub mod status;
