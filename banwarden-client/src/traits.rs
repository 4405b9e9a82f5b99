//! 后端 API 抽象 Trait
//!
//! 按职责拆分为三组：
//! - [`BanApi`]: 封禁列表的读取与增删（分页视图唯一依赖的接口）
//! - [`ServiceApi`]: 服务状态、日志、jail 配置、安装
//! - [`AuthApi`]: 登录与账号设置
//!
//! 凭证通过 [`CredentialProvider`] 注入，调用方不直接接触 token 存储。

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Jail, LoginResponse, ServiceStatus};

/// Bearer token 来源
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// 返回当前的 access token，未登录时为 `None`
    async fn access_token(&self) -> Option<String>;
}

/// 封禁列表接口
#[async_trait]
pub trait BanApi: Send + Sync {
    /// 读取完整的封禁地址列表（不分页，后端一次性返回全部）
    async fn list_banned(&self) -> Result<Vec<String>>;

    /// 封禁地址，返回后端消息
    async fn ban(&self, ip: &str, jail: Jail) -> Result<String>;

    /// 解封地址，返回后端消息
    async fn unban(&self, ip: &str, jail: Jail) -> Result<String>;
}

/// 服务管理接口
#[async_trait]
pub trait ServiceApi: Send + Sync {
    /// 查询服务状态
    async fn status(&self) -> Result<ServiceStatus>;

    /// 重启服务
    async fn restart(&self) -> Result<String>;

    /// 重新加载配置
    async fn reload(&self) -> Result<String>;

    /// 读取最近 `lines` 行日志
    async fn view_logs(&self, lines: u32) -> Result<Option<String>>;

    /// 搜索日志
    async fn search_logs(&self, query: &str) -> Result<Option<String>>;

    /// 读取 `jail.local`
    async fn view_jail_config(&self) -> Result<String>;

    /// 覆盖写入 `jail.local`
    async fn edit_jail_config(&self, content: &str) -> Result<()>;

    /// 在本机安装 Fail2Ban
    async fn install(&self, sudo_password: &str) -> Result<String>;
}

/// 认证与账号接口
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// 用户名密码登录
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse>;

    /// 修改密码（需要 token）
    async fn change_password(&self, current_password: &str, new_password: &str) -> Result<()>;

    /// 修改用户名（需要 token）
    async fn change_username(&self, new_username: &str) -> Result<()>;
}
