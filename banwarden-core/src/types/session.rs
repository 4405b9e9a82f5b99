//! 会话相关类型定义

use serde::{Deserialize, Serialize};

/// 当前登录会话
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// 用户名（JWT `sub`）
    pub username: String,
}

/// JWT payload 中关心的字段
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Claims {
    pub sub: String,
    #[serde(default)]
    pub exp: Option<u64>,
}
