//! 登录页面状态

/// 登录表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

impl LoginField {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        }
    }
}

/// 登录页面状态
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub show_password: bool,
    /// 登录请求在途
    pub submitting: bool,
    /// 启动时检查已保存的会话
    pub checking: bool,
    pub error: Option<String>,
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.submitting || self.checking
    }

    pub fn input(&mut self, c: char) {
        match self.focus {
            LoginField::Username => self.username.push(c),
            LoginField::Password => self.password.push(c),
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            LoginField::Username => self.username.pop(),
            LoginField::Password => self.password.pop(),
        };
    }

    /// 登出或会话过期后清空表单（保留用户名）
    pub fn reset(&mut self) {
        self.password.clear();
        self.focus = if self.username.is_empty() {
            LoginField::Username
        } else {
            LoginField::Password
        };
        self.submitting = false;
        self.checking = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_goes_to_focused_field() {
        let mut state = LoginState::new();
        state.input('a');
        state.focus = state.focus.toggle();
        state.input('p');
        state.input('w');
        state.backspace();

        assert_eq!(state.username, "a");
        assert_eq!(state.password, "p");
    }

    #[test]
    fn reset_keeps_username_and_focuses_password() {
        let mut state = LoginState {
            username: "admin".into(),
            password: "secret".into(),
            submitting: true,
            ..LoginState::default()
        };
        state.reset();
        assert!(state.password.is_empty());
        assert_eq!(state.focus, LoginField::Password);
        assert!(!state.is_busy());
    }
}
