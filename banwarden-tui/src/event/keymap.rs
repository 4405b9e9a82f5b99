//! 快捷键配置
//!
//! 集中定义快捷键映射；帮助弹窗和状态栏提示使用同一组按键

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 封禁列表
    pub const BAN: KeyBinding = KeyBinding::alt(KeyCode::Char('a'));
    pub const UNBAN: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
    pub const CYCLE_JAIL: KeyBinding = KeyBinding::alt(KeyCode::Char('j'));

    // 服务状态
    pub const RESTART: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));
    pub const RELOAD: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));

    // 日志
    pub const SEARCH: KeyBinding = KeyBinding::alt(KeyCode::Char('f'));
    pub const CYCLE_LINES: KeyBinding = KeyBinding::alt(KeyCode::Char('n'));

    // jail.local
    pub const EDIT: KeyBinding = KeyBinding::alt(KeyCode::Char('e'));
    pub const SAVE: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));

    // 输入框
    pub const TOGGLE_SECRETS: KeyBinding = KeyBinding::alt(KeyCode::Char('s'));
}
