//! 设置页面状态

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 设置项枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    Language,
    ChangeUsername,
    ChangePassword,
    Install,
    Logout,
}

impl SettingItem {
    /// 获取所有设置项
    pub fn all() -> &'static [SettingItem] {
        &[
            SettingItem::Theme,
            SettingItem::Language,
            SettingItem::ChangeUsername,
            SettingItem::ChangePassword,
            SettingItem::Install,
            SettingItem::Logout,
        ]
    }

    /// 从索引获取设置项
    pub fn from_index(index: usize) -> Option<SettingItem> {
        Self::all().get(index).copied()
    }

    /// 是否可以用左右键切换取值
    pub fn is_toggle(self) -> bool {
        matches!(self, SettingItem::Theme | SettingItem::Language)
    }
}

/// 设置页面状态
#[derive(Debug)]
pub struct SettingsState {
    /// 当前选中的设置项索引
    pub selected_index: usize,
    /// 当前主题
    pub theme: Theme,
    /// 当前语言
    pub language: Language,
}

impl SettingsState {
    pub fn new(theme: Theme, language: Language) -> Self {
        Self {
            selected_index: 0,
            theme,
            language,
        }
    }

    pub fn selected_item(&self) -> Option<SettingItem> {
        SettingItem::from_index(self.selected_index)
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected_index < SettingItem::all().len() - 1 {
            self.selected_index += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_covers_every_item() {
        let mut state = SettingsState::new(Theme::Dark, Language::EnUs);
        for _ in 0..20 {
            state.select_next();
        }
        assert_eq!(state.selected_item(), Some(SettingItem::Logout));
        assert!(!SettingItem::Logout.is_toggle());

        for _ in 0..20 {
            state.select_previous();
        }
        assert_eq!(state.selected_item(), Some(SettingItem::Theme));
        assert!(SettingItem::Theme.is_toggle());
    }
}
