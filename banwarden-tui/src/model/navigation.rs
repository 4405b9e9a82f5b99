//! 导航状态定义

use super::Page;

/// 导航项 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItemId {
    Status,
    BanList,
    Logs,
    JailConfig,
    Settings,
}

impl NavItemId {
    /// 对应的页面
    pub fn page(self) -> Page {
        match self {
            NavItemId::Status => Page::Status,
            NavItemId::BanList => Page::BanList,
            NavItemId::Logs => Page::Logs,
            NavItemId::JailConfig => Page::JailConfig,
            NavItemId::Settings => Page::Settings,
        }
    }
}

/// 导航项
#[derive(Debug, Clone)]
pub struct NavItem {
    pub id: NavItemId,
    pub icon: &'static str,
}

/// 导航状态
pub struct NavigationState {
    /// 导航项列表
    pub items: Vec<NavItem>,
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        Self {
            items: vec![
                NavItem {
                    id: NavItemId::Status,
                    icon: "⌂",
                },
                NavItem {
                    id: NavItemId::BanList,
                    icon: "⊘",
                },
                NavItem {
                    id: NavItemId::Logs,
                    icon: "≣",
                },
                NavItem {
                    id: NavItemId::JailConfig,
                    icon: "✎",
                },
                NavItem {
                    id: NavItemId::Settings,
                    icon: "≡",
                },
            ],
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    /// 选中指定页面对应的导航项
    pub fn select_page(&mut self, page: Page) {
        if let Some(index) = self.items.iter().position(|item| item.id.page() == page) {
            self.selected = index;
        }
    }

    /// 获取当前选中的导航项 ID
    pub fn current_id(&self) -> Option<NavItemId> {
        self.items.get(self.selected).map(|item| item.id)
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
