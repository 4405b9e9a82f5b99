//! 封禁列表页面状态

use std::num::NonZeroUsize;

use banwarden_core::types::{BanListState, Jail};

/// 封禁列表页面状态
#[derive(Debug, Clone)]
pub struct BanListPageState {
    /// 完整集合、分页器和最近一次提示
    pub list: BanListState,
    /// 当前窗口内选中的行
    pub selected: usize,
    /// 解封时使用的 jail
    pub unban_jail: Jail,
}

impl BanListPageState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            list: BanListState::new(page_size),
            selected: 0,
            unban_jail: Jail::default(),
        }
    }

    /// 当前页可见的地址
    pub fn visible(&self) -> &[String] {
        self.list.visible()
    }

    /// 选中的地址
    pub fn selected_ip(&self) -> Option<&str> {
        self.visible().get(self.selected).map(String::as_str)
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible().len() {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible().len().saturating_sub(1);
    }

    /// 下一页，返回是否翻页
    pub fn next_page(&mut self) -> bool {
        let moved = self.list.paginator.next_page();
        if moved {
            self.selected = 0;
        }
        moved
    }

    /// 上一页，返回是否翻页
    pub fn prev_page(&mut self) -> bool {
        let moved = self.list.paginator.prev_page();
        if moved {
            self.selected = 0;
        }
        moved
    }

    /// 切换解封 jail
    pub fn cycle_jail(&mut self) {
        self.unban_jail = self.unban_jail.next();
    }

    /// 应用拉取结果；成功时选中行回到第一行
    pub fn apply_fetch(&mut self, result: Result<Vec<String>, banwarden_core::CoreError>) {
        let succeeded = result.is_ok();
        self.list.apply_fetch(result);
        if succeeded {
            self.selected = 0;
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
