//! 日志页面状态

use banwarden_core::services::LogService;

/// 日志页面状态
#[derive(Debug, Clone)]
pub struct LogsState {
    /// 查看最近 N 行
    pub lines: u32,
    /// 当前生效的搜索关键字；None 表示按行数查看
    pub query: Option<String>,
    /// 正在输入的搜索关键字
    pub search_input: Option<String>,
    /// 后端返回的日志文本
    pub text: String,
    pub loading: bool,
    pub error: Option<String>,
    /// 垂直滚动偏移
    pub scroll: u16,
}

impl LogsState {
    pub fn new(lines: u32) -> Self {
        Self {
            lines,
            query: None,
            search_input: None,
            text: String::new(),
            loading: false,
            error: None,
            scroll: 0,
        }
    }

    pub fn is_searching(&self) -> bool {
        self.search_input.is_some()
    }

    /// 切换到下一个行数选项并退出搜索结果
    pub fn cycle_lines(&mut self) {
        self.lines = LogService::next_line_choice(self.lines);
        self.query = None;
    }

    pub fn begin_search(&mut self) {
        self.search_input = Some(self.query.clone().unwrap_or_default());
    }

    pub fn cancel_search(&mut self) {
        self.search_input = None;
    }

    /// 提交搜索输入；空白输入回到按行数查看
    pub fn submit_search(&mut self) {
        if let Some(input) = self.search_input.take() {
            let trimmed = input.trim();
            self.query = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        let max = u16::try_from(self.text.lines().count().saturating_sub(1)).unwrap_or(u16::MAX);
        if self.scroll < max {
            self.scroll += 1;
        }
    }

    /// 替换日志文本并回到顶部
    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.scroll = 0;
        self.error = None;
    }
}
