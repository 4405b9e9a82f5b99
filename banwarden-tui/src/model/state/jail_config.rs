//! jail.local 编辑器状态
//!
//! 文本按行保存，光标列以字符计数。

/// jail.local 编辑器状态
#[derive(Debug, Clone, Default)]
pub struct JailConfigState {
    /// 最近一次从后端加载（或保存成功）的内容
    pub loaded: Option<String>,
    /// 编辑缓冲区
    pub lines: Vec<String>,
    pub cursor_row: usize,
    pub cursor_col: usize,
    pub editing: bool,
    pub loading: bool,
    pub saving: bool,
    pub error: Option<String>,
    /// 垂直滚动偏移
    pub scroll: usize,
}

impl JailConfigState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 用后端内容替换缓冲区
    pub fn set_loaded(&mut self, content: String) {
        self.lines = split_lines(&content);
        self.loaded = Some(content);
        self.editing = false;
        self.error = None;
        self.reset_cursor();
    }

    /// 进入编辑模式（未加载时无效）
    pub fn enter_edit(&mut self) -> bool {
        if self.loaded.is_none() || self.loading {
            return false;
        }
        self.editing = true;
        true
    }

    /// 放弃修改，恢复最近一次加载的内容
    pub fn cancel_edit(&mut self) {
        self.lines = split_lines(self.loaded.as_deref().unwrap_or_default());
        self.editing = false;
        self.saving = false;
        self.reset_cursor();
    }

    /// 保存成功：缓冲区成为新的基准内容
    pub fn saved(&mut self, content: String) {
        self.loaded = Some(content);
        self.editing = false;
        self.saving = false;
        self.error = None;
    }

    /// 缓冲区文本
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_dirty(&self) -> bool {
        self.loaded.as_deref().is_some_and(|loaded| loaded != self.text())
    }

    pub fn insert_char(&mut self, c: char) {
        let col = self.cursor_col;
        let line = self.current_line_mut();
        let idx = byte_index(line, col);
        line.insert(idx, c);
        self.cursor_col += 1;
    }

    /// 在光标处断行
    pub fn newline(&mut self) {
        let col = self.cursor_col;
        let line = self.current_line_mut();
        let idx = byte_index(line, col);
        let rest = line.split_off(idx);
        self.lines.insert(self.cursor_row + 1, rest);
        self.cursor_row += 1;
        self.cursor_col = 0;
    }

    /// 删除光标前的字符；行首时与上一行合并
    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            let col = self.cursor_col;
            let line = self.current_line_mut();
            let idx = byte_index(line, col - 1);
            line.remove(idx);
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            let line = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            let prev = &mut self.lines[self.cursor_row];
            self.cursor_col = prev.chars().count();
            prev.push_str(&line);
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.clamp_col();
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.clamp_col();
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.line_len(self.cursor_row);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor_col < self.line_len(self.cursor_row) {
            self.cursor_col += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_col = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_col = self.line_len(self.cursor_row);
    }

    /// 只读模式下滚动
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.lines.len() {
            self.scroll += 1;
        }
    }

    /// 让光标行落在 height 行高的视口内
    pub fn visible_offset(&self, height: usize) -> usize {
        if !self.editing || height == 0 {
            return self.scroll;
        }
        if self.cursor_row >= self.scroll + height {
            self.cursor_row + 1 - height
        } else if self.cursor_row < self.scroll {
            self.cursor_row
        } else {
            self.scroll
        }
    }

    fn current_line_mut(&mut self) -> &mut String {
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        &mut self.lines[self.cursor_row]
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, |line| line.chars().count())
    }

    fn clamp_col(&mut self) {
        self.cursor_col = self.cursor_col.min(self.line_len(self.cursor_row));
    }

    fn reset_cursor(&mut self) {
        self.cursor_row = 0;
        self.cursor_col = 0;
        self.scroll = 0;
    }
}

fn split_lines(content: &str) -> Vec<String> {
    content.split('\n').map(str::to_string).collect()
}

fn byte_index(line: &str, char_idx: usize) -> usize {
    line.char_indices()
        .nth(char_idx)
        .map_or(line.len(), |(idx, _)| idx)
}
