//! jail.local 编辑页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染 jail.local 页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let state = &app.jail_config;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 文件名 + 模式
            Constraint::Min(1),    // 编辑区
            Constraint::Length(1), // 错误
        ])
        .split(area);

    let (mode, mode_style) = if state.saving {
        (texts.common.save, Style::default().fg(c.warning))
    } else if state.editing {
        (
            texts.jail_config.editing,
            Style::default().fg(c.warning).add_modifier(Modifier::BOLD),
        )
    } else {
        (texts.jail_config.read_only, Styles::muted())
    };
    let dirty = if state.is_dirty() { " *" } else { "" };
    let header = Line::from(vec![
        Span::styled(format!(" {}{dirty}", texts.jail_config.file), Styles::title()),
        Span::raw("  "),
        Span::styled(format!("[{mode}]"), mode_style),
    ]);
    frame.render_widget(Paragraph::new(header), rows[0]);

    render_body(app, frame, rows[1]);

    if let Some(error) = &state.error {
        let line = Line::styled(format!(" {}: {error}", texts.common.error), Styles::error());
        frame.render_widget(Paragraph::new(line), rows[2]);
    }
}

/// 行号 + 文本，编辑时在光标处反色显示
fn render_body(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let state = &app.jail_config;

    if state.loaded.is_none() {
        let message = if state.loading {
            texts.common.loading
        } else {
            texts.jail_config.empty
        };
        let line = Line::styled(format!(" {message}"), Styles::muted());
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    if !state.editing && state.lines.iter().all(|line| line.trim().is_empty()) {
        let line = Line::styled(format!(" {}", texts.jail_config.empty), Styles::muted());
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let height = usize::from(area.height);
    let offset = state.visible_offset(height);
    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);

    let lines: Vec<Line> = state
        .lines
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(row, text)| {
            let mut spans = vec![Span::styled(format!("{:>4} ", row + 1), Styles::muted())];
            if state.editing && row == state.cursor_row {
                let chars: Vec<char> = text.chars().collect();
                let col = state.cursor_col.min(chars.len());
                let before: String = chars[..col].iter().collect();
                let at = chars.get(col).map_or_else(|| " ".to_string(), char::to_string);
                let after: String = chars.get(col + 1..).unwrap_or_default().iter().collect();
                spans.push(Span::raw(before));
                spans.push(Span::styled(at, cursor_style));
                spans.push(Span::raw(after));
            } else {
                spans.push(Span::raw(text.as_str()));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
