//! 日志页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染日志页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let logs = &app.logs;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题：行数或搜索关键字
            Constraint::Length(1), // 搜索输入
            Constraint::Min(1),    // 日志正文
        ])
        .split(area);

    let header = match &logs.query {
        Some(query) => Line::from(vec![
            Span::styled(format!(" {}: ", texts.logs.results_for), Styles::muted()),
            Span::styled(format!("\"{query}\""), Styles::title()),
        ]),
        None => Line::from(vec![
            Span::styled(format!(" {}: ", texts.logs.last_lines), Styles::muted()),
            Span::styled(logs.lines.to_string(), Styles::title()),
        ]),
    };
    frame.render_widget(Paragraph::new(header), rows[0]);

    if let Some(input) = &logs.search_input {
        let value = if input.is_empty() {
            Span::styled(texts.logs.search_placeholder, Styles::muted())
        } else {
            Span::styled(format!("{input}▎"), Style::default().fg(colors().highlight))
        };
        let line = Line::from(vec![
            Span::styled(format!(" {}: ", texts.logs.search), Styles::hint_key()),
            value,
        ]);
        frame.render_widget(Paragraph::new(line), rows[1]);
    }

    let body = if let Some(error) = &logs.error {
        Paragraph::new(Line::styled(
            format!(" {}: {error}", texts.common.error),
            Styles::error(),
        ))
    } else if logs.loading && logs.text.is_empty() {
        Paragraph::new(Line::styled(format!(" {}", texts.common.loading), Styles::muted()))
    } else if logs.text.trim().is_empty() {
        Paragraph::new(Line::styled(format!(" {}", texts.logs.no_logs), Styles::muted()))
    } else {
        // 日志保持原样，不自动换行
        Paragraph::new(logs.text.as_str()).scroll((logs.scroll, 0))
    };
    frame.render_widget(body, rows[2]);
}
