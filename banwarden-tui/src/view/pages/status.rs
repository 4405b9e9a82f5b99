//! 服务状态页面视图

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 标签列宽度
const LABEL_WIDTH: usize = 14;

/// 渲染服务状态页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let state = &app.status;

    let mut lines = vec![Line::from("")];

    // 服务状态
    let service = match &state.status {
        Some(status) if status.is_running() => {
            Span::styled(texts.status.running, Styles::success().add_modifier(Modifier::BOLD))
        }
        Some(_) => Span::styled(
            texts.status.stopped,
            Style::default().fg(c.warning).add_modifier(Modifier::BOLD),
        ),
        None if state.loading => Span::styled(texts.common.loading, Styles::muted()),
        None => Span::styled(texts.status.unknown, Styles::muted()),
    };
    lines.push(row(texts.status.service, service));

    if let Some(session) = &app.session {
        lines.push(row(
            texts.status.signed_in_as,
            Span::raw(session.username.clone()),
        ));
    }
    lines.push(row(
        texts.status.backend,
        Span::styled(app.backend_url.clone(), Styles::muted()),
    ));

    if state.loading || state.action_pending {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("  {}", texts.common.loading),
            Style::default().fg(c.warning),
        ));
    }

    if let Some(error) = &state.error {
        lines.push(Line::from(""));
        lines.push(Line::styled(
            format!("  {}: {error}", texts.common.error),
            Styles::error(),
        ));
    }

    // 服务返回的详细信息
    if let Some(status) = &state.status {
        if !status.details.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::styled(
                format!("  {}", texts.status.details),
                Styles::title(),
            ));
            for detail in status.details.lines() {
                lines.push(Line::from(format!("    {detail}")));
            }
        }
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn row<'a>(label: &'a str, value: Span<'a>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {label:<LABEL_WIDTH$}"), Styles::muted()),
        value,
    ])
}
