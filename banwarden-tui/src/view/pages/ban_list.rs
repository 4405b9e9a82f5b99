//! 封禁列表页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染封禁列表页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // 列表
            Constraint::Length(1), // 提示/错误
            Constraint::Length(1), // 分页信息
        ])
        .split(area);

    if app.ban_list.visible().is_empty() {
        render_empty(app, frame, rows[0]);
    } else {
        render_list(app, frame, rows[0]);
    }

    render_notice(app, frame, rows[1]);
    render_pager(app, frame, rows[2]);
}

/// 页码、总数和当前解封 jail
fn render_pager(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let paginator = &app.ban_list.list.paginator;

    // 到头时翻页按钮置灰
    let arrow = |enabled: bool| {
        if enabled {
            Styles::hint_key()
        } else {
            Styles::muted()
        }
    };

    let line = Line::from(vec![
        Span::styled(" ◀", arrow(paginator.has_prev())),
        Span::styled(
            format!(
                " {} {} {} {} ",
                texts.ban_list.page,
                paginator.page(),
                texts.ban_list.of,
                paginator.total_pages()
            ),
            Styles::title(),
        ),
        Span::styled("▶", arrow(paginator.has_next())),
        Span::styled(
            format!("  ({} {})", paginator.len(), texts.ban_list.total),
            Styles::muted(),
        ),
        Span::styled(format!("   {}: ", texts.ban_list.unban_jail), Styles::muted()),
        Span::styled(
            app.ban_list.unban_jail.label(),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// 渲染空状态
fn render_empty(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let message = if app.ban_list.list.loading {
        texts.common.loading
    } else {
        texts.ban_list.no_banned
    };
    let content = vec![
        Line::from(""),
        Line::styled(format!("  {message}"), Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

/// 渲染当前页的地址
fn render_list(app: &App, frame: &mut Frame, area: Rect) {
    let offset = app.ban_list.list.paginator.window_offset();
    let items: Vec<ListItem> = app
        .ban_list
        .visible()
        .iter()
        .enumerate()
        .map(|(i, ip)| {
            let style = if i == app.ban_list.selected {
                Styles::selected()
            } else {
                Style::default().fg(colors().fg)
            };

            let line = Line::from(vec![
                Span::styled(format!("  {:>3}. ", offset + i + 1), Styles::muted()),
                Span::styled(ip.as_str(), style),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default());

    let mut state = ListState::default();
    state.select(Some(app.ban_list.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// 最近一次错误，或者加载中提示
fn render_notice(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let list = &app.ban_list.list;

    let line = if let Some(error) = &list.last_error {
        Line::styled(format!(" {}: {error}", texts.common.error), Styles::error())
    } else if list.loading && !list.paginator.is_empty() {
        Line::styled(format!(" {}", texts.common.loading), Styles::muted())
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line), area);
}
