//! 登录页面视图

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::state::LoginField;
use crate::model::App;
use crate::view::theme::{colors, Styles};

const FORM_WIDTH: u16 = 46;
const FORM_HEIGHT: u16 = 14;

/// 渲染登录页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let login = &app.login;

    let form_area = centered(area);
    let block = Block::default()
        .title(format!(" {} ", texts.login.title))
        .title_alignment(Alignment::Center)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(true));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 副标题
            Constraint::Length(3), // 用户名
            Constraint::Length(3), // 密码
            Constraint::Min(1),    // 状态/错误
        ])
        .split(inner);

    let subtitle = Paragraph::new(vec![
        Line::styled(texts.login.subtitle, Styles::muted()),
        Line::styled(app.backend_url.as_str(), Styles::muted()),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, rows[0]);

    let password_display = if login.show_password {
        login.password.clone()
    } else {
        "•".repeat(login.password.chars().count())
    };

    render_field(
        frame,
        rows[1],
        texts.login.username,
        &login.username,
        login.focus == LoginField::Username && !login.is_busy(),
    );
    render_field(
        frame,
        rows[2],
        texts.login.password,
        &password_display,
        login.focus == LoginField::Password && !login.is_busy(),
    );

    // 进行中的请求优先于上一次的错误
    let status = if login.checking {
        Line::styled(texts.login.checking_session, Style::default().fg(c.warning))
    } else if login.submitting {
        Line::styled(texts.login.logging_in, Style::default().fg(c.warning))
    } else if let Some(error) = &login.error {
        Line::styled(error.as_str(), Styles::error())
    } else {
        Line::from(vec![
            Span::styled(texts.hints.keys.enter, Styles::hint_key()),
            Span::raw(" "),
            Span::styled(texts.hints.actions.login, Styles::muted()),
        ])
    };
    let status = Paragraph::new(vec![Line::from(""), status]).alignment(Alignment::Center);
    frame.render_widget(status, rows[3]);
}

/// 带边框的单行输入框
fn render_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let c = colors();
    let text = if focused {
        format!("{value}▎")
    } else {
        value.to_string()
    };
    let title_style = if focused {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Styles::muted()
    };

    let field = Paragraph::new(text).block(
        Block::default()
            .title(format!(" {label} "))
            .title_style(title_style)
            .borders(Borders::ALL)
            .border_style(Styles::border(focused)),
    );
    frame.render_widget(field, area);
}

/// 把表单放在区域中央
fn centered(area: Rect) -> Rect {
    let width = FORM_WIDTH.min(area.width);
    let height = FORM_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
