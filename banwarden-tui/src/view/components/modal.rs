//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::state::{BanField, Modal, PasswordField};
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::BanIp { .. } => render_ban_ip(frame, modal),
        Modal::ConfirmUnban { .. } => render_confirm_unban(frame, modal),
        Modal::ChangePassword { .. } => render_change_password(frame, modal),
        Modal::ChangeUsername { .. } => render_change_username(frame, modal),
        Modal::Install { .. } => render_install(frame, modal),
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 清除背景并画出带标题的边框，返回内容区域
fn modal_frame(frame: &mut Frame, area: Rect, title: &str, border: Color) -> Rect {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    )
}

fn label_line(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::styled(label.to_string(), style)
}

/// 输入框行；聚焦时带光标，`masked` 时用 `•` 代替字符
fn input_line(value: &str, focused: bool, masked: bool) -> Line<'static> {
    let shown = if masked {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let text = if focused {
        format!("  {shown}▎")
    } else {
        format!("  {shown}")
    };
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };
    Line::styled(text, style)
}

fn error_line(error: Option<&String>) -> Line<'static> {
    match error {
        Some(message) => Line::styled(format!("  {message}"), Styles::error()),
        None => Line::from(""),
    }
}

/// 底部按键提示，如 "Enter: Save | Esc: Cancel"
fn footer(pairs: &[(&str, &str)]) -> Line<'static> {
    let text = pairs
        .iter()
        .map(|(key, desc)| format!("{key}: {desc}"))
        .collect::<Vec<_>>()
        .join(" | ");
    Line::styled(format!("  {text}"), Style::default().fg(Color::DarkGray))
}

/// 渲染封禁弹窗
fn render_ban_ip(frame: &mut Frame, modal: &Modal) {
    let Modal::BanIp {
        ip,
        jail,
        focus,
        error,
    } = modal
    else {
        return;
    };

    let texts = t();
    let m = &texts.modal.ban_ip;
    let keys = &texts.hints.keys;

    let area = centered_rect(54, 13, frame.area());
    let inner = modal_frame(frame, area, m.title, Color::Cyan);

    let ip_focused = *focus == BanField::Ip;
    let jail_focused = *focus == BanField::Jail;

    let mut lines = vec![label_line(m.ip, ip_focused)];
    if ip.is_empty() && !ip_focused {
        lines.push(Line::styled(format!("  {}", m.ip_hint), Styles::muted()));
    } else {
        lines.push(input_line(ip, ip_focused, false));
    }
    lines.push(Line::from(""));

    // jail 选择
    lines.push(Line::from(vec![
        Span::styled(
            m.jail,
            if jail_focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            },
        ),
        if jail_focused {
            Span::styled(m.jail_hint, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw("")
        },
    ]));
    let arrow_style = if jail_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::from(vec![
        Span::styled("  ◀ ", arrow_style),
        Span::styled(jail.label(), Style::default().fg(Color::White)),
        Span::styled(" ▶", arrow_style),
    ]));
    lines.push(Line::from(""));
    lines.push(error_line(error.as_ref()));
    lines.push(Line::from(""));
    lines.push(footer(&[
        (keys.tab, texts.hints.actions.switch_field),
        (keys.enter, texts.hints.actions.ban),
        (keys.esc, texts.common.cancel),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染解封确认弹窗
fn render_confirm_unban(frame: &mut Frame, modal: &Modal) {
    let Modal::ConfirmUnban {
        ip,
        jail,
        confirm_focused,
    } = modal
    else {
        return;
    };

    let m = &t().modal.confirm_unban;
    let area = centered_rect(48, 9, frame.area());
    let inner = modal_frame(frame, area, m.title, Color::Red);

    let cancel_style = if *confirm_focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Black).bg(Color::White)
    };

    let confirm_style = if *confirm_focused {
        Style::default().fg(Color::Black).bg(Color::Red)
    } else {
        Style::default().fg(Color::Red)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!(" {} {ip} ?", m.message),
            Style::default().fg(Color::White),
        ),
        Line::styled(
            format!(" {} \"{}\"", m.from_jail, jail.as_str()),
            Style::default().fg(Color::Yellow),
        ),
        Line::from(""),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!(" {} ", m.cancel_button), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", m.confirm_button), confirm_style),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染修改密码弹窗
fn render_change_password(frame: &mut Frame, modal: &Modal) {
    let Modal::ChangePassword {
        current,
        new,
        focus,
        show_secrets,
        submitting,
        error,
    } = modal
    else {
        return;
    };

    let texts = t();
    let m = &texts.modal.change_password;
    let keys = &texts.hints.keys;

    let area = centered_rect(50, 13, frame.area());
    let inner = modal_frame(frame, area, m.title, Color::Cyan);

    let current_focused = *focus == PasswordField::Current;
    let new_focused = *focus == PasswordField::New;

    let mut lines = vec![
        label_line(m.current, current_focused),
        input_line(current, current_focused, !show_secrets),
        Line::from(""),
        label_line(m.new, new_focused),
        input_line(new, new_focused, !show_secrets),
        Line::from(""),
    ];
    if *submitting {
        lines.push(Line::styled(
            format!("  {}", texts.common.loading),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        lines.push(error_line(error.as_ref()));
    }
    lines.push(Line::from(""));
    lines.push(footer(&[
        (keys.tab, texts.hints.actions.switch_field),
        ("Alt+s", texts.hints.actions.show_secrets),
        (keys.enter, texts.common.save),
        (keys.esc, texts.common.cancel),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染修改用户名弹窗
fn render_change_username(frame: &mut Frame, modal: &Modal) {
    let Modal::ChangeUsername {
        username,
        submitting,
        error,
    } = modal
    else {
        return;
    };

    let texts = t();
    let m = &texts.modal.change_username;
    let keys = &texts.hints.keys;

    let area = centered_rect(50, 10, frame.area());
    let inner = modal_frame(frame, area, m.title, Color::Cyan);

    let mut lines = vec![
        label_line(m.new_username, true),
        input_line(username, true, false),
        Line::styled(format!("  {}", m.relogin_hint), Styles::muted()),
        Line::from(""),
    ];
    if *submitting {
        lines.push(Line::styled(
            format!("  {}", texts.common.loading),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        lines.push(error_line(error.as_ref()));
    }
    lines.push(Line::from(""));
    lines.push(footer(&[
        (keys.enter, texts.common.save),
        (keys.esc, texts.common.cancel),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染安装弹窗，安装输出可能较长
fn render_install(frame: &mut Frame, modal: &Modal) {
    let Modal::Install {
        password,
        show_secrets,
        running,
        result,
    } = modal
    else {
        return;
    };

    let texts = t();
    let m = &texts.modal.install;
    let keys = &texts.hints.keys;

    let area = centered_rect(70, 18, frame.area());
    let inner = modal_frame(frame, area, m.title, Color::Cyan);

    let mut lines = vec![
        Line::styled(format!("  {}", m.description), Styles::muted()),
        Line::from(""),
        label_line(m.sudo_password, !running),
        input_line(password, !running, !show_secrets),
        Line::from(""),
    ];

    // 安装结果
    if *running {
        lines.push(Line::styled(
            format!("  {}", m.installing),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        match result {
            Some(Ok(output)) => {
                for line in output.lines() {
                    lines.push(Line::styled(format!("  {line}"), Styles::success()));
                }
            }
            Some(Err(message)) => {
                lines.push(Line::styled(
                    format!("  {}: {message}", texts.common.error),
                    Styles::error(),
                ));
            }
            None => {}
        }
    }

    lines.push(Line::from(""));
    if password.is_empty() {
        if !running {
            lines.push(Line::styled(format!("  {}", m.password_required), Styles::muted()));
        }
        lines.push(footer(&[
            ("Alt+s", texts.hints.actions.show_secrets),
            (keys.esc, texts.common.close),
        ]));
    } else {
        lines.push(footer(&[
            ("Alt+s", texts.hints.actions.show_secrets),
            (keys.enter, texts.common.confirm),
            (keys.esc, texts.common.close),
        ]));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let texts = t();
    let area = centered_rect(50, 8, frame.area());
    let inner = modal_frame(frame, area, title, colors().error);

    let lines = vec![
        Line::from(""),
        Line::styled(message.to_string(), Style::default().fg(Color::White)),
        Line::from(""),
        Line::styled(
            format!(
                "{} / {}: {}",
                texts.hints.keys.esc, texts.hints.keys.enter, texts.common.close
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = t();
    let h = &texts.help;
    let a = &h.actions;
    let keys = &texts.hints.keys;

    let area = centered_rect(58, 27, frame.area());
    let inner = modal_frame(frame, area, h.title, Color::Cyan);

    let section = |title: &str| {
        Line::styled(
            title.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )
    };
    let row = |key: &str, desc: &str| {
        Line::from(vec![
            Span::styled(format!("  {key:<9}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc.to_string(), Style::default().fg(Color::White)),
        ])
    };

    let lines = vec![
        section(h.global_shortcuts),
        row(keys.tab, a.switch_panel),
        row(keys.arrows_ud, a.move_up_down),
        row(keys.enter, a.confirm),
        row(keys.esc, a.back_cancel),
        row("Alt+r", a.refresh),
        row("? Alt+h", a.help),
        row("Alt+q", a.quit),
        Line::from(""),
        section(h.ban_list_shortcuts),
        row(keys.arrows_lr, a.change_page),
        row("Alt+a", a.ban),
        row("Alt+d", a.unban),
        row("Alt+j", a.cycle_jail),
        Line::from(""),
        section(h.page_shortcuts),
        row("Alt+t/l", a.restart_reload),
        row("/ Alt+f", a.search_logs),
        row("Alt+n", a.cycle_lines),
        row("Alt+e/s", a.edit_save),
        Line::from(""),
        Line::styled(h.close_hint, Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
