//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

const SEPARATOR: &str = " │ ";

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    // 根据当前焦点和页面生成快捷键提示
    let hints = get_hints(app);

    // 构建状态栏内容
    let mut spans = Vec::new();
    let mut used = 0;

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
            used += SEPARATOR.width();
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
        used += key.width() + 1 + desc.width();
    }

    // 状态消息显示在提示之后，超出部分截断
    let message = app
        .status_message
        .as_deref()
        .unwrap_or(t().status_bar.ready);
    let available = usize::from(area.width).saturating_sub(used + SEPARATOR.width());
    if available > 0 {
        spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(
            truncate_to_width(message, available),
            Style::default().fg(Color::Yellow),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 按显示宽度截断，超出时以 `…` 结尾
fn truncate_to_width(text: &str, max: usize) -> String {
    // 后端消息可能带换行
    let text = text.lines().next().unwrap_or_default();
    if text.width() <= max {
        return text.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    let mut hints = Vec::new();

    if app.current_page.is_login() {
        hints.push((keys.tab, actions.switch_field));
        hints.push((keys.enter, actions.login));
        hints.push(("Alt+s", actions.show_secrets));
        hints.push(("Alt+q", actions.quit));
        return hints;
    }

    // 根据焦点位置显示不同的快捷键
    match app.focus {
        FocusPanel::Navigation => {
            hints.push((keys.arrows_ud, actions.navigate));
            hints.push((keys.enter, actions.open));
        }
        FocusPanel::Content => match app.current_page {
            Page::Status => {
                hints.push(("Alt+t", actions.restart));
                hints.push(("Alt+l", actions.reload));
                hints.push(("Alt+r", actions.refresh));
            }
            Page::BanList => {
                hints.push((keys.arrows_ud, actions.select));
                hints.push((keys.arrows_lr, actions.page));
                hints.push(("Alt+a", actions.ban));
                hints.push(("Alt+d", actions.unban));
                hints.push(("Alt+j", actions.jail));
            }
            Page::Logs if app.logs.is_searching() => {
                hints.push((keys.enter, actions.search));
                hints.push((keys.esc, actions.cancel));
            }
            Page::Logs => {
                hints.push(("/", actions.search));
                hints.push(("Alt+n", actions.lines));
                hints.push((keys.arrows_ud, actions.scroll));
            }
            Page::JailConfig if app.jail_config.editing => {
                hints.push(("Alt+s", actions.save));
                hints.push((keys.esc, actions.cancel));
            }
            Page::JailConfig => {
                hints.push(("Alt+e", actions.edit));
                hints.push((keys.arrows_ud, actions.scroll));
            }
            Page::Settings => {
                hints.push((keys.arrows_ud, actions.select));
                hints.push((keys.arrows_lr, actions.change));
                hints.push((keys.enter, actions.open));
            }
            Page::Login => {}
        },
    }

    hints.push((keys.tab, actions.switch_panel));
    hints.push(("?", actions.help));
    hints.push(("Alt+q", actions.quit));
    hints
}
