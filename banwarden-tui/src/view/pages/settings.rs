//! 设置页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::state::SettingItem;
use crate::model::App;
use crate::view::theme::{colors, Styles, Theme};

/// 设置项的标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 20;
/// 值区域的宽度（包含 < > 符号）
const VALUE_WIDTH: usize = 20;

/// 渲染设置页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let settings = &app.settings;
    let selected = settings.selected_item();

    let mut lines = vec![Line::from(""), section_line(texts.settings.appearance)];

    for item in SettingItem::all() {
        let is_selected = selected == Some(*item);
        match item {
            SettingItem::Theme => {
                let theme_value = match settings.theme {
                    Theme::Dark => texts.settings.theme.dark,
                    Theme::Light => texts.settings.theme.light,
                };
                lines.push(render_setting_row(
                    texts.settings.theme.label,
                    theme_value,
                    is_selected,
                ));
            }
            SettingItem::Language => {
                let mut row = render_setting_row(
                    texts.settings.language.label,
                    settings.language.display_name(),
                    is_selected,
                );
                row.spans.push(Span::styled(
                    format!("  {}", texts.settings.language.description),
                    Styles::muted(),
                ));
                lines.push(row);
                lines.push(Line::from(""));
                lines.push(section_line(texts.settings.account));
            }
            SettingItem::ChangeUsername => lines.push(render_action_row(
                texts.settings.change_username,
                is_selected,
                false,
            )),
            SettingItem::ChangePassword => lines.push(render_action_row(
                texts.settings.change_password,
                is_selected,
                false,
            )),
            SettingItem::Install => lines.push(render_action_row(
                texts.settings.install,
                is_selected,
                false,
            )),
            SettingItem::Logout => lines.push(render_action_row(
                texts.settings.logout,
                is_selected,
                true,
            )),
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(""));

    // 操作提示
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;
    lines.push(Line::from(vec![
        Span::styled(format!("  {}", keys.arrows_ud), Styles::hint_key()),
        Span::styled(format!(" {} | ", actions.select), Styles::muted()),
        Span::styled(keys.arrows_lr, Styles::hint_key()),
        Span::styled(format!(" {} | ", actions.change), Styles::muted()),
        Span::styled(keys.enter, Styles::hint_key()),
        Span::styled(format!(" {}", actions.open), Styles::muted()),
    ]));

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, area);
}

fn section_line(title: &str) -> Line<'_> {
    Line::styled(format!("  {title}"), Styles::title())
}

/// 渲染单行设置项
fn render_setting_row<'a>(label: &'a str, value: &'a str, is_selected: bool) -> Line<'a> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };

    let value_style = if is_selected {
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    // 使用 unicode-width 计算显示宽度
    let label_padding = LABEL_WIDTH.saturating_sub(label.width());

    // 值居中显示在 ◀ ▶ 之间
    let value_width = value.width();
    let available_space = VALUE_WIDTH.saturating_sub(4);
    let left_padding = available_space.saturating_sub(value_width) / 2;
    let right_padding = available_space
        .saturating_sub(value_width)
        .saturating_sub(left_padding);

    let (left_arrow, right_arrow) = if is_selected {
        ("◀ ", " ▶")
    } else {
        // 未选中时用空白占位，保持对齐
        ("  ", "  ")
    };

    Line::from(vec![
        Span::styled(prefix, label_style),
        Span::styled(format!("  {label}"), label_style),
        Span::raw(" ".repeat(label_padding)),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(left_arrow, Style::default().fg(Color::Yellow)),
        Span::raw(" ".repeat(left_padding)),
        Span::styled(value, value_style),
        Span::raw(" ".repeat(right_padding)),
        Span::styled(right_arrow, Style::default().fg(Color::Yellow)),
    ])
}

/// 按 Enter 执行的设置项
fn render_action_row(label: &str, is_selected: bool, destructive: bool) -> Line<'_> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };
    let style = match (is_selected, destructive) {
        (true, true) => Styles::error().add_modifier(Modifier::BOLD),
        (true, false) => Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
        (false, _) => Style::default().fg(c.muted),
    };

    Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(format!("  {label}"), style),
    ])
}
