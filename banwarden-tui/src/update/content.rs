//! 内容面板更新逻辑
//!
//! 按当前页面分发内容面板中的操作消息

use crate::backend::Command;
use crate::i18n::{set_language, t};
use crate::message::ContentMessage;
use crate::model::state::{LoginField, SettingItem};
use crate::model::{App, Page};
use crate::view::theme::set_theme;

use super::load_logs;

/// 处理内容面板消息
pub fn update(app: &mut App, msg: ContentMessage) {
    match app.current_page {
        Page::Login => handle_login(app, msg),
        Page::Status => handle_status(app, msg),
        Page::BanList => handle_ban_list(app, msg),
        Page::Logs => handle_logs(app, msg),
        Page::JailConfig => handle_jail_config(app, msg),
        Page::Settings => handle_settings(app, msg),
    }
}

// ========== 登录 ==========

fn handle_login(app: &mut App, msg: ContentMessage) {
    if app.login.is_busy() {
        return;
    }

    match msg {
        ContentMessage::Input(c) => {
            app.login.input(c);
            app.login.error = None;
        }
        ContentMessage::Backspace => app.login.backspace(),
        ContentMessage::NextField
        | ContentMessage::PrevField
        | ContentMessage::SelectNext
        | ContentMessage::SelectPrevious => {
            app.login.focus = app.login.focus.toggle();
        }
        ContentMessage::ToggleSecrets => {
            app.login.show_password = !app.login.show_password;
        }
        ContentMessage::Confirm => submit_login(app),
        _ => {}
    }
}

fn submit_login(app: &mut App) {
    // 用户名输完回车先跳到密码框
    if app.login.focus == LoginField::Username && app.login.password.is_empty() {
        app.login.focus = LoginField::Password;
        return;
    }

    app.login.submitting = true;
    app.login.error = None;
    app.send(Command::Login {
        username: app.login.username.trim().to_string(),
        password: app.login.password.clone(),
    });
}

// ========== 服务状态 ==========

fn handle_status(app: &mut App, msg: ContentMessage) {
    if app.status.action_pending {
        return;
    }

    let command = match msg {
        ContentMessage::Restart => Command::RestartService,
        ContentMessage::Reload => Command::ReloadService,
        _ => return,
    };
    app.status.action_pending = true;
    app.send(command);
}

// ========== 封禁列表 ==========

fn handle_ban_list(app: &mut App, msg: ContentMessage) {
    let state = &mut app.ban_list;
    match msg {
        ContentMessage::SelectPrevious => state.select_previous(),
        ContentMessage::SelectNext => state.select_next(),
        ContentMessage::SelectFirst => state.select_first(),
        ContentMessage::SelectLast => state.select_last(),
        ContentMessage::PrevPage | ContentMessage::MoveLeft => {
            state.prev_page();
        }
        ContentMessage::NextPage | ContentMessage::MoveRight => {
            state.next_page();
        }
        ContentMessage::CycleJail => state.cycle_jail(),
        ContentMessage::Add => app.modal.show_ban_ip(),
        ContentMessage::Delete | ContentMessage::Confirm => {
            let jail = state.unban_jail;
            match state.selected_ip().map(str::to_string) {
                Some(ip) => app.modal.show_confirm_unban(&ip, jail),
                None => app.set_status(t().status_bar.no_selection),
            }
        }
        _ => {}
    }
}

// ========== 日志 ==========

fn handle_logs(app: &mut App, msg: ContentMessage) {
    if let Some(input) = app.logs.search_input.as_mut() {
        match msg {
            ContentMessage::Input(c) => input.push(c),
            ContentMessage::Backspace => {
                input.pop();
            }
            ContentMessage::Confirm => {
                app.logs.submit_search();
                load_logs(app);
            }
            _ => {}
        }
        return;
    }

    match msg {
        ContentMessage::Search => app.logs.begin_search(),
        ContentMessage::CycleLines => {
            app.logs.cycle_lines();
            load_logs(app);
        }
        ContentMessage::SelectPrevious => app.logs.scroll_up(),
        ContentMessage::SelectNext => app.logs.scroll_down(),
        ContentMessage::SelectFirst => app.logs.scroll = 0,
        _ => {}
    }
}

// ========== jail.local ==========

fn handle_jail_config(app: &mut App, msg: ContentMessage) {
    let editor = &mut app.jail_config;

    if !editor.editing {
        match msg {
            ContentMessage::Edit => {
                editor.enter_edit();
            }
            ContentMessage::SelectPrevious => editor.scroll_up(),
            ContentMessage::SelectNext => editor.scroll_down(),
            ContentMessage::SelectFirst => editor.scroll = 0,
            _ => {}
        }
        return;
    }

    if editor.saving {
        return;
    }

    match msg {
        ContentMessage::Input(c) => editor.insert_char(c),
        ContentMessage::Confirm => editor.newline(),
        ContentMessage::Backspace => editor.backspace(),
        ContentMessage::SelectPrevious => editor.move_up(),
        ContentMessage::SelectNext => editor.move_down(),
        ContentMessage::MoveLeft => editor.move_left(),
        ContentMessage::MoveRight => editor.move_right(),
        ContentMessage::SelectFirst => editor.move_home(),
        ContentMessage::SelectLast => editor.move_end(),
        ContentMessage::Save => {
            editor.saving = true;
            editor.error = None;
            let content = editor.text();
            app.send(Command::SaveJailConfig { content });
        }
        _ => {}
    }
}

// ========== 设置 ==========

fn handle_settings(app: &mut App, msg: ContentMessage) {
    match msg {
        ContentMessage::SelectPrevious => app.settings.select_previous(),
        ContentMessage::SelectNext => app.settings.select_next(),
        ContentMessage::MoveLeft | ContentMessage::MoveRight => {
            if let Some(item) = app.settings.selected_item().filter(|item| item.is_toggle()) {
                toggle_setting(app, item);
            }
        }
        ContentMessage::Confirm => {
            let Some(item) = app.settings.selected_item() else {
                return;
            };
            match item {
                SettingItem::Theme | SettingItem::Language => toggle_setting(app, item),
                SettingItem::ChangeUsername => app.modal.show_change_username(),
                SettingItem::ChangePassword => app.modal.show_change_password(),
                SettingItem::Install => app.modal.show_install(),
                SettingItem::Logout => app.send(Command::Logout),
            }
        }
        _ => {}
    }
}

/// 主题和语言都只有两个选项，左右切换等价
fn toggle_setting(app: &mut App, item: SettingItem) {
    match item {
        SettingItem::Theme => {
            app.settings.theme = app.settings.theme.next();
            set_theme(app.settings.theme);
        }
        SettingItem::Language => {
            app.settings.language = app.settings.language.next();
            set_language(app.settings.language);
        }
        _ => return,
    }
    app.config_dirty = true;
}
