//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::state::{BanField, Modal};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        _ => AppMessage::Noop, // 终端窗口大小改变时下一轮自动重绘
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 登录页只有表单
    if app.current_page.is_login() {
        return handle_login_keys(key);
    }

    // 文本输入模式下，普通字符（包括 `?`）都作为输入
    if app.focus.is_content() {
        if app.current_page == Page::Logs && app.logs.is_searching() {
            return handle_search_input_keys(key);
        }
        if app.current_page == Page::JailConfig && app.jail_config.editing {
            return handle_editor_keys(key);
        }
    }

    // 全局快捷键（无论焦点在哪里）
    if DefaultKeymap::HELP.matches(&key) || (is_plain(&key) && key.code == KeyCode::Char('?')) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    // Tab: 切换焦点面板
    if key.modifiers.is_empty() && key.code == KeyCode::Tab {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 无修饰键或只按了 Shift（大写字母、符号）
fn is_plain(key: &KeyEvent) -> bool {
    key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT
}

/// 可作为文本输入的字符
fn text_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(ch) if is_plain(key) => Some(ch),
        _ => None,
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => {
            AppMessage::Navigation(NavigationMessage::SelectNext)
        }

        // Enter: 确认选择
        KeyCode::Enter => AppMessage::Navigation(NavigationMessage::Confirm),

        // Home: 跳到第一项
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),

        // End: 跳到最后一项
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理登录表单的按键
fn handle_login_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::TOGGLE_SECRETS.matches(&key) {
        return AppMessage::Content(ContentMessage::ToggleSecrets);
    }
    if let Some(ch) = text_char(&key) {
        return AppMessage::Content(ContentMessage::Input(ch));
    }

    let msg = match key.code {
        KeyCode::Tab | KeyCode::Down => ContentMessage::NextField,
        KeyCode::BackTab | KeyCode::Up => ContentMessage::PrevField,
        KeyCode::Enter => ContentMessage::Confirm,
        KeyCode::Backspace => ContentMessage::Backspace,
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

/// 日志搜索输入
fn handle_search_input_keys(key: KeyEvent) -> AppMessage {
    if let Some(ch) = text_char(&key) {
        return AppMessage::Content(ContentMessage::Input(ch));
    }
    match key.code {
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        KeyCode::Esc => AppMessage::GoBack,
        _ => AppMessage::Noop,
    }
}

/// jail.local 编辑模式
fn handle_editor_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SAVE.matches(&key) {
        return AppMessage::Content(ContentMessage::Save);
    }
    if let Some(ch) = text_char(&key) {
        return AppMessage::Content(ContentMessage::Input(ch));
    }

    let msg = match key.code {
        KeyCode::Esc => return AppMessage::GoBack,
        KeyCode::Tab => return AppMessage::ToggleFocus,
        KeyCode::Enter => ContentMessage::Confirm,
        KeyCode::Backspace => ContentMessage::Backspace,
        KeyCode::Up => ContentMessage::SelectPrevious,
        KeyCode::Down => ContentMessage::SelectNext,
        KeyCode::Left => ContentMessage::MoveLeft,
        KeyCode::Right => ContentMessage::MoveRight,
        KeyCode::Home => ContentMessage::SelectFirst,
        KeyCode::End => ContentMessage::SelectLast,
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match &app.current_page {
        Page::Status => handle_status_keys(key),
        Page::BanList => handle_ban_list_keys(key),
        Page::Logs => handle_logs_keys(key),
        Page::JailConfig => handle_jail_config_keys(key),
        Page::Settings => handle_settings_keys(key),
        Page::Login => AppMessage::Noop,
    }
}

/// 处理服务状态页的按键
fn handle_status_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::RESTART.matches(&key) {
        return AppMessage::Content(ContentMessage::Restart);
    }
    if DefaultKeymap::RELOAD.matches(&key) {
        return AppMessage::Content(ContentMessage::Reload);
    }
    AppMessage::Noop
}

/// 处理封禁列表的按键
fn handle_ban_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::BAN.matches(&key) {
        return AppMessage::Content(ContentMessage::Add);
    }
    if DefaultKeymap::UNBAN.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }
    if DefaultKeymap::CYCLE_JAIL.matches(&key) {
        return AppMessage::Content(ContentMessage::CycleJail);
    }

    match key.code {
        // ↑ 或 k: 上一项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // ← / PgUp: 上一页
        KeyCode::Left | KeyCode::PageUp => AppMessage::Content(ContentMessage::PrevPage),
        // → / PgDn: 下一页
        KeyCode::Right | KeyCode::PageDown => AppMessage::Content(ContentMessage::NextPage),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        KeyCode::End => AppMessage::Content(ContentMessage::SelectLast),
        // Enter: 解封选中项
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// 处理日志页的按键
fn handle_logs_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SEARCH.matches(&key) || (is_plain(&key) && key.code == KeyCode::Char('/'))
    {
        return AppMessage::Content(ContentMessage::Search);
    }
    if DefaultKeymap::CYCLE_LINES.matches(&key) {
        return AppMessage::Content(ContentMessage::CycleLines);
    }
    handle_scroll_keys(key)
}

/// 处理 jail.local 只读模式的按键
fn handle_jail_config_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::EDIT.matches(&key) {
        return AppMessage::Content(ContentMessage::Edit);
    }
    handle_scroll_keys(key)
}

fn handle_scroll_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Home => AppMessage::Content(ContentMessage::SelectFirst),
        _ => AppMessage::Noop,
    }
}

/// 处理设置页面的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上一个设置项
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        // ↓ 或 j: 下一个设置项
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        // ← →: 切换取值
        KeyCode::Left => AppMessage::Content(ContentMessage::MoveLeft),
        KeyCode::Right => AppMessage::Content(ContentMessage::MoveRight),
        // Enter: 打开弹窗或执行
        KeyCode::Enter => AppMessage::Content(ContentMessage::Confirm),
        _ => AppMessage::Noop,
    }
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc 和 Ctrl+C 始终可以关闭弹窗
    if DefaultKeymap::BACK.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    // 根据弹窗类型处理按键
    let Some(ref modal) = app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::BanIp { focus, .. } => handle_ban_ip_keys(key, *focus),
        Modal::ConfirmUnban { .. } => handle_confirm_unban_keys(key),
        Modal::ChangePassword { .. } => handle_text_form_keys(key, true),
        Modal::ChangeUsername { .. } | Modal::Install { .. } => handle_text_form_keys(key, false),
        Modal::Help | Modal::Error { .. } => {
            // 帮助和错误弹窗只响应关闭按键
            match key.code {
                KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
                _ => AppMessage::Noop,
            }
        }
    }
}

/// 处理封禁弹窗的按键
fn handle_ban_ip_keys(key: KeyEvent, focus: BanField) -> AppMessage {
    if let Some(ch) = text_char(&key) {
        // 只有 IP 字段接受文本
        return if focus == BanField::Ip {
            AppMessage::Modal(ModalMessage::Input(ch))
        } else {
            AppMessage::Noop
        };
    }

    let msg = match key.code {
        KeyCode::Tab | KeyCode::Down => ModalMessage::NextField,
        KeyCode::BackTab | KeyCode::Up => ModalMessage::PrevField,
        KeyCode::Left => ModalMessage::PrevOption,
        KeyCode::Right => ModalMessage::NextOption,
        KeyCode::Enter => ModalMessage::Confirm,
        KeyCode::Backspace => ModalMessage::Backspace,
        _ => return AppMessage::Noop,
    };
    AppMessage::Modal(msg)
}

/// 处理解封确认弹窗的按键
fn handle_confirm_unban_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // Tab 或 ← →: 切换焦点
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Modal(ModalMessage::ToggleConfirmFocus)
        }

        // Enter: 确认
        KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),

        _ => AppMessage::Noop,
    }
}

/// 文本表单弹窗（修改密码、修改用户名、安装）
fn handle_text_form_keys(key: KeyEvent, multi_field: bool) -> AppMessage {
    if DefaultKeymap::TOGGLE_SECRETS.matches(&key) {
        return AppMessage::Modal(ModalMessage::ToggleSecrets);
    }
    if let Some(ch) = text_char(&key) {
        return AppMessage::Modal(ModalMessage::Input(ch));
    }

    let msg = match key.code {
        KeyCode::Tab | KeyCode::Down if multi_field => ModalMessage::NextField,
        KeyCode::BackTab | KeyCode::Up if multi_field => ModalMessage::PrevField,
        KeyCode::Enter => ModalMessage::Confirm,
        KeyCode::Backspace => ModalMessage::Backspace,
        _ => return AppMessage::Noop,
    };
    AppMessage::Modal(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use banwarden_core::types::Session;

    use crate::backend::AppConfig;
    use crate::model::FocusPanel;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn alt(ch: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::ALT))
    }

    fn app_on(page: Page) -> App {
        let mut app = App::new(&AppConfig::default());
        app.session = Some(Session {
            username: "admin".into(),
        });
        app.current_page = page;
        app.focus = FocusPanel::Content;
        app
    }

    #[test]
    fn login_page_treats_letters_as_input() {
        let app = App::new(&AppConfig::default());
        assert!(matches!(
            handle_event(press(KeyCode::Char('?')), &app),
            AppMessage::Content(ContentMessage::Input('?'))
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Tab), &app),
            AppMessage::Content(ContentMessage::NextField)
        ));
        assert!(matches!(handle_event(alt('q'), &app), AppMessage::Quit));
    }

    #[test]
    fn ban_list_shortcuts() {
        let app = app_on(Page::BanList);
        assert!(matches!(
            handle_event(alt('a'), &app),
            AppMessage::Content(ContentMessage::Add)
        ));
        assert!(matches!(
            handle_event(alt('d'), &app),
            AppMessage::Content(ContentMessage::Delete)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::PageDown), &app),
            AppMessage::Content(ContentMessage::NextPage)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('?')), &app),
            AppMessage::ShowHelp
        ));
    }

    #[test]
    fn editor_captures_plain_keys() {
        let mut app = app_on(Page::JailConfig);
        app.jail_config.set_loaded(String::new());
        app.jail_config.enter_edit();

        assert!(matches!(
            handle_event(press(KeyCode::Char('?')), &app),
            AppMessage::Content(ContentMessage::Input('?'))
        ));
        assert!(matches!(
            handle_event(alt('s'), &app),
            AppMessage::Content(ContentMessage::Save)
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Esc), &app),
            AppMessage::GoBack
        ));
    }

    #[test]
    fn jail_field_ignores_text() {
        let mut app = app_on(Page::BanList);
        app.modal.show_ban_ip();
        if let Some(Modal::BanIp { focus, .. }) = &mut app.modal.active {
            *focus = BanField::Jail;
        }
        assert!(matches!(
            handle_event(press(KeyCode::Char('1')), &app),
            AppMessage::Noop
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Right), &app),
            AppMessage::Modal(ModalMessage::NextOption)
        ));
    }

    #[test]
    fn release_events_are_ignored() {
        let app = app_on(Page::Status);
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT);
        key.kind = KeyEventKind::Release;
        assert!(matches!(
            handle_event(Event::Key(key), &app),
            AppMessage::Noop
        ));
    }
}
