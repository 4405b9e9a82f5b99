//! 后端结果处理
//!
//! 每条 BackendEvent 都在这里一次性应用到 Model。

use banwarden_core::types::{MutationOutcome, Session};
use banwarden_core::CoreError;

use crate::backend::Command;
use crate::i18n::t;
use crate::message::BackendEvent;
use crate::model::state::Modal;
use crate::model::{App, FocusPanel, Page};

use super::{load_page, open_page};

/// 处理后端结果
pub fn update(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::SessionRestored(result) => {
            app.login.checking = false;
            match result {
                Ok(session) => enter_session(app, session),
                // 没有保存的会话：停留在登录页
                Err(e) if e.requires_login() => {}
                Err(e) => app.login.error = Some(e.user_message(&e.to_string())),
            }
        }

        BackendEvent::LoggedIn(result) => {
            app.login.submitting = false;
            match result {
                Ok(session) => {
                    app.login.password.clear();
                    enter_session(app, session);
                    app.set_status(t().status_bar.logged_in);
                }
                Err(e) => app.login.error = Some(e.user_message("Login failed")),
            }
        }

        BackendEvent::LoggedOut(result) => {
            if let Err(e) = result {
                log::warn!("Failed to clear stored session: {e}");
            }
            leave_session(app);
            app.set_status(t().status_bar.logged_out);
        }

        BackendEvent::Status(result) => {
            app.status.loading = false;
            match result {
                Ok(status) => {
                    app.status.status = Some(status);
                    app.status.error = None;
                }
                Err(e) => {
                    if expire_if_needed(app, &e) {
                        return;
                    }
                    app.status.error = Some(e.user_message("Failed to fetch status"));
                }
            }
        }

        BackendEvent::ServiceAction(result) => {
            app.status.action_pending = false;
            match result {
                Ok(message) => {
                    app.set_status(message);
                    load_page(app, Page::Status);
                }
                Err(e) => {
                    if expire_if_needed(app, &e) {
                        return;
                    }
                    let message = e.user_message(&e.to_string());
                    if e.is_expected() {
                        log::warn!("Service action rejected: {e}");
                        app.set_status(message);
                    } else {
                        // 重启失败时服务可能已停，弹窗提示
                        log::error!("Service action failed: {e}");
                        app.modal.show_error(t().common.error, &message);
                    }
                }
            }
        }

        BackendEvent::BannedList(result) => {
            if let Err(e) = &result {
                if expire_if_needed(app, e) {
                    app.ban_list.list.loading = false;
                    return;
                }
            }
            app.ban_list.apply_fetch(result);
            if let Some(error) = &app.ban_list.list.last_error {
                app.status_message = Some(error.clone());
            }
        }

        BackendEvent::Mutation(result) => {
            if let Err(e) = &result {
                if expire_if_needed(app, e) {
                    return;
                }
            }
            match app.ban_list.list.apply_mutation(result) {
                MutationOutcome::Refetch => {
                    app.status_message = app.ban_list.list.last_message.clone();
                    load_page(app, Page::BanList);
                }
                MutationOutcome::Unchanged => {
                    app.status_message = app.ban_list.list.last_error.clone();
                }
            }
        }

        BackendEvent::Logs(result) => {
            app.logs.loading = false;
            match result {
                Ok(text) => app.logs.set_text(text),
                Err(e) => {
                    if expire_if_needed(app, &e) {
                        return;
                    }
                    app.logs.error = Some(e.user_message("Failed to fetch logs"));
                }
            }
        }

        BackendEvent::JailConfigLoaded(result) => {
            app.jail_config.loading = false;
            match result {
                // 加载期间进入了编辑模式时不覆盖缓冲区
                Ok(_) if app.jail_config.editing => {}
                Ok(content) => app.jail_config.set_loaded(content),
                Err(e) => {
                    if expire_if_needed(app, &e) {
                        return;
                    }
                    app.jail_config.error = Some(e.user_message("Failed to load jail.local"));
                }
            }
        }

        BackendEvent::JailConfigSaved { content, result } => match result {
            Ok(()) => {
                app.jail_config.saved(content);
                app.set_status(t().status_bar.jail_config_saved);
            }
            Err(e) => {
                app.jail_config.saving = false;
                if expire_if_needed(app, &e) {
                    return;
                }
                // 保持编辑模式，内容不丢失
                app.jail_config.error = Some(e.user_message("Failed to save jail.local"));
            }
        },

        BackendEvent::PasswordChanged(result) => match result {
            Ok(()) => {
                close_modal_if(app, |m| matches!(m, Modal::ChangePassword { .. }));
                app.set_status(t().status_bar.password_changed);
            }
            Err(e) => {
                if expire_if_needed(app, &e) {
                    return;
                }
                if let Some(Modal::ChangePassword {
                    submitting, error, ..
                }) = &mut app.modal.active
                {
                    *submitting = false;
                    *error = Some(e.user_message("Failed to change password"));
                }
            }
        },

        BackendEvent::UsernameChanged(result) => match result {
            Ok(()) => {
                // 旧 token 的 sub 仍是旧用户名，要求重新登录
                close_modal_if(app, |m| matches!(m, Modal::ChangeUsername { .. }));
                app.send(Command::Logout);
                app.set_status(t().status_bar.username_changed);
            }
            Err(e) => {
                if expire_if_needed(app, &e) {
                    return;
                }
                if let Some(Modal::ChangeUsername {
                    submitting, error, ..
                }) = &mut app.modal.active
                {
                    *submitting = false;
                    *error = Some(e.user_message("Failed to change username"));
                }
            }
        },

        BackendEvent::Installed(result) => {
            if let Some(Modal::Install {
                running,
                result: slot,
                ..
            }) = &mut app.modal.active
            {
                *running = false;
                *slot = Some(result.map_err(|e| e.user_message(&e.to_string())));
            } else if let Ok(message) = result {
                app.set_status(message);
            }
        }
    }
}

/// 进入已登录状态，默认打开服务状态页
fn enter_session(app: &mut App, session: Session) {
    log::info!("Session active for {}", session.username);
    app.session = Some(session);
    app.login.error = None;
    app.focus = FocusPanel::Navigation;
    open_page(app, Page::Status);
}

/// 回到登录页
fn leave_session(app: &mut App) {
    app.session = None;
    app.modal.close();
    app.login.reset();
    app.jail_config.cancel_edit();
    app.focus = FocusPanel::Navigation;
    app.current_page = Page::Login;
}

/// 会话失效时回到登录页，返回是否已处理
fn expire_if_needed(app: &mut App, err: &CoreError) -> bool {
    if !err.requires_login() {
        return false;
    }
    if app.session.is_some() {
        leave_session(app);
        app.set_status(t().status_bar.session_expired);
    }
    true
}

fn close_modal_if(app: &mut App, predicate: impl Fn(&Modal) -> bool) {
    if app.modal.active.as_ref().is_some_and(predicate) {
        app.modal.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use banwarden_client::ApiError;

    use crate::backend::AppConfig;

    fn ips(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("198.51.100.{i}")).collect()
    }

    fn unauthorized() -> CoreError {
        CoreError::Api(ApiError::Unauthorized { detail: None })
    }

    fn signed_in() -> App {
        let mut app = App::new(&AppConfig::default());
        update(
            &mut app,
            BackendEvent::SessionRestored(Ok(Session {
                username: "admin".into(),
            })),
        );
        app.take_commands();
        app
    }

    fn on_ban_list(n: usize) -> App {
        let mut app = signed_in();
        app.current_page = Page::BanList;
        app.focus = FocusPanel::Content;
        update(&mut app, BackendEvent::BannedList(Ok(ips(n))));
        app
    }

    #[test]
    fn restored_session_opens_status_page() {
        let mut app = App::new(&AppConfig::default());
        app.take_commands();
        update(
            &mut app,
            BackendEvent::SessionRestored(Ok(Session {
                username: "admin".into(),
            })),
        );
        assert!(!app.login.checking);
        assert_eq!(app.current_page, Page::Status);
        assert_eq!(app.take_commands(), vec![Command::FetchStatus]);
    }

    #[test]
    fn missing_session_stays_on_login_quietly() {
        let mut app = App::new(&AppConfig::default());
        update(&mut app, BackendEvent::SessionRestored(Err(CoreError::NotLoggedIn)));
        assert_eq!(app.current_page, Page::Login);
        assert!(app.login.error.is_none());
        assert!(!app.login.checking);
    }

    #[test]
    fn failed_login_shows_backend_detail() {
        let mut app = App::new(&AppConfig::default());
        app.login.submitting = true;
        update(
            &mut app,
            BackendEvent::LoggedIn(Err(CoreError::Api(ApiError::Unauthorized {
                detail: Some("Incorrect username or password".into()),
            }))),
        );
        assert!(!app.login.submitting);
        assert_eq!(
            app.login.error.as_deref(),
            Some("Incorrect username or password")
        );
        assert_eq!(app.current_page, Page::Login);
    }

    #[test]
    fn unban_on_last_page_refetches_and_resets_to_first_page() {
        let mut app = on_ban_list(12);
        while app.ban_list.next_page() {}
        assert_eq!(app.ban_list.list.paginator.page(), 3);
        assert_eq!(app.ban_list.visible(), &ips(12)[10..12]);

        update(
            &mut app,
            BackendEvent::Mutation(Ok("IP 198.51.100.12 has been unbanned".into())),
        );
        assert_eq!(app.take_commands(), vec![Command::FetchBanned]);
        assert!(app.ban_list.list.loading);
        // 结果到达前旧窗口保持可见
        assert_eq!(app.ban_list.list.paginator.page(), 3);
        assert_eq!(
            app.status_message.as_deref(),
            Some("IP 198.51.100.12 has been unbanned")
        );

        update(&mut app, BackendEvent::BannedList(Ok(ips(11))));
        assert!(!app.ban_list.list.loading);
        assert_eq!(app.ban_list.list.paginator.page(), 1);
        assert_eq!(app.ban_list.visible(), &ips(11)[0..5]);
    }

    #[test]
    fn failed_mutation_keeps_page_and_skips_refetch() {
        let mut app = on_ban_list(12);
        app.ban_list.next_page();
        update(
            &mut app,
            BackendEvent::Mutation(Err(CoreError::Api(ApiError::HttpStatus {
                status: 500,
                detail: Some("fail2ban-client exited with 255".into()),
            }))),
        );
        assert!(app.commands.is_empty());
        assert_eq!(app.ban_list.list.paginator.page(), 2);
        assert_eq!(
            app.status_message.as_deref(),
            Some("fail2ban-client exited with 255")
        );
    }

    #[test]
    fn failed_fetch_keeps_stale_window() {
        let mut app = on_ban_list(12);
        app.ban_list.next_page();
        update(
            &mut app,
            BackendEvent::BannedList(Err(CoreError::Api(ApiError::NetworkError {
                detail: "connection refused".into(),
            }))),
        );
        assert_eq!(app.ban_list.list.paginator.page(), 2);
        assert_eq!(app.ban_list.list.paginator.len(), 12);
        assert!(app.ban_list.list.last_error.is_some());
    }

    #[test]
    fn unauthorized_result_returns_to_login() {
        let mut app = on_ban_list(3);
        app.modal.show_ban_ip();
        update(&mut app, BackendEvent::BannedList(Err(unauthorized())));

        assert!(app.session.is_none());
        assert_eq!(app.current_page, Page::Login);
        assert!(!app.modal.is_open());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn service_action_refreshes_status() {
        let mut app = signed_in();
        app.status.action_pending = true;
        update(
            &mut app,
            BackendEvent::ServiceAction(Ok("Fail2Ban restarted successfully".into())),
        );
        assert!(!app.status.action_pending);
        assert_eq!(app.take_commands(), vec![Command::FetchStatus]);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Fail2Ban restarted successfully")
        );
    }

    #[test]
    fn unreachable_daemon_on_restart_opens_error_modal() {
        let mut app = signed_in();
        app.status.action_pending = true;
        update(
            &mut app,
            BackendEvent::ServiceAction(Err(CoreError::Api(ApiError::NetworkError {
                detail: "connection refused".into(),
            }))),
        );
        assert!(!app.status.action_pending);
        assert!(matches!(
            &app.modal.active,
            Some(Modal::Error { message, .. }) if message.contains("connection refused")
        ));
        assert!(app.take_commands().is_empty());
    }

    #[test]
    fn failed_save_stays_in_edit_mode() {
        let mut app = signed_in();
        app.jail_config.set_loaded("[DEFAULT]".into());
        app.jail_config.enter_edit();
        app.jail_config.insert_char('#');
        app.jail_config.saving = true;
        let content = app.jail_config.text();

        update(
            &mut app,
            BackendEvent::JailConfigSaved {
                content,
                result: Err(CoreError::Api(ApiError::HttpStatus {
                    status: 500,
                    detail: None,
                })),
            },
        );
        assert!(app.jail_config.editing);
        assert!(!app.jail_config.saving);
        assert_eq!(app.jail_config.text(), "#[DEFAULT]");
        assert!(app.jail_config.error.is_some());
    }

    #[test]
    fn username_change_forces_logout() {
        let mut app = signed_in();
        app.modal.show_change_username();
        update(&mut app, BackendEvent::UsernameChanged(Ok(())));
        assert!(!app.modal.is_open());
        assert_eq!(app.take_commands(), vec![Command::Logout]);

        update(&mut app, BackendEvent::LoggedOut(Ok(())));
        assert!(app.session.is_none());
        assert_eq!(app.current_page, Page::Login);
    }

    #[test]
    fn install_result_lands_in_modal() {
        let mut app = signed_in();
        app.modal.show_install();
        if let Some(Modal::Install { running, .. }) = &mut app.modal.active {
            *running = true;
        }
        update(
            &mut app,
            BackendEvent::Installed(Err(CoreError::Api(ApiError::HttpStatus {
                status: 500,
                detail: Some("Installation failed".into()),
            }))),
        );
        assert_eq!(
            app.modal.active,
            Some(Modal::Install {
                password: String::new(),
                show_secrets: false,
                running: false,
                result: Some(Err("Installation failed".into())),
            })
        );
    }
}
