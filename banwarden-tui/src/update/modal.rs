//! 弹窗更新逻辑

use banwarden_core::utils::validate_ip;

use crate::backend::Command;
use crate::message::ModalMessage;
use crate::model::state::{BanField, Modal, PasswordField};
use crate::model::App;

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref mut modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::BanIp { .. } => handle_ban_ip(app, msg),
        Modal::ConfirmUnban { .. } => handle_confirm_unban(app, msg),
        Modal::ChangePassword { .. } => handle_change_password(app, msg),
        Modal::ChangeUsername { .. } => handle_change_username(app, msg),
        Modal::Install { .. } => handle_install(app, msg),
        Modal::Error { .. } | Modal::Help => handle_simple_modal(app, msg),
    }
}

/// 处理封禁弹窗
fn handle_ban_ip(app: &mut App, msg: ModalMessage) {
    let Some(Modal::BanIp {
        ref mut ip,
        ref mut jail,
        ref mut focus,
        ref mut error,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }

        ModalMessage::NextField | ModalMessage::PrevField => {
            *focus = focus.toggle();
        }

        // 只有在 jail 字段时才切换
        ModalMessage::PrevOption if *focus == BanField::Jail => {
            *jail = jail.prev();
        }
        ModalMessage::NextOption if *focus == BanField::Jail => {
            *jail = jail.next();
        }

        ModalMessage::Input(ch) if *focus == BanField::Ip => {
            ip.push(ch);
            *error = None;
        }

        ModalMessage::Backspace if *focus == BanField::Ip => {
            ip.pop();
        }

        ModalMessage::Confirm => match validate_ip(ip) {
            Ok(valid) => {
                let jail = *jail;
                app.modal.close();
                app.send(Command::Ban { ip: valid, jail });
            }
            Err(e) => {
                *error = Some(e.user_message("Invalid IP address"));
            }
        },

        _ => {}
    }
}

/// 处理解封确认弹窗
fn handle_confirm_unban(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ConfirmUnban {
        ref ip,
        jail,
        ref mut confirm_focused,
    }) = app.modal.active
    else {
        return;
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }

        ModalMessage::ToggleConfirmFocus
        | ModalMessage::NextField
        | ModalMessage::PrevField
        | ModalMessage::PrevOption
        | ModalMessage::NextOption => {
            *confirm_focused = !*confirm_focused;
        }

        ModalMessage::Confirm => {
            let command = confirm_focused.then(|| Command::Unban {
                ip: ip.clone(),
                jail,
            });
            app.modal.close();
            if let Some(command) = command {
                app.send(command);
            }
        }

        _ => {}
    }
}

/// 处理修改密码弹窗
fn handle_change_password(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ChangePassword {
        ref mut current,
        ref mut new,
        ref mut focus,
        ref mut show_secrets,
        ref mut submitting,
        ref mut error,
    }) = app.modal.active
    else {
        return;
    };

    if *submitting && msg != ModalMessage::Close {
        return;
    }

    let field = match focus {
        PasswordField::Current => &mut *current,
        PasswordField::New => &mut *new,
    };

    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }
        ModalMessage::NextField | ModalMessage::PrevField => {
            *focus = focus.toggle();
        }
        ModalMessage::Input(ch) => {
            field.push(ch);
            *error = None;
        }
        ModalMessage::Backspace => {
            field.pop();
        }
        ModalMessage::ToggleSecrets => {
            *show_secrets = !*show_secrets;
        }
        ModalMessage::Confirm => {
            *submitting = true;
            *error = None;
            let command = Command::ChangePassword {
                current: current.clone(),
                new: new.clone(),
            };
            app.send(command);
        }
        _ => {}
    }
}

/// 处理修改用户名弹窗
fn handle_change_username(app: &mut App, msg: ModalMessage) {
    let Some(Modal::ChangeUsername {
        ref mut username,
        ref mut submitting,
        ref mut error,
    }) = app.modal.active
    else {
        return;
    };

    if *submitting && msg != ModalMessage::Close {
        return;
    }

    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }
        ModalMessage::Input(ch) => {
            username.push(ch);
            *error = None;
        }
        ModalMessage::Backspace => {
            username.pop();
        }
        ModalMessage::Confirm => {
            *submitting = true;
            *error = None;
            let command = Command::ChangeUsername {
                new_username: username.trim().to_string(),
            };
            app.send(command);
        }
        _ => {}
    }
}

/// 处理安装弹窗
///
/// sudo 密码只发送一次：提交时从输入框中取走，无论结果如何输入框都是空的。
fn handle_install(app: &mut App, msg: ModalMessage) {
    let Some(Modal::Install {
        ref mut password,
        ref mut show_secrets,
        ref mut running,
        ref mut result,
    }) = app.modal.active
    else {
        return;
    };

    if *running && msg != ModalMessage::Close {
        return;
    }

    match msg {
        ModalMessage::Close => {
            app.modal.close();
        }
        ModalMessage::Input(ch) => {
            password.push(ch);
        }
        ModalMessage::Backspace => {
            password.pop();
        }
        ModalMessage::ToggleSecrets => {
            *show_secrets = !*show_secrets;
        }
        // 密码为空时安装按钮不可用
        ModalMessage::Confirm if password.is_empty() => {}
        ModalMessage::Confirm => {
            let sudo_password = std::mem::take(password);
            *running = true;
            *result = None;
            app.send(Command::Install { sudo_password });
        }
        _ => {}
    }
}

/// 处理简单弹窗（帮助、错误）
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
        app.modal.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use banwarden_core::types::Jail;

    use crate::backend::AppConfig;

    fn app_with(show: impl FnOnce(&mut App)) -> App {
        let mut app = App::new(&AppConfig::default());
        app.take_commands();
        show(&mut app);
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            update(app, ModalMessage::Input(c));
        }
    }

    #[test]
    fn invalid_ip_keeps_modal_open() {
        let mut app = app_with(|app| app.modal.show_ban_ip());
        type_text(&mut app, "999.1.1.1");
        update(&mut app, ModalMessage::Confirm);

        assert!(app.commands.is_empty());
        assert!(matches!(
            app.modal.active,
            Some(Modal::BanIp { error: Some(_), .. })
        ));

        // 继续输入会清除错误
        update(&mut app, ModalMessage::Backspace);
        update(&mut app, ModalMessage::Input('1'));
        assert!(matches!(
            app.modal.active,
            Some(Modal::BanIp { error: None, .. })
        ));
    }

    #[test]
    fn valid_ban_sends_selected_jail() {
        let mut app = app_with(|app| app.modal.show_ban_ip());
        type_text(&mut app, " 192.0.2.7 ");
        update(&mut app, ModalMessage::NextField);
        // jail 字段不接受文本
        type_text(&mut app, "x");
        update(&mut app, ModalMessage::NextOption);
        update(&mut app, ModalMessage::NextOption);
        update(&mut app, ModalMessage::Confirm);

        assert!(!app.modal.is_open());
        assert_eq!(
            app.take_commands(),
            vec![Command::Ban {
                ip: "192.0.2.7".into(),
                jail: Jail::NginxHttpAuth,
            }]
        );
    }

    #[test]
    fn unban_requires_explicit_confirm_focus() {
        let mut app = app_with(|app| app.modal.show_confirm_unban("192.0.2.1", Jail::Ssh));
        update(&mut app, ModalMessage::Confirm);
        assert!(!app.modal.is_open());
        assert!(app.commands.is_empty());

        app.modal.show_confirm_unban("192.0.2.1", Jail::Ssh);
        update(&mut app, ModalMessage::ToggleConfirmFocus);
        update(&mut app, ModalMessage::Confirm);
        assert_eq!(
            app.take_commands(),
            vec![Command::Unban {
                ip: "192.0.2.1".into(),
                jail: Jail::Ssh,
            }]
        );
    }

    #[test]
    fn install_password_is_taken_on_submit() {
        let mut app = app_with(|app| app.modal.show_install());
        update(&mut app, ModalMessage::Confirm);
        assert!(app.commands.is_empty());
        assert!(matches!(
            app.modal.active,
            Some(Modal::Install {
                running: false,
                result: None,
                ..
            })
        ));

        type_text(&mut app, "sudo-pw");
        update(&mut app, ModalMessage::Confirm);
        assert_eq!(
            app.take_commands(),
            vec![Command::Install {
                sudo_password: "sudo-pw".into()
            }]
        );
        let Some(Modal::Install {
            password, running, ..
        }) = &app.modal.active
        else {
            panic!("install modal closed");
        };
        assert!(password.is_empty());
        assert!(*running);

        // 运行中忽略输入
        type_text(&mut app, "again");
        update(&mut app, ModalMessage::Confirm);
        assert!(app.commands.is_empty());
    }

    #[test]
    fn change_password_types_into_focused_field() {
        let mut app = app_with(|app| app.modal.show_change_password());
        type_text(&mut app, "old");
        update(&mut app, ModalMessage::NextField);
        type_text(&mut app, "new");
        update(&mut app, ModalMessage::Confirm);

        assert_eq!(
            app.take_commands(),
            vec![Command::ChangePassword {
                current: "old".into(),
                new: "new".into(),
            }]
        );
    }
}
