//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ app.commands      │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │  banwarden-core   │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理
//!         mod modal;              // 弹窗子消息处理
//!         mod backend;            // 后端结果处理
//!
//!         pub fn update(app: &mut App , msg: AppMessage) {...}
//!
//!
//!         有：
//!             pub fn update(app: &mut App, msg: AppMessage) {
//!                 match msg {
//!                     AppMessage::Quit => {
//!                         app.should_quit = true;
//!                     }
//!                     AppMessage::Content(content_msg) => {
//!                         content::update(app, content_msg);
//!                     }
//!                     AppMessage::Backend(event) => {
//!                         backend::update(app, event);
//!                     }
//!                     ...
//!                 }
//!             }
//!
//!         以上即主更新函数。
//!             使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!             复杂的子消息委托给子模块处理（navigation、content、modal、backend）。
//!             通过 &mut App 直接修改状态，避免不必要的复制。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗更新（modal.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     根据当前弹窗类型分发：
//!         - BanIp             本地先校验 IP，失败时弹窗保持打开
//!         - ConfirmUnban      焦点默认在取消上
//!         - ChangePassword / ChangeUsername
//!         - Install           sudo 密码在每次提交后清空
//!
//!     在 Confirm 时，通过 app.send(Command) 请求 Backend 层执行实际操作。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 后端结果（backend.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Update 层本身从不等待 I/O。需要后端时：
//!
//!         1. 把 Model 标记为 “加载中”，并 app.send(Command::...)
//!         2. 主循环把命令交给 Backend，Backend 在 tokio 任务中执行
//!         3. 结果以 AppMessage::Backend(BackendEvent) 的形式回到这里
//!
//!     结果到达之前，旧的数据（例如上一页封禁列表）保持可见、可操作。
//!     任何结果如果表明会话失效（401 / token 过期），都会回到登录页。
//!
//!     封禁/解封成功后不做本地修改，而是重新拉取整个列表；
//!     拉取成功时替换集合并回到第 1 页。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod backend;
mod content;
mod modal;
mod navigation;

use crate::backend::Command;
use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::{App, FocusPanel, Page};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() && !app.current_page.is_login() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            if !app.current_page.is_login() {
                navigation::update(app, nav_msg);
            }
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::Backend(event) => {
            backend::update(app, event);
        }

        AppMessage::GoBack => go_back(app),

        AppMessage::Refresh => {
            if app.session.is_some() && !app.modal.is_open() {
                app.set_status(t().status_bar.refreshing);
                load_page(app, app.current_page);
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Noop => {}
    }
}

/// Esc：关闭弹窗 → 退出搜索输入 → 放弃编辑 → 焦点回到导航栏
fn go_back(app: &mut App) {
    if app.modal.is_open() {
        app.modal.close();
        app.clear_status();
    } else if app.current_page == Page::Logs && app.logs.is_searching() {
        app.logs.cancel_search();
    } else if app.current_page == Page::JailConfig && app.jail_config.editing {
        app.jail_config.cancel_edit();
    } else if app.focus.is_content() && !app.current_page.is_login() {
        app.focus = FocusPanel::Navigation;
    }
}

/// 切换到指定页面并加载数据
pub(crate) fn open_page(app: &mut App, page: Page) {
    app.current_page = page;
    app.navigation.select_page(page);
    app.clear_status(); // 切换页面时清除状态消息
    load_page(app, page);
}

/// 请求页面需要的数据
pub(crate) fn load_page(app: &mut App, page: Page) {
    match page {
        Page::Status => {
            app.status.loading = true;
            app.send(Command::FetchStatus);
        }
        Page::BanList => {
            app.ban_list.list.begin_fetch();
            app.send(Command::FetchBanned);
        }
        Page::Logs => load_logs(app),
        Page::JailConfig => {
            // 编辑中的内容不能被覆盖
            if !app.jail_config.editing {
                app.jail_config.loading = true;
                app.send(Command::LoadJailConfig);
            }
        }
        Page::Login | Page::Settings => {}
    }
}

/// 按当前模式请求日志：有搜索关键字时搜索，否则查看最近 N 行
pub(crate) fn load_logs(app: &mut App) {
    app.logs.loading = true;
    let command = match &app.logs.query {
        Some(query) => Command::SearchLogs {
            query: query.clone(),
        },
        None => Command::ViewLogs {
            lines: app.logs.lines,
        },
    };
    app.send(command);
}
