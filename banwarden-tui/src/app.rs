//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，App::new(&config) 创建如下初始状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Navigation,                  // 当前焦点在哪个面板
//!     navigation: NavigationState{
//!         items: [Status , BanList , Logs , JailConfig , Settings],
//!         selected = 0                                    // 当前选中第几项，默认为 0
//!     },
//!     current_page = Page::Login,                     // 先显示登录页
//!     login.checking = true,                          // 同时检查已保存的会话
//!     commands = [CheckSession],                      // 等待派发的命令
//!     ...
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit{ break }                     // 检查 APP 是否应该退出
//!     while let Some(ev) = backend.try_recv() {       // 先收取已完成的后端结果
//!         update::update(&mut app , Backend(ev))
//!     }
//!     if let Some(event) = poll_event() {             // 轮询获取输入，在此等待 100ms
//!         let msg = handle_event(event , &app);           // 接收原始事件并分发消息
//!         update::update(&mut app , msg)                  // 更新终端状态
//!     }
//!     for cmd in app.take_commands() {                // 把本轮产生的命令交给 Backend
//!         backend.dispatch(cmd)
//!     }
//!     persist_settings()                              // 主题/语言改动写回配置文件
//! }

use std::time::Duration;

use anyhow::Result;

use crate::backend::{AppConfig, Backend, ConfigService};
use crate::event;
use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    backend: &mut Backend,
    config_service: &dyn ConfigService,
    config: &mut AppConfig,
) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 应用已完成的后端结果
        while let Some(event) = backend.try_recv() {
            update::update(app, AppMessage::Backend(event));
        }

        // 4. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            update::update(app, msg);
        }

        // 5. 派发本轮产生的命令
        for command in app.take_commands() {
            backend.dispatch(command);
        }

        // 6. 保存设置改动
        if app.config_dirty {
            persist_settings(app, config_service, config);
        }
    }

    Ok(())
}

/// 把设置页的主题和语言写回配置文件
fn persist_settings(app: &mut App, config_service: &dyn ConfigService, config: &mut AppConfig) {
    app.config_dirty = false;
    config.theme = app.settings.theme;
    config.language = app.settings.language.code().to_string();

    match config_service.save(config) {
        Ok(()) => app.set_status(t().status_bar.config_saved),
        Err(e) => {
            log::warn!("Failed to save config: {e:#}");
            app.set_status(format!("{}: {e}", t().status_bar.config_save_failed));
        }
    }
}
