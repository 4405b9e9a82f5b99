//! Banwarden TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! Banwarden TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写到 <config dir>/banwarden/banwarden.log
//!     config_service.load()   // 读取配置，BANWARDEN_URL 覆盖后端地址
//!     set_theme / set_language
//!     Backend::new()          // 创建 tokio 运行时和 banwarden-core 服务
//!     init_terminal()         // 初始化终端
//!     App::new(&config)       // 创建 APP 实例（登录页 + 会话检查）
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 日志不能写到 stdout：终端处于原始模式和备用屏幕，
//! 任何输出都会打乱界面。`RUST_LOG` 控制日志级别，默认 info。

mod app;
mod backend;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use backend::{config_dir, Backend, ConfigService, CoreService, JsonConfigService, URL_ENV_VAR};
use util::{init_terminal, install_panic_hook, restore_terminal};

/// 日志文件名
const LOG_FILE: &str = "banwarden.log";

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志
    init_logging()?;

    // 2. 读取配置
    let config_service = JsonConfigService::new();
    let mut config = config_service
        .load()?
        .with_url_override(std::env::var(URL_ENV_VAR).ok());
    config.validate()?;

    view::theme::set_theme(config.theme);
    i18n::set_language(i18n::Language::from_code(&config.language).unwrap_or_default());

    // 3. 创建后端
    let core = CoreService::new(&config)?;
    let mut backend = Backend::new(core)?;

    // 4. 初始化终端
    install_panic_hook();
    let mut terminal = init_terminal()?;

    // 5. 创建应用实例并运行主循环
    let mut app = model::App::new(&config);
    let result = app::run(
        &mut terminal,
        &mut app,
        &mut backend,
        &config_service,
        &mut config,
    );

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!("Exited with error: {e:#}");
    }
    result
}

/// 初始化文件日志
fn init_logging() -> Result<()> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!("banwarden {} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}
