//! 命令执行器
//!
//! 持有 tokio 运行时：每条命令在独立任务中执行，
//! 结果通过无界 channel 送回 UI 主循环。主循环从不阻塞在 I/O 上。

use std::sync::Arc;

use anyhow::Result;
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::command::Command;
use super::core_service::CoreService;
use crate::message::BackendEvent;

/// Backend 层入口
pub struct Backend {
    runtime: Runtime,
    core: Arc<CoreService>,
    tx: UnboundedSender<BackendEvent>,
    rx: UnboundedReceiver<BackendEvent>,
}

impl Backend {
    pub fn new(core: CoreService) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("banwarden-backend")
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime,
            core: Arc::new(core),
            tx,
            rx,
        })
    }

    /// 在后台执行命令
    ///
    /// 不做取消：同类请求并发时，最后到达的结果生效。
    pub fn dispatch(&self, command: Command) {
        log::debug!("Dispatching {command:?}");
        let core = self.core.clone();
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let event = execute(&core, command).await;
            if tx.send(event).is_err() {
                log::debug!("UI loop is gone, dropping backend result");
            }
        });
    }

    /// 取出一条已完成的结果（不阻塞）
    pub fn try_recv(&mut self) -> Option<BackendEvent> {
        self.rx.try_recv().ok()
    }
}

/// 执行单条命令
async fn execute(core: &CoreService, command: Command) -> BackendEvent {
    match command {
        Command::CheckSession => BackendEvent::SessionRestored(core.session().current_user().await),
        Command::Login { username, password } => {
            BackendEvent::LoggedIn(core.session().login(&username, &password).await)
        }
        Command::Logout => BackendEvent::LoggedOut(core.session().logout().await),

        Command::FetchStatus => BackendEvent::Status(core.status().status().await),
        Command::RestartService => BackendEvent::ServiceAction(core.status().restart().await),
        Command::ReloadService => BackendEvent::ServiceAction(core.status().reload().await),

        Command::FetchBanned => BackendEvent::BannedList(core.ban_list().fetch().await),
        Command::Ban { ip, jail } => BackendEvent::Mutation(core.ban_list().ban(&ip, jail).await),
        Command::Unban { ip, jail } => {
            BackendEvent::Mutation(core.ban_list().unban(&ip, jail).await)
        }

        Command::ViewLogs { lines } => BackendEvent::Logs(core.logs().view(lines).await),
        Command::SearchLogs { query } => BackendEvent::Logs(core.logs().search(&query).await),

        Command::LoadJailConfig => BackendEvent::JailConfigLoaded(core.jail_config().load().await),
        Command::SaveJailConfig { content } => {
            let result = core.jail_config().save(&content).await;
            BackendEvent::JailConfigSaved { content, result }
        }

        Command::ChangePassword { current, new } => {
            BackendEvent::PasswordChanged(core.account().change_password(&current, &new).await)
        }
        Command::ChangeUsername { new_username } => {
            BackendEvent::UsernameChanged(core.account().change_username(&new_username).await)
        }
        Command::Install { sudo_password } => {
            BackendEvent::Installed(core.account().install(&sudo_password).await)
        }
    }
}
