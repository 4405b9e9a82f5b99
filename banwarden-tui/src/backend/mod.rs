//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ Command       │   │
//！│  │        │               │ Backend   │◀──────┐       ▼               │   │
//！│  │   ┌─────────┐          │  Event    │       │  ┌──────────┐         │   │
//！│  │   │  View   │          └───────────┘       │  │  Model   │         │   │
//！│  │   │   层    │ ◀──────── 读取 ──────────────┼─ │    层    │         │   │
//！│  │   └────┬────┘                              │  └────┬─────┘         │   │
//！│  └────────│────────────────────────────────────│───────│───────────────┘   │
//！│           │                          channel   │       │ dispatch          │
//！│           ▼                                    │       ▼                   │
//！│      ┌─────────┐                            ┌──┴───────────┐              │
//！│      │  终端   │                            │   Backend    │              │
//！│      │ (Util)  │                            │ (tokio 任务) │              │
//！│      └─────────┘                            └──────┬───────┘              │
//！│                                                    ▼                      │
//！│                                           ┌───────────────────┐           │
//！│                                           │  banwarden-core   │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘
//!
//!
//! src/backend/mod.rs
//! Backend 层：业务服务
//!
//! Backend 层与 UI 完全解耦，负责所有访问后端守护进程的操作。
//! 通过 banwarden-core 库实现真实的 Fail2Ban 管理功能。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod command;                // Update 层发出的命令
//!         mod config_service;         // 配置文件（JSON）
//!         mod core_service;           // 核心服务入口
//!         mod credential_service;     // 会话 token 存储（keyring）
//!         mod dispatcher;             // tokio 运行时 + 结果 channel
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、核心服务（CoreService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/core_service.rs 中定义：
//!
//!         CoreService 是 Backend 层的入口，封装了 banwarden-core 库。
//!
//!         创建流程：
//!             1. 创建 KeyringTokenStore（token 存储）
//!             2. 创建 HttpBanClient，并用 StoredCredentials 注入 bearer token
//!             3. 组装 ServiceContext（同一个客户端实现三个接口）
//!
//!         提供的服务：
//!             - session()       登录 / 当前用户 / 登出
//!             - ban_list()      封禁列表拉取、封禁、解封
//!             - status()        服务状态、重启、重新加载
//!             - logs()          日志查看与搜索
//!             - jail_config()   jail.local 读写
//!             - account()       修改密码 / 用户名、安装
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、命令执行（Backend）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/dispatcher.rs 中定义：
//!
//!         Update 层不直接 await，而是把 Command 放进 app.commands；
//!         主循环取出后调用 backend.dispatch(cmd)。
//!
//!         dispatch 在 tokio 运行时中 spawn 一个任务，
//!         任务结束时把 BackendEvent 发送到 channel。
//!
//!         主循环每一轮用 try_recv() 取出所有结果，
//!         包装为 AppMessage::Backend(event) 交给 Update 层。
//!         在结果到达之前，界面继续显示上一次的数据。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、token 存储（KeyringTokenStore）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/credential_service.rs 中定义：
//!
//!         实现 banwarden-core 的 TokenStore trait。
//!         使用系统 keyring（钥匙串）保存后端签发的 JWT，不写入任何文件。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 四、数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     用户在解封确认弹窗中按下 Enter
//!         ↓
//!     Update 层处理 ModalMessage::Confirm，推入 Command::Unban
//!         ↓
//!     Backend 在 tokio 任务中调用 BanListService::unban
//!         ↓
//!     BackendEvent::Mutation(Ok(message)) 经 channel 回到主循环
//!         ↓
//!     Update 层记录消息，推入 Command::FetchBanned
//!         ↓
//!     BackendEvent::BannedList(Ok(ips)) 替换集合并回到第 1 页
//!         ↓
//!     View 层重新渲染
//!

mod command;
mod config_service;
mod core_service;
mod credential_service;
mod dispatcher;

pub use command::Command;
pub use config_service::{config_dir, AppConfig, ConfigService, JsonConfigService, URL_ENV_VAR};
pub use core_service::CoreService;
pub use dispatcher::Backend;
