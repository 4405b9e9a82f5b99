//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │ 用户按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//！│         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//！│         │                                                │              │
//！│         │          ┌─────────┐     ┌──────────┐          ▼              │
//！│         │          │  Util   │     │  Model   │ ◀───────────           │
//！│         │          │  层     │     │   层     │                         │
//！│         │          └─────────┘     └────┬─────┘                         │
//！│         │                               │                               │
//！│         │          ┌─────────┐          ▼                               │
//！│         └──────────│  View   │ ◀── 读取状态                             │
//！│           屏幕输出  │   层    │                                          │
//！│                    └─────────┘                                          │
//！└─────────────────────────────────────────────────────────────────────────┘

//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码，
//! 负责终端的初始化、恢复，以及 panic 时的兜底恢复。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化、恢复和 panic hook
//!
//!         pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
//!
//!
//!     终端类型定义：
//!         在 src/util/terminal.rs 中，有：
//!
//!             pub type Term = Terminal<CrosstermBackend<Stdout>>;
//!
//!         其他地方写 `fn run(terminal: &mut Term, ...)` 即可。
//!
//!
//!     初始化终端 init_terminal()：
//!         1. enable_raw_mode()            启用原始模式
//!         2. EnterAlternateScreen         进入备用屏幕
//!         3. Terminal::new(backend)       创建终端对象并清屏
//!
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!             - 关闭字符回显：按键不会显示在终端上
//!             - 捕获所有按键：包括 Ctrl+C、箭头键等特殊键
//!
//!         · Alternate Screen（备用屏幕）
//!             - TUI 应用在备用屏幕运行
//!             - 退出后自动恢复主屏幕内容（不会覆盖原有内容）
//!
//!
//!     恢复终端 restore_terminal()：
//!         1. disable_raw_mode()           禁用原始模式
//!         2. LeaveAlternateScreen         离开备用屏幕
//!         3. show_cursor()                显示光标
//!
//!         注意：无论 app::run 正常返回还是返回错误，都必须调用！
//!               否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!
//!     panic hook install_panic_hook()：
//!         panic 时走不到 restore_terminal，由 hook 先离开备用屏幕，
//!         再交给原来的 hook 打印 panic 信息。
//!
//!
//!     使用方式（src/main.rs）：
//!
//!             install_panic_hook();
//!             let mut terminal = init_terminal()?;
//!             let result = app::run(&mut terminal, &mut app, &mut backend, ...);
//!             restore_terminal(&mut terminal)?;
//!             result
//!
//!
//! Util 层在应用启动时初始化终端，在应用退出时恢复终端。
//! 主循环在初始化后的终端中运行。
//!     → 去往 src/app.rs 主循环吧
//!

mod terminal;

pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Term};
