//! View 层：UI 渲染
//!
//! 只读取 Model，不做任何修改。
//!
//!     layout.rs       标题栏 + 导航 / 内容分栏 + 状态栏 + 弹窗
//!     components/     导航栏、状态栏、弹窗
//!     pages/          各个页面的内容区
//!     theme.rs        主题颜色和常用样式

pub mod components;
mod layout;
pub mod pages;
pub mod theme;

pub use layout::render;
