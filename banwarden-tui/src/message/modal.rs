//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 切换 jail（左）
    PrevOption,

    /// 切换 jail（右）
    NextOption,

    /// 确认/提交
    Confirm,

    /// 在解封确认弹窗中切换焦点
    ToggleConfirmFocus,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 切换密码可见性
    ToggleSecrets,
}
