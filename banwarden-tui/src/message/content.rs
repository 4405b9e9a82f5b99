//! 内容面板消息
//!
//! 处理内容面板中的操作，如列表选择、翻页、封禁解封、编辑等

/// 内容面板消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 光标左移 / 切换到上一个值
    MoveLeft,
    /// 光标右移 / 切换到下一个值
    MoveRight,
    /// 上一页
    PrevPage,
    /// 下一页
    NextPage,
    /// 确认（提交登录、打开设置项、换行等）
    Confirm,

    // ========== 封禁列表 ==========
    /// 封禁新地址
    Add,
    /// 解封选中地址
    Delete,
    /// 切换解封使用的 jail
    CycleJail,

    // ========== 服务状态 ==========
    Restart,
    Reload,

    // ========== 日志 ==========
    /// 开始输入搜索关键字
    Search,
    /// 切换查看行数
    CycleLines,

    // ========== jail.local ==========
    /// 进入编辑模式
    Edit,
    /// 保存
    Save,

    // ========== 文本输入 ==========
    Input(char),
    Backspace,
    NextField,
    PrevField,
    /// 切换密码可见性
    ToggleSecrets,
}
