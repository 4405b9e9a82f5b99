//! 简体中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, BanIpModalTexts, BanListTexts, ChangePasswordTexts, ChangeUsernameTexts,
    CommonTexts, ConfirmUnbanTexts, HelpActionTexts, HelpTexts, HintTexts, InstallTexts,
    JailConfigTexts, KeyNames, LanguageTexts, LoginTexts, LogsTexts, ModalTexts, NavTexts,
    SettingsTexts, StatusBarTexts, StatusTexts, ThemeTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Banwarden",
        cancel: "取消",
        save: "保存",
        confirm: "确认",
        close: "关闭",
        loading: "加载中...",
        error: "错误",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            navigate: "导航",
            open: "打开",
            switch_panel: "切换面板",
            switch_field: "下一项",
            select: "选择",
            page: "翻页",
            ban: "封禁",
            unban: "解封",
            jail: "Jail",
            refresh: "刷新",
            restart: "重启",
            reload: "重新加载",
            search: "搜索",
            lines: "行数",
            scroll: "滚动",
            edit: "编辑",
            save: "保存",
            cancel: "取消",
            change: "修改",
            login: "登录",
            show_secrets: "显示/隐藏",
            help: "帮助",
            quit: "退出",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "菜单",
        status: "服务状态",
        ban_list: "封禁列表",
        logs: "日志",
        jail_config: "Jail 配置",
        settings: "设置",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    login: LoginTexts {
        title: "登录",
        subtitle: "Fail2Ban 管理控制台",
        username: "用户名",
        password: "密码",
        logging_in: "正在登录...",
        checking_session: "正在检查已保存的会话...",
    },

    status: StatusTexts {
        service: "服务",
        running: "运行中",
        stopped: "未运行",
        unknown: "未知",
        details: "详情",
        backend: "后端",
        signed_in_as: "当前用户",
    },

    ban_list: BanListTexts {
        no_banned: "没有被封禁的 IP",
        page: "第",
        of: "/",
        total: "条",
        unban_jail: "解封 jail",
    },

    logs: LogsTexts {
        last_lines: "最近行数",
        results_for: "搜索结果",
        search: "搜索",
        search_placeholder: "输入关键字后按 Enter",
        no_logs: "没有日志",
    },

    jail_config: JailConfigTexts {
        file: "jail.local",
        read_only: "只读",
        editing: "编辑中",
        empty: "（空文件）",
    },

    settings: SettingsTexts {
        appearance: "外观",
        account: "账号",
        theme: ThemeTexts {
            label: "主题",
            dark: "深色",
            light: "浅色",
        },
        language: LanguageTexts {
            label: "语言",
            description: "界面语言",
        },
        change_username: "修改用户名",
        change_password: "修改密码",
        install: "安装 Fail2Ban",
        logout: "退出登录",
    },

    // ========================================================================
    // 弹窗文本
    // ========================================================================
    modal: ModalTexts {
        ban_ip: BanIpModalTexts {
            title: "封禁 IP",
            ip: "IP 地址或 CIDR",
            ip_hint: "例如 203.0.113.7",
            jail: "Jail",
            jail_hint: "（←→ 切换）",
        },

        confirm_unban: ConfirmUnbanTexts {
            title: "确认解封",
            message: "确定要解封",
            from_jail: "所在 jail",
            confirm_button: "解封",
            cancel_button: "取消",
        },

        change_password: ChangePasswordTexts {
            title: "修改密码",
            current: "当前密码",
            new: "新密码",
        },

        change_username: ChangeUsernameTexts {
            title: "修改用户名",
            new_username: "新用户名",
            relogin_hint: "修改后需要重新登录",
        },

        install: InstallTexts {
            title: "安装 Fail2Ban",
            sudo_password: "sudo 密码",
            description: "在后端主机上安装 Fail2Ban",
            installing: "正在安装...",
            password_required: "请先输入 sudo 密码",
        },
    },

    // ========================================================================
    // 其他组件
    // ========================================================================
    status_bar: StatusBarTexts {
        ready: "就绪",
        refreshing: "刷新中...",
        session_expired: "会话已过期，请重新登录",
        logged_in: "已登录",
        logged_out: "已退出登录",
        config_saved: "设置已保存",
        config_save_failed: "设置保存失败",
        jail_config_saved: "jail.local 已保存",
        password_changed: "密码已修改",
        username_changed: "用户名已修改，请重新登录",
        no_selection: "未选中任何项",
    },

    help: HelpTexts {
        title: "帮助",
        global_shortcuts: "全局快捷键",
        ban_list_shortcuts: "封禁列表",
        page_shortcuts: "其他页面",
        close_hint: "按 Esc 关闭帮助",
        actions: HelpActionTexts {
            switch_panel: "切换面板",
            move_up_down: "上下移动",
            change_page: "上一页/下一页",
            confirm: "确认",
            back_cancel: "返回/取消",
            refresh: "刷新",
            help: "帮助",
            quit: "退出",
            ban: "封禁 IP",
            unban: "解封选中的 IP",
            cycle_jail: "切换解封 jail",
            restart_reload: "服务状态：重启 / 重新加载",
            search_logs: "日志：搜索",
            cycle_lines: "日志：切换行数",
            edit_save: "Jail 配置：编辑 / 保存",
        },
    },
};
