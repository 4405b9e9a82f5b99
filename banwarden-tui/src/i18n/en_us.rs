//! 英文翻译 (en-US)

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
        cancel: "Cancel",
        save: "Save",
        confirm: "Confirm",
        close: "Close",
        loading: "Loading...",
        error: "Error",
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
            navigate: "Navigate",
            open: "Open",
            switch_panel: "Switch panel",
            switch_field: "Next field",
            select: "Select",
            page: "Page",
            ban: "Ban",
            unban: "Unban",
            jail: "Jail",
            refresh: "Refresh",
            restart: "Restart",
            reload: "Reload",
            search: "Search",
            lines: "Lines",
            scroll: "Scroll",
            edit: "Edit",
            save: "Save",
            cancel: "Cancel",
            change: "Change",
            login: "Log in",
            show_secrets: "Show/hide",
            help: "Help",
            quit: "Quit",
        },
    },

    // ========================================================================
    // 导航栏
    // ========================================================================
    nav: NavTexts {
        title: "Menu",
        status: "Status",
        ban_list: "Ban List",
        logs: "Logs",
        jail_config: "Jail Config",
        settings: "Settings",
    },

    // ========================================================================
    // 页面文本
    // ========================================================================
    login: LoginTexts {
        title: "Sign in",
        subtitle: "Fail2Ban administration console",
        username: "Username",
        password: "Password",
        logging_in: "Signing in...",
        checking_session: "Checking saved session...",
    },

    status: StatusTexts {
        service: "Service",
        running: "Running",
        stopped: "Not running",
        unknown: "Unknown",
        details: "Details",
        backend: "Backend",
        signed_in_as: "Signed in as",
    },

    ban_list: BanListTexts {
        no_banned: "No banned IPs",
        page: "Page",
        of: "of",
        total: "total",
        unban_jail: "Unban jail",
    },

    logs: LogsTexts {
        last_lines: "Last lines",
        results_for: "Results for",
        search: "Search",
        search_placeholder: "Type a query and press Enter",
        no_logs: "No logs",
    },

    jail_config: JailConfigTexts {
        file: "jail.local",
        read_only: "Read-only",
        editing: "Editing",
        empty: "(empty file)",
    },

    settings: SettingsTexts {
        appearance: "Appearance",
        account: "Account",
        theme: ThemeTexts {
            label: "Theme",
            dark: "Dark",
            light: "Light",
        },
        language: LanguageTexts {
            label: "Language",
            description: "Interface language",
        },
        change_username: "Change username",
        change_password: "Change password",
        install: "Install Fail2Ban",
        logout: "Log out",
    },

    // ========================================================================
    // 弹窗文本
    // ========================================================================
    modal: ModalTexts {
        ban_ip: BanIpModalTexts {
            title: "Ban IP",
            ip: "IP address or CIDR",
            ip_hint: "e.g. 203.0.113.7",
            jail: "Jail",
            jail_hint: " (←→ to switch)",
        },

        confirm_unban: ConfirmUnbanTexts {
            title: "Confirm Unban",
            message: "Are you sure you want to unban",
            from_jail: "from jail",
            confirm_button: "Unban",
            cancel_button: "Cancel",
        },

        change_password: ChangePasswordTexts {
            title: "Change Password",
            current: "Current password",
            new: "New password",
        },

        change_username: ChangeUsernameTexts {
            title: "Change Username",
            new_username: "New username",
            relogin_hint: "You will be asked to sign in again",
        },

        install: InstallTexts {
            title: "Install Fail2Ban",
            sudo_password: "Sudo password",
            description: "Installs Fail2Ban on the backend host",
            installing: "Installing...",
            password_required: "Enter the sudo password first",
        },
    },

    // ========================================================================
    // 其他组件
    // ========================================================================
    status_bar: StatusBarTexts {
        ready: "Ready",
        refreshing: "Refreshing...",
        session_expired: "Session expired, please sign in again",
        logged_in: "Signed in",
        logged_out: "Signed out",
        config_saved: "Settings saved",
        config_save_failed: "Failed to save settings",
        jail_config_saved: "jail.local saved",
        password_changed: "Password changed",
        username_changed: "Username changed, please sign in again",
        no_selection: "Nothing selected",
    },

    help: HelpTexts {
        title: "Help",
        global_shortcuts: "Global shortcuts",
        ban_list_shortcuts: "Ban list",
        page_shortcuts: "Other pages",
        close_hint: "Press Esc to close the help",
        actions: HelpActionTexts {
            switch_panel: "Switch panel",
            move_up_down: "Move Up/Down",
            change_page: "Previous/next page",
            confirm: "Confirm",
            back_cancel: "Back/Cancel",
            refresh: "Refresh",
            help: "Help",
            quit: "Quit",
            ban: "Ban an IP",
            unban: "Unban selected IP",
            cycle_jail: "Cycle unban jail",
            restart_reload: "Status: restart / reload",
            search_logs: "Logs: search",
            cycle_lines: "Logs: cycle line count",
            edit_save: "Jail config: edit / save",
        },
    },
};
