//! 封禁列表视图状态

use std::num::NonZeroUsize;

use crate::error::CoreError;
use crate::pagination::Paginator;

/// 封禁列表页的状态：完整集合的分页视图 + 最近一次提示
///
/// 拉取失败时保留上一次成功的集合与页码（数据可能过期，但始终自洽）。
#[derive(Debug, Clone, Default)]
pub struct BanListState {
    /// 封禁地址分页器
    pub paginator: Paginator<String>,
    /// 是否有请求在途
    pub loading: bool,
    /// 最近一次失败的消息
    pub last_error: Option<String>,
    /// 最近一次成功操作的后端消息
    pub last_message: Option<String>,
}

/// 修改类操作的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// 成功，需要重新拉取列表
    Refetch,
    /// 失败，列表保持不变
    Unchanged,
}

impl BanListState {
    #[must_use]
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            paginator: Paginator::new(page_size),
            ..Self::default()
        }
    }

    /// 标记开始拉取；当前窗口在结果到达前保持可见
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    /// 应用拉取结果
    ///
    /// 成功时整体替换集合并回到第 1 页；失败时只记录错误。
    pub fn apply_fetch(&mut self, result: Result<Vec<String>, CoreError>) {
        self.loading = false;
        match result {
            Ok(ips) => {
                self.paginator.set_collection(ips);
                self.last_error = None;
            }
            Err(e) => {
                self.last_error = Some(e.user_message("Failed to fetch banned IPs"));
            }
        }
    }

    /// 应用封禁/解封结果
    ///
    /// 成功时记录后端消息并要求调用方重新拉取；失败时集合与页码不变。
    pub fn apply_mutation(&mut self, result: Result<String, CoreError>) -> MutationOutcome {
        match result {
            Ok(message) => {
                self.last_message = Some(message);
                self.last_error = None;
                MutationOutcome::Refetch
            }
            Err(e) => {
                self.last_error = Some(e.user_message(&e.to_string()));
                MutationOutcome::Unchanged
            }
        }
    }

    /// 当前窗口
    #[must_use]
    pub fn visible(&self) -> &[String] {
        self.paginator.current_window()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn ips(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("192.0.2.{i}")).collect()
    }

    fn on_last_page(n: usize) -> BanListState {
        let mut state = BanListState::default();
        state.apply_fetch(Ok(ips(n)));
        while state.paginator.next_page() {}
        state
    }

    #[test]
    fn test_failed_fetch_keeps_collection_and_page() {
        let mut state = on_last_page(12);
        state.begin_fetch();
        state.apply_fetch(Err(CoreError::Api(ApiError::NetworkError {
            detail: "connection refused".into(),
        })));

        assert!(!state.loading);
        assert_eq!(state.paginator.page(), 3);
        assert_eq!(state.paginator.len(), 12);
        assert_eq!(state.last_error.as_deref(), Some("Failed to fetch banned IPs"));
    }

    #[test]
    fn test_successful_fetch_clears_error_and_resets_page() {
        let mut state = on_last_page(12);
        state.last_error = Some("old".into());

        state.apply_fetch(Ok(ips(11)));
        assert_eq!(state.paginator.page(), 1);
        assert_eq!(state.visible(), &ips(11)[0..5]);
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_failed_mutation_does_not_request_refetch() {
        let mut state = on_last_page(12);
        let outcome = state.apply_mutation(Err(CoreError::Api(ApiError::HttpStatus {
            status: 400,
            detail: Some("Invalid jail".into()),
        })));

        assert_eq!(outcome, MutationOutcome::Unchanged);
        assert_eq!(state.paginator.page(), 3);
        assert_eq!(state.last_error.as_deref(), Some("Invalid jail"));
    }

    #[test]
    fn test_successful_mutation_requests_refetch() {
        let mut state = on_last_page(12);
        let outcome = state.apply_mutation(Ok("IP 192.0.2.12 has been unbanned".into()));

        assert_eq!(outcome, MutationOutcome::Refetch);
        assert_eq!(
            state.last_message.as_deref(),
            Some("IP 192.0.2.12 has been unbanned")
        );
        // 页码在重新拉取之前不变
        assert_eq!(state.paginator.page(), 3);
    }
}
