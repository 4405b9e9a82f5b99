//! 日志查看与搜索

use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::types::LOG_LINE_CHOICES;

/// 搜索无结果时显示的文本
pub const NO_MATCHING_LOGS: &str = "No matching logs found.";

/// 日志服务
pub struct LogService {
    ctx: Arc<ServiceContext>,
}

impl LogService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self { ctx }
    }

    /// 读取最近 `lines` 行
    ///
    /// `lines` 必须是 [`LOG_LINE_CHOICES`] 之一。
    pub async fn view(&self, lines: u32) -> CoreResult<String> {
        if !LOG_LINE_CHOICES.contains(&lines) {
            return Err(CoreError::ValidationError(format!(
                "Unsupported line count: {lines}"
            )));
        }

        let logs = self
            .ctx
            .service_api
            .view_logs(lines)
            .await
            .map_err(|e| ServiceContext::log_failure("View logs", e.into()))?;
        Ok(logs.unwrap_or_default())
    }

    /// 搜索日志；无匹配时返回 [`NO_MATCHING_LOGS`]
    pub async fn search(&self, query: &str) -> CoreResult<String> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CoreError::ValidationError(
                "Search query must not be empty".to_string(),
            ));
        }

        let logs = self
            .ctx
            .service_api
            .search_logs(query)
            .await
            .map_err(|e| ServiceContext::log_failure("Search logs", e.into()))?;

        Ok(match logs {
            Some(text) if !text.trim().is_empty() => text,
            _ => NO_MATCHING_LOGS.to_string(),
        })
    }

    /// 下一个行数选项（循环）
    #[must_use]
    pub fn next_line_choice(current: u32) -> u32 {
        let idx = LOG_LINE_CHOICES
            .iter()
            .position(|&n| n == current)
            .map_or(0, |i| (i + 1) % LOG_LINE_CHOICES.len());
        LOG_LINE_CHOICES[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mock_context;

    #[tokio::test]
    async fn test_view_rejects_unsupported_line_count() {
        let (ctx, _) = mock_context();
        let err = LogService::new(ctx).view(75).await.unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_view_returns_tail() {
        let (ctx, mocks) = mock_context();
        mocks.service_api.set_logs("a\nb\nc").await;
        let logs = LogService::new(ctx).view(50).await.unwrap();
        assert_eq!(logs, "a\nb\nc");
    }

    #[tokio::test]
    async fn test_search_without_hits_shows_placeholder() {
        let (ctx, mocks) = mock_context();
        mocks
            .service_api
            .set_logs("NOTICE [sshd] Ban 10.0.0.1")
            .await;
        let service = LogService::new(ctx);

        assert_eq!(
            service.search("10.0.0.1").await.unwrap(),
            "NOTICE [sshd] Ban 10.0.0.1"
        );
        assert_eq!(service.search("172.16.0.1").await.unwrap(), NO_MATCHING_LOGS);
    }

    #[test]
    fn test_line_choices_cycle() {
        assert_eq!(LogService::next_line_choice(50), 100);
        assert_eq!(LogService::next_line_choice(500), 50);
        assert_eq!(LogService::next_line_choice(7), 50);
    }
}
