use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 单条入队结果响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct EnqueueResponse {
    pub success: bool,
    pub message_id: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// 批量条目的结算状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "notification.ts")]
pub enum BatchItemStatus {
    Fulfilled,
    Rejected,
}

/// 批量入队的单条结果，顺序与请求条目一致
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct BatchItemResult {
    pub status: BatchItemStatus,
    pub message_id: Option<String>,
    pub error: Option<String>,
}

impl BatchItemResult {
    pub fn fulfilled(message_id: String) -> Self {
        Self {
            status: BatchItemStatus::Fulfilled,
            message_id: Some(message_id),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            status: BatchItemStatus::Rejected,
            message_id: None,
            error: Some(error.into()),
        }
    }
}

/// 批量入队响应
///
/// 条目失败不影响整体 success：部分失败的批次仍然返回 success=true，
/// 调用方通过 results 里的 per-item 状态判断各条结果。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct BatchEnqueueResponse {
    pub success: bool,
    pub results: Vec<BatchItemResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_item_status_wire_names() {
        let fulfilled = serde_json::to_string(&BatchItemStatus::Fulfilled).unwrap();
        let rejected = serde_json::to_string(&BatchItemStatus::Rejected).unwrap();
        assert_eq!(fulfilled, "\"fulfilled\"");
        assert_eq!(rejected, "\"rejected\"");
    }

    #[test]
    fn test_rejected_item_has_error_and_null_id() {
        let result = BatchItemResult::rejected("queue unreachable");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["message_id"], serde_json::Value::Null);
        assert_eq!(json["error"], "queue unreachable");
    }

    #[test]
    fn test_fulfilled_item_keeps_message_id() {
        let result = BatchItemResult::fulfilled("msg-001".to_string());
        assert_eq!(result.status, BatchItemStatus::Fulfilled);
        assert_eq!(result.message_id.as_deref(), Some("msg-001"));
        assert!(result.error.is_none());
    }
}
