use serde::Deserialize;
use ts_rs::TS;

use super::entities::{NotificationType, Priority};

/// 单条通知入队请求（来自HTTP请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct EnqueueNotificationRequest {
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    /// 接收者用户 ID
    pub user_id: i64,
    pub title: String,
    pub body: String,
    /// 业务附加数据，原样入队
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    /// 未指定时默认 normal
    #[serde(default)]
    pub priority: Priority,
}

/// 批量通知入队请求，最多 10 条
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "notification.ts")]
pub struct BatchEnqueueRequest {
    pub notifications: Vec<EnqueueNotificationRequest>,
}

impl BatchEnqueueRequest {
    /// 按接收者去重，保留首次出现的条目和顺序
    ///
    /// 与前端批量模式的接收者标签去重行为保持一致，
    /// HTTP 直连路径同样不会给同一个接收者重复入队。
    pub fn deduplicated(self) -> Vec<EnqueueNotificationRequest> {
        let mut seen = std::collections::HashSet::new();
        self.notifications
            .into_iter()
            .filter(|item| seen.insert(item.user_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(user_id: i64) -> EnqueueNotificationRequest {
        EnqueueNotificationRequest {
            notification_type: NotificationType::Mention,
            user_id,
            title: "title".to_string(),
            body: "body".to_string(),
            metadata: None,
            priority: Priority::Normal,
        }
    }

    #[test]
    fn test_priority_defaults_to_normal_when_absent() {
        let request: EnqueueNotificationRequest = serde_json::from_str(
            r#"{"type":"direct-message","user_id":5,"title":"hi","body":"hello"}"#,
        )
        .unwrap();
        assert_eq!(request.priority, Priority::Normal);
        assert!(request.metadata.is_none());
    }

    #[test]
    fn test_deduplicated_keeps_first_occurrence_order() {
        let batch = BatchEnqueueRequest {
            notifications: vec![item(1), item(2), item(1), item(3), item(2)],
        };
        let deduped = batch.deduplicated();
        let ids: Vec<i64> = deduped.iter().map(|n| n.user_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_deduplicated_noop_for_distinct_recipients() {
        let batch = BatchEnqueueRequest {
            notifications: vec![item(1), item(2), item(3)],
        };
        assert_eq!(batch.deduplicated().len(), 3);
    }
}
