use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 通知类型（封闭集合，未知类型在反序列化阶段直接拒绝）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export, export_to = "notification.ts")]
pub enum NotificationType {
    CommentReply,
    Mention,
    DirectMessage,
    SystemAlert,
}

impl NotificationType {
    /// 队列消息属性值（消费端据此路由/过滤）
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::CommentReply => "comment-reply",
            NotificationType::Mention => "mention",
            NotificationType::DirectMessage => "direct-message",
            NotificationType::SystemAlert => "system-alert",
        }
    }
}

/// 通知优先级，未指定时默认 normal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "notification.ts")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }
}

/// 入队消息体
///
/// timestamp 和 sender_user_id 由服务端在入队时填充，
/// 客户端提交的同名字段一律忽略。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnqueuedMessage {
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub user_id: i64,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    pub priority: Priority,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub sender_user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_type_wire_names() {
        let json = serde_json::to_string(&NotificationType::CommentReply).unwrap();
        assert_eq!(json, "\"comment-reply\"");
        assert_eq!(NotificationType::SystemAlert.as_str(), "system-alert");
    }

    #[test]
    fn test_notification_type_rejects_unknown() {
        let parsed = serde_json::from_str::<NotificationType>("\"broadcast\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_priority_default_is_normal() {
        assert_eq!(Priority::default(), Priority::Normal);
        assert_eq!(Priority::default().as_str(), "normal");
    }

    #[test]
    fn test_enqueued_message_serializes_timestamp() {
        let message = EnqueuedMessage {
            notification_type: NotificationType::Mention,
            user_id: 7,
            title: "你被提到了".to_string(),
            body: "查看详情".to_string(),
            metadata: None,
            priority: Priority::High,
            timestamp: chrono::Utc::now(),
            sender_user_id: 3,
        };
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["type"], "mention");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["sender_user_id"], 3);
        assert!(json.get("metadata").is_none());
        assert!(json["timestamp"].is_string());
    }
}
