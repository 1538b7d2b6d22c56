use aws_config::{BehaviorVersion, Region};
use aws_sdk_sqs::Client as SqsClient;
use aws_sdk_sqs::types::MessageAttributeValue;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::{NotifyHubError, Result};
use crate::models::notifications::entities::EnqueuedMessage;
use crate::queue::NotificationQueue;

/// AWS SQS 队列客户端
///
/// 进程启动时构建一次，之后只做消息构造和网络发送。
/// 超时等行为全部使用 SDK 默认值。
pub struct SqsQueue {
    client: SqsClient,
    queue_url: String,
    destination_name: String,
}

impl SqsQueue {
    /// 从全局配置构建客户端（region 和 url 已在启动校验阶段保证非空）
    pub async fn from_app_config() -> Result<Self> {
        let config = AppConfig::get();
        let shared_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.queue.region.clone()))
            .load()
            .await;

        warn!(
            "SQS client initialized for region '{}', destination '{}'",
            config.queue.region,
            destination_name_of(&config.queue.url)
        );

        Ok(Self {
            client: SqsClient::new(&shared_config),
            queue_url: config.queue.url.clone(),
            destination_name: destination_name_of(&config.queue.url),
        })
    }

    fn string_attribute(value: &str) -> Result<MessageAttributeValue> {
        MessageAttributeValue::builder()
            .data_type("String")
            .string_value(value)
            .build()
            .map_err(|e| NotifyHubError::queue_send(format!("Invalid message attribute: {e}")))
    }
}

/// 从队列 URL 提取队列名（最后一段），用于日志和健康检查
pub(crate) fn destination_name_of(queue_url: &str) -> String {
    queue_url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("unknown")
        .to_string()
}

#[async_trait::async_trait]
impl NotificationQueue for SqsQueue {
    async fn send(&self, message: &EnqueuedMessage) -> Result<String> {
        let body = serde_json::to_string(message)?;

        // 类型和优先级作为消息属性，供消费端路由/过滤
        let result = self
            .client
            .send_message()
            .queue_url(&self.queue_url)
            .message_body(body)
            .message_attributes(
                "NotificationType",
                Self::string_attribute(message.notification_type.as_str())?,
            )
            .message_attributes("Priority", Self::string_attribute(message.priority.as_str())?)
            .send()
            .await
            .map_err(|e| NotifyHubError::queue_send(e.to_string()))?;

        match result.message_id() {
            Some(id) => {
                debug!(
                    "Enqueued {} notification for user {} (message id: {})",
                    message.notification_type.as_str(),
                    message.user_id,
                    id
                );
                Ok(id.to_string())
            }
            None => Err(NotifyHubError::queue_send(
                "Queue did not return a message id",
            )),
        }
    }

    fn destination_name(&self) -> &str {
        &self.destination_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_name_of() {
        assert_eq!(
            destination_name_of("https://sqs.us-east-1.amazonaws.com/000000000000/notifications"),
            "notifications"
        );
        assert_eq!(
            destination_name_of("https://sqs.us-east-1.amazonaws.com/000000000000/notifications/"),
            "notifications"
        );
    }
}
