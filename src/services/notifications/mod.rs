pub mod batch_enqueue;
pub mod enqueue;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::ErrorCode;
use crate::models::notifications::entities::EnqueuedMessage;
use crate::models::notifications::requests::{BatchEnqueueRequest, EnqueueNotificationRequest};
use crate::queue::NotificationQueue;
use crate::utils::validate::{validate_body, validate_recipient_id, validate_title};

pub struct NotificationService {
    queue: Option<Arc<dyn NotificationQueue>>,
}

impl NotificationService {
    pub fn new_lazy() -> Self {
        Self { queue: None }
    }

    /// 直接注入队列客户端（测试用）
    #[cfg(test)]
    pub fn with_queue(queue: Arc<dyn NotificationQueue>) -> Self {
        Self { queue: Some(queue) }
    }

    pub(crate) fn get_queue(&self, request: &HttpRequest) -> Arc<dyn NotificationQueue> {
        if let Some(queue) = &self.queue {
            queue.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn NotificationQueue>>>()
                .expect("Queue client not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 单条入队
    pub async fn enqueue(
        &self,
        payload: EnqueueNotificationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        enqueue::handle_enqueue(self, payload, request).await
    }

    // 批量入队
    pub async fn batch_enqueue(
        &self,
        payload: BatchEnqueueRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        batch_enqueue::handle_batch_enqueue(self, payload, request).await
    }
}

/// 单条通知的字段校验，任何队列调用之前执行
pub(crate) fn validate_notification(
    payload: &EnqueueNotificationRequest,
) -> Result<(), (ErrorCode, &'static str)> {
    validate_recipient_id(payload.user_id).map_err(|msg| (ErrorCode::RecipientInvalid, msg))?;
    validate_title(&payload.title).map_err(|msg| (ErrorCode::TitleInvalid, msg))?;
    validate_body(&payload.body).map_err(|msg| (ErrorCode::BodyInvalid, msg))?;
    Ok(())
}

/// 构造入队消息：时间戳和发送者由服务端填充
pub(crate) fn build_message(
    payload: EnqueueNotificationRequest,
    sender_user_id: i64,
) -> EnqueuedMessage {
    EnqueuedMessage {
        notification_type: payload.notification_type,
        user_id: payload.user_id,
        title: payload.title,
        body: payload.body,
        metadata: payload.metadata,
        priority: payload.priority,
        timestamp: chrono::Utc::now(),
        sender_user_id,
    }
}
