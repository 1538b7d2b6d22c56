use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::{NotificationService, build_message, validate_notification};
use crate::middlewares::RequireJWT;
use crate::models::notifications::requests::EnqueueNotificationRequest;
use crate::models::notifications::responses::EnqueueResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_enqueue(
    service: &NotificationService,
    payload: EnqueueNotificationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    // 发送者身份只取认证会话，不接受客户端自报
    let sender = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "请先登录")));
        }
    };

    // 字段校验失败时不产生任何队列调用
    if let Err((code, msg)) = validate_notification(&payload) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(code, msg)));
    }

    let queue = service.get_queue(request);
    let message = build_message(payload, sender.id);
    let timestamp = message.timestamp;

    match queue.send(&message).await {
        Ok(message_id) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            EnqueueResponse {
                success: true,
                message_id,
                timestamp,
            },
            "通知已入队",
        ))),
        Err(e) => {
            // 详细原因只进服务端日志，给客户端的是通用错误
            error!(
                "Failed to enqueue {} notification for user {}: {}",
                message.notification_type.as_str(),
                message.user_id,
                e
            );
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "通知发送失败，请稍后重试",
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::body::to_bytes;
    use actix_web::test::TestRequest;
    use actix_web::{HttpMessage, HttpRequest};

    use super::super::test_support::MockQueue;
    use super::*;
    use crate::models::auth::entities::AuthUser;
    use crate::models::notifications::entities::{NotificationType, Priority};

    fn authenticated_request(user_id: i64) -> HttpRequest {
        let request = TestRequest::default().to_http_request();
        request.extensions_mut().insert(AuthUser {
            id: user_id,
            role: "user".to_string(),
            issued_at: chrono::Utc::now().timestamp(),
            expires_at: chrono::Utc::now().timestamp() + 1800,
        });
        request
    }

    fn payload(user_id: i64) -> EnqueueNotificationRequest {
        EnqueueNotificationRequest {
            notification_type: NotificationType::CommentReply,
            user_id,
            title: "新的评论回复".to_string(),
            body: "有人回复了你的评论".to_string(),
            metadata: None,
            priority: Priority::Normal,
        }
    }

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn test_enqueue_returns_message_id_and_fresh_timestamp() {
        let queue = Arc::new(MockQueue::new());
        let service = NotificationService::with_queue(queue.clone());
        let request = authenticated_request(3);

        let call_start = chrono::Utc::now();
        let response = handle_enqueue(&service, payload(7), &request).await.unwrap();
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["code"], 0);
        assert_eq!(json["data"]["success"], true);
        assert_eq!(json["data"]["message_id"], "msg-7");

        let timestamp: chrono::DateTime<chrono::Utc> =
            serde_json::from_value(json["data"]["timestamp"].clone()).unwrap();
        assert!(timestamp >= call_start);
    }

    #[actix_web::test]
    async fn test_enqueue_stamps_sender_from_session() {
        let queue = Arc::new(MockQueue::new());
        let service = NotificationService::with_queue(queue.clone());
        let request = authenticated_request(3);

        handle_enqueue(&service, payload(7), &request).await.unwrap();

        let sent = queue.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].sender_user_id, 3);
        assert_eq!(sent[0].user_id, 7);
    }

    #[actix_web::test]
    async fn test_enqueue_unauthenticated_has_no_queue_side_effects() {
        let queue = Arc::new(MockQueue::new());
        let service = NotificationService::with_queue(queue.clone());
        let request = TestRequest::default().to_http_request();

        let response = handle_enqueue(&service, payload(7), &request).await.unwrap();
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
        assert_eq!(queue.sent_count(), 0);
    }

    #[actix_web::test]
    async fn test_enqueue_invalid_title_rejected_before_queue_call() {
        let queue = Arc::new(MockQueue::new());
        let service = NotificationService::with_queue(queue.clone());
        let request = authenticated_request(3);

        let mut invalid = payload(7);
        invalid.title = String::new();

        let response = handle_enqueue(&service, invalid, &request).await.unwrap();
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(queue.sent_count(), 0);
    }

    #[actix_web::test]
    async fn test_enqueue_queue_failure_surfaces_generic_error() {
        let queue = Arc::new(MockQueue::failing_for([7]));
        let service = NotificationService::with_queue(queue.clone());
        let request = authenticated_request(3);

        let response = handle_enqueue(&service, payload(7), &request).await.unwrap();
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );

        let json = body_json(response).await;
        // 不向客户端透出底层错误详情
        assert!(!json["message"].as_str().unwrap().contains("simulated"));
    }
}
