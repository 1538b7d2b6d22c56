use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::notifications::requests::{BatchEnqueueRequest, EnqueueNotificationRequest};
use crate::services::NotificationService;

// 懒加载的全局 NotificationService 实例
static NOTIFICATION_SERVICE: Lazy<NotificationService> =
    Lazy::new(NotificationService::new_lazy);

pub async fn enqueue(
    req: HttpRequest,
    payload: web::Json<EnqueueNotificationRequest>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.enqueue(payload.into_inner(), &req).await
}

pub async fn batch_enqueue(
    req: HttpRequest,
    payload: web::Json<BatchEnqueueRequest>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .batch_enqueue(payload.into_inner(), &req)
        .await
}

// 配置路由
// RequireJWT 在外层：限流键优先使用认证后的用户 ID
pub fn configure_notification_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notifications")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .wrap(RateLimit::enqueue())
                    .route(web::post().to(enqueue)),
            )
            .service(
                web::resource("/batch")
                    .wrap(RateLimit::batch_enqueue())
                    .route(web::post().to(batch_enqueue)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test, web};

    use crate::cache::ObjectCache;
    use crate::cache::object_cache::moka::MokaCacheWrapper;
    use crate::middlewares::RequireJWT;
    use crate::queue::NotificationQueue;
    use crate::services::notifications::test_support::MockQueue;
    use crate::utils::jwt::JwtUtils;

    macro_rules! test_app {
        ($queue:expr) => {{
            let cache: Arc<dyn ObjectCache> =
                Arc::new(MokaCacheWrapper::new().expect("moka cache for tests"));
            let queue: Arc<dyn NotificationQueue> = $queue;
            test::init_service(
                App::new()
                    .app_data(web::Data::new(queue))
                    .app_data(web::Data::new(cache))
                    .service(
                        web::scope("/api/v1/notifications")
                            .wrap(RequireJWT)
                            .route("", web::post().to(super::enqueue))
                            .route("/batch", web::post().to(super::batch_enqueue)),
                    ),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_unauthenticated_post_is_rejected_by_middleware() {
        let queue = Arc::new(MockQueue::new());
        let app = test_app!(queue.clone());

        let request = test::TestRequest::post()
            .uri("/api/v1/notifications")
            .set_json(serde_json::json!({
                "type": "mention",
                "user_id": 7,
                "title": "hi",
                "body": "hello"
            }))
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::UNAUTHORIZED
        );
        // 中间件拒绝发生在任何队列调用之前
        assert_eq!(queue.sent_count(), 0);
    }

    #[actix_web::test]
    async fn test_authenticated_post_enqueues_through_full_stack() {
        let queue = Arc::new(MockQueue::new());
        let app = test_app!(queue.clone());

        let token = JwtUtils::generate_access_token(3, "user").unwrap();
        let request = test::TestRequest::post()
            .uri("/api/v1/notifications")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(serde_json::json!({
                "type": "comment-reply",
                "user_id": 7,
                "title": "新的评论回复",
                "body": "有人回复了你的评论"
            }))
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::OK);
        assert_eq!(queue.sent_count(), 1);
        assert_eq!(queue.sent.lock().unwrap()[0].sender_user_id, 3);
    }

    #[actix_web::test]
    async fn test_unknown_notification_type_is_bad_request() {
        let queue = Arc::new(MockQueue::new());
        let app = test_app!(queue.clone());

        let token = JwtUtils::generate_access_token(3, "user").unwrap();
        let request = test::TestRequest::post()
            .uri("/api/v1/notifications")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .set_json(serde_json::json!({
                "type": "broadcast",
                "user_id": 7,
                "title": "hi",
                "body": "hello"
            }))
            .to_request();

        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
        assert_eq!(queue.sent_count(), 0);
    }
}
