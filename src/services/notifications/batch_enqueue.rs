use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use futures_util::future::join_all;
use tracing::error;

use super::{NotificationService, build_message, validate_notification};
use crate::middlewares::RequireJWT;
use crate::models::notifications::requests::BatchEnqueueRequest;
use crate::models::notifications::responses::{BatchEnqueueResponse, BatchItemResult};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::{MAX_BATCH_SIZE, validate_batch_size};

pub async fn handle_batch_enqueue(
    service: &NotificationService,
    payload: BatchEnqueueRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let sender = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "请先登录")));
        }
    };

    // 条数上限按原始请求计（去重之前），空批次同样拒绝
    if let Err(msg) = validate_batch_size(payload.notifications.len()) {
        let code = if payload.notifications.is_empty() {
            ErrorCode::BatchEmpty
        } else {
            ErrorCode::BatchSizeExceeded
        };
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(code, msg)));
    }

    // 同一接收者只入队一次，保留首次出现顺序
    let items = payload.deduplicated();

    // 整批先校验，任何一条非法都在队列调用之前拒绝
    for item in &items {
        if let Err((code, msg)) = validate_notification(item) {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(code, msg)));
        }
    }

    let queue = service.get_queue(request);

    // 并发发出全部条目并等待全部结算：单条失败不中断其他条目，
    // 结果顺序与（去重后的）请求条目一一对应
    let sends = items.into_iter().map(|item| {
        let queue = queue.clone();
        let message = build_message(item, sender.id);
        async move {
            match queue.send(&message).await {
                Ok(message_id) => BatchItemResult::fulfilled(message_id),
                Err(e) => {
                    error!(
                        "Failed to enqueue {} notification for user {} in batch: {}",
                        message.notification_type.as_str(),
                        message.user_id,
                        e
                    );
                    // per-item 错误同样不透出底层详情
                    BatchItemResult::rejected(e.error_type())
                }
            }
        }
    });
    let results = join_all(sends).await;

    debug_assert!(results.len() <= MAX_BATCH_SIZE);

    // 部分失败不影响整体 success，调用方按条目状态处理
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        BatchEnqueueResponse {
            success: true,
            results,
        },
        "批量通知处理完成",
    )))
}
