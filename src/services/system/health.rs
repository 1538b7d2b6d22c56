use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::models::ApiResponse;
use crate::models::AppStartTime;
use crate::models::system::responses::{HealthResponse, QueueHealth};
use crate::queue::NotificationQueue;

pub async fn handle_health(request: &HttpRequest) -> ActixResult<HttpResponse> {
    let uptime_seconds = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| {
            chrono::Utc::now()
                .signed_duration_since(start.start_datetime)
                .num_seconds()
        })
        .unwrap_or(0);

    let destination = request
        .app_data::<web::Data<Arc<dyn NotificationQueue>>>()
        .map(|queue| queue.destination_name().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
            uptime_seconds,
            queue: QueueHealth {
                backend: "sqs",
                destination,
            },
        },
        "服务正常",
    )))
}
