use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::auth::responses::TokenVerifyResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn handle_verify_token(request: &HttpRequest) -> ActixResult<HttpResponse> {
    // 走到这里说明 RequireJWT 已经验证过令牌
    match RequireJWT::extract_user(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TokenVerifyResponse {
                valid: true,
                user_id: user.id,
                expires_at: user.expires_at,
            },
            "令牌有效",
        ))),
        None => Ok(HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "请先登录"))),
    }
}
