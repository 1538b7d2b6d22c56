pub mod profile;
pub mod verify;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

pub struct AuthService;

impl AuthService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 校验当前请求携带的 access token
    pub async fn verify_token(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        verify::handle_verify_token(request).await
    }

    // 获取当前会话信息
    pub async fn get_session(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::handle_get_session(request).await
    }
}
