pub mod auth;
pub mod common;
pub mod notifications;
pub mod system;

pub use common::response::ApiResponse;

/// 业务错误码（HTTP 状态码 * 100 + 序号）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 400xx 请求错误
    BadRequest = 40000,
    RecipientInvalid = 40001,
    TitleInvalid = 40002,
    BodyInvalid = 40003,
    BatchEmpty = 40004,
    BatchSizeExceeded = 40005,

    // 401xx 认证错误
    Unauthorized = 40100,

    // 429xx 限流
    RateLimitExceeded = 42900,

    // 500xx 服务器错误
    InternalServerError = 50000,
}

/// 程序启动时间（用于健康检查的运行时长）
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
