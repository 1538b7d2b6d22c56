use serde::Serialize;
use ts_rs::TS;

use super::entities::AuthUser;

/// 令牌校验响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct TokenVerifyResponse {
    pub valid: bool,
    pub user_id: i64,
    pub expires_at: i64,
}

/// 当前会话信息响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct SessionResponse {
    pub user: AuthUser,
}
