use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 已认证的会话身份
///
/// 由 RequireJWT 中间件在校验通过后写入请求扩展，
/// 业务层只信任这里的 user_id，不接受客户端自报的发送者。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct AuthUser {
    pub id: i64,
    pub role: String,
    /// token 签发时间（Unix 时间戳）
    pub issued_at: i64,
    /// token 过期时间（Unix 时间戳）
    pub expires_at: i64,
}

impl AuthUser {
    pub fn from_claims(claims: &crate::utils::jwt::Claims) -> Option<Self> {
        let id = claims.sub.parse::<i64>().ok()?;
        Some(Self {
            id,
            role: claims.role.clone(),
            issued_at: claims.iat as i64,
            expires_at: claims.exp as i64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::jwt::Claims;

    #[test]
    fn test_from_claims() {
        let claims = Claims {
            sub: "42".to_string(),
            role: "user".to_string(),
            token_type: "access".to_string(),
            exp: 2_000_000_000,
            iat: 1_000_000_000,
        };
        let user = AuthUser::from_claims(&claims).unwrap();
        assert_eq!(user.id, 42);
        assert_eq!(user.role, "user");
    }

    #[test]
    fn test_from_claims_rejects_non_numeric_subject() {
        let claims = Claims {
            sub: "not-a-number".to_string(),
            role: "user".to_string(),
            token_type: "access".to_string(),
            exp: 0,
            iat: 0,
        };
        assert!(AuthUser::from_claims(&claims).is_none());
    }
}
