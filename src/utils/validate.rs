/// 批量入队的条数上限
pub const MAX_BATCH_SIZE: usize = 10;

/// 标题长度上限（字符数）
pub const MAX_TITLE_LENGTH: usize = 200;

/// 正文长度上限（字符数）
pub const MAX_BODY_LENGTH: usize = 2000;

pub fn validate_title(title: &str) -> Result<(), &'static str> {
    // 标题校验：非空且不超过上限（按字符计，不按字节）
    if title.trim().is_empty() {
        return Err("Title must not be empty");
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err("Title must not exceed 200 characters");
    }
    Ok(())
}

pub fn validate_body(body: &str) -> Result<(), &'static str> {
    if body.trim().is_empty() {
        return Err("Body must not be empty");
    }
    if body.chars().count() > MAX_BODY_LENGTH {
        return Err("Body must not exceed 2000 characters");
    }
    Ok(())
}

pub fn validate_recipient_id(user_id: i64) -> Result<(), &'static str> {
    if user_id <= 0 {
        return Err("Recipient user id must be a positive integer");
    }
    Ok(())
}

/// 批量大小校验：1 <= n <= 10
///
/// 超限和空批次都在任何队列调用之前拒绝。
pub fn validate_batch_size(len: usize) -> Result<(), &'static str> {
    if len == 0 {
        return Err("Batch must contain at least one notification");
    }
    if len > MAX_BATCH_SIZE {
        return Err("Batch must not exceed 10 notifications");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_title_and_body() {
        assert!(validate_title("评论回复").is_ok());
        assert!(validate_body("有人回复了你的评论").is_ok());
    }

    #[test]
    fn test_empty_title_rejected() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn test_title_length_counts_chars_not_bytes() {
        // 200 个多字节字符仍然合法
        let title: String = "通".repeat(MAX_TITLE_LENGTH);
        assert!(validate_title(&title).is_ok());
        let too_long: String = "通".repeat(MAX_TITLE_LENGTH + 1);
        assert!(validate_title(&too_long).is_err());
    }

    #[test]
    fn test_body_length_limit() {
        let body = "a".repeat(MAX_BODY_LENGTH);
        assert!(validate_body(&body).is_ok());
        let too_long = "a".repeat(MAX_BODY_LENGTH + 1);
        assert!(validate_body(&too_long).is_err());
    }

    #[test]
    fn test_recipient_id_must_be_positive() {
        assert!(validate_recipient_id(1).is_ok());
        assert!(validate_recipient_id(0).is_err());
        assert!(validate_recipient_id(-5).is_err());
    }

    #[test]
    fn test_batch_size_bounds() {
        assert!(validate_batch_size(0).is_err());
        assert!(validate_batch_size(1).is_ok());
        assert!(validate_batch_size(10).is_ok());
        assert!(validate_batch_size(11).is_err());
    }
}
