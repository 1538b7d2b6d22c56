//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_notifyhub_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum NotifyHubError {
            $($variant(String),)*
        }

        impl NotifyHubError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(NotifyHubError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(NotifyHubError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(NotifyHubError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl NotifyHubError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        NotifyHubError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_notifyhub_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    Configuration("E003", "Configuration Error"),
    QueueConnection("E004", "Queue Connection Error"),
    QueueSend("E005", "Queue Send Error"),
    Validation("E006", "Validation Error"),
    Serialization("E007", "Serialization Error"),
    Authentication("E008", "Authentication Error"),
    Authorization("E009", "Authorization Error"),
}

impl NotifyHubError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for NotifyHubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for NotifyHubError {}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for NotifyHubError {
    fn from(err: std::io::Error) -> Self {
        NotifyHubError::Configuration(err.to_string())
    }
}

impl From<serde_json::Error> for NotifyHubError {
    fn from(err: serde_json::Error) -> Self {
        NotifyHubError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NotifyHubError>;
