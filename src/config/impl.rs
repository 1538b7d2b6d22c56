use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("NOTIFYHUB")
                    .separator("_")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.unix_socket_path", std::env::var("UNIX_SOCKET").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("queue.region", std::env::var("QUEUE_REGION").ok())?
            .set_override_option("queue.url", std::env::var("QUEUE_URL").ok())?
            .set_override_option("cache.redis.url", std::env::var("REDIS_URL").ok())?
            .set_override_option(
                "cache.redis.key_prefix",
                std::env::var("REDIS_KEY_PREFIX").ok(),
            )?
            .set_override_option("cache.redis.default_ttl", std::env::var("REDIS_TTL").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 校验启动必备配置
    ///
    /// 队列区域和目标 URL 缺失时必须在进程启动阶段失败，
    /// 绝不能等到第一次发送时才报错。
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue.region.trim().is_empty() {
            return Err(ConfigError::Message(
                "queue.region is required: set QUEUE_REGION or queue.region in config".to_string(),
            ));
        }
        if self.queue.url.trim().is_empty() {
            return Err(ConfigError::Message(
                "queue.url is required: set QUEUE_URL or queue.url in config".to_string(),
            ));
        }
        if self.jwt.secret.trim().is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret is required: set JWT_SECRET or jwt.secret in config".to_string(),
            ));
        }
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 获取 Unix 套接字路径 (如果配置了)
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{
        AppSettings, CacheConfig, CorsConfig, JwtConfig, LimitConfig, MemoryConfig, QueueConfig,
        RedisConfig, ServerConfig, TimeoutConfig,
    };
    use super::*;

    fn sample_config() -> AppConfig {
        AppConfig {
            app: AppSettings {
                system_name: "NotifyHub".to_string(),
                environment: "development".to_string(),
                log_level: "info".to_string(),
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
                unix_socket_path: String::new(),
                workers: 1,
                max_workers: 4,
                timeouts: TimeoutConfig {
                    client_request: 5000,
                    client_disconnect: 5000,
                    keep_alive: 30,
                },
                limits: LimitConfig {
                    max_payload_size: 262_144,
                },
            },
            jwt: JwtConfig {
                secret: "test-secret".to_string(),
                access_token_expiry: 30,
            },
            queue: QueueConfig {
                region: "us-east-1".to_string(),
                url: "https://sqs.us-east-1.amazonaws.com/000000000000/notifications".to_string(),
            },
            cache: CacheConfig {
                cache_type: "moka".to_string(),
                default_ttl: 300,
                redis: RedisConfig {
                    url: "redis://127.0.0.1:6379".to_string(),
                    key_prefix: "notifyhub:".to_string(),
                    pool_size: 8,
                },
                memory: MemoryConfig {
                    max_capacity: 10_000,
                },
            },
            cors: CorsConfig {
                allowed_origins: vec!["*".to_string()],
                allowed_methods: vec!["GET".to_string(), "POST".to_string()],
                allowed_headers: vec!["*".to_string()],
                max_age: 3600,
            },
        }
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_queue_region() {
        let mut config = sample_config();
        config.queue.region = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("queue.region"));
    }

    #[test]
    fn test_validate_rejects_missing_queue_url() {
        let mut config = sample_config();
        config.queue.url = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("queue.url"));
    }

    #[test]
    fn test_validate_rejects_missing_jwt_secret() {
        let mut config = sample_config();
        config.jwt.secret = String::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("jwt.secret"));
    }

    #[test]
    fn test_server_bind_address() {
        let config = sample_config();
        assert_eq!(config.server_bind_address(), "127.0.0.1:8080");
    }
}
