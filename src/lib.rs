//! NotifyHub - 通知分发平台后端服务
//!
//! 基于 Actix Web 构建的通知入队网关，负责把经过认证和校验的通知请求
//! 推送到外部持久化消息队列（AWS SQS），消费端由下游系统负责。
//!
//! # 架构
//! - `cache`: 缓存层（Moka/Redis，用于令牌校验缓存）
//! - `config`: 配置管理
//! - `errors`: 统一错误处理
//! - `middlewares`: 认证授权与限流中间件
//! - `models`: 数据模型定义
//! - `queue`: 消息队列客户端（AWS SQS）
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 业务逻辑层
//! - `utils`: 工具函数

pub mod cache;
pub mod config;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod queue;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod utils;
