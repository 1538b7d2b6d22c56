use serde::Serialize;
use ts_rs::TS;

/// 健康检查响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "system.ts")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: i64,
    pub queue: QueueHealth,
}

/// 队列连接概要（只输出队列名，不透出完整 URL）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "system.ts")]
pub struct QueueHealth {
    pub backend: &'static str,
    pub destination: String,
}
