//! 消息队列客户端
//!
//! 入队即完成（fire-and-forget）：不做重试、退避、去重和排序，
//! 失败的消息由调用方按条目结果自行决定如何处理，
//! 死信与重投递属于队列消费端的职责，不在本仓库内。

pub mod sqs;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::notifications::entities::EnqueuedMessage;

/// 通知队列统一接口
///
/// send 成功时返回队列服务分配的消息 ID；
/// 发送成功但没有返回消息 ID 同样视为错误。
#[async_trait::async_trait]
pub trait NotificationQueue: Send + Sync {
    async fn send(&self, message: &EnqueuedMessage) -> Result<String>;

    /// 目标队列的可读名称（仅用于日志和健康检查，不含完整 URL）
    fn destination_name(&self) -> &str;
}

/// 根据配置创建队列客户端
///
/// 配置在 AppConfig::validate 阶段已经保证 region/url 非空，
/// 这里失败只可能是 AWS 凭证或网络环境问题，由启动流程终止进程。
pub async fn create_queue_client() -> Result<Arc<dyn NotificationQueue>> {
    let queue = sqs::SqsQueue::from_app_config().await?;
    Ok(Arc::new(queue))
}
