//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite）

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

use crate::domain::message::MessageId;

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// 留言实体（用于持久化）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRecord {
    pub id: MessageId,
    pub body: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl MessageRecord {
    /// created_at 的固定文本格式：RFC 3339，微秒精度，`Z` 后缀
    ///
    /// 定长格式，字典序即时间序
    pub fn created_at_rfc3339(&self) -> String {
        format_timestamp(&self.created_at)
    }
}

/// 时间戳的持久化与序列化格式
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Message Repository Port
///
/// 每个操作都是针对单行的一次原子操作。
/// `update_body` 和 `delete` 直接执行写操作，以受影响行数判断是否存在。
#[async_trait]
pub trait MessageRepositoryPort: Send + Sync {
    /// 插入留言，由存储层分配 id 和 created_at
    async fn create(&self, body: &str, username: &str) -> Result<MessageRecord, RepositoryError>;

    /// 获取所有留言，按 created_at 升序（相同时按 id 升序）
    async fn find_all(&self) -> Result<Vec<MessageRecord>, RepositoryError>;

    /// 根据 ID 查找留言
    async fn find_by_id(&self, id: MessageId) -> Result<Option<MessageRecord>, RepositoryError>;

    /// 更新留言正文，没有匹配行时返回 None
    async fn update_body(
        &self,
        id: MessageId,
        body: &str,
    ) -> Result<Option<MessageRecord>, RepositoryError>;

    /// 删除留言，返回是否删除了一行
    async fn delete(&self, id: MessageId) -> Result<bool, RepositoryError>;
}
