//! Message Queries

use crate::domain::message::MessageId;

/// 获取留言详情查询
#[derive(Debug, Clone)]
pub struct GetMessage {
    pub message_id: MessageId,
}

/// 列出所有留言查询
#[derive(Debug, Clone)]
pub struct ListMessages;
