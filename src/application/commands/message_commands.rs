//! Message Commands

use crate::domain::message::MessageId;

/// 创建留言命令
///
/// 字段保持原始输入，校验在 handler 中完成
#[derive(Debug, Clone, Default)]
pub struct CreateMessage {
    pub body: Option<String>,
    pub username: Option<String>,
}

/// 更新留言正文命令
#[derive(Debug, Clone)]
pub struct UpdateMessageBody {
    pub message_id: MessageId,
    pub body: Option<String>,
}

/// 删除留言命令
#[derive(Debug, Clone)]
pub struct DeleteMessage {
    pub message_id: MessageId,
}
