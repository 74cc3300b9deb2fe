//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（MessageRepository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    CreateMessage,
    DeleteMessage,
    UpdateMessageBody,
    // Handlers
    handlers::{
        CreateMessageHandler, DeleteMessageHandler, UpdateMessageBodyHandler,
        MISSING_BODY_OR_USERNAME, NO_BODY_FOR_UPDATE,
    },
};

pub use error::ApplicationError;

pub use ports::{MessageRecord, MessageRepositoryPort, RepositoryError};

pub use queries::{
    GetMessage,
    ListMessages,
    // Handlers
    handlers::{GetMessageHandler, ListMessagesHandler, MessageResponse},
};
