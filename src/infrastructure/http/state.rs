//! Application State
//!
//! 持有所有 Command/Query Handlers，通过 `Arc<AppState>` 注入路由

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateMessageHandler, DeleteMessageHandler, UpdateMessageBodyHandler,
    // Query handlers
    GetMessageHandler, ListMessagesHandler,
    // Ports
    MessageRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_message_handler: CreateMessageHandler,
    pub update_message_handler: UpdateMessageBodyHandler,
    pub delete_message_handler: DeleteMessageHandler,

    // ========== Query Handlers ==========
    pub get_message_handler: GetMessageHandler,
    pub list_messages_handler: ListMessagesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(message_repo: Arc<dyn MessageRepositoryPort>) -> Self {
        Self {
            create_message_handler: CreateMessageHandler::new(message_repo.clone()),
            update_message_handler: UpdateMessageBodyHandler::new(message_repo.clone()),
            delete_message_handler: DeleteMessageHandler::new(message_repo.clone()),

            get_message_handler: GetMessageHandler::new(message_repo.clone()),
            list_messages_handler: ListMessagesHandler::new(message_repo),
        }
    }
}
