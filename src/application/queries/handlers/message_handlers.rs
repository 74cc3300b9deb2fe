//! Message Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{MessageRecord, MessageRepositoryPort};
use crate::application::queries::{GetMessage, ListMessages};
use crate::domain::message::MessageId;

// ============================================================================
// Response DTOs
// ============================================================================

/// 留言详情响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub id: MessageId,
    pub body: String,
    pub username: String,
    pub created_at: String,
}

impl From<MessageRecord> for MessageResponse {
    fn from(record: MessageRecord) -> Self {
        let created_at = record.created_at_rfc3339();
        Self {
            id: record.id,
            body: record.body,
            username: record.username,
            created_at,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetMessage Handler
pub struct GetMessageHandler {
    message_repo: Arc<dyn MessageRepositoryPort>,
}

impl GetMessageHandler {
    pub fn new(message_repo: Arc<dyn MessageRepositoryPort>) -> Self {
        Self { message_repo }
    }

    pub async fn handle(&self, query: GetMessage) -> Result<MessageResponse, ApplicationError> {
        let message = self
            .message_repo
            .find_by_id(query.message_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Message", query.message_id))?;

        Ok(MessageResponse::from(message))
    }
}

/// ListMessages Handler
pub struct ListMessagesHandler {
    message_repo: Arc<dyn MessageRepositoryPort>,
}

impl ListMessagesHandler {
    pub fn new(message_repo: Arc<dyn MessageRepositoryPort>) -> Self {
        Self { message_repo }
    }

    pub async fn handle(
        &self,
        _query: ListMessages,
    ) -> Result<Vec<MessageResponse>, ApplicationError> {
        let messages = self.message_repo.find_all().await?;
        Ok(messages.into_iter().map(MessageResponse::from).collect())
    }
}
