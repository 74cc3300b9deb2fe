//! Message Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateMessage, DeleteMessage, UpdateMessageBody};
use crate::application::error::ApplicationError;
use crate::application::ports::MessageRepositoryPort;
use crate::application::queries::handlers::MessageResponse;
use crate::domain::message::{MessageBody, Username};

/// 创建留言时缺少字段的提示
pub const MISSING_BODY_OR_USERNAME: &str = "Missing body or username";

/// 更新留言时缺少正文的提示
pub const NO_BODY_FOR_UPDATE: &str = "No body provided for update";

// ============================================================================
// CreateMessage
// ============================================================================

/// CreateMessage Handler
pub struct CreateMessageHandler {
    message_repo: Arc<dyn MessageRepositoryPort>,
}

impl CreateMessageHandler {
    pub fn new(message_repo: Arc<dyn MessageRepositoryPort>) -> Self {
        Self { message_repo }
    }

    pub async fn handle(&self, command: CreateMessage) -> Result<MessageResponse, ApplicationError> {
        let body = MessageBody::new(command.body.unwrap_or_default());
        let username = Username::new(command.username.unwrap_or_default());
        let (body, username) = match (body, username) {
            (Ok(body), Ok(username)) => (body, username),
            _ => return Err(ApplicationError::validation(MISSING_BODY_OR_USERNAME)),
        };

        let message = self
            .message_repo
            .create(body.as_str(), username.as_str())
            .await?;

        tracing::info!(
            message_id = %message.id,
            username = %message.username,
            "Message created"
        );

        Ok(MessageResponse::from(message))
    }
}

// ============================================================================
// UpdateMessageBody
// ============================================================================

/// UpdateMessageBody Handler
pub struct UpdateMessageBodyHandler {
    message_repo: Arc<dyn MessageRepositoryPort>,
}

impl UpdateMessageBodyHandler {
    pub fn new(message_repo: Arc<dyn MessageRepositoryPort>) -> Self {
        Self { message_repo }
    }

    pub async fn handle(
        &self,
        command: UpdateMessageBody,
    ) -> Result<MessageResponse, ApplicationError> {
        let message_id = command.message_id;

        let body = match MessageBody::new(command.body.unwrap_or_default()) {
            Ok(body) => body,
            Err(_) => {
                // 不存在的留言优先报告 404
                if self.message_repo.find_by_id(message_id).await?.is_none() {
                    return Err(ApplicationError::not_found("Message", message_id));
                }
                return Err(ApplicationError::validation(NO_BODY_FOR_UPDATE));
            }
        };

        let message = self
            .message_repo
            .update_body(message_id, body.as_str())
            .await?
            .ok_or_else(|| ApplicationError::not_found("Message", message_id))?;

        tracing::info!(message_id = %message_id, "Message updated");

        Ok(MessageResponse::from(message))
    }
}

// ============================================================================
// DeleteMessage
// ============================================================================

/// DeleteMessage Handler
pub struct DeleteMessageHandler {
    message_repo: Arc<dyn MessageRepositoryPort>,
}

impl DeleteMessageHandler {
    pub fn new(message_repo: Arc<dyn MessageRepositoryPort>) -> Self {
        Self { message_repo }
    }

    pub async fn handle(&self, command: DeleteMessage) -> Result<(), ApplicationError> {
        let message_id = command.message_id;

        if !self.message_repo.delete(message_id).await? {
            return Err(ApplicationError::not_found("Message", message_id));
        }

        tracing::info!(message_id = %message_id, "Message deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::message::MessageId;
    use crate::infrastructure::persistence::sqlite::{test_pool, SqliteMessageRepository};

    async fn repo() -> Arc<dyn MessageRepositoryPort> {
        Arc::new(SqliteMessageRepository::new(test_pool().await))
    }

    fn create(body: Option<&str>, username: Option<&str>) -> CreateMessage {
        CreateMessage {
            body: body.map(String::from),
            username: username.map(String::from),
        }
    }

    fn assert_validation(result: Result<impl std::fmt::Debug, ApplicationError>, expected: &str) {
        match result {
            Err(ApplicationError::ValidationError(msg)) => assert_eq!(msg, expected),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    fn assert_not_found(result: Result<impl std::fmt::Debug, ApplicationError>) {
        assert!(
            matches!(result, Err(ApplicationError::NotFound { .. })),
            "expected not found, got {:?}",
            result
        );
    }

    #[tokio::test]
    async fn test_create_message() {
        let repo = repo().await;
        let handler = CreateMessageHandler::new(repo.clone());

        let result = handler.handle(create(Some("hi"), Some("alice"))).await.unwrap();

        assert_eq!(result.id, MessageId::new(1));
        assert_eq!(result.body, "hi");
        assert_eq!(result.username, "alice");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_missing_or_empty_fields() {
        let repo = repo().await;
        let handler = CreateMessageHandler::new(repo.clone());

        for command in [
            create(None, Some("bob")),
            create(Some("hi"), None),
            create(Some(""), Some("bob")),
            create(Some("hi"), Some("")),
            create(None, None),
        ] {
            assert_validation(handler.handle(command).await, MISSING_BODY_OR_USERNAME);
        }

        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_changes_only_body() {
        let repo = repo().await;
        let created = repo.create("hi", "alice").await.unwrap();
        let handler = UpdateMessageBodyHandler::new(repo.clone());

        let result = handler
            .handle(UpdateMessageBody {
                message_id: created.id,
                body: Some("updated".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.body, "updated");
        assert_eq!(result.username, "alice");
        assert_eq!(result.created_at, created.created_at_rfc3339());
    }

    #[tokio::test]
    async fn test_update_missing_message() {
        let handler = UpdateMessageBodyHandler::new(repo().await);

        let result = handler
            .handle(UpdateMessageBody {
                message_id: MessageId::new(7),
                body: Some("updated".to_string()),
            })
            .await;
        assert_not_found(result);
    }

    #[tokio::test]
    async fn test_update_without_body_reports_not_found_first() {
        let handler = UpdateMessageBodyHandler::new(repo().await);

        let result = handler
            .handle(UpdateMessageBody {
                message_id: MessageId::new(7),
                body: None,
            })
            .await;
        assert_not_found(result);
    }

    #[tokio::test]
    async fn test_update_without_body_is_rejected() {
        let repo = repo().await;
        let created = repo.create("hi", "alice").await.unwrap();
        let handler = UpdateMessageBodyHandler::new(repo.clone());

        for body in [None, Some(String::new())] {
            let result = handler
                .handle(UpdateMessageBody {
                    message_id: created.id,
                    body,
                })
                .await;
            assert_validation(result, NO_BODY_FOR_UPDATE);
        }

        let stored = repo.find_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.body, "hi");
    }

    #[tokio::test]
    async fn test_delete_message() {
        let repo = repo().await;
        let created = repo.create("hi", "alice").await.unwrap();
        let handler = DeleteMessageHandler::new(repo.clone());

        handler
            .handle(DeleteMessage {
                message_id: created.id,
            })
            .await
            .unwrap();
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());

        let again = handler
            .handle(DeleteMessage {
                message_id: created.id,
            })
            .await;
        assert_not_found(again);
    }
}
