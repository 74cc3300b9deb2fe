//! SQLite Message Repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{
    format_timestamp, MessageRecord, MessageRepositoryPort, RepositoryError,
};
use crate::domain::message::MessageId;

/// SQLite Message Repository
pub struct SqliteMessageRepository {
    pool: DbPool,
}

impl SqliteMessageRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct MessageRow {
    id: i64,
    body: String,
    username: String,
    created_at: String,
}

impl TryFrom<MessageRow> for MessageRecord {
    type Error = RepositoryError;

    fn try_from(row: MessageRow) -> Result<Self, Self::Error> {
        Ok(MessageRecord {
            id: MessageId::new(row.id),
            body: row.body,
            username: row.username,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| RepositoryError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl MessageRepositoryPort for SqliteMessageRepository {
    async fn create(&self, body: &str, username: &str) -> Result<MessageRecord, RepositoryError> {
        let row: MessageRow = sqlx::query_as(
            r#"
            INSERT INTO messages (body, username, created_at)
            VALUES (?, ?, ?)
            RETURNING id, body, username, created_at
            "#,
        )
        .bind(body)
        .bind(username)
        .bind(format_timestamp(&Utc::now()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        MessageRecord::try_from(row)
    }

    async fn find_all(&self) -> Result<Vec<MessageRecord>, RepositoryError> {
        let rows: Vec<MessageRow> = sqlx::query_as(
            "SELECT id, body, username, created_at FROM messages ORDER BY created_at ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(MessageRecord::try_from).collect()
    }

    async fn find_by_id(&self, id: MessageId) -> Result<Option<MessageRecord>, RepositoryError> {
        let row: Option<MessageRow> = sqlx::query_as(
            "SELECT id, body, username, created_at FROM messages WHERE id = ?",
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(MessageRecord::try_from).transpose()
    }

    async fn update_body(
        &self,
        id: MessageId,
        body: &str,
    ) -> Result<Option<MessageRecord>, RepositoryError> {
        let row: Option<MessageRow> = sqlx::query_as(
            r#"
            UPDATE messages SET body = ?
            WHERE id = ?
            RETURNING id, body, username, created_at
            "#,
        )
        .bind(body)
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        row.map(MessageRecord::try_from).transpose()
    }

    async fn delete(&self, id: MessageId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
