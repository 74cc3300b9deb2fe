//! Data Transfer Objects

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::{CreateMessage, MessageResponse, UpdateMessageBody};
use crate::domain::message::MessageId;

/// 只有 JSON 字符串才算提供了文本字段，其它类型一律按缺失处理
fn text_field(value: Option<Value>) -> Option<String> {
    match value {
        Some(Value::String(text)) => Some(text),
        _ => None,
    }
}

// ============================================================================
// Message DTOs
// ============================================================================

/// POST /messages 请求体
///
/// 字段缺失、为 null、非字符串或空字符串都视为未提供
#[derive(Debug, Default, Deserialize)]
pub struct CreateMessageRequest {
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub username: Option<Value>,
}

impl CreateMessageRequest {
    pub fn into_command(self) -> CreateMessage {
        CreateMessage {
            body: text_field(self.body),
            username: text_field(self.username),
        }
    }
}

/// PATCH /messages/{id} 请求体
#[derive(Debug, Default, Deserialize)]
pub struct UpdateMessageRequest {
    #[serde(default)]
    pub body: Option<Value>,
}

impl UpdateMessageRequest {
    /// 解析原始请求体；无法解析时按未提供正文处理，
    /// 由 handler 决定返回 404 还是 400
    pub fn from_payload(payload: &[u8]) -> Self {
        serde_json::from_slice(payload).unwrap_or_default()
    }

    pub fn into_command(self, message_id: MessageId) -> UpdateMessageBody {
        UpdateMessageBody {
            message_id,
            body: text_field(self.body),
        }
    }
}

/// 留言 JSON 表示
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageDto {
    pub id: i64,
    pub body: String,
    pub username: String,
    pub created_at: String,
}

impl From<MessageResponse> for MessageDto {
    fn from(message: MessageResponse) -> Self {
        Self {
            id: message.id.value(),
            body: message.body,
            username: message.username,
            created_at: message.created_at,
        }
    }
}

/// DELETE 成功响应
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}

impl DeletedResponse {
    pub fn new() -> Self {
        Self {
            message: "Message deleted",
        }
    }
}

impl Default for DeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_accepts_missing_and_null_fields() {
        let req: CreateMessageRequest = serde_json::from_str(r#"{"username":"bob"}"#).unwrap();
        let command = req.into_command();
        assert!(command.body.is_none());
        assert_eq!(command.username.as_deref(), Some("bob"));

        let req: CreateMessageRequest =
            serde_json::from_str(r#"{"body":null,"username":"bob","extra":1}"#).unwrap();
        assert!(req.into_command().body.is_none());
    }

    #[test]
    fn test_create_request_treats_non_strings_as_missing() {
        let req: CreateMessageRequest =
            serde_json::from_str(r#"{"body":"hi","username":5}"#).unwrap();
        let command = req.into_command();
        assert_eq!(command.body.as_deref(), Some("hi"));
        assert!(command.username.is_none());
    }

    #[test]
    fn test_update_request_from_unusable_payload() {
        let payloads: [&[u8]; 5] = [b"", b"{not json", b"null", b"[]", br#"{"body":5}"#];
        for payload in payloads {
            let command =
                UpdateMessageRequest::from_payload(payload).into_command(MessageId::new(1));
            assert!(command.body.is_none(), "payload {:?}", payload);
        }

        let command = UpdateMessageRequest::from_payload(br#"{"body":"updated"}"#)
            .into_command(MessageId::new(1));
        assert_eq!(command.body.as_deref(), Some("updated"));
    }

    #[test]
    fn test_message_dto_has_all_fields() {
        let dto = MessageDto {
            id: 1,
            body: "hi".to_string(),
            username: "alice".to_string(),
            created_at: "2024-01-01T00:00:00.000000Z".to_string(),
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "body": "hi",
                "username": "alice",
                "created_at": "2024-01-01T00:00:00.000000Z"
            })
        );
    }

    #[test]
    fn test_deleted_response_shape() {
        let value = serde_json::to_value(DeletedResponse::new()).unwrap();
        assert_eq!(value, serde_json::json!({"message": "Message deleted"}));
    }
}
