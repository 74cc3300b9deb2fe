//! Message HTTP Handlers
//!
//! - /messages       GET 列表，POST 创建
//! - /messages/:id   GET 详情，PATCH 更新正文，DELETE 删除

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::application::{DeleteMessage, GetMessage, ListMessages};
use crate::domain::message::MessageId;
use crate::infrastructure::http::dto::{
    CreateMessageRequest, DeletedResponse, MessageDto, UpdateMessageRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 解析路径中的留言 id
///
/// 不是 i64 范围内整数的 id 不可能对应任何留言，按 404 处理
fn message_id(path: Result<Path<i64>, PathRejection>) -> Result<MessageId, ApiError> {
    match path {
        Ok(Path(id)) => Ok(MessageId::new(id)),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unparseable message id");
            Err(ApiError::NotFound("Message not found".to_string()))
        }
    }
}

/// 获取留言列表（按创建时间升序）
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MessageDto>>, ApiError> {
    let result = state.list_messages_handler.handle(ListMessages).await?;

    Ok(Json(result.into_iter().map(MessageDto::from).collect()))
}

/// 创建留言
pub async fn create_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateMessageRequest>,
) -> Result<(StatusCode, Json<MessageDto>), ApiError> {
    let result = state
        .create_message_handler
        .handle(req.into_command())
        .await?;

    Ok((StatusCode::CREATED, Json(MessageDto::from(result))))
}

/// 获取留言详情
pub async fn get_message(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageDto>, ApiError> {
    let query = GetMessage {
        message_id: message_id(path)?,
    };

    let result = state.get_message_handler.handle(query).await?;

    Ok(Json(MessageDto::from(result)))
}

/// 更新留言正文
///
/// 请求体以原始字节接收：缺失或无法解析的请求体不能抢在存在性检查之前拒绝请求
pub async fn update_message(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Bytes,
) -> Result<Json<MessageDto>, ApiError> {
    let command = UpdateMessageRequest::from_payload(&payload).into_command(message_id(path)?);

    let result = state.update_message_handler.handle(command).await?;

    Ok(Json(MessageDto::from(result)))
}

/// 删除留言
pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeletedResponse>, ApiError> {
    let command = DeleteMessage {
        message_id: message_id(path)?,
    };

    state.delete_message_handler.handle(command).await?;

    Ok(Json(DeletedResponse::new()))
}
