//! HTTP Routes
//!
//! API Endpoints:
//! - /ping              GET     健康检查
//! - /messages          GET     列出所有留言
//! - /messages          POST    创建留言
//! - /messages/:id      GET     获取留言
//! - /messages/:id      PATCH   更新留言正文
//! - /messages/:id      DELETE  删除留言

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(message_routes())
}

/// Message 路由
fn message_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/messages",
            get(handlers::list_messages).post(handlers::create_message),
        )
        .route(
            "/messages/:id",
            get(handlers::get_message)
                .patch(handlers::update_message)
                .delete(handlers::delete_message),
        )
}
