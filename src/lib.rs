//! msgboard - 留言板 HTTP 服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Message Context: 留言正文、用户名约束
//!
//! 应用层 (application/):
//! - Ports: MessageRepositoryPort
//! - Commands: 创建、更新正文、删除
//! - Queries: 详情、列表
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API (axum)
//! - Persistence: SQLite (sqlx)

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
