//! Domain Layer - 领域层
//!
//! 限界上下文:
//! - Message Context: 留言

pub mod message;
