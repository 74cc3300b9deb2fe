//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod message_repo;

pub use database::*;
pub use message_repo::*;
