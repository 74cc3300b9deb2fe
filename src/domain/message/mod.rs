//! Message Context - 留言限界上下文
//!
//! 职责:
//! - 留言正文与用户名的输入约束

mod errors;
mod value_objects;

pub use errors::MessageError;
pub use value_objects::{MessageBody, MessageId, Username};
