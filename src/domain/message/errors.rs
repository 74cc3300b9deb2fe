//! Message Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("留言正文不能为空")]
    EmptyBody,

    #[error("用户名不能为空")]
    EmptyUsername,
}
