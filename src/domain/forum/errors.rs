//! Forum-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, PostId, ReplyId, ValidationError};

/// Errors raised by forum commands. The forum is unchanged when one occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForumError {
    #[error("Post content cannot be empty")]
    EmptyContent,

    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Reply {reply_id} not found on post {post_id}")]
    ReplyNotFound { post_id: PostId, reply_id: ReplyId },
}

impl From<ForumError> for DomainError {
    fn from(err: ForumError) -> Self {
        let message = err.to_string();
        match err {
            ForumError::EmptyContent => ValidationError::empty_field("content").into(),
            ForumError::PostNotFound(id) => {
                DomainError::new(ErrorCode::PostNotFound, message)
                    .with_detail("post_id", id.to_string())
            }
            ForumError::ReplyNotFound { post_id, reply_id } => {
                DomainError::new(ErrorCode::ReplyNotFound, message)
                    .with_detail("post_id", post_id.to_string())
                    .with_detail("reply_id", reply_id.to_string())
            }
        }
    }
}
