//! CreateReplyHandler - Command handler for replying to a post.

use std::sync::Arc;

use tracing::{debug, info};

use super::load_forum;
use crate::application::snapshot::save_snapshot;
use crate::domain::foundation::{CommandContext, DomainError, PostId, ReplyId};
use crate::ports::{StateStorage, StorageKey};

/// Command to reply under a post.
#[derive(Debug, Clone)]
pub struct CreateReplyCommand {
    pub post_id: PostId,
    pub content: String,
}

/// Result of a successful reply.
#[derive(Debug, Clone)]
pub struct CreateReplyResult {
    pub reply_id: ReplyId,
    pub reply_count: usize,
}

/// Handler for creating replies.
pub struct CreateReplyHandler {
    storage: Arc<dyn StateStorage>,
}

impl CreateReplyHandler {
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(
        &self,
        cmd: CreateReplyCommand,
        ctx: CommandContext,
    ) -> Result<CreateReplyResult, DomainError> {
        let mut forum = load_forum(self.storage.as_ref()).await;

        let reply_id = forum
            .create_reply(cmd.post_id, cmd.content, ctx.issued_at)
            .map_err(|e| {
                debug!(post_id = %cmd.post_id, error = %e, "Reply rejected");
                DomainError::from(e)
            })?;

        save_snapshot(self.storage.as_ref(), StorageKey::CommunityPosts, &forum).await?;

        let reply_count = forum
            .post(cmd.post_id)
            .map(|p| p.replies.len())
            .unwrap_or_default();

        info!(
            source = ctx.source().unwrap_or("unknown"),
            post_id = %cmd.post_id,
            reply_id = %reply_id,
            "Reply created"
        );

        Ok(CreateReplyResult {
            reply_id,
            reply_count,
        })
    }
}
