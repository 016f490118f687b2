//! CreatePostHandler - Command handler for publishing a post.

use std::sync::Arc;

use tracing::{debug, info};

use super::load_forum;
use crate::application::snapshot::save_snapshot;
use crate::domain::foundation::{CommandContext, DomainError, PostId};
use crate::domain::forum::{Forum, ForumError, Post};
use crate::ports::{StateStorage, StorageKey};

/// Command to publish a post.
#[derive(Debug, Clone)]
pub struct CreatePostCommand {
    pub content: String,
}

/// Result of a successful post.
#[derive(Debug, Clone)]
pub struct CreatePostResult {
    pub post: Post,
}

/// Handler for creating posts.
pub struct CreatePostHandler {
    storage: Arc<dyn StateStorage>,
}

impl CreatePostHandler {
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(
        &self,
        cmd: CreatePostCommand,
        ctx: CommandContext,
    ) -> Result<CreatePostResult, DomainError> {
        let mut forum = load_forum(self.storage.as_ref()).await;

        let post_id = forum
            .create_post(cmd.content, ctx.issued_at)
            .map_err(|e| {
                debug!(error = %e, "Post rejected");
                DomainError::from(e)
            })?;

        save_snapshot(self.storage.as_ref(), StorageKey::CommunityPosts, &forum).await?;

        info!(
            source = ctx.source().unwrap_or("unknown"),
            post_id = %post_id,
            posts = forum.posts().len(),
            "Post created"
        );

        let post = find_post(&forum, post_id)?;
        Ok(CreatePostResult { post })
    }
}

fn find_post(forum: &Forum, id: PostId) -> Result<Post, DomainError> {
    forum
        .post(id)
        .cloned()
        .ok_or_else(|| ForumError::PostNotFound(id).into())
}
