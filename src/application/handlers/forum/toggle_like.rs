//! ToggleLikeHandler - Command handler for liking posts and replies.

use std::sync::Arc;

use tracing::{debug, info};

use super::load_forum;
use crate::application::snapshot::save_snapshot;
use crate::domain::foundation::{CommandContext, DomainError, PostId, ReplyId};
use crate::ports::{StateStorage, StorageKey};

/// What the like applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeTarget {
    Post(PostId),
    Reply { post_id: PostId, reply_id: ReplyId },
}

/// Command to flip the local user's like.
#[derive(Debug, Clone)]
pub struct ToggleLikeCommand {
    pub target: LikeTarget,
}

/// Like state after the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleLikeResult {
    pub liked: bool,
    pub likes: u32,
}

/// Handler for toggling likes.
pub struct ToggleLikeHandler {
    storage: Arc<dyn StateStorage>,
}

impl ToggleLikeHandler {
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(
        &self,
        cmd: ToggleLikeCommand,
        ctx: CommandContext,
    ) -> Result<ToggleLikeResult, DomainError> {
        let mut forum = load_forum(self.storage.as_ref()).await;

        let toggled = match cmd.target {
            LikeTarget::Post(post_id) => forum.toggle_like_post(post_id).map(|liked| {
                let likes = forum.post(post_id).map(|p| p.likes).unwrap_or_default();
                ToggleLikeResult { liked, likes }
            }),
            LikeTarget::Reply { post_id, reply_id } => forum
                .toggle_like_reply(post_id, reply_id)
                .map(|liked| {
                    let likes = forum
                        .post(post_id)
                        .and_then(|p| p.replies.iter().find(|r| r.id == reply_id))
                        .map(|r| r.likes)
                        .unwrap_or_default();
                    ToggleLikeResult { liked, likes }
                }),
        };

        let result = toggled.map_err(|e| {
            debug!(like = ?cmd.target, error = %e, "Like rejected");
            DomainError::from(e)
        })?;

        save_snapshot(self.storage.as_ref(), StorageKey::CommunityPosts, &forum).await?;

        info!(
            source = ctx.source().unwrap_or("unknown"),
            like = ?cmd.target,
            liked = result.liked,
            likes = result.likes,
            "Like toggled"
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStateStorage;
    use crate::domain::foundation::{ErrorCode, Timestamp};
    use crate::domain::forum::Forum;

    fn ctx() -> CommandContext {
        CommandContext::at(Timestamp::from_unix_secs(1_709_283_600))
    }

    async fn seeded() -> (Arc<InMemoryStateStorage>, PostId, ReplyId) {
        let storage = Arc::new(InMemoryStateStorage::new());
        let mut forum = Forum::new();
        let post_id = forum.create_post("Gratitude thread", ctx().issued_at).unwrap();
        let reply_id = forum
            .create_reply(post_id, "My dog", ctx().issued_at)
            .unwrap();
        save_snapshot(storage.as_ref(), StorageKey::CommunityPosts, &forum)
            .await
            .unwrap();
        (storage, post_id, reply_id)
    }

    #[tokio::test]
    async fn like_then_unlike_post() {
        let (storage, post_id, _) = seeded().await;
        let handler = ToggleLikeHandler::new(storage.clone());
        let cmd = ToggleLikeCommand {
            target: LikeTarget::Post(post_id),
        };

        let liked = handler.handle(cmd.clone(), ctx()).await.unwrap();
        assert_eq!(liked, ToggleLikeResult { liked: true, likes: 1 });

        let unliked = handler.handle(cmd, ctx()).await.unwrap();
        assert_eq!(unliked, ToggleLikeResult { liked: false, likes: 0 });

        let stored = storage.load(StorageKey::CommunityPosts).await.unwrap().unwrap();
        assert_eq!(stored[0]["likes"], 0);
        assert_eq!(stored[0]["userLiked"], false);
    }

    #[tokio::test]
    async fn like_reply_leaves_post_untouched() {
        let (storage, post_id, reply_id) = seeded().await;
        let handler = ToggleLikeHandler::new(storage.clone());

        let result = handler
            .handle(
                ToggleLikeCommand {
                    target: LikeTarget::Reply { post_id, reply_id },
                },
                ctx(),
            )
            .await
            .unwrap();

        assert_eq!(result, ToggleLikeResult { liked: true, likes: 1 });
        let stored = storage.load(StorageKey::CommunityPosts).await.unwrap().unwrap();
        assert_eq!(stored[0]["likes"], 0);
        assert_eq!(stored[0]["replies"][0]["userLiked"], true);
    }

    #[tokio::test]
    async fn unknown_reply_is_not_found() {
        let (storage, post_id, _) = seeded().await;
        let handler = ToggleLikeHandler::new(storage);

        let err = handler
            .handle(
                ToggleLikeCommand {
                    target: LikeTarget::Reply {
                        post_id,
                        reply_id: ReplyId::new(),
                    },
                },
                ctx(),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ReplyNotFound);
    }
}
