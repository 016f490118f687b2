//! Forum handlers - Posting, replying, and liking.

mod create_post;
mod create_reply;
mod toggle_like;

pub use create_post::{CreatePostCommand, CreatePostHandler, CreatePostResult};
pub use create_reply::{CreateReplyCommand, CreateReplyHandler, CreateReplyResult};
pub use toggle_like::{LikeTarget, ToggleLikeCommand, ToggleLikeHandler, ToggleLikeResult};

use crate::application::snapshot::load_snapshot;
use crate::domain::forum::Forum;
use crate::ports::{StateStorage, StorageKey};

async fn load_forum(storage: &dyn StateStorage) -> Forum {
    load_snapshot(storage, StorageKey::CommunityPosts)
        .await
        .unwrap_or_default()
}
