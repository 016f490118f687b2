//! Post and Reply entities.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PostId, ReplyId, Timestamp};

/// Display name attached to every post and reply.
pub const ANONYMOUS_USERNAME: &str = "Anonymous User";

/// A reply under a community post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: ReplyId,
    pub username: String,
    pub content: String,
    pub date: Timestamp,
    pub likes: u32,
    pub user_liked: bool,
}

impl Reply {
    pub fn new(content: String, date: Timestamp) -> Self {
        Self {
            id: ReplyId::new(),
            username: ANONYMOUS_USERNAME.to_string(),
            content,
            date,
            likes: 0,
            user_liked: false,
        }
    }

    /// Flips the local user's like and returns the new like state.
    pub fn toggle_like(&mut self) -> bool {
        toggle(&mut self.likes, &mut self.user_liked)
    }
}

/// A top-level community post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub username: String,
    pub content: String,
    pub date: Timestamp,
    pub likes: u32,
    pub user_liked: bool,
    #[serde(default)]
    pub replies: Vec<Reply>,
}

impl Post {
    pub fn new(content: String, date: Timestamp) -> Self {
        Self {
            id: PostId::new(),
            username: ANONYMOUS_USERNAME.to_string(),
            content,
            date,
            likes: 0,
            user_liked: false,
            replies: Vec::new(),
        }
    }

    /// Flips the local user's like and returns the new like state.
    pub fn toggle_like(&mut self) -> bool {
        toggle(&mut self.likes, &mut self.user_liked)
    }

    pub fn reply_mut(&mut self, id: ReplyId) -> Option<&mut Reply> {
        self.replies.iter_mut().find(|r| r.id == id)
    }
}

fn toggle(likes: &mut u32, user_liked: &mut bool) -> bool {
    if *user_liked {
        *likes = likes.saturating_sub(1);
    } else {
        *likes = likes.saturating_add(1);
    }
    *user_liked = !*user_liked;
    *user_liked
}
