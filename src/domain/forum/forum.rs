//! Forum aggregate: the locally stored community feed.

use serde::{Deserialize, Serialize};

use super::{ForumError, Post, Reply};
use crate::domain::foundation::{PostId, ReplyId, Timestamp};

/// All posts, newest first.
///
/// # Invariants
///
/// - post and reply ids are unique
/// - new posts go to the front; replies are appended to their post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forum {
    posts: Vec<Post>,
}

impl Forum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// Publishes a new post at the top of the feed.
    ///
    /// # Errors
    ///
    /// - `EmptyContent` if the text is blank
    pub fn create_post(
        &mut self,
        content: impl Into<String>,
        now: Timestamp,
    ) -> Result<PostId, ForumError> {
        let content = non_blank(content.into())?;
        let post = Post::new(content, now);
        let id = post.id;
        self.posts.insert(0, post);
        Ok(id)
    }

    /// Adds a reply under an existing post.
    ///
    /// # Errors
    ///
    /// - `EmptyContent` if the text is blank
    /// - `PostNotFound` if the post does not exist
    pub fn create_reply(
        &mut self,
        post_id: PostId,
        content: impl Into<String>,
        now: Timestamp,
    ) -> Result<ReplyId, ForumError> {
        let content = non_blank(content.into())?;
        let post = self.post_mut(post_id)?;
        let reply = Reply::new(content, now);
        let id = reply.id;
        post.replies.push(reply);
        Ok(id)
    }

    /// Likes or unlikes a post. Returns the new like state.
    pub fn toggle_like_post(&mut self, post_id: PostId) -> Result<bool, ForumError> {
        Ok(self.post_mut(post_id)?.toggle_like())
    }

    /// Likes or unlikes a reply. Returns the new like state.
    pub fn toggle_like_reply(
        &mut self,
        post_id: PostId,
        reply_id: ReplyId,
    ) -> Result<bool, ForumError> {
        self.post_mut(post_id)?
            .reply_mut(reply_id)
            .map(Reply::toggle_like)
            .ok_or(ForumError::ReplyNotFound { post_id, reply_id })
    }

    fn post_mut(&mut self, id: PostId) -> Result<&mut Post, ForumError> {
        self.posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(ForumError::PostNotFound(id))
    }
}

fn non_blank(content: String) -> Result<String, ForumError> {
    if content.trim().is_empty() {
        Err(ForumError::EmptyContent)
    } else {
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Timestamp {
        Timestamp::from_unix_secs(1_709_283_600)
    }

    #[test]
    fn new_posts_go_to_the_front() {
        let mut forum = Forum::new();
        let first = forum.create_post("first", now()).unwrap();
        let second = forum.create_post("second", now().plus_secs(5)).unwrap();

        let ids: Vec<_> = forum.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[test]
    fn blank_post_is_rejected() {
        let mut forum = Forum::new();
        assert_eq!(forum.create_post("  ", now()), Err(ForumError::EmptyContent));
        assert!(forum.posts().is_empty());
    }

    #[test]
    fn replies_are_appended_in_order() {
        let mut forum = Forum::new();
        let post_id = forum.create_post("How do you unwind?", now()).unwrap();
        forum.create_reply(post_id, "Long walks", now()).unwrap();
        forum.create_reply(post_id, "Tea", now()).unwrap();

        let replies: Vec<_> = forum
            .post(post_id)
            .unwrap()
            .replies
            .iter()
            .map(|r| r.content.as_str())
            .collect();
        assert_eq!(replies, vec!["Long walks", "Tea"]);
    }

    #[test]
    fn reply_to_unknown_post_fails() {
        let mut forum = Forum::new();
        let missing = PostId::new();
        assert_eq!(
            forum.create_reply(missing, "hello", now()),
            Err(ForumError::PostNotFound(missing))
        );
    }

    #[test]
    fn blank_reply_is_rejected_before_lookup() {
        let mut forum = Forum::new();
        assert_eq!(
            forum.create_reply(PostId::new(), "", now()),
            Err(ForumError::EmptyContent)
        );
    }

    #[test]
    fn toggle_like_post_flips_and_counts() {
        let mut forum = Forum::new();
        let id = forum.create_post("hi", now()).unwrap();
        assert_eq!(forum.toggle_like_post(id), Ok(true));
        assert_eq!(forum.post(id).unwrap().likes, 1);
        assert_eq!(forum.toggle_like_post(id), Ok(false));
        assert_eq!(forum.post(id).unwrap().likes, 0);
    }

    #[test]
    fn toggle_like_reply_targets_one_reply() {
        let mut forum = Forum::new();
        let post_id = forum.create_post("hi", now()).unwrap();
        let a = forum.create_reply(post_id, "a", now()).unwrap();
        let b = forum.create_reply(post_id, "b", now()).unwrap();

        assert_eq!(forum.toggle_like_reply(post_id, b), Ok(true));

        let post = forum.post(post_id).unwrap();
        assert_eq!(post.likes, 0);
        assert_eq!(post.replies.iter().find(|r| r.id == a).unwrap().likes, 0);
        assert_eq!(post.replies.iter().find(|r| r.id == b).unwrap().likes, 1);
    }

    #[test]
    fn toggle_like_unknown_reply_fails() {
        let mut forum = Forum::new();
        let post_id = forum.create_post("hi", now()).unwrap();
        let reply_id = ReplyId::new();
        assert_eq!(
            forum.toggle_like_reply(post_id, reply_id),
            Err(ForumError::ReplyNotFound { post_id, reply_id })
        );
    }
}
